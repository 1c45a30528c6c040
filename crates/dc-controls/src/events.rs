//! Event dispatch
//!
//! A minimal observer: listeners are kept per event type and called
//! synchronously, in registration order.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::input::InputEvent;

/// Interaction transitions emitted by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    HoverOn,
    HoverOff,
    Drag,
    DragStart,
    DragEnd,
    Click,
    DbClick,
}

impl DragEventKind {
    /// Event type name used by listeners
    pub fn as_str(&self) -> &'static str {
        match self {
            DragEventKind::HoverOn => "hoveron",
            DragEventKind::HoverOff => "hoveroff",
            DragEventKind::Drag => "drag",
            DragEventKind::DragStart => "dragstart",
            DragEventKind::DragEnd => "dragend",
            DragEventKind::Click => "click",
            DragEventKind::DbClick => "dbclick",
        }
    }
}

impl fmt::Display for DragEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for DragEventKind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Error parsing an event type name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventTypeError {
    #[error("Unknown event type: {0}")]
    Unknown(String),
}

impl FromStr for DragEventKind {
    type Err = EventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hoveron" => Ok(DragEventKind::HoverOn),
            "hoveroff" => Ok(DragEventKind::HoverOff),
            "drag" => Ok(DragEventKind::Drag),
            "dragstart" => Ok(DragEventKind::DragStart),
            "dragend" => Ok(DragEventKind::DragEnd),
            "click" => Ok(DragEventKind::Click),
            "dbclick" => Ok(DragEventKind::DbClick),
            _ => Err(EventTypeError::Unknown(s.to_string())),
        }
    }
}

/// Payload handed to listeners
#[derive(Debug, Clone, PartialEq)]
pub struct DragEvent {
    pub event_type: String,
    /// Object the event is about
    pub object: Option<Uuid>,
    /// Input event that caused it, when there is one
    pub input: Option<InputEvent>,
}

impl DragEvent {
    pub fn new(kind: DragEventKind, object: Uuid) -> Self {
        Self {
            event_type: kind.as_str().to_string(),
            object: Some(object),
            input: None,
        }
    }

    pub fn with_input(mut self, input: &InputEvent) -> Self {
        self.input = Some(input.clone());
        self
    }

    /// Event with a type and nothing else
    pub fn bare(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            object: None,
            input: None,
        }
    }

    /// Parsed event type; `None` for custom types
    pub fn kind(&self) -> Option<DragEventKind> {
        self.event_type.parse().ok()
    }
}

/// Handle returned when registering a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&DragEvent)>;

/// Event type → ordered listeners
#[derive(Default)]
pub struct EventDispatcher {
    listeners: HashMap<String, Vec<(ListenerId, Listener)>>,
    next_id: u64,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `event_type`
    pub fn add_event_listener(
        &mut self,
        event_type: impl AsRef<str>,
        listener: impl FnMut(&DragEvent) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;

        self.listeners
            .entry(event_type.as_ref().to_string())
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Whether `id` is registered for `event_type`
    pub fn has_event_listener(&self, event_type: impl AsRef<str>, id: ListenerId) -> bool {
        self.listeners
            .get(event_type.as_ref())
            .is_some_and(|list| list.iter().any(|(lid, _)| *lid == id))
    }

    /// Unregister a listener; returns whether it was registered
    pub fn remove_event_listener(&mut self, event_type: impl AsRef<str>, id: ListenerId) -> bool {
        let Some(list) = self.listeners.get_mut(event_type.as_ref()) else {
            return false;
        };

        let before = list.len();
        list.retain(|(lid, _)| *lid != id);
        before != list.len()
    }

    /// Call every listener registered for the event's type
    pub fn dispatch_event(&mut self, event: &DragEvent) {
        if let Some(list) = self.listeners.get_mut(&event.event_type) {
            for (_, listener) in list.iter_mut() {
                listener(event);
            }
        }
    }

    /// Number of listeners for `event_type`
    pub fn listener_count(&self, event_type: impl AsRef<str>) -> usize {
        self.listeners
            .get(event_type.as_ref())
            .map_or(0, |list| list.len())
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&str, usize> = self
            .listeners
            .iter()
            .map(|(ty, list)| (ty.as_str(), list.len()))
            .collect();
        f.debug_struct("EventDispatcher")
            .field("listeners", &counts)
            .finish()
    }
}
