//! The drag controller
//!
//! [`DragControls`] turns pointer and touch input on an [`InputSurface`] into
//! object motion constrained to a plane facing the camera, and reports what
//! happened through [`DragEvent`]s.
//!
//! Handlers live in submodules:
//!
//! - `pointer` - mouse/pen move, press, release and leave
//! - `touch` - touch start, move and end
//! - `legacy` - deprecated entry points kept for old callers

mod legacy;
mod pointer;
mod touch;


use std::time::Duration;

use glam::{Vec2, Vec3};
use uuid::Uuid;

use dc_core::object::{find, find_mut};
use dc_core::{
    BoundsRaycaster, Draggable, Pickable, Plane, Raycaster, SharedCamera, SharedObjects,
    ViewCamera,
};

use crate::clock::{Clock, SystemClock};
use crate::events::{DragEvent, DragEventKind, EventDispatcher, ListenerId};
use crate::input::{CursorStyle, InputEvent, InputKind, InputSurface};
use crate::options::{DragOptions, OptionError};
use crate::state::PointerState;

/// Releases closer together than this count as a double click
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(200);

/// Drag controller over a shared candidate set
pub struct DragControls<O, C, S, R = BoundsRaycaster>
where
    O: Draggable,
    C: ViewCamera,
    S: InputSurface,
    R: Raycaster<O>,
{
    objects: SharedObjects<O>,
    camera: SharedCamera<C>,
    surface: S,
    raycaster: R,
    options: DragOptions,
    enabled: bool,
    state: PointerState,
    dispatcher: EventDispatcher,
    clock: Box<dyn Clock>,
    active: bool,
}

impl<O, C, S> DragControls<O, C, S, BoundsRaycaster>
where
    O: Pickable,
    C: ViewCamera,
    S: InputSurface,
{
    /// Create an activated controller that picks against object bounds.
    ///
    /// `None` options means [`DragOptions::default`].
    pub fn new(
        objects: SharedObjects<O>,
        options: Option<DragOptions>,
        camera: SharedCamera<C>,
        surface: S,
    ) -> Self {
        Self::with_raycaster(objects, options, camera, surface, BoundsRaycaster::new())
    }
}

impl<O, C, S, R> DragControls<O, C, S, R>
where
    O: Draggable,
    C: ViewCamera,
    S: InputSurface,
    R: Raycaster<O>,
{
    /// Create an activated controller with a custom raycaster
    pub fn with_raycaster(
        objects: SharedObjects<O>,
        options: Option<DragOptions>,
        camera: SharedCamera<C>,
        surface: S,
        raycaster: R,
    ) -> Self {
        let options = options.unwrap_or_default();
        tracing::info!(
            "Creating drag controls for {} objects (moveable: {}, cursors: {})",
            objects.read().len(),
            options.moveable,
            options.cursors
        );

        let mut controls = Self {
            objects,
            camera,
            surface,
            raycaster,
            options,
            enabled: true,
            state: PointerState::default(),
            dispatcher: EventDispatcher::new(),
            clock: Box::new(SystemClock),
            active: false,
        };
        controls.activate();
        controls
    }

    /// Replace the time source used for double-click detection
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    // ========== Lifecycle ==========

    /// Register for all pointer and touch input on the surface.
    ///
    /// Calling this while already active does nothing.
    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        for kind in InputKind::ALL {
            self.surface.listen(kind);
        }
        self.active = true;
        tracing::info!("Drag controls activated");
    }

    /// Unregister from the surface and forget hover/drag state.
    ///
    /// An in-progress drag is abandoned where it is; no `dragend` is sent.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        for kind in InputKind::ALL {
            self.surface.unlisten(kind);
        }
        self.active = false;
        self.state = PointerState::default();
        tracing::info!("Drag controls deactivated");
    }

    /// Same as [`Self::deactivate`]
    pub fn dispose(&mut self) {
        self.deactivate();
    }

    /// Whether the controller is registered on its surface
    pub fn is_active(&self) -> bool {
        self.active
    }

    // ========== Input ==========

    /// Feed one input event.
    ///
    /// Returns `true` when the event was consumed: the controller is active
    /// and the camera accepts interaction. Hosts should suppress default
    /// handling (scrolling, text selection) for consumed events.
    pub fn handle_input(&mut self, input: &InputEvent) -> bool {
        if !self.active {
            return false;
        }
        if !self.camera.read().is_active() {
            return false;
        }

        match input {
            InputEvent::PointerMove(event) => self.on_pointer_move(event, input),
            InputEvent::PointerDown(event) => self.on_pointer_down(event, input),
            InputEvent::PointerUp(event) | InputEvent::PointerLeave(event) => {
                self.on_pointer_cancel(event, input)
            }
            InputEvent::TouchMove(event) => self.on_touch_move(event, input),
            InputEvent::TouchStart(event) => self.on_touch_start(event, input),
            InputEvent::TouchEnd(_) => self.on_touch_end(),
        }
        true
    }

    // ========== Options ==========

    /// Current options
    pub fn options(&self) -> &DragOptions {
        &self.options
    }

    /// Mutable options; changes apply from the next event
    pub fn options_mut(&mut self) -> &mut DragOptions {
        &mut self.options
    }

    /// Change an option by name; applies from the next event
    pub fn set_option(&mut self, name: &str, value: bool) -> Result<(), OptionError> {
        self.options.set(name, value)?;
        tracing::debug!("Option {} set to {}", name, value);
        Ok(())
    }

    /// Whether drag motion is allowed
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// While disabled, a dragged object is not moved
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    // ========== Events ==========

    /// Subscribe to an event type; keep the id to unsubscribe
    pub fn add_event_listener(
        &mut self,
        event_type: impl AsRef<str>,
        listener: impl FnMut(&DragEvent) + 'static,
    ) -> ListenerId {
        self.dispatcher.add_event_listener(event_type, listener)
    }

    /// Unsubscribe; returns whether the listener was registered
    pub fn remove_event_listener(&mut self, event_type: impl AsRef<str>, id: ListenerId) -> bool {
        self.dispatcher.remove_event_listener(event_type, id)
    }

    /// Whether `id` is subscribed to `event_type`
    pub fn has_event_listener(&self, event_type: impl AsRef<str>, id: ListenerId) -> bool {
        self.dispatcher.has_event_listener(event_type, id)
    }

    /// Send an event to its listeners
    pub fn dispatch_event(&mut self, event: &DragEvent) {
        self.dispatcher.dispatch_event(event);
    }

    // ========== Accessors ==========

    /// Candidate set
    pub fn objects(&self) -> &SharedObjects<O> {
        &self.objects
    }

    /// Camera used for ray casting
    pub fn camera(&self) -> &SharedCamera<C> {
        &self.camera
    }

    /// Input surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable input surface
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Object under the pointer
    pub fn hovered(&self) -> Option<Uuid> {
        self.state.hovered
    }

    /// Object being dragged
    pub fn selected(&self) -> Option<Uuid> {
        self.state.selected
    }

    /// Plane drag motion is constrained to
    pub fn drag_plane(&self) -> Plane {
        self.state.plane
    }

    /// Grab point minus object position at drag start
    pub fn drag_offset(&self) -> Vec3 {
        self.state.offset
    }

    /// Last pointer position in normalized device coordinates
    pub fn pointer(&self) -> Vec2 {
        self.state.ndc
    }

    // ========== Shared steps ==========

    /// Aim the raycaster at the current pointer; returns the view direction
    fn aim(&mut self) -> Vec3 {
        let camera = self.camera.read();
        self.raycaster.set_from_camera(self.state.ndc, &*camera);
        camera.world_direction()
    }

    /// Nearest hit and that object's position
    fn pick(&self) -> Option<(Uuid, Vec3)> {
        let objects = self.objects.read();
        let hits = self.raycaster.intersect_objects(objects.as_slice());
        let hit = hits.first()?;
        find(objects.as_slice(), hit.object).map(|object| (hit.object, object.position()))
    }

    /// Make `object`'s position the acquisition point of a new drag
    fn acquire(&mut self, id: Uuid, position: Vec3) {
        self.state.selected = Some(id);

        if let Some(point) = self.raycaster.ray().intersect_plane(&self.state.plane) {
            self.state.offset = point - position;
        }

        if self.options.cursors && self.options.moveable {
            self.surface.set_cursor(CursorStyle::Move);
        }
    }

    /// Move the dragged object to the pointer, if there is one to move.
    ///
    /// Returns `false` when the caller should fall through to hover handling.
    fn drag_to_pointer(&mut self, input: &InputEvent) -> bool {
        let Some(id) = self.state.selected else {
            return false;
        };
        if !(self.enabled && self.options.moveable) {
            return false;
        }

        let point = self.raycaster.ray().intersect_plane(&self.state.plane);
        {
            let mut objects = self.objects.write();
            let Some(object) = find_mut(objects.as_mut_slice(), id) else {
                tracing::debug!("Dragged object {} left the candidate set", id);
                self.state.selected = None;
                return false;
            };
            if let Some(point) = point {
                object.set_position(point - self.state.offset);
                tracing::trace!("Dragged {} to {:?}", id, point - self.state.offset);
            }
        }

        self.emit(DragEvent::new(DragEventKind::Drag, id).with_input(input));
        true
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        if self.options.cursors {
            self.surface.set_cursor(cursor);
        }
    }

    fn emit(&mut self, event: DragEvent) {
        if event.kind() != Some(DragEventKind::Drag) {
            tracing::debug!("{} {:?}", event.event_type, event.object);
        }
        self.dispatcher.dispatch_event(&event);
    }
}
