//! Deprecated entry points.
//!
//! These only log and forward; none of them change interaction behavior.

use dc_core::{
    BoundsRaycaster, Draggable, Pickable, Raycaster, SharedCamera, SharedObjects, ViewCamera,
};

use super::DragControls;
use crate::events::{DragEvent, ListenerId};
use crate::input::InputSurface;

impl<O, C, S> DragControls<O, C, S, BoundsRaycaster>
where
    O: Pickable,
    C: ViewCamera,
    S: InputSurface,
{
    /// Old `(camera, objects, surface)` argument order.
    #[deprecated(note = "use DragControls::new(objects, options, camera, surface)")]
    pub fn from_camera_first(
        camera: SharedCamera<C>,
        objects: SharedObjects<O>,
        surface: S,
    ) -> Self {
        tracing::warn!(
            "DragControls: constructor now expects (objects, options, camera, surface)"
        );
        Self::new(objects, None, camera, surface)
    }
}

impl<O, C, S, R> DragControls<O, C, S, R>
where
    O: Draggable,
    C: ViewCamera,
    S: InputSurface,
    R: Raycaster<O>,
{
    /// Removed: the candidate set is shared, mutate it directly.
    #[deprecated(note = "mutate the shared candidate set instead")]
    pub fn set_objects(&self) {
        tracing::error!("DragControls: set_objects() has been removed");
    }

    #[deprecated(note = "use add_event_listener")]
    pub fn on(
        &mut self,
        event_type: impl AsRef<str>,
        listener: impl FnMut(&DragEvent) + 'static,
    ) -> ListenerId {
        tracing::warn!("DragControls: on() has been deprecated, use add_event_listener()");
        self.add_event_listener(event_type, listener)
    }

    #[deprecated(note = "use remove_event_listener")]
    pub fn off(&mut self, event_type: impl AsRef<str>, id: ListenerId) -> bool {
        tracing::warn!("DragControls: off() has been deprecated, use remove_event_listener()");
        self.remove_event_listener(event_type, id)
    }

    /// Dispatches a bare `{ type }` event
    #[deprecated(note = "use dispatch_event")]
    pub fn notify(&mut self, event_type: &str) {
        tracing::error!("DragControls: notify() has been deprecated, use dispatch_event()");
        self.dispatch_event(&DragEvent::bare(event_type));
    }
}
