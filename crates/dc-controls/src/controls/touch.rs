//! Touch handlers
//!
//! Touch has no hover: moves only drag, and a touch start prepares its own
//! drag plane.

use dc_core::{Draggable, Plane, Raycaster, ViewCamera};

use super::DragControls;
use crate::events::{DragEvent, DragEventKind};
use crate::input::{CursorStyle, InputEvent, InputSurface, TouchEvent};

impl<O, C, S, R> DragControls<O, C, S, R>
where
    O: Draggable,
    C: ViewCamera,
    S: InputSurface,
    R: Raycaster<O>,
{
    pub(super) fn on_touch_move(&mut self, event: &TouchEvent, input: &InputEvent) {
        let Some(touch) = event.primary() else {
            return;
        };
        self.state.ndc = self.surface.bounding_rect().to_ndc(touch.client);
        self.aim();
        self.drag_to_pointer(input);
    }

    pub(super) fn on_touch_start(&mut self, event: &TouchEvent, input: &InputEvent) {
        let Some(touch) = event.primary() else {
            return;
        };
        self.state.ndc = self.surface.bounding_rect().to_ndc(touch.client);
        let view_direction = self.aim();

        let Some((id, position)) = self.pick() else {
            return;
        };

        self.state.plane = Plane::from_normal_and_coplanar_point(view_direction, position);
        self.state.plane_object = Some(id);
        self.acquire(id, position);

        if self.options.moveable {
            self.emit(DragEvent::new(DragEventKind::DragStart, id).with_input(input));
        }
    }

    /// Ends the drag without click detection.
    ///
    /// `dragend` is sent even when `moveable` is off, unlike pointer release.
    pub(super) fn on_touch_end(&mut self) {
        if let Some(id) = self.state.selected.take() {
            self.emit(DragEvent::new(DragEventKind::DragEnd, id));
        }
        self.set_cursor(CursorStyle::Auto);
    }
}
