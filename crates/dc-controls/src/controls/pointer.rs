//! Mouse/pen handlers

use dc_core::{Draggable, Plane, Raycaster, ViewCamera};

use super::{DOUBLE_CLICK_WINDOW, DragControls};
use crate::events::{DragEvent, DragEventKind};
use crate::input::{CursorStyle, InputEvent, InputSurface, PointerEvent};

impl<O, C, S, R> DragControls<O, C, S, R>
where
    O: Draggable,
    C: ViewCamera,
    S: InputSurface,
    R: Raycaster<O>,
{
    pub(super) fn on_pointer_move(&mut self, event: &PointerEvent, input: &InputEvent) {
        self.state.ndc = self.surface.bounding_rect().to_ndc(event.client);
        let view_direction = self.aim();

        if self.drag_to_pointer(input) {
            return;
        }

        match self.pick() {
            Some((id, position)) => {
                // Prepared for the next press; not a drag yet
                self.state.plane = Plane::from_normal_and_coplanar_point(view_direction, position);
                self.state.plane_object = Some(id);

                if self.state.hovered != Some(id) {
                    if let Some(previous) = self.state.hovered.take() {
                        self.emit(DragEvent::new(DragEventKind::HoverOff, previous));
                    }
                    self.emit(DragEvent::new(DragEventKind::HoverOn, id));
                    self.set_cursor(CursorStyle::Pointer);
                    self.state.hovered = Some(id);
                }
            }
            None => {
                if let Some(previous) = self.state.hovered.take() {
                    self.emit(DragEvent::new(DragEventKind::HoverOff, previous));
                    self.set_cursor(CursorStyle::Auto);
                }
            }
        }
    }

    pub(super) fn on_pointer_down(&mut self, event: &PointerEvent, input: &InputEvent) {
        self.state.ndc = self.surface.bounding_rect().to_ndc(event.client);
        let view_direction = self.aim();

        let Some((id, position)) = self.pick() else {
            return;
        };

        // Normally prepared by the hover that preceded the press
        if self.state.plane_object != Some(id) {
            self.state.plane = Plane::from_normal_and_coplanar_point(view_direction, position);
            self.state.plane_object = Some(id);
        }

        self.acquire(id, position);

        if self.options.moveable {
            self.emit(DragEvent::new(DragEventKind::DragStart, id).with_input(input));
        }

        self.state.press = Some(event.client);
    }

    /// Release and leave both end the drag
    pub(super) fn on_pointer_cancel(&mut self, event: &PointerEvent, input: &InputEvent) {
        let now = self.clock.now();

        if let Some(id) = self.state.selected.take() {
            if self.state.press == Some(event.client) {
                self.emit(DragEvent::new(DragEventKind::Click, id));
            }

            let double = self
                .state
                .last_release
                .is_some_and(|last| now.saturating_duration_since(last) < DOUBLE_CLICK_WINDOW);
            if double {
                self.emit(DragEvent::new(DragEventKind::DbClick, id));
            }

            if self.options.moveable {
                self.emit(DragEvent::new(DragEventKind::DragEnd, id).with_input(input));
            }
        }

        self.state.press = None;
        self.state.last_release = Some(now);
        self.set_cursor(CursorStyle::Auto);
    }
}
