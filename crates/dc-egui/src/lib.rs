//! egui input surface for dc-controls
//!
//! Lets a viewport widget drawn with egui (native or in the browser through
//! wasm) drive a [`DragControls`]. Each frame:
//!
//! ```ignore
//! let response = ui.add(egui::Image::new(texture).sense(egui::Sense::click_and_drag()));
//! controls.surface_mut().set_rect(response.rect);
//! forward_input(ui.ctx(), &mut controls);
//! ```

mod surface;

pub use surface::{EguiSurface, cursor_icon};

use dc_controls::DragControls;
use dc_core::{Draggable, Raycaster, ViewCamera};

/// Hand this frame's egui input to the controller and apply its cursor.
///
/// Returns whether any event was consumed.
pub fn forward_input<O, C, R>(
    ctx: &egui::Context,
    controls: &mut DragControls<O, C, EguiSurface, R>,
) -> bool
where
    O: Draggable,
    C: ViewCamera,
    R: Raycaster<O>,
{
    let events = ctx.input(|i| i.events.clone());

    let mut consumed = false;
    for event in &events {
        let Some(input) = controls.surface_mut().translate(event) else {
            continue;
        };
        if controls.handle_input(&input) {
            tracing::trace!(kind = input.kind().name(), "egui input consumed");
            consumed = true;
        }
    }

    controls.surface().apply_cursor(ctx);
    consumed
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    use glam::{Vec2, Vec3};
    use parking_lot::RwLock;
    use uuid::Uuid;

    use dc_controls::{DragEvent, DragEventKind, DragOptions};
    use dc_core::{BoundingBox, Pickable, Ray};

    use super::*;

    struct FlatCamera;

    impl ViewCamera for FlatCamera {
        fn is_active(&self) -> bool {
            true
        }

        fn world_direction(&self) -> Vec3 {
            Vec3::NEG_Z
        }

        fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
            Ray::new((ndc * 5.0).extend(10.0), Vec3::NEG_Z)
        }
    }

    struct Marker {
        id: Uuid,
        position: Vec3,
    }

    impl Draggable for Marker {
        fn id(&self) -> Uuid {
            self.id
        }

        fn position(&self) -> Vec3 {
            self.position
        }

        fn set_position(&mut self, position: Vec3) {
            self.position = position;
        }
    }

    impl Pickable for Marker {
        fn local_bounds(&self) -> BoundingBox {
            BoundingBox::cube(1.0)
        }
    }

    fn primary(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    #[test]
    fn test_drag_through_egui_frame() {
        let marker = Marker {
            id: Uuid::new_v4(),
            position: Vec3::ZERO,
        };
        let objects = Arc::new(RwLock::new(vec![marker]));
        let camera = Arc::new(RwLock::new(FlatCamera));
        let options = DragOptions {
            moveable: true,
            cursors: true,
        };

        let mut surface = EguiSurface::new();
        surface.set_rect(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(100.0, 100.0),
        ));
        let mut controls = DragControls::new(objects.clone(), Some(options), camera, surface);

        let kinds = Rc::new(RefCell::new(Vec::new()));
        for kind in [DragEventKind::DragStart, DragEventKind::Drag, DragEventKind::DragEnd] {
            let kinds = kinds.clone();
            controls.add_event_listener(kind, move |_: &DragEvent| kinds.borrow_mut().push(kind));
        }

        let ctx = egui::Context::default();
        let raw = egui::RawInput {
            events: vec![
                egui::Event::PointerMoved(egui::pos2(50.0, 50.0)),
                primary(egui::pos2(50.0, 50.0), true),
                egui::Event::PointerMoved(egui::pos2(60.0, 50.0)),
            ],
            ..Default::default()
        };

        let mut consumed = false;
        let output = ctx.run(raw, |ctx| {
            consumed = forward_input(ctx, &mut controls);
        });

        assert!(consumed);
        assert_eq!(output.platform_output.cursor_icon, egui::CursorIcon::Move);
        assert!((objects.read()[0].position.x - 1.0).abs() < 1e-4);

        let raw = egui::RawInput {
            events: vec![primary(egui::pos2(60.0, 50.0), false)],
            ..Default::default()
        };
        let _ = ctx.run(raw, |ctx| {
            forward_input(ctx, &mut controls);
        });

        assert_eq!(
            *kinds.borrow(),
            vec![
                DragEventKind::DragStart,
                DragEventKind::Drag,
                DragEventKind::DragEnd
            ]
        );
    }
}
