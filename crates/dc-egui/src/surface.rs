//! [`InputSurface`] backed by an egui viewport rect

use std::collections::HashSet;

use dc_controls::{CursorStyle, InputEvent, InputKind, InputSurface, PointerEvent, Rect, TouchEvent};
use egui::{Event, PointerButton, Pos2, TouchPhase};

/// egui cursor for a controller cursor style
pub fn cursor_icon(cursor: CursorStyle) -> egui::CursorIcon {
    match cursor {
        CursorStyle::Auto => egui::CursorIcon::Default,
        CursorStyle::Pointer => egui::CursorIcon::PointingHand,
        CursorStyle::Move => egui::CursorIcon::Move,
    }
}

/// A rectangular region of an egui frame that receives drag input.
///
/// egui reports pointer events for the whole window, so the surface does the
/// element-level filtering a browser would: moves and presses only count
/// inside the rect, and leaving it produces a single leave event.
#[derive(Debug, Clone)]
pub struct EguiSurface {
    rect: egui::Rect,
    listening: HashSet<InputKind>,
    cursor: CursorStyle,
    inside: bool,
    last_pointer: Pos2,
    touch: bool,
}

impl Default for EguiSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl EguiSurface {
    pub fn new() -> Self {
        Self {
            rect: egui::Rect::NOTHING,
            listening: HashSet::new(),
            cursor: CursorStyle::Auto,
            inside: false,
            last_pointer: Pos2::ZERO,
            touch: false,
        }
    }

    /// Forward raw touch events as well.
    ///
    /// egui already emulates the pointer from the first touch, so enabling
    /// this on a touch screen delivers each gesture twice unless the host
    /// turns that emulation off.
    pub fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    /// Update the screen rect; call once per frame with the widget's rect.
    pub fn set_rect(&mut self, rect: egui::Rect) {
        self.rect = rect;
    }

    pub fn rect(&self) -> egui::Rect {
        self.rect
    }

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    pub fn is_listening(&self, kind: InputKind) -> bool {
        self.listening.contains(&kind)
    }

    /// Whether the pointer was last seen over the surface
    pub fn is_hovered(&self) -> bool {
        self.inside
    }

    /// Convert an egui event into controller input.
    ///
    /// Returns `None` for events the surface would not receive or nobody is
    /// listening for.
    pub fn translate(&mut self, event: &Event) -> Option<InputEvent> {
        let input = match event {
            Event::PointerMoved(pos) => {
                let was_inside = self.inside;
                self.inside = self.rect.contains(*pos);
                self.last_pointer = *pos;

                match (was_inside, self.inside) {
                    (_, true) => InputEvent::PointerMove(pointer(*pos)),
                    (true, false) => InputEvent::PointerLeave(pointer(*pos)),
                    (false, false) => return None,
                }
            }
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                ..
            } => {
                if !self.rect.contains(*pos) {
                    return None;
                }
                self.last_pointer = *pos;

                if *pressed {
                    InputEvent::PointerDown(pointer(*pos))
                } else {
                    InputEvent::PointerUp(pointer(*pos))
                }
            }
            Event::PointerGone => {
                if !std::mem::take(&mut self.inside) {
                    return None;
                }
                InputEvent::PointerLeave(pointer(self.last_pointer))
            }
            Event::Touch { id, phase, pos, .. } if self.touch => {
                let touch = TouchEvent::single(id.0, pos.x, pos.y);
                match phase {
                    // Later phases follow the touch wherever it goes
                    TouchPhase::Start if !self.rect.contains(*pos) => return None,
                    TouchPhase::Start => InputEvent::TouchStart(touch),
                    TouchPhase::Move => InputEvent::TouchMove(touch),
                    TouchPhase::End | TouchPhase::Cancel => InputEvent::TouchEnd(touch),
                }
            }
            _ => return None,
        };

        self.listening.contains(&input.kind()).then_some(input)
    }

    /// Show the requested cursor while the pointer is over the surface.
    ///
    /// egui resets the cursor every frame, so this must run every frame too.
    pub fn apply_cursor(&self, ctx: &egui::Context) {
        if self.inside && self.cursor != CursorStyle::Auto {
            ctx.set_cursor_icon(cursor_icon(self.cursor));
        }
    }
}

impl InputSurface for EguiSurface {
    fn bounding_rect(&self) -> Rect {
        Rect::new(
            self.rect.min.x,
            self.rect.min.y,
            self.rect.width(),
            self.rect.height(),
        )
    }

    fn listen(&mut self, kind: InputKind) {
        self.listening.insert(kind);
    }

    fn unlisten(&mut self, kind: InputKind) {
        self.listening.remove(&kind);
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        self.cursor = cursor;
    }
}

fn pointer(pos: Pos2) -> PointerEvent {
    PointerEvent::new(pos.x, pos.y)
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn surface() -> EguiSurface {
        let mut surface = EguiSurface::new();
        surface.set_rect(egui::Rect::from_min_size(
            egui::pos2(10.0, 20.0),
            egui::vec2(100.0, 50.0),
        ));
        for kind in InputKind::ALL {
            surface.listen(kind);
        }
        surface
    }

    fn button(pos: Pos2, button: PointerButton, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    fn touch(phase: TouchPhase, pos: Pos2) -> Event {
        Event::Touch {
            device_id: egui::TouchDeviceId(0),
            id: egui::TouchId(7),
            phase,
            pos,
            force: None,
        }
    }

    #[test]
    fn test_bounding_rect() {
        let surface = surface();
        assert_eq!(surface.bounding_rect(), Rect::new(10.0, 20.0, 100.0, 50.0));
    }

    #[test]
    fn test_move_inside_and_leave() {
        let mut surface = surface();

        assert_eq!(
            surface.translate(&Event::PointerMoved(egui::pos2(0.0, 0.0))),
            None
        );

        let input = surface.translate(&Event::PointerMoved(egui::pos2(50.0, 40.0)));
        assert_eq!(input, Some(InputEvent::PointerMove(PointerEvent::new(50.0, 40.0))));
        assert!(surface.is_hovered());

        let input = surface.translate(&Event::PointerMoved(egui::pos2(200.0, 40.0)));
        assert_eq!(input, Some(InputEvent::PointerLeave(PointerEvent::new(200.0, 40.0))));

        // Only one leave per exit
        assert_eq!(
            surface.translate(&Event::PointerMoved(egui::pos2(210.0, 40.0))),
            None
        );
    }

    #[test]
    fn test_pointer_gone_uses_last_position() {
        let mut surface = surface();
        surface.translate(&Event::PointerMoved(egui::pos2(30.0, 30.0)));

        let input = surface.translate(&Event::PointerGone);
        assert_eq!(input, Some(InputEvent::PointerLeave(PointerEvent::new(30.0, 30.0))));
        assert_eq!(surface.translate(&Event::PointerGone), None);
    }

    #[test]
    fn test_primary_button_only() {
        let mut surface = surface();
        let pos = egui::pos2(50.0, 40.0);

        assert_eq!(
            surface.translate(&button(pos, PointerButton::Primary, true)),
            Some(InputEvent::PointerDown(PointerEvent::new(50.0, 40.0)))
        );
        assert_eq!(
            surface.translate(&button(pos, PointerButton::Primary, false)),
            Some(InputEvent::PointerUp(PointerEvent::new(50.0, 40.0)))
        );
        assert_eq!(surface.translate(&button(pos, PointerButton::Secondary, true)), None);
        assert_eq!(surface.translate(&button(pos, PointerButton::Middle, true)), None);

        // Presses outside the rect belong to some other widget
        let outside = egui::pos2(500.0, 500.0);
        assert_eq!(surface.translate(&button(outside, PointerButton::Primary, true)), None);
    }

    #[test]
    fn test_unlistened_kinds_are_dropped() {
        let mut surface = surface();
        surface.unlisten(InputKind::PointerMove);

        assert_eq!(
            surface.translate(&Event::PointerMoved(egui::pos2(50.0, 40.0))),
            None
        );
        assert!(!surface.is_listening(InputKind::PointerMove));
        assert!(surface.is_listening(InputKind::PointerDown));
    }

    #[test]
    fn test_touch_requires_opt_in() {
        let mut surface = surface();
        let pos = egui::pos2(50.0, 40.0);
        assert_eq!(surface.translate(&touch(TouchPhase::Start, pos)), None);

        let mut surface = surface.with_touch(true);
        let Some(InputEvent::TouchStart(start)) = surface.translate(&touch(TouchPhase::Start, pos))
        else {
            panic!("expected touch start");
        };
        let primary = start.primary().unwrap();
        assert_eq!(primary.id, 7);
        assert_eq!(primary.client, Vec2::new(50.0, 40.0));

        // Moves and ends are delivered even off the surface
        let far = egui::pos2(500.0, 500.0);
        assert!(matches!(
            surface.translate(&touch(TouchPhase::Move, far)),
            Some(InputEvent::TouchMove(_))
        ));
        assert!(matches!(
            surface.translate(&touch(TouchPhase::Cancel, far)),
            Some(InputEvent::TouchEnd(_))
        ));
        assert_eq!(surface.translate(&touch(TouchPhase::Start, far)), None);
    }

    #[test]
    fn test_cursor_icons() {
        assert_eq!(cursor_icon(CursorStyle::Auto), egui::CursorIcon::Default);
        assert_eq!(cursor_icon(CursorStyle::Pointer), egui::CursorIcon::PointingHand);
        assert_eq!(cursor_icon(CursorStyle::Move), egui::CursorIcon::Move);
    }
}
