//! Input model: raw pointer/touch events and the surface they arrive on.

use glam::Vec2;

/// Screen-space rectangle of the input surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Map a client position to normalized device coordinates.
    ///
    /// The rect spans [-1, 1] on both axes with +Y pointing up. A degenerate
    /// rect maps everything to the center.
    pub fn to_ndc(&self, client: Vec2) -> Vec2 {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Vec2::ZERO;
        }

        Vec2::new(
            (client.x - self.left) / self.width * 2.0 - 1.0,
            -((client.y - self.top) / self.height) * 2.0 + 1.0,
        )
    }
}

/// Mouse/pen pointer event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Position in client (screen) pixels
    pub client: Vec2,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            client: Vec2::new(x, y),
        }
    }
}

/// A single touch contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: u64,
    pub client: Vec2,
}

/// Touch event; only the first changed touch is used
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub changed_touches: Vec<TouchPoint>,
}

impl TouchEvent {
    /// Event with one changed touch
    pub fn single(id: u64, x: f32, y: f32) -> Self {
        Self {
            changed_touches: vec![TouchPoint {
                id,
                client: Vec2::new(x, y),
            }],
        }
    }

    pub fn primary(&self) -> Option<&TouchPoint> {
        self.changed_touches.first()
    }
}

/// Kinds of input the controller listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    PointerMove,
    PointerDown,
    PointerUp,
    PointerLeave,
    TouchMove,
    TouchStart,
    TouchEnd,
}

impl InputKind {
    /// Every kind, in registration order
    pub const ALL: [InputKind; 7] = [
        InputKind::PointerMove,
        InputKind::PointerDown,
        InputKind::PointerUp,
        InputKind::PointerLeave,
        InputKind::TouchMove,
        InputKind::TouchStart,
        InputKind::TouchEnd,
    ];

    /// DOM-style event name
    pub fn name(&self) -> &'static str {
        match self {
            InputKind::PointerMove => "mousemove",
            InputKind::PointerDown => "mousedown",
            InputKind::PointerUp => "mouseup",
            InputKind::PointerLeave => "mouseleave",
            InputKind::TouchMove => "touchmove",
            InputKind::TouchStart => "touchstart",
            InputKind::TouchEnd => "touchend",
        }
    }
}

/// Raw input forwarded by the host
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMove(PointerEvent),
    PointerDown(PointerEvent),
    PointerUp(PointerEvent),
    PointerLeave(PointerEvent),
    TouchMove(TouchEvent),
    TouchStart(TouchEvent),
    TouchEnd(TouchEvent),
}

impl InputEvent {
    pub fn kind(&self) -> InputKind {
        match self {
            InputEvent::PointerMove(_) => InputKind::PointerMove,
            InputEvent::PointerDown(_) => InputKind::PointerDown,
            InputEvent::PointerUp(_) => InputKind::PointerUp,
            InputEvent::PointerLeave(_) => InputKind::PointerLeave,
            InputEvent::TouchMove(_) => InputKind::TouchMove,
            InputEvent::TouchStart(_) => InputKind::TouchStart,
            InputEvent::TouchEnd(_) => InputKind::TouchEnd,
        }
    }

    /// Client position of the pointer or primary touch
    pub fn client_position(&self) -> Option<Vec2> {
        match self {
            InputEvent::PointerMove(e)
            | InputEvent::PointerDown(e)
            | InputEvent::PointerUp(e)
            | InputEvent::PointerLeave(e) => Some(e.client),
            InputEvent::TouchMove(e) | InputEvent::TouchStart(e) | InputEvent::TouchEnd(e) => {
                e.primary().map(|t| t.client)
            }
        }
    }
}

/// Cursor styles the controller may request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Auto,
    Pointer,
    Move,
}

/// The element input arrives on (canvas, viewport widget, ...)
pub trait InputSurface {
    /// Current screen-space bounds
    fn bounding_rect(&self) -> Rect;

    /// Start delivering events of `kind`
    fn listen(&mut self, kind: InputKind);

    /// Stop delivering events of `kind`
    fn unlisten(&mut self, kind: InputKind);

    /// Change the cursor shown over the surface
    fn set_cursor(&mut self, cursor: CursorStyle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_to_ndc() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(rect.to_ndc(Vec2::new(50.0, 50.0)), Vec2::ZERO);
        assert_eq!(rect.to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(rect.to_ndc(Vec2::new(100.0, 100.0)), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_rect_offset() {
        let rect = Rect::new(20.0, 10.0, 200.0, 100.0);
        assert_eq!(rect.to_ndc(Vec2::new(120.0, 60.0)), Vec2::ZERO);
    }

    #[test]
    fn test_degenerate_rect() {
        let rect = Rect::new(0.0, 0.0, 0.0, 100.0);
        assert_eq!(rect.to_ndc(Vec2::new(30.0, 30.0)), Vec2::ZERO);
    }

    #[test]
    fn test_touch_primary() {
        let empty = InputEvent::TouchEnd(TouchEvent {
            changed_touches: Vec::new(),
        });
        assert_eq!(empty.client_position(), None);

        let touch = InputEvent::TouchStart(TouchEvent::single(3, 4.0, 5.0));
        assert_eq!(touch.client_position(), Some(Vec2::new(4.0, 5.0)));
        assert_eq!(touch.kind(), InputKind::TouchStart);
    }
}
