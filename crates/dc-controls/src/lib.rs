//! Drag Controls
//!
//! Pick up, drag and drop objects of a 3D scene with a mouse or touch
//! screen. Pointer positions are turned into rays, objects under the ray are
//! hovered or grabbed, and a grabbed object follows the pointer across a
//! plane facing the camera.
//!
//! ```ignore
//! let objects = Arc::new(RwLock::new(vec![block]));
//! let camera = Arc::new(RwLock::new(OrbitCamera::new(16.0 / 9.0)));
//! let mut controls = DragControls::new(objects, None, camera, surface);
//!
//! controls.add_event_listener(DragEventKind::DragEnd, |event| {
//!     tracing::info!("dropped {:?}", event.object);
//! });
//!
//! // For every raw event the surface delivers:
//! controls.handle_input(&InputEvent::PointerMove(PointerEvent::new(x, y)));
//! ```

pub mod clock;
pub mod controls;
pub mod events;
pub mod input;
pub mod options;
pub mod state;

// Re-exports for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use controls::{DOUBLE_CLICK_WINDOW, DragControls};
pub use events::{DragEvent, DragEventKind, EventDispatcher, EventTypeError, ListenerId};
pub use input::{
    CursorStyle, InputEvent, InputKind, InputSurface, PointerEvent, Rect, TouchEvent, TouchPoint,
};
pub use options::{ConfigError, DragOptions, OptionError};
pub use state::PointerState;
