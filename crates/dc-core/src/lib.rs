//! Drag Controls Core
//!
//! Geometry and picking primitives used by the drag controller.
//!
//! # Module Structure
//!
//! ```text
//! dc-core/
//! ├── ray.rs        # Ray and ray-plane / ray-box intersection
//! ├── plane.rs      # Infinite plane (normal + constant)
//! ├── bounds.rs     # Axis-aligned bounding box
//! ├── camera.rs     # ViewCamera trait and OrbitCamera
//! ├── object.rs     # Draggable / Pickable scene object traits
//! ├── raycast.rs    # Raycaster trait and BoundsRaycaster
//! └── constants.rs  # Shared numeric tolerances
//! ```

pub mod bounds;
pub mod camera;
pub mod constants;
pub mod object;
pub mod plane;
pub mod ray;
pub mod raycast;

// Re-exports for convenience
pub use bounds::BoundingBox;
pub use camera::{OrbitCamera, SharedCamera, ViewCamera};
pub use object::{Draggable, Pickable, SharedObjects};
pub use plane::Plane;
pub use ray::Ray;
pub use raycast::{BoundsRaycaster, Intersection, Raycaster};
