//! Global constants for dc-core

/// Below this |ray·normal| a ray is treated as parallel to a plane
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Default vertical field of view for [`crate::OrbitCamera`], in degrees
pub const DEFAULT_FOV_DEGREES: f32 = 50.0;

/// Default near clipping plane distance
pub const DEFAULT_NEAR: f32 = 0.1;

/// Default far clipping plane distance
pub const DEFAULT_FAR: f32 = 2000.0;

/// Default orbit distance from the camera target
pub const DEFAULT_DISTANCE: f32 = 10.0;
