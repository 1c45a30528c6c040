//! Pointer state owned by the controller

use std::time::Instant;

use glam::{Vec2, Vec3};
use uuid::Uuid;

use dc_core::Plane;

/// Pointer/drag state, mutated only by the controller's handlers
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    /// Last pointer position in normalized device coordinates
    pub ndc: Vec2,
    /// Object under the pointer
    pub hovered: Option<Uuid>,
    /// Object being dragged
    pub selected: Option<Uuid>,
    /// Plane the dragged object moves in
    pub plane: Plane,
    /// Object the plane was last prepared for
    pub plane_object: Option<Uuid>,
    /// Hit point minus object position at acquisition
    pub offset: Vec3,
    /// Client position of the press that acquired the object
    pub press: Option<Vec2>,
    /// Time of the previous release/cancel
    pub last_release: Option<Instant>,
}
