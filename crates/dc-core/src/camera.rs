//! Camera abstraction used for ray construction

use std::sync::Arc;

use glam::{Mat4, Vec2, Vec3, Vec4};
use parking_lot::RwLock;

use crate::constants::{DEFAULT_DISTANCE, DEFAULT_FAR, DEFAULT_FOV_DEGREES, DEFAULT_NEAR};
use crate::ray::Ray;

/// What the drag controller needs from a camera.
pub trait ViewCamera {
    /// Whether the camera currently accepts interaction.
    ///
    /// Owned by the host; input is ignored while this is `false`.
    fn is_active(&self) -> bool;

    /// Unit vector the camera looks along, in world space.
    fn world_direction(&self) -> Vec3;

    /// World-space ray through a point given in normalized device coordinates.
    fn ray_from_ndc(&self, ndc: Vec2) -> Ray;
}

/// Camera shared between the host and the drag controller.
pub type SharedCamera<C> = Arc<RwLock<C>>;

/// Perspective camera orbiting a target (Y up)
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Eye position, derived from the orbit state.
    pub position: Vec3,
    /// Point the camera orbits and looks at.
    pub target: Vec3,
    /// World up vector.
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Viewport width over height.
    pub aspect: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
    /// Rotation about the up axis, in radians.
    pub yaw: f32,
    /// Elevation above the target's horizontal plane, in radians.
    pub pitch: f32,
    /// Distance from the target.
    pub distance: f32,
    /// Interaction gate read by [`ViewCamera::is_active`]
    pub active: bool,
}

impl OrbitCamera {
    /// Create a camera on the +Z axis looking at the origin
    pub fn new(aspect: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: DEFAULT_FOV_DEGREES.to_radians(),
            aspect,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            yaw: 0.0,
            pitch: 0.0,
            distance: DEFAULT_DISTANCE,
            active: true,
        };
        camera.update_position_from_orbit();
        camera
    }

    /// Enable or disable interaction
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Orbit the camera around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch =
            (self.pitch + delta_pitch).clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
        self.update_position_from_orbit();
    }

    fn update_position_from_orbit(&mut self) {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.position = self.target + Vec3::new(x, y, z);
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }
}

impl ViewCamera for OrbitCamera {
    fn is_active(&self) -> bool {
        self.active
    }

    fn world_direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv_view_proj = (self.projection_matrix() * self.view_matrix()).inverse();

        // Any point on the pointer's line of sight, unprojected from mid-depth
        let clip = inv_view_proj * Vec4::new(ndc.x, ndc.y, 0.5, 1.0);
        let world = clip.truncate() / clip.w;

        Ray::new(self.position, world - self.position)
    }
}
