//! Infinite plane used to constrain drag motion.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A plane in 3D space (`normal · p + constant = 0`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Normal vector of the plane.
    pub normal: Vec3,
    /// Signed distance from the origin, negated along the normal.
    pub constant: f32,
}

impl Plane {
    /// Creates a new plane from normal and constant.
    pub fn new(normal: Vec3, constant: f32) -> Self {
        Self { normal, constant }
    }

    /// Creates the plane with the given normal that passes through `point`.
    ///
    /// The normal is used as given; callers pass unit vectors.
    pub fn from_normal_and_coplanar_point(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal,
            constant: -point.dot(normal),
        }
    }

    /// Returns the signed distance from a point to the plane.
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }
}

impl Default for Plane {
    /// +X normal through the origin.
    fn default() -> Self {
        Self::new(Vec3::X, 0.0)
    }
}
