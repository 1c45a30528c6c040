//! Rays cast from the camera through the pointer position.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::constants::PARALLEL_EPSILON;
use crate::plane::Plane;

/// A half-line `origin + t * direction`, `t >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Vec3,
    /// Unit direction of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray; `direction` is normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Returns the point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Ray parameter of the intersection with `plane`.
    ///
    /// A ray lying in the plane hits at `t = 0`; any other parallel ray misses.
    pub fn distance_to_plane(&self, plane: &Plane) -> Option<f32> {
        let denom = plane.normal.dot(self.direction);

        if denom.abs() < PARALLEL_EPSILON {
            return (plane.distance_to_point(self.origin).abs() < PARALLEL_EPSILON).then_some(0.0);
        }

        let t = -(self.origin.dot(plane.normal) + plane.constant) / denom;
        (t >= 0.0).then_some(t)
    }

    /// Intersection point with `plane`, or `None` if it is behind the origin
    /// or the ray is parallel to the plane.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        self.distance_to_plane(plane).map(|t| self.at(t))
    }

    /// Ray-box intersection (slab test).
    ///
    /// Returns the entry parameter, or the exit parameter when the origin is
    /// inside the box.
    pub fn intersect_box(&self, bbox: &BoundingBox) -> Option<f32> {
        let inv = self.direction.recip();

        let t1 = (bbox.min - self.origin) * inv;
        let t2 = (bbox.max - self.origin) * inv;

        let t_near = t1.min(t2).max_element();
        let t_far = t1.max(t2).min_element();

        if t_near > t_far || t_far < 0.0 {
            return None;
        }

        Some(if t_near >= 0.0 { t_near } else { t_far })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_hits_plane() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let plane = Plane::from_normal_and_coplanar_point(Vec3::Z, Vec3::ZERO);

        let hit = ray.intersect_plane(&plane).unwrap();
        assert_relative_eq!(hit.z, 0.0);
        assert_relative_eq!(ray.distance_to_plane(&plane).unwrap(), 5.0);
    }

    #[test]
    fn test_ray_plane_behind_origin() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        let plane = Plane::from_normal_and_coplanar_point(Vec3::Z, Vec3::ZERO);
        assert!(ray.intersect_plane(&plane).is_none());
    }

    #[test]
    fn test_ray_parallel_to_plane() {
        let plane = Plane::from_normal_and_coplanar_point(Vec3::Z, Vec3::ZERO);

        let above = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::X);
        assert!(above.intersect_plane(&plane).is_none());

        let inside = Ray::new(Vec3::new(2.0, 3.0, 0.0), Vec3::X);
        assert_eq!(inside.intersect_plane(&plane), Some(Vec3::new(2.0, 3.0, 0.0)));
    }

    #[test]
    fn test_ray_hits_box() {
        let bbox = BoundingBox::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        assert_relative_eq!(ray.intersect_box(&bbox).unwrap(), 9.0);
    }

    #[test]
    fn test_ray_misses_box() {
        let bbox = BoundingBox::new(Vec3::splat(-1.0), Vec3::splat(1.0));

        let beside = Ray::new(Vec3::new(3.0, 0.0, 10.0), Vec3::NEG_Z);
        assert!(beside.intersect_box(&bbox).is_none());

        let away = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        assert!(away.intersect_box(&bbox).is_none());
    }

    #[test]
    fn test_ray_from_inside_box() {
        let bbox = BoundingBox::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_relative_eq!(ray.intersect_box(&bbox).unwrap(), 1.0);
    }
}
