//! Ray casting against the candidate set.
//!
//! The drag controller only talks to the [`Raycaster`] trait. [`BoundsRaycaster`]
//! is a simple implementation that tests each object's world bounds.

use glam::{Vec2, Vec3};
use uuid::Uuid;

use crate::camera::ViewCamera;
use crate::object::Pickable;
use crate::ray::Ray;

/// One ray hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Id of the object that was hit.
    pub object: Uuid,
    /// Ray parameter of the hit.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// Builds pointer rays and intersects them with objects.
pub trait Raycaster<O> {
    /// Aim the ray through `ndc` as seen from `camera`.
    fn set_from_camera(&mut self, ndc: Vec2, camera: &dyn ViewCamera);

    /// The current ray.
    fn ray(&self) -> Ray;

    /// Hits against `objects`, nearest first.
    fn intersect_objects(&self, objects: &[O]) -> Vec<Intersection>;
}

/// Raycaster testing against axis-aligned world bounds
#[derive(Debug, Clone, Copy)]
pub struct BoundsRaycaster {
    ray: Ray,
}

impl BoundsRaycaster {
    /// Create a raycaster with a ray along -Z from the origin
    pub fn new() -> Self {
        Self {
            ray: Ray::new(Vec3::ZERO, Vec3::NEG_Z),
        }
    }

    /// Replace the current ray
    pub fn set_ray(&mut self, ray: Ray) {
        self.ray = ray;
    }
}

impl Default for BoundsRaycaster {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Pickable> Raycaster<O> for BoundsRaycaster {
    fn set_from_camera(&mut self, ndc: Vec2, camera: &dyn ViewCamera) {
        self.ray = camera.ray_from_ndc(ndc);
    }

    fn ray(&self) -> Ray {
        self.ray
    }

    fn intersect_objects(&self, objects: &[O]) -> Vec<Intersection> {
        let mut hits: Vec<Intersection> = objects
            .iter()
            .filter_map(|object| {
                let distance = self.ray.intersect_box(&object.world_bounds())?;
                Some(Intersection {
                    object: object.id(),
                    distance,
                    point: self.ray.at(distance),
                })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        tracing::trace!("Ray hit {} of {} objects", hits.len(), objects.len());
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::BoundingBox;
    use crate::object::Draggable;

    struct Cube {
        id: Uuid,
        position: Vec3,
    }

    impl Cube {
        fn at(position: Vec3) -> Self {
            Self {
                id: Uuid::new_v4(),
                position,
            }
        }
    }

    impl Draggable for Cube {
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

    impl Pickable for Cube {
        fn local_bounds(&self) -> BoundingBox {
            BoundingBox::cube(1.0)
        }
    }

    #[test]
    fn test_hits_sorted_nearest_first() {
        let far = Cube::at(Vec3::new(0.0, 0.0, -5.0));
        let near = Cube::at(Vec3::new(0.0, 0.0, 2.0));
        let aside = Cube::at(Vec3::new(4.0, 0.0, 0.0));
        let ids = (far.id, near.id);
        let objects = vec![far, near, aside];

        let mut raycaster = BoundsRaycaster::new();
        raycaster.set_ray(Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z));

        let hits = raycaster.intersect_objects(&objects);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].object, ids.1);
        assert_eq!(hits[1].object, ids.0);
        assert!((hits[0].point.z - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_empty_candidate_set() {
        let raycaster = BoundsRaycaster::new();
        let objects: Vec<Cube> = Vec::new();
        assert!(raycaster.intersect_objects(&objects).is_empty());
    }

    #[test]
    fn test_set_from_camera() {
        let camera = crate::camera::OrbitCamera::new(1.0);
        let mut raycaster = BoundsRaycaster::new();
        Raycaster::<Cube>::set_from_camera(&mut raycaster, Vec2::ZERO, &camera);

        let objects = vec![Cube::at(Vec3::ZERO)];
        assert_eq!(raycaster.intersect_objects(&objects).len(), 1);
    }
}
