//! Scene object traits

use std::sync::Arc;

use glam::Vec3;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::bounds::BoundingBox;

/// An object the drag controller may move.
///
/// Objects are referred to by [`Draggable::id`]; the id must stay stable for
/// as long as the object is in a candidate set.
pub trait Draggable {
    /// Stable identity of the object.
    fn id(&self) -> Uuid;

    /// World-space position.
    fn position(&self) -> Vec3;

    /// Move the object to a new world-space position.
    fn set_position(&mut self, position: Vec3);
}

/// A draggable object with a pick volume.
pub trait Pickable: Draggable {
    /// Bounds relative to [`Draggable::position`].
    fn local_bounds(&self) -> BoundingBox;

    /// Bounds in world space.
    fn world_bounds(&self) -> BoundingBox {
        self.local_bounds().translated(self.position())
    }
}

/// Ordered candidate set shared between the host and the drag controller.
///
/// The controller never adds or removes entries.
pub type SharedObjects<O> = Arc<RwLock<Vec<O>>>;

/// Find an object by id.
pub fn find<O: Draggable>(objects: &[O], id: Uuid) -> Option<&O> {
    objects.iter().find(|o| o.id() == id)
}

/// Find an object by id, mutably.
pub fn find_mut<O: Draggable>(objects: &mut [O], id: Uuid) -> Option<&mut O> {
    objects.iter_mut().find(|o| o.id() == id)
}
