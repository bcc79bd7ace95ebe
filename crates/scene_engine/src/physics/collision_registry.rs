//! Collision registration seam
//!
//! Broad-phase and narrow-phase detection live behind [`CollisionRegistry`].
//! [`ColliderSet`] is the built-in registry; it tracks membership only and is
//! what the scene uses when no collision backend is supplied.

use crate::foundation::collections::ObjectId;
use crate::scene::GameObject;
use std::collections::HashMap;

/// Receives game objects entering and leaving the scene
pub trait CollisionRegistry {
    /// Start tracking `object` under `id`
    fn register_object(&mut self, id: ObjectId, object: &dyn GameObject);

    /// Stop tracking the object registered under `id`
    fn unregister_object(&mut self, id: ObjectId);

    /// Whether `id` is currently tracked
    fn is_registered(&self, id: ObjectId) -> bool;
}

/// Membership-only collision registry
#[derive(Debug, Default)]
pub struct ColliderSet {
    /// Registered objects and the name they had when registered
    colliders: HashMap<ObjectId, String>,
}

impl ColliderSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is currently registered
    pub fn contains(&self, id: ObjectId) -> bool {
        self.colliders.contains_key(&id)
    }

    /// Name `id` was registered with
    pub fn name_of(&self, id: ObjectId) -> Option<&str> {
        self.colliders.get(&id).map(String::as_str)
    }

    /// Number of registered objects
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Whether no objects are registered
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}

impl CollisionRegistry for ColliderSet {
    fn register_object(&mut self, id: ObjectId, object: &dyn GameObject) {
        if let Some(previous) = self.colliders.insert(id, object.name().to_string()) {
            log::debug!("Collider {:?} re-registered (was '{}')", id, previous);
        }
    }

    fn unregister_object(&mut self, id: ObjectId) {
        if self.colliders.remove(&id).is_none() {
            log::debug!("Collider {:?} was not registered", id);
        }
    }

    fn is_registered(&self, id: ObjectId) -> bool {
        self.contains(id)
    }
}
