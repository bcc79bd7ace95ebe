//! Physics module
//!
//! The scene registry keeps the collision world in sync with the set of live
//! game objects: every added object is registered, every removed object is
//! unregistered before it is dropped.

pub mod collision_registry;

pub use collision_registry::{ColliderSet, CollisionRegistry};
