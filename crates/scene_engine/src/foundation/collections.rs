//! Specialized collection types
//!
//! Every entity owned by the scene lives in a [`SlotMap`] slot. Name indices
//! and shader buckets only ever hold the typed keys declared here.

pub use slotmap::{Key, SlotMap};

slotmap::new_key_type! {
    /// Handle to a game object owned by the scene registry
    pub struct ObjectId;

    /// Handle to a GUI overlay object owned by the scene registry
    pub struct GuiId;

    /// Handle to a model owned by the scene registry
    pub struct ModelId;
}
