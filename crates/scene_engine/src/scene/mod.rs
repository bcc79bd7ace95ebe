//! Scene management system
//!
//! Owns every live entity of the running scene and drives the three per-frame
//! passes over them.
//!
//! ## Architecture
//!
//! ```text
//! SceneRegistry
//!  ├─ NamedEntityTable<ObjectId, dyn GameObject>  → update(dt)
//!  ├─ ModelBuckets (program → [ModelId])          → render(device, camera)
//!  └─ NamedEntityTable<GuiId, dyn GuiObject>      → draw(device, shaders, camera)
//! ```
//!
//! The frame driver calls `update`, then `render`, then `draw`. Entities are
//! owned by the registry from the moment they are added; removing one, or
//! tearing the registry down, drops it.

mod entity;
mod model_buckets;
mod named_table;
mod registry;
mod warning;

#[cfg(test)]
pub(crate) mod test_support;

pub use entity::{GameObject, GuiObject, Model, Named};
pub use model_buckets::ModelBuckets;
pub use named_table::{AutoName, Insertion, NamedEntityTable};
pub use registry::SceneRegistry;
pub use warning::SceneWarning;

/// Work done by one render or draw pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Shader program binds issued (excluding the final unbind)
    pub program_binds: usize,

    /// Entities dispatched to
    pub dispatched: usize,
}
