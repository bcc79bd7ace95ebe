//! Math utilities and types
//!
//! Provides the small set of math types the scene layer hands to its
//! collaborators (camera matrices and positions).

pub use nalgebra::{Matrix4, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Perspective projection type
pub type Perspective = nalgebra::Perspective3<f32>;
