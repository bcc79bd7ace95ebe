//! Rendering collaborators of the scene layer
//!
//! The scene registry drives rendering but never talks to a graphics API
//! directly. It binds programs and toggles raster state through
//! [`GraphicsDevice`], resolves named programs through [`ShaderLibrary`], and
//! hands a [`Camera`] to every model and GUI object it dispatches to.

pub mod camera;
pub mod device;
pub mod shader;

pub use camera::Camera;
pub use device::{BlendFactor, BlendFunc, GraphicsDevice};
pub use shader::{ShaderCache, ShaderLibrary, ShaderProgram};
