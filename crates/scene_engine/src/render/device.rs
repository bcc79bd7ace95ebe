//! Graphics device interface
//!
//! The subset of raster state the scene passes touch: program binds, depth
//! testing and alpha blending. Backends implement [`GraphicsDevice`].

use super::shader::ShaderProgram;

/// Blend factor applied to the source or destination color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendFactor {
    /// 0
    Zero,
    /// 1
    One,
    /// Source alpha
    SrcAlpha,
    /// 1 - source alpha
    OneMinusSrcAlpha,
}

/// Source and destination blend factors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendFunc {
    /// Factor applied to the incoming fragment
    pub src: BlendFactor,
    /// Factor applied to the framebuffer color
    pub dst: BlendFactor,
}

impl BlendFunc {
    /// Standard alpha blending used by the GUI overlay
    pub const ALPHA: Self = Self {
        src: BlendFactor::SrcAlpha,
        dst: BlendFactor::OneMinusSrcAlpha,
    };
}

/// Raster state and program binding used by the scene passes
pub trait GraphicsDevice {
    /// Bind a shader program, or unbind with `None`
    fn use_program(&mut self, program: Option<ShaderProgram>);

    /// Enable or disable depth testing
    fn set_depth_test(&mut self, enabled: bool);

    /// Enable blending with `func`, or disable it with `None`
    fn set_blend(&mut self, func: Option<BlendFunc>);
}
