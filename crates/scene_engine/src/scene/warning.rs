//! Recoverable scene misuse
//!
//! None of these abort an operation; the registry applies its fallback and
//! reports the warning through its [`WarningLog`](crate::foundation::logging::WarningLog).

use thiserror::Error;

/// Warnings raised by the scene registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneWarning {
    /// Requested game object name is taken; an auto-generated name is used instead
    #[error("Object with the name {0} already exists in the scene.")]
    DuplicateObjectName(String),

    /// Requested GUI object name is taken; `assigned` was given instead
    #[error("GUI object with the name {requested} already exists! A new name ({assigned}) has been given instead.")]
    DuplicateGuiName {
        /// Name the caller asked for
        requested: String,
        /// Name the object received
        assigned: String,
    },

    /// Lookup of an unknown game object
    #[error("GameObject with the name {0} doesn't exist. No object was returned.")]
    ObjectNotFound(String),

    /// Lookup of an unknown GUI object
    #[error("GUIObject with the name {0} doesn't exist. No object was returned.")]
    GuiObjectNotFound(String),

    /// Removal of an unknown game object
    #[error("GameObject with the name {0} can't be removed: it isn't in the scene.")]
    RemoveUnknownObject(String),

    /// The overlay shader is not known to the shader library
    #[error("Shader {0} is not loaded; GUI objects are drawn without a bound program.")]
    MissingGuiShader(String),
}
