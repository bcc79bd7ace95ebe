//! Game trait and lifecycle management

use crate::engine::{Engine, EngineError};
use thiserror::Error;

/// Game lifecycle trait
///
/// Implement this trait to drive a scene with [`Engine::run`].
pub trait Game {
    /// Build the initial scene
    ///
    /// Called once before the first frame. Add models, game objects and GUI
    /// objects to [`Engine::scene_mut`] here.
    fn on_create(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Per-frame game logic
    ///
    /// Called every frame before the scene's own update pass.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Time since last frame in seconds
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// Render the frame
    ///
    /// The default renders the 3D scene and then draws the GUI overlay.
    fn render(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        engine.render();
        Ok(())
    }

    /// Called after the last frame, before the scene is torn down
    fn on_destroy(&mut self, _engine: &mut Engine) {}
}

/// Game-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to game level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Custom game error
    #[error("Application error: {0}")]
    Custom(String),
}
