//! # Scene Engine
//!
//! The scene-management core of a small real-time engine.
//!
//! ## Features
//!
//! - **Scene Registry**: Single owner of every live model, game object and GUI object
//! - **Shader Buckets**: Models grouped by shader program so each program binds once per frame
//! - **Named Lookup**: Game objects and GUI objects addressed by unique, auto-generated or chosen names
//! - **Frame Passes**: Update, 3D render and GUI overlay draw driven by the engine loop
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! struct Spinner { name: String, angle: f32 }
//!
//! impl Named for Spinner {
//!     fn name(&self) -> &str { &self.name }
//!     fn set_name(&mut self, name: &str) { self.name = name.to_string(); }
//! }
//!
//! impl GameObject for Spinner {
//!     fn update(&mut self, delta_time: f32) { self.angle += delta_time; }
//! }
//!
//! struct MyGame;
//!
//! impl Game for MyGame {
//!     fn on_create(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         let spinner = Spinner { name: String::new(), angle: 0.0 };
//!         engine.scene_mut().add_game_object(Box::new(spinner), "Spinner");
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, _engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
//!         Ok(())
//!     }
//! }
//!
//! # struct NullDevice;
//! # impl GraphicsDevice for NullDevice {
//! #     fn use_program(&mut self, _program: Option<ShaderProgram>) {}
//! #     fn set_depth_test(&mut self, _enabled: bool) {}
//! #     fn set_blend(&mut self, _func: Option<BlendFunc>) {}
//! # }
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig { frame_limit: Some(60), ..EngineConfig::default() };
//!     let mut engine = Engine::new(config, Box::new(NullDevice), Box::new(ShaderCache::new()));
//!     engine.run(&mut MyGame)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod physics;
pub mod render;
pub mod scene;

mod application;
mod engine;

pub use application::{AppError, Game};
pub use engine::{CameraConfig, Engine, EngineConfig, EngineError, FrameReport};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, SceneConfig},
        foundation::{
            collections::{GuiId, ModelId, ObjectId},
            logging::{LogWarnings, WarningBuffer, WarningLog},
            math::{Mat4, Vec3},
            time::Timer,
        },
        physics::{ColliderSet, CollisionRegistry},
        render::{BlendFactor, BlendFunc, Camera, GraphicsDevice, ShaderCache, ShaderLibrary, ShaderProgram},
        scene::{FrameStats, GameObject, GuiObject, Model, Named, SceneRegistry, SceneWarning},
        AppError, Engine, EngineConfig, EngineError, FrameReport, Game,
    };
}
