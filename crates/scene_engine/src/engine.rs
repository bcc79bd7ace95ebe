//! Core engine implementation
//!
//! The engine is the composition root of a running game: it owns the single
//! [`SceneRegistry`] together with the graphics device, the shader library
//! and the active camera, and runs the frame loop
//! (update → render → draw).

use crate::{
    application::Game,
    config::{Config, ConfigError, Deserialize, SceneConfig, Serialize},
    foundation::{math::Vec3, time::Timer},
    render::{Camera, GraphicsDevice, ShaderLibrary},
    scene::{FrameStats, SceneRegistry},
};
use std::path::Path;
use thiserror::Error;

/// Main engine struct
pub struct Engine {
    /// The running scene
    scene: SceneRegistry,

    /// Raster state and program binding
    device: Box<dyn GraphicsDevice>,

    /// Compiled shader lookup
    shaders: Box<dyn ShaderLibrary>,

    /// Camera handed to every render and draw call
    camera: Camera,

    /// Frame timing
    timer: Timer,

    /// Engine configuration
    config: EngineConfig,

    /// Frames completed by [`Engine::run`] or [`Engine::run_frame`]
    frames: u64,

    /// Whether the engine should continue running
    running: bool,
}

impl Engine {
    /// Create a new engine around an empty scene
    pub fn new(
        config: EngineConfig,
        device: Box<dyn GraphicsDevice>,
        shaders: Box<dyn ShaderLibrary>,
    ) -> Self {
        log::info!("Initializing engine...");

        Self {
            scene: SceneRegistry::new(config.scene.clone()),
            device,
            shaders,
            camera: config.camera.to_camera(),
            timer: Timer::new(),
            config,
            frames: 0,
            running: true,
        }
    }

    /// Create an engine from a `.toml` or `.ron` configuration file
    pub fn from_config_file(
        path: impl AsRef<Path>,
        device: Box<dyn GraphicsDevice>,
        shaders: Box<dyn ShaderLibrary>,
    ) -> Result<Self, EngineError> {
        let config = EngineConfig::load_from_file(path)?;
        Ok(Self::new(config, device, shaders))
    }

    /// Replace the scene, e.g. with one wired to a collision backend
    #[must_use]
    pub fn with_scene(mut self, scene: SceneRegistry) -> Self {
        self.scene = scene;
        self
    }

    /// Run the frame loop with the given game until [`Engine::quit`] is
    /// called or the configured frame limit is reached
    pub fn run<G: Game>(&mut self, game: &mut G) -> Result<(), EngineError> {
        game.on_create(self)
            .map_err(|e| EngineError::ApplicationError(format!("Game creation: {}", e)))?;

        log::info!("Starting main loop...");
        self.running = !self.frame_limit_reached();

        while self.running {
            let delta_time = self.timer.tick();

            game.update(self, delta_time)
                .map_err(|e| EngineError::ApplicationError(format!("Game update: {}", e)))?;

            self.scene.update(delta_time);

            game.render(self)
                .map_err(|e| EngineError::ApplicationError(format!("Game render: {}", e)))?;

            self.frames += 1;
            if self.frame_limit_reached() {
                log::info!("Frame limit of {} reached", self.frames);
                self.running = false;
            }
        }

        game.on_destroy(self);
        self.scene.on_destroy();

        log::info!("Engine shutdown complete after {} frames", self.frames);
        Ok(())
    }

    /// Run one frame with a caller-supplied delta time
    pub fn run_frame(&mut self, delta_time: f32) -> FrameReport {
        self.scene.update(delta_time);
        let report = self.render();
        self.frames += 1;
        report
    }

    /// Render the 3D scene, then draw the GUI overlay on top
    pub fn render(&mut self) -> FrameReport {
        let render = self.scene.render(self.device.as_mut(), &self.camera);
        let draw = self
            .scene
            .draw(self.device.as_mut(), self.shaders.as_ref(), &self.camera);

        log::debug!(
            "Frame {}: {} models / {} binds, {} GUI objects",
            self.frames,
            render.dispatched,
            render.program_binds,
            draw.dispatched
        );
        FrameReport { render, draw }
    }

    fn frame_limit_reached(&self) -> bool {
        self.config.frame_limit.is_some_and(|limit| self.frames >= limit)
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the frame loop is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The running scene
    pub fn scene(&self) -> &SceneRegistry {
        &self.scene
    }

    /// Mutable access to the running scene
    pub fn scene_mut(&mut self) -> &mut SceneRegistry {
        &mut self.scene
    }

    /// The active camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the active camera
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Frames completed so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Time since the previous frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.timer.delta_time()
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// What one frame rendered and drew
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// 3D pass
    pub render: FrameStats,
    /// GUI overlay pass
    pub draw: FrameStats,
}

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Scene registry settings
    pub scene: SceneConfig,

    /// Initial camera
    pub camera: CameraConfig,

    /// Stop [`Engine::run`] after this many frames
    pub frame_limit: Option<u64>,
}

impl Config for EngineConfig {}

/// Initial camera placement and projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position in world space
    pub position: [f32; 3],

    /// Point the camera looks at
    pub target: [f32; 3],

    /// Vertical field of view in degrees
    pub fov_degrees: f32,

    /// Viewport width / height
    pub aspect: f32,

    /// Near clipping plane
    pub near: f32,

    /// Far clipping plane
    pub far: f32,
}

impl CameraConfig {
    /// Build the camera described by this configuration
    pub fn to_camera(&self) -> Camera {
        let [x, y, z] = self.position;
        let mut camera = Camera::perspective(Vec3::new(x, y, z), self.fov_degrees, self.aspect, self.near, self.far);
        let [tx, ty, tz] = self.target;
        camera.look_at(Vec3::new(tx, ty, tz));
        camera
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 5.0],
            target: [0.0, 0.0, 0.0],
            fov_degrees: 60.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Game callback failed
    #[error("Application error: {0}")]
    ApplicationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AppError;
    use crate::render::{ShaderCache, ShaderProgram};
    use crate::scene::test_support::{journal, Call, Journal, RecordingDevice, TestGui, TestModel, TestObject};

    fn engine(log: &Journal, frame_limit: Option<u64>) -> Engine {
        let mut shaders = ShaderCache::new();
        shaders.insert("SpriteShader", ShaderProgram(99));

        let config = EngineConfig {
            frame_limit,
            ..EngineConfig::default()
        };
        Engine::new(config, Box::new(RecordingDevice::new(log)), Box::new(shaders))
    }

    struct CountingGame {
        log: Journal,
        updates: u32,
        quit_after: Option<u32>,
        destroyed: bool,
    }

    impl CountingGame {
        fn new(log: &Journal) -> Self {
            Self {
                log: log.clone(),
                updates: 0,
                quit_after: None,
                destroyed: false,
            }
        }
    }

    impl Game for CountingGame {
        fn on_create(&mut self, engine: &mut Engine) -> Result<(), AppError> {
            let scene = engine.scene_mut();
            scene.add_game_object(TestObject::boxed(&self.log), "Player");
            scene.add_model(TestModel::boxed("ship", ShaderProgram(1), &self.log));
            scene.add_gui_object(TestGui::boxed(&self.log), "score");
            Ok(())
        }

        fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
            self.updates += 1;
            if self.quit_after == Some(self.updates) {
                engine.quit();
            }
            Ok(())
        }

        fn on_destroy(&mut self, _engine: &mut Engine) {
            self.destroyed = true;
        }
    }

    struct FailingGame;

    impl Game for FailingGame {
        fn on_create(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            Err(AppError::Custom("no assets".to_string()))
        }

        fn update(&mut self, _engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
            Ok(())
        }
    }

    #[test]
    fn test_run_frame_orders_passes() {
        let log = journal();
        let mut engine = engine(&log, None);
        engine.scene_mut().add_game_object(TestObject::boxed(&log), "Player");
        engine.scene_mut().add_model(TestModel::boxed("ship", ShaderProgram(1), &log));
        engine.scene_mut().add_gui_object(TestGui::boxed(&log), "score");

        let report = engine.run_frame(0.016);

        assert_eq!(report.render.dispatched, 1);
        assert_eq!(report.draw.dispatched, 1);
        assert_eq!(engine.frame_count(), 1);

        let calls = log.borrow();
        let update = calls.iter().position(|c| *c == Call::Update("Player".to_string(), 0.016));
        let render = calls.iter().position(|c| *c == Call::Render("ship".to_string()));
        let draw = calls.iter().position(|c| *c == Call::Draw("score".to_string()));
        assert!(update < render && render < draw);
        assert!(calls.contains(&Call::UseProgram(Some(ShaderProgram(99)))));
    }

    #[test]
    fn test_run_stops_at_frame_limit_and_tears_down() {
        let log = journal();
        let mut engine = engine(&log, Some(3));
        let mut game = CountingGame::new(&log);

        engine.run(&mut game).unwrap();

        assert_eq!(game.updates, 3);
        assert!(game.destroyed);
        assert_eq!(engine.frame_count(), 3);
        assert!(!engine.is_running());
        assert_eq!(engine.scene().object_count(), 0);
        assert_eq!(engine.scene().model_count(), 0);
        assert!(log.borrow().contains(&Call::Dropped("Player".to_string())));
    }

    #[test]
    fn test_quit_ends_loop() {
        let log = journal();
        let mut engine = engine(&log, None);
        let mut game = CountingGame::new(&log);
        game.quit_after = Some(2);

        engine.run(&mut game).unwrap();

        assert_eq!(game.updates, 2);
        assert_eq!(engine.frame_count(), 2);
    }

    #[test]
    fn test_creation_failure_is_reported() {
        let log = journal();
        let mut engine = engine(&log, Some(1));

        let result = engine.run(&mut FailingGame);

        assert!(matches!(result, Err(EngineError::ApplicationError(ref msg)) if msg.contains("no assets")));
        assert_eq!(engine.frame_count(), 0);
    }

    #[test]
    fn test_engine_config_from_toml() {
        let path = std::env::temp_dir().join(format!("scene_engine_{}_engine.toml", std::process::id()));
        std::fs::write(
            &path,
            "frame_limit = 5\n[scene]\ngui_shader = \"HudShader\"\n[camera]\nposition = [1.0, 2.0, 3.0]\n",
        )
        .unwrap();

        let log = journal();
        let engine = Engine::from_config_file(&path, Box::new(RecordingDevice::new(&log)), Box::new(ShaderCache::new()));
        std::fs::remove_file(&path).ok();

        let engine = engine.unwrap();
        assert_eq!(engine.config().frame_limit, Some(5));
        assert_eq!(engine.scene().config().gui_shader, "HudShader");
        assert_eq!(engine.scene().config().game_object_label, "GameObject");
        assert_eq!(engine.camera().position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_missing_config_file() {
        let log = journal();
        let result = Engine::from_config_file(
            "definitely_missing_engine.toml",
            Box::new(RecordingDevice::new(&log)),
            Box::new(ShaderCache::new()),
        );
        assert!(matches!(result, Err(EngineError::Config(ConfigError::Io(_)))));
    }
}
