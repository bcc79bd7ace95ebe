//! Scene demo application
//!
//! Builds a small asteroid field with a HUD and runs a fixed number of
//! frames against a graphics device that only logs what it is asked to do.
//! Run with `RUST_LOG=debug` to see every bind and state change.

use scene_engine::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

const FRAMES: u64 = 120;
const ASTEROIDS: usize = 5;

#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Logs every device call instead of talking to a GPU
struct ConsoleDevice {
    current_program: Option<ShaderProgram>,
}

impl GraphicsDevice for ConsoleDevice {
    fn use_program(&mut self, program: Option<ShaderProgram>) {
        if self.current_program != program {
            log::debug!("use_program({:?})", program);
        }
        self.current_program = program;
    }

    fn set_depth_test(&mut self, enabled: bool) {
        log::debug!("depth test {}", if enabled { "on" } else { "off" });
    }

    fn set_blend(&mut self, func: Option<BlendFunc>) {
        log::debug!("blend {:?}", func);
    }
}

struct Asteroid {
    name: String,
    spin: f32,
    angle: f32,
}

impl Named for Asteroid {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

impl GameObject for Asteroid {
    fn update(&mut self, delta_time: f32) {
        self.angle = (self.angle + self.spin * delta_time) % std::f32::consts::TAU;
    }
}

struct Mesh {
    label: &'static str,
    program: ShaderProgram,
}

impl Model for Mesh {
    fn shader_program(&self) -> ShaderProgram {
        self.program
    }

    fn render(&mut self, camera: &Camera) {
        log::trace!("render {} from {:?}", self.label, camera.position);
    }
}

struct Label {
    tag: String,
    text: String,
}

impl Named for Label {
    fn name(&self) -> &str {
        &self.tag
    }

    fn set_name(&mut self, name: &str) {
        self.tag = name.to_string();
    }
}

impl GuiObject for Label {
    fn draw(&mut self, _camera: &Camera) {
        log::trace!("draw {}: {}", self.tag, self.text);
    }
}

struct AsteroidField {
    lit: ShaderProgram,
    unlit: ShaderProgram,
    elapsed: f32,
}

impl Game for AsteroidField {
    fn on_create(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let scene = engine.scene_mut();

        scene.add_model(Box::new(Mesh { label: "ship", program: self.lit }));
        scene.add_model(Box::new(Mesh { label: "skybox", program: self.unlit }));

        scene.add_game_object(
            Box::new(Asteroid { name: String::new(), spin: 0.0, angle: 0.0 }),
            "Player",
        );
        for i in 0..ASTEROIDS {
            scene.add_model(Box::new(Mesh { label: "asteroid", program: self.lit }));
            scene.add_game_object(
                Box::new(Asteroid { name: String::new(), spin: 0.5 + i as f32, angle: 0.0 }),
                "",
            );
        }

        scene.add_gui_object(Box::new(Label { tag: String::new(), text: "Score: 0".to_string() }), "Score");
        scene.add_gui_object(Box::new(Label { tag: String::new(), text: "Lives: 3".to_string() }), "");

        log::info!(
            "Scene ready: {} objects, {} GUI objects, {} models in {} buckets",
            scene.object_count(),
            scene.gui_object_count(),
            scene.model_count(),
            scene.bucket_count()
        );
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
        self.elapsed += delta_time;

        // Halfway through, the first asteroid is destroyed
        if engine.frame_count() == FRAMES / 2 {
            engine.scene_mut().remove_game_object("GameObject2");
        }
        Ok(())
    }
}

fn main() -> Result<(), DemoError> {
    scene_engine::foundation::logging::init();

    let mut shaders = ShaderCache::new();
    let lit = ShaderProgram(1);
    let unlit = ShaderProgram(2);
    shaders.insert("BasicShader", lit);
    shaders.insert("SkyboxShader", unlit);
    shaders.insert("SpriteShader", ShaderProgram(3));

    let device = Box::new(ConsoleDevice { current_program: None });

    // An optional config file given as the first argument overrides the defaults
    let mut engine = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Engine::from_config_file(path, device, Box::new(shaders))?,
        None => {
            let config = EngineConfig { frame_limit: Some(FRAMES), ..EngineConfig::default() };
            Engine::new(config, device, Box::new(shaders))
        }
    };

    let mut game = AsteroidField { lit, unlit, elapsed: 0.0 };
    engine.run(&mut game)?;

    log::info!("Ran {} frames in {:.3}s", engine.frame_count(), game.elapsed);
    Ok(())
}
