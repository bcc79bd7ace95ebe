//! Capabilities of the entities a scene owns
//!
//! Game objects take part in the update pass, models in the 3D render pass,
//! and GUI objects in the overlay draw pass. The registry assigns every game
//! object and GUI object its unique name (a GUI object's name is its tag).

use crate::render::{Camera, ShaderProgram};

/// An entity addressed by a unique name within its table
pub trait Named {
    /// Current name
    fn name(&self) -> &str;

    /// Replace the name; called by the registry on insertion
    fn set_name(&mut self, name: &str);
}

/// Entity updated once per frame
pub trait GameObject: Named {
    /// Advance by `delta_time` seconds
    fn update(&mut self, delta_time: f32);
}

/// Entity drawn in the screen-space overlay pass
pub trait GuiObject: Named {
    /// Issue draw calls for this element
    fn draw(&mut self, camera: &Camera);
}

/// Entity rendered in the 3D pass
pub trait Model {
    /// Program this model renders with; read once when the model is added
    fn shader_program(&self) -> ShaderProgram;

    /// Issue draw calls with the model's program already bound
    fn render(&mut self, camera: &Camera);
}
