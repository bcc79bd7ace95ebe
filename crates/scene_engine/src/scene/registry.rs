//! Scene Registry - owner of every live entity in the running scene
//!
//! The registry holds three stores:
//! 1. Game objects by unique name (update pass, collision membership)
//! 2. GUI objects by unique name (overlay draw pass)
//! 3. Models bucketed by shader program (3D render pass)
//!
//! One registry exists per running scene. The application's composition root
//! ([`Engine`](crate::Engine)) creates it and hands it to whatever needs it.

use crate::config::SceneConfig;
use crate::foundation::collections::{GuiId, ModelId, ObjectId};
use crate::foundation::logging::{LogWarnings, WarningLog};
use crate::physics::{ColliderSet, CollisionRegistry};
use crate::record_warning;
use crate::render::{BlendFunc, Camera, GraphicsDevice, ShaderLibrary, ShaderProgram};
use crate::scene::{
    AutoName, FrameStats, GameObject, GuiObject, Model, ModelBuckets, NamedEntityTable,
    SceneWarning,
};

/// Owning registry of game objects, GUI objects and models
pub struct SceneRegistry {
    config: SceneConfig,
    objects: NamedEntityTable<ObjectId, dyn GameObject>,
    gui_objects: NamedEntityTable<GuiId, dyn GuiObject>,
    models: ModelBuckets,
    collision: Box<dyn CollisionRegistry>,
    warnings: Box<dyn WarningLog>,
}

impl SceneRegistry {
    /// Create an empty registry with a membership-only collision set and
    /// warnings routed to `log`
    pub fn new(config: SceneConfig) -> Self {
        Self {
            objects: NamedEntityTable::new(config.game_object_label.clone(), AutoName::TotalAdded),
            gui_objects: NamedEntityTable::new(config.gui_object_label.clone(), AutoName::NextFreeSlot),
            models: ModelBuckets::new(config.bucket_capacity_hint),
            collision: Box::new(ColliderSet::new()),
            warnings: Box::new(LogWarnings),
            config,
        }
    }

    /// Use `collision` to track game objects
    #[must_use]
    pub fn with_collision(mut self, collision: Box<dyn CollisionRegistry>) -> Self {
        self.collision = collision;
        self
    }

    /// Report warnings to `warnings`
    #[must_use]
    pub fn with_warning_log(mut self, warnings: Box<dyn WarningLog>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Scene settings
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    // ========================================================================
    // Models
    // ========================================================================

    /// Take ownership of `model`, filing it under its current shader program
    pub fn add_model(&mut self, model: Box<dyn Model>) -> ModelId {
        let id = self.models.add(model);
        log::trace!("Model {:?} added ({} buckets)", id, self.models.bucket_count());
        id
    }

    /// Remove and drop one model; `false` if `id` is not in the scene
    pub fn remove_model(&mut self, id: ModelId) -> bool {
        self.models.remove(id).is_some()
    }

    /// Model stored under `id`
    pub fn model(&self, id: ModelId) -> Option<&dyn Model> {
        self.models.get(id)
    }

    /// Models filed under `program`, in insertion order
    pub fn bucket(&self, program: ShaderProgram) -> Option<&[ModelId]> {
        self.models.bucket(program)
    }

    /// Number of models
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Number of shader buckets
    pub fn bucket_count(&self) -> usize {
        self.models.bucket_count()
    }

    // ========================================================================
    // Game objects
    // ========================================================================

    /// Take ownership of `object` under `name` and register it for collision
    ///
    /// An empty `name` requests an auto-generated `<label><n>` name. A name
    /// already in use is reported and replaced by an auto-generated one; the
    /// existing object keeps its name.
    pub fn add_game_object(&mut self, object: Box<dyn GameObject>, name: &str) -> ObjectId {
        if !name.is_empty() && self.objects.contains(name) {
            record_warning!(self.warnings, SceneWarning::DuplicateObjectName(name.to_string()));
        }

        let added = self.objects.insert(object, name);
        log::debug!("GameObject '{}' added as {:?}", added.name, added.key);

        if let Some(object) = self.objects.get_by_key(added.key) {
            self.collision.register_object(added.key, object);
        }

        added.key
    }

    /// Unregister from collision and drop the object named `name`
    ///
    /// Unknown names are reported and leave the scene untouched.
    pub fn remove_game_object(&mut self, name: &str) -> bool {
        match self.objects.remove(name) {
            Some((id, object)) => {
                self.collision.unregister_object(id);
                drop(object);
                log::debug!("GameObject '{}' removed", name);
                true
            }
            None => {
                record_warning!(self.warnings, SceneWarning::RemoveUnknownObject(name.to_string()));
                false
            }
        }
    }

    /// Game object named `name`; reports a warning when there is none
    pub fn get_game_object(&self, name: &str) -> Option<&dyn GameObject> {
        let object = self.objects.get(name);
        if object.is_none() {
            record_warning!(self.warnings, SceneWarning::ObjectNotFound(name.to_string()));
        }
        object
    }

    /// Mutable access to the game object named `name`; reports a warning when there is none
    pub fn get_game_object_mut(&mut self, name: &str) -> Option<&mut dyn GameObject> {
        if !self.objects.contains(name) {
            record_warning!(self.warnings, SceneWarning::ObjectNotFound(name.to_string()));
            return None;
        }
        self.objects.get_mut(name).map(|object| object as &mut dyn GameObject)
    }

    /// Whether a game object is named `name`
    pub fn contains_game_object(&self, name: &str) -> bool {
        self.objects.contains(name)
    }

    /// Game object names in update order
    pub fn object_names(&self) -> impl Iterator<Item = &str> {
        self.objects.names()
    }

    /// Number of game objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Whether the object in slot `id` is registered for collision
    pub fn is_collidable(&self, id: ObjectId) -> bool {
        self.collision.is_registered(id)
    }

    /// Game objects ever added, including removed ones
    pub fn total_objects_added(&self) -> u64 {
        self.objects.total_added()
    }

    // ========================================================================
    // GUI objects
    // ========================================================================

    /// Take ownership of `object` under `name`
    ///
    /// An empty `name` requests an auto-generated name. A name already in use
    /// is replaced by an auto-generated one and the substitution is reported.
    pub fn add_gui_object(&mut self, object: Box<dyn GuiObject>, name: &str) -> GuiId {
        let added = self.gui_objects.insert(object, name);

        if let Some(requested) = added.collided_with {
            record_warning!(
                self.warnings,
                SceneWarning::DuplicateGuiName {
                    requested,
                    assigned: added.name.clone(),
                }
            );
        }

        log::debug!("GUIObject '{}' added as {:?}", added.name, added.key);
        added.key
    }

    /// Drop the GUI object named `name`; unknown names are ignored
    pub fn remove_gui_object(&mut self, name: &str) -> bool {
        self.gui_objects.remove(name).is_some()
    }

    /// GUI object named `name`; reports a warning when there is none
    pub fn get_gui_object(&self, name: &str) -> Option<&dyn GuiObject> {
        let object = self.gui_objects.get(name);
        if object.is_none() {
            record_warning!(self.warnings, SceneWarning::GuiObjectNotFound(name.to_string()));
        }
        object
    }

    /// Mutable access to the GUI object named `name`; reports a warning when there is none
    pub fn get_gui_object_mut(&mut self, name: &str) -> Option<&mut dyn GuiObject> {
        if !self.gui_objects.contains(name) {
            record_warning!(self.warnings, SceneWarning::GuiObjectNotFound(name.to_string()));
            return None;
        }
        self.gui_objects.get_mut(name).map(|object| object as &mut dyn GuiObject)
    }

    /// Whether a GUI object is named `name`
    pub fn contains_gui_object(&self, name: &str) -> bool {
        self.gui_objects.contains(name)
    }

    /// GUI object names in draw order
    pub fn gui_object_names(&self) -> impl Iterator<Item = &str> {
        self.gui_objects.names()
    }

    /// Number of GUI objects
    pub fn gui_object_count(&self) -> usize {
        self.gui_objects.len()
    }

    // ========================================================================
    // Frame passes
    // ========================================================================

    /// Update every game object with `delta_time`
    pub fn update(&mut self, delta_time: f32) {
        self.objects.for_each_mut(|_, object| object.update(delta_time));
    }

    /// Render every model, binding each bucket's program once, then unbind
    pub fn render(&mut self, device: &mut dyn GraphicsDevice, camera: &Camera) -> FrameStats {
        let stats = self.models.render(device, camera);
        device.use_program(None);

        log::trace!(
            "Rendered {} models with {} program binds",
            stats.dispatched,
            stats.program_binds
        );
        stats
    }

    /// Draw the GUI overlay
    ///
    /// Depth testing is off and alpha blending on while GUI objects draw with
    /// the configured overlay shader; both are restored afterwards.
    pub fn draw(
        &mut self,
        device: &mut dyn GraphicsDevice,
        shaders: &dyn ShaderLibrary,
        camera: &Camera,
    ) -> FrameStats {
        device.set_depth_test(false);
        device.set_blend(Some(BlendFunc::ALPHA));

        let program = shaders.shader_program(&self.config.gui_shader);
        if program.is_none() {
            record_warning!(self.warnings, SceneWarning::MissingGuiShader(self.config.gui_shader.clone()));
        }
        device.use_program(program);

        let mut stats = FrameStats {
            program_binds: 1,
            dispatched: 0,
        };
        self.gui_objects.for_each_mut(|_, object| {
            object.draw(camera);
            stats.dispatched += 1;
        });

        device.set_blend(None);
        device.set_depth_test(true);

        log::trace!("Drew {} GUI objects", stats.dispatched);
        stats
    }

    /// Drop every game object, GUI object and model, in that order
    ///
    /// Game objects are unregistered from collision first. Safe to call
    /// repeatedly; runs automatically when the registry is dropped.
    pub fn on_destroy(&mut self) {
        if !self.objects.is_empty() {
            for (id, object) in self.objects.drain() {
                self.collision.unregister_object(id);
                drop(object);
            }
        }
        self.gui_objects.clear();
        self.models.clear();
    }
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl Drop for SceneRegistry {
    fn drop(&mut self) {
        self.on_destroy();
    }
}
