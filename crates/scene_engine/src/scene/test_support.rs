//! Recording fakes for scene tests

use crate::foundation::collections::ObjectId;
use crate::physics::CollisionRegistry;
use crate::render::{BlendFunc, Camera, GraphicsDevice, ShaderProgram};
use crate::scene::{GameObject, GuiObject, Model, Named};
use std::cell::RefCell;
use std::rc::Rc;

/// Every observable call, in the order it happened
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Update(String, f32),
    Render(String),
    Draw(String),
    UseProgram(Option<ShaderProgram>),
    DepthTest(bool),
    Blend(Option<BlendFunc>),
    Register(ObjectId, String),
    Unregister(ObjectId),
    Dropped(String),
}

pub type Journal = Rc<RefCell<Vec<Call>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct TestObject {
    name: String,
    log: Journal,
}

impl TestObject {
    pub fn boxed(log: &Journal) -> Box<dyn GameObject> {
        Box::new(Self {
            name: String::new(),
            log: Rc::clone(log),
        })
    }
}

impl Named for TestObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

impl GameObject for TestObject {
    fn update(&mut self, delta_time: f32) {
        self.log.borrow_mut().push(Call::Update(self.name.clone(), delta_time));
    }
}

impl Drop for TestObject {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Call::Dropped(self.name.clone()));
    }
}

pub struct TestGui {
    tag: String,
    log: Journal,
}

impl TestGui {
    pub fn boxed(log: &Journal) -> Box<dyn GuiObject> {
        Box::new(Self {
            tag: String::new(),
            log: Rc::clone(log),
        })
    }
}

impl Named for TestGui {
    fn name(&self) -> &str {
        &self.tag
    }

    fn set_name(&mut self, name: &str) {
        self.tag = name.to_string();
    }
}

impl GuiObject for TestGui {
    fn draw(&mut self, _camera: &Camera) {
        self.log.borrow_mut().push(Call::Draw(self.tag.clone()));
    }
}

impl Drop for TestGui {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Call::Dropped(self.tag.clone()));
    }
}

pub struct TestModel {
    label: String,
    program: ShaderProgram,
    log: Journal,
}

impl TestModel {
    pub fn boxed(label: &str, program: ShaderProgram, log: &Journal) -> Box<dyn Model> {
        Box::new(Self {
            label: label.to_string(),
            program,
            log: Rc::clone(log),
        })
    }
}

impl Model for TestModel {
    fn shader_program(&self) -> ShaderProgram {
        self.program
    }

    fn render(&mut self, _camera: &Camera) {
        self.log.borrow_mut().push(Call::Render(self.label.clone()));
    }
}

impl Drop for TestModel {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Call::Dropped(self.label.clone()));
    }
}

pub struct RecordingDevice {
    log: Journal,
}

impl RecordingDevice {
    pub fn new(log: &Journal) -> Self {
        Self { log: Rc::clone(log) }
    }
}

impl GraphicsDevice for RecordingDevice {
    fn use_program(&mut self, program: Option<ShaderProgram>) {
        self.log.borrow_mut().push(Call::UseProgram(program));
    }

    fn set_depth_test(&mut self, enabled: bool) {
        self.log.borrow_mut().push(Call::DepthTest(enabled));
    }

    fn set_blend(&mut self, func: Option<BlendFunc>) {
        self.log.borrow_mut().push(Call::Blend(func));
    }
}

pub struct RecordingCollision {
    log: Journal,
}

impl RecordingCollision {
    pub fn boxed(log: &Journal) -> Box<dyn CollisionRegistry> {
        Box::new(Self { log: Rc::clone(log) })
    }
}

impl CollisionRegistry for RecordingCollision {
    fn register_object(&mut self, id: ObjectId, object: &dyn GameObject) {
        self.log
            .borrow_mut()
            .push(Call::Register(id, object.name().to_string()));
    }

    fn unregister_object(&mut self, id: ObjectId) {
        self.log.borrow_mut().push(Call::Unregister(id));
    }

    fn is_registered(&self, id: ObjectId) -> bool {
        self.log
            .borrow()
            .iter()
            .rev()
            .find_map(|call| match call {
                Call::Register(registered, _) if *registered == id => Some(true),
                Call::Unregister(unregistered) if *unregistered == id => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }
}
