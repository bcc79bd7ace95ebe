//! Models grouped by shader program
//!
//! Each bucket holds every model sharing one program so the render pass binds
//! that program once and then renders the whole bucket. Buckets are visited
//! in ascending program order; models within a bucket keep insertion order.

use crate::foundation::collections::{ModelId, SlotMap};
use crate::render::{Camera, GraphicsDevice, ShaderProgram};
use crate::scene::{FrameStats, Model};
use std::collections::BTreeMap;

struct StoredModel {
    /// Bucket the model was filed under when added
    program: ShaderProgram,
    model: Box<dyn Model>,
}

/// Owning store of models, bucketed by shader program
pub struct ModelBuckets {
    models: SlotMap<ModelId, StoredModel>,
    buckets: BTreeMap<ShaderProgram, Vec<ModelId>>,
    capacity_hint: usize,
}

impl ModelBuckets {
    /// Create an empty store; new buckets reserve `capacity_hint` slots
    pub fn new(capacity_hint: usize) -> Self {
        Self {
            models: SlotMap::with_key(),
            buckets: BTreeMap::new(),
            capacity_hint,
        }
    }

    /// Take ownership of `model` and file it under its current program
    ///
    /// Later changes to the model's program do not move it.
    pub fn add(&mut self, model: Box<dyn Model>) -> ModelId {
        let program = model.shader_program();
        let id = self.models.insert(StoredModel { program, model });

        let capacity_hint = self.capacity_hint;
        self.buckets
            .entry(program)
            .or_insert_with(|| Vec::with_capacity(capacity_hint))
            .push(id);

        id
    }

    /// Remove one model, dropping its bucket once empty
    pub fn remove(&mut self, id: ModelId) -> Option<Box<dyn Model>> {
        let stored = self.models.remove(id)?;

        if let Some(bucket) = self.buckets.get_mut(&stored.program) {
            bucket.retain(|&other| other != id);
            if bucket.is_empty() {
                self.buckets.remove(&stored.program);
            }
        }

        Some(stored.model)
    }

    /// Model stored under `id`
    pub fn get(&self, id: ModelId) -> Option<&dyn Model> {
        self.models.get(id).map(|stored| &*stored.model)
    }

    /// Ids filed under `program`, in insertion order
    pub fn bucket(&self, program: ShaderProgram) -> Option<&[ModelId]> {
        self.buckets.get(&program).map(Vec::as_slice)
    }

    /// Programs that currently have a bucket, in render order
    pub fn programs(&self) -> impl Iterator<Item = ShaderProgram> + '_ {
        self.buckets.keys().copied()
    }

    /// Number of models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether no models are stored
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Number of buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Bind each bucket's program once and render its models
    ///
    /// Leaves the last program bound.
    pub fn render(&mut self, device: &mut dyn GraphicsDevice, camera: &Camera) -> FrameStats {
        let mut stats = FrameStats::default();

        for (program, ids) in &self.buckets {
            device.use_program(Some(*program));
            stats.program_binds += 1;

            for id in ids {
                if let Some(stored) = self.models.get_mut(*id) {
                    stored.model.render(camera);
                    stats.dispatched += 1;
                }
            }
        }

        stats
    }

    /// Drop every model and bucket
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.models.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::test_support::{journal, Call, RecordingDevice, TestModel};

    #[test]
    fn test_models_grouped_by_program() {
        let log = journal();
        let mut store = ModelBuckets::new(10);

        let m1 = store.add(TestModel::boxed("m1", ShaderProgram(1), &log));
        let m2 = store.add(TestModel::boxed("m2", ShaderProgram(2), &log));
        let m3 = store.add(TestModel::boxed("m3", ShaderProgram(1), &log));

        assert_eq!(store.bucket(ShaderProgram(1)), Some(&[m1, m3][..]));
        assert_eq!(store.bucket(ShaderProgram(2)), Some(&[m2][..]));
        assert_eq!(store.bucket_count(), 2);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_new_bucket_reserves_capacity_hint() {
        let log = journal();
        let mut store = ModelBuckets::new(10);
        store.add(TestModel::boxed("m1", ShaderProgram(4), &log));

        assert!(store.buckets[&ShaderProgram(4)].capacity() >= 10);
    }

    #[test]
    fn test_render_binds_each_program_once() {
        let log = journal();
        let mut store = ModelBuckets::new(4);
        store.add(TestModel::boxed("b", ShaderProgram(9), &log));
        store.add(TestModel::boxed("a1", ShaderProgram(3), &log));
        store.add(TestModel::boxed("a2", ShaderProgram(3), &log));

        let mut device = RecordingDevice::new(&log);
        let stats = store.render(&mut device, &Camera::default());

        assert_eq!(stats.program_binds, 2);
        assert_eq!(stats.dispatched, 3);
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Call::UseProgram(Some(ShaderProgram(3))),
                Call::Render("a1".to_string()),
                Call::Render("a2".to_string()),
                Call::UseProgram(Some(ShaderProgram(9))),
                Call::Render("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_remove_drops_empty_bucket() {
        let log = journal();
        let mut store = ModelBuckets::new(10);
        let m1 = store.add(TestModel::boxed("m1", ShaderProgram(1), &log));
        let m2 = store.add(TestModel::boxed("m2", ShaderProgram(2), &log));

        drop(store.remove(m1));
        assert!(store.bucket(ShaderProgram(1)).is_none());
        assert!(store.get(m1).is_none());
        assert!(store.remove(m1).is_none());
        assert_eq!(store.programs().collect::<Vec<_>>(), [ShaderProgram(2)]);
        assert!(store.get(m2).is_some());
        assert!(log.borrow().contains(&Call::Dropped("m1".to_string())));
    }

    #[test]
    fn test_clear_drops_every_model() {
        let log = journal();
        let mut store = ModelBuckets::new(10);
        store.clear();

        store.add(TestModel::boxed("m1", ShaderProgram(1), &log));
        store.add(TestModel::boxed("m2", ShaderProgram(1), &log));
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.bucket_count(), 0);
        let dropped = log
            .borrow()
            .iter()
            .filter(|call| matches!(call, Call::Dropped(_)))
            .count();
        assert_eq!(dropped, 2);
    }
}
