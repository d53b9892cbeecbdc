//! Per-class member model cache
//!
//! Models are built once per class and then shared. Published models sit in
//! a `DashMap` that readers hit without taking any build lock. A first build
//! goes through a per-class `parking_lot::Mutex` and re-checks the published
//! map after acquiring it, so concurrent first use of the same class builds
//! and publishes exactly one model. Readers only ever receive a complete
//! `Arc<MemberModel>`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::debug;
use veneer_model::{ClassId, ClassShape};

use crate::builder::MemberModelBuilder;
use crate::member_model::MemberModel;

/// Publishes one immutable [`MemberModel`] per class
pub struct MemberModelCache {
    builder: MemberModelBuilder,
    published: DashMap<ClassId, Arc<MemberModel>>,
    build_locks: DashMap<ClassId, Arc<Mutex<()>>>,
    builds: AtomicU64,
}

impl MemberModelCache {
    /// Create an empty cache using `builder`
    pub fn new(builder: MemberModelBuilder) -> Self {
        Self {
            builder,
            published: DashMap::new(),
            build_locks: DashMap::new(),
            builds: AtomicU64::new(0),
        }
    }

    /// Get the published model for the shape's class, building it on first use
    pub fn get_or_build(&self, shape: &ClassShape) -> Arc<MemberModel> {
        let id = shape.class.id;
        if let Some(model) = self.get(id) {
            return model;
        }

        let lock = Arc::clone(
            self.build_locks
                .entry(id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .value(),
        );
        let _guard = lock.lock();

        // Another caller may have published while we waited
        if let Some(model) = self.get(id) {
            return model;
        }

        let model = Arc::new(self.builder.build(shape));
        self.published.insert(id, Arc::clone(&model));
        self.builds.fetch_add(1, Ordering::Relaxed);
        debug!(class = %shape.class, id = %id, "member model published");
        model
    }

    /// Get an already published model
    pub fn get(&self, id: ClassId) -> Option<Arc<MemberModel>> {
        self.published.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    /// Check if a model is published for `id`
    pub fn contains(&self, id: ClassId) -> bool {
        self.published.contains_key(&id)
    }

    /// Number of published models
    pub fn len(&self) -> usize {
        self.published.len()
    }

    /// Check if no model is published
    pub fn is_empty(&self) -> bool {
        self.published.is_empty()
    }

    /// Number of builds performed since creation
    pub fn builds(&self) -> u64 {
        self.builds.load(Ordering::Relaxed)
    }

    /// Drop every published model; later requests rebuild.
    ///
    /// Build locks are kept so a clear racing with a first build still
    /// serializes builds of the same class.
    pub fn clear(&self) {
        let dropped = self.published.len();
        self.published.clear();
        debug!(dropped, "member model cache cleared");
    }

    /// Swap the builder (e.g. after a configuration change) and drop every
    /// published model
    pub fn reconfigure(&mut self, builder: MemberModelBuilder) {
        self.builder = builder;
        self.clear();
    }

    /// Builder used for new models
    pub fn builder(&self) -> &MemberModelBuilder {
        &self.builder
    }
}

impl Default for MemberModelCache {
    fn default() -> Self {
        Self::new(MemberModelBuilder::default())
    }
}

impl std::fmt::Debug for MemberModelCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberModelCache")
            .field("published", &self.published.len())
            .field("builds", &self.builds())
            .finish()
    }
}
