//! Member model construction
//!
//! Folds the tuned decisions of one class into a [`MemberModel`]:
//!
//! 1. Candidates are sorted by `(declaration_index, signature text)`, so
//!    "first registered" never depends on scanner iteration order.
//! 2. Each candidate is tuned; hidden methods are dropped.
//! 3. Synthetic properties are registered, first registration wins. A real
//!    property or an earlier synthetic property keeps its name.
//! 4. Methods are registered under their exposed names. Against a property
//!    of the same name, methods with `method_shadows_property` win and the
//!    property is moved to the shadowed table; the others are omitted. The
//!    method that created a synthetic property never takes its name alone;
//!    it only stays callable there when another shadowing method does.
//! 5. Same-named methods are kept together as an [`OverloadGroup`].
//!
//! No step fails. Every conflict has a deterministic resolution.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use veneer_model::{CandidateMethod, ClassShape, ExposureDecision, PropertyDescriptor};

use crate::member_model::{Member, MemberModel, OverloadGroup};
use crate::tuner::{DefaultTuner, MethodAppearanceTuner};

/// How much of a class is exposed at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExposureLevel {
    /// Public, safe methods and properties
    #[default]
    Safe,
    /// Real properties only; the tuner is never consulted
    PropertiesOnly,
    /// Nothing at all
    Nothing,
}

/// A method that survived tuning, waiting for name resolution
struct Registration {
    method: CandidateMethod,
    shadows_property: bool,
}

/// Builds finalized member models from scanner output
#[derive(Clone)]
pub struct MemberModelBuilder {
    tuner: Arc<dyn MethodAppearanceTuner>,
    exposure_level: ExposureLevel,
}

impl std::fmt::Debug for MemberModelBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberModelBuilder")
            .field("exposure_level", &self.exposure_level)
            .finish_non_exhaustive()
    }
}

impl Default for MemberModelBuilder {
    fn default() -> Self {
        Self::new(DefaultTuner)
    }
}

impl MemberModelBuilder {
    /// Create a builder using `tuner`
    pub fn new(tuner: impl MethodAppearanceTuner + 'static) -> Self {
        Self::from_shared(Arc::new(tuner))
    }

    /// Create a builder from a shared tuner
    pub fn from_shared(tuner: Arc<dyn MethodAppearanceTuner>) -> Self {
        Self {
            tuner,
            exposure_level: ExposureLevel::default(),
        }
    }

    /// Set the exposure level
    pub fn with_exposure_level(mut self, level: ExposureLevel) -> Self {
        self.exposure_level = level;
        self
    }

    /// Current exposure level
    pub fn exposure_level(&self) -> ExposureLevel {
        self.exposure_level
    }

    /// Build the member model for one class
    pub fn build(&self, shape: &ClassShape) -> MemberModel {
        let class = &shape.class;
        if self.exposure_level == ExposureLevel::Nothing {
            debug!(class = %class, "exposure level is nothing, empty model");
            return MemberModel::empty(class.clone());
        }

        let mut properties: BTreeMap<String, PropertyDescriptor> = BTreeMap::new();
        for prop in &shape.properties {
            properties
                .entry(prop.name.clone())
                .or_insert_with(|| prop.clone());
        }

        let registrations = if self.exposure_level == ExposureLevel::Safe {
            self.tune_methods(shape, &mut properties)
        } else {
            Vec::new()
        };

        let mut grouped: FxHashMap<String, Vec<Registration>> = FxHashMap::default();
        for (name, registration) in registrations {
            grouped.entry(name).or_default().push(registration);
        }

        // Each name resolves independently, so map iteration order is irrelevant.
        let mut members = BTreeMap::new();
        let mut shadowed = BTreeMap::new();
        for (name, registrations) in grouped {
            let winners: Vec<CandidateMethod> = match properties.get(&name) {
                None => registrations.into_iter().map(|r| r.method).collect(),
                Some(prop) => {
                    // Decided once per name: the property's own source never
                    // takes the name alone, but joins a group that does.
                    let source = prop.synthetic_source();
                    let methods_win = registrations
                        .iter()
                        .any(|r| r.shadows_property && source != Some(&r.method.signature));
                    let (winners, losers): (Vec<_>, Vec<_>) = registrations
                        .into_iter()
                        .partition(|r| methods_win && r.shadows_property);
                    for loser in &losers {
                        trace!(
                            class = %class,
                            name = %name,
                            method = %loser.method,
                            "property keeps name, method omitted"
                        );
                    }
                    winners.into_iter().map(|r| r.method).collect()
                }
            };
            if winners.is_empty() {
                continue;
            }
            if let Some(prop) = properties.remove(&name) {
                trace!(class = %class, name = %name, "method shadows property");
                shadowed.insert(name.clone(), prop);
            }
            members.insert(name.clone(), Member::Methods(OverloadGroup::new(name, winners)));
        }

        for (name, prop) in properties {
            members.insert(name, Member::Property(prop));
        }

        let model = MemberModel::new(class.clone(), members, shadowed);
        debug!(
            class = %class,
            members = model.len(),
            overloaded = model.overload_groups().count(),
            shadowed = model.shadowed_properties().count(),
            "member model built"
        );
        model
    }

    /// Tune every candidate in merge order, registering synthetic properties
    /// as they come. Returns surviving methods with their exposed names.
    fn tune_methods(
        &self,
        shape: &ClassShape,
        properties: &mut BTreeMap<String, PropertyDescriptor>,
    ) -> Vec<(String, Registration)> {
        let class = &shape.class;
        let mut candidates: Vec<&CandidateMethod> = shape.methods.iter().collect();
        candidates.sort_by_cached_key(|m| (m.declaration_index, m.signature_text()));

        let mut registrations = Vec::with_capacity(candidates.len());
        for method in candidates {
            let decision = self
                .tuner
                .tune(class, method, ExposureDecision::default_for(method));
            let Some(exposed_as) = decision.exposed_as else {
                trace!(class = %class, method = %method, "method hidden");
                continue;
            };

            if let Some(prop) = decision.synthetic_property {
                let prop = prop.synthesized_from(method.signature.clone());
                match properties.entry(prop.name.clone()) {
                    Entry::Vacant(slot) => {
                        slot.insert(prop);
                    }
                    Entry::Occupied(existing) => {
                        trace!(
                            class = %class,
                            property = %existing.key(),
                            method = %method,
                            "synthetic property dropped, name already registered"
                        );
                    }
                }
            }

            registrations.push((
                exposed_as,
                Registration {
                    method: method.clone(),
                    shadows_property: decision.method_shadows_property,
                },
            ));
        }
        registrations
    }
}
