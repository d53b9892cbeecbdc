//! Configuration-driven tuner

use tracing::trace;
use veneer_model::{CandidateMethod, ExposureDecision, NativeClass, PropertyDescriptor};

use crate::config::TunerRule;
use crate::tuner::MethodAppearanceTuner;

/// Applies [`TunerRule`]s to every candidate.
///
/// Matching rules are applied in order; a hiding rule ends rule application
/// for that method. A `property` rule fabricates a read-only property from a
/// zero-parameter method, or an indexed property from a one-parameter
/// method; other arities are left without a property.
#[derive(Debug, Clone, Default)]
pub struct RuleTuner {
    rules: Vec<TunerRule>,
}

impl RuleTuner {
    /// Create a tuner from rules
    pub fn new(rules: Vec<TunerRule>) -> Self {
        Self { rules }
    }

    /// Configured rules
    pub fn rules(&self) -> &[TunerRule] {
        &self.rules
    }
}

impl MethodAppearanceTuner for RuleTuner {
    fn tune(
        &self,
        class: &NativeClass,
        method: &CandidateMethod,
        mut decision: ExposureDecision,
    ) -> ExposureDecision {
        for rule in self
            .rules
            .iter()
            .filter(|r| r.matches(&class.name, method.name(), method.arity()))
        {
            if rule.hide {
                return decision.hidden();
            }
            if let Some(name) = &rule.rename {
                decision = decision.exposed_as(name.clone());
            }
            if let Some(name) = &rule.property {
                let signature = method.signature.clone();
                match method.arity() {
                    0 => {
                        let prop = PropertyDescriptor::read_only(name.clone(), signature);
                        decision = decision.with_synthetic_property(prop);
                    }
                    1 => {
                        let prop = PropertyDescriptor::indexed(name.clone(), signature, None);
                        decision = decision.with_synthetic_property(prop);
                    }
                    arity => {
                        trace!(
                            class = %class,
                            method = %method,
                            arity,
                            "no property shape for this arity, rule ignored"
                        );
                    }
                }
            }
            if let Some(shadows) = rule.shadows_property {
                decision = decision.shadowing_property(shadows);
            }
        }
        decision
    }
}
