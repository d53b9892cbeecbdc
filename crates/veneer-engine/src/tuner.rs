//! Method appearance tuning
//!
//! A tuner is consulted once per candidate method while a member model is
//! built. It receives the default [`ExposureDecision`] and returns the one
//! the builder should use. The order in which candidates are tuned is not
//! part of the contract.

use std::sync::Arc;

use veneer_model::{CandidateMethod, ExposureDecision, NativeClass};

/// Pluggable policy adjusting how each native method appears.
///
/// Implementations may hide a method (`exposed_as = None`), rename it,
/// fabricate a synthetic property from it, or stop it from shadowing a
/// same-named property. They must only look at the method they are given.
///
/// Only public, safe methods are ever passed in; tuners cannot un-hide
/// methods the scanner filtered out.
pub trait MethodAppearanceTuner: Send + Sync {
    /// Return the final decision for `method`, starting from `decision`
    fn tune(
        &self,
        class: &NativeClass,
        method: &CandidateMethod,
        decision: ExposureDecision,
    ) -> ExposureDecision;
}

/// No-op tuner: every method keeps its default decision
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTuner;

impl MethodAppearanceTuner for DefaultTuner {
    fn tune(
        &self,
        _class: &NativeClass,
        _method: &CandidateMethod,
        decision: ExposureDecision,
    ) -> ExposureDecision {
        decision
    }
}

impl<F> MethodAppearanceTuner for F
where
    F: Fn(&NativeClass, &CandidateMethod, ExposureDecision) -> ExposureDecision + Send + Sync,
{
    fn tune(
        &self,
        class: &NativeClass,
        method: &CandidateMethod,
        decision: ExposureDecision,
    ) -> ExposureDecision {
        self(class, method, decision)
    }
}

/// Pin a closure to the tuner signature so its reference parameters are
/// inferred as higher-ranked.
pub fn tuner_fn<F>(f: F) -> F
where
    F: Fn(&NativeClass, &CandidateMethod, ExposureDecision) -> ExposureDecision + Send + Sync,
{
    f
}

/// Applies several tuners in sequence, each seeing the previous output
#[derive(Default, Clone)]
pub struct TunerChain {
    tuners: Vec<Arc<dyn MethodAppearanceTuner>>,
}

impl TunerChain {
    /// Create an empty chain (behaves like [`DefaultTuner`])
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tuner
    pub fn then(mut self, tuner: impl MethodAppearanceTuner + 'static) -> Self {
        self.tuners.push(Arc::new(tuner));
        self
    }

    /// Append a shared tuner
    pub fn then_shared(mut self, tuner: Arc<dyn MethodAppearanceTuner>) -> Self {
        self.tuners.push(tuner);
        self
    }

    /// Number of tuners in the chain
    pub fn len(&self) -> usize {
        self.tuners.len()
    }

    /// Check if the chain is empty
    pub fn is_empty(&self) -> bool {
        self.tuners.is_empty()
    }
}

impl std::fmt::Debug for TunerChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TunerChain")
            .field("count", &self.tuners.len())
            .finish()
    }
}

impl MethodAppearanceTuner for TunerChain {
    fn tune(
        &self,
        class: &NativeClass,
        method: &CandidateMethod,
        decision: ExposureDecision,
    ) -> ExposureDecision {
        self.tuners
            .iter()
            .fold(decision, |decision, tuner| tuner.tune(class, method, decision))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_model::MethodSignature;

    fn setup() -> (NativeClass, CandidateMethod) {
        let class = NativeClass::new(1, "demo.Box");
        let method = CandidateMethod::new(MethodSignature::new("demo.Box", "size", "int"), 0);
        (class, method)
    }

    #[test]
    fn test_default_tuner_is_identity() {
        let (class, method) = setup();
        let default = ExposureDecision::default_for(&method);
        assert_eq!(DefaultTuner.tune(&class, &method, default.clone()), default);
    }

    #[test]
    fn test_closure_tuner() {
        let (class, method) = setup();
        let tuner = tuner_fn(|_, m, d| {
            if m.name() == "size" {
                d.exposed_as("count")
            } else {
                d
            }
        });
        let decision = tuner.tune(&class, &method, ExposureDecision::default_for(&method));
        assert_eq!(decision.exposed_as.as_deref(), Some("count"));
    }

    #[test]
    fn test_chain_applies_in_order() {
        let (class, method) = setup();
        let chain = TunerChain::new()
            .then(tuner_fn(|_, _, d| d.exposed_as("first")))
            .then(tuner_fn(|_, _, d| {
                let renamed = format!("{}_second", d.exposed_as.as_deref().unwrap_or(""));
                d.exposed_as(renamed)
            }));
        assert_eq!(chain.len(), 2);

        let decision = chain.tune(&class, &method, ExposureDecision::default_for(&method));
        assert_eq!(decision.exposed_as.as_deref(), Some("first_second"));
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let (class, method) = setup();
        let chain = TunerChain::new();
        assert!(chain.is_empty());
        let default = ExposureDecision::default_for(&method);
        assert_eq!(chain.tune(&class, &method, default.clone()), default);
    }
}
