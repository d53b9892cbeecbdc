//! Per-method exposure decisions

use serde::{Deserialize, Serialize};

use crate::{CandidateMethod, PropertyDescriptor};

/// How one candidate method appears in the dynamic view.
///
/// Tuners receive the default decision by value and return the final one,
/// so a decision is never aliased between methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureDecision {
    /// Name the method is exposed under; `None` hides it entirely
    pub exposed_as: Option<String>,
    /// Fake property to fabricate from this method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthetic_property: Option<PropertyDescriptor>,
    /// Whether the method wins a name collision with a property
    #[serde(default = "default_shadows")]
    pub method_shadows_property: bool,
}

fn default_shadows() -> bool {
    true
}

impl ExposureDecision {
    /// Default behavior: exposed under its native name, no synthetic
    /// property, shadows a same-named property.
    pub fn default_for(method: &CandidateMethod) -> Self {
        Self {
            exposed_as: Some(method.name().to_string()),
            synthetic_property: None,
            method_shadows_property: true,
        }
    }

    /// Hide the method from the dynamic view
    pub fn hidden(mut self) -> Self {
        self.exposed_as = None;
        self
    }

    /// Expose the method under a different name
    pub fn exposed_as(mut self, name: impl Into<String>) -> Self {
        self.exposed_as = Some(name.into());
        self
    }

    /// Also expose the method as a fake property
    pub fn with_synthetic_property(mut self, property: PropertyDescriptor) -> Self {
        self.synthetic_property = Some(property);
        self
    }

    /// Set whether the method shadows a same-named property
    pub fn shadowing_property(mut self, shadows: bool) -> Self {
        self.method_shadows_property = shadows;
        self
    }

    /// Whether the method is hidden
    pub fn is_hidden(&self) -> bool {
        self.exposed_as.is_none()
    }
}
