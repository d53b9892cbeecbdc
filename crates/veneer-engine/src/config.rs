//! Exposure configuration (veneer.toml)
//!
//! Selects the exposure level, the overload orderer, and a list of tuning
//! rules applied by [`RuleTuner`].
//!
//! ```toml
//! exposure_level = "safe"
//!
//! [ordering]
//! criterion = "signature"
//! descending = false
//!
//! [[rules]]
//! class = "demo.Box"
//! method = "size"
//! property = "size"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::builder::{ExposureLevel, MemberModelBuilder};
use crate::orderer::{DeclarationOrderer, MethodOrderer, SignatureOrderer};
use crate::rules::RuleTuner;

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error
    #[error("Invalid config: {0}")]
    Validation(String),
}

/// Which criterion orders overload groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderCriterion {
    /// Fully qualified textual signature
    #[default]
    Signature,
    /// Scanner declaration order
    Declaration,
}

/// Overload ordering settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderingConfig {
    /// Ordering criterion
    #[serde(default)]
    pub criterion: OrderCriterion,
    /// Reverse the order
    #[serde(default)]
    pub descending: bool,
}

impl OrderingConfig {
    /// Instantiate the configured orderer
    pub fn orderer(&self) -> Box<dyn MethodOrderer> {
        match self.criterion {
            OrderCriterion::Signature => Box::new(SignatureOrderer::new(self.descending)),
            OrderCriterion::Declaration => Box::new(DeclarationOrderer::new(self.descending)),
        }
    }
}

/// One tuning rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TunerRule {
    /// Qualified class name, or `*` for every class
    #[serde(default = "default_class_pattern")]
    pub class: String,

    /// Native method name
    pub method: String,

    /// Only match overloads with this many parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arity: Option<usize>,

    /// Hide the method
    #[serde(default)]
    pub hide: bool,

    /// Expose the method under another name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rename: Option<String>,

    /// Fabricate a synthetic property with this name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,

    /// Override whether the method shadows a same-named property
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadows_property: Option<bool>,
}

fn default_class_pattern() -> String {
    "*".to_string()
}

impl TunerRule {
    /// Rule matching `method` on every class, changing nothing yet
    pub fn for_method(method: impl Into<String>) -> Self {
        Self {
            class: default_class_pattern(),
            method: method.into(),
            arity: None,
            hide: false,
            rename: None,
            property: None,
            shadows_property: None,
        }
    }

    /// Whether the rule applies to the given class/method/arity
    pub fn matches(&self, class_name: &str, method_name: &str, arity: usize) -> bool {
        (self.class == "*" || self.class == class_name)
            && self.method == method_name
            && self.arity.map_or(true, |a| a == arity)
    }

    fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let invalid = |msg: &str| -> Result<(), ConfigError> {
            Err(ConfigError::Validation(format!(
                "rule #{} ({}): {}",
                index + 1,
                self.method,
                msg
            )))
        };
        if self.method.is_empty() {
            return invalid("method name cannot be empty");
        }
        if self.class.is_empty() {
            return invalid("class pattern cannot be empty");
        }
        if self.rename.as_deref() == Some("") {
            return invalid("rename target cannot be empty");
        }
        if self.property.as_deref() == Some("") {
            return invalid("property name cannot be empty");
        }
        if self.hide && (self.rename.is_some() || self.property.is_some()) {
            return invalid("a hidden method cannot also be renamed or turned into a property");
        }
        Ok(())
    }
}

/// Complete exposure configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExposureConfig {
    /// How much of each class is exposed
    #[serde(default)]
    pub exposure_level: ExposureLevel,

    /// Overload ordering
    #[serde(default)]
    pub ordering: OrderingConfig,

    /// Tuning rules, applied in order
    #[serde(default)]
    pub rules: Vec<TunerRule>,
}

impl ExposureConfig {
    /// Load a config from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a config from a string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: ExposureConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the rules
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, rule) in self.rules.iter().enumerate() {
            rule.validate(index)?;
        }
        Ok(())
    }

    /// Tuner applying the configured rules
    pub fn tuner(&self) -> RuleTuner {
        RuleTuner::new(self.rules.clone())
    }

    /// Configured overload orderer
    pub fn orderer(&self) -> Box<dyn MethodOrderer> {
        self.ordering.orderer()
    }

    /// Builder with the configured tuner and exposure level
    pub fn builder(&self) -> MemberModelBuilder {
        MemberModelBuilder::new(self.tuner()).with_exposure_level(self.exposure_level)
    }
}
