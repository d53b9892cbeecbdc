//! Scanner output for a single class

use serde::{Deserialize, Serialize};

use crate::{CandidateMethod, MethodSignature, NativeClass, PropertyDescriptor};

/// Everything the scanner knows about one class.
///
/// `methods` are already filtered to public, safe methods; `properties` are
/// the real (scanner-discovered) properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassShape {
    /// Class identity
    pub class: NativeClass,
    /// Candidate methods, declared and inherited
    #[serde(default)]
    pub methods: Vec<CandidateMethod>,
    /// Real properties
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}

impl ClassShape {
    /// Create an empty shape
    pub fn new(class: NativeClass) -> Self {
        Self {
            class,
            methods: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Add a candidate method
    pub fn with_method(mut self, method: CandidateMethod) -> Self {
        self.methods.push(method);
        self
    }

    /// Add a candidate method at the next declaration position
    pub fn declare(mut self, signature: MethodSignature) -> Self {
        let index = self.methods.len();
        self.methods.push(CandidateMethod::new(signature, index));
        self
    }

    /// Add a real property
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Whether `signature` is one of this class's candidate methods
    pub fn has_method(&self, signature: &MethodSignature) -> bool {
        self.methods.iter().any(|m| &m.signature == signature)
    }

    /// Candidates with the given native name, in declaration order
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a CandidateMethod> {
        self.methods.iter().filter(move |m| m.name() == name)
    }

    /// Real property by name
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }
}
