//! Native class identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a native class.
///
/// Member models are keyed by class identity, never by instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(pub u64);

impl ClassId {
    /// Get the raw id
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ClassId {
    fn from(id: u64) -> Self {
        ClassId(id)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A host class being introspected.
///
/// Immutable for the lifetime of a member-model build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeClass {
    /// Class identity
    pub id: ClassId,
    /// Fully qualified class name
    pub name: String,
}

impl NativeClass {
    /// Create a new class identity
    pub fn new(id: impl Into<ClassId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Unqualified class name (the part after the last `.`)
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

impl fmt::Display for NativeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
