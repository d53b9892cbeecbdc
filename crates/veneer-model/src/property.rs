//! Property descriptors (real and synthetic)

use serde::{Deserialize, Serialize};

use crate::{ClassShape, DescriptorError, MethodSignature};

/// Accessor methods backing a property
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyAccessors {
    /// Conventional getter/setter pair
    Plain {
        /// Read accessor
        #[serde(default, skip_serializing_if = "Option::is_none")]
        read: Option<MethodSignature>,
        /// Write accessor
        #[serde(default, skip_serializing_if = "Option::is_none")]
        write: Option<MethodSignature>,
    },
    /// Indexed property with a separate index-read/index-write pair
    Indexed {
        /// Whole-value read accessor
        #[serde(default, skip_serializing_if = "Option::is_none")]
        read: Option<MethodSignature>,
        /// Whole-value write accessor
        #[serde(default, skip_serializing_if = "Option::is_none")]
        write: Option<MethodSignature>,
        /// Element read accessor, `T get(int)`
        #[serde(default, skip_serializing_if = "Option::is_none")]
        indexed_read: Option<MethodSignature>,
        /// Element write accessor, `void set(int, T)`
        #[serde(default, skip_serializing_if = "Option::is_none")]
        indexed_write: Option<MethodSignature>,
    },
}

impl PropertyAccessors {
    /// All accessor methods that are present
    pub fn methods(&self) -> impl Iterator<Item = &MethodSignature> {
        let slots: [Option<&MethodSignature>; 4] = match self {
            PropertyAccessors::Plain { read, write } => [read.as_ref(), write.as_ref(), None, None],
            PropertyAccessors::Indexed {
                read,
                write,
                indexed_read,
                indexed_write,
            } => [
                read.as_ref(),
                write.as_ref(),
                indexed_read.as_ref(),
                indexed_write.as_ref(),
            ],
        };
        slots.into_iter().flatten()
    }

    /// Whole-value read accessor
    pub fn read(&self) -> Option<&MethodSignature> {
        match self {
            PropertyAccessors::Plain { read, .. } | PropertyAccessors::Indexed { read, .. } => {
                read.as_ref()
            }
        }
    }

    /// Whether this is an indexed property
    pub fn is_indexed(&self) -> bool {
        matches!(self, PropertyAccessors::Indexed { .. })
    }
}

/// Where a property came from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum PropertyOrigin {
    /// Discovered by the scanner
    #[default]
    Real,
    /// Fabricated from a method by a tuner decision
    Synthetic {
        /// Candidate whose decision requested the property
        method: MethodSignature,
    },
}

/// A property exposed (or exposable) in the dynamic view
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Property name
    pub name: String,
    /// Backing accessors
    pub accessors: PropertyAccessors,
    /// Real or synthetic
    #[serde(default)]
    pub origin: PropertyOrigin,
}

impl PropertyDescriptor {
    /// Create a real property from its accessors
    pub fn new(name: impl Into<String>, accessors: PropertyAccessors) -> Self {
        Self {
            name: name.into(),
            accessors,
            origin: PropertyOrigin::Real,
        }
    }

    /// Read-only property backed by a single getter.
    ///
    /// Not validated against any class; see [`PropertyDescriptor::for_class`].
    pub fn read_only(name: impl Into<String>, read: MethodSignature) -> Self {
        Self::new(
            name,
            PropertyAccessors::Plain {
                read: Some(read),
                write: None,
            },
        )
    }

    /// Read/write property backed by a getter and a setter
    pub fn read_write(
        name: impl Into<String>,
        read: MethodSignature,
        write: MethodSignature,
    ) -> Self {
        Self::new(
            name,
            PropertyAccessors::Plain {
                read: Some(read),
                write: Some(write),
            },
        )
    }

    /// Indexed property with element accessors
    pub fn indexed(
        name: impl Into<String>,
        indexed_read: MethodSignature,
        indexed_write: Option<MethodSignature>,
    ) -> Self {
        Self::new(
            name,
            PropertyAccessors::Indexed {
                read: None,
                write: None,
                indexed_read: Some(indexed_read),
                indexed_write,
            },
        )
    }

    /// Build a descriptor whose accessors are checked against a class shape.
    ///
    /// Every accessor must be one of the shape's methods (declared or
    /// inherited). This is the validation step tuners should go through when
    /// they fabricate properties from untrusted configuration.
    pub fn for_class(
        shape: &ClassShape,
        name: impl Into<String>,
        accessors: PropertyAccessors,
    ) -> Result<Self, DescriptorError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DescriptorError::EmptyName);
        }
        if accessors.methods().next().is_none() {
            return Err(DescriptorError::NoAccessor(name));
        }
        if let Some(foreign) = accessors.methods().find(|m| !shape.has_method(m)) {
            return Err(DescriptorError::ForeignAccessor {
                property: name,
                accessor: foreign.to_string(),
                class: shape.class.name.clone(),
            });
        }
        Ok(Self::new(name, accessors))
    }

    /// Re-attribute this descriptor as synthetic, fabricated from `method`
    pub fn synthesized_from(mut self, method: MethodSignature) -> Self {
        self.origin = PropertyOrigin::Synthetic { method };
        self
    }

    /// Whether the property was fabricated by a tuner
    pub fn is_synthetic(&self) -> bool {
        matches!(self.origin, PropertyOrigin::Synthetic { .. })
    }

    /// The candidate that fabricated this property, if synthetic
    pub fn synthetic_source(&self) -> Option<&MethodSignature> {
        match &self.origin {
            PropertyOrigin::Synthetic { method } => Some(method),
            PropertyOrigin::Real => None,
        }
    }

    /// Whole-value read accessor
    pub fn read_method(&self) -> Option<&MethodSignature> {
        self.accessors.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CandidateMethod, NativeClass};

    fn box_shape() -> ClassShape {
        ClassShape::new(NativeClass::new(1, "demo.Box"))
            .with_method(CandidateMethod::new(
                MethodSignature::new("demo.Box", "size", "int"),
                0,
            ))
            .with_method(CandidateMethod::new(
                MethodSignature::new("demo.Box", "get", "java.lang.Object").param("int"),
                1,
            ))
    }

    #[test]
    fn test_read_only_descriptor() {
        let size = MethodSignature::new("demo.Box", "size", "int");
        let desc = PropertyDescriptor::read_only("size", size.clone());
        assert_eq!(desc.read_method(), Some(&size));
        assert!(!desc.is_synthetic());
        assert!(!desc.accessors.is_indexed());
    }

    #[test]
    fn test_synthesized_from() {
        let size = MethodSignature::new("demo.Box", "size", "int");
        let desc =
            PropertyDescriptor::read_only("size", size.clone()).synthesized_from(size.clone());
        assert!(desc.is_synthetic());
        assert_eq!(desc.synthetic_source(), Some(&size));
    }

    #[test]
    fn test_indexed_accessors() {
        let get = MethodSignature::new("demo.Box", "get", "java.lang.Object").param("int");
        let desc = PropertyDescriptor::indexed("items", get.clone(), None);
        assert!(desc.accessors.is_indexed());
        assert_eq!(desc.read_method(), None);
        assert_eq!(desc.accessors.methods().collect::<Vec<_>>(), vec![&get]);
    }

    #[test]
    fn test_for_class_accepts_own_methods() {
        let shape = box_shape();
        let desc = PropertyDescriptor::for_class(
            &shape,
            "items",
            PropertyAccessors::Indexed {
                read: None,
                write: None,
                indexed_read: Some(
                    MethodSignature::new("demo.Box", "get", "java.lang.Object").param("int"),
                ),
                indexed_write: None,
            },
        )
        .unwrap();
        assert_eq!(desc.name, "items");
        assert_eq!(desc.origin, PropertyOrigin::Real);
    }

    #[test]
    fn test_for_class_rejects_foreign_accessor() {
        let shape = box_shape();
        let err = PropertyDescriptor::for_class(
            &shape,
            "name",
            PropertyAccessors::Plain {
                read: Some(MethodSignature::new("demo.Other", "name", "java.lang.String")),
                write: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, DescriptorError::ForeignAccessor { .. }));
        assert!(err.to_string().contains("demo.Other.name()"));
    }

    #[test]
    fn test_for_class_rejects_empty() {
        let shape = box_shape();
        let err = PropertyDescriptor::for_class(
            &shape,
            "ghost",
            PropertyAccessors::Plain {
                read: None,
                write: None,
            },
        )
        .unwrap_err();
        assert_eq!(err, DescriptorError::NoAccessor("ghost".to_string()));

        let size = MethodSignature::new("demo.Box", "size", "int");
        let err = PropertyDescriptor::for_class(
            &shape,
            "",
            PropertyAccessors::Plain {
                read: Some(size),
                write: None,
            },
        )
        .unwrap_err();
        assert_eq!(err, DescriptorError::EmptyName);
    }
}
