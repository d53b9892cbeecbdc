//! Class shape files
//!
//! A shape file describes scanner output on disk so models can be built and
//! inspected without a live scanner:
//!
//! ```toml
//! [[classes]]
//! id = 1
//! name = "demo.Box"
//!
//! [[classes.methods]]
//! name = "size"
//! return_type = "int"
//!
//! [[classes.properties]]
//! name = "empty"
//! read = "isEmpty"
//! ```
//!
//! Property accessors are given by method name and resolved against the
//! class's methods by arity: `read` takes no parameter, `write` and
//! `indexed_read` take one, `indexed_write` takes two. Exactly one overload
//! must match; a name with two overloads of the accessor's arity is rejected.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use veneer_model::{
    CandidateMethod, ClassShape, DescriptorError, MethodSignature, NativeClass, PropertyAccessors,
    PropertyDescriptor, TypeName,
};

/// Errors that can occur while loading shapes
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Failed to read the shape file
    #[error("Failed to read shape file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse shape file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two classes share an id
    #[error("Duplicate class id {0}")]
    DuplicateClass(u64),

    /// A property accessor names no matching method
    #[error("Class {class}: property '{property}' refers to unknown method {method}/{arity}")]
    UnknownAccessor {
        /// Class name
        class: String,
        /// Property name
        property: String,
        /// Accessor method name
        method: String,
        /// Expected parameter count
        arity: usize,
    },

    /// A property accessor matches several overloads of the same arity
    #[error("Class {class}: property '{property}' accessor {method}/{arity} is ambiguous")]
    AmbiguousAccessor {
        /// Class name
        class: String,
        /// Property name
        property: String,
        /// Accessor method name
        method: String,
        /// Expected parameter count
        arity: usize,
        /// Number of matching overloads
        count: usize,
    },

    /// Descriptor construction failed
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}

#[derive(Debug, Deserialize)]
struct ShapesFile {
    #[serde(default)]
    classes: Vec<ClassEntry>,
}

#[derive(Debug, Deserialize)]
struct ClassEntry {
    id: u64,
    name: String,
    #[serde(default)]
    methods: Vec<MethodEntry>,
    #[serde(default)]
    properties: Vec<PropertyEntry>,
}

#[derive(Debug, Deserialize)]
struct MethodEntry {
    name: String,
    #[serde(default)]
    declaring_class: Option<String>,
    #[serde(default)]
    parameters: Vec<TypeName>,
    #[serde(default = "default_return_type")]
    return_type: TypeName,
    #[serde(default)]
    varargs: bool,
    #[serde(default)]
    declaration_index: Option<usize>,
}

fn default_return_type() -> TypeName {
    "void".to_string()
}

#[derive(Debug, Deserialize)]
struct PropertyEntry {
    name: String,
    read: Option<String>,
    write: Option<String>,
    indexed_read: Option<String>,
    indexed_write: Option<String>,
}

/// Load class shapes from a TOML file
pub fn load_shapes(path: &Path) -> Result<Vec<ClassShape>, ShapeError> {
    let content = std::fs::read_to_string(path)?;
    parse_shapes(&content)
}

/// Parse class shapes from TOML text
pub fn parse_shapes(content: &str) -> Result<Vec<ClassShape>, ShapeError> {
    let file: ShapesFile = toml::from_str(content)?;
    let mut seen = HashSet::new();
    let mut shapes = Vec::with_capacity(file.classes.len());
    for entry in file.classes {
        if !seen.insert(entry.id) {
            return Err(ShapeError::DuplicateClass(entry.id));
        }
        shapes.push(entry.into_shape()?);
    }
    Ok(shapes)
}

impl ClassEntry {
    fn into_shape(self) -> Result<ClassShape, ShapeError> {
        let mut shape = ClassShape::new(NativeClass::new(self.id, self.name));
        for (position, m) in self.methods.into_iter().enumerate() {
            let signature = MethodSignature {
                declaring_class: m.declaring_class.unwrap_or_else(|| shape.class.name.clone()),
                name: m.name,
                parameters: m.parameters,
                return_type: m.return_type,
                varargs: m.varargs,
            };
            shape = shape.with_method(CandidateMethod::new(
                signature,
                m.declaration_index.unwrap_or(position),
            ));
        }

        let mut properties = Vec::with_capacity(self.properties.len());
        for p in &self.properties {
            let resolve = |method: &Option<String>, arity: usize| {
                resolve_accessor(&shape, &p.name, method.as_deref(), arity)
            };
            let accessors = if p.indexed_read.is_some() || p.indexed_write.is_some() {
                PropertyAccessors::Indexed {
                    read: resolve(&p.read, 0)?,
                    write: resolve(&p.write, 1)?,
                    indexed_read: resolve(&p.indexed_read, 1)?,
                    indexed_write: resolve(&p.indexed_write, 2)?,
                }
            } else {
                PropertyAccessors::Plain {
                    read: resolve(&p.read, 0)?,
                    write: resolve(&p.write, 1)?,
                }
            };
            let prop = PropertyDescriptor::for_class(&shape, p.name.clone(), accessors)?;
            properties.push(prop);
        }

        for prop in properties {
            shape = shape.with_property(prop);
        }
        Ok(shape)
    }
}

/// Find the single method named `method` taking `arity` parameters
fn resolve_accessor(
    shape: &ClassShape,
    property: &str,
    method: Option<&str>,
    arity: usize,
) -> Result<Option<MethodSignature>, ShapeError> {
    let Some(method) = method else {
        return Ok(None);
    };
    let matches: Vec<&CandidateMethod> = shape
        .methods_named(method)
        .filter(|m| m.arity() == arity)
        .collect();
    match matches.as_slice() {
        [only] => Ok(Some(only.signature.clone())),
        [] => Err(ShapeError::UnknownAccessor {
            class: shape.class.name.clone(),
            property: property.to_string(),
            method: method.to_string(),
            arity,
        }),
        _ => Err(ShapeError::AmbiguousAccessor {
            class: shape.class.name.clone(),
            property: property.to_string(),
            method: method.to_string(),
            arity,
            count: matches.len(),
        }),
    }
}
