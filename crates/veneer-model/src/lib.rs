//! Veneer model - the data shared between scanners, embedders and the engine
//!
//! A scanner introspects a native class and produces a [`ClassShape`]: the
//! class identity, its public and safe [`CandidateMethod`]s, and its real
//! [`PropertyDescriptor`]s. The exposure engine turns each candidate into an
//! [`ExposureDecision`] (possibly adjusted by an embedder's tuner) and folds
//! the decisions into a finalized member model.
//!
//! This crate has no engine logic. It only defines the vocabulary.
//!
//! # Example
//!
//! ```ignore
//! use veneer_model::{CandidateMethod, ClassShape, MethodSignature, NativeClass};
//!
//! let class = NativeClass::new(1, "demo.Box");
//! let size = MethodSignature::new("demo.Box", "size", "int");
//! let shape = ClassShape::new(class).with_method(CandidateMethod::new(size, 0));
//! ```

#![warn(missing_docs)]

mod class;
mod decision;
mod error;
mod property;
mod shape;
mod signature;

pub use class::{ClassId, NativeClass};
pub use decision::ExposureDecision;
pub use error::DescriptorError;
pub use property::{PropertyAccessors, PropertyDescriptor, PropertyOrigin};
pub use shape::ClassShape;
pub use signature::{CandidateMethod, MethodSignature, TypeName};
