//! Veneer exposure engine
//!
//! Decides how the methods and properties of a native class appear in a
//! dynamically-typed view:
//!
//! - [`MethodAppearanceTuner`] lets an embedder hide, rename, or turn a method
//!   into a synthetic property, and control whether it shadows a property.
//! - [`MemberModelBuilder`] folds the tuned decisions of one class into a
//!   finalized [`MemberModel`], resolving every name collision
//!   deterministically.
//! - [`MethodOrderer`] gives a stable total order over an [`OverloadGroup`]
//!   for diagnostics and last-resort dispatch tie-breaks.
//! - [`MemberModelCache`] publishes exactly one model per class, even under
//!   concurrent first use.
//!
//! ## Usage
//!
//! ```ignore
//! use veneer_engine::{tuner_fn, MemberModelBuilder, SignatureOrderer};
//!
//! let builder = MemberModelBuilder::new(tuner_fn(|_class, method, decision| {
//!     if method.name() == "size" {
//!         decision.exposed_as("count")
//!     } else {
//!         decision
//!     }
//! }));
//! let model = builder.build(&shape);
//! for group in model.overload_groups() {
//!     let ordered = group.ordered(&SignatureOrderer::ascending());
//! }
//! ```

pub mod builder;
pub mod cache;
pub mod config;
pub mod member_model;
pub mod orderer;
pub mod rules;
pub mod shapes;
pub mod tuner;

pub use builder::{ExposureLevel, MemberModelBuilder};
pub use cache::MemberModelCache;
pub use config::{ConfigError, ExposureConfig, OrderCriterion, OrderingConfig, TunerRule};
pub use member_model::{Member, MemberModel, OverloadGroup};
pub use orderer::{DeclarationOrderer, MethodOrderer, SignatureOrderer};
pub use rules::RuleTuner;
pub use shapes::{load_shapes, parse_shapes, ShapeError};
pub use tuner::{tuner_fn, DefaultTuner, MethodAppearanceTuner, TunerChain};

pub use veneer_model::{
    CandidateMethod, ClassId, ClassShape, ExposureDecision, MethodSignature, NativeClass,
    PropertyAccessors, PropertyDescriptor, PropertyOrigin,
};
