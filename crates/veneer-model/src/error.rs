//! Error types for descriptor construction

/// Errors raised while constructing a validated [`PropertyDescriptor`].
///
/// The exposure engine itself never fails; these errors only surface from
/// [`PropertyDescriptor::for_class`], which embedders call from their tuners.
///
/// [`PropertyDescriptor`]: crate::PropertyDescriptor
/// [`PropertyDescriptor::for_class`]: crate::PropertyDescriptor::for_class
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// An accessor refers to a method the class neither declares nor inherits
    #[error("Property '{property}': accessor {accessor} does not belong to class {class}")]
    ForeignAccessor {
        /// Property being constructed
        property: String,
        /// Offending accessor signature
        accessor: String,
        /// Class the descriptor was built for
        class: String,
    },

    /// Every accessor slot is empty
    #[error("Property '{0}' has no accessor methods")]
    NoAccessor(String),

    /// Property name is empty
    #[error("Property name cannot be empty")]
    EmptyName,
}
