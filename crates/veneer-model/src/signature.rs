//! Method signatures and scanner candidates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualified textual type name (`"int"`, `"java.lang.String"`)
pub type TypeName = String;

/// Full signature of a native method.
///
/// The `Display` form is the fully qualified textual signature, e.g.
/// `int demo.Box.size()` or `void demo.Log.format(java.lang.String,java.lang.Object...)`.
/// Signatures are unique per class, so the text doubles as a method key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSignature {
    /// Qualified name of the declaring class (may be a superclass)
    pub declaring_class: String,
    /// Native method name
    pub name: String,
    /// Parameter types in order
    #[serde(default)]
    pub parameters: Vec<TypeName>,
    /// Return type
    pub return_type: TypeName,
    /// Whether the last parameter is variadic
    #[serde(default)]
    pub varargs: bool,
}

impl MethodSignature {
    /// Create a zero-parameter signature
    pub fn new(
        declaring_class: impl Into<String>,
        name: impl Into<String>,
        return_type: impl Into<TypeName>,
    ) -> Self {
        Self {
            declaring_class: declaring_class.into(),
            name: name.into(),
            parameters: Vec::new(),
            return_type: return_type.into(),
            varargs: false,
        }
    }

    /// Append a parameter type
    pub fn param(mut self, ty: impl Into<TypeName>) -> Self {
        self.parameters.push(ty.into());
        self
    }

    /// Mark the last parameter as variadic
    pub fn variadic(mut self) -> Self {
        self.varargs = !self.parameters.is_empty();
        self
    }

    /// Number of declared parameters
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Whether a call with `arg_count` arguments fits this signature.
    ///
    /// A variadic signature accepts its fixed parameters plus zero or more
    /// trailing arguments.
    pub fn accepts_arity(&self, arg_count: usize) -> bool {
        if self.varargs {
            arg_count + 1 >= self.parameters.len()
        } else {
            arg_count == self.parameters.len()
        }
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}.{}(", self.return_type, self.declaring_class, self.name)?;
        let last = self.parameters.len().saturating_sub(1);
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(param)?;
            if self.varargs && i == last {
                f.write_str("...")?;
            }
        }
        f.write_str(")")
    }
}

/// A public, safe native method handed over by the scanner.
///
/// Unsafe or non-public methods are filtered before this point and never
/// become candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateMethod {
    /// Method signature
    pub signature: MethodSignature,
    /// Position in the scanner's declaration order
    pub declaration_index: usize,
}

impl CandidateMethod {
    /// Create a candidate at the given declaration position
    pub fn new(signature: MethodSignature, declaration_index: usize) -> Self {
        Self {
            signature,
            declaration_index,
        }
    }

    /// Native method name
    pub fn name(&self) -> &str {
        &self.signature.name
    }

    /// Number of declared parameters
    pub fn arity(&self) -> usize {
        self.signature.arity()
    }

    /// Fully qualified textual signature
    pub fn signature_text(&self) -> String {
        self.signature.to_string()
    }
}

impl fmt::Display for CandidateMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.signature, f)
    }
}
