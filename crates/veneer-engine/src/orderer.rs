//! Deterministic ordering of overloaded methods
//!
//! Used for stable diagnostics and as the last-resort tie-break when a
//! dispatcher's specificity ranking cannot separate two candidates.

use std::cmp::{Ordering, Reverse};

use veneer_model::CandidateMethod;

/// Strategy producing a total order over a method collection.
///
/// Implementations are pure and reentrant. [`MethodOrderer::order`] sorts
/// stably, so entries comparing equal keep their input order on every call.
pub trait MethodOrderer: Send + Sync {
    /// Compare two methods
    fn compare(&self, a: &CandidateMethod, b: &CandidateMethod) -> Ordering;

    /// Order a method collection
    fn order<'a>(&self, mut methods: Vec<&'a CandidateMethod>) -> Vec<&'a CandidateMethod> {
        methods.sort_by(|a, b| self.compare(a, b));
        methods
    }

    /// Short name for diagnostics
    fn describe(&self) -> String;
}

/// Orders by fully qualified textual signature, lexicographically
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignatureOrderer {
    descending: bool,
}

impl SignatureOrderer {
    /// Create an orderer with the given direction
    pub fn new(descending: bool) -> Self {
        Self { descending }
    }

    /// `a` before `b` when `a`'s signature text sorts first
    pub fn ascending() -> Self {
        Self::new(false)
    }

    /// Reverse lexicographic order
    pub fn descending() -> Self {
        Self::new(true)
    }

    /// Whether the order is reversed
    pub fn is_descending(&self) -> bool {
        self.descending
    }
}

impl MethodOrderer for SignatureOrderer {
    fn compare(&self, a: &CandidateMethod, b: &CandidateMethod) -> Ordering {
        let res = a.signature_text().cmp(&b.signature_text());
        if self.descending {
            res.reverse()
        } else {
            res
        }
    }

    // Signature text is rendered once per entry instead of once per comparison.
    fn order<'a>(&self, mut methods: Vec<&'a CandidateMethod>) -> Vec<&'a CandidateMethod> {
        if self.descending {
            methods.sort_by_cached_key(|m| Reverse(m.signature_text()));
        } else {
            methods.sort_by_cached_key(|m| m.signature_text());
        }
        methods
    }

    fn describe(&self) -> String {
        if self.descending {
            "signature (descending)".to_string()
        } else {
            "signature".to_string()
        }
    }
}

/// Orders by scanner declaration position, then by signature text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeclarationOrderer {
    descending: bool,
}

impl DeclarationOrderer {
    /// Create an orderer with the given direction
    pub fn new(descending: bool) -> Self {
        Self { descending }
    }
}

impl MethodOrderer for DeclarationOrderer {
    fn compare(&self, a: &CandidateMethod, b: &CandidateMethod) -> Ordering {
        let res = a
            .declaration_index
            .cmp(&b.declaration_index)
            .then_with(|| a.signature_text().cmp(&b.signature_text()));
        if self.descending {
            res.reverse()
        } else {
            res
        }
    }

    fn describe(&self) -> String {
        if self.descending {
            "declaration (descending)".to_string()
        } else {
            "declaration".to_string()
        }
    }
}
