//! Finalized per-class member models

use std::collections::BTreeMap;

use serde::Serialize;
use veneer_model::{CandidateMethod, MethodSignature, NativeClass, PropertyDescriptor};

use crate::orderer::MethodOrderer;

/// Methods sharing one exposed name on one class.
///
/// Methods are kept in merge order (declaration order, then signature). A
/// dispatcher picks among them by argument types; [`OverloadGroup::ordered`]
/// is only for diagnostics and fully ambiguous ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverloadGroup {
    name: String,
    methods: Vec<CandidateMethod>,
}

impl OverloadGroup {
    pub(crate) fn new(name: String, methods: Vec<CandidateMethod>) -> Self {
        Self { name, methods }
    }

    /// Exposed name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of methods in the group
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Always false for groups inside a model
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Whether more than one signature shares the name
    pub fn is_overloaded(&self) -> bool {
        self.methods.len() > 1
    }

    /// Methods in merge order
    pub fn iter(&self) -> impl Iterator<Item = &CandidateMethod> {
        self.methods.iter()
    }

    /// Whether the group contains `signature`
    pub fn contains(&self, signature: &MethodSignature) -> bool {
        self.methods.iter().any(|m| &m.signature == signature)
    }

    /// Methods in the orderer's order
    pub fn ordered(&self, orderer: &dyn MethodOrderer) -> Vec<&CandidateMethod> {
        orderer.order(self.methods.iter().collect())
    }

    /// Methods callable with `arg_count` arguments, in the orderer's order
    pub fn applicable(
        &self,
        arg_count: usize,
        orderer: &dyn MethodOrderer,
    ) -> Vec<&CandidateMethod> {
        orderer.order(
            self.methods
                .iter()
                .filter(|m| m.signature.accepts_arity(arg_count))
                .collect(),
        )
    }
}

/// What an exposed name resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum Member {
    /// One or more methods
    Methods(OverloadGroup),
    /// A real or synthetic property
    Property(PropertyDescriptor),
}

impl Member {
    /// The method group, if this is a method member
    pub fn as_methods(&self) -> Option<&OverloadGroup> {
        match self {
            Member::Methods(group) => Some(group),
            Member::Property(_) => None,
        }
    }

    /// The property, if this is a property member
    pub fn as_property(&self) -> Option<&PropertyDescriptor> {
        match self {
            Member::Property(prop) => Some(prop),
            Member::Methods(_) => None,
        }
    }
}

/// Finalized exposed members of one class.
///
/// Immutable once built. Every exposed name maps to exactly one [`Member`].
/// Properties that lost a name to a method are kept in a separate table for
/// diagnostics and are never returned by name lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberModel {
    class: NativeClass,
    members: BTreeMap<String, Member>,
    shadowed: BTreeMap<String, PropertyDescriptor>,
}

impl MemberModel {
    pub(crate) fn new(
        class: NativeClass,
        members: BTreeMap<String, Member>,
        shadowed: BTreeMap<String, PropertyDescriptor>,
    ) -> Self {
        Self {
            class,
            members,
            shadowed,
        }
    }

    pub(crate) fn empty(class: NativeClass) -> Self {
        Self::new(class, BTreeMap::new(), BTreeMap::new())
    }

    /// Class this model describes
    pub fn class(&self) -> &NativeClass {
        &self.class
    }

    /// Resolve an exposed name
    pub fn get(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    /// Method group exposed under `name`
    pub fn method_group(&self, name: &str) -> Option<&OverloadGroup> {
        self.get(name).and_then(Member::as_methods)
    }

    /// Property exposed under `name`
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.get(name).and_then(Member::as_property)
    }

    /// Exposed names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// Name/member pairs in sorted name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Member)> {
        self.members.iter().map(|(name, member)| (name.as_str(), member))
    }

    /// Groups holding more than one method
    pub fn overload_groups(&self) -> impl Iterator<Item = &OverloadGroup> {
        self.members
            .values()
            .filter_map(Member::as_methods)
            .filter(|group| group.is_overloaded())
    }

    /// Names under which `signature` is callable as a method
    pub fn method_names_of<'a>(
        &'a self,
        signature: &'a MethodSignature,
    ) -> impl Iterator<Item = &'a str> {
        self.iter().filter_map(move |(name, member)| {
            member
                .as_methods()
                .filter(|group| group.contains(signature))
                .map(|_| name)
        })
    }

    /// Property that lost `name` to a method (diagnostics only)
    pub fn shadowed_property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.shadowed.get(name)
    }

    /// All shadowed properties (diagnostics only)
    pub fn shadowed_properties(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.shadowed.values()
    }

    /// Number of exposed names
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if nothing is exposed
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
