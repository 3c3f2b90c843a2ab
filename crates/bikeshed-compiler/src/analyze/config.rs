//! Configuration for the link pass.

use bikeshed_core::ExtendedAttribute;
use indexmap::IndexSet;

/// What happens when merging brings two members with the same key together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemberCollision {
    /// The member merged later replaces the earlier one, in place.
    #[default]
    LastWins,
    /// Report `DuplicateMember`.
    Reject,
}

/// Extended attributes that mark a definition as globally exposed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExposurePolicy {
    attributes: IndexSet<String>,
}

impl Default for ExposurePolicy {
    fn default() -> Self {
        Self::empty()
            .global_attribute("Exposed")
            .global_attribute("Global")
    }
}

impl ExposurePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy under which nothing is global.
    pub fn empty() -> Self {
        Self {
            attributes: IndexSet::new(),
        }
    }

    /// Treat `name` as an exposure attribute.
    pub fn global_attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.insert(name.into());
        self
    }

    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(String::as_str)
    }

    pub fn is_global(&self, ext_attrs: &[ExtendedAttribute]) -> bool {
        ext_attrs
            .iter()
            .any(|attr| self.attributes.contains(&attr.name))
    }
}

/// Built-in WebIDL typedefs that documents use without declaring.
const BUILTIN_EXTERNALS: &[&str] = &["ArrayBufferView", "BufferSource", "AllowSharedBufferSource"];

/// Configuration for [`link`](super::link).
#[derive(Clone, Debug)]
pub struct LinkConfig {
    pub(crate) collision: MemberCollision,
    pub(crate) exposure: ExposurePolicy,
    pub(crate) externals: IndexSet<String>,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            collision: MemberCollision::default(),
            exposure: ExposurePolicy::default(),
            externals: BUILTIN_EXTERNALS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LinkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collision(mut self, value: MemberCollision) -> Self {
        self.collision = value;
        self
    }

    pub fn exposure(mut self, value: ExposurePolicy) -> Self {
        self.exposure = value;
        self
    }

    /// Add an exposure attribute to the current policy.
    pub fn global_attribute(mut self, name: impl Into<String>) -> Self {
        self.exposure = self.exposure.global_attribute(name);
        self
    }

    /// Accept `name` as a type reference without a declaration.
    pub fn external(mut self, name: impl Into<String>) -> Self {
        self.externals.insert(name.into());
        self
    }

    pub fn exposure_policy(&self) -> &ExposurePolicy {
        &self.exposure
    }

    pub fn is_external(&self, name: &str) -> bool {
        self.externals.contains(name)
    }
}
