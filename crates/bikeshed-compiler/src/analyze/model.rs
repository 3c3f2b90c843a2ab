use bikeshed_core::{Container, Definition, SymbolKind};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Result of linking: every definition merged and resolved.
///
/// Definitions keep the order in which their base declaration first appeared.
/// Mixins stay addressable even after being folded into their targets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedModel {
    pub(crate) definitions: IndexMap<String, Definition>,
    pub(crate) globals: IndexSet<String>,
    pub(crate) consumed_mixins: IndexSet<String>,
}

impl LinkedModel {
    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.definitions.get(name)
    }

    pub fn container(&self, name: &str) -> Option<&Container> {
        self.get(name).and_then(Definition::as_container)
    }

    pub fn kind_of(&self, name: &str) -> Option<SymbolKind> {
        self.get(name).and_then(Definition::symbol_kind)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Position of `name` in first-appearance order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.definitions.get_index_of(name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Whether `name` carries an exposure attribute of the active policy.
    pub fn is_global(&self, name: &str) -> bool {
        self.globals.contains(name)
    }

    pub fn globals(&self) -> impl Iterator<Item = &str> {
        self.globals.iter().map(String::as_str)
    }

    /// Whether `name` is a mixin applied by at least one `includes`.
    pub fn is_consumed_mixin(&self, name: &str) -> bool {
        self.consumed_mixins.contains(name)
    }
}
