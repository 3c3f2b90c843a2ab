//! Linking: merge parsed definitions into one resolved model.
//!
//! Four passes over a name-indexed table, in a fixed order:
//! 1. Register every base definition (duplicate and kind checks)
//! 2. Fold partial definitions into their bases
//! 3. Apply `includes` statements
//! 4. Resolve every type reference and inheritance clause
//!
//! Folding completes before any name is resolved, so declaration order in the
//! document never matters.

mod config;
mod link;
mod members;
mod model;
mod symbol_table;

#[cfg(test)]
mod config_tests;

pub use config::{ExposurePolicy, LinkConfig, MemberCollision};
pub use link::link;
pub use model::LinkedModel;
pub use symbol_table::{Symbol, SymbolTable};
