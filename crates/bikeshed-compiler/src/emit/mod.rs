//! Canonical WebIDL output.
//!
//! Independent of the TypeScript path: works on the linked model directly.

pub mod idl;

#[cfg(test)]
mod idl_tests;

pub use idl::{Config, Emitter};
