//! WebIDL grammar productions.
//!
//! Each submodule adds methods to `Parser` for one area of the grammar.
//! Productions consume their trailing `;` and return spans in document
//! coordinates.

mod definitions;
mod ext_attrs;
mod members;
mod types;
