//! TypeScript declaration emitter.
//!
//! Renders a [`LinkedModel`] as ambient declarations. Interfaces exposed by
//! the active exposure policy (or everything, with `force_global`) land in
//! the global scope; the rest are exported from a module.

mod config;
mod emitter;
mod mapper;
mod order;
mod render;
mod ts_type;

#[cfg(test)]
mod emitter_tests;
#[cfg(test)]
mod mapper_tests;
#[cfg(test)]
mod order_tests;
#[cfg(test)]
mod ts_type_tests;

pub use config::Config;
pub use emitter::Emitter;
pub use mapper::TypeMapper;
pub use order::emission_order;
pub use ts_type::TsType;

use crate::analyze::LinkedModel;

/// Emit TypeScript declarations for a linked model.
#[tracing::instrument(level = "debug", skip_all)]
pub fn emit(model: &LinkedModel, config: Config) -> String {
    Emitter::new(model, config).emit()
}
