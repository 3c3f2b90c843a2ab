//! Bikeshed document assembler.
//!
//! Pulls the WebIDL fragments out of a Bikeshed source document, parses and
//! links them into one model, then renders TypeScript declarations or
//! canonical WebIDL.
//!
//! # Example
//!
//! ```
//! use bikeshed_compiler::assemble_types;
//!
//! let doc = r#"
//! <pre class=idl>
//! [Exposed=Window]
//! interface Counter {
//!   readonly attribute unsigned long value;
//!   undefined increment();
//! };
//! </pre>
//! "#;
//!
//! let ts = assemble_types(doc, true, false).expect("valid document");
//! assert!(ts.contains("interface Counter"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod assemble;
pub mod diagnostics;
pub mod emit;
pub mod extract;
pub mod parser;
pub mod typegen;

#[cfg(test)]
pub(crate) mod test_utils;

pub use analyze::{LinkConfig, LinkedModel};
pub use assemble::{Assembler, assemble_idl, assemble_types};
pub use diagnostics::{Diagnostics, DiagnosticsPrinter};

/// Coarse failure category, one per pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Extraction,
    Parse,
    Link,
}

/// Errors that abort an assembly run.
///
/// Every variant carries the full set of diagnostics that caused it, with
/// spans relative to the whole document.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("IDL extraction failed with {} errors", .0.error_count())]
    Extraction(Diagnostics),

    #[error("IDL parsing failed with {} errors", .0.error_count())]
    Parse(Diagnostics),

    #[error("IDL linking failed with {} errors", .0.error_count())]
    Link(Diagnostics),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Extraction(_) => ErrorKind::Extraction,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Link(_) => ErrorKind::Link,
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        match self {
            Self::Extraction(d) | Self::Parse(d) | Self::Link(d) => d,
        }
    }
}

/// Result type for assembly operations.
pub type Result<T> = std::result::Result<T, Error>;
