//! WebIDL parser.
//!
//! Recursive descent over a `logos` token stream, producing the
//! `bikeshed_core` model directly. Spans are in document coordinates.

mod core;
mod grammar;
pub mod lexer;

#[cfg(test)]
mod tests;

use bikeshed_core::Definition;

pub use core::Parser;

use crate::diagnostics::Diagnostics;
use crate::extract::Fragment;

/// Parse IDL text located at byte `base` of the document.
///
/// Stops at the first error and reports it as the single diagnostic.
pub fn parse_at(source: &str, base: u32) -> Result<Vec<Definition>, Diagnostics> {
    let tokens = lexer::lex(source, base);
    let mut parser = Parser::new(source, base, tokens);
    match parser.parse_definitions() {
        Ok(definitions) => Ok(definitions),
        Err(_) => Err(parser.into_diagnostics()),
    }
}

pub fn parse(source: &str) -> Result<Vec<Definition>, Diagnostics> {
    parse_at(source, 0)
}

pub fn parse_fragment(fragment: &Fragment<'_>) -> Result<Vec<Definition>, Diagnostics> {
    parse_at(fragment.text, fragment.offset)
}

/// Parse every fragment, in order.
///
/// A failing fragment does not prevent the others from being parsed, so the
/// error carries one diagnostic per broken fragment.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse_fragments(fragments: &[Fragment<'_>]) -> Result<Vec<Definition>, Diagnostics> {
    let mut definitions = Vec::new();
    let mut diagnostics = Diagnostics::new();

    for fragment in fragments {
        match parse_fragment(fragment) {
            Ok(parsed) => definitions.extend(parsed),
            Err(errors) => {
                tracing::trace!(offset = fragment.offset, "fragment failed to parse");
                diagnostics.extend(errors);
            }
        }
    }

    if diagnostics.has_errors() {
        return Err(diagnostics);
    }
    tracing::debug!(definitions = definitions.len(), "parsed");
    Ok(definitions)
}
