//! Test helpers: wrap bare IDL in a document and run the pipeline.

use bikeshed_core::Definition;

use crate::analyze::{LinkConfig, LinkedModel};
use crate::assemble::Assembler;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::emit::idl;
use crate::{Error, parser};

/// A minimal document with `idl` as its only IDL block.
pub fn doc(idl: &str) -> String {
    format!("<h2>Interface</h2>\n<pre class=idl>\n{}\n</pre>\n", idl.trim())
}

/// A document with one IDL block per entry, separated by prose.
pub fn doc_with_blocks(blocks: &[&str]) -> String {
    let mut out = String::from("<h1>Spec</h1>\n");
    for (i, block) in blocks.iter().enumerate() {
        out.push_str(&format!("<p>Section {i}.</p>\n<pre class=idl>\n{}\n</pre>\n", block.trim()));
    }
    out
}

pub fn expect_types(idl: &str) -> String {
    expect_types_with(idl, false, false)
}

pub fn expect_types_with(idl: &str, force_global: bool, nominal: bool) -> String {
    let doc = doc(idl);
    Assembler::new(&doc)
        .force_global(force_global)
        .nominal(nominal)
        .emit_typescript()
        .unwrap_or_else(|e| panic!("expected valid document, got: {}", e.diagnostics().render(&doc)))
}

pub fn expect_idl(idl: &str) -> String {
    let doc = doc(idl);
    Assembler::new(&doc)
        .emit_idl()
        .unwrap_or_else(|e| panic!("expected valid document, got: {}", e.diagnostics().render(&doc)))
}

pub fn expect_model(idl: &str) -> LinkedModel {
    expect_model_with(idl, LinkConfig::default())
}

pub fn expect_model_with(idl: &str, config: LinkConfig) -> LinkedModel {
    let doc = doc(idl);
    Assembler::new(&doc)
        .link_config(config)
        .link()
        .unwrap_or_else(|e| panic!("expected valid document, got: {}", e.diagnostics().render(&doc)))
}

/// Run the pipeline up to linking and return the failure.
pub fn expect_error(idl: &str) -> Error {
    expect_error_with(idl, LinkConfig::default())
}

pub fn expect_error_with(idl: &str, config: LinkConfig) -> Error {
    let doc = doc(idl);
    match Assembler::new(&doc).link_config(config).link() {
        Ok(_) => panic!("expected an error for:\n{doc}"),
        Err(e) => e,
    }
}

/// Parse bare IDL (no document wrapper), panicking on failure.
pub fn expect_parse(idl: &str) -> Vec<Definition> {
    parser::parse(idl).unwrap_or_else(|d| panic!("expected valid IDL, got: {}", d.render(idl)))
}

pub fn expect_parse_error(idl: &str) -> Diagnostics {
    match parser::parse(idl) {
        Ok(defs) => panic!("expected a parse error, got {} definitions", defs.len()),
        Err(d) => d,
    }
}

/// Parse bare IDL and print it back in canonical form, without linking.
pub fn reprint(idl: &str) -> String {
    idl::Emitter::new(idl::Config::default()).emit_definitions(&expect_parse(idl))
}

/// Messages of the collected diagnostics, one per line.
pub fn messages(diagnostics: &Diagnostics) -> String {
    diagnostics
        .iter()
        .map(|d| d.message())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn kinds(error: &Error) -> Vec<DiagnosticKind> {
    error.diagnostics().kinds()
}
