//! Assembly pipeline: document → fragments → definitions → model → text.

use bikeshed_core::Definition;

use crate::analyze::{self, LinkConfig, LinkedModel};
use crate::emit::idl;
use crate::extract::{self, Fragment};
use crate::parser;
use crate::typegen::typescript;
use crate::{Error, Result};

/// Builder for one assembly run over a document.
///
/// Each stage method runs every stage before it, so callers can stop at the
/// artifact they need.
#[derive(Clone, Debug)]
pub struct Assembler<'d> {
    doc: &'d str,
    ts: typescript::Config,
    idl: idl::Config,
    link: LinkConfig,
}

impl<'d> Assembler<'d> {
    pub fn new(doc: &'d str) -> Self {
        Self {
            doc,
            ts: typescript::Config::default(),
            idl: idl::Config::default(),
            link: LinkConfig::default(),
        }
    }

    pub fn force_global(mut self, value: bool) -> Self {
        self.ts = self.ts.force_global(value);
        self
    }

    /// Enable nominal branding of interfaces, dictionaries and enums.
    pub fn nominal(mut self, value: bool) -> Self {
        self.ts = self.ts.nominal(value);
        self
    }

    pub fn link_config(mut self, config: LinkConfig) -> Self {
        self.link = config;
        self
    }

    /// Replace the TypeScript options wholesale. Flags set earlier are lost.
    pub fn typescript_config(mut self, config: typescript::Config) -> Self {
        self.ts = config;
        self
    }

    pub fn idl_config(mut self, config: idl::Config) -> Self {
        self.idl = config;
        self
    }

    pub fn doc(&self) -> &'d str {
        self.doc
    }

    pub fn extract(&self) -> Result<Vec<Fragment<'d>>> {
        let fragments = extract::extract(self.doc).map_err(Error::Extraction)?;
        tracing::debug!(fragments = fragments.len(), "extracted");
        Ok(fragments)
    }

    pub fn parse(&self) -> Result<Vec<Definition>> {
        let fragments = self.extract()?;
        parser::parse_fragments(&fragments).map_err(Error::Parse)
    }

    pub fn link(&self) -> Result<LinkedModel> {
        let definitions = self.parse()?;
        analyze::link(definitions, &self.link).map_err(Error::Link)
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn emit_typescript(&self) -> Result<String> {
        let model = self.link()?;
        Ok(typescript::emit(&model, self.ts.clone()))
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn emit_idl(&self) -> Result<String> {
        let model = self.link()?;
        Ok(idl::Emitter::new(self.idl.clone()).emit(&model))
    }
}

/// Assemble TypeScript declarations from a Bikeshed document.
pub fn assemble_types(doc: &str, force_global: bool, safe_nominal_types: bool) -> Result<String> {
    Assembler::new(doc)
        .force_global(force_global)
        .nominal(safe_nominal_types)
        .emit_typescript()
}

/// Assemble canonical WebIDL from a Bikeshed document.
///
/// The placement and branding flags do not apply to IDL output.
pub fn assemble_idl(doc: &str, _force_global: bool, _safe_nominal_types: bool) -> Result<String> {
    Assembler::new(doc).emit_idl()
}
