//! Core emitter struct and declaration layout.

use bikeshed_core::Definition;

use super::Config;
use super::mapper::TypeMapper;
use super::order::emission_order;
use crate::analyze::LinkedModel;

/// Where a declaration lands, which decides its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Scope {
    /// Top level of an ambient script.
    Script,
    /// Top level of a module: exported.
    Module,
    /// Inside `declare global { }`, already ambient.
    Global,
}

impl Scope {
    /// Prefix for `interface` and `type` declarations.
    pub(super) fn type_prefix(self) -> &'static str {
        match self {
            Self::Script | Self::Global => "",
            Self::Module => "export ",
        }
    }

    /// Prefix for `var` and `namespace` declarations.
    pub(super) fn value_prefix(self) -> &'static str {
        match self {
            Self::Script => "declare ",
            Self::Module => "export declare ",
            Self::Global => "",
        }
    }
}

/// TypeScript emitter over a linked model.
pub struct Emitter<'m> {
    pub(super) model: &'m LinkedModel,
    pub(super) config: Config,
    output: String,
}

impl<'m> Emitter<'m> {
    pub fn new(model: &'m LinkedModel, config: Config) -> Self {
        Self {
            model,
            config,
            output: String::new(),
        }
    }

    pub(super) fn mapper(&self) -> TypeMapper<'_> {
        TypeMapper::new(&self.config)
    }

    /// Emit declarations for the whole model.
    pub fn emit(mut self) -> String {
        self.emit_header();

        let order = emission_order(self.model);
        let (globals, module): (Vec<&str>, Vec<&str>) = order
            .into_iter()
            .partition(|name| self.config.force_global || self.model.is_global(name));
        tracing::debug!(
            global = globals.len(),
            module = module.len(),
            "typescript placement"
        );

        if module.is_empty() {
            let blocks = self.render_all(&globals, Scope::Script);
            self.push_blocks(&blocks, "");
        } else {
            let blocks = self.render_all(&module, Scope::Module);
            self.push_blocks(&blocks, "");

            if !globals.is_empty() {
                let blocks = self.render_all(&globals, Scope::Global);
                self.output.push_str("\ndeclare global {\n");
                let indent = self.config.indent.clone();
                self.push_blocks(&blocks, &indent);
                self.output.push_str("}\n");
            }
        }

        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }

    fn emit_header(&mut self) {
        let Some(header) = &self.config.header else {
            return;
        };
        let mut text = String::new();
        for line in header.lines() {
            if line.is_empty() {
                text.push_str("//\n");
            } else {
                text.push_str(&format!("// {line}\n"));
            }
        }
        text.push('\n');
        self.output.push_str(&text);
    }

    fn render_all(&self, names: &[&str], scope: Scope) -> Vec<String> {
        names
            .iter()
            .filter_map(|name| self.model.get(name))
            .flat_map(|def: &Definition| self.render_definition(def, scope))
            .collect()
    }

    /// Append blocks separated by blank lines, each line prefixed with `indent`.
    fn push_blocks(&mut self, blocks: &[String], indent: &str) {
        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                self.output.push('\n');
            }
            for line in block.lines() {
                if !line.is_empty() {
                    self.output.push_str(indent);
                }
                self.output.push_str(line);
                self.output.push('\n');
            }
        }
    }
}
