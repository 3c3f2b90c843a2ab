//! The link pass.

use bikeshed_core::{ContainerKind, Definition, ExtAttrList, Includes, Span, SymbolKind};
use indexmap::{IndexMap, IndexSet};

use super::config::LinkConfig;
use super::members::merge_members;
use super::model::LinkedModel;
use super::symbol_table::{SymbolTable, register};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Link parsed definitions (in document order) into one model.
///
/// All passes run even after an error so that one run reports every
/// problem; any diagnostic makes the whole link fail.
#[tracing::instrument(level = "debug", skip_all)]
pub fn link(definitions: Vec<Definition>, config: &LinkConfig) -> Result<LinkedModel, Diagnostics> {
    let mut linker = Linker {
        config,
        symbols: SymbolTable::new(),
        definitions: IndexMap::new(),
        consumed_mixins: IndexSet::new(),
        diagnostics: Diagnostics::new(),
    };

    let mut partials = Vec::new();
    let mut includes = Vec::new();
    for def in definitions {
        match def {
            Definition::Includes(stmt) => includes.push(stmt),
            def if def.is_partial() => partials.push(def),
            def => linker.register(def),
        }
    }

    for partial in partials {
        linker.fold_partial(partial);
    }
    tracing::debug!(definitions = linker.definitions.len(), "partials folded");

    for stmt in &includes {
        linker.apply_includes(stmt);
    }
    tracing::debug!(includes = includes.len(), "includes applied");

    linker.resolve();
    linker.finish()
}

struct Linker<'c> {
    config: &'c LinkConfig,
    symbols: SymbolTable,
    definitions: IndexMap<String, Definition>,
    consumed_mixins: IndexSet<String>,
    diagnostics: Diagnostics,
}

impl Linker<'_> {
    fn register(&mut self, def: Definition) {
        if register(&mut self.symbols, &def, &mut self.diagnostics) {
            self.definitions.insert(def.name().to_string(), def);
        }
    }

    fn fold_partial(&mut self, partial: Definition) {
        let Definition::Container(partial) = partial else {
            return;
        };
        let name = partial.name.clone();

        let base = self
            .definitions
            .get(&name)
            .and_then(Definition::as_container)
            .map(|c| (c.kind, c.span));
        let Some((base_kind, base_span)) = base else {
            self.report_missing_base(&partial.name, partial.kind, partial.span);
            return;
        };
        if base_kind != partial.kind {
            let detail = format!(
                "partial {} `{name}` extends {}",
                partial.kind.keyword(),
                SymbolKind::from(base_kind).describe()
            );
            self.diagnostics
                .report(DiagnosticKind::KindConflict, partial.span)
                .message(detail)
                .related_to("declared here", base_span)
                .emit();
            return;
        }

        let Some(base) = self
            .definitions
            .get_mut(&name)
            .and_then(Definition::as_container_mut)
        else {
            return;
        };
        for attr in partial.ext_attrs {
            let rendered = attr.to_string();
            if !base.ext_attrs.iter().any(|a| a.to_string() == rendered) {
                base.ext_attrs.push(attr);
            }
        }
        let collisions = merge_members(
            &name,
            &mut base.members,
            partial.members,
            self.config.collision,
            &mut self.diagnostics,
        );
        tracing::trace!(name = %name, collisions, "partial folded");
    }

    fn report_missing_base(&mut self, name: &str, kind: ContainerKind, span: Span) {
        match self.symbols.get(name) {
            Some(symbol) => {
                let detail = format!(
                    "partial {} `{name}` extends {}",
                    kind.keyword(),
                    symbol.kind.describe()
                );
                self.diagnostics
                    .report(DiagnosticKind::KindConflict, span)
                    .message(detail)
                    .related_to("declared here", symbol.span)
                    .emit();
            }
            None => {
                self.diagnostics
                    .report(DiagnosticKind::UnresolvedName, span)
                    .message(name)
                    .hint(format!("partial {} `{name}` has no base declaration", kind.keyword()))
                    .emit();
            }
        }
    }

    fn apply_includes(&mut self, stmt: &Includes) {
        let target_ok = self.expect_container(&stmt.target, ContainerKind::Interface, stmt.span);
        let mixin_ok = self.expect_container(&stmt.mixin, ContainerKind::Mixin, stmt.span);
        if !(target_ok && mixin_ok) {
            return;
        }

        let members = self
            .definitions
            .get(&stmt.mixin)
            .and_then(Definition::as_container)
            .map(|m| m.members.clone())
            .unwrap_or_default();
        let Some(target) = self
            .definitions
            .get_mut(&stmt.target)
            .and_then(Definition::as_container_mut)
        else {
            return;
        };
        merge_members(
            &stmt.target,
            &mut target.members,
            members,
            self.config.collision,
            &mut self.diagnostics,
        );
        self.consumed_mixins.insert(stmt.mixin.clone());
    }

    /// Check that `name` is a container of `kind`, reporting otherwise.
    fn expect_container(&mut self, name: &str, kind: ContainerKind, span: Span) -> bool {
        match self.symbols.get(name) {
            Some(symbol) if symbol.kind == SymbolKind::from(kind) => true,
            Some(symbol) => {
                let detail = format!(
                    "`{name}` is {}, expected {}",
                    symbol.kind.describe(),
                    SymbolKind::from(kind).describe()
                );
                let declared = symbol.span;
                self.diagnostics
                    .report(DiagnosticKind::KindConflict, span)
                    .message(detail)
                    .related_to("declared here", declared)
                    .emit();
                false
            }
            None => {
                self.diagnostics
                    .report(DiagnosticKind::UnresolvedName, span)
                    .message(name)
                    .emit();
                false
            }
        }
    }

    fn resolve(&mut self) {
        let mut references: Vec<(String, Span)> = Vec::new();
        let mut inheritance: Vec<(SymbolKind, String, Span)> = Vec::new();

        for def in self.definitions.values() {
            if let Definition::Container(c) = def
                && let Some(parent) = &c.inheritance
            {
                inheritance.push((c.kind.into(), parent.clone(), c.span));
            }
            def.for_each_type(&mut |ty, span| {
                ty.for_each_named(&mut |name| references.push((name.to_string(), span)));
            });
        }

        for (kind, parent, span) in inheritance {
            self.resolve_parent(kind, &parent, span);
        }

        let mut seen = IndexSet::new();
        for (name, span) in references {
            if seen.insert((name.clone(), span)) {
                self.resolve_type(&name, span);
            }
        }
    }

    fn resolve_parent(&mut self, kind: SymbolKind, parent: &str, span: Span) {
        match self.symbols.get(parent) {
            Some(symbol) if symbol.kind == kind => {}
            Some(symbol) => {
                let detail = format!(
                    "{} cannot inherit from `{parent}`, which is {}",
                    kind.describe(),
                    symbol.kind.describe()
                );
                let declared = symbol.span;
                self.diagnostics
                    .report(DiagnosticKind::KindConflict, span)
                    .message(detail)
                    .related_to("declared here", declared)
                    .emit();
            }
            None if self.config.is_external(parent) => {}
            None => {
                self.diagnostics
                    .report(DiagnosticKind::UnresolvedName, span)
                    .message(parent)
                    .emit();
            }
        }
    }

    fn resolve_type(&mut self, name: &str, span: Span) {
        match self.symbols.get(name) {
            Some(symbol) if symbol.kind.is_type() => {}
            Some(symbol) => {
                let detail = format!(
                    "`{name}` is {} and cannot be used as a type",
                    symbol.kind.describe()
                );
                let declared = symbol.span;
                self.diagnostics
                    .report(DiagnosticKind::KindConflict, span)
                    .message(detail)
                    .related_to("declared here", declared)
                    .emit();
            }
            None if self.config.is_external(name) => {}
            None => {
                self.diagnostics
                    .report(DiagnosticKind::UnresolvedName, span)
                    .message(name)
                    .emit();
            }
        }
    }

    fn finish(self) -> Result<LinkedModel, Diagnostics> {
        if self.diagnostics.has_errors() {
            return Err(self.diagnostics);
        }

        let globals: IndexSet<String> = self
            .definitions
            .values()
            .filter(|def| self.config.exposure.is_global(def.ext_attrs()))
            .map(|def| def.name().to_string())
            .collect();
        tracing::debug!(
            definitions = self.definitions.len(),
            globals = globals.len(),
            "linked"
        );
        if tracing::enabled!(tracing::Level::TRACE) {
            for def in self.definitions.values() {
                tracing::trace!(name = def.name(), attrs = %ExtAttrList(def.ext_attrs()), "definition");
            }
        }

        Ok(LinkedModel {
            definitions: self.definitions,
            globals,
            consumed_mixins: self.consumed_mixins,
        })
    }
}
