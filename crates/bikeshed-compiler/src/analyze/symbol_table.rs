//! Symbol table: one entry per declared name.

use bikeshed_core::{Definition, Span, SymbolKind};
use indexmap::IndexMap;

use crate::diagnostics::{DiagnosticKind, Diagnostics};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub span: Span,
}

/// Declared names in first-appearance order.
pub type SymbolTable = IndexMap<String, Symbol>;

/// Register `def` unless its name is already taken.
///
/// Partials and includes statements declare nothing and are never passed here.
/// Returns whether the definition was registered.
pub(super) fn register(
    symbols: &mut SymbolTable,
    def: &Definition,
    diagnostics: &mut Diagnostics,
) -> bool {
    let Some(kind) = def.symbol_kind() else {
        return false;
    };
    let name = def.name();

    if let Some(existing) = symbols.get(name) {
        if existing.kind == kind {
            diagnostics
                .report(DiagnosticKind::DuplicateDefinition, def.span())
                .message(name)
                .related_to("first defined here", existing.span)
                .emit();
        } else {
            diagnostics
                .report(DiagnosticKind::KindConflict, def.span())
                .message(format!(
                    "`{name}` is declared as {} and as {}",
                    existing.kind.describe(),
                    kind.describe()
                ))
                .related_to("first declared here", existing.span)
                .emit();
        }
        return false;
    }

    symbols.insert(
        name.to_string(),
        Symbol {
            kind,
            span: def.span(),
        },
    );
    true
}
