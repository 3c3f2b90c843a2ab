//! Declaration ordering.
//!
//! Dependencies come before the declarations that reference them, visited in
//! the order the references appear; unrelated declarations keep document
//! order. Cycles are broken at the first revisit.

use indexmap::IndexSet;

use bikeshed_core::{ContainerKind, Definition};

use crate::analyze::LinkedModel;

/// Names of the declarations to emit, in emission order.
///
/// Mixins are left out: their members already live in the including interfaces.
pub fn emission_order(model: &LinkedModel) -> Vec<&str> {
    let mut visited: IndexSet<&str> = IndexSet::new();
    let mut order = Vec::new();
    for def in model.definitions() {
        visit(model, def, &mut visited, &mut order);
    }
    order
}

fn visit<'m>(
    model: &'m LinkedModel,
    def: &'m Definition,
    visited: &mut IndexSet<&'m str>,
    order: &mut Vec<&'m str>,
) {
    if !visited.insert(def.name()) {
        return;
    }
    if is_mixin(def) {
        return;
    }

    for dep in dependencies(def) {
        if let Some(dep_def) = model.get(dep) {
            visit(model, dep_def, visited, order);
        }
    }
    order.push(def.name());
}

/// Referenced names, parent first, then in reference order.
fn dependencies(def: &Definition) -> Vec<&str> {
    let mut deps: Vec<&str> = Vec::new();
    if let Definition::Container(c) = def
        && let Some(parent) = &c.inheritance
    {
        deps.push(parent);
    }
    def.for_each_type(&mut |ty, _| {
        ty.for_each_named(&mut |name| {
            if !deps.contains(&name) {
                deps.push(name);
            }
        })
    });
    deps
}

fn is_mixin(def: &Definition) -> bool {
    matches!(def, Definition::Container(c) if c.kind == ContainerKind::Mixin)
}
