//! Member merging with collision handling.

use bikeshed_core::{Argument, Member, Special};

use super::config::MemberCollision;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Identity of a member within one definition.
///
/// Operations include their argument types so that overloads coexist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum MemberKey {
    /// Constants, attributes and dictionary fields.
    Named { is_static: bool, name: String },
    Operation {
        is_static: bool,
        name: Option<String>,
        special: Option<Special>,
        args: Vec<String>,
    },
    Constructor(Vec<String>),
    /// At most one iterable, maplike or setlike declaration.
    Iterable,
    Stringifier,
}

impl MemberKey {
    pub(crate) fn of(member: &Member) -> Self {
        match member {
            Member::Const(c) => Self::Named {
                is_static: false,
                name: c.name.clone(),
            },
            Member::Attribute(a) => Self::Named {
                is_static: a.is_static,
                name: a.name.clone(),
            },
            Member::Field(f) => Self::Named {
                is_static: false,
                name: f.name.clone(),
            },
            Member::Operation(o) => Self::Operation {
                is_static: o.is_static,
                name: o.name.clone(),
                special: o.special,
                args: signature(&o.args),
            },
            Member::Constructor(c) => Self::Constructor(signature(&c.args)),
            Member::Iterable(_) => Self::Iterable,
            Member::Stringifier(_) => Self::Stringifier,
        }
    }

    /// Whether `self` and `other` occupy the same slot on the definition.
    ///
    /// A named member shares its `(static, name)` slot with every other named
    /// member; only two operations may coexist there, as overloads.
    pub(crate) fn collides(&self, other: &MemberKey) -> bool {
        if self == other {
            return true;
        }
        match (self.slot(), other.slot()) {
            (Some(a), Some(b)) => a == b && !(self.is_operation() && other.is_operation()),
            _ => false,
        }
    }

    fn slot(&self) -> Option<(bool, &str)> {
        match self {
            Self::Named { is_static, name } => Some((*is_static, name.as_str())),
            Self::Operation {
                is_static,
                name: Some(name),
                ..
            } => Some((*is_static, name.as_str())),
            _ => None,
        }
    }

    fn is_operation(&self) -> bool {
        matches!(self, Self::Operation { .. })
    }
}

fn signature(args: &[Argument]) -> Vec<String> {
    args.iter().map(|a| a.ty.unannotated().to_string()).collect()
}

/// Append `incoming` to `target`, resolving key collisions per `policy`.
///
/// Returns the number of collisions encountered.
pub(crate) fn merge_members(
    owner: &str,
    target: &mut Vec<Member>,
    incoming: Vec<Member>,
    policy: MemberCollision,
    diagnostics: &mut Diagnostics,
) -> usize {
    let mut collisions = 0;
    for member in incoming {
        let key = MemberKey::of(&member);
        let clashing: Vec<usize> = target
            .iter()
            .enumerate()
            .filter(|(_, m)| MemberKey::of(m).collides(&key))
            .map(|(i, _)| i)
            .collect();
        let Some(&index) = clashing.first() else {
            target.push(member);
            continue;
        };

        collisions += 1;
        match policy {
            MemberCollision::LastWins => {
                tracing::debug!(owner, member = ?member.name(), "member replaced");
                // Earlier overloads displaced by a non-operation go with it
                for &stale in clashing[1..].iter().rev() {
                    target.remove(stale);
                }
                target[index] = member;
            }
            MemberCollision::Reject => {
                let label = member.name().unwrap_or(describe_unnamed(&member));
                diagnostics
                    .report(DiagnosticKind::DuplicateMember, member.span())
                    .message(format!("{owner}.{label}"))
                    .related_to("previously declared here", target[index].span())
                    .emit();
            }
        }
    }
    collisions
}

fn describe_unnamed(member: &Member) -> &'static str {
    match member {
        Member::Constructor(_) => "constructor",
        Member::Iterable(_) => "iterable",
        Member::Stringifier(_) => "stringifier",
        Member::Operation(o) => o.special.map_or("operation", Special::keyword),
        Member::Const(_) | Member::Attribute(_) | Member::Field(_) => "member",
    }
}
