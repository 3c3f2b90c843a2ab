//! TypeScript type expressions.
//!
//! A tiny expression tree so that parenthesization is decided once, at
//! render time, instead of by every caller.

use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// Built-in keyword type: `number`, `string`, `null`, ...
    Keyword(&'static str),
    /// Reference to a declared or library type.
    Ref(String),
    /// `Name<A, B>`
    Generic(String, Vec<TsType>),
    /// `T[]`
    Array(Box<TsType>),
    /// `[A, B]`
    Tuple(Vec<TsType>),
    Union(Vec<TsType>),
    Intersection(Vec<TsType>),
    /// Already-quoted string literal type.
    StringLiteral(String),
    /// Numeric or boolean literal type, as source text.
    Literal(String),
    /// Inline object type; each entry is a complete member without `;`.
    Object(Vec<String>),
    /// `(params) => ret`; params are rendered parameter strings.
    Function(Vec<String>, Box<TsType>),
}

/// Binding strength, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Function,
    Union,
    Intersection,
    Postfix,
}

impl TsType {
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Ref(name.into())
    }

    pub fn generic(name: impl Into<String>, args: Vec<TsType>) -> Self {
        Self::Generic(name.into(), args)
    }

    pub fn array(inner: TsType) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Union with nested unions flattened and duplicates removed.
    ///
    /// An empty union is `never`; a single member is returned as is.
    pub fn union(members: impl IntoIterator<Item = TsType>) -> Self {
        let mut flat: Vec<TsType> = Vec::new();
        for member in members {
            let nested = match member {
                Self::Union(inner) => inner,
                other => vec![other],
            };
            for m in nested {
                if !flat.contains(&m) {
                    flat.push(m);
                }
            }
        }
        if flat.iter().any(|m| *m == Self::Keyword("any")) {
            return Self::Keyword("any");
        }
        match flat.len() {
            0 => Self::Keyword("never"),
            1 => flat.remove(0),
            _ => Self::Union(flat),
        }
    }

    pub fn nullable(inner: TsType) -> Self {
        Self::union([inner, Self::Keyword("null")])
    }

    fn precedence(&self) -> Precedence {
        match self {
            Self::Function(..) => Precedence::Function,
            Self::Union(_) => Precedence::Union,
            Self::Intersection(_) => Precedence::Intersection,
            _ => Precedence::Postfix,
        }
    }

    fn fmt_at(&self, f: &mut Formatter<'_>, min: Precedence) -> fmt::Result {
        if self.precedence() < min {
            write!(f, "(")?;
            self.fmt_bare(f)?;
            return write!(f, ")");
        }
        self.fmt_bare(f)
    }

    fn fmt_bare(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(k) => f.write_str(k),
            Self::Ref(name) => f.write_str(name),
            Self::Generic(name, args) => {
                write!(f, "{name}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            Self::Array(inner) => {
                inner.fmt_at(f, Precedence::Postfix)?;
                f.write_str("[]")
            }
            Self::Tuple(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Union(members) => {
                for (i, m) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    m.fmt_at(f, Precedence::Intersection)?;
                }
                Ok(())
            }
            Self::Intersection(members) => {
                for (i, m) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" & ")?;
                    }
                    m.fmt_at(f, Precedence::Postfix)?;
                }
                Ok(())
            }
            Self::StringLiteral(s) | Self::Literal(s) => f.write_str(s),
            Self::Object(members) => {
                if members.is_empty() {
                    return f.write_str("{}");
                }
                write!(f, "{{ {} }}", members.join("; "))
            }
            Self::Function(params, ret) => {
                write!(f, "({}) => {ret}", params.join(", "))
            }
        }
    }
}

impl Display for TsType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_bare(f)
    }
}
