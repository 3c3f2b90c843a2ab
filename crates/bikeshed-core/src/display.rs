//! WebIDL syntax rendering for model nodes.
//!
//! Output is canonical: single spaces, `, ` separators, no trailing trivia.

use std::fmt::{self, Display, Formatter};

use crate::{
    Argument, ConstValue, DefaultValue, ExtAttrValue, ExtendedAttribute, Primitive, Type,
};

/// Renders `[A, B=c]`, or nothing for an empty list.
pub struct ExtAttrList<'a>(pub &'a [ExtendedAttribute]);

impl Display for ExtAttrList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        f.write_str("[")?;
        write_separated(f, self.0, ", ")?;
        f.write_str("]")
    }
}

/// Renders an argument list without the surrounding parentheses.
pub struct ArgumentList<'a>(pub &'a [Argument]);

impl Display for ArgumentList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_separated(f, self.0, ", ")
    }
}

fn write_separated<T: Display>(f: &mut Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for Primitive {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.idl_name())
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive(p) => write!(f, "{p}"),
            Type::Named(name) => f.write_str(name),
            Type::Sequence(inner) => write!(f, "sequence<{inner}>"),
            Type::FrozenArray(inner) => write!(f, "FrozenArray<{inner}>"),
            Type::ObservableArray(inner) => write!(f, "ObservableArray<{inner}>"),
            Type::Record(key, value) => write!(f, "record<{key}, {value}>"),
            Type::Promise(inner) => write!(f, "Promise<{inner}>"),
            Type::Nullable(inner) => write!(f, "{inner}?"),
            Type::Union(members) => {
                f.write_str("(")?;
                write_separated(f, members, " or ")?;
                f.write_str(")")
            }
            Type::Any => f.write_str("any"),
            Type::Annotated(attrs, inner) => write!(f, "{} {inner}", ExtAttrList(attrs)),
        }
    }
}

impl Display for ExtendedAttribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(rhs) = &self.rhs {
            write!(f, "={rhs}")?;
        }
        if let Some(args) = &self.args {
            write!(f, "({})", ArgumentList(args))?;
        }
        Ok(())
    }
}

impl Display for ExtAttrValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ExtAttrValue::Identifier(id) => f.write_str(id),
            ExtAttrValue::IdentifierList(ids) => write!(f, "({})", ids.join(", ")),
            ExtAttrValue::String(s) => write!(f, "\"{s}\""),
            ExtAttrValue::Integer(text) | ExtAttrValue::Decimal(text) => f.write_str(text),
            ExtAttrValue::Wildcard => f.write_str("*"),
        }
    }
}

impl Display for Argument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.ext_attrs.is_empty() {
            write!(f, "{} ", ExtAttrList(&self.ext_attrs))?;
        }
        if self.optional {
            f.write_str("optional ")?;
        }
        write!(f, "{}", self.ty)?;
        if self.variadic {
            f.write_str("...")?;
        }
        write!(f, " {}", self.name)?;
        if let Some(default) = &self.default {
            write!(f, " = {default}")?;
        }
        Ok(())
    }
}

impl Display for ConstValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Boolean(b) => write!(f, "{b}"),
            ConstValue::Integer(text) | ConstValue::Decimal(text) => f.write_str(text),
            ConstValue::Infinity => f.write_str("Infinity"),
            ConstValue::NegativeInfinity => f.write_str("-Infinity"),
            ConstValue::NaN => f.write_str("NaN"),
        }
    }
}

impl Display for DefaultValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Const(value) => write!(f, "{value}"),
            DefaultValue::String(s) => write!(f, "\"{s}\""),
            DefaultValue::EmptySequence => f.write_str("[]"),
            DefaultValue::EmptyDictionary => f.write_str("{}"),
            DefaultValue::Null => f.write_str("null"),
            DefaultValue::Undefined => f.write_str("undefined"),
        }
    }
}
