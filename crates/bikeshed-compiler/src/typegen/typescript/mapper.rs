//! WebIDL type → TypeScript type mapping.

use bikeshed_core::{Argument, Primitive, Type, utils};

use super::Config;
use super::ts_type::TsType;

/// Maps type references under one emission config.
pub struct TypeMapper<'c> {
    config: &'c Config,
}

impl<'c> TypeMapper<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    pub fn map(&self, ty: &Type) -> TsType {
        match ty {
            Type::Primitive(p) => map_primitive(*p),
            Type::Named(name) => TsType::reference(name.clone()),
            Type::Sequence(inner) | Type::ObservableArray(inner) => {
                TsType::array(self.map(inner))
            }
            Type::FrozenArray(inner) => {
                if self.config.readonly_arrays {
                    TsType::generic("ReadonlyArray", vec![self.map(inner)])
                } else {
                    TsType::array(self.map(inner))
                }
            }
            // Record keys are restricted to string kinds by the parser.
            Type::Record(_, value) => {
                TsType::generic("Record", vec![TsType::Keyword("string"), self.map(value)])
            }
            Type::Promise(inner) => TsType::generic("Promise", vec![self.map_return(inner)]),
            Type::Nullable(inner) => TsType::nullable(self.map(inner)),
            Type::Union(members) => TsType::union(members.iter().map(|m| self.map(m))),
            Type::Any => TsType::Keyword("any"),
            Type::Annotated(_, inner) => self.map(inner),
        }
    }

    /// Like [`map`](Self::map), with `undefined` written as `void`.
    pub fn map_return(&self, ty: &Type) -> TsType {
        match ty.unannotated() {
            Type::Primitive(Primitive::Undefined) => TsType::Keyword("void"),
            other => self.map(other),
        }
    }

    /// `name?: T`, `...name: T[]` or `name: T`.
    pub fn parameter(&self, arg: &Argument) -> String {
        let name = utils::parameter_name(&arg.name);
        let ty = self.map(&arg.ty);
        if arg.variadic {
            format!("...{name}: {}", TsType::array(ty))
        } else if arg.optional {
            format!("{name}?: {ty}")
        } else {
            format!("{name}: {ty}")
        }
    }

    pub fn parameters(&self, args: &[Argument]) -> Vec<String> {
        args.iter().map(|a| self.parameter(a)).collect()
    }

    /// Brand member for `name`, without the trailing `;`.
    pub fn brand(&self, name: &str) -> String {
        let key = format!("{}{name}", self.config.brand_prefix);
        format!(
            "readonly {}: {}",
            utils::property_name(&key),
            utils::quote(name)
        )
    }
}

fn map_primitive(p: Primitive) -> TsType {
    if p.is_numeric() {
        return TsType::Keyword("number");
    }
    if p.is_string() {
        return TsType::Keyword("string");
    }
    if p.is_buffer() {
        return TsType::reference(p.idl_name());
    }
    match p {
        Primitive::Undefined => TsType::Keyword("undefined"),
        Primitive::Boolean => TsType::Keyword("boolean"),
        Primitive::Bigint => TsType::Keyword("bigint"),
        Primitive::Symbol => TsType::Keyword("symbol"),
        _ => TsType::Keyword("any"),
    }
}
