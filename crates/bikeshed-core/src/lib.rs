#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the WebIDL model.
//!
//! Two layers:
//! - **Declarations**: `Definition` and its members, as written in a fragment
//! - **Types**: `Type` references with their extended attributes
//!
//! Every node renders back to WebIDL syntax through `Display` (see `display`).

use serde::Serialize;

mod display;
pub mod utils;

pub use display::{ArgumentList, ExtAttrList};


// ============================================================================
// Spans
// ============================================================================

/// Byte range into the document the definition was extracted from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Shift by `offset` bytes, used when moving from fragment to document coordinates.
    pub fn shifted(self, offset: u32) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }

    pub fn to_range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start as u32, range.end as u32)
    }
}

// ============================================================================
// Definitions
// ============================================================================

/// A top-level WebIDL declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Definition {
    /// Interfaces, mixins, callback interfaces, dictionaries and namespaces.
    Container(Container),
    Enum(Enum),
    Typedef(Typedef),
    Callback(Callback),
    Includes(Includes),
}

/// Which member-bearing declaration a `Container` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    Interface,
    CallbackInterface,
    Mixin,
    Dictionary,
    Namespace,
}

impl ContainerKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::CallbackInterface => "callback interface",
            Self::Mixin => "interface mixin",
            Self::Dictionary => "dictionary",
            Self::Namespace => "namespace",
        }
    }

    /// Whether `partial` is allowed in front of this kind.
    pub fn allows_partial(self) -> bool {
        !matches!(self, Self::CallbackInterface)
    }
}

/// Symbol categories. A name may denote at most one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Interface,
    CallbackInterface,
    Mixin,
    Dictionary,
    Namespace,
    Enum,
    Typedef,
    Callback,
}

impl SymbolKind {
    /// Whether a `Named` type reference may point at this kind.
    pub fn is_type(self) -> bool {
        !matches!(self, Self::Mixin | Self::Namespace)
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::Interface => "an interface",
            Self::CallbackInterface => "a callback interface",
            Self::Mixin => "an interface mixin",
            Self::Dictionary => "a dictionary",
            Self::Namespace => "a namespace",
            Self::Enum => "an enum",
            Self::Typedef => "a typedef",
            Self::Callback => "a callback",
        }
    }
}

impl From<ContainerKind> for SymbolKind {
    fn from(kind: ContainerKind) -> Self {
        match kind {
            ContainerKind::Interface => Self::Interface,
            ContainerKind::CallbackInterface => Self::CallbackInterface,
            ContainerKind::Mixin => Self::Mixin,
            ContainerKind::Dictionary => Self::Dictionary,
            ContainerKind::Namespace => Self::Namespace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    pub kind: ContainerKind,
    pub name: String,
    pub partial: bool,
    pub inheritance: Option<String>,
    pub members: Vec<Member>,
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enum {
    pub name: String,
    pub values: Vec<String>,
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Typedef {
    pub name: String,
    pub ty: Type,
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Callback {
    pub name: String,
    pub ret: Type,
    pub args: Vec<Argument>,
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: Span,
}

/// `Target includes Mixin;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Includes {
    pub target: String,
    pub mixin: String,
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: Span,
}

impl Definition {
    /// Declared name. For includes statements this is the target.
    pub fn name(&self) -> &str {
        match self {
            Self::Container(c) => &c.name,
            Self::Enum(e) => &e.name,
            Self::Typedef(t) => &t.name,
            Self::Callback(c) => &c.name,
            Self::Includes(i) => &i.target,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Container(c) => c.span,
            Self::Enum(e) => e.span,
            Self::Typedef(t) => t.span,
            Self::Callback(c) => c.span,
            Self::Includes(i) => i.span,
        }
    }

    pub fn ext_attrs(&self) -> &[ExtendedAttribute] {
        match self {
            Self::Container(c) => &c.ext_attrs,
            Self::Enum(e) => &e.ext_attrs,
            Self::Typedef(t) => &t.ext_attrs,
            Self::Callback(c) => &c.ext_attrs,
            Self::Includes(i) => &i.ext_attrs,
        }
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Container(c) if c.partial)
    }

    /// Symbol category, `None` for includes statements.
    pub fn symbol_kind(&self) -> Option<SymbolKind> {
        match self {
            Self::Container(c) => Some(c.kind.into()),
            Self::Enum(_) => Some(SymbolKind::Enum),
            Self::Typedef(_) => Some(SymbolKind::Typedef),
            Self::Callback(_) => Some(SymbolKind::Callback),
            Self::Includes(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Self::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Self::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn has_ext_attr(&self, name: &str) -> bool {
        self.ext_attrs().iter().any(|a| a.name == name)
    }

    /// Visit every type reachable from this definition, together with the
    /// span of the node that owns it.
    pub fn for_each_type<'a>(&'a self, f: &mut impl FnMut(&'a Type, Span)) {
        match self {
            Self::Container(c) => {
                for member in &c.members {
                    member.for_each_type(&mut |ty| f(ty, member.span()));
                }
            }
            Self::Enum(_) | Self::Includes(_) => {}
            Self::Typedef(t) => f(&t.ty, t.span),
            Self::Callback(c) => {
                f(&c.ret, c.span);
                for arg in &c.args {
                    f(&arg.ty, c.span);
                }
            }
        }
    }
}

// ============================================================================
// Members
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Member {
    Const(Const),
    Attribute(Attribute),
    Operation(Operation),
    Constructor(Constructor),
    /// Dictionary member.
    Field(Field),
    /// `iterable<>`, `async iterable<>`, `maplike<>` or `setlike<>`.
    Iterable(Iterable),
    /// Bare `stringifier;`.
    Stringifier(Stringifier),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Const {
    pub name: String,
    pub ty: Type,
    pub value: ConstValue,
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub ty: Type,
    pub readonly: bool,
    pub is_static: bool,
    pub inherit: bool,
    pub stringifier: bool,
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Special {
    Getter,
    Setter,
    Deleter,
    Stringifier,
}

impl Special {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Getter => "getter",
            Self::Setter => "setter",
            Self::Deleter => "deleter",
            Self::Stringifier => "stringifier",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    /// `None` for unnamed special operations such as `getter any (long index);`.
    pub name: Option<String>,
    pub ret: Type,
    pub args: Vec<Argument>,
    pub is_static: bool,
    pub special: Option<Special>,
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constructor {
    pub args: Vec<Argument>,
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub ty: Type,
    pub required: bool,
    pub default: Option<DefaultValue>,
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IterableKind {
    Iterable,
    AsyncIterable,
    Maplike,
    Setlike,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Iterable {
    pub kind: IterableKind,
    pub readonly: bool,
    /// Key type for pair iterators and maplike.
    pub key: Option<Type>,
    pub value: Type,
    /// Arguments of `async iterable<V>(...)`.
    pub args: Vec<Argument>,
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stringifier {
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Argument {
    pub name: String,
    pub ty: Type,
    pub optional: bool,
    pub variadic: bool,
    pub default: Option<DefaultValue>,
    pub ext_attrs: Vec<ExtendedAttribute>,
}

impl Member {
    /// Member name, if the member has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Const(c) => Some(&c.name),
            Self::Attribute(a) => Some(&a.name),
            Self::Operation(o) => o.name.as_deref(),
            Self::Field(f) => Some(&f.name),
            Self::Constructor(_) | Self::Iterable(_) | Self::Stringifier(_) => None,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Const(c) => c.span,
            Self::Attribute(a) => a.span,
            Self::Operation(o) => o.span,
            Self::Constructor(c) => c.span,
            Self::Field(f) => f.span,
            Self::Iterable(i) => i.span,
            Self::Stringifier(s) => s.span,
        }
    }

    pub fn ext_attrs(&self) -> &[ExtendedAttribute] {
        match self {
            Self::Const(c) => &c.ext_attrs,
            Self::Attribute(a) => &a.ext_attrs,
            Self::Operation(o) => &o.ext_attrs,
            Self::Constructor(c) => &c.ext_attrs,
            Self::Field(f) => &f.ext_attrs,
            Self::Iterable(i) => &i.ext_attrs,
            Self::Stringifier(s) => &s.ext_attrs,
        }
    }

    pub fn is_static(&self) -> bool {
        match self {
            Self::Attribute(a) => a.is_static,
            Self::Operation(o) => o.is_static,
            _ => false,
        }
    }

    pub fn for_each_type<'a>(&'a self, f: &mut impl FnMut(&'a Type)) {
        match self {
            Self::Const(c) => f(&c.ty),
            Self::Attribute(a) => f(&a.ty),
            Self::Operation(o) => {
                f(&o.ret);
                o.args.iter().for_each(|a| f(&a.ty));
            }
            Self::Constructor(c) => c.args.iter().for_each(|a| f(&a.ty)),
            Self::Field(field) => f(&field.ty),
            Self::Iterable(i) => {
                if let Some(key) = &i.key {
                    f(key);
                }
                f(&i.value);
                i.args.iter().for_each(|a| f(&a.ty));
            }
            Self::Stringifier(_) => {}
        }
    }
}

// ============================================================================
// Values
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ConstValue {
    Boolean(bool),
    /// Source text of an integer literal (decimal, hex or octal).
    Integer(String),
    /// Source text of a decimal literal.
    Decimal(String),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl ConstValue {
    /// Integer value, when the literal fits in an `i128`.
    pub fn as_integer(&self) -> Option<i128> {
        let Self::Integer(text) = self else {
            return None;
        };
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.as_str()),
        };
        let value = if let Some(hex) = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
        {
            i128::from_str_radix(hex, 16).ok()?
        } else if digits.len() > 1 && digits.starts_with('0') {
            i128::from_str_radix(&digits[1..], 8).ok()?
        } else {
            digits.parse::<i128>().ok()?
        };
        Some(if negative { -value } else { value })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DefaultValue {
    Const(ConstValue),
    String(String),
    EmptySequence,
    EmptyDictionary,
    Null,
    Undefined,
}

// ============================================================================
// Extended attributes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedAttribute {
    pub name: String,
    pub rhs: Option<ExtAttrValue>,
    /// Argument list, as in `[LegacyFactoryFunction=Image(long w)]`.
    pub args: Option<Vec<Argument>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ExtAttrValue {
    Identifier(String),
    IdentifierList(Vec<String>),
    String(String),
    Integer(String),
    Decimal(String),
    Wildcard,
}

impl ExtendedAttribute {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rhs: None,
            args: None,
        }
    }
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "of", rename_all = "snake_case")]
pub enum Type {
    Primitive(Primitive),
    Named(String),
    Sequence(Box<Type>),
    FrozenArray(Box<Type>),
    ObservableArray(Box<Type>),
    Record(Box<Type>, Box<Type>),
    Promise(Box<Type>),
    Nullable(Box<Type>),
    Union(Vec<Type>),
    Any,
    /// Type carrying extended attributes, e.g. `[EnforceRange] long`.
    Annotated(Vec<ExtendedAttribute>, Box<Type>),
}

impl Type {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Strip extended-attribute annotations.
    pub fn unannotated(&self) -> &Type {
        match self {
            Self::Annotated(_, inner) => inner.unannotated(),
            other => other,
        }
    }

    /// Visit every `Named` reference inside this type, depth-first.
    pub fn for_each_named<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        match self {
            Self::Primitive(_) | Self::Any => {}
            Self::Named(name) => f(name.as_str()),
            Self::Sequence(inner)
            | Self::FrozenArray(inner)
            | Self::ObservableArray(inner)
            | Self::Promise(inner)
            | Self::Nullable(inner)
            | Self::Annotated(_, inner) => inner.for_each_named(f),
            Self::Record(key, value) => {
                key.for_each_named(f);
                value.for_each_named(f);
            }
            Self::Union(members) => members.iter().for_each(|m| m.for_each_named(f)),
        }
    }
}

/// WebIDL built-in types that are not references to declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Primitive {
    Undefined,
    Boolean,
    Byte,
    Octet,
    Short,
    UnsignedShort,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    Float,
    UnrestrictedFloat,
    Double,
    UnrestrictedDouble,
    Bigint,
    DOMString,
    USVString,
    ByteString,
    Object,
    Symbol,
    ArrayBuffer,
    SharedArrayBuffer,
    DataView,
    Int8Array,
    Int16Array,
    Int32Array,
    Uint8Array,
    Uint16Array,
    Uint32Array,
    Uint8ClampedArray,
    BigInt64Array,
    BigUint64Array,
    Float16Array,
    Float32Array,
    Float64Array,
}

impl Primitive {
    /// Types spelled with a single identifier.
    const SINGLE_WORD: &'static [Primitive] = &[
        Self::Undefined,
        Self::Boolean,
        Self::Byte,
        Self::Octet,
        Self::Short,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Bigint,
        Self::DOMString,
        Self::USVString,
        Self::ByteString,
        Self::Object,
        Self::Symbol,
        Self::ArrayBuffer,
        Self::SharedArrayBuffer,
        Self::DataView,
        Self::Int8Array,
        Self::Int16Array,
        Self::Int32Array,
        Self::Uint8Array,
        Self::Uint16Array,
        Self::Uint32Array,
        Self::Uint8ClampedArray,
        Self::BigInt64Array,
        Self::BigUint64Array,
        Self::Float16Array,
        Self::Float32Array,
        Self::Float64Array,
    ];

    /// Look up a primitive spelled with one identifier. Multi-word types
    /// (`unsigned long`, `unrestricted double`, ...) are assembled by the parser.
    pub fn from_word(word: &str) -> Option<Self> {
        if word == "void" {
            return Some(Self::Undefined);
        }
        Self::SINGLE_WORD
            .iter()
            .copied()
            .find(|p| p.idl_name() == word)
    }

    pub fn idl_name(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Octet => "octet",
            Self::Short => "short",
            Self::UnsignedShort => "unsigned short",
            Self::Long => "long",
            Self::UnsignedLong => "unsigned long",
            Self::LongLong => "long long",
            Self::UnsignedLongLong => "unsigned long long",
            Self::Float => "float",
            Self::UnrestrictedFloat => "unrestricted float",
            Self::Double => "double",
            Self::UnrestrictedDouble => "unrestricted double",
            Self::Bigint => "bigint",
            Self::DOMString => "DOMString",
            Self::USVString => "USVString",
            Self::ByteString => "ByteString",
            Self::Object => "object",
            Self::Symbol => "symbol",
            Self::ArrayBuffer => "ArrayBuffer",
            Self::SharedArrayBuffer => "SharedArrayBuffer",
            Self::DataView => "DataView",
            Self::Int8Array => "Int8Array",
            Self::Int16Array => "Int16Array",
            Self::Int32Array => "Int32Array",
            Self::Uint8Array => "Uint8Array",
            Self::Uint16Array => "Uint16Array",
            Self::Uint32Array => "Uint32Array",
            Self::Uint8ClampedArray => "Uint8ClampedArray",
            Self::BigInt64Array => "BigInt64Array",
            Self::BigUint64Array => "BigUint64Array",
            Self::Float16Array => "Float16Array",
            Self::Float32Array => "Float32Array",
            Self::Float64Array => "Float64Array",
        }
    }

    pub fn is_string(self) -> bool {
        matches!(self, Self::DOMString | Self::USVString | Self::ByteString)
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Byte
                | Self::Octet
                | Self::Short
                | Self::UnsignedShort
                | Self::Long
                | Self::UnsignedLong
                | Self::LongLong
                | Self::UnsignedLongLong
                | Self::Float
                | Self::UnrestrictedFloat
                | Self::Double
                | Self::UnrestrictedDouble
        )
    }

    /// `ArrayBuffer`, `DataView` and the typed array family.
    pub fn is_buffer(self) -> bool {
        matches!(
            self,
            Self::ArrayBuffer
                | Self::SharedArrayBuffer
                | Self::DataView
                | Self::Int8Array
                | Self::Int16Array
                | Self::Int32Array
                | Self::Uint8Array
                | Self::Uint16Array
                | Self::Uint32Array
                | Self::Uint8ClampedArray
                | Self::BigInt64Array
                | Self::BigUint64Array
                | Self::Float16Array
                | Self::Float32Array
                | Self::Float64Array
        )
    }
}
