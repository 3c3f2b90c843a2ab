use bikeshed_core::{Argument, Primitive, Type};

use super::Config;
use super::mapper::TypeMapper;

fn map(ty: &Type) -> String {
    TypeMapper::new(&Config::default()).map(ty).to_string()
}

fn prim(p: Primitive) -> Type {
    Type::Primitive(p)
}

fn boxed(ty: Type) -> Box<Type> {
    Box::new(ty)
}

#[test]
fn primitives() {
    let cases = [
        (Primitive::Long, "number"),
        (Primitive::UnrestrictedDouble, "number"),
        (Primitive::UnsignedLongLong, "number"),
        (Primitive::DOMString, "string"),
        (Primitive::USVString, "string"),
        (Primitive::ByteString, "string"),
        (Primitive::Boolean, "boolean"),
        (Primitive::Bigint, "bigint"),
        (Primitive::Object, "any"),
        (Primitive::Undefined, "undefined"),
        (Primitive::Uint8Array, "Uint8Array"),
    ];
    for (p, expected) in cases {
        assert_eq!(map(&prim(p)), expected, "{p:?}");
    }
}

#[test]
fn containers() {
    let seq = Type::Sequence(boxed(Type::Nullable(boxed(prim(Primitive::Long)))));
    let record = Type::Record(boxed(prim(Primitive::DOMString)), boxed(Type::named("Node")));
    let frozen = Type::FrozenArray(boxed(prim(Primitive::DOMString)));

    assert_eq!(map(&seq), "(number | null)[]");
    assert_eq!(map(&record), "Record<string, Node>");
    assert_eq!(map(&frozen), "ReadonlyArray<string>");
}

#[test]
fn frozen_array_without_readonly() {
    let config = Config::new().readonly_arrays(false);
    let frozen = Type::FrozenArray(boxed(prim(Primitive::DOMString)));

    assert_eq!(TypeMapper::new(&config).map(&frozen).to_string(), "string[]");
}

#[test]
fn promise_of_undefined_is_void() {
    let promise = Type::Promise(boxed(prim(Primitive::Undefined)));

    assert_eq!(map(&promise), "Promise<void>");
}

#[test]
fn unions_and_any() {
    let union = Type::Nullable(boxed(Type::Union(vec![
        Type::named("Node"),
        prim(Primitive::DOMString),
        prim(Primitive::USVString),
    ])));
    let with_any = Type::Union(vec![Type::Any, prim(Primitive::Long)]);

    assert_eq!(map(&union), "Node | string | null");
    assert_eq!(map(&with_any), "any");
}

#[test]
fn annotations_are_transparent() {
    let ty = Type::Annotated(vec![], boxed(prim(Primitive::Octet)));

    assert_eq!(map(&ty), "number");
}

#[test]
fn parameters() {
    let config = Config::default();
    let mapper = TypeMapper::new(&config);
    let arg = |name: &str, optional, variadic| Argument {
        name: name.to_string(),
        ty: prim(Primitive::Long),
        optional,
        variadic,
        default: None,
        ext_attrs: vec![],
    };

    assert_eq!(mapper.parameter(&arg("count", false, false)), "count: number");
    assert_eq!(mapper.parameter(&arg("limit", true, false)), "limit?: number");
    assert_eq!(mapper.parameter(&arg("values", false, true)), "...values: number[]");
    assert_eq!(mapper.parameter(&arg("default", false, false)), "default_: number");
}

#[test]
fn brand_member() {
    let config = Config::new().brand_prefix("__tag_");
    let mapper = TypeMapper::new(&config);

    assert_eq!(mapper.brand("Node"), r#"readonly __tag_Node: "Node""#);
}
