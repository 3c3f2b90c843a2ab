//! Type parsing tests.

use bikeshed_core::{Definition, Primitive, Type};
use indoc::indoc;

use crate::test_utils::{expect_parse, reprint};

fn typedef_type(idl: &str) -> Type {
    match expect_parse(idl).remove(0) {
        Definition::Typedef(t) => t.ty,
        other => panic!("expected a typedef, got {other:?}"),
    }
}

#[test]
fn multi_word_primitives() {
    let out = reprint(indoc! {"
        typedef unsigned long long A;
        typedef long long B;
        typedef unsigned short C;
        typedef unrestricted double D;
        typedef unrestricted float E;
        typedef long F;
    "});

    insta::assert_snapshot!(out, @r"
    typedef unsigned long long A;

    typedef long long B;

    typedef unsigned short C;

    typedef unrestricted double D;

    typedef unrestricted float E;

    typedef long F;
    ");
}

#[test]
fn void_reads_as_undefined() {
    assert_eq!(
        typedef_type("typedef void V;"),
        Type::Primitive(Primitive::Undefined)
    );
}

#[test]
fn generic_types() {
    let out = reprint(indoc! {"
        typedef sequence<sequence<long>> Matrix;
        typedef FrozenArray<DOMString> Names;
        typedef ObservableArray<Node> Nodes;
        typedef Promise<undefined> Done;
        typedef record<ByteString, any> Headers;
    "});

    insta::assert_snapshot!(out, @r"
    typedef sequence<sequence<long>> Matrix;

    typedef FrozenArray<DOMString> Names;

    typedef ObservableArray<Node> Nodes;

    typedef Promise<undefined> Done;

    typedef record<ByteString, any> Headers;
    ");
}

#[test]
fn nullable_union() {
    let ty = typedef_type("typedef (Node or DOMString)? Child;");

    assert_eq!(
        ty,
        Type::Nullable(Box::new(Type::Union(vec![
            Type::named("Node"),
            Type::Primitive(Primitive::DOMString),
        ])))
    );
}

#[test]
fn nested_union_reprints() {
    insta::assert_snapshot!(
        reprint("typedef (long or (DOMString or sequence<long>)?) Mixed;"),
        @"typedef (long or (DOMString or sequence<long>)?) Mixed;"
    );
}

#[test]
fn annotated_types() {
    let ty = typedef_type("typedef [Clamp] octet Byte;");

    let Type::Annotated(attrs, inner) = ty else {
        panic!("expected an annotated type");
    };
    assert_eq!(attrs[0].name, "Clamp");
    assert_eq!(*inner, Type::Primitive(Primitive::Octet));
}

#[test]
fn buffer_types_are_primitives() {
    assert!(matches!(
        typedef_type("typedef Uint8Array Bytes;"),
        Type::Primitive(p) if p.is_buffer()
    ));
    assert!(matches!(
        typedef_type("typedef ArrayBuffer Buf;"),
        Type::Primitive(p) if p.is_buffer()
    ));
}

#[test]
fn named_types_keep_identifiers() {
    assert_eq!(typedef_type("typedef EventTarget T;"), Type::named("EventTarget"));
    assert_eq!(typedef_type("typedef _Escaped T;"), Type::named("Escaped"));
}
