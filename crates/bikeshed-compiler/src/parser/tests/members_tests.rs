//! Member parsing tests.

use bikeshed_core::{ConstValue, Definition, IterableKind, Member, Special};
use indoc::indoc;

use crate::test_utils::{expect_parse, reprint};

fn members(idl: &str) -> Vec<Member> {
    match expect_parse(idl).remove(0) {
        Definition::Container(c) => c.members,
        other => panic!("expected a container, got {other:?}"),
    }
}

#[test]
fn attributes_with_qualifiers() {
    let out = reprint(indoc! {"
        interface A {
          static readonly attribute long count;
          stringifier attribute USVString href;
          inherit attribute DOMString title;
          [SameObject] readonly attribute Node root;
        };
    "});

    insta::assert_snapshot!(out, @r"
    interface A {
        static readonly attribute long count;
        stringifier attribute USVString href;
        inherit attribute DOMString title;
        [SameObject] readonly attribute Node root;
    };
    ");
}

#[test]
fn operations_and_specials() {
    let out = reprint(indoc! {"
        interface Storage {
          getter DOMString? (DOMString name);
          setter undefined setItem(DOMString name, DOMString value);
          deleter undefined (DOMString name);
          static Storage create();
          stringifier DOMString describe();
          stringifier;
        };
    "});

    insta::assert_snapshot!(out, @r"
    interface Storage {
        getter DOMString? (DOMString name);
        setter undefined setItem(DOMString name, DOMString value);
        deleter undefined (DOMString name);
        static Storage create();
        stringifier DOMString describe();
        stringifier;
    };
    ");
}

#[test]
fn special_operation_flags() {
    let members = members("interface S { getter any (unsigned long index); };");

    let Member::Operation(op) = &members[0] else {
        panic!("expected an operation");
    };
    assert_eq!(op.special, Some(Special::Getter));
    assert_eq!(op.name, None);
    assert_eq!(op.args[0].name, "index");
}

#[test]
fn constructors_and_constants() {
    let out = reprint(indoc! {"
        interface Point {
          constructor();
          constructor(double x, optional double y = 0);
          const unsigned short ORIGIN = 0x0;
          const double LIMIT = -Infinity;
          const boolean DEBUG = true;
        };
    "});

    insta::assert_snapshot!(out, @r"
    interface Point {
        constructor();
        constructor(double x, optional double y = 0);
        const unsigned short ORIGIN = 0x0;
        const double LIMIT = -Infinity;
        const boolean DEBUG = true;
    };
    ");
}

#[test]
fn negative_infinity_with_space() {
    let members = members("interface P { const double LOW = - Infinity; };");

    let Member::Const(c) = &members[0] else {
        panic!("expected a constant");
    };
    assert_eq!(c.value, ConstValue::NegativeInfinity);
}

#[test]
fn iterable_declarations() {
    let out = reprint(indoc! {"
        interface Collections {
          iterable<Node>;
          iterable<DOMString, long>;
          async iterable<any>(optional ReadOptions options = {});
          readonly maplike<DOMString, long>;
          setlike<DOMString>;
        };
    "});

    insta::assert_snapshot!(out, @r"
    interface Collections {
        iterable<Node>;
        iterable<DOMString, long>;
        async iterable<any>(optional ReadOptions options = {});
        readonly maplike<DOMString, long>;
        setlike<DOMString>;
    };
    ");
}

#[test]
fn iterable_kinds() {
    let kinds: Vec<_> = members(indoc! {"
        interface C {
          iterable<long>;
          async iterable<long>;
          maplike<long, long>;
          readonly setlike<long>;
        };
    "})
    .into_iter()
    .map(|m| match m {
        Member::Iterable(i) => (i.kind, i.readonly, i.key.is_some()),
        other => panic!("expected an iterable, got {other:?}"),
    })
    .collect();

    assert_eq!(
        kinds,
        [
            (IterableKind::Iterable, false, false),
            (IterableKind::AsyncIterable, false, false),
            (IterableKind::Maplike, false, true),
            (IterableKind::Setlike, true, false),
        ]
    );
}

#[test]
fn keywords_as_member_names() {
    let out = reprint(indoc! {"
        interface Keywords {
          attribute DOMString required;
          undefined includes(long interface);
          attribute long _attribute;
        };
    "});

    insta::assert_snapshot!(out, @r"
    interface Keywords {
        attribute DOMString required;
        undefined includes(long interface);
        attribute long attribute;
    };
    ");
}

#[test]
fn argument_flags() {
    let members = members("interface F { undefined f([Clamp] optional long a = 1, any... rest); };");

    let Member::Operation(op) = &members[0] else {
        panic!("expected an operation");
    };
    let a = &op.args[0];
    assert!(a.optional && !a.variadic);
    assert_eq!(a.ext_attrs[0].name, "Clamp");
    let rest = &op.args[1];
    assert!(rest.variadic && !rest.optional);
}
