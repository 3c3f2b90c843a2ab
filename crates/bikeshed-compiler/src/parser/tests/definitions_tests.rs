//! Definition parsing tests.

use bikeshed_core::{ContainerKind, Definition};
use indoc::indoc;

use crate::test_utils::{expect_parse, reprint};

#[test]
fn interface_with_inheritance() {
    let out = reprint(indoc! {"
        interface   Element:Node{
          readonly attribute DOMString tagName;
        } ;
    "});

    insta::assert_snapshot!(out, @r"
    interface Element : Node {
        readonly attribute DOMString tagName;
    };
    ");
}

#[test]
fn extended_attributes_on_definition() {
    let out = reprint(indoc! {"
        [Exposed=(Window,Worker), SecureContext, LegacyFactoryFunction=Image(unsigned long width)]
        interface HTMLImageElement {};
    "});

    insta::assert_snapshot!(out, @r"
    [Exposed=(Window, Worker), SecureContext, LegacyFactoryFunction=Image(unsigned long width)]
    interface HTMLImageElement {
    };
    ");
}

#[test]
fn mixin_and_includes() {
    let out = reprint(indoc! {"
        interface mixin Body { readonly attribute boolean bodyUsed; };
        Request includes Body;
    "});

    insta::assert_snapshot!(out, @r"
    interface mixin Body {
        readonly attribute boolean bodyUsed;
    };

    Request includes Body;
    ");
}

#[test]
fn partial_forms() {
    let defs = expect_parse(indoc! {"
        partial interface Window {};
        partial interface mixin WindowOrWorkerGlobalScope {};
        partial dictionary RequestInit {};
        partial namespace console {};
    "});

    let kinds: Vec<_> = defs
        .iter()
        .map(|d| d.as_container().map(|c| (c.kind, c.partial)))
        .collect();
    assert_eq!(
        kinds,
        [
            Some((ContainerKind::Interface, true)),
            Some((ContainerKind::Mixin, true)),
            Some((ContainerKind::Dictionary, true)),
            Some((ContainerKind::Namespace, true)),
        ]
    );
}

#[test]
fn partial_interface_reprints_partial() {
    insta::assert_snapshot!(reprint("partial interface Window { attribute long x; };"), @r"
    partial interface Window {
        attribute long x;
    };
    ");
}

#[test]
fn callback_interface() {
    let defs = expect_parse("callback interface EventListener { undefined handleEvent(Event event); };");

    let Definition::Container(c) = &defs[0] else {
        panic!("expected a container");
    };
    assert_eq!(c.kind, ContainerKind::CallbackInterface);
    assert_eq!(c.name, "EventListener");
}

#[test]
fn callback_function() {
    insta::assert_snapshot!(reprint("callback Handler=any(Event event, optional any extra);"), @"callback Handler = any (Event event, optional any extra);");
}

#[test]
fn enum_with_trailing_comma() {
    let out = reprint(indoc! {r#"
        enum ReferrerPolicy { "", "no-referrer", "origin", };
    "#});

    insta::assert_snapshot!(out, @r#"
    enum ReferrerPolicy {
        "",
        "no-referrer",
        "origin"
    };
    "#);
}

#[test]
fn typedef() {
    insta::assert_snapshot!(reprint("typedef (Blob or BufferSource or USVString) BodyInit;"), @"typedef (Blob or BufferSource or USVString) BodyInit;");
}

#[test]
fn namespace_members() {
    let out = reprint(indoc! {"
        namespace console {
          undefined log(any... data);
          readonly attribute long depth;
        };
    "});

    insta::assert_snapshot!(out, @r"
    namespace console {
        undefined log(any... data);
        readonly attribute long depth;
    };
    ");
}

#[test]
fn dictionary_with_defaults() {
    let out = reprint(indoc! {r#"
        dictionary EventInit : BaseInit {
          boolean bubbles = false;
          required DOMString type;
          sequence<long> ids = [];
          Options options = {};
          DOMString? label = null;
          DOMString mode = "cors";
        };
    "#});

    insta::assert_snapshot!(out, @r#"
    dictionary EventInit : BaseInit {
        boolean bubbles = false;
        required DOMString type;
        sequence<long> ids = [];
        Options options = {};
        DOMString? label = null;
        DOMString mode = "cors";
    };
    "#);
}

#[test]
fn definition_spans_cover_source() {
    let src = "  enum E { \"a\" };  interface I {};";
    let defs = expect_parse(src);

    let texts: Vec<_> = defs.iter().map(|d| &src[d.span().to_range()]).collect();
    assert_eq!(texts, ["enum E { \"a\" };", "interface I {};"]);
}

#[test]
fn comments_are_trivia() {
    let out = reprint(indoc! {"
        // leading comment
        interface /* inline */ A {
          attribute long x; // trailing
        };
    "});

    insta::assert_snapshot!(out, @r"
    interface A {
        attribute long x;
    };
    ");
}
