use indoc::indoc;

use bikeshed_core::{Definition, Member};

use crate::emit::idl::{Config, Emitter, render_member};
use crate::test_utils::{expect_idl, expect_model, expect_parse};

#[test]
fn folds_partials_and_keeps_mixins() {
    let out = expect_idl(indoc! {"
        [Exposed=Window]
        interface Document {
          readonly attribute DOMString URL;
        };

        partial interface Document {
          [CEReactions] attribute DOMString title;
        };

        interface mixin ParentNode {
          readonly attribute unsigned long childElementCount;
        };

        Document includes ParentNode;
    "});

    insta::assert_snapshot!(out, @r"
    [Exposed=Window]
    interface Document {
        readonly attribute DOMString URL;
        [CEReactions] attribute DOMString title;
        readonly attribute unsigned long childElementCount;
    };

    interface mixin ParentNode {
        readonly attribute unsigned long childElementCount;
    };
    ");
}

#[test]
fn partial_extended_attributes_are_merged_once() {
    let out = expect_idl(indoc! {"
        [Exposed=Window]
        interface Nav {};
        [Exposed=Window, SecureContext]
        partial interface Nav {};
    "});

    insta::assert_snapshot!(out, @r"
    [Exposed=Window, SecureContext]
    interface Nav {
    };
    ");
}

#[test]
fn custom_indent() {
    let model = expect_model(r#"enum Mode { "a", "b" };"#);
    let out = Emitter::new(Config::new().indent(2)).emit(&model);

    insta::assert_snapshot!(out, @r#"
    enum Mode {
      "a",
      "b"
    };
    "#);
}

#[test]
fn definitions_are_blank_line_separated() {
    let defs = expect_parse(indoc! {"
        typedef long Id;
        callback Done = undefined ();
        A includes B;
    "});
    let out = Emitter::new(Config::default()).emit_definitions(&defs);

    insta::assert_snapshot!(out, @r"
    typedef long Id;

    callback Done = undefined ();

    A includes B;
    ");
}

#[test]
fn single_member_rendering() {
    let defs = expect_parse(
        "interface X { [NewObject] static Promise<sequence<Node>> query(DOMString? selector, long... rest); };",
    );
    let Definition::Container(c) = &defs[0] else {
        panic!("expected a container");
    };
    let member: &Member = &c.members[0];

    insta::assert_snapshot!(render_member(member), @"[NewObject] static Promise<sequence<Node>> query(DOMString? selector, long... rest);");
}

#[test]
fn empty_model_is_a_single_newline() {
    let out = Emitter::new(Config::default()).emit_definitions(std::iter::empty());

    assert_eq!(out, "\n");
}
