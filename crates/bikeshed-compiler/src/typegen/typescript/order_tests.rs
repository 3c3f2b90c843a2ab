use indoc::indoc;

use super::order::emission_order;
use crate::test_utils::expect_model;

#[test]
fn dependencies_come_first() {
    let model = expect_model(indoc! {r#"
        interface Canvas : Surface { attribute Paint fill; };
        typedef (Color or Gradient) Paint;
        interface Surface {};
        enum Color { "red" };
        interface Gradient {};
    "#});

    assert_eq!(
        emission_order(&model),
        ["Surface", "Color", "Gradient", "Paint", "Canvas"]
    );
}

#[test]
fn unrelated_keep_document_order() {
    let model = expect_model("interface B {}; interface A {}; interface C {};");

    assert_eq!(emission_order(&model), ["B", "A", "C"]);
}

#[test]
fn cycles_are_broken() {
    let model = expect_model(indoc! {"
        interface Parent { attribute Child first; };
        interface Child { attribute Parent parent; };
    "});

    assert_eq!(emission_order(&model), ["Child", "Parent"]);
}

#[test]
fn mixins_are_skipped() {
    let model = expect_model(indoc! {"
        interface mixin M { attribute long x; };
        interface I {};
        I includes M;
    "});

    assert_eq!(emission_order(&model), ["I"]);
}
