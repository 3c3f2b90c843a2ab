use super::ts_type::TsType;

fn kw(k: &'static str) -> TsType {
    TsType::Keyword(k)
}

#[test]
fn union_flattens_and_dedupes() {
    let inner = TsType::union([kw("string"), kw("number")]);
    let ty = TsType::union([inner, kw("string"), TsType::reference("Node")]);

    assert_eq!(ty.to_string(), "string | number | Node");
}

#[test]
fn union_edge_cases() {
    assert_eq!(TsType::union(std::iter::empty()).to_string(), "never");
    assert_eq!(TsType::union([kw("string")]), kw("string"));
    assert_eq!(TsType::union([kw("string"), kw("any")]), kw("any"));
}

#[test]
fn nullable_does_not_duplicate_null() {
    let ty = TsType::nullable(TsType::nullable(kw("string")));

    assert_eq!(ty.to_string(), "string | null");
}

#[test]
fn array_parenthesizes_loose_element() {
    let union = TsType::union([kw("string"), kw("number")]);
    let func = TsType::Function(vec![], Box::new(kw("void")));

    assert_eq!(TsType::array(union).to_string(), "(string | number)[]");
    assert_eq!(TsType::array(func).to_string(), "(() => void)[]");
    assert_eq!(
        TsType::array(TsType::array(kw("number"))).to_string(),
        "number[][]"
    );
}

#[test]
fn function_inside_union() {
    let func = TsType::Function(vec!["x: number".to_string()], Box::new(kw("void")));
    let ty = TsType::union([func, kw("null")]);

    assert_eq!(ty.to_string(), "((x: number) => void) | null");
}

#[test]
fn generics_and_tuples() {
    let ty = TsType::generic(
        "Record",
        vec![kw("string"), TsType::union([kw("number"), kw("null")])],
    );
    let tuple = TsType::Tuple(vec![kw("string"), TsType::reference("Node")]);

    assert_eq!(ty.to_string(), "Record<string, number | null>");
    assert_eq!(tuple.to_string(), "[string, Node]");
}

#[test]
fn intersection_with_object() {
    let ty = TsType::Intersection(vec![
        TsType::union([
            TsType::StringLiteral("\"a\"".into()),
            TsType::StringLiteral("\"b\"".into()),
        ]),
        TsType::Object(vec!["readonly tag: \"T\"".into()]),
    ]);

    assert_eq!(ty.to_string(), "(\"a\" | \"b\") & { readonly tag: \"T\" }");
    assert_eq!(TsType::Object(vec![]).to_string(), "{}");
}
