use dbc::{Fatal, Operands, Site, Violation, template};
use insta::assert_snapshot;
use serde_json::json;

fn site() -> Site {
    Site::new(
        "src/geometry.rs",
        42,
        5,
        "shapes::geometry",
        "shapes::geometry::compute_area::__dbc_here",
    )
}

fn emitted(violation: &Violation<'_>) -> String {
    let mut fatal = Fatal::new(Vec::new());
    fatal.emit(violation).unwrap();
    String::from_utf8(fatal.into_inner()).unwrap()
}

#[test]
fn snapshot_plain_templates() {
    let requires = Violation::new(site(), template::REQUIRES, Operands::Expr("x > 0"));
    assert_snapshot!(requires.to_string(), @"src/geometry.rs:42: compute_area: Requires `x > 0' failed.");

    let ensures = Violation::new(site(), template::ENSURES, Operands::Expr("area >= 0"));
    assert_snapshot!(ensures.to_string(), @"src/geometry.rs:42: compute_area: Ensures `area >= 0' failed.");

    let invariant = Violation::new(site(), template::INVARIANT, Operands::Expr("false"));
    assert_snapshot!(invariant.to_string(), @"src/geometry.rs:42: compute_area: Invariant `false' failed.");
}

#[test]
fn snapshot_non_null_templates() {
    let requires = Violation::new(site(), template::REQUIRES_NON_NULL, Operands::Expr("ptr"));
    assert_snapshot!(requires.to_string(), @"src/geometry.rs:42: compute_area: Requires `ptr' != NULL failed.");

    let invariant = Violation::new(
        site(),
        template::INVARIANT_NON_NULL,
        Operands::Expr("self.head"),
    );
    assert_snapshot!(invariant.to_string(), @"src/geometry.rs:42: compute_area: Invariant `self.head' != NULL failed.");
}

#[test]
fn snapshot_equal_templates() {
    let ensures = Violation::new(
        site(),
        template::ENSURES_EQUAL,
        Operands::Pair("handle_a", "handle_b"),
    );
    assert_snapshot!(ensures.to_string(), @"src/geometry.rs:42: compute_area: Ensures `handle_a' == `handle_b' failed.");
}

#[test]
fn snapshot_fail() {
    let fail = Violation::new(site(), template::FAIL, Operands::None);
    assert_snapshot!(fail.to_string(), @"src/geometry.rs:42: compute_area: Fail.");
}

#[test]
fn emitted_line_is_newline_terminated() {
    let violation = Violation::new(site(), template::ENSURES_NON_NULL, Operands::Expr("found"));
    let out = emitted(&violation);
    assert_eq!(
        out,
        "src/geometry.rs:42: compute_area: Ensures `found' != NULL failed.\n"
    );
    assert_eq!(out.matches('\n').count(), 1);
}

#[test]
fn serializes_plain_violation() {
    let violation = Violation::new(site(), template::REQUIRES, Operands::Expr("x > 0"));
    let value = serde_json::to_value(violation).unwrap();
    assert_eq!(
        value,
        json!({
            "site": {
                "file": "src/geometry.rs",
                "line": 42,
                "column": 5,
                "module": "shapes::geometry",
                "function": "compute_area",
            },
            "category": "Requires",
            "flavor": "Plain",
            "expr": "x > 0",
            "message": "src/geometry.rs:42: compute_area: Requires `x > 0' failed.",
        })
    );
}

#[test]
fn serializes_equal_operands_separately() {
    let violation = Violation::new(site(), template::INVARIANT_EQUAL, Operands::Pair("a", "b"));
    let value = serde_json::to_value(violation).unwrap();
    assert_eq!(value["lhs"], "a");
    assert_eq!(value["rhs"], "b");
    assert!(value.get("expr").is_none());
    assert_eq!(value["flavor"], "Equal");
}

#[test]
fn serializes_fail_without_operands() {
    let violation = Violation::new(site(), template::FAIL, Operands::None);
    let value = serde_json::to_value(violation).unwrap();
    assert_eq!(value["category"], "Fail");
    assert!(value.get("expr").is_none());
    assert!(value.get("lhs").is_none());
    assert_eq!(value["message"], "src/geometry.rs:42: compute_area: Fail.");
}
