//! Error taxonomy, labelling and ranges.

use flexcon::parser::{Imbalance, TextRange, TextSize};
use flexcon::{ErrorCode, ParseError};
use rstest::rstest;

use crate::helpers::node_assertions::assert_rejected;

#[test]
fn test_unclosed_paren() {
    let err = assert_rejected("a(b", ErrorCode::E0101);
    assert!(matches!(
        err,
        ParseError::UnbalancedGrouping {
            imbalance: Imbalance::ExcessOpening,
            ..
        }
    ));
    assert_eq!(err.range(), TextRange::at(TextSize::new(1), TextSize::new(1)));
}

#[test]
fn test_stray_closing_paren() {
    let err = assert_rejected("a>b)", ErrorCode::E0102);
    assert!(matches!(
        err,
        ParseError::UnbalancedGrouping {
            imbalance: Imbalance::ExcessClosing,
            ..
        }
    ));
    assert_eq!(err.range(), TextRange::at(TextSize::new(3), TextSize::new(1)));
}

#[test]
fn test_duplicate_attribute() {
    let err = assert_rejected("div[x x]", ErrorCode::E0306);
    match err {
        ParseError::DuplicateAttribute { name, literal, range } => {
            assert_eq!(name, "x");
            assert_eq!(literal, "div[x x]");
            assert_eq!(range, TextRange::new(TextSize::new(6), TextSize::new(7)));
        }
        other => panic!("Unexpected error {:?}", other),
    }
}

#[test]
fn test_duplicate_attribute_with_value() {
    assert_rejected("a[x=\"1\" x=\"2\"]", ErrorCode::E0306);
}

#[test]
fn test_same_attribute_on_different_nodes_is_fine() {
    assert!(flexcon::parse("a[x]+b[x]").is_ok());
}

#[rstest]
#[case("(a", ErrorCode::E0101)]
#[case("a>(b+(c)", ErrorCode::E0101)]
#[case("a)", ErrorCode::E0102)]
#[case("a)(b)", ErrorCode::E0102)]
#[case("a)>b", ErrorCode::E0102)]
#[case("(a))", ErrorCode::E0102)]
#[case("a+ ", ErrorCode::E0201)]
#[case("+", ErrorCode::E0201)]
#[case("a > b", ErrorCode::E0205)]
#[case("ul>li.x#y", ErrorCode::E0204)]
#[case("a[b=c]", ErrorCode::E0303)]
#[case("a{b>c", ErrorCode::E0401)]
fn test_rejections(#[case] input: &str, #[case] code: ErrorCode) {
    assert_rejected(input, code);
}

#[test]
fn test_closing_paren_paid_back_later_is_accepted() {
    let root = flexcon::parse("a)(b").unwrap();
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].tag, "a)(b");
    assert_eq!(flexcon::parser::split("a)(b", '>').unwrap(), vec!["a)(b"]);
}

#[test]
fn test_excess_closing_points_at_unpaid_paren() {
    let err = assert_rejected("a)(b)", ErrorCode::E0102);
    assert_eq!(err.range(), TextRange::at(TextSize::new(4), TextSize::new(1)));
    assert_eq!(flexcon::parser::split("a)(b)", '>').unwrap_err(), err);
}

#[test]
fn test_parens_inside_groups_are_not_counted() {
    assert!(flexcon::parse("a{(}").is_ok());
    assert!(flexcon::parse("a[x=\")\"]").is_ok());
}

#[test]
fn test_errors_abort_without_partial_tree() {
    // the first sibling is fine, the second is not
    let result = flexcon::parse("ok+bad thing>child");
    assert!(result.is_err());
}

#[test]
fn test_literal_error_reports_absolute_range() {
    let err = assert_rejected("nav>ul>li..x", ErrorCode::E0203);
    assert_eq!(err.range().start(), TextSize::new(10));
    match err {
        ParseError::MalformedNodeLiteral { literal, .. } => assert_eq!(literal, "li..x"),
        other => panic!("Unexpected error {:?}", other),
    }
}

#[test]
fn test_error_display() {
    let err = flexcon::parse("a(b").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unbalanced grouping: excess opening parenthesis at 1..2"
    );
    assert_eq!(
        err.format(),
        "E0101: unbalanced grouping: excess opening parenthesis at 1..2"
    );

    let err = flexcon::parse("div[x x]").unwrap_err();
    assert_eq!(err.to_string(), "duplicate attribute `x` in `div[x x]` at 6..7");
}
