//! Node literals: tag, id, classes, attributes and content.

use flexcon::parser::{LiteralFault, ParseError, parse_literal};
use rstest::rstest;

use crate::helpers::node_assertions::{forest, single, tags};

#[test]
fn test_plain_tag() {
    let div = single("div");
    assert_eq!(div.tag, "div");
    assert_eq!(div.id(), "");
    assert!(div.classes.is_empty());
    assert!(div.attributes.is_empty());
    assert_eq!(div.content(), "");
    assert!(div.children.is_empty());
}

#[test]
fn test_id_and_classes() {
    let div = single("div#a.b.c");
    assert_eq!(div.tag, "div");
    assert_eq!(div.id(), "a");
    assert_eq!(div.classes, vec!["b", "c"]);
}

#[test]
fn test_attributes() {
    let div = single("div[x y=\"1\"]");
    assert_eq!(div.attributes.len(), 2);
    assert_eq!(div.attribute("x"), Some(None));
    assert_eq!(div.attribute("y"), Some(Some("1")));
}

#[test]
fn test_content() {
    assert_eq!(single("div{hello world}").content(), "hello world");
}

#[rstest]
#[case("a[href=\"/search?q=x&lang=en\"]", "href", "/search?q=x&lang=en")]
#[case("a[title=\"a = b\"]", "title", "a = b")]
#[case("a[data-x=\"[1,2]\"]", "data-x", "[1,2]")]
#[case("a[style=\"color: red; margin: 0\"]", "style", "color: red; margin: 0")]
#[case("a[alt=\"\"]", "alt", "")]
fn test_attribute_value_verbatim(#[case] input: &str, #[case] name: &str, #[case] value: &str) {
    assert_eq!(single(input).attribute(name), Some(Some(value)), "Attribute of {}", input);
}

#[test]
fn test_content_with_operators_and_groups() {
    let nodes = forest("p{1 > 0 + (x) [y]}+q");
    assert_eq!(tags(&nodes), vec!["p", "q"]);
    assert_eq!(nodes[0].content(), "1 > 0 + (x) [y]");
}

#[test]
fn test_all_components_in_order() {
    let node = single("input#email.field.wide[type=\"email\" required]{placeholder}");
    assert_eq!(node.tag, "input");
    assert_eq!(node.id(), "email");
    assert_eq!(node.classes, vec!["field", "wide"]);
    let names: Vec<_> = node.attributes.keys().map(|k| k.as_str()).collect();
    assert_eq!(names, vec!["type", "required"]);
    assert_eq!(node.content(), "placeholder");
}

#[test]
fn test_empty_content_is_present() {
    let node = single("p{}");
    assert_eq!(node.content, Some(String::new()));
    assert_eq!(single("p").content, None);
}

#[rstest]
#[case("", LiteralFault::EmptyTag)]
#[case(" ", LiteralFault::EmptyTag)]
#[case(".x", LiteralFault::EmptyTag)]
#[case("a#", LiteralFault::EmptyId)]
#[case("a.", LiteralFault::EmptyClass)]
#[case("a.b#c", LiteralFault::MisplacedMarker('#'))]
#[case("a b", LiteralFault::UnexpectedWhitespace)]
#[case("a{b}c", LiteralFault::UnclosedContent)]
#[case("a[b]c", LiteralFault::TrailingCharacters)]
#[case("a[b", LiteralFault::UnclosedAttributes)]
#[case("a[b=c]", LiteralFault::UnquotedValue)]
#[case("a[b=\"c]", LiteralFault::UnterminatedValue)]
#[case("a[b=\"c\"d]", LiteralFault::MissingSeparator)]
#[case("a[=\"c\"]", LiteralFault::MissingAttributeName)]
fn test_literal_faults(#[case] literal: &str, #[case] expected: LiteralFault) {
    match parse_literal(literal) {
        Err(ParseError::MalformedNodeLiteral { fault, literal: text, .. }) => {
            assert_eq!(fault, expected, "Fault for {:?}", literal);
            assert_eq!(text, literal);
        }
        other => panic!("Expected malformed literal for {:?}, got {:?}", literal, other),
    }
}
