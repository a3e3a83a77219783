//! Markup builders shared by the i18n integration tests.
#![allow(dead_code)]

use angular_i18n::ml_parser::ast::{Attribute, Comment, Element, Node, Text};
use angular_i18n::parse_util::{ParseSourceFile, ParseSourceSpan};

pub fn span() -> ParseSourceSpan {
    let file = ParseSourceFile::new("", "TestComp");
    ParseSourceSpan::from_offsets(&file, 0, 0)
}

pub fn text(value: &str) -> Node {
    Node::Text(Text::new(value, span()))
}

pub fn comment(value: &str) -> Node {
    Node::Comment(Comment::new(Some(value.to_string()), span()))
}

pub fn attr(name: &str, value: &str) -> Attribute {
    Attribute::new(name, value, span())
}

pub fn el(name: &str, attrs: &[(&str, &str)], children: Vec<Node>) -> Element {
    Element::new(
        name,
        attrs.iter().map(|(n, v)| attr(n, v)).collect(),
        children,
        span(),
    )
}

pub fn element(name: &str, attrs: &[(&str, &str)], children: Vec<Node>) -> Node {
    Node::Element(el(name, attrs, children))
}
