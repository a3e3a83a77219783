//! Markup AST
//!
//! Element, attribute, text and comment nodes with their source spans.

use serde::{Deserialize, Serialize};

use crate::parse_util::ParseSourceSpan;

/// Node type union
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Node {
    Attribute(Attribute),
    Comment(Comment),
    Element(Element),
    Text(Text),
}

impl Node {
    pub fn source_span(&self) -> &ParseSourceSpan {
        match self {
            Node::Attribute(a) => &a.source_span,
            Node::Comment(c) => &c.source_span,
            Node::Element(e) => &e.source_span,
            Node::Text(t) => &t.source_span,
        }
    }

    pub fn visit<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Node::Attribute(a) => visitor.visit_attribute(a),
            Node::Comment(c) => visitor.visit_comment(c),
            Node::Element(e) => visitor.visit_element(e),
            Node::Text(t) => visitor.visit_text(t),
        }
    }
}

/// Text node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
    pub source_span: ParseSourceSpan,
}

impl Text {
    pub fn new(value: impl Into<String>, source_span: ParseSourceSpan) -> Self {
        Text {
            value: value.into(),
            source_span,
        }
    }
}

/// Attribute node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    pub source_span: ParseSourceSpan,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>, source_span: ParseSourceSpan) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
            source_span,
        }
    }
}

/// Element node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Node>,
    pub source_span: ParseSourceSpan,
}

impl Element {
    pub fn new(
        name: impl Into<String>,
        attrs: Vec<Attribute>,
        children: Vec<Node>,
        source_span: ParseSourceSpan,
    ) -> Self {
        Element {
            name: name.into(),
            attrs,
            children,
            source_span,
        }
    }

    /// First attribute named `name`.
    pub fn attr(&self, name: &str) -> Option<&Attribute> {
        self.attrs.iter().find(|a| a.name == name)
    }
}

/// Comment node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub value: Option<String>,
    pub source_span: ParseSourceSpan,
}

impl Comment {
    pub fn new(value: Option<String>, source_span: ParseSourceSpan) -> Self {
        Comment { value, source_span }
    }
}

/// Visitor over markup nodes. One method per node kind, all producing the
/// same output type.
pub trait Visitor {
    type Output;

    fn visit_element(&mut self, element: &Element) -> Self::Output;
    fn visit_attribute(&mut self, attribute: &Attribute) -> Self::Output;
    fn visit_text(&mut self, text: &Text) -> Self::Output;
    fn visit_comment(&mut self, comment: &Comment) -> Self::Output;
}

/// Visit all nodes in array
pub fn visit_all<V: Visitor + ?Sized>(visitor: &mut V, nodes: &[Node]) -> Vec<V::Output> {
    nodes.iter().map(|node| node.visit(visitor)).collect()
}
