//! XML Helper Module
//!
//! Minimal XML tree used to write message bundles.

use indexmap::IndexMap;

/// Visitor trait for XML nodes
pub trait IVisitor {
    fn visit_tag(&mut self, tag: &Tag) -> String;
    fn visit_raw(&mut self, raw: &Raw) -> String;
}

struct Visitor;

impl IVisitor for Visitor {
    fn visit_tag(&mut self, tag: &Tag) -> String {
        let str_attrs = self.serialize_attributes(&tag.attrs);

        if tag.children.is_empty() {
            return format!("<{}{}/>", tag.name, str_attrs);
        }

        let str_children: String = tag.children.iter().map(|node| node.visit(self)).collect();

        format!("<{}{}>{}</{}>", tag.name, str_attrs, str_children, tag.name)
    }

    fn visit_raw(&mut self, raw: &Raw) -> String {
        raw.value.clone()
    }
}

impl Visitor {
    fn serialize_attributes(&self, attrs: &IndexMap<String, String>) -> String {
        attrs
            .iter()
            .map(|(name, value)| format!(" {}=\"{}\"", name, value))
            .collect()
    }
}

/// Serialize XML nodes to string
pub fn serialize(nodes: &[Node]) -> String {
    let mut visitor = Visitor;
    nodes.iter().map(|node| node.visit(&mut visitor)).collect()
}

/// XML node union
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Tag(Tag),
    Raw(Raw),
}

impl Node {
    pub fn visit(&self, visitor: &mut dyn IVisitor) -> String {
        match self {
            Node::Tag(tag) => visitor.visit_tag(tag),
            Node::Raw(raw) => visitor.visit_raw(raw),
        }
    }
}

/// XML Tag node. Attribute values are escaped on construction and written in
/// insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub attrs: IndexMap<String, String>,
    pub children: Vec<Node>,
}

impl Tag {
    pub fn new(name: &str, unescaped_attrs: IndexMap<String, String>, children: Vec<Node>) -> Self {
        let attrs = unescaped_attrs
            .into_iter()
            .map(|(k, v)| (k, escape_xml(&v)))
            .collect();
        Tag {
            name: name.to_string(),
            attrs,
            children,
        }
    }
}

/// Pre-formed markup written verbatim (message content already carries its
/// `<ph>` placeholders).
#[derive(Debug, Clone, PartialEq)]
pub struct Raw {
    pub value: String,
}

impl Raw {
    pub fn new(value: &str) -> Self {
        Raw {
            value: value.to_string(),
        }
    }
}

const ESCAPED_CHARS: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('"', "&quot;"),
    ('\'', "&apos;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
];

/// Escape XML special characters
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match ESCAPED_CHARS.iter().find(|(ch, _)| *ch == c) {
            Some((_, escaped)) => out.push_str(escaped),
            None => out.push(c),
        }
    }
    out
}
