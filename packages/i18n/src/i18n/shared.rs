//! Marker handling shared by extraction and translation.
//!
//! A translatable region is either an element carrying an `i18n` attribute or
//! a run of siblings wrapped in `<!--i18n: meaning|description-->` ...
//! `<!--/i18n-->`. Attribute values are marked with `i18n-<attr>`.

use thiserror::Error;

use crate::expression_parser::InterpolationSplitter;
use crate::i18n::message::Message;
use crate::ml_parser::ast::{self as html, visit_all, Node, Visitor};
use crate::parse_util::{ParseError, ParseSourceSpan};

pub const I18N_ATTR: &str = "i18n";
pub const I18N_ATTR_PREFIX: &str = "i18n-";

const I18N_COMMENT_PREFIX: &str = "i18n:";
const I18N_CLOSING_COMMENT: &str = "/i18n";

/// An i18n error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{msg}")]
pub struct I18nError {
    pub span: ParseSourceSpan,
    pub msg: String,
}

impl I18nError {
    pub fn new(span: ParseSourceSpan, msg: impl Into<String>) -> Self {
        I18nError { span, msg: msg.into() }
    }
}

impl From<I18nError> for ParseError {
    fn from(err: I18nError) -> Self {
        ParseError::new(err.span, err.msg)
    }
}

/// Splits sibling nodes into parts. Unterminated marker comments are reported
/// into `errors` and the part keeps the nodes seen up to the end of `nodes`.
pub fn partition<'a>(nodes: &'a [Node], errors: &mut Vec<ParseError>) -> Vec<Part<'a>> {
    let mut res = Vec::new();

    let mut i = 0;
    while i < nodes.len() {
        let n = &nodes[i];

        if let Some(i18n) = opening_comment_value(n) {
            i += 1;
            let start = i;
            while i < nodes.len() && !is_closing_comment(&nodes[i]) {
                i += 1;
            }
            if i == nodes.len() {
                let err = I18nError::new(n.source_span().clone(), "Missing closing 'i18n' comment.");
                tracing::warn!(location = %n.source_span().start, "{}", err);
                errors.push(err.into());
            }
            res.push(Part::new(None, None, &nodes[start..i], Some(i18n), true));
        } else if let Node::Element(el) = n {
            let i18n = find_i18n_attr(el);
            res.push(Part::new(
                Some(el),
                None,
                &el.children,
                i18n.map(|a| a.value.clone()),
                i18n.is_some(),
            ));
        } else if let Node::Text(text) = n {
            res.push(Part::new(None, Some(text), &[], None, false));
        }

        i += 1;
    }

    res
}

/// A translatable (or plain) chunk of a node list.
#[derive(Debug, Clone, PartialEq)]
pub struct Part<'a> {
    pub root_element: Option<&'a html::Element>,
    pub root_text_node: Option<&'a html::Text>,
    pub children: &'a [Node],
    pub i18n: Option<String>,
    pub has_i18n: bool,
}

impl<'a> Part<'a> {
    pub fn new(
        root_element: Option<&'a html::Element>,
        root_text_node: Option<&'a html::Text>,
        children: &'a [Node],
        i18n: Option<String>,
        has_i18n: bool,
    ) -> Self {
        Part {
            root_element,
            root_text_node,
            children,
            i18n,
            has_i18n,
        }
    }

    /// `None` only for an empty comment-delimited run.
    pub fn source_span(&self) -> Option<&'a ParseSourceSpan> {
        if let Some(el) = self.root_element {
            Some(&el.source_span)
        } else if let Some(text) = self.root_text_node {
            Some(&text.source_span)
        } else {
            self.children.first().map(Node::source_span)
        }
    }

    pub fn create_message(&self, parser: &dyn InterpolationSplitter) -> Message {
        let i18n = self.i18n.as_deref().unwrap_or("");
        Message::new(
            stringify_nodes(self.children, parser),
            meaning(i18n).map(str::to_string),
            description(i18n).map(str::to_string),
        )
    }
}

fn opening_comment_value(n: &Node) -> Option<String> {
    match n {
        Node::Comment(html::Comment { value: Some(value), .. }) => value
            .strip_prefix(I18N_COMMENT_PREFIX)
            .map(|rest| rest.trim().to_string()),
        _ => None,
    }
}

fn is_closing_comment(n: &Node) -> bool {
    matches!(n, Node::Comment(html::Comment { value: Some(value), .. }) if value == I18N_CLOSING_COMMENT)
}

fn find_i18n_attr(p: &html::Element) -> Option<&html::Attribute> {
    p.attr(I18N_ATTR)
}

/// Meaning part of a `meaning|description` marker value.
pub fn meaning(i18n: &str) -> Option<&str> {
    if i18n.is_empty() {
        return None;
    }
    i18n.split('|').next()
}

/// Description part of a `meaning|description` marker value.
pub fn description(i18n: &str) -> Option<&str> {
    if i18n.is_empty() {
        return None;
    }
    i18n.split('|').nth(1)
}

/// Builds the message for an `i18n-<name>` marker attribute on `p`.
pub fn message_from_attribute(
    parser: &dyn InterpolationSplitter,
    p: &html::Element,
    attr: &html::Attribute,
) -> Result<Message, I18nError> {
    let expected_name = attr
        .name
        .strip_prefix(I18N_ATTR_PREFIX)
        .unwrap_or(&attr.name);

    match p.attr(expected_name) {
        Some(matching) => {
            let value = remove_interpolation(&matching.value, &matching.source_span, parser);
            Ok(Message::new(
                value,
                meaning(&attr.value).map(str::to_string),
                description(&attr.value).map(str::to_string),
            ))
        }
        None => Err(I18nError::new(
            p.source_span.clone(),
            format!("Missing attribute '{}'.", expected_name),
        )),
    }
}

/// Replaces every interpolated expression in `value` with `<ph name="N"/>`.
/// Values without interpolation, or that fail to split, are returned as is.
pub fn remove_interpolation(
    value: &str,
    source: &ParseSourceSpan,
    parser: &dyn InterpolationSplitter,
) -> String {
    match parser.split_interpolation(value, &source.to_string()) {
        Ok(Some(parsed)) => {
            let last = parsed.strings.len().saturating_sub(1);
            let mut res = String::new();
            for (i, s) in parsed.strings.iter().enumerate() {
                res.push_str(s);
                if i != last {
                    res.push_str(&format!("<ph name=\"{}\"/>", i));
                }
            }
            res
        }
        Ok(None) => value.to_string(),
        Err(err) => {
            tracing::debug!(error = %err, "keeping uninterpolated value");
            value.to_string()
        }
    }
}

/// Flattens `nodes` into placeholder markup. Placeholder indices come from a
/// single depth-first counter over the whole call.
pub fn stringify_nodes(nodes: &[Node], parser: &dyn InterpolationSplitter) -> String {
    let mut visitor = StringifyVisitor::new(parser);
    visit_all(&mut visitor, nodes).join("")
}

struct StringifyVisitor<'p> {
    parser: &'p dyn InterpolationSplitter,
    index: usize,
}

impl<'p> StringifyVisitor<'p> {
    fn new(parser: &'p dyn InterpolationSplitter) -> Self {
        StringifyVisitor { parser, index: 0 }
    }

    fn next_index(&mut self) -> usize {
        let index = self.index;
        self.index += 1;
        index
    }
}

impl Visitor for StringifyVisitor<'_> {
    type Output = String;

    fn visit_element(&mut self, element: &html::Element) -> String {
        let name = self.next_index();
        let children: String = visit_all(self, &element.children)
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        format!("<ph name=\"e{}\">{}</ph>", name, children)
    }

    fn visit_attribute(&mut self, _attribute: &html::Attribute) -> String {
        String::new()
    }

    fn visit_text(&mut self, text: &html::Text) -> String {
        let index = self.next_index();
        let no_interpolation = remove_interpolation(&text.value, &text.source_span, self.parser);
        if no_interpolation != text.value {
            format!("<ph name=\"t{}\">{}</ph>", index, no_interpolation)
        } else {
            text.value.clone()
        }
    }

    fn visit_comment(&mut self, _comment: &html::Comment) -> String {
        String::new()
    }
}
