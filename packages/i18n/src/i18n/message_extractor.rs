//! Message Extractor
//!
//! Walks a markup tree and collects every translatable message: marked parts
//! and `i18n-<attr>` attribute markers, anywhere in the tree.

use indexmap::IndexMap;
use serde::Serialize;

use crate::expression_parser::{InterpolationSplitter, Parser};
use crate::i18n::message::Message;
use crate::i18n::shared::{message_from_attribute, partition, Part, I18N_ATTR_PREFIX};
use crate::ml_parser::ast::{Element, Node};
use crate::parse_util::ParseError;

/// Messages and recoverable errors from one extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractionResult {
    pub messages: Vec<Message>,
    pub errors: Vec<ParseError>,
}

impl ExtractionResult {
    pub fn new(messages: Vec<Message>, errors: Vec<ParseError>) -> Self {
        ExtractionResult { messages, errors }
    }

    /// Compact JSON summary: messages with ids, errors with locations.
    pub fn to_json(&self) -> serde_json::Value {
        let messages: Vec<serde_json::Value> = self
            .messages
            .iter()
            .map(|m| {
                serde_json::json!({
                    "id": m.id(),
                    "content": m.content,
                    "meaning": m.meaning,
                    "description": m.description,
                })
            })
            .collect();
        let errors: Vec<serde_json::Value> = self
            .errors
            .iter()
            .map(|e| {
                serde_json::json!({
                    "message": e.msg,
                    "location": e.span.start.to_string(),
                })
            })
            .collect();
        serde_json::json!({ "messages": messages, "errors": errors })
    }
}

/// Extracts messages from markup trees.
pub struct MessageExtractor<P: InterpolationSplitter = Parser> {
    parser: P,
    messages: Vec<Message>,
    errors: Vec<ParseError>,
}

impl MessageExtractor<Parser> {
    pub fn new() -> Self {
        Self::with_parser(Parser::new())
    }
}

impl Default for MessageExtractor<Parser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: InterpolationSplitter> MessageExtractor<P> {
    pub fn with_parser(parser: P) -> Self {
        MessageExtractor {
            parser,
            messages: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn extract(&mut self, root_nodes: &[Node]) -> ExtractionResult {
        self.messages.clear();
        self.errors.clear();

        self.recurse(root_nodes);

        tracing::debug!(
            messages = self.messages.len(),
            errors = self.errors.len(),
            "extracted i18n messages"
        );
        ExtractionResult::new(
            std::mem::take(&mut self.messages),
            std::mem::take(&mut self.errors),
        )
    }

    fn extract_messages_from_part(&mut self, p: &Part<'_>) {
        if p.has_i18n {
            self.messages.push(p.create_message(&self.parser));
            self.recurse_to_extract_messages_from_attributes(p.children);
        } else {
            self.recurse(p.children);
        }

        if let Some(el) = p.root_element {
            self.extract_messages_from_attributes(el);
        }
    }

    fn recurse(&mut self, nodes: &[Node]) {
        let parts = partition(nodes, &mut self.errors);
        for part in &parts {
            self.extract_messages_from_part(part);
        }
    }

    fn recurse_to_extract_messages_from_attributes(&mut self, nodes: &[Node]) {
        for n in nodes {
            if let Node::Element(el) = n {
                self.extract_messages_from_attributes(el);
                self.recurse_to_extract_messages_from_attributes(&el.children);
            }
        }
    }

    fn extract_messages_from_attributes(&mut self, p: &Element) {
        for attr in p.attrs.iter().filter(|a| a.name.starts_with(I18N_ATTR_PREFIX)) {
            match message_from_attribute(&self.parser, p, attr) {
                Ok(message) => self.messages.push(message),
                Err(err) => {
                    tracing::warn!(location = %err.span.start, "{}", err);
                    self.errors.push(err.into());
                }
            }
        }
    }
}

/// Keeps the first message for each id, in first-seen order.
pub fn remove_duplicates(messages: Vec<Message>) -> Vec<Message> {
    let mut uniq: IndexMap<String, Message> = IndexMap::new();
    for m in messages {
        uniq.entry(m.id()).or_insert(m);
    }
    uniq.into_values().collect()
}
