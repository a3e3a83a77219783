//! XMB Serializer Module
//!
//! Writes messages as an XML message bundle.

use indexmap::IndexMap;

use crate::i18n::message::Message;
use crate::i18n::serializers::xml_helper as xml;

const MESSAGES_TAG: &str = "message-bundle";
const MESSAGE_TAG: &str = "msg";

/// `<message-bundle><msg id=".." desc=".." meaning="..">content</msg>...</message-bundle>`
pub fn serialize_xmb(messages: &[Message]) -> String {
    let msgs: Vec<xml::Node> = messages.iter().map(serialize_message).collect();
    let root = xml::Tag::new(MESSAGES_TAG, IndexMap::new(), msgs);
    // An empty bundle still gets an explicit closing tag.
    if root.children.is_empty() {
        return format!("<{0}></{0}>", MESSAGES_TAG);
    }
    xml::serialize(&[xml::Node::Tag(root)])
}

fn serialize_message(m: &Message) -> xml::Node {
    let mut attrs = IndexMap::new();
    attrs.insert("id".to_string(), m.id());
    if let Some(desc) = &m.description {
        attrs.insert("desc".to_string(), desc.clone());
    }
    if let Some(meaning) = &m.meaning {
        attrs.insert("meaning".to_string(), meaning.clone());
    }
    let children = if m.content.is_empty() {
        vec![]
    } else {
        vec![xml::Node::Raw(xml::Raw::new(&m.content))]
    };
    xml::Node::Tag(xml::Tag::new(MESSAGE_TAG, attrs, children))
}
