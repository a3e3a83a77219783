//! Translatable message

use serde::{Deserialize, Serialize};

/// A message extracted from a template: placeholder-annotated content plus
/// the optional meaning and description from its marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    pub content: String,
    pub meaning: Option<String>,
    pub description: Option<String>,
}

impl Message {
    pub fn new(content: String, meaning: Option<String>, description: Option<String>) -> Self {
        Message {
            content,
            meaning,
            description,
        }
    }

    /// Stable id derived from meaning and content. The description does not
    /// take part, so the same text with different descriptions shares an id.
    pub fn id(&self) -> String {
        let meaning = self.meaning.as_deref().unwrap_or("");
        escape(&format!("$ng|{}|{}", meaning, self.content))
    }
}

/// Percent-escapes everything outside `A-Za-z0-9@*_+-./`, using `%XX` for
/// code units below 256 and `%uXXXX` for the rest.
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for unit in input.encode_utf16() {
        match char::from_u32(unit as u32) {
            Some(c) if c.is_ascii_alphanumeric() || "@*_+-./".contains(c) => out.push(c),
            _ if unit < 0x100 => out.push_str(&format!("%{:02X}", unit)),
            _ => out.push_str(&format!("%u{:04X}", unit)),
        }
    }
    out
}
