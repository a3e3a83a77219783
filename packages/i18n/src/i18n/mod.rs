//! I18n Module
//!
//! Partitions markup into translatable parts and turns them into messages.

pub mod message;
pub mod message_extractor;
pub mod serializers;
pub mod shared;

pub use message::Message;
pub use message_extractor::{remove_duplicates, ExtractionResult, MessageExtractor};
pub use serializers::xmb::serialize_xmb;
pub use shared::{
    description, meaning, message_from_attribute, partition, remove_interpolation,
    stringify_nodes, I18nError, Part, I18N_ATTR, I18N_ATTR_PREFIX,
};
