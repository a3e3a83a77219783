#![deny(clippy::all)]

//! Translation message extraction over markup trees.
//!
//! Marked regions of a template (an `i18n` attribute on an element, or a run
//! of siblings between `<!--i18n: ...-->` and `<!--/i18n-->` comments) are
//! flattened into placeholder-annotated [`i18n::Message`]s.

pub mod expression_parser;
pub mod i18n;
pub mod ml_parser;
pub mod parse_util;

pub use i18n::{
    description, meaning, partition, remove_duplicates, serialize_xmb, stringify_nodes,
    ExtractionResult, I18nError, Message, MessageExtractor, Part, I18N_ATTR, I18N_ATTR_PREFIX,
};
