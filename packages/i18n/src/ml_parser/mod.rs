//! ML (Markup Language) Module
//!
//! The markup tree consumed by the i18n pass. Producing it from text is the
//! job of an HTML parser upstream of this crate.

pub mod ast;

pub use ast::*;
