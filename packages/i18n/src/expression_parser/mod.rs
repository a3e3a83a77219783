//! Expression Parser Module
//!
//! Only the interpolation splitter lives here; full binding expressions are
//! parsed elsewhere.

pub mod parser;

pub use parser::{ExpressionError, InterpolationSplitter, Parser, SplitInterpolation};
