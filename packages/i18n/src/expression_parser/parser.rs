//! Interpolation splitting
//!
//! Splits text such as `Hello {{ name }}!` into its literal strings and the
//! expressions between `{{` and `}}`.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static INTERPOLATION_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([\s\S]*?)\}\}").expect("valid interpolation regex"));

/// Error raised while splitting an interpolated string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parser Error: {message} {error_location} [{input}] in {ctx_location}")]
pub struct ExpressionError {
    pub message: String,
    pub input: String,
    pub error_location: String,
    pub ctx_location: String,
}

/// Split interpolation result
///
/// `strings` always has exactly one more entry than `expressions`: the
/// literal text before, between and after each expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitInterpolation {
    pub strings: Vec<String>,
    pub expressions: Vec<String>,
}

/// Splits interpolated text into literal and expression parts.
pub trait InterpolationSplitter {
    /// Returns `Ok(None)` when `input` contains no interpolation.
    fn split_interpolation(
        &self,
        input: &str,
        location: &str,
    ) -> Result<Option<SplitInterpolation>, ExpressionError>;
}

/// Default `{{ }}` splitter.
#[derive(Debug, Clone, Default)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Parser
    }

    fn find_interpolation_error_column(parts: &[&str], part_in_err_idx: usize) -> usize {
        parts[..part_in_err_idx]
            .iter()
            .enumerate()
            .map(|(j, part)| if j % 2 == 0 { part.len() } else { part.len() + 4 })
            .sum()
    }
}

impl InterpolationSplitter for Parser {
    fn split_interpolation(
        &self,
        input: &str,
        location: &str,
    ) -> Result<Option<SplitInterpolation>, ExpressionError> {
        // Alternating literal / expression pieces, literal first and last.
        let mut parts: Vec<&str> = Vec::new();
        let mut last = 0;
        for caps in INTERPOLATION_REGEXP.captures_iter(input) {
            let (Some(whole), Some(expr)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            parts.push(&input[last..whole.start()]);
            parts.push(expr.as_str());
            last = whole.end();
        }
        parts.push(&input[last..]);

        if parts.len() <= 1 {
            return Ok(None);
        }

        let mut strings = Vec::new();
        let mut expressions = Vec::new();
        for (i, part) in parts.iter().enumerate() {
            if i % 2 == 0 {
                strings.push(part.to_string());
            } else if !part.trim().is_empty() {
                expressions.push(part.to_string());
            } else {
                return Err(ExpressionError {
                    message: "Blank expressions are not allowed in interpolated strings".to_string(),
                    input: input.to_string(),
                    error_location: format!(
                        "at column {} in",
                        Self::find_interpolation_error_column(&parts, i)
                    ),
                    ctx_location: location.to_string(),
                });
            }
        }

        Ok(Some(SplitInterpolation { strings, expressions }))
    }
}
