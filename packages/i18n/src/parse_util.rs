//! Parse Utilities
//!
//! Source locations and spans attached to markup nodes, and the recoverable
//! error type collected while walking them.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseSourceFile {
    pub content: String,
    pub url: String,
}

impl ParseSourceFile {
    pub fn new(content: impl Into<String>, url: impl Into<String>) -> Self {
        ParseSourceFile {
            content: content.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseLocation {
    pub file: ParseSourceFile,
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl ParseLocation {
    pub fn new(file: ParseSourceFile, offset: usize, line: usize, col: usize) -> Self {
        ParseLocation { file, offset, line, col }
    }

    /// Location of `offset` in `file`, with line and column computed from
    /// the file content.
    pub fn at_offset(file: ParseSourceFile, offset: usize) -> Self {
        let mut offset = offset.min(file.content.len());
        while !file.content.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &file.content[..offset];
        let line = before.matches('\n').count();
        let col = match before.rfind('\n') {
            Some(nl) => offset - nl - 1,
            None => offset,
        };
        ParseLocation::new(file, offset, line, col)
    }
}

impl fmt::Display for ParseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.file.url, self.line, self.col)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseSourceSpan {
    pub start: ParseLocation,
    pub end: ParseLocation,
}

impl ParseSourceSpan {
    pub fn new(start: ParseLocation, end: ParseLocation) -> Self {
        ParseSourceSpan { start, end }
    }

    /// Span covering `start..end` of `file`.
    pub fn from_offsets(file: &ParseSourceFile, start: usize, end: usize) -> Self {
        ParseSourceSpan::new(
            ParseLocation::at_offset(file.clone(), start),
            ParseLocation::at_offset(file.clone(), end),
        )
    }

    /// The source text covered by this span.
    pub fn text(&self) -> &str {
        self.start
            .file
            .content
            .get(self.start.offset..self.end.offset)
            .unwrap_or("")
    }
}

impl fmt::Display for ParseSourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseError {
    pub span: ParseSourceSpan,
    pub msg: String,
}

impl ParseError {
    pub fn new(span: ParseSourceSpan, msg: impl Into<String>) -> Self {
        ParseError {
            span,
            msg: msg.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.msg, self.span.start)
    }
}

impl std::error::Error for ParseError {}
