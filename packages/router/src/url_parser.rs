//! URL model and parser
//!
//! A URL is a chain of segments. Each segment has a path, optional params
//! and auxiliary sibling URLs written in parentheses:
//!
//! ```text
//! /inbox;sort=date(chat//help)/33?debug
//! ```
//!
//! The root segment carries query params (`?a=b&c`); inner segments carry
//! matrix params (`;a=b;c`).

use std::fmt;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, RouterError};

static SEGMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^/()?;=&#]+").expect("valid segment regex"));
static QUERY_PARAM_VALUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^()?;&#]+").expect("valid query param regex"));

/// Value of a URL param. A key with no `=value` is a flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamValue {
    Flag,
    Text(String),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Flag => None,
            ParamValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Flag => f.write_str("true"),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

/// Ordered param map; serialization follows insertion order.
pub type Params = IndexMap<String, ParamValue>;

/// `key=value` for text params, bare `key` for flags.
pub fn serialize_params(params: &Params) -> Vec<String> {
    params
        .iter()
        .map(|(key, value)| match value {
            ParamValue::Flag => key.clone(),
            ParamValue::Text(v) => format!("{}={}", key, v),
        })
        .collect()
}

/// One URL segment with its child chain and auxiliary siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    pub path: String,
    pub child: Option<Box<Url>>,
    pub auxiliary: Vec<Url>,
    pub params: Params,
    root: bool,
}

impl Url {
    pub fn new(path: impl Into<String>) -> Self {
        Url::segment(path, None, Vec::new(), Params::new())
    }

    /// Inner segment; `params` are matrix params.
    pub fn segment(
        path: impl Into<String>,
        child: Option<Url>,
        auxiliary: Vec<Url>,
        params: Params,
    ) -> Self {
        Url {
            path: path.into(),
            child: child.map(Box::new),
            auxiliary,
            params,
            root: false,
        }
    }

    /// Root segment; `params` are query params.
    pub fn root(
        path: impl Into<String>,
        child: Option<Url>,
        auxiliary: Vec<Url>,
        params: Params,
    ) -> Self {
        Url {
            root: true,
            ..Url::segment(path, child, auxiliary, params)
        }
    }

    pub fn is_root(&self) -> bool {
        self.root
    }

    pub fn child(&self) -> Option<&Url> {
        self.child.as_deref()
    }

    /// This segment alone, without child or auxiliary URLs.
    pub fn segment_to_string(&self) -> String {
        if self.root {
            format!("{}{}", self.path, self.query_params_to_string())
        } else {
            format!("{}{}", self.path, self.matrix_params_to_string())
        }
    }

    fn aux_to_string(&self) -> String {
        if self.auxiliary.is_empty() {
            return String::new();
        }
        let siblings: Vec<String> = self.auxiliary.iter().map(Url::to_string).collect();
        format!("({})", siblings.join("//"))
    }

    fn matrix_params_to_string(&self) -> String {
        let params = serialize_params(&self.params);
        if params.is_empty() {
            String::new()
        } else {
            format!(";{}", params.join(";"))
        }
    }

    fn query_params_to_string(&self) -> String {
        let params = serialize_params(&self.params);
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }

    fn child_to_string(&self) -> String {
        match &self.child {
            Some(child) => format!("/{}", child),
            None => String::new(),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.root {
            write!(
                f,
                "{}{}{}{}",
                self.path,
                self.aux_to_string(),
                self.child_to_string(),
                self.query_params_to_string()
            )
        } else {
            write!(
                f,
                "{}{}{}{}",
                self.path,
                self.matrix_params_to_string(),
                self.aux_to_string(),
                self.child_to_string()
            )
        }
    }
}

/// Chains path segments into a URL, first segment outermost.
pub fn path_segments_to_url(path_segments: &[&str]) -> Url {
    let mut segments = path_segments.iter().rev();
    let last = segments.next().copied().unwrap_or("");
    segments.fold(Url::new(last), |url, segment| {
        Url::segment(*segment, Some(url), Vec::new(), Params::new())
    })
}

fn match_url_segment(s: &str) -> &str {
    SEGMENT_RE.find(s).map(|m| m.as_str()).unwrap_or("")
}

fn match_url_query_param_value(s: &str) -> &str {
    QUERY_PARAM_VALUE_RE.find(s).map(|m| m.as_str()).unwrap_or("")
}

/// Parses URL text into a [`Url`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlParser;

impl UrlParser {
    pub fn new() -> Self {
        UrlParser
    }

    pub fn parse(&self, url: &str) -> Result<Url> {
        if url.is_empty() || url == "/" {
            return Ok(Url::new(""));
        }
        Cursor { remaining: url, depth: 0 }.parse_root()
    }
}

/// Parses `url` with the default parser.
pub fn parse_url(url: &str) -> Result<Url> {
    UrlParser::new().parse(url)
}

/// Deepest segment chain (children and nested auxiliary routes) a parsed
/// URL may have. `Url` is a linked chain, so parsing, printing and dropping
/// it all recurse once per segment.
pub const MAX_SEGMENT_DEPTH: usize = 256;

struct Cursor<'a> {
    remaining: &'a str,
    depth: usize,
}

impl<'a> Cursor<'a> {
    fn peek_starts_with(&self, s: &str) -> bool {
        self.remaining.starts_with(s)
    }

    fn capture(&mut self, s: &str) -> Result<()> {
        match self.remaining.strip_prefix(s) {
            Some(rest) => {
                self.remaining = rest;
                Ok(())
            }
            None => Err(RouterError::UrlParse(format!("Expected \"{}\".", s))),
        }
    }

    fn take_segment(&mut self) -> &'a str {
        let path = match_url_segment(self.remaining);
        self.remaining = &self.remaining[path.len()..];
        path
    }

    // segment + (aux segments) + (query params)
    fn parse_root(&mut self) -> Result<Url> {
        if self.peek_starts_with("/") {
            self.capture("/")?;
        }
        let path = self.take_segment();

        let mut aux = Vec::new();
        if self.peek_starts_with("(") {
            aux = self.parse_auxiliary_routes()?;
        }
        if self.peek_starts_with(";") {
            // Matrix params on the root segment have nowhere to go.
            self.parse_matrix_params();
        }

        let mut child = None;
        if self.peek_starts_with("/") && !self.peek_starts_with("//") {
            self.capture("/")?;
            child = self.parse_segment()?;
        }

        let mut query_params = Params::new();
        if self.peek_starts_with("?") {
            query_params = self.parse_query_params()?;
        }

        Ok(Url::root(path, child, aux, query_params))
    }

    // segment + (matrix params) + (aux segments)
    fn parse_segment(&mut self) -> Result<Option<Url>> {
        if self.remaining.is_empty() {
            return Ok(None);
        }
        if self.depth >= MAX_SEGMENT_DEPTH {
            return Err(RouterError::UrlParse(format!(
                "URL nests more than {} segments.",
                MAX_SEGMENT_DEPTH
            )));
        }
        self.depth += 1;
        let segment = self.parse_segment_body();
        self.depth -= 1;
        segment
    }

    fn parse_segment_body(&mut self) -> Result<Option<Url>> {
        if self.peek_starts_with("/") {
            self.capture("/")?;
        }
        let path = self.take_segment();

        let mut matrix_params = Params::new();
        if self.peek_starts_with(";") {
            matrix_params = self.parse_matrix_params();
        }

        let mut aux = Vec::new();
        if self.peek_starts_with("(") {
            aux = self.parse_auxiliary_routes()?;
        }

        let mut child = None;
        if self.peek_starts_with("/") && !self.peek_starts_with("//") {
            self.capture("/")?;
            child = self.parse_segment()?;
        }

        Ok(Some(Url::segment(path, child, aux, matrix_params)))
    }

    fn parse_query_params(&mut self) -> Result<Params> {
        let mut params = Params::new();
        self.capture("?")?;
        self.parse_query_param(&mut params);
        while !self.remaining.is_empty() && self.peek_starts_with("&") {
            self.capture("&")?;
            self.parse_query_param(&mut params);
        }
        Ok(params)
    }

    fn parse_matrix_params(&mut self) -> Params {
        let mut params = Params::new();
        while let Some(rest) = self.remaining.strip_prefix(';') {
            self.remaining = rest;
            self.parse_param(&mut params);
        }
        params
    }

    fn parse_param(&mut self, params: &mut Params) {
        let key = self.take_segment();
        if key.is_empty() {
            return;
        }
        let mut value = ParamValue::Flag;
        if let Some(rest) = self.remaining.strip_prefix('=') {
            self.remaining = rest;
            let value_match = self.take_segment();
            if !value_match.is_empty() {
                value = ParamValue::Text(value_match.to_string());
            }
        }
        params.insert(key.to_string(), value);
    }

    fn parse_query_param(&mut self, params: &mut Params) {
        let key = self.take_segment();
        if key.is_empty() {
            return;
        }
        let mut value = ParamValue::Flag;
        if let Some(rest) = self.remaining.strip_prefix('=') {
            self.remaining = rest;
            let value_match = match_url_query_param_value(self.remaining);
            if !value_match.is_empty() {
                self.remaining = &self.remaining[value_match.len()..];
                value = ParamValue::Text(value_match.to_string());
            }
        }
        params.insert(key.to_string(), value);
    }

    fn parse_auxiliary_routes(&mut self) -> Result<Vec<Url>> {
        let mut routes = Vec::new();
        self.capture("(")?;

        while !self.peek_starts_with(")") && !self.remaining.is_empty() {
            let before = self.remaining.len();
            routes.extend(self.parse_segment()?);
            if self.remaining.len() == before {
                return Err(RouterError::UrlParse(format!(
                    "Unexpected \"{}\" in auxiliary route.",
                    self.remaining
                )));
            }
            if self.peek_starts_with("//") {
                self.capture("//")?;
            }
        }
        self.capture(")")?;

        Ok(routes)
    }
}
