use std::fmt;

use crate::error::Result;
use crate::url_parser::{Params, Url};

/// What a path matcher consumed from a URL.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedUrl {
    pub url_path: String,
    pub url_params: Vec<String>,
    pub all_params: Params,
    pub auxiliary: Vec<Url>,
    pub rest: Option<Url>,
}

/// A URL fragment produced from params.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedUrl {
    pub url_path: String,
    pub url_params: Params,
}

impl GeneratedUrl {
    pub fn new(url_path: impl Into<String>, url_params: Params) -> Self {
        GeneratedUrl {
            url_path: url_path.into(),
            url_params,
        }
    }
}

/// Matches URLs against a route pattern and generates URLs back from params.
///
/// `Display` renders the pattern as configured.
pub trait RoutePath: fmt::Debug + fmt::Display + Send + Sync {
    /// Sort key: higher means a more specific pattern.
    fn specificity(&self) -> &str;

    /// False when the pattern leaves the rest of the URL to child routes.
    fn terminal(&self) -> bool;

    /// Fingerprint of the pattern shape; equal hashes match the same URLs.
    fn hash(&self) -> &str;

    fn match_url(&self, url: &Url) -> Option<MatchedUrl>;

    fn generate_url(&self, params: &Params) -> Result<GeneratedUrl>;
}
