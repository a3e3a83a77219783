//! Regex matcher with a user-supplied serializer for generation.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use super::route_path::{GeneratedUrl, MatchedUrl, RoutePath};
use crate::error::{Result, RouterError};
use crate::url_parser::{ParamValue, Params, Url};

/// Builds a URL back from the params of a regex route.
pub type RegexSerializer = Arc<dyn Fn(&Params) -> GeneratedUrl + Send + Sync>;

/// Matches the whole serialized URL against a regex. Capture groups become
/// params named `"0"`, `"1"`, ... (`"0"` is the full match).
#[derive(Clone)]
pub struct RegexRoutePath {
    re_string: String,
    regex: Regex,
    serializer: RegexSerializer,
}

impl RegexRoutePath {
    pub fn new(re_string: &str, serializer: RegexSerializer) -> Result<Self> {
        let regex = Regex::new(re_string).map_err(|e| RouterError::InvalidRegex {
            regex: re_string.to_string(),
            reason: e.to_string(),
        })?;
        Ok(RegexRoutePath {
            re_string: re_string.to_string(),
            regex,
            serializer,
        })
    }
}

impl fmt::Debug for RegexRoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegexRoutePath")
            .field("regex", &self.re_string)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for RegexRoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.re_string)
    }
}

impl RoutePath for RegexRoutePath {
    fn specificity(&self) -> &str {
        "2"
    }

    fn terminal(&self) -> bool {
        true
    }

    fn hash(&self) -> &str {
        &self.re_string
    }

    fn match_url(&self, url: &Url) -> Option<MatchedUrl> {
        let url_path = url.to_string();
        let captures = self.regex.captures(&url_path)?;

        let mut params = Params::new();
        for (i, group) in captures.iter().enumerate() {
            if let Some(m) = group {
                params.insert(i.to_string(), ParamValue::Text(m.as_str().to_string()));
            }
        }

        Some(MatchedUrl {
            url_path,
            url_params: Vec::new(),
            all_params: params,
            auxiliary: Vec::new(),
            rest: None,
        })
    }

    fn generate_url(&self, params: &Params) -> Result<GeneratedUrl> {
        Ok((self.serializer)(params))
    }
}
