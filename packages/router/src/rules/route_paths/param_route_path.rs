//! Segment pattern matcher
//!
//! Patterns are `/`-separated segments:
//! - `users` matches the literal segment
//! - `:id` captures one segment
//! - `*rest` captures the remainder of the URL, params included
//! - `...` (last segment only) leaves the remainder to child routes

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use super::route_path::{GeneratedUrl, MatchedUrl, RoutePath};
use crate::error::{Result, RouterError};
use crate::url_parser::{serialize_params, ParamValue, Params, Url};

static PARAM_MATCHER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:([^/]+)$").expect("valid param matcher"));
static WILDCARD_MATCHER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*([^/]+)$").expect("valid wildcard matcher"));
static RESERVED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"//|\(|\)|;|\?|=").expect("valid reserved chars"));

/// Params being consumed by generation; whatever is left over becomes URL
/// params.
struct TouchMap<'a> {
    map: &'a Params,
    unused: Params,
}

impl<'a> TouchMap<'a> {
    fn new(map: &'a Params) -> Self {
        TouchMap {
            map,
            unused: map.clone(),
        }
    }

    fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    fn get(&mut self, key: &str) -> Option<&'a ParamValue> {
        self.unused.shift_remove(key);
        self.map.get(key)
    }

    fn into_unused(self) -> Params {
        self.unused
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PathSegment {
    Continuation,
    Static(String),
    Dynamic(String),
    Star(String),
}

impl PathSegment {
    fn specificity(&self) -> &'static str {
        match self {
            PathSegment::Continuation => "",
            PathSegment::Static(_) => "2",
            PathSegment::Dynamic(_) => "1",
            PathSegment::Star(_) => "0",
        }
    }

    fn hash(&self) -> &str {
        match self {
            PathSegment::Continuation => "...",
            PathSegment::Static(path) => path,
            PathSegment::Dynamic(_) => ":",
            PathSegment::Star(_) => "*",
        }
    }

    fn match_path(&self, path: &str) -> bool {
        match self {
            PathSegment::Continuation | PathSegment::Star(_) => true,
            PathSegment::Static(p) => p == path,
            PathSegment::Dynamic(_) => !path.is_empty(),
        }
    }

    fn generate(&self, params: &mut TouchMap<'_>) -> Result<String> {
        match self {
            PathSegment::Continuation => Ok(String::new()),
            PathSegment::Static(path) => Ok(path.clone()),
            PathSegment::Dynamic(name) => {
                if !params.contains(name) {
                    return Err(RouterError::MissingParameter(name.clone()));
                }
                Ok(params
                    .get(name)
                    .map(|v| encode_dynamic_segment(&v.to_string()))
                    .unwrap_or_default())
            }
            PathSegment::Star(name) => Ok(params.get(name).map(ToString::to_string).unwrap_or_default()),
        }
    }
}

/// Matcher for literal / `:param` / `*star` / `...` patterns.
#[derive(Debug, Clone)]
pub struct ParamRoutePath {
    route_path: String,
    segments: SmallVec<[PathSegment; 4]>,
    specificity: String,
    terminal: bool,
    hash: String,
}

impl ParamRoutePath {
    pub fn new(route_path: &str) -> Result<Self> {
        assert_valid_path(route_path)?;
        let segments = parse_path_string(route_path)?;

        let specificity: String = segments.iter().map(PathSegment::specificity).collect();
        let hash = segments.iter().map(PathSegment::hash).collect::<Vec<_>>().join("/");
        let terminal = !matches!(segments.last(), Some(PathSegment::Continuation));

        Ok(ParamRoutePath {
            route_path: route_path.to_string(),
            segments,
            specificity,
            terminal,
            hash,
        })
    }
}

impl fmt::Display for ParamRoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route_path)
    }
}

impl RoutePath for ParamRoutePath {
    fn specificity(&self) -> &str {
        &self.specificity
    }

    fn terminal(&self) -> bool {
        self.terminal
    }

    fn hash(&self) -> &str {
        &self.hash
    }

    fn match_url(&self, url: &Url) -> Option<MatchedUrl> {
        let mut next_url_segment = Some(url);
        let mut current_url_segment = None;
        let mut positional_params = Params::new();
        let mut captured: Vec<String> = Vec::new();

        for path_segment in &self.segments {
            current_url_segment = next_url_segment;
            if *path_segment == PathSegment::Continuation {
                break;
            }

            match current_url_segment {
                Some(current) => {
                    // the star segment consumes all of the remaining URL, including matrix params
                    if let PathSegment::Star(name) = path_segment {
                        let rest = current.to_string();
                        positional_params.insert(name.clone(), ParamValue::Text(rest.clone()));
                        captured.push(rest);
                        next_url_segment = None;
                        break;
                    }

                    captured.push(current.path.clone());
                    if let PathSegment::Dynamic(name) = path_segment {
                        positional_params.insert(
                            name.clone(),
                            ParamValue::Text(decode_dynamic_segment(&current.path)),
                        );
                    } else if !path_segment.match_path(&current.path) {
                        return None;
                    }
                    next_url_segment = current.child();
                }
                None => {
                    if !path_segment.match_path("") {
                        return None;
                    }
                }
            }
        }

        if self.terminal && next_url_segment.is_some() {
            return None;
        }

        let url_path = captured.join("/");
        let mut auxiliary = Vec::new();
        let mut url_params = Vec::new();
        let mut all_params = positional_params;
        if let Some(current) = current_url_segment {
            // The root carries query params, inner segments matrix params.
            let params_segment = if url.is_root() { url } else { current };
            if !params_segment.params.is_empty() {
                let mut merged = params_segment.params.clone();
                merged.extend(all_params);
                all_params = merged;
                url_params = serialize_params(&params_segment.params);
            }
            auxiliary = current.auxiliary.clone();
        }

        Some(MatchedUrl {
            url_path,
            url_params,
            all_params,
            auxiliary,
            rest: next_url_segment.cloned(),
        })
    }

    fn generate_url(&self, params: &Params) -> Result<GeneratedUrl> {
        let mut param_tokens = TouchMap::new(params);
        let mut path = Vec::with_capacity(self.segments.len());

        for segment in &self.segments {
            if *segment != PathSegment::Continuation {
                path.push(segment.generate(&mut param_tokens)?);
            }
        }

        Ok(GeneratedUrl::new(path.join("/"), param_tokens.into_unused()))
    }
}

fn parse_path_string(route_path: &str) -> Result<SmallVec<[PathSegment; 4]>> {
    let path = route_path.strip_prefix('/').unwrap_or(route_path);
    let segment_strings: Vec<&str> = path.split('/').collect();
    let limit = segment_strings.len() - 1;

    let mut segments = SmallVec::new();
    for (i, segment) in segment_strings.iter().enumerate() {
        if let Some(caps) = PARAM_MATCHER.captures(segment) {
            segments.push(PathSegment::Dynamic(caps[1].to_string()));
        } else if let Some(caps) = WILDCARD_MATCHER.captures(segment) {
            segments.push(PathSegment::Star(caps[1].to_string()));
        } else if *segment == "..." {
            if i < limit {
                return Err(RouterError::InvalidPath(format!(
                    "Unexpected \"...\" before the end of the path for \"{}\".",
                    path
                )));
            }
            segments.push(PathSegment::Continuation);
        } else {
            segments.push(PathSegment::Static(segment.to_string()));
        }
    }
    Ok(segments)
}

fn assert_valid_path(path: &str) -> Result<()> {
    if path.contains('#') {
        return Err(RouterError::InvalidPath(format!(
            "Path \"{}\" should not include \"#\". Use \"HashLocationStrategy\" instead.",
            path
        )));
    }
    if let Some(illegal) = RESERVED_CHARS.find(path) {
        return Err(RouterError::InvalidPath(format!(
            "Path \"{}\" contains \"{}\" which is not allowed in a route config.",
            path,
            illegal.as_str()
        )));
    }
    Ok(())
}

fn encode_dynamic_segment(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('/', "%2F")
        .replace('(', "%28")
        .replace(')', "%29")
        .replace(';', "%3B")
}

fn decode_dynamic_segment(value: &str) -> String {
    value
        .replace("%3B", ";")
        .replace("%29", ")")
        .replace("%28", "(")
        .replace("%2F", "/")
        .replace("%25", "%")
}
