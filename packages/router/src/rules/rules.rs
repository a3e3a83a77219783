//! Rules pair a path matcher with what to do on a match.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::{self, BoxFuture, FutureExt};
use parking_lot::Mutex;

use super::route_handlers::{ComponentFuture, RouteHandler};
use super::route_paths::{MatchedUrl, RoutePath};
use crate::error::{Result, RouterError};
use crate::instruction::ComponentInstruction;
use crate::url_parser::{serialize_params, Params, Url};

/// Instructions a rule keeps before its cache is dropped and refilled.
pub const MAX_CACHED_INSTRUCTIONS: usize = 1024;

/// Eventually-resolved recognition result of one rule.
pub type PendingMatch = BoxFuture<'static, Result<Option<RouteMatch>>>;

/// A partial recognition of a URL by one rule.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteMatch {
    Path(PathMatch),
    Redirect(RedirectMatch),
}

/// A route rule consumed part of the URL.
///
/// `instruction` is `None` only for the placeholder match produced when a
/// URL carries nothing but auxiliary segments.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMatch {
    pub instruction: Option<Arc<ComponentInstruction>>,
    pub remaining: Option<Url>,
    pub remaining_aux: Vec<Url>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectMatch {
    pub redirect_to: Vec<String>,
    pub specificity: String,
}

pub(crate) fn resolved(route_match: Option<RouteMatch>) -> PendingMatch {
    future::ready(Ok(route_match)).boxed()
}

/// Redirects matching URLs to a link.
#[derive(Debug)]
pub struct RedirectRule {
    path_recognizer: Box<dyn RoutePath>,
    pub redirect_to: Vec<String>,
}

impl RedirectRule {
    pub fn new(path_recognizer: Box<dyn RoutePath>, redirect_to: Vec<String>) -> Self {
        RedirectRule {
            path_recognizer,
            redirect_to,
        }
    }

    pub fn hash(&self) -> &str {
        self.path_recognizer.hash()
    }

    pub fn path(&self) -> String {
        self.path_recognizer.to_string()
    }

    pub fn recognize(&self, beginning_segment: &Url) -> Option<PendingMatch> {
        self.path_recognizer.match_url(beginning_segment)?;
        Some(resolved(Some(RouteMatch::Redirect(RedirectMatch {
            redirect_to: self.redirect_to.clone(),
            specificity: self.path_recognizer.specificity().to_string(),
        }))))
    }

    pub fn generate(&self, _params: &Params) -> Result<Arc<ComponentInstruction>> {
        Err(RouterError::RedirectGeneration)
    }
}

/// Routes matching URLs to a component.
#[derive(Debug)]
pub struct RouteRule {
    route_path: Box<dyn RoutePath>,
    handler: Box<dyn RouteHandler>,
    route_name: Option<String>,
    specificity: String,
    terminal: bool,
    hash: String,
    cache: Mutex<HashMap<String, Arc<ComponentInstruction>>>,
}

impl RouteRule {
    pub fn new(
        route_path: Box<dyn RoutePath>,
        handler: Box<dyn RouteHandler>,
        route_name: Option<String>,
    ) -> Self {
        RouteRule {
            specificity: route_path.specificity().to_string(),
            terminal: route_path.terminal(),
            hash: route_path.hash().to_string(),
            route_path,
            handler,
            route_name,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn path(&self) -> String {
        self.route_path.to_string()
    }

    pub fn terminal(&self) -> bool {
        self.terminal
    }

    pub fn specificity(&self) -> &str {
        &self.specificity
    }

    pub fn route_name(&self) -> Option<&str> {
        self.route_name.as_deref()
    }

    pub fn handler(&self) -> &dyn RouteHandler {
        self.handler.as_ref()
    }

    /// `None` when the path does not match; otherwise a match that resolves
    /// once the handler has its component.
    pub fn recognize(self: &Arc<Self>, beginning_segment: &Url) -> Option<PendingMatch> {
        let res = self.route_path.match_url(beginning_segment)?;
        let resolve = self.handler.resolve_component_type();
        Some(resolve_path_match(Arc::clone(self), resolve, res).boxed())
    }

    pub fn generate(&self, params: &Params) -> Result<Arc<ComponentInstruction>> {
        let generated = self.route_path.generate_url(params)?;
        let url_params = serialize_params(&generated.url_params);
        self.get_instruction(generated.url_path, url_params, params.clone())
    }

    /// Instructions are cached by URL path and URL params, so recognizing or
    /// generating the same URL twice yields the same `Arc`. Distinct query
    /// params make distinct keys; the cache is cleared once it holds
    /// [`MAX_CACHED_INSTRUCTIONS`] entries.
    fn get_instruction(
        &self,
        url_path: String,
        url_params: Vec<String>,
        params: Params,
    ) -> Result<Arc<ComponentInstruction>> {
        let component_type = self
            .handler
            .component_type()
            .ok_or(RouterError::ComponentNotLoaded)?;

        let hash_key = format!("{}?{}", url_path, url_params.join("&"));
        let mut cache = self.cache.lock();
        if let Some(instruction) = cache.get(&hash_key) {
            return Ok(Arc::clone(instruction));
        }

        if cache.len() >= MAX_CACHED_INSTRUCTIONS {
            tracing::debug!(path = %self.route_path, "instruction cache full, clearing");
            cache.clear();
        }

        let instruction = Arc::new(ComponentInstruction::new(
            url_path,
            url_params,
            self.handler.data().clone(),
            component_type,
            self.terminal,
            self.specificity.clone(),
            params,
            self.route_name.clone(),
        ));
        cache.insert(hash_key, Arc::clone(&instruction));
        Ok(instruction)
    }
}

async fn resolve_path_match(
    rule: Arc<RouteRule>,
    resolve: ComponentFuture,
    res: MatchedUrl,
) -> Result<Option<RouteMatch>> {
    resolve.await?;
    let instruction = rule.get_instruction(res.url_path, res.url_params, res.all_params)?;
    Ok(Some(RouteMatch::Path(PathMatch {
        instruction: Some(instruction),
        remaining: res.rest,
        remaining_aux: res.auxiliary,
    })))
}

/// An entry of a rule set's primary sequence.
#[derive(Debug, Clone)]
pub enum Rule {
    Route(Arc<RouteRule>),
    Redirect(Arc<RedirectRule>),
}

impl Rule {
    pub fn hash(&self) -> &str {
        match self {
            Rule::Route(rule) => rule.hash(),
            Rule::Redirect(rule) => rule.hash(),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Rule::Route(rule) => rule.path(),
            Rule::Redirect(rule) => rule.path(),
        }
    }

    /// Redirects always consume the whole URL.
    pub fn terminal(&self) -> bool {
        match self {
            Rule::Route(rule) => rule.terminal(),
            Rule::Redirect(_) => true,
        }
    }

    pub fn recognize(&self, url: &Url) -> Option<PendingMatch> {
        match self {
            Rule::Route(rule) => rule.recognize(url),
            Rule::Redirect(rule) => rule.recognize(url),
        }
    }
}
