//! Rule set
//!
//! The routing table of one component. Primary rules are kept in
//! configuration order; auxiliary rules are kept apart and looked up by
//! the path of an auxiliary URL segment.

use std::collections::HashMap;
use std::sync::Arc;

use super::route_handlers::{AsyncRouteHandler, ComponentFuture, RouteHandler, SyncRouteHandler};
use super::route_paths::{ParamRoutePath, RegexRoutePath, RoutePath};
use super::rules::{resolved, PathMatch, PendingMatch, RedirectRule, RouteMatch, RouteRule, Rule};
use crate::error::{Result, RouterError};
use crate::instruction::ComponentInstruction;
use crate::route_config::{RouteDefinition, RoutePattern};
use crate::url_parser::{Params, Url};

#[derive(Debug, Default)]
pub struct RuleSet {
    rules_by_name: HashMap<String, Arc<RouteRule>>,
    aux_rules_by_name: HashMap<String, Arc<RouteRule>>,
    aux_rules_by_path: HashMap<String, Arc<RouteRule>>,
    rules: Vec<Rule>,
    default_rule: Option<Arc<RouteRule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route definition.
    ///
    /// Returns whether the new rule is terminal. On error the set is left
    /// unchanged.
    pub fn config(&mut self, config: impl Into<RouteDefinition>) -> Result<bool> {
        let config = config.into();
        if let Some(name) = config.name() {
            assert_valid_name(config.pattern(), name)?;
        }

        match config {
            RouteDefinition::AuxRoute(aux) => {
                // auxiliary paths are matched against a bare segment path
                let mut pattern = aux.pattern;
                if let Some(path) = pattern.path.as_mut() {
                    if let Some(stripped) = path.strip_prefix('/') {
                        *path = stripped.to_string();
                    }
                }
                let route_path = route_path_for(&pattern)?;
                let handler = SyncRouteHandler::new(aux.component, aux.data);
                let aux_rule = Arc::new(RouteRule::new(route_path, Box::new(handler), aux.name.clone()));

                tracing::debug!(path = %aux_rule.path(), name = ?aux.name, "configured auxiliary route");
                self.aux_rules_by_path.insert(aux_rule.path(), Arc::clone(&aux_rule));
                if let Some(name) = aux.name {
                    self.aux_rules_by_name.insert(name, Arc::clone(&aux_rule));
                }
                Ok(aux_rule.terminal())
            }
            RouteDefinition::Redirect(redirect) => {
                let route_path = route_path_for(&redirect.pattern)?;
                let redirector = RedirectRule::new(route_path, redirect.redirect_to);
                self.assert_no_hash_collision(redirector.hash(), &redirect.pattern)?;

                tracing::debug!(path = %redirector.path(), to = ?redirector.redirect_to, "configured redirect");
                self.rules.push(Rule::Redirect(Arc::new(redirector)));
                Ok(true)
            }
            RouteDefinition::Route(route) => {
                let handler = SyncRouteHandler::new(route.component, route.data);
                self.config_route(&route.pattern, Box::new(handler), route.name, route.use_as_default)
            }
            RouteDefinition::AsyncRoute(route) => {
                let handler = AsyncRouteHandler::new(route.loader, route.data);
                self.config_route(&route.pattern, Box::new(handler), route.name, route.use_as_default)
            }
        }
    }

    fn config_route(
        &mut self,
        pattern: &RoutePattern,
        handler: Box<dyn RouteHandler>,
        name: Option<String>,
        use_as_default: bool,
    ) -> Result<bool> {
        let route_path = route_path_for(pattern)?;
        let new_rule = Arc::new(RouteRule::new(route_path, handler, name.clone()));
        self.assert_no_hash_collision(new_rule.hash(), pattern)?;

        if use_as_default {
            if self.default_rule.is_some() {
                return Err(RouterError::DuplicateDefault);
            }
            self.default_rule = Some(Arc::clone(&new_rule));
        }

        tracing::debug!(
            path = %new_rule.path(),
            name = ?name,
            terminal = new_rule.terminal(),
            use_as_default,
            "configured route"
        );
        self.rules.push(Rule::Route(Arc::clone(&new_rule)));
        if let Some(name) = name {
            self.rules_by_name.insert(name, Arc::clone(&new_rule));
        }
        Ok(new_rule.terminal())
    }

    /// Candidate matches for `url`, in configuration order.
    ///
    /// A URL no primary rule matches but which carries auxiliary segments
    /// yields a single placeholder match holding just those segments.
    pub fn recognize(&self, url: &Url) -> Vec<PendingMatch> {
        let solutions: Vec<PendingMatch> = self
            .rules
            .iter()
            .filter_map(|rule| rule.recognize(url))
            .collect();

        if solutions.is_empty() && !url.auxiliary.is_empty() {
            tracing::trace!(url = %url, "only auxiliary segments matched");
            return vec![resolved(Some(RouteMatch::Path(PathMatch {
                instruction: None,
                remaining: None,
                remaining_aux: url.auxiliary.clone(),
            })))];
        }

        tracing::trace!(url = %url, candidates = solutions.len(), "recognized");
        solutions
    }

    /// Exactly one entry: the auxiliary rule registered for the segment's
    /// path, or a match resolving to `None`.
    pub fn recognize_auxiliary(&self, url: &Url) -> Vec<PendingMatch> {
        let pending = self
            .aux_rules_by_path
            .get(&url.path)
            .and_then(|rule| rule.recognize(url))
            .unwrap_or_else(|| resolved(None));
        vec![pending]
    }

    pub fn has_route(&self, name: &str) -> bool {
        self.rules_by_name.contains_key(name)
    }

    /// Whether the named route's component is available without loading.
    pub fn component_loaded(&self, name: &str) -> bool {
        self.rules_by_name
            .get(name)
            .is_some_and(|rule| rule.handler().component_type().is_some())
    }

    pub fn load_component(&self, name: &str) -> Result<ComponentFuture> {
        self.rules_by_name
            .get(name)
            .map(|rule| rule.handler().resolve_component_type())
            .ok_or_else(|| RouterError::UnknownRoute(name.to_string()))
    }

    /// `Ok(None)` when no primary route has that name.
    pub fn generate(&self, name: &str, params: &Params) -> Result<Option<Arc<ComponentInstruction>>> {
        self.rules_by_name
            .get(name)
            .map(|rule| rule.generate(params))
            .transpose()
    }

    /// `Ok(None)` when no auxiliary route has that name.
    pub fn generate_auxiliary(
        &self,
        name: &str,
        params: &Params,
    ) -> Result<Option<Arc<ComponentInstruction>>> {
        self.aux_rules_by_name
            .get(name)
            .map(|rule| rule.generate(params))
            .transpose()
    }

    pub fn default_rule(&self) -> Option<&Arc<RouteRule>> {
        self.default_rule.as_ref()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    fn assert_no_hash_collision(&self, hash: &str, pattern: &RoutePattern) -> Result<()> {
        match self.rules.iter().find(|rule| rule.hash() == hash) {
            Some(existing) => Err(RouterError::HashCollision {
                path: pattern.to_string(),
                existing: existing.path(),
            }),
            None => Ok(()),
        }
    }
}

fn route_path_for(pattern: &RoutePattern) -> Result<Box<dyn RoutePath>> {
    if let Some(regex) = &pattern.regex {
        let serializer = pattern
            .serializer
            .clone()
            .ok_or_else(|| RouterError::MissingSerializer { regex: regex.clone() })?;
        return Ok(Box::new(RegexRoutePath::new(regex, serializer)?));
    }
    if let Some(path) = &pattern.path {
        return Ok(Box::new(ParamRoutePath::new(path)?));
    }
    Err(RouterError::MissingPath)
}

/// The first character must already be upper case.
fn assert_valid_name(pattern: &RoutePattern, name: &str) -> Result<()> {
    let mut chars = name.chars();
    let first = chars.next().ok_or_else(|| RouterError::EmptyRouteName {
        path: pattern.to_string(),
    })?;

    let upper: String = first.to_uppercase().collect();
    if upper.chars().eq(std::iter::once(first)) {
        return Ok(());
    }
    Err(RouterError::InvalidRouteName {
        path: pattern.to_string(),
        name: name.to_string(),
        suggested: format!("{}{}", upper, chars.as_str()),
    })
}
