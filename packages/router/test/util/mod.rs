//! Helpers shared by the router integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use angular_router::{
    parse_url, ComponentInstruction, ParamValue, Params, PathMatch, RouteMatch, RuleSet,
};
use futures::executor::block_on;

pub fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), ParamValue::from(*v)))
        .collect()
}

/// Resolve every candidate for `url`, in order.
pub fn recognize_all(rule_set: &RuleSet, url: &str) -> Vec<Option<RouteMatch>> {
    let url = parse_url(url).expect("url parses");
    rule_set
        .recognize(&url)
        .into_iter()
        .map(|pending| block_on(pending).expect("match resolves"))
        .collect()
}

/// The first candidate for `url`, resolved.
pub fn recognize_first(rule_set: &RuleSet, url: &str) -> Option<RouteMatch> {
    recognize_all(rule_set, url).into_iter().next().flatten()
}

pub fn path_match(route_match: Option<RouteMatch>) -> PathMatch {
    match route_match {
        Some(RouteMatch::Path(path_match)) => path_match,
        other => panic!("expected a path match, got {:?}", other),
    }
}

pub fn instruction(route_match: Option<RouteMatch>) -> Arc<ComponentInstruction> {
    path_match(route_match)
        .instruction
        .expect("path match carries an instruction")
}
