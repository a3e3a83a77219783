//! Route rules and the per-component rule set.

pub mod route_handlers;
pub mod route_paths;
pub mod rule_set;
pub mod rules;

pub use rule_set::RuleSet;
pub use rules::{PathMatch, PendingMatch, RedirectMatch, RedirectRule, RouteMatch, RouteRule, Rule};
