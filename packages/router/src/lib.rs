#![deny(clippy::all)]

//! Route recognition and generation for one component's routing table.
//!
//! A [`RuleSet`] holds the route definitions of a component. Given a parsed
//! [`Url`] it produces candidate matches; given a route name and params it
//! produces a [`ComponentInstruction`].

pub mod error;
pub mod instruction;
pub mod route_config;
pub mod rules;
pub mod url_parser;

pub use error::{Result, RouterError};
pub use instruction::{ComponentInstruction, ComponentType, RouteData};
pub use route_config::{
    load_route_table, AsyncRoute, AuxRoute, Redirect, Route, RouteDefinition, RoutePattern,
};
pub use rules::route_handlers::{component_loader, ComponentLoader};
pub use rules::{PathMatch, PendingMatch, RedirectMatch, RouteMatch, RuleSet};
pub use url_parser::{parse_url, ParamValue, Params, Url, UrlParser};
