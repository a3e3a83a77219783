//! Component instructions
//!
//! What a recognized or generated route resolves to: the component to
//! render plus the URL pieces and params that selected it.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::url_parser::Params;

/// Identifies a routable component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentType(Arc<str>);

impl ComponentType {
    pub fn new(name: impl AsRef<str>) -> Self {
        ComponentType(Arc::from(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentType {
    fn from(name: &str) -> Self {
        ComponentType::new(name)
    }
}

/// Static data attached to a route definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteData {
    data: IndexMap<String, serde_json::Value>,
}

impl RouteData {
    pub fn new(data: IndexMap<String, serde_json::Value>) -> Self {
        RouteData { data }
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, serde_json::Value)> for RouteData {
    fn from_iter<I: IntoIterator<Item = (K, serde_json::Value)>>(iter: I) -> Self {
        RouteData::new(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// A resolved route step.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentInstruction {
    pub url_path: String,
    pub url_params: Vec<String>,
    pub route_data: RouteData,
    pub component_type: ComponentType,
    pub terminal: bool,
    pub specificity: String,
    pub params: Params,
    pub route_name: Option<String>,
    pub reuse: bool,
}

impl ComponentInstruction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        url_path: String,
        url_params: Vec<String>,
        route_data: RouteData,
        component_type: ComponentType,
        terminal: bool,
        specificity: String,
        params: Params,
        route_name: Option<String>,
    ) -> Self {
        ComponentInstruction {
            url_path,
            url_params,
            route_data,
            component_type,
            terminal,
            specificity,
            params,
            route_name,
            reuse: false,
        }
    }
}
