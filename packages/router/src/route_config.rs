//! Route definitions
//!
//! The four kinds of route a [`RuleSet`](crate::rules::RuleSet) accepts,
//! built in code or loaded from a JSON route table.

use std::fmt;

use serde::Deserialize;

use crate::error::{Result, RouterError};
use crate::instruction::{ComponentType, RouteData};
use crate::rules::route_handlers::ComponentLoader;
use crate::rules::route_paths::RegexSerializer;

/// Where a route matches: a path pattern, or a regex with its serializer.
#[derive(Clone, Default)]
pub struct RoutePattern {
    pub path: Option<String>,
    pub regex: Option<String>,
    pub serializer: Option<RegexSerializer>,
}

impl RoutePattern {
    pub fn path(path: impl Into<String>) -> Self {
        RoutePattern {
            path: Some(path.into()),
            ..Default::default()
        }
    }
}

impl fmt::Debug for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutePattern")
            .field("path", &self.path)
            .field("regex", &self.regex)
            .field("serializer", &self.serializer.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// The path if there is one, else the regex.
impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.path, &self.regex) {
            (Some(path), _) => f.write_str(path),
            (None, Some(regex)) => f.write_str(regex),
            (None, None) => Ok(()),
        }
    }
}

macro_rules! pattern_builders {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $ty {
                pub fn path(mut self, path: impl Into<String>) -> Self {
                    self.pattern.path = Some(path.into());
                    self
                }

                pub fn regex(mut self, regex: impl Into<String>) -> Self {
                    self.pattern.regex = Some(regex.into());
                    self
                }

                pub fn serializer(mut self, serializer: RegexSerializer) -> Self {
                    self.pattern.serializer = Some(serializer);
                    self
                }

                pub fn name(mut self, name: impl Into<String>) -> Self {
                    self.name = Some(name.into());
                    self
                }

                pub fn data(mut self, data: RouteData) -> Self {
                    self.data = Some(data);
                    self
                }
            }
        )+
    };
}

/// Route to a component known up front.
#[derive(Debug, Clone)]
pub struct Route {
    pub pattern: RoutePattern,
    pub name: Option<String>,
    pub data: Option<RouteData>,
    pub component: ComponentType,
    pub use_as_default: bool,
}

impl Route {
    pub fn new(component: impl Into<ComponentType>) -> Self {
        Route {
            pattern: RoutePattern::default(),
            name: None,
            data: None,
            component: component.into(),
            use_as_default: false,
        }
    }

    pub fn use_as_default(mut self, use_as_default: bool) -> Self {
        self.use_as_default = use_as_default;
        self
    }
}

/// Route to a component produced by a loader on first use.
#[derive(Clone)]
pub struct AsyncRoute {
    pub pattern: RoutePattern,
    pub name: Option<String>,
    pub data: Option<RouteData>,
    pub loader: ComponentLoader,
    pub use_as_default: bool,
}

impl AsyncRoute {
    pub fn new(loader: ComponentLoader) -> Self {
        AsyncRoute {
            pattern: RoutePattern::default(),
            name: None,
            data: None,
            loader,
            use_as_default: false,
        }
    }

    pub fn use_as_default(mut self, use_as_default: bool) -> Self {
        self.use_as_default = use_as_default;
        self
    }
}

impl fmt::Debug for AsyncRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncRoute")
            .field("pattern", &self.pattern)
            .field("name", &self.name)
            .field("data", &self.data)
            .field("use_as_default", &self.use_as_default)
            .finish_non_exhaustive()
    }
}

/// Route recognized only inside auxiliary URL segments.
#[derive(Debug, Clone)]
pub struct AuxRoute {
    pub pattern: RoutePattern,
    pub name: Option<String>,
    pub data: Option<RouteData>,
    pub component: ComponentType,
}

impl AuxRoute {
    pub fn new(component: impl Into<ComponentType>) -> Self {
        AuxRoute {
            pattern: RoutePattern::default(),
            name: None,
            data: None,
            component: component.into(),
        }
    }
}

/// Sends matching URLs to another link, e.g. `["/Home"]`.
#[derive(Debug, Clone)]
pub struct Redirect {
    pub pattern: RoutePattern,
    pub name: Option<String>,
    pub data: Option<RouteData>,
    pub redirect_to: Vec<String>,
}

impl Redirect {
    pub fn new<I, S>(redirect_to: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Redirect {
            pattern: RoutePattern::default(),
            name: None,
            data: None,
            redirect_to: redirect_to.into_iter().map(Into::into).collect(),
        }
    }
}

pattern_builders!(Route, AsyncRoute, AuxRoute, Redirect);

#[derive(Debug, Clone)]
pub enum RouteDefinition {
    Route(Route),
    AsyncRoute(AsyncRoute),
    AuxRoute(AuxRoute),
    Redirect(Redirect),
}

impl RouteDefinition {
    pub fn pattern(&self) -> &RoutePattern {
        match self {
            RouteDefinition::Route(r) => &r.pattern,
            RouteDefinition::AsyncRoute(r) => &r.pattern,
            RouteDefinition::AuxRoute(r) => &r.pattern,
            RouteDefinition::Redirect(r) => &r.pattern,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            RouteDefinition::Route(r) => r.name.as_deref(),
            RouteDefinition::AsyncRoute(r) => r.name.as_deref(),
            RouteDefinition::AuxRoute(r) => r.name.as_deref(),
            RouteDefinition::Redirect(r) => r.name.as_deref(),
        }
    }
}

impl From<Route> for RouteDefinition {
    fn from(route: Route) -> Self {
        RouteDefinition::Route(route)
    }
}

impl From<AsyncRoute> for RouteDefinition {
    fn from(route: AsyncRoute) -> Self {
        RouteDefinition::AsyncRoute(route)
    }
}

impl From<AuxRoute> for RouteDefinition {
    fn from(route: AuxRoute) -> Self {
        RouteDefinition::AuxRoute(route)
    }
}

impl From<Redirect> for RouteDefinition {
    fn from(redirect: Redirect) -> Self {
        RouteDefinition::Redirect(redirect)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RouteTableEntry {
    path: Option<String>,
    name: Option<String>,
    component: Option<String>,
    redirect_to: Option<Vec<String>>,
    #[serde(default)]
    aux: bool,
    #[serde(default)]
    use_as_default: bool,
    data: Option<RouteData>,
}

impl RouteTableEntry {
    fn into_definition(self) -> Result<RouteDefinition> {
        let pattern = RoutePattern {
            path: self.path,
            ..Default::default()
        };

        if let Some(redirect_to) = self.redirect_to {
            if self.component.is_some() || self.aux {
                return Err(RouterError::RouteTable(format!(
                    "redirect \"{}\" cannot also name a component",
                    pattern
                )));
            }
            return Ok(RouteDefinition::Redirect(Redirect {
                pattern,
                name: self.name,
                data: self.data,
                redirect_to,
            }));
        }

        let component = self
            .component
            .map(ComponentType::new)
            .ok_or_else(|| RouterError::RouteTable(format!("route \"{}\" has no component", pattern)))?;

        if self.aux {
            return Ok(RouteDefinition::AuxRoute(AuxRoute {
                pattern,
                name: self.name,
                data: self.data,
                component,
            }));
        }

        Ok(RouteDefinition::Route(Route {
            pattern,
            name: self.name,
            data: self.data,
            component,
            use_as_default: self.use_as_default,
        }))
    }
}

/// Parse a JSON array of route entries.
///
/// Each entry is `{path, name?, component?, redirectTo?, aux?, useAsDefault?, data?}`.
/// An entry with `redirectTo` is a redirect, one with `aux: true` an
/// auxiliary route, anything else a plain route. Regex routes need a
/// serializer and can only be built in code.
pub fn load_route_table(json: &str) -> Result<Vec<RouteDefinition>> {
    let entries: Vec<RouteTableEntry> = serde_json::from_str(json)?;
    entries
        .into_iter()
        .map(RouteTableEntry::into_definition)
        .collect()
}
