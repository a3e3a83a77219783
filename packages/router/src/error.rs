//! Router errors
//!
//! Configuration errors abort the offending `config` call only; recognition
//! and generation errors are returned to the caller. Unknown names on
//! generation are not errors (`Ok(None)`).

use thiserror::Error;

/// Router result type
pub type Result<T> = std::result::Result<T, RouterError>;

/// Router error. `Clone` so it can be the output of a shared future.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error(
        "Route \"{path}\" with name \"{name}\" does not begin with an uppercase letter. \
         Route names should be CamelCase like \"{suggested}\"."
    )]
    InvalidRouteName {
        path: String,
        name: String,
        suggested: String,
    },

    #[error("Route \"{path}\" has an empty name.")]
    EmptyRouteName { path: String },

    #[error("Route must provide either a path or regex property")]
    MissingPath,

    #[error("Route provides a regex property, '{regex}', but no serializer property")]
    MissingSerializer { regex: String },

    #[error("Route regex '{regex}' is invalid: {reason}")]
    InvalidRegex { regex: String, reason: String },

    #[error("{0}")]
    InvalidPath(String),

    #[error("Configuration '{path}' conflicts with existing route '{existing}'")]
    HashCollision { path: String, existing: String },

    #[error("Only one route can be default")]
    DuplicateDefault,

    #[error("Route generator for '{0}' was not included in parameters passed.")]
    MissingParameter(String),

    #[error("Tried to get instruction before the type was loaded.")]
    ComponentNotLoaded,

    #[error("Failed to load component: {0}")]
    ComponentLoad(String),

    #[error("Route \"{0}\" is not registered.")]
    UnknownRoute(String),

    #[error("Tried to generate a redirect.")]
    RedirectGeneration,

    #[error("{0}")]
    UrlParse(String),

    #[error("Invalid route table: {0}")]
    RouteTable(String),
}

impl RouterError {
    /// True for errors raised while configuring a rule set.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            RouterError::InvalidRouteName { .. }
                | RouterError::EmptyRouteName { .. }
                | RouterError::MissingPath
                | RouterError::MissingSerializer { .. }
                | RouterError::InvalidRegex { .. }
                | RouterError::InvalidPath(_)
                | RouterError::HashCollision { .. }
                | RouterError::DuplicateDefault
        )
    }
}

impl From<serde_json::Error> for RouterError {
    fn from(err: serde_json::Error) -> Self {
        RouterError::RouteTable(err.to_string())
    }
}
