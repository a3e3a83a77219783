use std::fmt;

use futures::future::BoxFuture;

use crate::error::Result;
use crate::instruction::{ComponentType, RouteData};

/// Eventually-resolved component type.
pub type ComponentFuture = BoxFuture<'static, Result<ComponentType>>;

/// Resolves the component a route renders, immediately or after a load.
pub trait RouteHandler: fmt::Debug + Send + Sync {
    /// Always deferred, even when the component is already known.
    fn resolve_component_type(&self) -> ComponentFuture;

    /// The component, if it has been resolved.
    fn component_type(&self) -> Option<ComponentType>;

    fn data(&self) -> &RouteData;
}
