use futures::future::{self, FutureExt};

use super::route_handler::{ComponentFuture, RouteHandler};
use crate::instruction::{ComponentType, RouteData};

/// Handler for a component known at configuration time.
#[derive(Debug, Clone)]
pub struct SyncRouteHandler {
    component_type: ComponentType,
    data: RouteData,
}

impl SyncRouteHandler {
    pub fn new(component_type: ComponentType, data: Option<RouteData>) -> Self {
        SyncRouteHandler {
            component_type,
            data: data.unwrap_or_default(),
        }
    }
}

impl RouteHandler for SyncRouteHandler {
    fn resolve_component_type(&self) -> ComponentFuture {
        future::ready(Ok(self.component_type.clone())).boxed()
    }

    fn component_type(&self) -> Option<ComponentType> {
        Some(self.component_type.clone())
    }

    fn data(&self) -> &RouteData {
        &self.data
    }
}
