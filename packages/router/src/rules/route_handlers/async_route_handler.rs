use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use super::route_handler::{ComponentFuture, RouteHandler};
use crate::error::RouterError;
use crate::instruction::{ComponentType, RouteData};

/// Loads a component on first use.
pub type ComponentLoader =
    Arc<dyn Fn() -> BoxFuture<'static, anyhow::Result<ComponentType>> + Send + Sync>;

/// Wraps an async closure as a [`ComponentLoader`].
pub fn component_loader<F, Fut>(load: F) -> ComponentLoader
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<ComponentType>> + Send + 'static,
{
    Arc::new(move || load().boxed())
}

/// Handler whose component is produced by a loader.
///
/// The loader runs at most once; every caller of
/// [`resolve_component_type`](RouteHandler::resolve_component_type) shares
/// the same load, including its failure.
pub struct AsyncRouteHandler {
    loader: ComponentLoader,
    data: RouteData,
    component_type: Arc<OnceCell<ComponentType>>,
    resolved_component: Mutex<Option<Shared<ComponentFuture>>>,
}

impl AsyncRouteHandler {
    pub fn new(loader: ComponentLoader, data: Option<RouteData>) -> Self {
        AsyncRouteHandler {
            loader,
            data: data.unwrap_or_default(),
            component_type: Arc::new(OnceCell::new()),
            resolved_component: Mutex::new(None),
        }
    }
}

impl fmt::Debug for AsyncRouteHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncRouteHandler")
            .field("component_type", &self.component_type.get())
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl RouteHandler for AsyncRouteHandler {
    fn resolve_component_type(&self) -> ComponentFuture {
        let mut resolved = self.resolved_component.lock();
        if let Some(pending) = resolved.as_ref() {
            return pending.clone().boxed();
        }

        // The loader is called on first poll, outside the lock, so it may
        // itself resolve this handler.
        let loader = Arc::clone(&self.loader);
        let cell = Arc::clone(&self.component_type);
        let pending = async move {
            tracing::debug!("loading async route component");
            let component_type = loader()
                .await
                .map_err(|e| RouterError::ComponentLoad(e.to_string()))?;
            let _ = cell.set(component_type.clone());
            Ok::<_, RouterError>(component_type)
        }
        .boxed()
        .shared();

        *resolved = Some(pending.clone());
        pending.boxed()
    }

    fn component_type(&self) -> Option<ComponentType> {
        self.component_type.get().cloned()
    }

    fn data(&self) -> &RouteData {
        &self.data
    }
}
