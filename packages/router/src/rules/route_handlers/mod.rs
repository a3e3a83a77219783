//! Route handlers: resolve the component a route renders.

pub mod async_route_handler;
pub mod route_handler;
pub mod sync_route_handler;

pub use async_route_handler::{component_loader, AsyncRouteHandler, ComponentLoader};
pub use route_handler::{ComponentFuture, RouteHandler};
pub use sync_route_handler::SyncRouteHandler;
