//! Route path matchers

pub mod param_route_path;
pub mod regex_route_path;
pub mod route_path;

pub use param_route_path::ParamRoutePath;
pub use regex_route_path::{RegexRoutePath, RegexSerializer};
pub use route_path::{GeneratedUrl, MatchedUrl, RoutePath};
