//! # resource-routes
//!
//! Declarative RESTful resource routing with reverse path helpers.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient access.
//! You can depend on `resource-routes` to get everything, or depend on
//! individual crates for finer-grained control.
//!
//! ## Quick Start
//!
//! ```rust
//! use resource_routes::{PathHelpers, ResourceCollection, ResourceModule};
//!
//! let mut resources: ResourceCollection = ResourceCollection::new("/api");
//! resources.register(
//!     "posts",
//!     Some(ResourceModule::new().with_action("index", ()).with_action("show", ())),
//!     Vec::new(),
//! );
//!
//! let helpers = PathHelpers::new(&resources).with_url_root("https://example.com");
//! assert_eq!(helpers.path_to("posts", "show", 7, None).unwrap(), "/api/posts/7");
//! assert_eq!(
//!     helpers.url_to("posts", "index", (), None).unwrap(),
//!     "https://example.com/api/posts/"
//! );
//! ```

/// Error types, settings and logging.
pub use resource_routes_core as core;

/// Resource registry, endpoints and path generation.
#[cfg(feature = "http")]
pub use resource_routes_http as http;

/// Command-line tooling.
#[cfg(feature = "cli")]
pub use resource_routes_cli as cli;

pub use resource_routes_core::{RoutesError, RoutesResult, Settings};

#[cfg(feature = "http")]
pub use resource_routes_http::{
    default_endpoints, path_args, ActionMethod, PathArgs, PathHelpers, QueryParams, Resource,
    ResourceAction, ResourceCollection, ResourceEndpoint, ResourceModule,
};

// Third-party re-exports for user convenience.
pub use serde;
pub use serde_json;
pub use tracing;
