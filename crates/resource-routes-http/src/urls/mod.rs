//! Resource registration and reverse routing.
//!
//! This module provides Rails-style resource routing:
//!
//! - [`method`]: The closed set of HTTP verbs an endpoint answers to
//! - [`endpoint`]: Endpoint definitions and the conventional RESTful table
//! - [`collection`]: The resource registry and its plain-data form
//! - [`helpers`]: Reverse path and URL generation
//! - [`template`]: `:name` placeholder parsing and substitution
//! - [`query`]: Query string encoding
//!
//! # Examples
//!
//! ```
//! use resource_routes_http::urls::collection::{ResourceCollection, ResourceModule};
//! use resource_routes_http::urls::helpers::PathHelpers;
//!
//! let mut resources: ResourceCollection = ResourceCollection::new("/api");
//! resources.register(
//!     "users",
//!     Some(ResourceModule::new().with_action("index", ()).with_action("show", ())),
//!     Vec::new(),
//! );
//!
//! let helpers = PathHelpers::new(&resources);
//! assert_eq!(helpers.path_to("users", "show", 42, None).unwrap(), "/api/users/42");
//! assert!(helpers.path_to("users", "destroy", 42, None).is_err());
//!
//! // The registry survives a round trip through its plain-data form.
//! let restored: ResourceCollection =
//!     ResourceCollection::from_serialized(&resources.serialize()).unwrap();
//! assert!(restored.has_action("users", "show"));
//! ```

pub mod collection;
pub mod endpoint;
pub mod helpers;
pub mod method;
pub mod query;
pub mod template;
