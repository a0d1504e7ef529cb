//! # resource-routes-http
//!
//! Resource registry and reverse routing for resource-routes. Declares the
//! conventional RESTful endpoints of each resource, records which actions its
//! handler provides, and generates paths and URLs for `(resource, action)`
//! pairs. Request handling itself is left to the embedding HTTP stack.

pub mod urls;

pub use urls::collection::{
    PlaceholderAction, Resource, ResourceAction, ResourceCollection, ResourceCollectionJson,
    ResourceModule, SerializedResource,
};
pub use urls::endpoint::{default_endpoints, ResourceEndpoint, SerializedEndpoint};
pub use urls::helpers::{PathArgs, PathGenerator, PathHelpers, UrlGenerator};
pub use urls::method::ActionMethod;
pub use urls::query::QueryParams;
