//! Endpoint definitions and the conventional RESTful endpoint table.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use resource_routes_core::RoutesResult;

use super::method::ActionMethod;

/// A single `(method, path template, action name)` triple.
///
/// The path is relative to the resource (e.g. `/:id/edit`) and may contain
/// `:name` placeholders that are filled positionally by the path helpers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceEndpoint {
    method: ActionMethod,
    path: String,
    name: String,
}

impl ResourceEndpoint {
    /// Creates a new endpoint definition.
    ///
    /// # Examples
    ///
    /// ```
    /// use resource_routes_http::urls::endpoint::ResourceEndpoint;
    /// use resource_routes_http::urls::method::ActionMethod;
    ///
    /// let endpoint = ResourceEndpoint::new(ActionMethod::Get, "/:id/action/:detail", "actionWithDetail");
    /// assert_eq!(endpoint.path(), "/:id/action/:detail");
    /// ```
    pub fn new(method: ActionMethod, path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            name: name.into(),
        }
    }

    /// Returns the HTTP method.
    pub const fn method(&self) -> ActionMethod {
        self.method
    }

    /// Returns the path template, relative to the resource.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the action name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Converts this endpoint to its plain-data form.
    pub fn to_serialized(&self) -> SerializedEndpoint {
        SerializedEndpoint {
            method: self.method.as_str().to_string(),
            path: self.path.clone(),
            name: self.name.clone(),
        }
    }
}

/// The plain-data form of a [`ResourceEndpoint`], with the method as its tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedEndpoint {
    /// The canonical method tag (e.g. `"GET"`).
    pub method: String,
    /// The path template.
    pub path: String,
    /// The action name.
    pub name: String,
}

impl SerializedEndpoint {
    /// Rebuilds the endpoint, resolving the method tag.
    ///
    /// # Errors
    ///
    /// Returns [`RoutesError::InvalidMethod`](resource_routes_core::RoutesError::InvalidMethod)
    /// if the tag is not a known method.
    pub fn to_endpoint(&self) -> RoutesResult<ResourceEndpoint> {
        Ok(ResourceEndpoint::new(
            self.method.parse()?,
            self.path.clone(),
            self.name.clone(),
        ))
    }
}

static DEFAULT_ENDPOINTS: Lazy<Vec<ResourceEndpoint>> = Lazy::new(|| {
    vec![
        ResourceEndpoint::new(ActionMethod::Get, "/", "index"),
        ResourceEndpoint::new(ActionMethod::Get, "/new", "new"),
        // `new` is a keyword in most handler languages; `new_` is its alias.
        ResourceEndpoint::new(ActionMethod::Get, "/new", "new_"),
        ResourceEndpoint::new(ActionMethod::Post, "/", "create"),
        ResourceEndpoint::new(ActionMethod::Get, "/:id", "show"),
        ResourceEndpoint::new(ActionMethod::Get, "/:id/edit", "edit"),
        ResourceEndpoint::new(ActionMethod::Put, "/:id", "update"),
        ResourceEndpoint::new(ActionMethod::Post, "/:id/update", "updateByPost"),
        ResourceEndpoint::new(ActionMethod::Get, "/:id/destroy", "destroy"),
        ResourceEndpoint::new(ActionMethod::Delete, "/:id", "destroy"),
    ]
});

/// Returns the conventional RESTful endpoints, in evaluation order.
///
/// `destroy` appears twice; only the first (`GET /:id/destroy`) is ever
/// selected because registration keeps the first endpoint per action name.
pub fn default_endpoints() -> &'static [ResourceEndpoint] {
    &DEFAULT_ENDPOINTS
}
