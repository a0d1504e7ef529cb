//! The resource registry.
//!
//! A [`ResourceCollection`] maps resource names (e.g. `"users"`) to the set of
//! endpoints the resource serves. Endpoints are chosen at registration time
//! from caller-supplied extras followed by the conventional RESTful table,
//! filtered by the capabilities of the resource's handler module.
//!
//! The registry never invokes handler actions. It only checks which action
//! names a handler provides; dispatching requests is left to the embedding
//! HTTP layer.
//!
//! # Examples
//!
//! ```
//! use resource_routes_http::urls::collection::{ResourceCollection, ResourceModule};
//!
//! let mut resources: ResourceCollection = ResourceCollection::new("/api");
//! resources.register(
//!     "users",
//!     Some(ResourceModule::new().with_action("index", ()).with_action("show", ())),
//!     Vec::new(),
//! );
//!
//! assert!(resources.has_action("users", "show"));
//! assert!(!resources.has_action("users", "destroy"));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use resource_routes_core::{RoutesResult, Settings};

use super::endpoint::{default_endpoints, ResourceEndpoint, SerializedEndpoint};

/// An action type that can be stood in for by a no-op.
///
/// Deserialized registries cannot carry behavior, so every capability of a
/// restored handler is filled with `A::placeholder()` until the real module
/// is attached again with [`ResourceCollection::attach_handler`].
pub trait PlaceholderAction {
    /// Returns an action that does nothing.
    fn placeholder() -> Self;
}

impl PlaceholderAction for () {
    fn placeholder() -> Self {}
}

/// A shared, type-erased handler action.
pub type ResourceAction<Req, Res> = Arc<dyn Fn(Req) -> Res + Send + Sync>;

impl<Req: 'static, Res: Default + 'static> PlaceholderAction for ResourceAction<Req, Res> {
    fn placeholder() -> Self {
        Arc::new(|_req: Req| Res::default())
    }
}

/// A handler module: the set of actions a resource implements.
///
/// Only the action names matter to the registry. `A` is whatever callable
/// type the embedding application dispatches to; use `()` when only the
/// path helpers are needed.
#[derive(Clone)]
pub struct ResourceModule<A = ()> {
    actions: BTreeMap<String, A>,
}

impl<A> fmt::Debug for ResourceModule<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceModule")
            .field("actions", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<A> Default for ResourceModule<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> ResourceModule<A> {
    /// Creates a module with no actions.
    pub const fn new() -> Self {
        Self {
            actions: BTreeMap::new(),
        }
    }

    /// Adds an action, returning the updated module.
    #[must_use]
    pub fn with_action(mut self, name: impl Into<String>, action: A) -> Self {
        self.actions.insert(name.into(), action);
        self
    }

    /// Adds or replaces an action, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, action: A) -> Option<A> {
        self.actions.insert(name.into(), action)
    }

    /// Returns `true` if the module provides an action named `name`.
    pub fn has(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Returns the action named `name`.
    pub fn get(&self, name: &str) -> Option<&A> {
        self.actions.get(name)
    }

    /// Iterates over the action names, sorted.
    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    /// Returns the number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if the module has no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<A: PlaceholderAction> ResourceModule<A> {
    /// Builds a module whose actions are all placeholders.
    pub fn placeholders<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            actions: names
                .into_iter()
                .map(|name| (name.into(), A::placeholder()))
                .collect(),
        }
    }
}

/// A registered resource: its optional handler and its selected endpoints.
#[derive(Clone)]
pub struct Resource<A = ()> {
    handler: Option<ResourceModule<A>>,
    endpoints: BTreeMap<String, ResourceEndpoint>,
}

impl<A> fmt::Debug for Resource<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("handler", &self.handler)
            .field("endpoints", &self.endpoints)
            .finish()
    }
}

impl<A> Resource<A> {
    /// Returns the handler module, if one is attached.
    pub const fn handler(&self) -> Option<&ResourceModule<A>> {
        self.handler.as_ref()
    }

    /// Returns the endpoints, keyed by action name.
    pub const fn endpoints(&self) -> &BTreeMap<String, ResourceEndpoint> {
        &self.endpoints
    }

    /// Returns the endpoint for `action`.
    pub fn endpoint(&self, action: &str) -> Option<&ResourceEndpoint> {
        self.endpoints.get(action)
    }

    /// Returns the handler's action names, sorted. Empty without a handler.
    pub fn capabilities(&self) -> Vec<&str> {
        self.handler
            .as_ref()
            .map(|handler| handler.action_names().collect())
            .unwrap_or_default()
    }

    fn to_serialized(&self) -> SerializedResource {
        SerializedResource {
            handler: self
                .capabilities()
                .into_iter()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
            endpoints: self
                .endpoints
                .iter()
                .map(|(name, endpoint)| {
                    let mut serialized = endpoint.to_serialized();
                    serialized.name.clone_from(name);
                    (name.clone(), serialized)
                })
                .collect(),
        }
    }
}

/// The plain-data form of a [`Resource`].
///
/// The handler keeps only its action names, each mapped to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedResource {
    /// Action names of the handler, mapped to `""`.
    #[serde(default)]
    pub handler: BTreeMap<String, String>,
    /// Endpoints keyed by action name.
    #[serde(default)]
    pub endpoints: BTreeMap<String, SerializedEndpoint>,
}

/// The plain-data form of a [`ResourceCollection`].
///
/// Serialized with camelCase keys:
///
/// ```json
/// {
///   "globalPathPrefix": "/api",
///   "paths": {
///     "test": {
///       "handler": { "index": "" },
///       "endpoints": { "index": { "method": "GET", "path": "/", "name": "index" } }
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCollectionJson {
    /// Prefix prepended to every generated path.
    #[serde(default)]
    pub global_path_prefix: String,
    /// Resources keyed by name.
    #[serde(default)]
    pub paths: BTreeMap<String, SerializedResource>,
}

/// The registry of resources and their endpoints.
///
/// Entries are added or replaced by [`register`](Self::register) and are
/// never removed.
#[derive(Clone)]
pub struct ResourceCollection<A = ()> {
    global_path_prefix: String,
    resources: BTreeMap<String, Resource<A>>,
}

impl<A> fmt::Debug for ResourceCollection<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceCollection")
            .field("global_path_prefix", &self.global_path_prefix)
            .field("resources", &self.resources)
            .finish()
    }
}

impl<A> Default for ResourceCollection<A> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<A> ResourceCollection<A> {
    /// Creates an empty registry. Pass `""` for no prefix.
    pub fn new(global_path_prefix: impl Into<String>) -> Self {
        Self {
            global_path_prefix: global_path_prefix.into(),
            resources: BTreeMap::new(),
        }
    }

    /// Creates an empty registry using the configured path prefix.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.global_path_prefix.clone())
    }

    /// Returns the prefix prepended to every generated path.
    pub fn global_path_prefix(&self) -> &str {
        &self.global_path_prefix
    }

    /// Replaces the global path prefix.
    pub fn set_global_path_prefix(&mut self, prefix: impl Into<String>) {
        self.global_path_prefix = prefix.into();
    }

    /// Returns the resource registered as `name`.
    pub fn get(&self, name: &str) -> Option<&Resource<A>> {
        self.resources.get(name)
    }

    /// Returns `true` if a resource named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    /// Iterates over `(name, resource)` pairs, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Resource<A>)> {
        self.resources.iter().map(|(name, resource)| (name.as_str(), resource))
    }

    /// Returns the number of registered resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns `true` if no resources are registered.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Registers (or re-registers) a resource.
    ///
    /// Candidates are `extra` followed by the conventional endpoints. A
    /// candidate is kept when there is no handler or the handler provides an
    /// action of the same name; the first kept candidate for a name wins, so
    /// extras shadow conventional endpoints. Any previous entry for `name`,
    /// handler included, is replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: Option<ResourceModule<A>>,
        extra: Vec<ResourceEndpoint>,
    ) {
        let name = name.into();
        let mut endpoints = BTreeMap::new();

        for endpoint in extra.into_iter().chain(default_endpoints().iter().cloned()) {
            let provided = handler.as_ref().is_none_or(|module| module.has(endpoint.name()));
            if provided && !endpoints.contains_key(endpoint.name()) {
                endpoints.insert(endpoint.name().to_string(), endpoint);
            }
        }

        tracing::debug!(
            resource = %name,
            has_handler = handler.is_some(),
            endpoints = endpoints.len(),
            "registered resource"
        );

        self.resources.insert(name, Resource { handler, endpoints });
    }

    /// Replaces the handler of an already registered resource.
    ///
    /// The endpoint set is left exactly as it was computed at registration.
    /// Unknown names are ignored; this never creates a resource.
    pub fn attach_handler(&mut self, name: &str, handler: ResourceModule<A>) {
        if let Some(resource) = self.resources.get_mut(name) {
            tracing::debug!(resource = name, actions = handler.len(), "attached handler");
            resource.handler = Some(handler);
        } else {
            tracing::warn!(resource = name, "handler attached to unknown resource ignored");
        }
    }

    /// Returns the endpoint serving `action` on `resource`.
    pub fn lookup(&self, resource: &str, action: &str) -> Option<&ResourceEndpoint> {
        self.resources.get(resource)?.endpoint(action)
    }

    /// Returns `true` if `resource` is registered and serves `action`.
    pub fn has_action(&self, resource: &str, action: &str) -> bool {
        self.lookup(resource, action).is_some()
    }

    /// Converts the registry to its plain-data form.
    ///
    /// Handler actions are reduced to their names.
    pub fn serialize(&self) -> ResourceCollectionJson {
        ResourceCollectionJson {
            global_path_prefix: self.global_path_prefix.clone(),
            paths: self
                .resources
                .iter()
                .map(|(name, resource)| (name.clone(), resource.to_serialized()))
                .collect(),
        }
    }

    /// Serializes the registry to a JSON string.
    pub fn to_json_string(&self) -> RoutesResult<String> {
        Ok(serde_json::to_string(&self.serialize())?)
    }
}

impl<A: PlaceholderAction> ResourceCollection<A> {
    /// Restores resources from their plain-data form.
    ///
    /// The prefix is replaced. Each serialized resource is registered again
    /// with its endpoints as extras, selected by a placeholder handler
    /// exposing exactly those endpoint names, so the restored endpoint set
    /// equals the serialized one even when the stored handler had been
    /// swapped after registration. The stored handler then becomes a
    /// placeholder carrying the serialized action names; the real handlers
    /// must be re-attached with [`attach_handler`](Self::attach_handler). A
    /// resource serialized with endpoints but no handler actions is restored
    /// without a handler. Resources absent from `data` are kept.
    ///
    /// # Errors
    ///
    /// Returns [`RoutesError::InvalidMethod`](resource_routes_core::RoutesError::InvalidMethod)
    /// if any endpoint carries an unknown method tag. The registry is left
    /// untouched in that case.
    pub fn deserialize(&mut self, data: &ResourceCollectionJson) -> RoutesResult<()> {
        let mut restored = Vec::with_capacity(data.paths.len());
        for (name, serialized) in &data.paths {
            let extra = serialized
                .endpoints
                .values()
                .map(SerializedEndpoint::to_endpoint)
                .collect::<RoutesResult<Vec<_>>>()?;

            let handler = if serialized.handler.is_empty() && !serialized.endpoints.is_empty() {
                None
            } else {
                Some(ResourceModule::placeholders(serialized.handler.keys().cloned()))
            };
            restored.push((name.clone(), handler, extra));
        }

        self.global_path_prefix.clone_from(&data.global_path_prefix);
        for (name, handler, extra) in restored {
            let selector = ResourceModule::placeholders(extra.iter().map(ResourceEndpoint::name));
            self.register(name.clone(), Some(selector), extra);
            if let Some(resource) = self.resources.get_mut(&name) {
                resource.handler = handler;
            }
        }

        tracing::debug!(
            prefix = %self.global_path_prefix,
            resources = data.paths.len(),
            "restored resource collection"
        );
        Ok(())
    }

    /// Builds a registry from its plain-data form.
    pub fn from_serialized(data: &ResourceCollectionJson) -> RoutesResult<Self> {
        let mut collection = Self::default();
        collection.deserialize(data)?;
        Ok(collection)
    }

    /// Builds a registry from a JSON string produced by
    /// [`to_json_string`](Self::to_json_string).
    pub fn from_json_str(json: &str) -> RoutesResult<Self> {
        let data: ResourceCollectionJson = serde_json::from_str(json)?;
        Self::from_serialized(&data)
    }
}
