//! Reverse path and URL generation for registered resources.
//!
//! [`PathHelpers`] borrows a [`ResourceCollection`] and turns a
//! `(resource, action)` pair into a concrete path such as `/api/users/42`,
//! optionally prefixed with a URL root and followed by a query string.
//!
//! # Examples
//!
//! ```
//! use resource_routes_http::path_args;
//! use resource_routes_http::urls::collection::ResourceCollection;
//! use resource_routes_http::urls::endpoint::ResourceEndpoint;
//! use resource_routes_http::urls::helpers::PathHelpers;
//! use resource_routes_http::urls::method::ActionMethod;
//! use resource_routes_http::urls::query::QueryParams;
//!
//! let mut resources: ResourceCollection = ResourceCollection::new("/api");
//! resources.register(
//!     "test",
//!     None,
//!     vec![ResourceEndpoint::new(ActionMethod::Get, "/:id/action/:detail", "actionWithDetail")],
//! );
//! let helpers = PathHelpers::new(&resources).with_url_root("http://example.com");
//!
//! assert_eq!(helpers.path_to("test", "index", (), None).unwrap(), "/api/test/");
//! assert_eq!(
//!     helpers.path_to("test", "actionWithDetail", path_args![1, "some_detail"], None).unwrap(),
//!     "/api/test/1/action/some_detail"
//! );
//! let query = QueryParams::from([("param1", "value1"), ("param2", "value2")]);
//! assert_eq!(
//!     helpers.url_to("test", "show", 1, Some(&query)).unwrap(),
//!     "http://example.com/api/test/1?param1=value1&param2=value2"
//! );
//! ```

use std::fmt::{self, Display};

use regex::Regex;

use resource_routes_core::{RoutesError, RoutesResult, Settings};

use super::collection::ResourceCollection;
use super::query::{build_query_string, QueryParams};
use super::template::fill_string_positional;

/// Positional arguments for path placeholders.
///
/// Converts from `()` (no arguments), a single displayable value, or a
/// sequence of displayable values. Use [`path_args!`](crate::path_args) to
/// mix value types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathArgs(Vec<String>);

impl PathArgs {
    /// No positional arguments.
    pub const fn none() -> Self {
        Self(Vec::new())
    }

    /// Appends an argument.
    pub fn push(&mut self, value: impl Display) {
        self.0.push(value.to_string());
    }

    /// Returns the arguments in order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builds [`PathArgs`] from values of mixed displayable types.
///
/// ```
/// use resource_routes_http::path_args;
///
/// let args = path_args![1, "some_detail"];
/// assert_eq!(args.as_slice(), ["1", "some_detail"]);
/// ```
#[macro_export]
macro_rules! path_args {
    ($($arg:expr),* $(,)?) => {
        $crate::urls::helpers::PathArgs::from(
            ::std::vec![$(::std::string::ToString::to_string(&$arg)),*]
        )
    };
}

impl From<()> for PathArgs {
    fn from((): ()) -> Self {
        Self::none()
    }
}

impl<T: Into<PathArgs>> From<Option<T>> for PathArgs {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::none, Into::into)
    }
}

impl<T: Display> From<Vec<T>> for PathArgs {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Display> From<&[T]> for PathArgs {
    fn from(values: &[T]) -> Self {
        values.iter().collect()
    }
}

impl<T: Display, const N: usize> From<[T; N]> for PathArgs {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Display> FromIterator<T> for PathArgs {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(|value| value.to_string()).collect())
    }
}

macro_rules! single_path_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for PathArgs {
                fn from(value: $ty) -> Self {
                    Self(vec![value.to_string()])
                }
            }
        )*
    };
}

single_path_arg!(
    &str, String, &String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64,
    u128, usize, f32, f64,
);

/// Generates paths and URLs for the resources of a [`ResourceCollection`].
pub struct PathHelpers<'a, A = ()> {
    resources: &'a ResourceCollection<A>,
    url_root: Option<String>,
}

impl<A> fmt::Debug for PathHelpers<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathHelpers")
            .field("global_path_prefix", &self.resources.global_path_prefix())
            .field("url_root", &self.url_root)
            .finish_non_exhaustive()
    }
}

impl<'a, A> PathHelpers<'a, A> {
    /// Creates helpers without a URL root; only paths can be generated.
    pub const fn new(resources: &'a ResourceCollection<A>) -> Self {
        Self {
            resources,
            url_root: None,
        }
    }

    /// Creates helpers using the configured URL root, if any.
    pub fn from_settings(resources: &'a ResourceCollection<A>, settings: &Settings) -> Self {
        Self {
            resources,
            url_root: settings.url_root.clone(),
        }
    }

    /// Sets the URL root (e.g. `http://example.com`) used by [`url_to`](Self::url_to).
    #[must_use]
    pub fn with_url_root(mut self, url_root: impl Into<String>) -> Self {
        self.url_root = Some(url_root.into());
        self
    }

    /// Returns the URL root, if configured.
    pub fn url_root(&self) -> Option<&str> {
        self.url_root.as_deref()
    }

    /// Returns the underlying registry.
    pub const fn resources(&self) -> &'a ResourceCollection<A> {
        self.resources
    }

    /// Returns a pattern matching every path under `resource`.
    ///
    /// The pattern is `^` + `{prefix}/` (when a prefix is set) + the resource
    /// name + `.*`. The name is used verbatim, not escaped, and the pattern
    /// does not check methods or template shape.
    pub fn regex_of(&self, resource: &str) -> RoutesResult<Regex> {
        if !self.resources.contains(resource) {
            return Err(RoutesError::ResourceNotFound(resource.to_string()));
        }

        let prefix = self.resources.global_path_prefix();
        let mut pattern = String::from("^");
        if !prefix.is_empty() {
            pattern.push_str(prefix);
            pattern.push('/');
        }
        pattern.push_str(resource);
        pattern.push_str(".*");

        Regex::new(&pattern).map_err(|e| RoutesError::InvalidPattern(format!("{pattern}: {e}")))
    }

    /// Returns the path to `action` on `resource`.
    ///
    /// Placeholder occurrences in `/{resource}{template}` are filled from
    /// `args` by position; occurrences without an argument stay as `:name`.
    /// The global prefix is prepended, and the encoded `query` appended after
    /// a `?` unless it encodes to nothing.
    ///
    /// # Errors
    ///
    /// Returns [`RoutesError::ResourceNotFound`] for an unknown resource and
    /// [`RoutesError::ActionNotFound`] for an action the resource does not serve.
    pub fn path_to(
        &self,
        resource: &str,
        action: &str,
        args: impl Into<PathArgs>,
        query: Option<&QueryParams>,
    ) -> RoutesResult<String> {
        let Some(registered) = self.resources.get(resource) else {
            return Err(RoutesError::ResourceNotFound(resource.to_string()));
        };
        let Some(endpoint) = registered.endpoint(action) else {
            return Err(RoutesError::ActionNotFound {
                resource: resource.to_string(),
                action: action.to_string(),
            });
        };

        let args = args.into();
        let raw = format!("/{resource}{}", endpoint.path());
        let mut path = fill_string_positional(&raw, args.as_slice());

        let prefix = self.resources.global_path_prefix();
        if !prefix.is_empty() {
            path.insert_str(0, prefix);
        }

        if let Some(query) = query {
            let query_string = build_query_string(query);
            if !query_string.is_empty() {
                path.push('?');
                path.push_str(&query_string);
            }
        }

        tracing::trace!(resource, action, path = %path, "generated path");
        Ok(path)
    }

    /// Returns the absolute URL to `action` on `resource`.
    ///
    /// # Errors
    ///
    /// Returns [`RoutesError::UrlRootMissing`] when no URL root is configured,
    /// otherwise the errors of [`path_to`](Self::path_to).
    pub fn url_to(
        &self,
        resource: &str,
        action: &str,
        args: impl Into<PathArgs>,
        query: Option<&QueryParams>,
    ) -> RoutesResult<String> {
        let url_root = self.url_root.as_deref().ok_or(RoutesError::UrlRootMissing)?;
        let path = self.path_to(resource, action, args, query)?;
        Ok(format!("{url_root}{path}"))
    }

    /// Binds `resource` and `action` for repeated [`path_to`](Self::path_to) calls.
    pub fn gen_path_to(&self, resource: impl Into<String>, action: impl Into<String>) -> PathGenerator<'_, 'a, A> {
        PathGenerator {
            helpers: self,
            resource: resource.into(),
            action: action.into(),
        }
    }

    /// Binds `resource` and `action` for repeated [`url_to`](Self::url_to) calls.
    pub fn gen_url_to(&self, resource: impl Into<String>, action: impl Into<String>) -> UrlGenerator<'_, 'a, A> {
        UrlGenerator {
            helpers: self,
            resource: resource.into(),
            action: action.into(),
        }
    }
}

/// A `(resource, action)` pair bound to [`PathHelpers::path_to`].
pub struct PathGenerator<'h, 'a, A = ()> {
    helpers: &'h PathHelpers<'a, A>,
    resource: String,
    action: String,
}

impl<A> PathGenerator<'_, '_, A> {
    /// Generates the path. See [`PathHelpers::path_to`].
    pub fn call(&self, args: impl Into<PathArgs>, query: Option<&QueryParams>) -> RoutesResult<String> {
        self.helpers.path_to(&self.resource, &self.action, args, query)
    }
}

/// A `(resource, action)` pair bound to [`PathHelpers::url_to`].
pub struct UrlGenerator<'h, 'a, A = ()> {
    helpers: &'h PathHelpers<'a, A>,
    resource: String,
    action: String,
}

impl<A> UrlGenerator<'_, '_, A> {
    /// Generates the URL. See [`PathHelpers::url_to`].
    pub fn call(&self, args: impl Into<PathArgs>, query: Option<&QueryParams>) -> RoutesResult<String> {
        self.helpers.url_to(&self.resource, &self.action, args, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::urls::collection::ResourceModule;
    use crate::urls::endpoint::ResourceEndpoint;
    use crate::urls::method::ActionMethod;

    fn collection(prefix: &str) -> ResourceCollection {
        let mut resources = ResourceCollection::new(prefix);
        resources.register(
            "test",
            Some(ResourceModule::placeholders(["index", "show", "actionWithDetail"])),
            vec![ResourceEndpoint::new(
                ActionMethod::Get,
                "/:id/action/:detail",
                "actionWithDetail",
            )],
        );
        resources
    }

    #[test]
    fn test_path_to_without_args() {
        let resources = collection("/api");
        let helpers = PathHelpers::new(&resources);
        assert_eq!(helpers.path_to("test", "index", (), None).unwrap(), "/api/test/");
    }

    #[test]
    fn test_path_to_single_arg() {
        let resources = collection("/api");
        let helpers = PathHelpers::new(&resources);
        assert_eq!(helpers.path_to("test", "show", 1, None).unwrap(), "/api/test/1");
        assert_eq!(helpers.path_to("test", "show", "abc", None).unwrap(), "/api/test/abc");
        assert_eq!(helpers.path_to("test", "show", 1.5, None).unwrap(), "/api/test/1.5");
        assert_eq!(helpers.path_to("test", "show", 2.25_f32, None).unwrap(), "/api/test/2.25");
    }

    #[test]
    fn test_path_to_multiple_args() {
        let resources = collection("/api");
        let helpers = PathHelpers::new(&resources);
        assert_eq!(
            helpers
                .path_to("test", "actionWithDetail", path_args![1, "some_detail"], None)
                .unwrap(),
            "/api/test/1/action/some_detail"
        );
    }

    #[test]
    fn test_path_to_missing_args_keep_placeholders() {
        let resources = collection("/api");
        let helpers = PathHelpers::new(&resources);
        assert_eq!(
            helpers.path_to("test", "actionWithDetail", 1, None).unwrap(),
            "/api/test/1/action/:detail"
        );
        assert_eq!(helpers.path_to("test", "show", (), None).unwrap(), "/api/test/:id");
        assert_eq!(
            helpers.path_to("test", "show", None::<u32>, None).unwrap(),
            "/api/test/:id"
        );
    }

    #[test]
    fn test_path_to_surplus_args_ignored() {
        let resources = collection("/api");
        let helpers = PathHelpers::new(&resources);
        assert_eq!(
            helpers.path_to("test", "show", vec![1, 2, 3], None).unwrap(),
            "/api/test/1"
        );
    }

    #[test]
    fn test_path_to_with_query() {
        let resources = collection("/api");
        let helpers = PathHelpers::new(&resources);
        let query = QueryParams::new().with("param1", "value1").with("param2", "value2");
        assert_eq!(
            helpers.path_to("test", "show", 1, Some(&query)).unwrap(),
            "/api/test/1?param1=value1&param2=value2"
        );
    }

    #[test]
    fn test_path_to_empty_query_adds_nothing() {
        let resources = collection("/api");
        let helpers = PathHelpers::new(&resources);
        assert_eq!(
            helpers.path_to("test", "show", 1, Some(&QueryParams::new())).unwrap(),
            "/api/test/1"
        );
    }

    #[test]
    fn test_path_to_without_prefix() {
        let resources = collection("");
        let helpers = PathHelpers::new(&resources);
        assert_eq!(helpers.path_to("test", "show", 5, None).unwrap(), "/test/5");
    }

    #[test]
    fn test_path_to_duplicate_placeholders_are_positional() {
        let mut resources: ResourceCollection = ResourceCollection::new("");
        resources.register(
            "files",
            None,
            vec![ResourceEndpoint::new(ActionMethod::Post, "/:id/copy/:id", "copy")],
        );
        let helpers = PathHelpers::new(&resources);
        assert_eq!(
            helpers.path_to("files", "copy", [3, 4], None).unwrap(),
            "/files/3/copy/4"
        );
        assert_eq!(
            helpers.path_to("files", "copy", 3, None).unwrap(),
            "/files/3/copy/:id"
        );
    }

    #[test]
    fn test_path_to_errors() {
        let resources = collection("/api");
        let helpers = PathHelpers::new(&resources);

        let err = helpers.path_to("not-found", "resource", (), None).unwrap_err();
        assert!(matches!(err, RoutesError::ResourceNotFound(ref name) if name == "not-found"));

        let err = helpers.path_to("test", "edit", 1, None).unwrap_err();
        assert!(matches!(
            err,
            RoutesError::ActionNotFound { ref resource, ref action }
                if resource == "test" && action == "edit"
        ));
    }

    #[test]
    fn test_url_to() {
        let resources = collection("/api");
        let helpers = PathHelpers::new(&resources).with_url_root("http://example.com");
        assert_eq!(
            helpers.url_to("test", "show", 1, None).unwrap(),
            "http://example.com/api/test/1"
        );
    }

    #[test]
    fn test_url_to_without_root() {
        let resources = collection("/api");
        let helpers = PathHelpers::new(&resources);
        let err = helpers.url_to("test", "show", 1, None).unwrap_err();
        assert!(matches!(err, RoutesError::UrlRootMissing));
    }

    #[test]
    fn test_url_to_root_checked_before_resource() {
        let resources = collection("/api");
        let helpers = PathHelpers::new(&resources);
        let err = helpers.url_to("missing", "show", 1, None).unwrap_err();
        assert!(matches!(err, RoutesError::UrlRootMissing));
    }

    #[test]
    fn test_generators() {
        let resources = collection("/api");
        let helpers = PathHelpers::new(&resources).with_url_root("https://example.org");

        let show_path = helpers.gen_path_to("test", "show");
        assert_eq!(show_path.call(7, None).unwrap(), "/api/test/7");
        assert_eq!(show_path.call(8, None).unwrap(), "/api/test/8");

        let show_url = helpers.gen_url_to("test", "show");
        assert_eq!(show_url.call(7, None).unwrap(), "https://example.org/api/test/7");

        let missing = helpers.gen_path_to("test", "edit");
        assert!(missing.call(1, None).is_err());
    }

    #[test]
    fn test_gen_url_to_without_root() {
        let resources = collection("/api");
        let helpers = PathHelpers::new(&resources);
        let generator = helpers.gen_url_to("test", "index");
        assert!(matches!(generator.call((), None), Err(RoutesError::UrlRootMissing)));
    }

    #[test]
    fn test_regex_of_with_prefix() {
        let resources = collection("/api");
        let helpers = PathHelpers::new(&resources);
        let regex = helpers.regex_of("test").unwrap();
        assert_eq!(regex.as_str(), "^/api/test.*");
        assert!(regex.is_match("/api/test/1/edit"));
        assert!(regex.is_match("/api/testing"));
        assert!(!regex.is_match("/test/1"));
    }

    #[test]
    fn test_regex_of_without_prefix() {
        let resources = collection("");
        let helpers = PathHelpers::new(&resources);
        let regex = helpers.regex_of("test").unwrap();
        assert_eq!(regex.as_str(), "^test.*");
        assert!(!regex.is_match("/test/1"));
    }

    #[test]
    fn test_regex_of_unknown_resource() {
        let resources = collection("/api");
        let helpers = PathHelpers::new(&resources);
        assert!(matches!(
            helpers.regex_of("missing"),
            Err(RoutesError::ResourceNotFound(_))
        ));
    }

    #[test]
    fn test_regex_of_invalid_pattern() {
        let mut resources: ResourceCollection = ResourceCollection::new("");
        resources.register("broken(", None, Vec::new());
        let helpers = PathHelpers::new(&resources);
        assert!(matches!(
            helpers.regex_of("broken("),
            Err(RoutesError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_from_settings() {
        let resources = collection("/api");
        let settings = Settings {
            url_root: Some("http://cfg.example.com".to_string()),
            ..Settings::default()
        };
        let helpers = PathHelpers::from_settings(&resources, &settings);
        assert_eq!(helpers.url_root(), Some("http://cfg.example.com"));
        assert_eq!(
            helpers.url_to("test", "index", (), None).unwrap(),
            "http://cfg.example.com/api/test/"
        );
    }

    #[test]
    fn test_path_args_conversions() {
        assert!(PathArgs::from(()).is_empty());
        assert_eq!(PathArgs::from(42_u64).as_slice(), ["42"]);
        assert_eq!(PathArgs::from(Some("x")).as_slice(), ["x"]);
        assert_eq!(PathArgs::from(&["a", "b"][..]).len(), 2);

        let mut args = PathArgs::none();
        args.push(1);
        args.push("two");
        assert_eq!(args, path_args![1, "two"]);
    }
}
