//! HTTP verbs an endpoint can answer to.

use std::fmt;
use std::str::FromStr;

use resource_routes_core::RoutesError;

/// The HTTP method of a [`ResourceEndpoint`](super::endpoint::ResourceEndpoint).
///
/// `All` is a wildcard used by endpoints that answer to every verb.
///
/// # Examples
///
/// ```
/// use resource_routes_http::urls::method::ActionMethod;
///
/// let method: ActionMethod = "PATCH".parse().unwrap();
/// assert_eq!(method, ActionMethod::Patch);
/// assert_eq!(method.as_str(), "PATCH");
/// assert!("patch".parse::<ActionMethod>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionMethod {
    /// Matches every method.
    All,
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `PATCH`
    Patch,
    /// `OPTIONS`
    Options,
    /// `HEAD`
    Head,
}

impl ActionMethod {
    /// Every method, in canonical order.
    pub const ALL_METHODS: [Self; 8] = [
        Self::All,
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Delete,
        Self::Patch,
        Self::Options,
        Self::Head,
    ];

    /// Returns the canonical upper-case tag (e.g. `"GET"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
        }
    }

    /// Returns `true` if a request made with `method` should be served by an
    /// endpoint declared with this verb.
    pub fn matches(self, method: &http::Method) -> bool {
        match self {
            Self::All => true,
            Self::Get => *method == http::Method::GET,
            Self::Post => *method == http::Method::POST,
            Self::Put => *method == http::Method::PUT,
            Self::Delete => *method == http::Method::DELETE,
            Self::Patch => *method == http::Method::PATCH,
            Self::Options => *method == http::Method::OPTIONS,
            Self::Head => *method == http::Method::HEAD,
        }
    }
}

impl fmt::Display for ActionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionMethod {
    type Err = RoutesError;

    /// Parses a canonical tag. Matching is case-sensitive.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL_METHODS
            .into_iter()
            .find(|method| method.as_str() == value)
            .ok_or_else(|| RoutesError::InvalidMethod(value.to_string()))
    }
}
