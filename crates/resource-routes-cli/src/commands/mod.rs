//! Built-in commands.
//!
//! Every command reads a registry previously written with
//! `ResourceCollection::to_json_string` and works on the restored,
//! handler-less copy. Each implements the
//! [`ManagementCommand`](crate::command::ManagementCommand) trait.

pub mod path;
pub mod regex;
pub mod routes;
pub mod url;

pub use path::PathCommand;
pub use regex::RegexCommand;
pub use routes::RoutesCommand;
pub use url::UrlCommand;

use std::path::Path;

use resource_routes_core::logging::registry_span;
use resource_routes_core::{RoutesError, RoutesResult};
use resource_routes_http::{PathArgs, QueryParams, ResourceCollection};

use crate::command::CommandRegistry;

/// Registers all built-in commands into the given registry.
pub fn register_builtin_commands(registry: &mut CommandRegistry) {
    registry.register(Box::new(RoutesCommand));
    registry.register(Box::new(PathCommand));
    registry.register(Box::new(UrlCommand));
    registry.register(Box::new(RegexCommand));
}

/// Reads a serialized registry from disk.
pub fn load_registry(path: impl AsRef<Path>) -> RoutesResult<ResourceCollection> {
    let path = path.as_ref();
    let span = registry_span(&path.display().to_string()).entered();
    let json = std::fs::read_to_string(path)?;
    let resources = ResourceCollection::from_json_str(&json)?;
    span.record("prefix", resources.global_path_prefix());
    tracing::debug!(resources = resources.len(), "loaded registry");
    Ok(resources)
}

/// Parses `key=value` pairs into query parameters.
///
/// A pair without `=` maps the key to an empty value; an empty key is an error.
pub fn parse_query<'a>(pairs: impl IntoIterator<Item = &'a str>) -> RoutesResult<QueryParams> {
    let mut params = QueryParams::new();
    for pair in pairs {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key.is_empty() {
            return Err(RoutesError::ConfigurationError(format!(
                "Invalid query parameter '{pair}': expected key=value"
            )));
        }
        params.insert(key, value);
    }
    Ok(params)
}

// ── Shared arguments ────────────────────────────────────────────────

pub(crate) fn file_arg() -> clap::Arg {
    clap::Arg::new("file")
        .required(true)
        .value_name("FILE")
        .help("Serialized registry (JSON)")
}

/// Adds the `<resource> <action> [args...] [--query k=v]...` arguments.
pub(crate) fn target_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(clap::Arg::new("resource").required(true).help("Resource name"))
        .arg(clap::Arg::new("action").required(true).help("Action name"))
        .arg(
            clap::Arg::new("args")
                .num_args(0..)
                .help("Placeholder values, in template order"),
        )
        .arg(
            clap::Arg::new("query")
                .long("query")
                .short('q')
                .value_name("KEY=VALUE")
                .action(clap::ArgAction::Append)
                .help("Query parameter (repeatable)"),
        )
}

/// The parsed `<resource> <action> [args...] [--query k=v]...` arguments.
pub(crate) struct Target {
    pub resource: String,
    pub action: String,
    pub args: PathArgs,
    pub query: QueryParams,
}

impl Target {
    pub(crate) fn from_matches(matches: &clap::ArgMatches) -> RoutesResult<Self> {
        let resource = required(matches, "resource")?;
        let action = required(matches, "action")?;
        let args = matches
            .get_many::<String>("args")
            .map(|values| values.collect::<PathArgs>())
            .unwrap_or_default();
        let query = parse_query(
            matches
                .get_many::<String>("query")
                .into_iter()
                .flatten()
                .map(String::as_str),
        )?;
        Ok(Self {
            resource,
            action,
            args,
            query,
        })
    }

    pub(crate) fn query(&self) -> Option<&QueryParams> {
        (!self.query.is_empty()).then_some(&self.query)
    }
}

pub(crate) fn required(matches: &clap::ArgMatches, id: &str) -> RoutesResult<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .ok_or_else(|| RoutesError::ConfigurationError(format!("Missing argument: {id}")))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::io::Write;

    use resource_routes_http::{ActionMethod, ResourceCollection, ResourceEndpoint, ResourceModule};
    use tempfile::NamedTempFile;

    /// Writes a small serialized registry to a temporary file.
    pub fn registry_file() -> NamedTempFile {
        let mut resources: ResourceCollection = ResourceCollection::new("/api");
        resources.register(
            "posts",
            Some(
                ResourceModule::new()
                    .with_action("index", ())
                    .with_action("show", ())
                    .with_action("comment", ()),
            ),
            vec![ResourceEndpoint::new(ActionMethod::Get, "/:id/comments/:comment", "comment")],
        );
        resources.register("users", None, Vec::new());

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(resources.to_json_string().unwrap().as_bytes()).unwrap();
        file
    }
}
