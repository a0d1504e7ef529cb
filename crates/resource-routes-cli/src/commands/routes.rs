//! The `routes` command.
//!
//! Lists every endpoint of a serialized registry as `METHOD  PATH  resource#action`.

use resource_routes_core::{RoutesError, RoutesResult, Settings};
use resource_routes_http::ResourceCollection;

use super::{file_arg, load_registry, required};
use crate::command::ManagementCommand;

/// Lists the endpoints of a registry.
pub struct RoutesCommand;

/// One row of the route listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLine {
    /// The endpoint method, e.g. `GET`.
    pub method: String,
    /// The prefixed path with placeholders left as-is.
    pub path: String,
    /// `resource#action`.
    pub target: String,
}

/// Collects route rows, sorted by resource then action.
///
/// When `only` is given, just that resource is listed.
///
/// # Errors
///
/// Returns [`RoutesError::ResourceNotFound`] when `only` names an unknown resource.
pub fn collect_routes<A>(
    resources: &ResourceCollection<A>,
    only: Option<&str>,
) -> RoutesResult<Vec<RouteLine>> {
    if let Some(name) = only {
        if !resources.contains(name) {
            return Err(RoutesError::ResourceNotFound(name.to_string()));
        }
    }

    let prefix = resources.global_path_prefix();
    let lines = resources
        .iter()
        .filter(|(name, _)| only.is_none_or(|wanted| wanted == *name))
        .flat_map(|(name, resource)| {
            resource.endpoints().values().map(move |endpoint| RouteLine {
                method: endpoint.method().to_string(),
                path: format!("{prefix}/{name}{}", endpoint.path()),
                target: format!("{name}#{}", endpoint.name()),
            })
        })
        .collect();
    Ok(lines)
}

/// Renders rows as aligned columns.
pub fn format_routes(lines: &[RouteLine]) -> String {
    let method_width = lines.iter().map(|l| l.method.len()).max().unwrap_or(0);
    let path_width = lines.iter().map(|l| l.path.len()).max().unwrap_or(0);
    lines
        .iter()
        .map(|l| {
            format!(
                "{:<method_width$}  {:<path_width$}  {}",
                l.method, l.path, l.target
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl ManagementCommand for RoutesCommand {
    fn name(&self) -> &'static str {
        "routes"
    }

    fn help(&self) -> &'static str {
        "List the endpoints of a serialized registry"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(file_arg()).arg(
            clap::Arg::new("resource")
                .long("resource")
                .short('r')
                .help("Only list this resource"),
        )
    }

    fn handle(&self, matches: &clap::ArgMatches, _settings: &Settings) -> RoutesResult<String> {
        let resources = load_registry(required(matches, "file")?)?;
        let only = matches.get_one::<String>("resource").map(String::as_str);
        let lines = collect_routes(&resources, only)?;
        Ok(format_routes(&lines))
    }
}
