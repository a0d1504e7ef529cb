//! The `path` command.
//!
//! Prints the path of one `(resource, action)` pair, like `PathHelpers::path_to`.

use resource_routes_core::{RoutesResult, Settings};
use resource_routes_http::PathHelpers;

use super::{file_arg, load_registry, required, target_args, Target};
use crate::command::ManagementCommand;

/// Generates a path from a serialized registry.
pub struct PathCommand;

impl ManagementCommand for PathCommand {
    fn name(&self) -> &'static str {
        "path"
    }

    fn help(&self) -> &'static str {
        "Generate the path of a resource action"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        target_args(cmd.arg(file_arg()))
    }

    fn handle(&self, matches: &clap::ArgMatches, _settings: &Settings) -> RoutesResult<String> {
        let resources = load_registry(required(matches, "file")?)?;
        let target = Target::from_matches(matches)?;
        PathHelpers::new(&resources).path_to(
            &target.resource,
            &target.action,
            target.args.clone(),
            target.query(),
        )
    }
}
