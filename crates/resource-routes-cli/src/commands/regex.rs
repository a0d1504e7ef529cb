//! The `regex` command.

use resource_routes_core::{RoutesResult, Settings};
use resource_routes_http::PathHelpers;

use super::{file_arg, load_registry, required};
use crate::command::ManagementCommand;

/// Prints the pattern matching every path under a resource.
pub struct RegexCommand;

impl ManagementCommand for RegexCommand {
    fn name(&self) -> &'static str {
        "regex"
    }

    fn help(&self) -> &'static str {
        "Print the pattern matching every path of a resource"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(file_arg())
            .arg(clap::Arg::new("resource").required(true).help("Resource name"))
    }

    fn handle(&self, matches: &clap::ArgMatches, _settings: &Settings) -> RoutesResult<String> {
        let resources = load_registry(required(matches, "file")?)?;
        let resource = required(matches, "resource")?;
        let pattern = PathHelpers::new(&resources).regex_of(&resource)?;
        Ok(pattern.as_str().to_string())
    }
}
