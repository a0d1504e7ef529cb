//! The `url` command.
//!
//! Prints the absolute URL of one `(resource, action)` pair. The root comes
//! from `--root`, falling back to the configured `url_root`.

use resource_routes_core::{RoutesResult, Settings};
use resource_routes_http::PathHelpers;

use super::{file_arg, load_registry, required, target_args, Target};
use crate::command::ManagementCommand;

/// Generates an absolute URL from a serialized registry.
pub struct UrlCommand;

impl ManagementCommand for UrlCommand {
    fn name(&self) -> &'static str {
        "url"
    }

    fn help(&self) -> &'static str {
        "Generate the absolute URL of a resource action"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        target_args(
            cmd.arg(file_arg()).arg(
                clap::Arg::new("root")
                    .long("root")
                    .value_name("URL")
                    .help("URL root, e.g. https://example.com (defaults to settings.url_root)"),
            ),
        )
    }

    fn handle(&self, matches: &clap::ArgMatches, settings: &Settings) -> RoutesResult<String> {
        let resources = load_registry(required(matches, "file")?)?;
        let target = Target::from_matches(matches)?;

        let mut helpers = PathHelpers::from_settings(&resources, settings);
        if let Some(root) = matches.get_one::<String>("root") {
            helpers = helpers.with_url_root(root.clone());
        }

        helpers.url_to(
            &target.resource,
            &target.action,
            target.args.clone(),
            target.query(),
        )
    }
}
