//! The `resource-routes` binary.

use std::process::ExitCode;

use resource_routes_cli::{register_builtin_commands, CommandRegistry};
use resource_routes_core::logging::setup_logging;
use resource_routes_core::{settings_loader, RoutesResult, Settings};

fn load_settings(matches: &clap::ArgMatches) -> RoutesResult<Settings> {
    match matches.get_one::<String>("settings") {
        Some(path) => settings_loader::from_toml_file_with_env(path),
        None => Ok(settings_loader::from_env()),
    }
}

fn main() -> ExitCode {
    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry);
    let matches = registry.build_cli().get_matches();

    let result = load_settings(&matches).and_then(|settings| {
        setup_logging(&settings);
        registry.execute(&matches, &settings)
    });

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error[{}]: {e}", e.kind());
            ExitCode::FAILURE
        }
    }
}
