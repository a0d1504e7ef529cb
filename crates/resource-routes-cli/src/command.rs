//! Command framework for the resource-routes CLI.
//!
//! This module provides the [`ManagementCommand`] trait for defining CLI
//! subcommands and [`CommandRegistry`] for registering and dispatching them.
//!
//! ## Defining a Custom Command
//!
//! ```rust
//! use resource_routes_cli::command::ManagementCommand;
//! use resource_routes_core::{RoutesResult, Settings};
//!
//! struct VersionCommand;
//!
//! impl ManagementCommand for VersionCommand {
//!     fn name(&self) -> &'static str { "version" }
//!     fn help(&self) -> &'static str { "Print the version" }
//!
//!     fn handle(&self, _matches: &clap::ArgMatches, _settings: &Settings) -> RoutesResult<String> {
//!         Ok(env!("CARGO_PKG_VERSION").to_string())
//!     }
//! }
//! ```

use std::collections::HashMap;

use resource_routes_core::{RoutesError, RoutesResult, Settings};

/// A subcommand that can be registered and invoked through the CLI.
pub trait ManagementCommand: Send + Sync {
    /// Returns the name of this command (used to invoke it from the CLI).
    fn name(&self) -> &'static str;

    /// Returns a short help description for this command.
    fn help(&self) -> &'static str;

    /// Adds custom arguments to the clap command.
    ///
    /// The default implementation returns the command unchanged.
    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd
    }

    /// Executes the command, returning the text to print on success.
    fn handle(&self, matches: &clap::ArgMatches, settings: &Settings) -> RoutesResult<String>;
}

/// A registry of CLI commands, keyed by name.
pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn ManagementCommand>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Registers a command, replacing any command with the same name.
    pub fn register(&mut self, command: Box<dyn ManagementCommand>) {
        self.commands.insert(command.name(), command);
    }

    /// Returns the command with the given name, if registered.
    pub fn get(&self, name: &str) -> Option<&dyn ManagementCommand> {
        self.commands.get(name).map(AsRef::as_ref)
    }

    /// Returns a sorted list of all registered command names.
    pub fn list_commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Builds the top-level clap `Command` containing all registered subcommands.
    pub fn build_cli(&self) -> clap::Command {
        let mut app = clap::Command::new("resource-routes")
            .about("Inspect serialized resource registries and generate paths")
            .subcommand_required(true)
            .arg(
                clap::Arg::new("settings")
                    .long("settings")
                    .global(true)
                    .value_name("FILE")
                    .help("TOML settings file (environment variables still apply)"),
            );

        let mut entries: Vec<_> = self.commands.iter().collect();
        entries.sort_by_key(|(name, _)| **name);

        for (name, cmd) in entries {
            let subcmd = clap::Command::new(*name).about(cmd.help());
            app = app.subcommand(cmd.add_arguments(subcmd));
        }

        app
    }

    /// Dispatches to the subcommand selected in `matches`.
    pub fn execute(&self, matches: &clap::ArgMatches, settings: &Settings) -> RoutesResult<String> {
        let (name, sub_matches) = matches.subcommand().ok_or_else(|| {
            RoutesError::ConfigurationError("No subcommand specified".to_string())
        })?;

        let cmd = self.get(name).ok_or_else(|| {
            RoutesError::ConfigurationError(format!("Unknown command: {name}"))
        })?;

        tracing::debug!(command = name, "executing command");
        cmd.handle(sub_matches, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoCommand;

    impl ManagementCommand for EchoCommand {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn help(&self) -> &'static str {
            "Print the given word"
        }

        fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
            cmd.arg(clap::Arg::new("word").required(true))
        }

        fn handle(&self, matches: &clap::ArgMatches, _settings: &Settings) -> RoutesResult<String> {
            Ok(matches.get_one::<String>("word").cloned().unwrap_or_default())
        }
    }

    struct FailingCommand;

    impl ManagementCommand for FailingCommand {
        fn name(&self) -> &'static str {
            "fail"
        }

        fn help(&self) -> &'static str {
            "A command that always fails"
        }

        fn handle(&self, _matches: &clap::ArgMatches, _settings: &Settings) -> RoutesResult<String> {
            Err(RoutesError::UrlRootMissing)
        }
    }

    #[test]
    fn test_registry_new_is_empty() {
        let registry = CommandRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_register_and_list() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(FailingCommand));
        registry.register(Box::new(EchoCommand));
        registry.register(Box::new(EchoCommand));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.list_commands(), vec!["echo", "fail"]);
        assert_eq!(registry.get("echo").unwrap().help(), "Print the given word");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_execute_dispatches() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(EchoCommand));

        let matches = registry
            .build_cli()
            .try_get_matches_from(["resource-routes", "echo", "hello"])
            .unwrap();
        let output = registry.execute(&matches, &Settings::default()).unwrap();
        assert_eq!(output, "hello");
    }

    #[test]
    fn test_execute_failing_command() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(FailingCommand));

        let matches = registry
            .build_cli()
            .try_get_matches_from(["resource-routes", "fail"])
            .unwrap();
        let result = registry.execute(&matches, &Settings::default());
        assert!(matches!(result, Err(RoutesError::UrlRootMissing)));
    }

    #[test]
    fn test_global_settings_argument() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(EchoCommand));

        let matches = registry
            .build_cli()
            .try_get_matches_from(["resource-routes", "echo", "x", "--settings", "routes.toml"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("settings").map(String::as_str),
            Some("routes.toml")
        );
    }

    #[test]
    fn test_subcommand_required() {
        let registry = CommandRegistry::new();
        assert!(registry
            .build_cli()
            .try_get_matches_from(["resource-routes"])
            .is_err());
    }
}
