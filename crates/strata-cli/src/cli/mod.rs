//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "strata",
    bin_name = "strata",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Layered Spring/DDD source stubs from a kind and a name",
    long_about = "Strata creates the directory skeleton of a layered project and \
                  places Java stubs (controllers, services, entities, ...) where \
                  the layering conventions say they belong.",
    after_help = "EXAMPLES:\n\
        \x20 strata init\n\
        \x20 strata create service createOrderCommand\n\
        \x20 strata create entity Order\n\
        \x20 strata create exception-advice Global\n\
        \x20 strata kinds",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the bootstrap directory tree.
    #[command(
        about = "Create the layered directory skeleton",
        after_help = "EXAMPLES:\n\
            \x20 strata init\n\
            \x20 strata -C ./my-service init"
    )]
    Init,

    /// Generate one artifact.
    #[command(
        visible_alias = "c",
        about = "Generate an artifact stub",
        after_help = "EXAMPLES:\n\
            \x20 strata create controller order\n\
            \x20 strata create service getOrderQuery\n\
            \x20 strata create facade createOrderCommand\n\
            \x20 strata create vo money --dry-run"
    )]
    Create(CreateArgs),

    /// List the artifact catalog.
    #[command(
        visible_alias = "ls",
        about = "List artifact kinds and where they are placed",
        after_help = "EXAMPLES:\n\
            \x20 strata kinds\n\
            \x20 strata kinds --format json"
    )]
    Kinds(KindsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strata completions bash > ~/.local/share/bash-completion/completions/strata\n\
            \x20 strata completions zsh  > ~/.zfunc/_strata\n\
            \x20 strata completions fish > ~/.config/fish/completions/strata.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the loaded configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 strata config get output.format\n\
            \x20 strata config list\n\
            \x20 strata config path"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `strata create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Artifact kind.  Validated by the core so an unknown kind gets the
    /// catalog listed in its suggestions.
    #[arg(value_name = "KIND", help = "Artifact kind (see `strata kinds`)")]
    pub kind: String,

    /// Artifact name, usually camelCase (e.g. `createOrderCommand`).
    #[arg(value_name = "NAME", help = "Artifact name")]
    pub name: String,

    /// Preview what would be written without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── kinds ─────────────────────────────────────────────────────────────────────

/// Arguments for `strata kinds`.
#[derive(Debug, Args)]
pub struct KindsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: KindsFormat,
}

/// Output format for the `kinds` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindsFormat {
    /// Human-readable table.
    Table,
    /// One kind per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `strata completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `strata config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_create_command() {
        let cli = Cli::parse_from(["strata", "create", "service", "createOrderCommand"]);
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.kind, "service");
                assert_eq!(args.name, "createOrderCommand");
                assert!(!args.dry_run);
            }
            other => panic!("expected Create, got {other:?}"),
        }
    }

    #[test]
    fn create_alias() {
        let cli = Cli::parse_from(["strata", "c", "entity", "Order", "--dry-run"]);
        assert!(matches!(cli.command, Commands::Create(CreateArgs { dry_run: true, .. })));
    }

    #[test]
    fn unknown_kind_is_not_rejected_by_clap() {
        // The core reports unknown kinds with exit code 3, not clap.
        assert!(Cli::try_parse_from(["strata", "create", "foo", "Bar"]).is_ok());
    }

    #[test]
    fn create_requires_name() {
        assert!(Cli::try_parse_from(["strata", "create", "entity"]).is_err());
    }

    #[test]
    fn root_flag_is_global() {
        let cli = Cli::parse_from(["strata", "init", "-C", "/tmp/project"]);
        assert_eq!(cli.global.root.as_deref(), Some(std::path::Path::new("/tmp/project")));
        assert!(matches!(cli.command, Commands::Init));
    }

    #[test]
    fn kinds_format_defaults_to_table() {
        let cli = Cli::parse_from(["strata", "kinds"]);
        match cli.command {
            Commands::Kinds(args) => assert_eq!(args.format, KindsFormat::Table),
            other => panic!("expected Kinds, got {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["strata", "--quiet", "--verbose", "kinds"]);
        assert!(result.is_err());
    }
}
