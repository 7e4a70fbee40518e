/// CLI argument definitions via clap derive.
use clap::{Parser, Subcommand, ValueEnum};

use crate::api::DEFAULT_BASE_URL;

/// ricky — query the Rick and Morty API from the CLI.
#[derive(Debug, Parser)]
#[command(
    name = "ricky",
    about = "Displays characters, locations and episodes of the Rick and Morty API",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format. Auto-detects: table when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Base URL of the API.
    #[arg(
        long,
        global = true,
        env = "RICKY_API_URL",
        value_name = "URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub api_url: String,

    /// Per-request timeout in seconds (default: wait indefinitely).
    #[arg(long, global = true, env = "RICKY_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log requests and timings to stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// JSON array or object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
    /// Aligned table with headers (human-readable).
    Table,
    /// Entity id only, one per line.
    Id,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Displays characters and their basic details.
    Characters(ListArgs),
    /// Displays locations and their basic details.
    Locations(ListArgs),
    /// Displays episodes and how many characters appear in each.
    Episodes(EpisodesArgs),
    /// The number of unique episodes that any character matching --filter appears in.
    ///
    /// For example --filter species=Robot displays the total number of unique
    /// episodes in which a character of the Robot species appears.
    Appearances(AppearancesArgs),
}

/// Arguments for `ricky characters` and `ricky locations`.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Filters the API response, for example --filter species=Robot.
    #[arg(long, value_name = "KEY=VALUE")]
    pub filter: Option<String>,

    /// Just display the total number of matching entries.
    #[arg(long)]
    pub count: bool,
}

/// Arguments for `ricky episodes`.
#[derive(Debug, Parser)]
pub struct EpisodesArgs {
    /// Just display the total number of episodes.
    #[arg(long)]
    pub count: bool,
}

/// Arguments for `ricky appearances`.
#[derive(Debug, Parser)]
pub struct AppearancesArgs {
    /// Character filter, for example --filter species=Robot. Required.
    #[arg(long, value_name = "KEY=VALUE")]
    pub filter: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_characters_with_filter_and_count() {
        let cli = Cli::parse_from(["ricky", "characters", "--filter", "species=Robot", "--count"]);
        match cli.command {
            Command::Characters(args) => {
                assert_eq!(args.filter.as_deref(), Some("species=Robot"));
                assert!(args.count);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "ricky",
            "locations",
            "--json",
            "--api-url",
            "http://localhost:9000/api",
            "--timeout",
            "5",
        ]);
        assert!(cli.json);
        assert_eq!(cli.api_url, "http://localhost:9000/api");
        assert_eq!(cli.timeout, Some(5));
    }

    #[test]
    fn test_appearances_filter_optional_at_parse_time() {
        let cli = Cli::parse_from(["ricky", "appearances"]);
        assert!(matches!(
            cli.command,
            Command::Appearances(AppearancesArgs { filter: None })
        ));
    }
}
