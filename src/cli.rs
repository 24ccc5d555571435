//! CLI argument parsing with clap

use crate::config::Config;
use crate::i18n::Language;
use crate::nav::Route;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Jantarada - restaurant directory
///
/// Fetches the restaurant list from Airtable, then filters and browses it
/// from the terminal in Portuguese or English.
#[derive(Parser, Debug)]
#[command(name = "jantarada")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file (TOML format)
    ///
    /// CLI arguments override config file settings.
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Site language (pt-PT or en-GB)
    #[arg(short, long, global = true, value_parser = parse_language)]
    pub lang: Option<Language>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output log format as JSON
    #[arg(long, global = true)]
    pub json_log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch all displayable restaurants from Airtable into the snapshot
    Fetch(FetchArgs),

    /// Print the filtered restaurant list
    List(ListArgs),

    /// Browse the restaurant list interactively
    Browse {
        /// Snapshot file to read
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        /// Page to open first, e.g. /about
        #[arg(long, value_name = "PATH", default_value = "/list", value_parser = parse_route)]
        page: Route,
    },

    /// Print a sample configuration file
    SampleConfig,
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Snapshot file to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Airtable API key
    #[arg(long, env = "AIRTABLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Airtable base identifier
    #[arg(long, env = "AIRTABLE_BASE_KEY")]
    pub base_key: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Snapshot file to read
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Only restaurants that deliver
    #[arg(short, long)]
    pub delivery: bool,

    /// Only staff picks
    #[arg(short = 'p', long)]
    pub staff_pick: bool,

    /// Require an offering or place tag (repeatable; all must match)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Print the rendered items as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_route(s: &str) -> Result<Route, String> {
    Route::from_path(s).ok_or_else(|| format!("unknown page '{s}'"))
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse().map_err(|e: crate::error::Error| e.to_string())
}

impl Cli {
    /// Get config file name (without extension) for log naming
    pub fn config_name(&self) -> Option<String> {
        self.config.as_ref().and_then(|p| {
            p.file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string())
        })
    }

    /// Short command name for log naming
    pub fn command_name(&self) -> &'static str {
        match self.command {
            Command::Fetch(_) => "Fetch",
            Command::List(_) => "List",
            Command::Browse { .. } => "Browse",
            Command::SampleConfig => "SampleConfig",
        }
    }

    /// Merge CLI arguments with config from file
    /// CLI arguments take precedence over config file settings
    pub fn merge_with_config(&self, mut config: Config) -> Config {
        if let Some(lang) = self.lang {
            config.language = Some(lang);
        }

        match &self.command {
            Command::Fetch(args) => {
                if let Some(ref output) = args.output {
                    config.snapshot = output.clone();
                }
                if let Some(ref key) = args.api_key {
                    config.airtable.api_key = Some(key.clone());
                }
                if let Some(ref key) = args.base_key {
                    config.airtable.base_key = Some(key.clone());
                }
            }
            Command::List(ListArgs {
                snapshot: Some(snapshot),
                ..
            })
            | Command::Browse {
                snapshot: Some(snapshot),
                ..
            } => {
                config.snapshot = snapshot.clone();
            }
            _ => {}
        }

        config
    }

    /// Convert CLI arguments to Config (when no config file is used)
    pub fn to_config(&self) -> Config {
        self.merge_with_config(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let cli = Cli::parse_from([
            "jantarada", "list", "--delivery", "-t", "Food", "--tag", "Porto", "--lang", "en-GB",
        ]);
        assert_eq!(cli.lang, Some(Language::English));
        match cli.command {
            Command::List(args) => {
                assert!(args.delivery);
                assert!(!args.staff_pick);
                assert_eq!(args.tags, ["Food", "Porto"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_browse_start_page() {
        let cli = Cli::parse_from(["jantarada", "browse", "--page", "/about"]);
        assert!(matches!(cli.command, Command::Browse { page: Route::About, .. }));

        let cli = Cli::parse_from(["jantarada", "browse"]);
        assert!(matches!(cli.command, Command::Browse { page: Route::List, .. }));

        assert!(Cli::try_parse_from(["jantarada", "browse", "--page", "/menu"]).is_err());
    }

    #[test]
    fn test_reject_unknown_language() {
        assert!(Cli::try_parse_from(["jantarada", "--lang", "fr-FR", "list"]).is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "jantarada", "-C", "Config/site.toml", "fetch", "-o", "out.json", "--base-key", "appCli",
        ]);
        let mut file_config = Config::default();
        file_config.airtable.base_key = Some("appFile".into());
        file_config.language = Some(Language::English);

        let config = cli.merge_with_config(file_config);
        assert_eq!(config.snapshot, PathBuf::from("out.json"));
        assert_eq!(config.airtable.base_key.as_deref(), Some("appCli"));
        assert_eq!(config.language, Some(Language::English));
        assert_eq!(cli.config_name().as_deref(), Some("site"));
        assert_eq!(cli.command_name(), "Fetch");
    }

    #[test]
    fn test_browse_snapshot_override() {
        let cli = Cli::parse_from(["jantarada", "browse", "-s", "snap.json"]);
        assert_eq!(cli.to_config().snapshot, PathBuf::from("snap.json"));
    }
}
