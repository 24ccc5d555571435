//! Jantarada - restaurant directory
//!
//! Fetches the restaurant list from Airtable into a local snapshot, then
//! lists or browses it with delivery, staff-pick, offering and place filters.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use jantarada::{
    AirtableSource, Cli, Command, Config, FilterState, Language, Route, Snapshot, TuiApp, content,
    detect_language, init_locale, render_list, should_run_interactive, tui::print_list,
};
use jantarada::cli::ListArgs;
use rust_i18n::t;
use std::path::{Path, PathBuf};
use tracing::{Level, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// Initialize i18n for this binary
rust_i18n::i18n!("locales", fallback = "en-GB");

/// Config file looked up by name when none is given
const DEFAULT_CONFIG: &str = "jantarada";

// CLI Output Module
mod cli_output {
    //! Coloured command line output

    use crossterm::{
        ExecutableCommand,
        style::{Color, Print, Stylize, style},
    };
    use std::io::stdout;

    /// CLI theme colours
    pub struct CliTheme;

    impl CliTheme {
        pub const SUCCESS: Color = Color::Green;
        pub const WARNING: Color = Color::Yellow;
        pub const ERROR: Color = Color::Red;
        pub const HINT: Color = Color::DarkGrey;
        pub const ACCENT: Color = Color::Cyan;
    }

    pub fn print_separator() {
        let _ = stdout().execute(Print(&format!("{}\n", "─".repeat(60))));
    }

    pub fn print_success(msg: &str) {
        let _ = stdout().execute(Print(style("✓ ").with(CliTheme::SUCCESS).bold()));
        let _ = stdout().execute(Print(format!("{}\n", msg)));
    }

    /// Warnings go to stderr so `--json` output stays clean
    pub fn print_warning(msg: &str) {
        let mut err = std::io::stderr();
        let _ = err.execute(Print(style("⚠ ").with(CliTheme::WARNING).bold()));
        let _ = err.execute(Print(format!("{}\n", msg)));
    }

    pub fn print_error(msg: &str) {
        let mut err = std::io::stderr();
        let _ = err.execute(Print(style("✗ ").with(CliTheme::ERROR).bold()));
        let _ = err.execute(Print(format!("{}\n", msg)));
    }

    pub fn print_key_value(key: &str, value: &str) {
        let _ = stdout().execute(Print("  "));
        let _ = stdout().execute(Print(style(key).with(CliTheme::HINT)));
        let _ = stdout().execute(Print(": "));
        let _ = stdout().execute(Print(style(value).bold()));
        let _ = stdout().execute(Print("\n"));
    }

    pub fn print_log_path(label: &str, path: &str) {
        let _ = stdout().execute(Print(style("  📁 ").with(CliTheme::ACCENT)));
        let _ = stdout().execute(Print(style(format!("{label}: ")).with(CliTheme::HINT)));
        let _ = stdout().execute(Print(format!("{}\n", path)));
    }
}

fn main() -> Result<()> {
    if should_run_interactive() {
        return run_interactive_mode();
    }

    run_cli_mode()
}

/// Browse the default snapshot with the Ratatui TUI
fn run_interactive_mode() -> Result<()> {
    let exe_dir = get_executable_dir()?;
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = exe_dir.join("Log").join(format!("Interactive_{}.log", timestamp));

    let _guard = setup_file_only_logging(&log_path)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Jantarada starting in interactive mode"
    );

    let default_path = resolve_config_path(&exe_dir, Path::new(DEFAULT_CONFIG));
    let config = if default_path.exists() {
        info!(config_file = %default_path.display(), "Loading configuration from file");
        Config::load_from_file(&default_path)?
    } else {
        Config::default()
    };

    let language = config.language.unwrap_or_else(detect_language);
    browse(&config, language, Route::List)?;

    info!(log_file = %log_path.display(), "Interactive session complete");
    Ok(())
}

fn run_cli_mode() -> Result<()> {
    let cli = Cli::parse();
    let exe_dir = get_executable_dir()?;
    let log_path = get_log_path(&exe_dir, &cli);
    let _guard = setup_logging(&cli, &log_path)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        command = cli.command_name(),
        "Jantarada starting"
    );

    let config = load_config(&cli, &exe_dir)?;
    if cli.verbose {
        info!(?config, "Configuration loaded");
    }

    // --lang, then the config file, then the system locale
    let language = config.language.unwrap_or_else(detect_language);
    init_locale(language);
    let locale = language.tag();

    let outcome = match &cli.command {
        Command::Fetch(_) => validate_config(&config, locale).and_then(|_| fetch(&config, locale)),
        Command::List(args) => list(&config, args, language),
        Command::Browse { page, .. } => browse(&config, language, *page),
        Command::SampleConfig => {
            print!("{}", Config::sample_config());
            Ok(())
        }
    };

    if let Err(e) = outcome {
        error!(error = %e, "Command failed");
        cli_output::print_error(&format!("{e:#}"));
        // Flush the file log before exiting
        drop(_guard);
        std::process::exit(1);
    }

    if matches!(cli.command, Command::Fetch(_)) {
        cli_output::print_log_path(
            &t!("log_file", locale = locale),
            &log_path.display().to_string(),
        );
    }
    info!(log_file = %log_path.display(), "Log file location");
    Ok(())
}

/// Download all displayable records and write the snapshot
fn fetch(config: &Config, locale: &str) -> Result<()> {
    use cli_output::*;

    let source = AirtableSource::new(config.airtable.clone())?;
    let snapshot = Snapshot::fetch(&source)?;
    snapshot.save(&config.snapshot)?;

    print_separator();
    print_success(&t!(
        "cli_fetch_complete",
        locale = locale,
        count = snapshot.restaurants.len()
    ));
    print_key_value(
        &t!("cli_snapshot_saved", locale = locale),
        &config.snapshot.display().to_string(),
    );
    print_separator();
    Ok(())
}

/// Print the filtered list as text or JSON
fn list(config: &Config, args: &ListArgs, language: Language) -> Result<()> {
    let snapshot = Snapshot::load(&config.snapshot)?;
    let list_content = &content(language).list;
    let locale = language.tag();

    for tag in args.tags.iter().filter(|tag| !list_content.knows_tag(tag)) {
        warn!(tag = %tag, "Unknown tag");
        cli_output::print_warning(&format!("{} {}", t!("cli_unknown_tag", locale = locale), tag));
    }

    let filter = FilterState::with_selection(args.delivery, args.staff_pick, &args.tags);
    let items = render_list(&snapshot.restaurants, &filter, list_content);
    info!(
        shown = items.len(),
        total = snapshot.restaurants.len(),
        ?filter,
        "List rendered"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print_list(&items, snapshot.restaurants.len(), locale);
    }
    Ok(())
}

/// Open the interactive browser on the configured snapshot
///
/// A missing or unreadable snapshot still opens the browser, which then
/// shows its empty-data placeholder.
fn browse(config: &Config, language: Language, start: Route) -> Result<()> {
    init_locale(language);
    let records = match Snapshot::load(&config.snapshot) {
        Ok(snapshot) => {
            info!(
                count = snapshot.restaurants.len(),
                fetched_at = %snapshot.fetched_at,
                "Snapshot loaded"
            );
            snapshot.restaurants
        }
        Err(e) => {
            warn!(error = %e, "No snapshot, starting with an empty list");
            Vec::new()
        }
    };

    let mut app = TuiApp::new(records, language, start)?;
    app.run()?;
    Ok(())
}

/// Get the directory where the executable is located
fn get_executable_dir() -> Result<PathBuf> {
    let exe_path = std::env::current_exe()?;
    Ok(exe_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Log file path: per config name when one is given, else per command
fn get_log_path(exe_dir: &Path, cli: &Cli) -> PathBuf {
    let log_dir = exe_dir.join("Log");
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");

    if let Some(config_name) = cli.config_name() {
        let log_filename = format!("{}_{}.log", config_name, timestamp);
        log_dir.join(&config_name).join(log_filename)
    } else {
        let log_filename = format!("{}_{}.log", cli.command_name(), timestamp);
        log_dir.join(log_filename)
    }
}

/// Resolve config path - supports shorthand syntax
fn resolve_config_path(exe_dir: &Path, config_path: &Path) -> PathBuf {
    if config_path.exists() {
        return config_path.to_path_buf();
    }

    let with_extension = if config_path.extension().is_none() {
        config_path.with_extension("toml")
    } else {
        config_path.to_path_buf()
    };

    if with_extension.exists() {
        return with_extension;
    }

    let filename = config_path.file_name().unwrap_or(config_path.as_os_str());
    let mut in_config_dir = exe_dir.join("Config").join(filename);
    if in_config_dir.extension().is_none() {
        in_config_dir = in_config_dir.with_extension("toml");
    }

    if in_config_dir.exists() {
        return in_config_dir;
    }

    config_path.to_path_buf()
}

/// Load configuration from file, then apply command line overrides
fn load_config(cli: &Cli, exe_dir: &Path) -> Result<Config> {
    let config = if let Some(ref config_path) = cli.config {
        let resolved_path = resolve_config_path(exe_dir, config_path);
        info!(config_file = %resolved_path.display(), "Loading configuration from file");
        let file_config = Config::load_from_file(&resolved_path)?;
        cli.merge_with_config(file_config)
    } else {
        cli.to_config()
    };

    Ok(config)
}

/// Validate configuration before fetching
fn validate_config(config: &Config, locale: &str) -> Result<()> {
    let page_size = config.airtable.page_size;
    if !(1..=100).contains(&page_size) {
        anyhow::bail!(
            "{}",
            t!("cli_invalid_page_size", locale = locale, size = page_size)
        );
    }
    if config.airtable.max_records == 0 {
        anyhow::bail!("{}", t!("cli_invalid_max_records", locale = locale));
    }
    Ok(())
}

/// Setup logging for CLI mode (file + console)
fn setup_logging(cli: &Cli, log_path: &Path) -> Result<Option<WorkerGuard>> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let subscriber = tracing_subscriber::registry().with(env_filter);

    // The browser owns the screen, so it only logs to file
    let console = !matches!(cli.command, Command::Browse { .. });

    if cli.json_log {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .with(console.then(|| fmt::layer().with_writer(std::io::stderr)))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .with(console.then(|| fmt::layer().with_writer(std::io::stderr)))
            .init();
    }

    Ok(Some(guard))
}

/// Setup logging for interactive mode (file only, no console)
fn setup_file_only_logging(log_path: &Path) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    Ok(Some(guard))
}
