//! Dashboard composer - CLI entry point
//!
//! This binary inspects the saved-layouts slot and manages the TOML
//! configuration file. The engines themselves are library code consumed
//! by a host UI; the CLI only reads what the host persisted.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use dashboard_composer::config::{default, loader::ConfigLoader, schema::Config, xdg};
use dashboard_composer::store::{JsonFileStore, LayoutStore};

/// Dashboard composer core CLI
#[derive(Parser)]
#[command(name = "dashc")]
#[command(version, about = "Dashboard composer core CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the dashc CLI
#[derive(Subcommand)]
enum Commands {
    /// Inspect saved dashboard layouts
    Layouts {
        #[command(subcommand)]
        action: LayoutsAction,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `layouts` subcommand.
#[derive(Subcommand)]
enum LayoutsAction {
    /// List all saved layouts
    List {
        /// Override the layout slot path (default: [store] config or data dir)
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Print one saved layout as JSON
    Show {
        /// Layout id to print
        id: String,
        /// Override the layout slot path (default: [store] config or data dir)
        #[arg(long)]
        store: Option<PathBuf>,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Layouts { action } => {
            let config = match ConfigLoader::load_default() {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Config error: {e}");
                    return ExitCode::FAILURE;
                }
            };
            init_logging(&config);
            match action {
                LayoutsAction::List { store } => run_layouts_list(&config, store.as_deref()),
                LayoutsAction::Show { id, store } => {
                    run_layouts_show(&config, &id, store.as_deref())
                }
            }
        }
        Commands::Config { action } => {
            let result = match action {
                ConfigAction::Init { force } => match default::create_default_config(force) {
                    Ok(path) => {
                        println!("Created configuration at {}", path.display());
                        Ok(())
                    }
                    Err(e) => Err(e),
                },
                ConfigAction::Path => {
                    println!("{}", xdg::config_path().display());
                    Ok(())
                }
                ConfigAction::Validate => match ConfigLoader::load_default() {
                    Ok(config) => {
                        println!("Configuration is valid");
                        println!("{config:#?}");
                        Ok(())
                    }
                    Err(e) => Err(e),
                },
            };
            if let Err(e) = result {
                eprintln!("Config error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
    }
}

/// Initializes the tracing subscriber from `RUST_LOG`, falling back to the
/// configured `[log]` level. Logs go to the configured file, or stderr
/// when no file is set or it cannot be opened.
fn init_logging(config: &Config) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log.level.as_filter_str()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if !config.log.file.is_empty() {
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log.file)
        {
            Ok(file) => {
                builder.with_writer(std::sync::Mutex::new(file)).init();
                return;
            }
            Err(e) => {
                eprintln!("Failed to open log file {:?}: {e}", config.log.file);
            }
        }
    }
    builder.with_writer(std::io::stderr).init();
}

/// Opens the layout slot, preferring the CLI override over the config.
fn open_store(config: &Config, override_path: Option<&std::path::Path>) -> JsonFileStore {
    match override_path {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::new(config.store.resolve_path()),
    }
}

/// Lists every saved layout: id, name, widget count, creation time.
fn run_layouts_list(config: &Config, override_path: Option<&std::path::Path>) -> ExitCode {
    let store = open_store(config, override_path);
    let layouts = match store.load_all() {
        Ok(layouts) => layouts,
        Err(e) => {
            eprintln!("Store error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if layouts.is_empty() {
        println!("No saved layouts in {}", store.path().display());
        return ExitCode::SUCCESS;
    }

    println!("Saved layouts ({}):", layouts.len());
    for layout in &layouts {
        println!(
            "  {}  {:<24}  {:>2} widgets  {}",
            layout.id,
            format!("{:?}", layout.name),
            layout.widgets.len(),
            layout.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
        );
    }
    ExitCode::SUCCESS
}

/// Prints one saved layout as pretty JSON.
fn run_layouts_show(
    config: &Config,
    id: &str,
    override_path: Option<&std::path::Path>,
) -> ExitCode {
    let store = open_store(config, override_path);
    let layouts = match store.load_all() {
        Ok(layouts) => layouts,
        Err(e) => {
            eprintln!("Store error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(layout) = layouts.iter().find(|l| l.id == id) else {
        eprintln!("No layout with id {id:?} in {}", store.path().display());
        return ExitCode::FAILURE;
    };

    match serde_json::to_string_pretty(layout) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to encode layout: {e}");
            ExitCode::FAILURE
        }
    }
}
