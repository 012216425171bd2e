//! Wayback Search desktop entry point.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use wayback_search::{
    error::Result, gui, models::Config, services::HttpArchiveClient, view::SearchView,
};

/// Search the Wayback Machine for archived snapshots of a URL
#[derive(Parser, Debug)]
#[command(name = "wayback-search", version, about)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging at the given default level.
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The level lives in the config, so a load failure is logged afterwards.
    let (config, load_error) = Config::load_or_default(&cli.config);
    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    init_logging(level);

    if let Some(e) = load_error {
        log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            cli.config.display(),
            e
        );
    }
    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let client = Arc::new(HttpArchiveClient::new(&config.http)?);
    let view = SearchView::new(config.endpoints.clone());

    log::info!("Opening search window");
    gui::run(view, client, runtime.handle().clone())
}
