//! Binary entry point: resolve the data directory, start file logging, load
//! the course store, and drive the Ratatui event loop until the user exits.
use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use course_catalog::{db, run_app, App, Catalog, Config, CourseStore};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to resolve data directory")?;
    config
        .ensure_data_dir()
        .context("failed to create data directory")?;
    init_logging(&config)?;

    let conn = db::open_database(&config.db_path).context("failed to open local storage")?;
    let store = CourseStore::load(conn, config.settings.storage.slot.clone())
        .context("failed to load courses")?;
    tracing::info!(path = %config.db_path.display(), courses = store.len(), "catalog opened");

    let mut app = App::new(Catalog::new(store));
    run_app(&mut app)
}

/// Send `tracing` output to the log file. Anything written to the terminal
/// would tear through the alternate screen.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)
        .context("failed to open log file")?;
    let filter = EnvFilter::try_new(config.log_filter()).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
