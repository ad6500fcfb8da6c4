//! Terminal client entry point.
use anyhow::Result;
use client_frontend_cli::{CliConfig, CliFrontend, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    // Keep the guard alive so buffered log lines are flushed on exit.
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    CliFrontend::new(config).run()
}
