//! Terminal slot machine entry point.
mod app;
mod config;
mod input;
mod logging;
mod presentation;
mod view_model;

use anyhow::Result;
use app::SlotApp;
use config::ClientConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(&config.session_id)?;

    SlotApp::build(config)?.run().await
}
