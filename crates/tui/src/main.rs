mod app;
mod client;
mod config;
mod error;
mod source;
mod ui;

use std::{fs::OpenOptions, sync::Mutex};

use crate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;

    // stdout belongs to the terminal UI, so logs go to a file
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "budget_tracker_tui={level},engine={level}",
            level = config.level
        ))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    tracing::info!(
        offline = config.offline,
        base_url = %config.base_url,
        "starting dashboard"
    );

    let mut app = app::App::new(config)?;
    app.run().await?;
    Ok(())
}
