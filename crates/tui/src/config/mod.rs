use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// REST root, including the `/api/` prefix.
    pub base_url: String,
    /// Work on an in-memory ledger seeded with sample data.
    pub offline: bool,
    pub log_file: String,
    pub level: String,
    /// IANA zone used for "today" in offline mode.
    pub timezone: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000/api/".to_string(),
            offline: false,
            log_file: "budget_tracker_tui.log".to_string(),
            level: "info".to_string(),
            timezone: "UTC".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "budget_tracker_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL (e.g. http://127.0.0.1:5000/api/).
    #[arg(long)]
    base_url: Option<String>,
    /// Run without a server, on local sample data.
    #[arg(long)]
    offline: bool,
    /// Override the log file path.
    #[arg(long)]
    log_file: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(
        config::Environment::with_prefix("BUDGET_TRACKER_TUI").try_parsing(true),
    );
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if args.offline {
        settings.offline = true;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }
    if !settings.base_url.ends_with('/') {
        settings.base_url.push('/');
    }

    Ok(settings)
}
