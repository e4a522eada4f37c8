//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use doorman_core::config::{Config, paths};

#[derive(Parser)]
#[command(name = "doorman")]
#[command(version = "0.1")]
#[command(about = "Terminal front door for an identity provider")]
struct Cli {
    /// Override the identity provider base URL from config
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Override the identity provider API key from config
    #[arg(long, value_name = "KEY", env = "DOORMAN_API_KEY")]
    api_key: Option<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()
        .with_context(|| format!("Failed to load {}", paths::config_path().display()))?;
    if let Some(api_base) = cli.api_base {
        config.api_base = api_base;
    }
    if let Some(api_key) = cli.api_key {
        config.api_key = Some(api_key);
    }

    // Logging goes to a file; the TUI owns the terminal from here on.
    let _guard = doorman_core::logging::init()?;
    tracing::info!(api_base = %config.api_base, "starting doorman");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(doorman_tui::run_app(&config))
}
