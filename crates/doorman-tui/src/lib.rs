//! Full-screen TUI for Doorman.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use doorman_core::auth::IdentityClient;
use doorman_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive login flow.
pub async fn run_app(config: &Config) -> Result<()> {
    // The login flow requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!("Doorman requires a terminal.");
    }

    let client = IdentityClient::new(config)?;
    let mut runtime = TuiRuntime::new(client)?;
    runtime.run()
}
