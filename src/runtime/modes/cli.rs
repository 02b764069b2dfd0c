//! CLI mode
//!
//! Runs one command against the configured API and returns.

use crate::cli::Commands;
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::startup::StartupContext;

/// Run CLI mode
pub async fn run_cli(ctx: &StartupContext, cmd: Commands) -> Result<(), CliError> {
    tracing::debug!("Running CLI command: {:?}", cmd);
    crate::interfaces::cli::run_cli_command(ctx, cmd).await
}
