//! TUI mode
//!
//! This module contains the TUI mode startup logic.
//! It delegates to the actual TUI implementation.

use crate::errors::Result;
use crate::runtime::lifetime::startup::StartupContext;

/// Run TUI mode
///
/// Builds the dashboard from the start-up context and hands it to the
/// terminal UI.
pub async fn run_tui(ctx: &StartupContext) -> Result<()> {
    let dashboard = ctx.dashboard();
    crate::interfaces::tui::run_tui(dashboard).await
}
