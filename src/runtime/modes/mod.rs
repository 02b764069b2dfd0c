//! Mode routing
//!
//! This module provides unified entry points for the execution modes:
//! - CLI mode (one command, then exit)
//! - TUI mode (interactive dashboard)

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    Unknown,
}

/// Detect which mode to run from the parsed subcommand
///
/// # Mode Detection Logic
/// 1. No subcommand or `tui` with the TUI feature -> TUI mode
/// 2. Any other subcommand with the CLI feature -> CLI mode
/// 3. Otherwise -> Unknown
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    #[cfg(feature = "tui")]
    if matches!(command, None | Some(Commands::Tui)) {
        return Mode::Tui;
    }

    #[cfg(feature = "cli")]
    if command.is_some() {
        return Mode::Cli;
    }

    let _ = command;
    Mode::Unknown
}
