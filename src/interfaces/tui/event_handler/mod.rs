//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! This module is organized by screen type:
//! - link_screens: Main, LinkForm, DeleteConfirm, ViewDetails
//! - misc_screens: inline search, Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

mod link_screens;
mod misc_screens;

use link_screens::*;
use misc_screens::*;

/// Handle keyboard input based on current screen
///
/// Returns `true` when the application should exit.
pub async fn handle_key_event(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    // Handle inline search mode first
    if app.search_mode && app.current_screen == CurrentScreen::Main {
        return handle_inline_search(app, key_code);
    }

    match app.current_screen {
        CurrentScreen::Main => handle_main_screen(app, key_code),
        CurrentScreen::LinkForm => handle_link_form_screen(app, key_code).await,
        CurrentScreen::DeleteConfirm => handle_delete_confirm_screen(app, key_code).await,
        CurrentScreen::ViewDetails => handle_view_details_screen(app, key_code),
        CurrentScreen::Help => handle_help_screen(app, key_code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key_code),
    }
}
