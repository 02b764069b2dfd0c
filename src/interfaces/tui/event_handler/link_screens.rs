//! Event handlers for link-related screens
//!
//! Handles: Main, LinkForm, DeleteConfirm, ViewDetails

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Handle main screen input
///
/// Actions the current role lacks are silently ignored.
pub fn handle_main_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Left | KeyCode::Char('[') => app.prev_page(),
        KeyCode::Right | KeyCode::Char(']') => app.next_page(),
        KeyCode::Char('p') => app.cycle_page_size(),
        // Sorting
        KeyCode::Char('s') => app.cycle_sort_column(),
        KeyCode::Char('S') => app.toggle_sort_direction(),
        // Filtering
        KeyCode::Char('/') => app.begin_search(),
        KeyCode::Char('c') => app.cycle_category(),
        KeyCode::Char('C') => app.clear_filters(),
        KeyCode::Char('r') => {
            app.refresh();
            app.set_status("Refreshing...".to_string());
        }
        // CRUD
        KeyCode::Char('a') => app.open_add(),
        KeyCode::Char('e') => app.open_edit_selected(),
        KeyCode::Char('d') => app.open_delete_selected(),
        KeyCode::Enter | KeyCode::Char('v') => app.open_details(),
        KeyCode::Char('y') => app.copy_share_url(),
        KeyCode::Esc => {
            app.dashboard.dismiss_banner();
            app.clear_messages();
        }
        KeyCode::Char('?') => app.current_screen = CurrentScreen::Help,
        KeyCode::Char('q') | KeyCode::Char('Q') => app.current_screen = CurrentScreen::Exiting,
        _ => {}
    }
    Ok(false)
}

/// Handle add / edit form input
pub async fn handle_link_form_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Enter => app.submit_form().await,
        KeyCode::Esc => app.cancel_modal(),
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.dashboard.form_mut() {
                form.focus_next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.dashboard.form_mut() {
                form.focus_prev();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = app.dashboard.form_mut() {
                form.pop_char();
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.dashboard.form_mut() {
                form.push_char(c);
            }
        }
        _ => {}
    }
    Ok(false)
}

/// Handle delete confirmation screen input
pub async fn handle_delete_confirm_screen(
    app: &mut App,
    key_code: KeyCode,
) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete().await,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_modal(),
        _ => {}
    }
    Ok(false)
}

/// Handle view details screen input
pub fn handle_view_details_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Main;
        }
        KeyCode::Char('y') => app.copy_share_url(),
        _ => {}
    }
    Ok(false)
}
