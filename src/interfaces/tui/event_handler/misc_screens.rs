//! Event handlers for misc screens
//!
//! Handles: inline search, Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Handle inline search mode input
pub fn handle_inline_search(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Enter => {
            // 保留搜索结果
            app.search_mode = false;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.update_search();
        }
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.update_search();
        }
        _ => {}
    }
    Ok(false)
}

pub fn handle_help_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('?') => {
            app.current_screen = CurrentScreen::Main;
        }
        _ => {}
    }
    Ok(false)
}

pub fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
        }
        _ => {}
    }
    Ok(false)
}
