// UI submodules
mod common;
mod delete_confirm;
mod exiting;
mod help;
mod link_form;
mod main_screen;
mod view_details;
pub mod widgets;

pub use common::{draw_filter_bar, draw_footer, draw_status_bar, draw_title_bar};

pub use delete_confirm::draw_delete_confirm_screen;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use link_form::draw_link_form_screen;
pub use main_screen::draw_main_screen;
pub use view_details::draw_view_details_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
///
/// The link table is always drawn; modal screens are overlaid on top of it.
pub fn ui(frame: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Filters
            Constraint::Min(8),    // Link table
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);
    draw_filter_bar(frame, app, main_chunks[1]);
    draw_main_screen(frame, app, main_chunks[2]);
    draw_status_bar(frame, app, main_chunks[3]);
    draw_footer(frame, app, main_chunks[4]);

    let overlay = main_chunks[2];
    match app.current_screen {
        CurrentScreen::Main => {}
        CurrentScreen::LinkForm => draw_link_form_screen(frame, app, overlay),
        CurrentScreen::DeleteConfirm => draw_delete_confirm_screen(frame, app, overlay),
        CurrentScreen::ViewDetails => draw_view_details_screen(frame, app, overlay),
        CurrentScreen::Help => draw_help_screen(frame, overlay),
        CurrentScreen::Exiting => draw_exiting_screen(frame, overlay),
    }
}
