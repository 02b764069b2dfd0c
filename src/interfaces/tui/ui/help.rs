use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::{colors, popup};

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(colors::WARNING)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key(keys: &'static str, desc: &'static str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<17}", keys), Style::default().fg(color)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let help_text = vec![
        section("NAVIGATION"),
        key("Up/Down, j/k", "Move selection", Color::Cyan),
        key("Left/Right, [/]", "Previous / next page", Color::Cyan),
        key("p", "Cycle page size (2, 20, 50, 100)", Color::Cyan),
        Line::from(""),
        section("FILTERING & SORTING"),
        key("/", "Search campaigns (live)", Color::Cyan),
        key("c", "Cycle category filter", Color::Magenta),
        key("C", "Clear search and category", Color::Magenta),
        key("s", "Cycle sort column", Color::Yellow),
        key("S", "Toggle sort direction", Color::Yellow),
        key("r", "Refresh current page", Color::Cyan),
        Line::from(""),
        section("ACTIONS"),
        key("a", "Add new link", Color::Green),
        key("e", "Edit selected link", Color::Yellow),
        key("d", "Delete selected link", Color::Red),
        key("Enter, v", "View link details", Color::Cyan),
        key("y", "Copy share URL", Color::Cyan),
        Line::from(""),
        section("GENERAL"),
        key("Esc", "Dismiss error / close popup", Color::Red),
        key("?", "Toggle this help", Color::Blue),
        key("q", "Quit", Color::Magenta),
    ];

    frame.render_widget(Paragraph::new(help_text), inner_area);
}
