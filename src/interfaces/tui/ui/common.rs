use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::dashboard::{PermissionSet, view};
use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::colors;

/// Draw title bar with version, result summary and loading state
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("Affilink", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
    ];

    if let Some(summary) = app.dashboard.summary() {
        spans.push(Span::styled("| ", Style::default().fg(colors::MUTED)));
        spans.push(Span::styled(
            format!("{} ", summary),
            Style::default().fg(colors::WARNING),
        ));
    }

    if app.dashboard.is_loading() {
        spans.push(Span::styled(
            "| Loading...",
            Style::default().fg(colors::PRIMARY).italic(),
        ));
    }

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw the current query: search term, category, page size and sort
pub fn draw_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let query = app.dashboard.query();
    let label = Style::default().fg(colors::MUTED);

    let search_span = if app.search_mode {
        Span::styled(
            format!("{}_", app.search_input),
            Style::default().fg(colors::HIGHLIGHT_FG).bg(colors::HIGHLIGHT_BG),
        )
    } else if query.search_term.is_empty() {
        Span::styled("-", label)
    } else {
        Span::styled(
            format!("\"{}\"", query.search_term),
            Style::default().fg(colors::PRIMARY),
        )
    };

    let line = Line::from(vec![
        Span::styled("Search: ", label),
        search_span,
        Span::styled("  Category: ", label),
        Span::styled(
            query.category.as_param().to_string(),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled("  Page size: ", label),
        Span::styled(
            query.page_size.value().to_string(),
            Style::default().fg(Color::White),
        ),
        Span::styled("  Sort: ", label),
        Span::styled(
            format!("{} {}", query.sort.field.label(), query.sort.order.arrow()),
            Style::default().fg(colors::WARNING),
        ),
    ]);

    let border = if app.search_mode {
        colors::HIGHLIGHT_BG
    } else {
        colors::MUTED
    };

    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title("Filters"),
    );

    frame.render_widget(bar, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default().fg(Color::White).bg(colors::ERROR).bold(),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[SUCCESS] {}", app.status_message),
            Style::default().fg(Color::Black).bg(colors::SUCCESS).bold(),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(colors::PRIMARY))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Keyboard shortcuts for the current screen; CRUD keys follow the role
fn shortcuts(app: &App) -> Vec<(&'static str, &'static str, Color)> {
    let perms = app.dashboard.permissions();

    match app.current_screen {
        CurrentScreen::Main if app.search_mode => vec![
            ("Enter", "Keep", Color::Green),
            ("Esc", "Clear", Color::Red),
        ],
        CurrentScreen::Main => {
            let mut keys = vec![
                ("Up/Down", "Navigate", Color::Cyan),
                ("[/]", "Page", Color::Cyan),
                ("/", "Search", Color::Cyan),
                ("c", "Category", Color::Magenta),
                ("s/S", "Sort", Color::Yellow),
            ];
            if view::can_add(perms) {
                keys.push(("a", "Add", Color::Green));
            }
            if perms.can_edit() {
                keys.push(("e", "Edit", Color::Yellow));
            }
            if perms.can_delete() {
                keys.push(("d", "Delete", Color::Red));
            }
            keys.push(("y", "Share", Color::Cyan));
            keys.push(("?", "Help", Color::Blue));
            keys.push(("q", "Quit", Color::Magenta));
            keys
        }
        CurrentScreen::LinkForm => vec![
            ("Tab", "Switch Field", Color::Cyan),
            ("Enter", "Save", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::DeleteConfirm | CurrentScreen::Exiting => {
            vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)]
        }
        CurrentScreen::ViewDetails => vec![
            ("y", "Copy Share URL", Color::Cyan),
            ("q/Esc", "Close", Color::Red),
        ],
        CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
    }
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
