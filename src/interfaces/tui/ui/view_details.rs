use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::dashboard::view;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};

fn field_line<'a>(label: &'a str, value: String, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(colors::WARNING).bold()),
        Span::styled(value, Style::default().fg(color)),
    ])
}

pub fn draw_view_details_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(link) = app.get_selected_link() else {
        return;
    };

    let title = format!("Link Details: {}", link.campaign_title);
    let inner_area = Popup::new(&title, popup::VIEW_DETAILS).render(frame, area);

    let mut details = vec![
        Line::from(""),
        field_line("ID:            ", link.id.clone(), colors::MUTED),
        field_line("Campaign:      ", link.campaign_title.clone(), colors::PRIMARY),
        field_line("Original URL:  ", link.original_url.clone(), Color::Blue),
        field_line("Category:      ", link.category.clone(), Color::Magenta),
        field_line("Clicks:        ", link.click_count.to_string(), colors::SUCCESS),
    ];

    if let Some(created_at) = link.created_at {
        details.push(field_line(
            "Created:       ",
            created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            Color::White,
        ));
    }

    details.push(Line::from(""));
    details.push(field_line(
        "Share URL:     ",
        app.dashboard.share_url(&link.id),
        colors::PRIMARY,
    ));
    details.push(field_line(
        "Analytics:     ",
        view::analytics_route(&link.id),
        colors::MUTED,
    ));
    details.push(Line::from(""));
    details.push(Line::from(Span::styled(
        "Press [y] to copy the share URL",
        Style::default().fg(colors::MUTED),
    )));

    let paragraph = Paragraph::new(details).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner_area);
}
