use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::dashboard::Modal;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};

pub fn draw_delete_confirm_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Modal::DeleteConfirm { id } = app.dashboard.modal() else {
        return;
    };

    let inner_area = Popup::new("Confirm Delete", popup::DELETE_CONFIRM)
        .theme_color(colors::ERROR)
        .margin(Margin::new(2, 2))
        .render(frame, area);

    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to delete this link?",
            Style::default().fg(colors::WARNING).bold(),
        )),
        Line::from(""),
    ];

    // 目标行可能已被刷新掉，只显示 id
    match app.dashboard.find_row(id) {
        Some(link) => {
            text.push(Line::from(vec![
                Span::styled("Campaign: ", Style::default().fg(colors::MUTED)),
                Span::styled(
                    link.campaign_title.as_str(),
                    Style::default().fg(colors::PRIMARY).bold(),
                ),
            ]));
            text.push(Line::from(vec![
                Span::styled("URL: ", Style::default().fg(colors::MUTED)),
                Span::styled(link.original_url.as_str(), Style::default().fg(Color::Blue)),
            ]));
        }
        None => text.push(Line::from(vec![
            Span::styled("ID: ", Style::default().fg(colors::MUTED)),
            Span::styled(id.as_str(), Style::default().fg(colors::PRIMARY).bold()),
        ])),
    }

    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "This action cannot be undone!",
        Style::default().fg(colors::ERROR).bold(),
    )));

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, inner_area);
}
