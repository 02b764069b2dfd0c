use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::dashboard::FormField;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};

/// Add / edit form; the same popup serves both modes
pub fn draw_link_form_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = app.dashboard.form() else {
        return;
    };

    let color = if form.is_edit() {
        colors::WARNING
    } else {
        colors::SUCCESS
    };
    let inner_area = Popup::new(form.title(), popup::LINK_FORM)
        .theme_color(color)
        .render(frame, area);

    let fields: Vec<InputField> = FormField::ALL
        .iter()
        .map(|field| {
            let input = InputField::new(field.display_title(), form.draft.get(*field))
                .active(form.focused == *field)
                .required()
                .error(form.errors.get(*field));
            match field {
                FormField::OriginalUrl => input.placeholder("https://..."),
                _ => input,
            }
        })
        .collect();

    let mut constraints: Vec<Constraint> =
        fields.iter().map(|f| Constraint::Length(f.height())).collect();
    constraints.push(Constraint::Min(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner_area);

    for (i, field) in fields.iter().enumerate() {
        field.render(frame, chunks[i]);
    }

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(" next field  ", Style::default().fg(colors::MUTED)),
        Span::styled("[Enter]", Style::default().fg(colors::SUCCESS).bold()),
        Span::styled(" save  ", Style::default().fg(colors::MUTED)),
        Span::styled("[Esc]", Style::default().fg(Color::Red).bold()),
        Span::styled(" cancel", Style::default().fg(colors::MUTED)),
    ]));
    frame.render_widget(hint, chunks[fields.len()]);
}
