use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState},
};

use crate::dashboard::view::{self, Column};
use crate::dashboard::{QueryState, view::LinkRow};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, colors, truncate};

/// Format a header cell with sort indicator
fn format_header(column: Column, query: &QueryState) -> Span<'static> {
    let style = Style::default()
        .fg(colors::WARNING)
        .add_modifier(Modifier::BOLD);
    match column.sort_field() {
        Some(field) if field == query.sort.field => Span::styled(
            format!("{} {}", column.header(), query.sort.order.arrow()),
            style,
        ),
        _ => Span::styled(column.header(), style),
    }
}

fn build_row(row: &LinkRow) -> Row<'static> {
    let actions = row
        .actions
        .iter()
        .map(|a| a.label())
        .collect::<Vec<_>>()
        .join(" / ");

    Row::new(vec![
        Span::styled(
            row.campaign.clone(),
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            truncate(&row.url, URL_TRUNCATE_LENGTH),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled(row.category.clone(), Style::default().fg(Color::Magenta)),
        Span::styled(row.clicks.to_string(), Style::default().fg(colors::SUCCESS)),
        Span::styled(actions, Style::default().fg(Color::White)),
        Span::styled("[y] copy", Style::default().fg(colors::MUTED)),
    ])
}

fn draw_empty(frame: &mut Frame, app: &App, area: Rect) {
    let muted = Style::default().fg(colors::MUTED);
    let headline = if app.dashboard.is_loading() {
        "Loading links..."
    } else if app.dashboard.query().has_filters() {
        "No links match the current filters"
    } else {
        "No affiliate links found"
    };

    let mut text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if app.dashboard.query().has_filters() {
        text.push(Line::from(vec![
            Span::styled("Press ", muted),
            Span::styled("[C]", Style::default().fg(colors::WARNING).bold()),
            Span::styled(" to clear filters", muted),
        ]));
    } else if view::can_add(app.dashboard.permissions()) {
        text.push(Line::from(vec![
            Span::styled("Press ", muted),
            Span::styled("[a]", Style::default().fg(colors::SUCCESS).bold()),
            Span::styled(" to create your first link", muted),
        ]));
    }

    let empty = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(muted)
                .title("Affiliate Links")
                .title_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(empty, area);
}

pub fn draw_main_screen(frame: &mut Frame, app: &App, area: Rect) {
    // 错误横幅在表格上方，表格保留上一次的数据
    let area = match app.dashboard.banner() {
        Some(banner) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(3)])
                .split(area);
            let line = Paragraph::new(format!(" ! {}  [Esc] dismiss", banner))
                .style(Style::default().fg(Color::White).bg(colors::ERROR).bold());
            frame.render_widget(line, chunks[0]);
            chunks[1]
        }
        None => area,
    };

    if app.dashboard.rows().is_empty() {
        draw_empty(frame, app, area);
        return;
    }

    let query = app.dashboard.query();
    let api = app.dashboard.api();
    let rows = view::build_rows(
        app.dashboard.rows(),
        api.base_url(),
        app.dashboard.permissions(),
    );

    let header = Row::new(
        Column::ALL
            .iter()
            .map(|c| format_header(*c, query))
            .collect::<Vec<_>>(),
    )
    .bottom_margin(1);

    let title = format!(
        "Affiliate Links ({}) | Page {}/{}",
        app.dashboard.total(),
        query.page + 1,
        app.dashboard.page_count()
    );

    let table = Table::new(
        rows.iter().map(build_row).collect::<Vec<_>>(),
        [
            Constraint::Min(16),    // Campaign
            Constraint::Min(20),    // URL
            Constraint::Length(14), // Category
            Constraint::Length(8),  // Clicks
            Constraint::Length(26), // Action
            Constraint::Length(9),  // Share
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
    )
    .row_highlight_style(Style::default().bg(colors::MUTED).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}
