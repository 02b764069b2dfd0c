//! Terminal User Interface (TUI) module
//!
//! Interactive dashboard for browsing and managing affiliate links

use std::io;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{error, info};

use crate::dashboard::LinkDashboard;
use crate::errors::{AffilinkError, Result};

mod app;
mod constants;
mod event_handler;
mod ui;

use app::App;
use constants::TICK_RATE;
use ui::ui;

/// Run the TUI application
pub async fn run_tui(dashboard: LinkDashboard) -> Result<()> {
    let mut app = App::new(dashboard);
    // 首次加载在进入备用屏幕前完成，失败时横幅会显示在界面上
    app.dashboard.start().await;

    enable_raw_mode().map_err(terminal_error)?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture).map_err(terminal_error)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).map_err(terminal_error)?;

    info!("TUI started");
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().map_err(terminal_error)?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)?;

    if let Err(ref err) = res {
        error!("TUI loop failed: {}", err);
    }
    info!("TUI exited");
    res
}

fn terminal_error(e: impl std::fmt::Display) -> AffilinkError {
    AffilinkError::terminal(e.to_string())
}

/// Main application loop
async fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stderr>>, app: &mut App) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui(f, app))
            .map_err(terminal_error)?;

        // 后台请求结果在每个 tick 收取
        if event::poll(TICK_RATE).map_err(terminal_error)? {
            if let Event::Key(key) = event::read().map_err(terminal_error)?
                && key.kind == KeyEventKind::Press
            {
                let should_exit = event_handler::handle_key_event(app, key.code)
                    .await
                    .map_err(terminal_error)?;
                if should_exit {
                    return Ok(());
                }
            }
        }

        app.drain_fetches();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::api::{ApiError, Link, LinkApi, LinkPage, LinkPayload, ListQuery};
    use crate::dashboard::{Permissions, QueryAction};

    struct StaticApi;

    #[async_trait]
    impl LinkApi for StaticApi {
        async fn list_links(&self, _query: &ListQuery) -> std::result::Result<LinkPage, ApiError> {
            Ok(LinkPage {
                links: vec![Link {
                    id: "abc".to_string(),
                    campaign_title: "Spring Sale".to_string(),
                    original_url: "https://shop.example.com/spring".to_string(),
                    category: "shoes".to_string(),
                    click_count: 7,
                    created_at: None,
                }],
                total: 1,
            })
        }

        async fn list_categories(&self) -> std::result::Result<Vec<String>, ApiError> {
            Ok(vec!["shoes".to_string()])
        }

        async fn create_link(&self, _payload: &LinkPayload) -> std::result::Result<(), ApiError> {
            Ok(())
        }

        async fn update_link(
            &self,
            _id: &str,
            _payload: &LinkPayload,
        ) -> std::result::Result<(), ApiError> {
            Ok(())
        }

        async fn delete_link(&self, _id: &str) -> std::result::Result<(), ApiError> {
            Ok(())
        }

        fn base_url(&self) -> &str {
            "http://localhost:5001"
        }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    async fn loaded_app(perms: Permissions) -> App {
        let mut dashboard = LinkDashboard::new(Arc::new(StaticApi), Arc::new(perms));
        dashboard.start().await;
        App::new(dashboard)
    }

    #[tokio::test]
    async fn test_main_screen_renders_rows_and_summary() {
        let app = loaded_app(Permissions::ALL).await;
        let mut terminal = Terminal::new(TestBackend::new(160, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Spring Sale"));
        assert!(text.contains("Showing 1 total links"));
        assert!(text.contains("[a] Add"));
    }

    #[tokio::test]
    async fn test_read_only_footer_hides_crud_keys() {
        let app = loaded_app(Permissions::READ_ONLY).await;
        let mut terminal = Terminal::new(TestBackend::new(160, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(!text.contains("[a] Add"));
        assert!(!text.contains("[d] Delete"));
    }

    #[tokio::test]
    async fn test_form_popup_shows_field_errors() {
        let mut app = loaded_app(Permissions::ALL).await;
        app.open_add();
        app.submit_form().await;

        let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Add Link"));
        assert!(text.contains("Campaign Title is mandatory"));
    }

    #[tokio::test]
    async fn test_category_summary_in_title() {
        let mut app = loaded_app(Permissions::ALL).await;
        app.dashboard
            .dispatch(QueryAction::SetCategoryFilter("shoes".into()))
            .await;

        let mut terminal = Terminal::new(TestBackend::new(160, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        assert!(buffer_text(&terminal).contains("Showing 1 links in \"shoes\" category"));
    }
}
