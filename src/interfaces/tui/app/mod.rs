//! App state definition and basic state management
//!
//! 包含核心 App 结构；查询 / 表单 / 弹窗状态都在 LinkDashboard 中，
//! 这里只保存界面自身的状态（当前屏幕、选中行、提示信息）。

mod link_operations;
mod navigation;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::{ApiError, Link, LinkPage};
use crate::dashboard::{FetchTicket, LinkDashboard, QueryAction};

/// 后台请求结果：(token, result)
pub type FetchCompletion = (u64, Result<LinkPage, ApiError>);

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    LinkForm,
    DeleteConfirm,
    ViewDetails,
    Help,
    Exiting,
}

pub struct App {
    pub dashboard: LinkDashboard,
    pub current_screen: CurrentScreen,

    // Inline search
    pub search_mode: bool,
    pub search_input: String,

    // UI state
    pub selected_index: usize,
    pub status_message: String,
    pub error_message: String,

    fetch_tx: UnboundedSender<FetchCompletion>,
    fetch_rx: UnboundedReceiver<FetchCompletion>,
}

impl App {
    pub fn new(dashboard: LinkDashboard) -> App {
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();
        let search_input = dashboard.query().search_term.clone();
        App {
            dashboard,
            current_screen: CurrentScreen::Main,
            search_mode: false,
            search_input,
            selected_index: 0,
            status_message: String::new(),
            error_message: String::new(),
            fetch_tx,
            fetch_rx,
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }

    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message.clear();
    }

    pub fn get_selected_link(&self) -> Option<&Link> {
        self.dashboard.rows().get(self.selected_index)
    }

    /// Reduce the query; a changed state starts a background fetch
    pub fn apply_query(&mut self, action: QueryAction) {
        if let Some(ticket) = self.dashboard.update_query(action) {
            self.spawn_fetch(ticket);
        }
    }

    /// Re-issue the current query
    pub fn refresh(&mut self) {
        let ticket = self.dashboard.begin_fetch();
        self.spawn_fetch(ticket);
    }

    fn spawn_fetch(&self, ticket: FetchTicket) {
        let api = self.dashboard.api();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let done = ticket.run(api).await;
            // 接收端只在退出时关闭
            let _ = tx.send(done);
        });
    }

    /// Apply finished fetches; returns true when any was accepted
    pub fn drain_fetches(&mut self) -> bool {
        let mut applied = false;
        while let Ok((token, result)) = self.fetch_rx.try_recv() {
            if self.dashboard.finish_fetch(token, result) {
                applied = true;
            }
        }
        if applied {
            self.clamp_selection();
        }
        applied
    }
}
