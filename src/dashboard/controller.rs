//! LinkDashboard: query controller and CRUD command handler
//!
//! Owns the query state, the current page of rows and the open modal. All
//! I/O goes through the injected [`LinkApi`].

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::form::{FormMode, LinkDraft, LinkForm, validate};
use super::messages;
use super::permissions::PermissionSet;
use super::query::{QueryAction, QueryState};
use super::view;
use crate::api::{self, ApiError, Link, LinkApi, LinkPage, ListQuery};

/// Modal currently shown over the table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Form(LinkForm),
    /// Holds only the target identifier
    DeleteConfirm { id: String },
}

/// A started `GET /links` request
///
/// Carries the token that [`LinkDashboard::finish_fetch`] checks, so a
/// response that was overtaken by a newer request is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: u64,
    pub query: ListQuery,
}

impl FetchTicket {
    /// Execute the request; usable from a spawned task
    pub async fn run(self, api: Arc<dyn LinkApi>) -> (u64, Result<LinkPage, ApiError>) {
        let result = api.list_links(&self.query).await;
        (self.token, result)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No form was open
    NoForm,
    /// Validation failed; the form stays open with field errors
    Invalid,
    Created,
    Updated,
    /// Request failed; the banner holds the user-facing copy
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    NoTarget,
    Deleted,
    Failed(ApiError),
}

pub struct LinkDashboard {
    api: Arc<dyn LinkApi>,
    permissions: Arc<dyn PermissionSet>,
    query: QueryState,
    rows: Vec<Link>,
    total: u64,
    loading: bool,
    banner: Option<String>,
    categories: Vec<String>,
    modal: Modal,
    next_token: u64,
    latest_token: u64,
}

impl LinkDashboard {
    pub fn new(api: Arc<dyn LinkApi>, permissions: Arc<dyn PermissionSet>) -> Self {
        Self::with_query(api, permissions, QueryState::default())
    }

    pub fn with_query(
        api: Arc<dyn LinkApi>,
        permissions: Arc<dyn PermissionSet>,
        query: QueryState,
    ) -> Self {
        Self {
            api,
            permissions,
            query,
            rows: Vec::new(),
            total: 0,
            loading: false,
            banner: None,
            categories: Vec::new(),
            modal: Modal::Closed,
            next_token: 0,
            latest_token: 0,
        }
    }

    // ============ accessors ============

    pub fn api(&self) -> Arc<dyn LinkApi> {
        Arc::clone(&self.api)
    }

    pub fn permissions(&self) -> &dyn PermissionSet {
        self.permissions.as_ref()
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn rows(&self) -> &[Link] {
        &self.rows
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn form(&self) -> Option<&LinkForm> {
        match &self.modal {
            Modal::Form(form) => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut LinkForm> {
        match &mut self.modal {
            Modal::Form(form) => Some(form),
            _ => None,
        }
    }

    pub fn find_row(&self, id: &str) -> Option<&Link> {
        self.rows.iter().find(|l| l.id == id)
    }

    /// Public redirect URL copied by the share action
    pub fn share_url(&self, id: &str) -> String {
        api::redirect_url(self.api.base_url(), id)
    }

    pub fn summary(&self) -> Option<String> {
        view::summary(self.total, &self.query.category)
    }

    pub fn page_count(&self) -> u32 {
        self.query.page_count(self.total)
    }

    // ============ query controller ============

    /// Load categories, then the first page
    pub async fn start(&mut self) {
        self.fetch_categories().await;
        self.fetch_links().await;
    }

    /// Mark a new `GET /links` as in flight
    ///
    /// Clears the banner and sets the loading flag; the returned ticket must be
    /// handed back to [`finish_fetch`](Self::finish_fetch).
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.next_token += 1;
        self.latest_token = self.next_token;
        self.banner = None;
        self.loading = true;

        let query = self.query.to_list_query();
        debug!(token = self.latest_token, "Fetching links: {:?}", query);
        FetchTicket {
            token: self.latest_token,
            query,
        }
    }

    /// Apply a `GET /links` result
    ///
    /// Returns `false` and leaves all state untouched when `token` is not the
    /// most recently issued one.
    pub fn finish_fetch(&mut self, token: u64, result: Result<LinkPage, ApiError>) -> bool {
        if token != self.latest_token {
            debug!(
                token,
                latest = self.latest_token,
                "Discarding stale links response"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                debug!("Fetched {} links (total {})", page.links.len(), page.total);
                self.rows = page.links;
                self.total = page.total;
            }
            Err(e) => {
                warn!("Failed to fetch links: {}", e);
                self.banner = Some(messages::fetch_error(&e));
            }
        }
        true
    }

    pub async fn fetch_links(&mut self) {
        let ticket = self.begin_fetch();
        let (token, result) = ticket.run(self.api()).await;
        self.finish_fetch(token, result);
    }

    /// Refresh the category list; failures are only logged
    pub async fn fetch_categories(&mut self) {
        match self.api.list_categories().await {
            Ok(categories) => {
                debug!("Loaded {} categories", categories.len());
                self.categories = categories;
            }
            Err(e) => warn!("Failed to fetch categories: {}", e),
        }
    }

    /// Reduce the query state; returns a ticket when the state changed
    pub fn update_query(&mut self, action: QueryAction) -> Option<FetchTicket> {
        let next = self.query.reduce(action);
        if next == self.query {
            return None;
        }
        self.query = next;
        Some(self.begin_fetch())
    }

    /// [`update_query`](Self::update_query) and await the fetch
    pub async fn dispatch(&mut self, action: QueryAction) {
        if let Some(ticket) = self.update_query(action) {
            let (token, result) = ticket.run(self.api()).await;
            self.finish_fetch(token, result);
        }
    }

    pub fn next_page_action(&self) -> Option<QueryAction> {
        let next = self.query.page + 1;
        (next < self.page_count()).then_some(QueryAction::SetPage(next))
    }

    pub fn prev_page_action(&self) -> Option<QueryAction> {
        self.query
            .page
            .checked_sub(1)
            .map(QueryAction::SetPage)
    }

    // ============ modals ============

    /// Open the form in create mode with an empty draft
    pub fn open_create(&mut self) -> bool {
        if !self.permissions.can_create() {
            return false;
        }
        self.modal = Modal::Form(LinkForm::create());
        true
    }

    /// Open the form in edit mode, pre-filled from `link`
    pub fn open_edit(&mut self, link: &Link) -> bool {
        if !self.permissions.can_edit() {
            return false;
        }
        self.modal = Modal::Form(LinkForm::edit(link));
        true
    }

    /// Open the form with an explicit draft (non-interactive callers)
    pub fn open_form(&mut self, draft: LinkDraft, mode: FormMode) -> bool {
        let allowed = match mode {
            FormMode::Create => self.permissions.can_create(),
            FormMode::Edit { .. } => self.permissions.can_edit(),
        };
        if !allowed {
            return false;
        }
        self.modal = Modal::Form(LinkForm::with_draft(draft, mode));
        true
    }

    pub fn open_delete(&mut self, id: impl Into<String>) -> bool {
        if !self.permissions.can_delete() {
            return false;
        }
        self.modal = Modal::DeleteConfirm { id: id.into() };
        true
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
    }

    // ============ commands ============

    /// Validate and send the open form
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Modal::Form(form) = &mut self.modal else {
            return SubmitOutcome::NoForm;
        };

        if let Err(errors) = validate(&form.draft) {
            debug!("Form rejected: {}", errors);
            form.errors = errors;
            // 新的校验结果替换上一次请求留下的横幅
            self.banner = None;
            return SubmitOutcome::Invalid;
        }

        let payload = form.draft.to_payload();
        let mode = form.mode.clone();
        let result = match &mode {
            FormMode::Edit { id } => self.api.update_link(id, &payload).await,
            FormMode::Create => self.api.create_link(&payload).await,
        };

        // 请求结束后无论成功与否都关闭弹窗
        self.modal = Modal::Closed;

        match result {
            Ok(()) => {
                match &mode {
                    FormMode::Edit { id } => info!("Link updated: {}", id),
                    FormMode::Create => info!("Link created: {}", payload.campaign_title),
                }
                self.fetch_links().await;
                self.fetch_categories().await;
                match mode {
                    FormMode::Edit { .. } => SubmitOutcome::Updated,
                    FormMode::Create => SubmitOutcome::Created,
                }
            }
            Err(e) => {
                warn!("Failed to save link: {}", e);
                self.banner = Some(messages::submit_error(&e).to_string());
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Delete the link held by the confirmation modal
    pub async fn confirm_delete(&mut self) -> DeleteOutcome {
        let Modal::DeleteConfirm { id } = std::mem::take(&mut self.modal) else {
            return DeleteOutcome::NoTarget;
        };

        match self.api.delete_link(&id).await {
            Ok(()) => {
                info!("Link deleted: {}", id);
                self.fetch_links().await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                warn!("Failed to delete link {}: {}", id, e);
                self.banner = Some(messages::delete_error(&e).to_string());
                DeleteOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ErrorBody, LinkPayload};
    use crate::dashboard::Permissions;
    use async_trait::async_trait;

    /// Rejects everything; only the synchronous state machine is exercised here
    struct OfflineApi;

    #[async_trait]
    impl LinkApi for OfflineApi {
        async fn list_links(&self, _query: &ListQuery) -> Result<LinkPage, ApiError> {
            Err(ApiError::Transport("offline".into()))
        }
        async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
            Err(ApiError::Transport("offline".into()))
        }
        async fn create_link(&self, _payload: &LinkPayload) -> Result<(), ApiError> {
            Err(ApiError::Transport("offline".into()))
        }
        async fn update_link(&self, _id: &str, _payload: &LinkPayload) -> Result<(), ApiError> {
            Err(ApiError::Transport("offline".into()))
        }
        async fn delete_link(&self, _id: &str) -> Result<(), ApiError> {
            Err(ApiError::Transport("offline".into()))
        }
        fn base_url(&self) -> &str {
            "http://localhost:5001"
        }
    }

    fn dashboard(perms: Permissions) -> LinkDashboard {
        LinkDashboard::new(Arc::new(OfflineApi), Arc::new(perms))
    }

    fn page(ids: &[&str], total: u64) -> LinkPage {
        LinkPage {
            links: ids
                .iter()
                .map(|id| Link {
                    id: id.to_string(),
                    campaign_title: format!("c{}", id),
                    original_url: "https://x".into(),
                    category: "books".into(),
                    click_count: 0,
                    created_at: None,
                })
                .collect(),
            total,
        }
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut d = dashboard(Permissions::ALL);
        let first = d.update_query(QueryAction::SetSearchTerm("a".into())).unwrap();
        let second = d.update_query(QueryAction::SetSearchTerm("ab".into())).unwrap();
        assert!(second.token > first.token);

        assert!(d.finish_fetch(second.token, Ok(page(&["2"], 1))));
        assert!(!d.is_loading());

        // 先发后到的响应被丢弃
        assert!(!d.finish_fetch(first.token, Ok(page(&["1", "x"], 9))));
        assert_eq!(d.total(), 1);
        assert_eq!(d.rows()[0].id, "2");
    }

    #[test]
    fn test_stale_error_does_not_touch_banner_or_loading() {
        let mut d = dashboard(Permissions::ALL);
        let first = d.begin_fetch();
        let _second = d.begin_fetch();
        assert!(!d.finish_fetch(first.token, Err(ApiError::Transport("x".into()))));
        assert!(d.banner().is_none());
        assert!(d.is_loading());
    }

    #[test]
    fn test_failed_fetch_keeps_rows() {
        let mut d = dashboard(Permissions::ALL);
        let t = d.begin_fetch();
        d.finish_fetch(t.token, Ok(page(&["1", "2"], 2)));

        let t = d.begin_fetch();
        let err = ApiError::Status {
            status: 401,
            body: ErrorBody::parse(r#"{"error":"Unauthorized access"}"#),
        };
        d.finish_fetch(t.token, Err(err));
        assert_eq!(d.rows().len(), 2);
        assert_eq!(d.banner(), Some("Unauthorized access"));
        assert!(!d.is_loading());

        // 下一次请求先清空横幅
        d.begin_fetch();
        assert!(d.banner().is_none());
    }

    #[test]
    fn test_no_op_transition_issues_no_fetch() {
        let mut d = dashboard(Permissions::ALL);
        assert!(d.update_query(QueryAction::SetPage(0)).is_none());
        assert!(d.update_query(QueryAction::ClearFilters).is_none());
        assert!(d.update_query(QueryAction::SetPage(1)).is_some());
    }

    #[test]
    fn test_ticket_carries_reset_page() {
        let mut d = dashboard(Permissions::ALL);
        d.update_query(QueryAction::SetPage(3));
        let ticket = d
            .update_query(QueryAction::SetCategoryFilter("tech".into()))
            .unwrap();
        assert_eq!(ticket.query.current_page, 0);
        assert_eq!(ticket.query.category_filter, "tech");
    }

    #[test]
    fn test_page_actions() {
        let mut d = dashboard(Permissions::ALL);
        let t = d.begin_fetch();
        d.finish_fetch(t.token, Ok(page(&["1", "2"], 5)));
        assert_eq!(d.prev_page_action(), None);
        assert_eq!(d.next_page_action(), Some(QueryAction::SetPage(1)));
        d.update_query(QueryAction::SetPage(2));
        assert_eq!(d.next_page_action(), None);
    }

    #[test]
    fn test_modals_respect_permissions() {
        let mut d = dashboard(Permissions::READ_ONLY);
        assert!(!d.open_create());
        assert!(!d.open_delete("1"));
        assert!(!d.open_form(LinkDraft::default(), FormMode::Edit { id: "1".into() }));
        assert_eq!(d.modal(), &Modal::Closed);

        let mut d = dashboard(Permissions::ALL);
        assert!(d.open_delete("1"));
        assert_eq!(d.modal(), &Modal::DeleteConfirm { id: "1".into() });
        assert!(d.open_create());
        assert_eq!(d.form().map(|f| f.is_edit()), Some(false));
    }

    #[tokio::test]
    async fn test_invalid_submit_keeps_form_open() {
        let mut d = dashboard(Permissions::ALL);
        d.open_create();
        assert_eq!(d.submit().await, SubmitOutcome::Invalid);
        assert_eq!(d.form().map(|f| f.errors.len()), Some(3));
    }

    #[tokio::test]
    async fn test_failed_submit_closes_form() {
        let mut d = dashboard(Permissions::ALL);
        d.open_form(LinkDraft::new("t", "https://x", "c"), FormMode::Create);
        let outcome = d.submit().await;
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(d.modal(), &Modal::Closed);
        assert_eq!(d.banner(), Some(messages::GENERIC_FAILURE));
    }

    #[test]
    fn test_share_url() {
        let d = dashboard(Permissions::ALL);
        assert_eq!(d.share_url("abc"), "http://localhost:5001/links/r/abc");
    }
}
