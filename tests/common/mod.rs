//! Shared test fixtures
//!
//! `FakeLinkApi` behaves like the affiliate link server: it filters, sorts
//! and paginates in memory and records every call it receives.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;

use affilink::api::{ApiError, ErrorBody, Link, LinkApi, LinkPage, LinkPayload, ListQuery};
use affilink::dashboard::{LinkDashboard, PermissionSet, Permissions};

pub const BASE_URL: &str = "http://localhost:5001";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CallCounts {
    pub list_links: usize,
    pub list_categories: usize,
    pub create: usize,
    pub update: usize,
    pub delete: usize,
}

#[derive(Default)]
struct State {
    links: Vec<Link>,
    next_id: u64,
    calls: CallCounts,
    queries: Vec<ListQuery>,
    fail_list: Option<ApiError>,
    fail_categories: Option<ApiError>,
    fail_write: Option<ApiError>,
}

/// In-memory stand-in for the HTTP API
#[derive(Default)]
pub struct FakeLinkApi {
    state: Mutex<State>,
}

pub fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
}

pub fn link(id: &str, title: &str, category: &str, clicks: u64, day: u32) -> Link {
    Link {
        id: id.to_string(),
        campaign_title: title.to_string(),
        original_url: format!("https://shop.example.com/{}", id),
        category: category.to_string(),
        click_count: clicks,
        created_at: Some(at(day)),
    }
}

/// Five links created on March 1st..5th; `l5` is the newest
pub fn five_links() -> Vec<Link> {
    vec![
        link("l1", "Winter Boots", "shoes", 10, 1),
        link("l2", "Laptop Deal", "computers", 3, 2),
        link("l3", "Running Shoes", "shoes", 42, 3),
        link("l4", "Desk Lamp", "home", 0, 4),
        link("l5", "Summer Sandals", "shoes", 7, 5),
    ]
}

pub fn status_error(status: u16, body: &str) -> ApiError {
    ApiError::Status {
        status,
        body: ErrorBody::parse(body),
    }
}

impl FakeLinkApi {
    pub fn with_links(links: Vec<Link>) -> Arc<Self> {
        let api = FakeLinkApi::default();
        {
            let mut state = api.state.lock();
            state.next_id = links.len() as u64;
            state.links = links;
        }
        Arc::new(api)
    }

    pub fn calls(&self) -> CallCounts {
        self.state.lock().calls
    }

    pub fn reset_calls(&self) {
        let mut state = self.state.lock();
        state.calls = CallCounts::default();
        state.queries.clear();
    }

    pub fn queries(&self) -> Vec<ListQuery> {
        self.state.lock().queries.clone()
    }

    pub fn last_query(&self) -> Option<ListQuery> {
        self.state.lock().queries.last().cloned()
    }

    pub fn links(&self) -> Vec<Link> {
        self.state.lock().links.clone()
    }

    /// Every following `GET /links` fails with `err`
    pub fn fail_list(&self, err: Option<ApiError>) {
        self.state.lock().fail_list = err;
    }

    pub fn fail_categories(&self, err: Option<ApiError>) {
        self.state.lock().fail_categories = err;
    }

    /// Every following create / update / delete fails with `err`
    pub fn fail_writes(&self, err: Option<ApiError>) {
        self.state.lock().fail_write = err;
    }
}

fn matches_search(link: &Link, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    [&link.campaign_title, &link.original_url, &link.category]
        .iter()
        .any(|v| v.to_lowercase().contains(&term))
}

fn sort_links(links: &mut [Link], field: &str, order: &str) {
    links.sort_by(|a, b| {
        let ord = match field {
            "campaignTitle" => a.campaign_title.cmp(&b.campaign_title),
            "originalUrl" => a.original_url.cmp(&b.original_url),
            "category" => a.category.cmp(&b.category),
            "clickCount" => a.click_count.cmp(&b.click_count),
            _ => a.created_at.cmp(&b.created_at),
        };
        if order == "asc" { ord } else { ord.reverse() }
    });
}

#[async_trait]
impl LinkApi for FakeLinkApi {
    async fn list_links(&self, query: &ListQuery) -> Result<LinkPage, ApiError> {
        let mut state = self.state.lock();
        state.calls.list_links += 1;
        state.queries.push(query.clone());
        if let Some(err) = state.fail_list.clone() {
            return Err(err);
        }

        let mut matched: Vec<Link> = state
            .links
            .iter()
            .filter(|l| query.category_filter == "all" || l.category == query.category_filter)
            .filter(|l| matches_search(l, &query.search_term))
            .cloned()
            .collect();
        sort_links(&mut matched, &query.sort_field, &query.sort_order);

        let total = matched.len() as u64;
        let size = query.page_size as usize;
        let links = matched
            .into_iter()
            .skip(query.current_page as usize * size)
            .take(size)
            .collect();
        Ok(LinkPage { links, total })
    }

    async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        let mut state = self.state.lock();
        state.calls.list_categories += 1;
        if let Some(err) = state.fail_categories.clone() {
            return Err(err);
        }
        let mut categories: Vec<String> = state.links.iter().map(|l| l.category.clone()).collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    async fn create_link(&self, payload: &LinkPayload) -> Result<(), ApiError> {
        let mut state = self.state.lock();
        state.calls.create += 1;
        if let Some(err) = state.fail_write.clone() {
            return Err(err);
        }
        state.next_id += 1;
        let link = Link {
            id: format!("new-{}", state.next_id),
            campaign_title: payload.campaign_title.clone(),
            original_url: payload.original_url.clone(),
            category: payload.category.clone(),
            click_count: 0,
            created_at: Some(at(28)),
        };
        state.links.push(link);
        Ok(())
    }

    async fn update_link(&self, id: &str, payload: &LinkPayload) -> Result<(), ApiError> {
        let mut state = self.state.lock();
        state.calls.update += 1;
        if let Some(err) = state.fail_write.clone() {
            return Err(err);
        }
        let link = state
            .links
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| status_error(404, r#"{"error":"Link not found"}"#))?;
        link.campaign_title = payload.campaign_title.clone();
        link.original_url = payload.original_url.clone();
        link.category = payload.category.clone();
        Ok(())
    }

    async fn delete_link(&self, id: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock();
        state.calls.delete += 1;
        if let Some(err) = state.fail_write.clone() {
            return Err(err);
        }
        let before = state.links.len();
        state.links.retain(|l| l.id != id);
        if state.links.len() == before {
            return Err(status_error(404, r#"{"error":"Link not found"}"#));
        }
        Ok(())
    }

    fn base_url(&self) -> &str {
        BASE_URL
    }
}

pub fn dashboard(api: &Arc<FakeLinkApi>, perms: Permissions) -> LinkDashboard {
    let perms: Arc<dyn PermissionSet> = Arc::new(perms);
    LinkDashboard::new(api.clone(), perms)
}
