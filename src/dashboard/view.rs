//! Presentation bindings: table columns, row actions and header summary
//!
//! Front ends render from these; nothing here sorts or filters rows.

use super::permissions::PermissionSet;
use super::query::{CategoryFilter, SortField};
use crate::api::{self, Link};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Campaign,
    Url,
    Category,
    Clicks,
    Action,
    Share,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Campaign,
        Column::Url,
        Column::Category,
        Column::Clicks,
        Column::Action,
        Column::Share,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Column::Campaign => "Campaign",
            Column::Url => "URL",
            Column::Category => "Category",
            Column::Clicks => "Clicks",
            Column::Action => "Action",
            Column::Share => "Share",
        }
    }

    /// Server sort key; `None` for Action and Share
    pub fn sort_field(&self) -> Option<SortField> {
        match self {
            Column::Campaign => Some(SortField::CampaignTitle),
            Column::Url => Some(SortField::OriginalUrl),
            Column::Category => Some(SortField::Category),
            Column::Clicks => Some(SortField::ClickCount),
            Column::Action | Column::Share => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
    ViewAnalytics,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
            RowAction::ViewAnalytics => "Analytics",
        }
    }
}

/// Row actions the current role may use, in display order
pub fn row_actions(perms: &dyn PermissionSet) -> Vec<RowAction> {
    let mut actions = Vec::with_capacity(3);
    if perms.can_edit() {
        actions.push(RowAction::Edit);
    }
    if perms.can_delete() {
        actions.push(RowAction::Delete);
    }
    if perms.can_view() {
        actions.push(RowAction::ViewAnalytics);
    }
    actions
}

pub fn can_add(perms: &dyn PermissionSet) -> bool {
    perms.can_create()
}

/// Route of the analytics page for a link
pub fn analytics_route(id: &str) -> String {
    format!("/analytics/{}", urlencoding::encode(id))
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRow {
    pub id: String,
    pub campaign: String,
    /// Display text of the URL cell
    pub url: String,
    /// Target of the URL cell: the redirect endpoint, not the raw URL
    pub href: String,
    pub category: String,
    pub clicks: u64,
    pub actions: Vec<RowAction>,
    pub share_url: String,
}

pub fn build_rows(links: &[Link], base_url: &str, perms: &dyn PermissionSet) -> Vec<LinkRow> {
    let actions = row_actions(perms);
    links
        .iter()
        .map(|link| {
            let redirect = api::redirect_url(base_url, &link.id);
            LinkRow {
                id: link.id.clone(),
                campaign: link.campaign_title.clone(),
                url: link.original_url.clone(),
                href: redirect.clone(),
                category: link.category.clone(),
                clicks: link.click_count,
                actions: actions.clone(),
                share_url: redirect,
            }
        })
        .collect()
}

/// Header summary; `None` when nothing matched
pub fn summary(total: u64, filter: &CategoryFilter) -> Option<String> {
    if total == 0 {
        return None;
    }
    Some(match filter {
        CategoryFilter::All => format!("Showing {} total links", total),
        CategoryFilter::Only(category) => {
            format!("Showing {} links in \"{}\" category", total, category)
        }
    })
}
