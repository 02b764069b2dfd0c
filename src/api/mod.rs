//! Affiliate link API client layer
//!
//! The dashboard talks to the backend only through the [`LinkApi`] trait.
//! [`HttpLinkApi`] is the production implementation; tests plug in
//! in-memory fakes.
//!
//! # Endpoints
//!
//! ```text
//! GET    /links?currentPage&pageSize&searchTerm&sortField&sortOrder&categoryFilter
//! GET    /links/categories
//! POST   /links
//! PUT    /links/{id}
//! DELETE /links/{id}
//! GET    /links/r/{id}        (public redirect, only ever built as a URL)
//! ```

mod http;
mod types;

pub use http::HttpLinkApi;
pub use types::{ErrorBody, INSUFFICIENT_FUNDS, Link, LinkPage, LinkPayload, ListQuery};

use std::fmt;

use async_trait::async_trait;

// ============ ApiError ============

/// Errors from the API layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Server answered with a non-2xx status
    Status { status: u16, body: ErrorBody },
    /// Request never produced a response (DNS, connect, timeout)
    Transport(String),
    /// 2xx response whose body could not be decoded
    Decode(String),
}

impl ApiError {
    /// Server flagged the request as a billing failure
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(
            self,
            ApiError::Status { body, .. } if body.code.as_deref() == Some(INSUFFICIENT_FUNDS)
        )
    }

    /// `error` member of the response body, if the server sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => body.error.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status { status, body } => {
                match (body.error.as_deref(), body.code.as_deref()) {
                    (Some(msg), _) => write!(f, "HTTP {}: {}", status, msg),
                    (None, Some(code)) => write!(f, "HTTP {}: {}", status, code),
                    (None, None) => write!(f, "HTTP {}", status),
                }
            }
            ApiError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ApiError::Decode(msg) => write!(f, "Invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

// ============ LinkApi ============

/// Remote link store as seen by the dashboard
///
/// Every call carries the configured credentials. Sorting, filtering and
/// pagination all happen server-side.
#[async_trait]
pub trait LinkApi: Send + Sync {
    /// `GET /links`
    async fn list_links(&self, query: &ListQuery) -> Result<LinkPage, ApiError>;

    /// `GET /links/categories`
    async fn list_categories(&self) -> Result<Vec<String>, ApiError>;

    /// `POST /links`; the echoed record is not used
    async fn create_link(&self, payload: &LinkPayload) -> Result<(), ApiError>;

    /// `PUT /links/{id}`
    async fn update_link(&self, id: &str, payload: &LinkPayload) -> Result<(), ApiError>;

    /// `DELETE /links/{id}`
    async fn delete_link(&self, id: &str) -> Result<(), ApiError>;

    /// Base endpoint, used to build public redirect URLs
    fn base_url(&self) -> &str;
}

/// Public redirect URL for a link; this is what gets shared
pub fn redirect_url(base_url: &str, id: &str) -> String {
    format!(
        "{}/links/r/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(id)
    )
}
