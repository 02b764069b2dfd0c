//! Wire types for the affiliate link API
//!
//! The server speaks camelCase for link records and snake_case for request
//! bodies; both shapes are kept here so the rest of the crate never touches
//! raw JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error code the server uses for billing failures
pub const INSUFFICIENT_FUNDS: &str = "INSUFFICIENT_FUNDS";

/// 一条联盟链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub campaign_title: String,
    #[serde(default)]
    pub original_url: String,
    #[serde(default)]
    pub category: String,
    /// Maintained by the redirect endpoint, display only
    #[serde(default)]
    pub click_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for `POST /links` and `PUT /links/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPayload {
    pub campaign_title: String,
    pub original_url: String,
    pub category: String,
}

/// One page of links plus the server-side match count
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkPage {
    pub links: Vec<Link>,
    pub total: u64,
}

/// Query string of `GET /links`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub current_page: u32,
    pub page_size: u32,
    pub search_term: String,
    pub sort_field: String,
    pub sort_order: String,
    pub category_filter: String,
}

impl ListQuery {
    /// Query parameters in the order the server documents them
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currentPage", self.current_page.to_string()),
            ("pageSize", self.page_size.to_string()),
            ("searchTerm", self.search_term.clone()),
            ("sortField", self.sort_field.clone()),
            ("sortOrder", self.sort_order.clone()),
            ("categoryFilter", self.category_filter.clone()),
        ]
    }
}

/// Error body returned on non-2xx responses
///
/// Either `{ "error": "..." }` or `{ "code": "INSUFFICIENT_FUNDS" }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl ErrorBody {
    /// Parse an error body, tolerating non-JSON payloads
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}

/// `{ "data": ... }` envelope; a missing or null `data` decodes as `None`
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub data: Option<T>,
}

/// `{ "links": [...], "total": n }` with both members optional
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawLinkPage {
    #[serde(default)]
    pub links: Option<Vec<Link>>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl From<RawLinkPage> for LinkPage {
    fn from(raw: RawLinkPage) -> Self {
        LinkPage {
            links: raw.links.unwrap_or_default(),
            total: raw.total.unwrap_or(0),
        }
    }
}

/// Decode the body of `GET /links`
pub(crate) fn decode_link_page(raw: &str) -> serde_json::Result<LinkPage> {
    let envelope: Envelope<RawLinkPage> = serde_json::from_str(raw)?;
    Ok(envelope.data.unwrap_or_default().into())
}

/// Decode the body of `GET /links/categories`
pub(crate) fn decode_categories(raw: &str) -> serde_json::Result<Vec<String>> {
    let envelope: Envelope<Vec<String>> = serde_json::from_str(raw)?;
    Ok(envelope.data.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_deserializes_server_shape() {
        let raw = r#"{
            "_id": "66b1f0",
            "campaignTitle": "Summer Sale",
            "originalUrl": "https://shop.example/summer",
            "category": "fashion",
            "clickCount": 42,
            "createdAt": "2024-06-01T10:00:00Z",
            "user": "ignored"
        }"#;
        let link: Link = serde_json::from_str(raw).unwrap();
        assert_eq!(link.id, "66b1f0");
        assert_eq!(link.campaign_title, "Summer Sale");
        assert_eq!(link.click_count, 42);
        assert!(link.created_at.is_some());
    }

    #[test]
    fn test_link_defaults_missing_fields() {
        let link: Link = serde_json::from_str(r#"{"_id":"a"}"#).unwrap();
        assert_eq!(link.click_count, 0);
        assert!(link.created_at.is_none());
        assert!(link.category.is_empty());
    }

    #[test]
    fn test_payload_uses_snake_case() {
        let payload = LinkPayload {
            campaign_title: "t".into(),
            original_url: "u".into(),
            category: "c".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["campaign_title"], "t");
        assert_eq!(json["original_url"], "u");
        assert_eq!(json["category"], "c");
    }

    #[test]
    fn test_decode_link_page() {
        let raw = r#"{"data":{"links":[{"_id":"1"},{"_id":"2"}],"total":5}}"#;
        let page = decode_link_page(raw).unwrap();
        assert_eq!(page.links.len(), 2);
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_decode_link_page_missing_members() {
        assert_eq!(decode_link_page(r#"{"data":{}}"#).unwrap(), LinkPage::default());
        assert_eq!(decode_link_page(r#"{"data":null}"#).unwrap(), LinkPage::default());
        assert_eq!(
            decode_link_page(r#"{"data":{"links":null,"total":null}}"#).unwrap(),
            LinkPage::default()
        );
    }

    #[test]
    fn test_decode_categories() {
        let cats = decode_categories(r#"{"data":["books","tech"]}"#).unwrap();
        assert_eq!(cats, vec!["books".to_string(), "tech".to_string()]);
        assert!(decode_categories(r#"{"data":null}"#).unwrap().is_empty());
        assert!(decode_categories(r#"{}"#).unwrap().is_empty());
    }

    #[test]
    fn test_error_body_parse() {
        let body = ErrorBody::parse(r#"{"code":"INSUFFICIENT_FUNDS"}"#);
        assert_eq!(body.code.as_deref(), Some(INSUFFICIENT_FUNDS));

        let body = ErrorBody::parse(r#"{"error":"Unauthorized access"}"#);
        assert_eq!(body.error.as_deref(), Some("Unauthorized access"));

        assert_eq!(ErrorBody::parse("<html>502</html>"), ErrorBody::default());
    }

    #[test]
    fn test_list_query_pairs() {
        let q = ListQuery {
            current_page: 0,
            page_size: 2,
            search_term: String::new(),
            sort_field: "createdAt".into(),
            sort_order: "desc".into(),
            category_filter: "all".into(),
        };
        let pairs = q.pairs();
        assert_eq!(pairs[0], ("currentPage", "0".to_string()));
        assert_eq!(pairs[1], ("pageSize", "2".to_string()));
        assert_eq!(pairs[5], ("categoryFilter", "all".to_string()));
    }
}
