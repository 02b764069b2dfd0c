//! HTTP implementation of [`LinkApi`]
//!
//! Uses a shared ureq [`Agent`]; every blocking call runs inside
//! `spawn_blocking` so the dashboard's event loop never stalls on the network.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace, warn};
use ureq::http::Response;
use ureq::{Agent, Body, RequestBuilder};

use super::types::{ErrorBody, LinkPage, LinkPayload, ListQuery, decode_categories, decode_link_page};
use super::{ApiError, LinkApi};
use crate::config::ApiConfig;

/// ureq-backed API client
///
/// Cheap to clone: the agent shares its connection pool.
#[derive(Clone)]
pub struct HttpLinkApi {
    agent: Agent,
    base_url: String,
    session_cookie: Option<String>,
    bearer_token: Option<String>,
}

impl HttpLinkApi {
    pub fn new(config: &ApiConfig) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            // 非 2xx 也要读取响应体（INSUFFICIENT_FUNDS / error 字段）
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session_cookie: non_empty(&config.session_cookie),
            bearer_token: non_empty(&config.bearer_token),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn link_endpoint(&self, id: &str) -> String {
        self.endpoint(&format!("/links/{}", urlencoding::encode(id)))
    }

    /// Attach credentials; applied to every request
    fn authorize<B>(&self, mut req: RequestBuilder<B>) -> RequestBuilder<B> {
        if let Some(cookie) = &self.session_cookie {
            req = req.header("Cookie", cookie.as_str());
        }
        if let Some(token) = &self.bearer_token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        req
    }

    fn list_links_sync(&self, query: &ListQuery) -> Result<LinkPage, ApiError> {
        let url = self.endpoint("/links");
        let mut req = self.authorize(self.agent.get(&url));
        for (key, value) in query.pairs() {
            req = req.query(key, value);
        }
        let body = read_body(req.call())?;
        Ok(decode_link_page(&body)?)
    }

    fn list_categories_sync(&self) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint("/links/categories");
        let body = read_body(self.authorize(self.agent.get(&url)).call())?;
        Ok(decode_categories(&body)?)
    }

    fn create_link_sync(&self, payload: &LinkPayload) -> Result<(), ApiError> {
        let url = self.endpoint("/links");
        read_body(self.authorize(self.agent.post(&url)).send_json(payload)).map(|_| ())
    }

    fn update_link_sync(&self, id: &str, payload: &LinkPayload) -> Result<(), ApiError> {
        let url = self.link_endpoint(id);
        read_body(self.authorize(self.agent.put(&url)).send_json(payload)).map(|_| ())
    }

    fn delete_link_sync(&self, id: &str) -> Result<(), ApiError> {
        let url = self.link_endpoint(id);
        read_body(self.authorize(self.agent.delete(&url)).call()).map(|_| ())
    }

    /// Run a blocking request on the tokio blocking pool
    async fn blocking<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(HttpLinkApi) -> Result<T, ApiError> + Send + 'static,
    {
        let this = self.clone();
        tokio::task::spawn_blocking(move || f(this))
            .await
            .unwrap_or_else(|e| {
                warn!("API spawn_blocking failed: {}", e);
                Err(ApiError::Transport(format!("request task failed: {}", e)))
            })
    }
}

#[async_trait]
impl LinkApi for HttpLinkApi {
    async fn list_links(&self, query: &ListQuery) -> Result<LinkPage, ApiError> {
        debug!("Fetching links with params: {:?}", query);
        let query = query.clone();
        self.blocking(move |api| api.list_links_sync(&query)).await
    }

    async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        self.blocking(|api| api.list_categories_sync()).await
    }

    async fn create_link(&self, payload: &LinkPayload) -> Result<(), ApiError> {
        let payload = payload.clone();
        self.blocking(move |api| api.create_link_sync(&payload)).await
    }

    async fn update_link(&self, id: &str, payload: &LinkPayload) -> Result<(), ApiError> {
        let id = id.to_string();
        let payload = payload.clone();
        self.blocking(move |api| api.update_link_sync(&id, &payload))
            .await
    }

    async fn delete_link(&self, id: &str) -> Result<(), ApiError> {
        let id = id.to_string();
        self.blocking(move |api| api.delete_link_sync(&id)).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Turn a ureq result into the response text or an [`ApiError`]
fn read_body(result: Result<Response<Body>, ureq::Error>) -> Result<String, ApiError> {
    let resp = result.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    let text = resp
        .into_body()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if status.is_success() {
        trace!("API response {}: {}", status, text);
        Ok(text)
    } else {
        debug!("API error response {}: {}", status, text);
        Err(ApiError::Status {
            status: status.as_u16(),
            body: ErrorBody::parse(&text),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let api = HttpLinkApi::new(&api_config("http://localhost:5001/"));
        assert_eq!(api.base_url(), "http://localhost:5001");
        assert_eq!(api.endpoint("/links"), "http://localhost:5001/links");
    }

    #[test]
    fn test_link_endpoint_encodes_id() {
        let api = HttpLinkApi::new(&api_config("http://localhost:5001"));
        assert_eq!(
            api.link_endpoint("66b1f0"),
            "http://localhost:5001/links/66b1f0"
        );
        assert_eq!(
            api.link_endpoint("../admin"),
            "http://localhost:5001/links/..%2Fadmin"
        );
    }

    #[test]
    fn test_blank_credentials_are_ignored() {
        let config = ApiConfig {
            session_cookie: "   ".to_string(),
            bearer_token: String::new(),
            ..ApiConfig::default()
        };
        let api = HttpLinkApi::new(&config);
        assert!(api.session_cookie.is_none());
        assert!(api.bearer_token.is_none());
    }

    #[test]
    fn test_credentials_are_kept() {
        let config = ApiConfig {
            session_cookie: "jwtToken=abc".to_string(),
            bearer_token: "t0k3n".to_string(),
            ..ApiConfig::default()
        };
        let api = HttpLinkApi::new(&config);
        assert_eq!(api.session_cookie.as_deref(), Some("jwtToken=abc"));
        assert_eq!(api.bearer_token.as_deref(), Some("t0k3n"));
    }

    /// 需要本地无服务监听的端口，CI 环境可能行为不同
    #[tokio::test]
    #[ignore]
    async fn test_unreachable_server_is_transport_error() {
        let api = HttpLinkApi::new(&api_config("http://127.0.0.1:9"));
        let err = api.list_categories().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)), "got: {:?}", err);
    }
}
