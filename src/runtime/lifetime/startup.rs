//! Start-up wiring shared by the CLI and TUI modes

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::api::{HttpLinkApi, LinkApi};
use crate::config::AppConfig;
use crate::dashboard::{LinkDashboard, PageSize, PermissionSet, Permissions, QueryState};

/// Everything a front end needs to build dashboards
pub struct StartupContext {
    pub config: AppConfig,
    pub api: Arc<dyn LinkApi>,
    pub permissions: Arc<dyn PermissionSet>,
}

impl StartupContext {
    /// Wire an arbitrary API implementation; used by tests and embedders
    pub fn new(
        config: AppConfig,
        api: Arc<dyn LinkApi>,
        permissions: Arc<dyn PermissionSet>,
    ) -> Self {
        Self {
            config,
            api,
            permissions,
        }
    }

    /// Initial query state from `[dashboard]`
    pub fn initial_query(&self) -> QueryState {
        let page_size =
            PageSize::try_from(self.config.dashboard.default_page_size).unwrap_or_default();
        QueryState::with_page_size(page_size)
    }

    pub fn dashboard(&self) -> LinkDashboard {
        self.dashboard_with_query(self.initial_query())
    }

    pub fn dashboard_with_query(&self, query: QueryState) -> LinkDashboard {
        LinkDashboard::with_query(
            Arc::clone(&self.api),
            Arc::clone(&self.permissions),
            query,
        )
    }
}

/// CLI / TUI 启动预处理：构建 API 客户端与权限集
pub fn prepare_startup(config: AppConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    config.validate().context("Invalid configuration")?;

    let api: Arc<dyn LinkApi> = Arc::new(HttpLinkApi::new(&config.api));
    let permissions: Arc<dyn PermissionSet> = Arc::new(Permissions::from(&config.permissions));
    info!(
        "Using API endpoint: {} (timeout {}s)",
        api.base_url(),
        config.api.timeout_secs
    );

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );
    Ok(StartupContext::new(config, api, permissions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_startup_uses_config() {
        let mut config = AppConfig::default();
        config.dashboard.default_page_size = 50;
        config.permissions.can_create_link = false;
        config.api.base_url = "https://api.example.com/".into();

        let ctx = prepare_startup(config).unwrap();
        assert_eq!(ctx.initial_query().page_size, PageSize::Fifty);
        assert!(!ctx.permissions.can_create());
        assert_eq!(ctx.api.base_url(), "https://api.example.com");
        assert_eq!(
            ctx.dashboard().share_url("x"),
            "https://api.example.com/links/r/x"
        );
    }

    #[test]
    fn test_prepare_startup_rejects_invalid_config() {
        let mut config = AppConfig::default();
        config.api.base_url = "nope".into();
        assert!(prepare_startup(config).is_err());
    }
}
