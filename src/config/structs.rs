use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{AffilinkError, Result};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "affilink.toml";

/// 应用配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - api: 后端地址、超时、凭据
/// - dashboard: 仪表盘默认值
/// - permissions: 角色权限（只读能力集）
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub permissions: PermissionsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > TOML 文件 > 默认值
    /// ENV 前缀：AFL，分隔符：__
    /// 示例：AFL__API__BASE_URL=https://api.example.com
    ///
    /// 未指定路径时读取当前目录下的 `affilink.toml`（可选）；
    /// 显式指定的路径必须存在。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        use config::{Config, Environment, File};

        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            // 1. 从 TOML 文件加载
            .add_source(file)
            // 2. 从环境变量覆盖，前缀 AFL，分隔符 __
            .add_source(
                Environment::with_prefix("AFL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置，失败时返回可读的错误信息
    pub fn validate(&self) -> Result<()> {
        super::validators::validate_base_url(&self.api.base_url)
            .map_err(|e| AffilinkError::config(format!("api.base_url: {}", e)))?;
        super::validators::validate_page_size(self.dashboard.default_page_size)
            .map_err(|e| AffilinkError::config(format!("dashboard.default_page_size: {}", e)))?;
        super::validators::validate_log_format(&self.logging.format)
            .map_err(|e| AffilinkError::config(format!("logging.format: {}", e)))?;
        if self.api.timeout_secs == 0 {
            return Err(AffilinkError::config(
                "api.timeout_secs: must be greater than 0",
            ));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 后端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// 非空时作为 Cookie 头发送
    #[serde(default)]
    pub session_cookie: String,
    /// 非空时作为 `Authorization: Bearer` 发送
    #[serde(default)]
    pub bearer_token: String,
}

/// 仪表盘配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    /// 2, 20, 50 或 100
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
}

/// 权限配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PermissionsConfig {
    #[serde(default = "default_true")]
    pub can_create_link: bool,
    #[serde(default = "default_true")]
    pub can_edit_link: bool,
    #[serde(default = "default_true")]
    pub can_delete_link: bool,
    #[serde(default = "default_true")]
    pub can_view_link: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    "http://localhost:5001".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_page_size() -> u32 {
    2
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    Some("affilink.log".to_string())
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            session_cookie: String::new(),
            bearer_token: String::new(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
        }
    }
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self {
            can_create_link: true,
            can_edit_link: true,
            can_delete_link: true,
            can_view_link: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dashboard.default_page_size, 2);
        assert!(config.permissions.can_delete_link);
    }

    #[test]
    fn test_sample_config_roundtrips() {
        let sample = AppConfig::generate_sample_config();
        assert!(sample.contains("[api]"));
        assert!(sample.contains("[permissions]"));
        let parsed: AppConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: AppConfig = toml::from_str(
            r#"
            [permissions]
            can_delete_link = false
            "#,
        )
        .unwrap();
        assert!(!parsed.permissions.can_delete_link);
        assert!(parsed.permissions.can_create_link);
        assert_eq!(parsed.api.base_url, "http://localhost:5001");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.api.base_url = "not a url".into();
        let err = config.validate().unwrap_err();
        assert!(err.message().starts_with("api.base_url"), "got: {}", err);

        let mut config = AppConfig::default();
        config.dashboard.default_page_size = 10;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
