use std::fmt;

use crate::api::ApiError;

#[derive(Debug, Clone)]
pub enum AffilinkError {
    Config(String),
    Api(String),
    Validation(String),
    Clipboard(String),
    Terminal(String),
    Serialization(String),
}

impl AffilinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            AffilinkError::Config(_) => "E001",
            AffilinkError::Api(_) => "E002",
            AffilinkError::Validation(_) => "E003",
            AffilinkError::Clipboard(_) => "E004",
            AffilinkError::Terminal(_) => "E005",
            AffilinkError::Serialization(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            AffilinkError::Config(_) => "Configuration Error",
            AffilinkError::Api(_) => "API Request Error",
            AffilinkError::Validation(_) => "Validation Error",
            AffilinkError::Clipboard(_) => "Clipboard Error",
            AffilinkError::Terminal(_) => "Terminal Error",
            AffilinkError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            AffilinkError::Config(msg)
            | AffilinkError::Api(msg)
            | AffilinkError::Validation(msg)
            | AffilinkError::Clipboard(msg)
            | AffilinkError::Terminal(msg)
            | AffilinkError::Serialization(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AffilinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AffilinkError {}

// 便捷的构造函数
impl AffilinkError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        AffilinkError::Config(msg.into())
    }

    pub fn api<T: Into<String>>(msg: T) -> Self {
        AffilinkError::Api(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        AffilinkError::Validation(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        AffilinkError::Clipboard(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        AffilinkError::Terminal(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        AffilinkError::Serialization(msg.into())
    }
}

impl From<ApiError> for AffilinkError {
    fn from(err: ApiError) -> Self {
        AffilinkError::Api(err.to_string())
    }
}

impl From<std::io::Error> for AffilinkError {
    fn from(err: std::io::Error) -> Self {
        AffilinkError::Terminal(err.to_string())
    }
}

impl From<serde_json::Error> for AffilinkError {
    fn from(err: serde_json::Error) -> Self {
        AffilinkError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for AffilinkError {
    fn from(err: config::ConfigError) -> Self {
        AffilinkError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AffilinkError {
    fn from(err: toml::ser::Error) -> Self {
        AffilinkError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AffilinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_unique() {
        let errors = [
            AffilinkError::config("x"),
            AffilinkError::api("x"),
            AffilinkError::validation("x"),
            AffilinkError::clipboard("x"),
            AffilinkError::terminal("x"),
            AffilinkError::serialization("x"),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_format_simple() {
        let err = AffilinkError::config("api.base_url is not a valid URL");
        assert_eq!(
            err.format_simple(),
            "Configuration Error: api.base_url is not a valid URL"
        );
        assert_eq!(err.to_string(), err.format_simple());
    }

    #[test]
    fn test_format_colored_contains_parts() {
        let err = AffilinkError::api("connection refused");
        let s = err.format_colored();
        assert!(s.contains("E002"), "got: {}", s);
        assert!(s.contains("connection refused"), "got: {}", s);
    }

    #[test]
    fn test_from_api_error() {
        let err: AffilinkError = ApiError::Transport("timed out".into()).into();
        assert!(matches!(err, AffilinkError::Api(_)));
        assert!(err.message().contains("timed out"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::other("tty gone");
        let err: AffilinkError = io.into();
        assert!(matches!(err, AffilinkError::Terminal(_)));
    }
}
