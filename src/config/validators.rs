//! 配置值验证模块

use url::Url;

/// 允许的分页大小
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [2, 20, 50, 100];

/// 后端地址必须是 http(s) 绝对 URL
pub fn validate_base_url(value: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| format!("'{}' is not a valid URL ({})", value, e))?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(format!(
                "unsupported scheme '{}'. Valid: http, https",
                other
            ));
        }
    }
    if url.host_str().is_none() {
        return Err(format!("'{}' has no host", value));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(format!("'{}' must not carry a query or fragment", value));
    }
    Ok(())
}

pub fn validate_page_size(value: u32) -> Result<(), String> {
    if PAGE_SIZE_OPTIONS.contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "unsupported page size {}. Valid: {:?}",
            value, PAGE_SIZE_OPTIONS
        ))
    }
}

pub fn validate_log_format(value: &str) -> Result<(), String> {
    match value.to_lowercase().as_str() {
        "text" | "json" => Ok(()),
        _ => Err(format!("invalid log format '{}'. Valid: text, json", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        assert!(validate_base_url("http://localhost:5001").is_ok());
        assert!(validate_base_url("https://api.example.com/v1/").is_ok());
        assert!(validate_base_url("ftp://example.com").is_err());
        assert!(validate_base_url("localhost:5001").is_err());
        assert!(validate_base_url("https://api.example.com/?x=1").is_err());
        assert!(validate_base_url("").is_err());
    }

    #[test]
    fn test_page_size() {
        for size in PAGE_SIZE_OPTIONS {
            assert!(validate_page_size(size).is_ok());
        }
        assert!(validate_page_size(0).is_err());
        assert!(validate_page_size(10).is_err());
    }

    #[test]
    fn test_log_format() {
        assert!(validate_log_format("text").is_ok());
        assert!(validate_log_format("JSON").is_ok());
        assert!(validate_log_format("xml").is_err());
    }
}
