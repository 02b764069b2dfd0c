//! Configuration loading tests

use std::fs;

use affilink::config::AppConfig;
use affilink::dashboard::{PageSize, PermissionSet};
use affilink::runtime::lifetime::startup::prepare_startup;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("affilink.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "https://links.example.com"
timeout_secs = 3

[dashboard]
default_page_size = 20

[permissions]
can_delete_link = false
"#,
    );

    let config = AppConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(config.api.base_url, "https://links.example.com");
    assert_eq!(config.api.timeout_secs, 3);
    assert_eq!(config.dashboard.default_page_size, 20);
    assert!(!config.permissions.can_delete_link);
    assert!(config.permissions.can_create_link);
}

#[test]
fn test_load_rejects_unsupported_page_size() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[dashboard]\ndefault_page_size = 7\n");

    let err = AppConfig::load(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("default_page_size"));
}

#[test]
fn test_load_rejects_bad_base_url() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[api]\nbase_url = \"ftp://nope\"\n");

    let err = AppConfig::load(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("base_url"));
}

#[test]
fn test_explicit_path_must_exist() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.toml");
    assert!(AppConfig::load(Some(missing.as_path())).is_err());
}

#[test]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[logging]\nlevel = \"warn\"\n");

    // SAFETY: only this test touches AFL__LOGGING__LEVEL
    unsafe {
        std::env::set_var("AFL__LOGGING__LEVEL", "debug");
    }
    let config = AppConfig::load(Some(path.as_path()));
    unsafe {
        std::env::remove_var("AFL__LOGGING__LEVEL");
    }

    assert_eq!(config.unwrap().logging.level, "debug");
}

#[test]
fn test_sample_config_round_trips_through_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("affilink.toml");
    AppConfig::default().save_to_file(&path).unwrap();

    let loaded = AppConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(loaded.api, AppConfig::default().api);
    assert_eq!(loaded.dashboard, AppConfig::default().dashboard);
    assert!(AppConfig::generate_sample_config().contains("[api]"));
}

#[test]
fn test_startup_context_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[dashboard]
default_page_size = 50

[permissions]
can_create_link = false
can_edit_link = false
"#,
    );

    let ctx = prepare_startup(AppConfig::load(Some(path.as_path())).unwrap()).unwrap();
    assert_eq!(ctx.initial_query().page_size, PageSize::Fifty);
    assert!(!ctx.permissions.can_create());
    assert!(!ctx.permissions.can_edit());
    assert!(ctx.permissions.can_delete());

    let dashboard = ctx.dashboard();
    assert_eq!(dashboard.query().page_size, PageSize::Fifty);
}
