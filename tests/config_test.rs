//! 設定ファイルのテスト

use mess_menu::config::Config;
use tempfile::tempdir;

#[test]
fn test_missing_config_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.extension, "xlsx");
    assert_eq!(config.timeout().as_secs(), 10);
}

#[test]
fn test_config_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        source: "https://mess.example.org".into(),
        extension: "xlsx".into(),
        timeout_seconds: 3,
    };
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"source": "/srv/menus"}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.source, "/srv/menus");
    assert_eq!(config.timeout_seconds, 10);
}

#[test]
fn test_invalid_config_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_zero_timeout_falls_back_to_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"timeout_seconds": 0}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.timeout_seconds, 0);
    assert_eq!(config.timeout(), mess_menu::loader::DEFAULT_TIMEOUT);
}
