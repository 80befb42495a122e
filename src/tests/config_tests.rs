use std::fs;

use tempfile::TempDir;

use crate::config::{load_config_from, save_config_to, Config};
use crate::error::DevCircleError;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from(&dir.path().join(".devcircle.json")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.invite_origin, "http://localhost:5173");
    assert_eq!(config.load_delay_ms, 1000);
    assert_eq!(config.submit_delay_ms, 1500);
    assert_eq!(config.signup_redirect_ms, 2000);
    assert_eq!(config.notification_secs, 4);
    assert!(config.mock_team);
    assert_eq!(config.team_path(), "/hackathon/hack2024/team");
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".devcircle.json");
    let config = Config {
        invite_origin: "https://devcircle.example".to_string(),
        mock_team: false,
        ..Config::default()
    };

    save_config_to(&config, &path).unwrap();
    assert_eq!(load_config_from(&path).unwrap(), config);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".devcircle.json");
    fs::write(&path, r#"{ "load_delay_ms": 0, "default_hackathon": "spring" }"#).unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.load_delay_ms, 0);
    assert!(config.load_delay().is_zero());
    assert_eq!(config.default_hackathon, "spring");
    assert_eq!(config.submit_delay_ms, 1500);
}

#[test]
fn test_invalid_file_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".devcircle.json");
    fs::write(&path, "not json").unwrap();

    match load_config_from(&path) {
        Err(DevCircleError::ConfigError(msg)) => assert!(msg.contains("is not valid")),
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_invite_origin_override() {
    let base = Config::default();

    let set = base.clone().with_invite_origin(Some("https://devcircle.example"));
    assert_eq!(set.invite_origin, "https://devcircle.example");

    let trailing = base.clone().with_invite_origin(Some("  https://devcircle.example/  "));
    assert_eq!(trailing.invite_origin, "https://devcircle.example");

    let blank = base.clone().with_invite_origin(Some("   "));
    assert_eq!(blank.invite_origin, "http://localhost:5173");

    assert_eq!(base.clone().with_invite_origin(None), base);
}

#[test]
fn test_env_override_beats_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".devcircle.json");
    fs::write(&path, r#"{ "invite_origin": "https://from-file.example" }"#).unwrap();

    // no other test reads this variable
    std::env::set_var(crate::constants::INVITE_ORIGIN_ENV, "https://from-env.example/");
    let config = load_config_from(&path).unwrap().with_env_overrides();
    std::env::remove_var(crate::constants::INVITE_ORIGIN_ENV);

    assert_eq!(config.invite_origin, "https://from-env.example");
}
