use tempfile::TempDir;

use crate::backend::{MemoryTeamRepository, TeamRepository};
use crate::config::{load_config_from, save_config_to, Config};
use crate::devcircle_error;
use crate::error::{DevCircleError, ErrorContext};
use crate::models::TeamDraft;

#[test]
fn test_unreadable_config_names_the_path() {
    // a directory exists but cannot be read as a file
    let dir = TempDir::new().unwrap();

    match load_config_from(dir.path()) {
        Err(DevCircleError::Unknown(msg)) => {
            assert!(msg.starts_with("Failed to read"));
            assert!(msg.contains(&dir.path().display().to_string()));
        }
        other => panic!("Expected DevCircleError::Unknown, got {:?}", other),
    }
}

#[test]
fn test_unwritable_config_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join(".devcircle.json");

    match save_config_to(&Config::default(), &path) {
        Err(DevCircleError::Unknown(msg)) => {
            assert!(msg.contains("Failed to write"));
            assert!(msg.contains(".devcircle.json"));
        }
        other => panic!("Expected DevCircleError::Unknown, got {:?}", other),
    }
}

#[tokio::test]
async fn test_blank_team_name_is_invalid_input() {
    let repo = MemoryTeamRepository::with_sample_team();
    let err = repo.update_team(TeamDraft::new("", "", 3)).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid input: team name is empty");
}

#[test]
fn test_missing_value_context() {
    let home: Option<&str> = None;
    match home.context("Could not locate a cache directory") {
        Err(DevCircleError::Unknown(msg)) => assert_eq!(msg, "Could not locate a cache directory"),
        other => panic!("Expected DevCircleError::Unknown, got {:?}", other),
    }
}

#[test]
fn test_macro_formats_arguments() {
    match devcircle_error!(ConfigError, "{} is not valid: {}", "a.json", "eof") {
        DevCircleError::ConfigError(msg) => assert_eq!(msg, "a.json is not valid: eof"),
        other => panic!("Expected DevCircleError::ConfigError, got {:?}", other),
    }
}

#[test]
fn test_error_display() {
    assert_eq!(DevCircleError::TeamNotFound.to_string(), "No team found");
    assert_eq!(
        DevCircleError::MemberNotFound("user9".to_string()).to_string(),
        "Member not found: user9"
    );
}
