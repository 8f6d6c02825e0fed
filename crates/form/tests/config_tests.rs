//! Configuration loading tests

use std::fs;
use std::time::Duration;

use anyhow::Result;
use kainji_form::FormConfig;
use tempfile::TempDir;

fn create_test_config_content() -> String {
    r#"
[notifications]
auth_change_ms = 2500
outcome_ms = 5000

[form]
announce_initial_state = false

[logging]
log_level = "debug"
"#
    .to_string()
}

#[test]
fn test_config_loading_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("kainji.toml");
    fs::write(&config_path, create_test_config_content())?;

    let config = FormConfig::from_file(&config_path)?;

    assert_eq!(config.notifications.auth_change_duration(), Duration::from_millis(2500));
    assert_eq!(config.notifications.outcome_duration(), Duration::from_millis(5000));
    assert!(!config.form.announce_initial_state);
    assert_eq!(config.logging.log_level, "debug");

    Ok(())
}

#[test]
fn test_missing_file_falls_back_to_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = FormConfig::load_or_default(temp_dir.path().join("absent.toml"))?;
    assert_eq!(config, FormConfig::default());
    Ok(())
}

#[test]
fn test_malformed_file_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("broken.toml");
    fs::write(&config_path, "[notifications\nauth_change_ms = ")?;

    let err = FormConfig::load_or_default(&config_path).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
    Ok(())
}

#[test]
fn test_config_round_trips_through_toml() -> Result<()> {
    let config = FormConfig::default();
    let rendered = toml::to_string_pretty(&config)?;
    assert_eq!(FormConfig::from_toml(&rendered)?, config);
    Ok(())
}
