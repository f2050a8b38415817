use memopad::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("MEMOPAD_SERVER__PORT");
        env::remove_var("MEMOPAD_RESILIENCE__TIMEOUT_DISABLED");
        env::remove_var("MEMOPAD_SUMMARIZER__INTERVAL_SECS");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["memopad"]).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert!(!config.resilience.timeout_disabled);
    assert!(config.summarizer.enabled);
    assert_eq!(config.summarizer.interval_secs, 300);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("MEMOPAD_SERVER__PORT", "9090");
        env::set_var("MEMOPAD_SUMMARIZER__INTERVAL_SECS", "60");
    }

    let config = AppConfig::load_from_args(["memopad"]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.summarizer.interval_secs, 60);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_override_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("MEMOPAD_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["memopad", "--port", "4040"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 4040);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let config_content = r#"
server:
  port: 7070
summarizer:
  enabled: false
    "#;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("test_config.yaml");
    fs::write(&file_path, config_content).expect("Failed to write temp config");

    unsafe {
        env::set_var("CONFIG_FILE", &file_path);
    }

    let config = AppConfig::load_from_args(["memopad"]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert!(!config.summarizer.enabled);

    clear_env_vars();
}
