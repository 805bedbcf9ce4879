use crate::tests::{EnvGuard, setup_config_dir, write_config};
use crate::{Config, StorageKind};

use googletest::assert_that;
use googletest::prelude::{anything, eq, none, ok, some};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.preferences.storage, eq(StorageKind::File));
    assert_that!(config.preferences.dir.as_str(), eq(crate::DEFAULT_STORAGE_DIR));
    assert_that!(config.auth.login_path.as_str(), eq("/login"));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Info));
    assert_that!(config.logging.file, none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join("itsm");
    let _guard = EnvGuard::set("ITSM_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
            [preferences]
            storage = "memory"
            dir = "prefs"

            [auth]
            login_path = "/sso/login"

            [logging]
            level = "debug"
            colored = false
        "#,
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.preferences.storage, eq(StorageKind::Memory));
    assert_that!(config.preferences.dir.as_str(), eq("prefs"));
    assert_that!(config.auth.login_path.as_str(), eq("/sso/login"));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[auth]\nlogin_path = \"/from-toml\"");
    let _login = EnvGuard::set("ITSM_AUTH_LOGIN_PATH", "/from-env");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.auth.login_path.as_str(), eq("/from-env"));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _storage = EnvGuard::set("ITSM_PREFERENCES_STORAGE", "none");
    let _dir = EnvGuard::set("ITSM_PREFERENCES_DIR", "state");
    let _level = EnvGuard::set("ITSM_LOG_LEVEL", "warn");
    let _colored = EnvGuard::set("ITSM_LOG_COLORED", "false");
    let _file = EnvGuard::set("ITSM_LOG_FILE", "console.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.preferences.storage, eq(StorageKind::None));
    assert_that!(config.preferences.dir.as_str(), eq("state"));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Warn));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file, some(eq("console.log")));
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_joined_under_log_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("ITSM_LOG_FILE", "console.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path().unwrap();

    // Then
    assert_eq!(path, Some(temp.path().join("log").join("console.log")));
}

#[test]
#[serial]
fn given_defaults_when_preferences_dir_then_under_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.preferences_dir().unwrap(), temp.path().join("storage"));
}

#[test]
fn given_no_log_file_when_destination_then_stderr() {
    let config = Config::default();

    assert_that!(config.logging.destination(), eq("stderr"));
}

#[test]
#[serial]
fn given_log_file_configured_when_destination_then_file_name() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[logging]\nfile = \"console.log\"\n");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.destination(), eq("console.log"));
}
