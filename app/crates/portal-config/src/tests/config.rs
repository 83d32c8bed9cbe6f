use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, DEFAULT_BASE_URL, DEFAULT_CREDENTIAL_KEY};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::remove("PORTAL_API_BASE_URL");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url.as_str(), eq(DEFAULT_BASE_URL));
    assert_that!(
        config.session.credential_key.as_str(),
        eq(DEFAULT_CREDENTIAL_KEY)
    );
    assert_that!(config.logging.level.0, eq(LevelFilter::Warn));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_dir_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested");
    let _dir = EnvGuard::set("PORTAL_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.exists());
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
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _url = EnvGuard::remove("PORTAL_API_BASE_URL");
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [api]
              base_url = "https://portal.example.com/api"

              [session]
              credential_key = "acme_token"

              [logging]
              level = "debug"
              colored = false
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.api.base_url.as_str(),
        eq("https://portal.example.com/api")
    );
    assert_that!(config.session.credential_key.as_str(), eq("acme_token"));
    assert_that!(config.logging.level.0, eq(LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[api]\nbase_url = \"https://from-file.example.com/api\"",
    )
    .unwrap();
    let _url = EnvGuard::set("PORTAL_API_BASE_URL", "http://127.0.0.1:9999/api");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("http://127.0.0.1:9999/api"));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _level = EnvGuard::set("PORTAL_LOG_LEVEL", "error");
    let _colored = EnvGuard::set("PORTAL_LOG_COLORED", "0");
    let _file = EnvGuard::set("PORTAL_LOG_FILE", "portal.log");
    let _key = EnvGuard::set("PORTAL_SESSION_CREDENTIAL_KEY", "other_token");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.level.0, eq(LevelFilter::Error));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), eq(Some("portal.log")));
    assert_that!(config.session.credential_key.as_str(), eq("other_token"));
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[api\nbase_url = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    assert!(result.unwrap_err().to_string().contains("TOML parse error"));
}

#[test]
#[serial]
fn given_explicit_credential_dir_when_credential_dir_then_uses_it() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let creds = temp.path().join("creds");
    let _dir = EnvGuard::set("PORTAL_SESSION_CREDENTIAL_DIR", creds.to_str().unwrap());

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.credential_dir().unwrap(), eq(&creds));
}
