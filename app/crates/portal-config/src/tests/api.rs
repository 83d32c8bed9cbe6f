use crate::ApiConfig;

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

#[test]
fn given_default_api_config_when_validate_then_ok() {
    assert_that!(ApiConfig::default().validate(), ok(anything()));
}

#[test]
fn given_https_base_url_when_validate_then_ok() {
    let config = ApiConfig {
        base_url: "https://portal.example.com/api".to_string(),
        ..ApiConfig::default()
    };
    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_empty_base_url_when_validate_then_error() {
    let config = ApiConfig {
        base_url: "   ".to_string(),
        ..ApiConfig::default()
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_base_url_without_scheme_when_validate_then_error() {
    let config = ApiConfig {
        base_url: "portal.example.com/api".to_string(),
        ..ApiConfig::default()
    };
    let result = config.validate();
    assert_that!(result, err(anything()));
    assert!(result.unwrap_err().to_string().contains("http://"));
}
