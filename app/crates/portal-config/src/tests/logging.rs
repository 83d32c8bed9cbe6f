use crate::{LogLevel, LoggingConfig};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use log::LevelFilter;

#[test]
fn given_known_level_when_parse_then_matches() {
    assert_that!(LogLevel::from_str("TRACE").unwrap().0, eq(LevelFilter::Trace));
    assert_that!(LogLevel::from_str("off").unwrap().0, eq(LevelFilter::Off));
}

#[test]
fn given_unknown_level_when_parse_then_defaults_to_warn() {
    assert_that!(LogLevel::from_str("loud").unwrap().0, eq(LevelFilter::Warn));
}

#[test]
fn given_blank_log_file_when_validate_then_error() {
    let config = LoggingConfig {
        file: Some(" ".to_string()),
        ..LoggingConfig::default()
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_default_logging_when_validate_then_ok() {
    assert_that!(LoggingConfig::default().validate(), ok(anything()));
}

#[test]
fn given_warning_alias_with_padding_when_parse_then_warn() {
    assert_that!(LogLevel::parse(" Warning ").0, eq(LevelFilter::Warn));
    assert_that!(LogLevel::parse("INFO").0, eq(LevelFilter::Info));
}

#[test]
fn given_level_when_displayed_then_lowercase_name() {
    assert_that!(LogLevel::parse("debug").to_string(), eq("debug"));
    assert_that!(LogLevel::default().to_string(), eq("warn"));
}

#[test]
fn given_debug_or_trace_then_verbose() {
    assert_that!(LogLevel::parse("trace").is_verbose(), eq(true));
    assert_that!(LogLevel::parse("debug").is_verbose(), eq(true));
    assert_that!(LogLevel::parse("info").is_verbose(), eq(false));
}

#[test]
fn given_unknown_level_in_toml_when_loaded_then_default() {
    let config: LoggingConfig = toml::from_str("level = \"chatty\"").unwrap();
    assert_that!(config.level, eq(LogLevel::default()));
}
