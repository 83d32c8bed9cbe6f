use crate::logger::console_target;

use portal_config::LogLevel;

#[test]
fn test_console_target_only_when_verbose() {
    let debug: LogLevel = "debug".parse().unwrap();
    let warn: LogLevel = "warn".parse().unwrap();

    assert_eq!(
        console_target(debug.is_verbose(), "portal_store::store"),
        " [portal_store::store]"
    );
    assert_eq!(console_target(warn.is_verbose(), "portal_store::store"), "");
}
