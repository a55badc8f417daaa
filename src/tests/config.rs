use std::path::PathBuf;

use crate::config::Settings;
use crate::error::Error;

fn write_settings(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);

    std::fs::write(&path, body).unwrap();

    path
}

#[test]
fn test_settings_from_file() {
    let path = write_settings("bungie_net_api_test_full.rc", concat!(
        "[api]\n",
        "API-KEY = 0123456789abcdef0123456789abcdef\n",
        "\n",
        "[default]\n",
        "debug = 1\n"
    ));

    let settings = Settings::from_file(&path).unwrap();

    assert_eq!(settings.api_key, "0123456789abcdef0123456789abcdef");
    assert!(settings.debug);

    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_settings_debug_defaults_off() {
    let path = write_settings("bungie_net_api_test_no_debug.rc", concat!(
        "[api]\n",
        "API-KEY = 0123456789abcdef0123456789abcdef\n"
    ));

    let settings = Settings::from_file(&path).unwrap();

    assert!(!settings.debug);

    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_settings_missing_api_key() {
    let path = write_settings("bungie_net_api_test_no_key.rc", concat!(
        "[default]\n",
        "debug = 0\n"
    ));

    let result = Settings::from_file(&path);

    assert!(matches!(result, Err(Error::Config(_))));

    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_settings_missing_file() {
    let result = Settings::from_file("/nonexistent/bungie_net_api.rc");

    assert!(matches!(result, Err(Error::Config(_))));
}
