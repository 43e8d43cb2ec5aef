use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

const BINARY_NAME: &str = "forecast-admin";

/// Helper to get a temporary home directory
fn temp_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get the config file path under the temp home
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".forecast-admin").join("config.json")
}

/// Helper to create a temp home that already holds a credential
fn logged_in_home() -> tempfile::TempDir {
    let tmp = temp_home();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, r#"{"auth_token":"tok123"}"#).unwrap();
    tmp
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Forecast admin console"))
        .stdout(contains("forecasts"));
}

#[test]
/// Fetch commands need a stored credential.
fn fetch_without_login_fails() {
    let tmp = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("assets")
        .env("HOME", tmp.path())
        .env_remove("FORECAST_API_URL")
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
/// Login validates required fields before any network call.
fn login_with_empty_username_fails() {
    let tmp = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["login", "--username", "", "--password", "x"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Username is required"));

    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// A blank asset id is rejected once a credential exists.
fn forecasts_with_blank_asset_id_fails() {
    let tmp = logged_in_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["forecasts", "--asset-id", "  "])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Asset ID is required"));
}

#[test]
/// An API URL without a scheme is refused.
fn invalid_api_url_fails() {
    let tmp = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["--api-url", "not a url", "models"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Invalid API URL"));
}

#[test]
/// An unreachable gateway is reported on stderr exactly once.
fn unreachable_gateway_error_is_printed_once() {
    let tmp = logged_in_home();
    let output = Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["--api-url", "http://127.0.0.1:9", "assets"])
        .env("HOME", tmp.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Assets fetch failed").count(), 1, "{}", stderr);
}

#[test]
/// RUST_LOG=debug shows one line per outgoing request.
fn debug_log_shows_requests() {
    let tmp = logged_in_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["--api-url", "http://127.0.0.1:9", "assets"])
        .env("HOME", tmp.path())
        .env("RUST_LOG", "forecast_admin=debug")
        .assert()
        .failure()
        .stderr(contains("GET /api/assets"));
}
