use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

// Helper function to set up a test Command instance with an isolated
// environment: no NetBox settings and an empty home directory
fn set_up_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nbjrnlctl").unwrap();
    cmd.env_clear()
        .env("HOME", home.path())
        .env("HOSTNAME", "test-host")
        .env("NO_COLOR", "1");
    cmd
}

fn set_up_netbox_command(home: &TempDir, server: &Server) -> Command {
    let mut cmd = set_up_command(home);
    cmd.env("NETBOX_URL", server.url())
        .env("NETBOX_API_TOKEN", "cli-token");
    cmd
}

fn device_page(id: u64, name: &str) -> String {
    json!({ "count": 1, "next": null, "results": [{ "id": id, "name": name }] }).to_string()
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().unwrap();
    let mut cmd = set_up_command(&home);

    // Needs no NetBox configuration
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nbjrnlctl version"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_no_subcommand() {
    let home = TempDir::new().unwrap();
    let mut cmd = set_up_command(&home);

    cmd.assert().failure().code(1);
}

#[test]
fn test_cli_usage_errors_exit_with_one() {
    let home = TempDir::new().unwrap();

    // Missing required --comments
    set_up_command(&home)
        .arg("create")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--comments"));

    // Non-numeric limit
    set_up_command(&home)
        .args(["list", "-l", "abc"])
        .assert()
        .failure()
        .code(1);

    // Unknown log format
    set_up_command(&home)
        .args(["--log-format", "xml", "version"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_cli_help_exits_successfully() {
    let home = TempDir::new().unwrap();

    set_up_command(&home)
        .args(["update", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "At least one of --comments or --kind is required",
        ));
}

#[test]
fn test_cli_missing_config_lists_all_settings() {
    let home = TempDir::new().unwrap();
    let mut cmd = set_up_command(&home);

    cmd.args(["list", "edge-01"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("NETBOX_URL"))
        .stderr(predicate::str::contains("NETBOX_API_TOKEN"));
}

#[test]
fn test_cli_invalid_journal_id() {
    let home = TempDir::new().unwrap();
    let mut cmd = set_up_command(&home);

    cmd.args(["read", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid journal ID 'abc'"));
}

#[test]
fn test_cli_list_renders_table() {
    let home = TempDir::new().unwrap();
    let mut server = Server::new();
    let _devices = server
        .mock("GET", "/api/dcim/devices/")
        .match_header("authorization", "Token cli-token")
        .with_status(200)
        .with_body(device_page(8, "edge-01"))
        .create();
    let _graphql = server
        .mock("POST", "/graphql/")
        .with_status(200)
        .with_body(
            json!({
                "data": { "device_list": [{ "journal_entries": [
                    {
                        "id": "1",
                        "created": "2025-07-01T08:00:00Z",
                        "display": "2025-07-01 08:00 (Info)",
                        "comments": "older note",
                        "created_by": { "username": "alice" }
                    },
                    {
                        "id": "2",
                        "created": "2025-07-02T08:00:00Z",
                        "display": "2025-07-02 08:00 (Warning)",
                        "comments": "newer note",
                        "created_by": { "username": "bob" }
                    }
                ] }] }
            })
            .to_string(),
        )
        .create();

    let mut cmd = set_up_netbox_command(&home, &server);
    let output = cmd.args(["list", "edge-01"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CREATED BY"));
    assert!(stdout.contains("alice"));
    let newer = stdout.find("newer note").unwrap();
    let older = stdout.find("older note").unwrap();
    assert!(newer < older, "entries should be newest first:\n{}", stdout);
}

#[test]
fn test_cli_list_limit_and_hostname_default() {
    let home = TempDir::new().unwrap();
    let mut server = Server::new();
    let _devices = server
        .mock("GET", "/api/dcim/devices/")
        .with_status(200)
        .with_body(device_page(4, "test-host"))
        .create();
    let _graphql = server
        .mock("POST", "/graphql/")
        .match_body(Matcher::Regex("exact: 4".to_string()))
        .with_status(200)
        .with_body(
            json!({
                "data": { "device_list": [{ "journal_entries": [
                    {
                        "id": "1",
                        "created": "2025-07-01T08:00:00Z",
                        "display": "Info",
                        "comments": "first"
                    },
                    {
                        "id": "2",
                        "created": "2025-07-03T08:00:00Z",
                        "display": "Info",
                        "comments": "third"
                    },
                    {
                        "id": "3",
                        "created": "2025-07-02T08:00:00Z",
                        "display": "Info",
                        "comments": "second"
                    }
                ] }] }
            })
            .to_string(),
        )
        .create();

    let mut cmd = set_up_netbox_command(&home, &server);
    cmd.args(["list", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No device name provided. Using local hostname: test-host",
        ))
        .stdout(predicate::str::contains("third"))
        .stdout(predicate::str::contains("second").not())
        .stdout(predicate::str::contains("first").not());
}

#[test]
fn test_cli_list_empty() {
    let home = TempDir::new().unwrap();
    let mut server = Server::new();
    let _devices = server
        .mock("GET", "/api/dcim/devices/")
        .with_status(200)
        .with_body(device_page(8, "edge-01"))
        .create();
    let _graphql = server
        .mock("POST", "/graphql/")
        .with_status(200)
        .with_body(r#"{"data":{"device_list":[{"journal_entries":[]}]}}"#)
        .create();

    let mut cmd = set_up_netbox_command(&home, &server);
    cmd.args(["list", "edge-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No journal entries found for this device",
        ));
}

#[test]
fn test_cli_unknown_device() {
    let home = TempDir::new().unwrap();
    let mut server = Server::new();
    let _devices = server
        .mock("GET", "/api/dcim/devices/")
        .with_status(200)
        .with_body(device_page(8, "edge-01"))
        .create();

    let mut cmd = set_up_netbox_command(&home, &server);
    cmd.args(["list", "edge-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No device found with name: edge-02"));
}

#[test]
fn test_cli_create() {
    let home = TempDir::new().unwrap();
    let mut server = Server::new();
    let _devices = server
        .mock("GET", "/api/dcim/devices/")
        .with_status(200)
        .with_body(device_page(8, "edge-01"))
        .create();
    let create = server
        .mock("POST", "/api/dcim/devices/8/journal/")
        .match_body(Matcher::Json(json!({ "comments": "swapped optic", "kind": "success" })))
        .with_status(201)
        .with_body(json!({ "id": 77, "kind": "success", "comments": "swapped optic" }).to_string())
        .create();

    let mut cmd = set_up_netbox_command(&home, &server);
    cmd.args(["create", "edge-01", "-c", "swapped optic", "-k", "success"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal entry created with ID: 77"));
    create.assert();
}

#[test]
fn test_cli_read_missing_entry() {
    let home = TempDir::new().unwrap();
    let mut server = Server::new();
    let _missing = server
        .mock("GET", "/api/extras/journal-entries/404/")
        .with_status(404)
        .with_body(r#"{"detail":"Not found."}"#)
        .create();

    let mut cmd = set_up_netbox_command(&home, &server);
    cmd.args(["read", "404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No journal entry found with id: 404"));
}

#[test]
fn test_cli_update_requires_a_change() {
    let home = TempDir::new().unwrap();
    let server = Server::new();

    let mut cmd = set_up_netbox_command(&home, &server);
    cmd.args(["update", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to update"));
}

#[test]
fn test_cli_delete_cancelled_without_yes() {
    let home = TempDir::new().unwrap();
    let mut server = Server::new();
    let _entry = server
        .mock("GET", "/api/extras/journal-entries/6/")
        .with_status(200)
        .with_body(json!({ "id": 6, "kind": "info", "comments": "keep me" }).to_string())
        .create();
    let delete = server
        .mock("DELETE", "/api/extras/journal-entries/6/")
        .with_status(204)
        .expect(0)
        .create();

    let mut cmd = set_up_netbox_command(&home, &server);
    cmd.args(["delete", "6"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("keep me"))
        .stdout(predicate::str::contains("Deletion cancelled"));
    delete.assert();
}

#[test]
fn test_cli_delete_force() {
    let home = TempDir::new().unwrap();
    let mut server = Server::new();
    let delete = server
        .mock("DELETE", "/api/extras/journal-entries/6/")
        .with_status(204)
        .create();

    let mut cmd = set_up_netbox_command(&home, &server);
    cmd.args(["delete", "6", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal entry deleted successfully"));
    delete.assert();
}

#[test]
fn test_cli_settings_from_config_file() {
    let home = TempDir::new().unwrap();
    let mut server = Server::new();
    let devices = server
        .mock("GET", "/api/dcim/devices/")
        .match_header("authorization", "Token file-token")
        .with_status(200)
        .with_body(device_page(8, "test-host"))
        .create();

    let config_path = home.path().join("netbox.json");
    fs::write(
        &config_path,
        json!({ "netbox_url": server.url(), "api_token": "file-token" }).to_string(),
    )
    .unwrap();

    let mut cmd = set_up_command(&home);
    cmd.env("NBJRNLCTL_CONFIG", &config_path)
        .arg("device")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hostname: test-host"))
        .stdout(predicate::str::contains("Netbox Device ID: 8"));
    devices.assert();
}
