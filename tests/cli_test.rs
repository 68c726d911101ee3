use assert_cmd::Command;
use predicates::prelude::*;

// ---------------------------------------------------------------------------
// list output tests
// ---------------------------------------------------------------------------

#[test]
fn test_list_plain_has_table_header() {
    let mut cmd = Command::cargo_bin("portly").unwrap();
    let assert = cmd.args(["list", "--plain"]).assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let first_line = stdout.lines().next().unwrap_or("");
    for col in ["STATE", "PORT", "PROTO", "PROCESS", "PID", "USER", "TAG"] {
        assert!(first_line.contains(col), "header should contain {}", col);
    }
}

#[test]
fn test_list_json_is_valid_entry_array() {
    let mut cmd = Command::cargo_bin("portly").unwrap();
    let assert = cmd.args(["list", "--json"]).assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let value: serde_json::Value =
        serde_json::from_str(&stdout).expect("--json should emit valid JSON");
    let entries = value.as_array().expect("top level should be an array");

    for e in entries {
        for key in [
            "proto",
            "state",
            "local_addr",
            "local_port",
            "pid",
            "process",
            "user",
            "tag",
        ] {
            assert!(e.get(key).is_some(), "entry missing key {}: {}", key, e);
        }
        assert!(
            !e["local_port"].as_str().unwrap().is_empty(),
            "port must be non-empty"
        );
        assert!(
            !e["local_addr"].as_str().unwrap().is_empty(),
            "address must be non-empty"
        );

        // TCP entries only ever surface in the listening state.
        if e["proto"] == "tcp" {
            assert_eq!(e["state"], "LISTEN", "non-LISTEN tcp entry: {}", e);
        }

        // PID 0 and KERNEL tag imply each other.
        let pid = e["pid"].as_i64().unwrap();
        if pid == 0 {
            assert_eq!(e["tag"], "KERNEL");
            assert_eq!(e["process"], "<kernel>");
        } else {
            assert_ne!(e["tag"], "KERNEL");
        }
    }
}

#[test]
fn test_list_json_and_plain_conflict() {
    let mut cmd = Command::cargo_bin("portly").unwrap();
    cmd.args(["list", "--json", "--plain"]).assert().failure();
}

// ---------------------------------------------------------------------------
// kill argument validation
// ---------------------------------------------------------------------------

#[test]
fn test_kill_requires_port_or_pid() {
    let mut cmd = Command::cargo_bin("portly").unwrap();
    cmd.arg("kill")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--port or --pid"));
}
