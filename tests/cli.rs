//! Runs the `glassbar` binary end to end.

use serde_json::{json, Value};
use std::process::Command;

fn glassbar_cmd(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_glassbar"));
    cmd.env_remove("GLASSBAR_LOG")
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

fn lines(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("JSON line"))
        .collect()
}

#[test]
fn test_scripted_session() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = glassbar_cmd(&dir)
        .args(["--view-id", "4", "tap=1", "set=2", "set=5", "set=abc", "call=resize"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let lines = lines(&output.stdout);
    assert_eq!(lines.len(), 6);

    assert_eq!(lines[0]["step"], "tap");
    assert_eq!(lines[0]["outbound"], json!({"method": "onButtonTap", "args": 1}));

    assert_eq!(lines[1]["reply"], json!([null]));
    assert_eq!(lines[1]["outbound"], Value::Null);

    assert_eq!(lines[2]["reply"][0], "INVALID_ARGUMENT");
    assert_eq!(lines[3]["reply"], json!(["INVALID_ARGUMENT", "Expected integer", null]));
    assert_eq!(lines[4]["reply"], json!(["NOT_IMPLEMENTED", null, "resize"]));

    assert_eq!(lines[5]["channel"], "liquid_glass_4");
    assert_eq!(lines[5]["selected"], 2);
    assert_eq!(lines[5]["impacts"], 1);
}

#[test]
fn test_out_of_range_tap_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = glassbar_cmd(&dir)
        .arg("tap=3")
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("outside the 3 buttons"), "stderr: {}", stderr);
}

#[test]
fn test_unknown_step_is_usage_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = glassbar_cmd(&dir)
        .arg("swipe=1")
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("config.toml"), "[bar]\nitems = []\n").expect("write");
    let output = glassbar_cmd(&dir)
        .arg("tap=0")
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load config"), "stderr: {}", stderr);
}
