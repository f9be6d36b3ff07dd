//! End-to-end runs of the `sevlog` binary

use std::process::Command;
use tempfile::tempdir;

fn sevlog() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sevlog"))
}

#[test]
fn unusable_log_directory_aborts_startup() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("plain_file");
    std::fs::write(&blocker, "not a directory").unwrap();

    let output = sevlog()
        .current_dir(dir.path())
        .arg("--dir")
        .arg(&blocker)
        .args(["--log-name", "app", "init"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to initialise logger"), "stderr: {stderr}");
    assert!(stderr.contains("creating log directory"), "stderr: {stderr}");
}

#[test]
fn log_command_appends_to_error_file() {
    let dir = tempdir().unwrap();
    let log_dir = dir.path().join("logs");

    let status = sevlog()
        .current_dir(dir.path())
        .arg("--dir")
        .arg(&log_dir)
        .args(["--log-name", "app", "--error-name", "app_errors"])
        .args(["log", "--severity", "critical", "--pid", "1", "boom"])
        .status()
        .unwrap();
    assert!(status.success());

    let date = chrono::Utc::now().format("%Y-%m-%d");
    let errors = std::fs::read_to_string(log_dir.join(format!("{date}-app_errors.csv"))).unwrap();
    assert!(errors.starts_with("CRITICAL,"));
    assert!(errors.trim_end().ends_with(",Operating System,1,boom"));

    let standard = std::fs::read_to_string(log_dir.join(format!("{date}-app.csv"))).unwrap();
    assert_eq!(standard.lines().count(), 1);
    assert!(standard.starts_with("TRACE,"));
}
