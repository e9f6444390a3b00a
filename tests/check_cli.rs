//! End-to-end tests for the diskwatch binary
//!
//! Runs the real binary against temporary configuration and log files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::TempDir;

fn base_config(paths: &[&str], limit: f64) -> Value {
    json!({
        "paths": paths,
        "limit_percent": limit,
        "smtp_server": "127.0.0.1",
        "smtp_port": 1,
        "smtp_security": "none",
        "smtp_timeout_secs": 2,
        "email_sender": "monitor@example.com",
        "email_recipients": ["admin@example.com"],
        "hostname": "test-host"
    })
}

fn write_config(dir: &TempDir, config: &Value) -> PathBuf {
    let path = dir.path().join("diskwatch.json");
    fs::write(&path, serde_json::to_string_pretty(config).unwrap()).unwrap();
    path
}

fn run(config: &Path, log: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_diskwatch"))
        .arg("--config")
        .arg(config)
        .arg("--log-file")
        .arg(log)
        .args(extra)
        .env_remove("DISKWATCH_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run diskwatch")
}

fn log_lines(log: &Path) -> Vec<String> {
    fs::read_to_string(log)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn missing_smtp_server_exits_non_zero_without_side_effects() {
    let dir = TempDir::new().unwrap();
    let mut config = base_config(&["/"], 0.0);
    config.as_object_mut().unwrap().remove("smtp_server");
    let config_path = write_config(&dir, &config);
    let log = dir.path().join("logs/run.log");

    let output = run(&config_path, &log, &[]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("smtp_server"));
    assert!(!log.exists());
}

#[test]
fn missing_config_file_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("run.log");

    let output = run(&dir.path().join("absent.json"), &log, &[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!log.exists());
}

#[test]
fn within_limit_appends_one_line_per_run() {
    let dir = TempDir::new().unwrap();
    let watched = dir.path().to_str().unwrap().to_string();
    let config_path = write_config(&dir, &base_config(&[watched.as_str()], 100.0));
    let log = dir.path().join("logs/run.log");

    assert!(run(&config_path, &log, &[]).status.success());
    assert!(run(&config_path, &log, &[]).status.success());

    let lines = log_lines(&log);
    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert!(line.contains("host=test-host limit=100%"));
        assert!(line.ends_with("outcome=ok"));
    }
}

#[test]
fn unreadable_path_is_recorded_and_run_completes() {
    let dir = TempDir::new().unwrap();
    let watched = dir.path().to_str().unwrap().to_string();
    let config_path = write_config(
        &dir,
        &base_config(&["/nonexistent/diskwatch", watched.as_str()], 100.0),
    );
    let log = dir.path().join("run.log");

    let output = run(&config_path, &log, &["--format", "compact"]);

    assert!(output.status.success());
    let line = &log_lines(&log)[0];
    assert!(line.contains("/nonexistent/diskwatch=error(not found)"));
    assert!(line.contains(&format!("{}=", watched)));
}

#[test]
fn verbose_flag_emits_debug_diagnostics() {
    let dir = TempDir::new().unwrap();
    let watched = dir.path().to_str().unwrap().to_string();
    let config_path = write_config(&dir, &base_config(&[watched.as_str()], 100.0));
    let log = dir.path().join("run.log");

    let quiet = run(&config_path, &log, &[]);
    assert!(quiet.status.success());
    assert!(!String::from_utf8_lossy(&quiet.stderr).contains("statvfs"));

    let verbose = run(&config_path, &log, &["-v"]);
    assert!(verbose.status.success());
    let stderr = String::from_utf8_lossy(&verbose.stderr);
    assert!(stderr.contains("DEBUG"));
    assert!(stderr.contains(&format!("statvfs {}", watched)));
}

#[test]
fn dry_run_composes_alert_without_sending() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, &base_config(&["/"], 0.0));
    let log = dir.path().join("run.log");

    let output = run(&config_path, &log, &["--dry-run"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DRY RUN"));
    assert!(stderr.contains("Path: /"));
    assert!(log_lines(&log)[0].ends_with("outcome=alert-dry-run"));
}

#[test]
fn smtp_failure_is_logged_and_exit_code_is_zero() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, &base_config(&["/"], 0.0));
    let log = dir.path().join("run.log");

    let output = run(&config_path, &log, &["--format", "json"]);

    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["outcome"]["kind"], "alert-failed");
    assert!(log_lines(&log)[0].contains("outcome=alert-failed("));
}
