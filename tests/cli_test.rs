//! Process-level tests for the translator-bot binary
//! Run with: cargo test --test cli_test

use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_translator-bot");

/// A missing config file is fatal: error record in the log file, exit 1
#[test]
fn test_missing_config_exits_with_status_1() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("missing.yaml");
    let log_file = dir.path().join("bot.log");

    let output = Command::new(BIN)
        .arg("--config")
        .arg(&config)
        .arg("--log-file")
        .arg(&log_file)
        .output()
        .expect("binary should start");

    assert_eq!(output.status.code(), Some(1));

    let log = std::fs::read_to_string(&log_file).expect("log file should exist");
    let line = log
        .lines()
        .find(|l| l.contains("Failed to read config"))
        .unwrap_or_else(|| panic!("no config error in log: {:?}", log));

    let (timestamp, message) = line.split_once(" - ").unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S,%3f").is_ok());
    assert!(message.contains("missing.yaml"), "{}", message);
}

/// A config without a token is fatal too
#[test]
fn test_config_without_token_exits_with_status_1() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("conf.yaml");
    let log_file = dir.path().join("bot.log");
    std::fs::write(&config, "source_lang: es\n").unwrap();

    let output = Command::new(BIN)
        .arg("--config")
        .arg(&config)
        .arg("--log-file")
        .arg(&log_file)
        .arg("run")
        .output()
        .expect("binary should start");

    assert_eq!(output.status.code(), Some(1));

    let log = std::fs::read_to_string(&log_file).unwrap();
    assert!(log.lines().any(|l| l.ends_with(" - Missing required field: token")), "{:?}", log);
}

/// The log file is appended to, never truncated
#[test]
fn test_log_file_is_appended() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("bot.log");
    std::fs::write(&log_file, "earlier run\n").unwrap();

    let status = Command::new(BIN)
        .arg("--config")
        .arg(dir.path().join("missing.yaml"))
        .arg("--log-file")
        .arg(&log_file)
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
    let log = std::fs::read_to_string(&log_file).unwrap();
    assert!(log.starts_with("earlier run\n"));
    assert!(log.lines().count() >= 2);
}

#[test]
fn test_init_config_prints_sample() {
    let output = Command::new(BIN).arg("init-config").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("token:"));
    assert!(stdout.contains("target_lang: en"));
}
