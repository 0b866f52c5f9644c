//! End-to-end tests for the `payroll` binary.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use std::str::FromStr;

use rust_decimal::Decimal;

const CANONICAL: &str = "1 1 15 2 1 17 3 2 150 -1 21 -1 1 144 2 184 3 163 -1 2 -1";

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    run_with_stdin_bytes(args, stdin.as_bytes())
}

fn run_with_stdin_bytes(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_payroll"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start payroll binary");

    // The binary may exit before reading stdin (e.g. on a config error).
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin);
    }
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_reads_input_from_stdin() {
    let output = run_with_stdin(&[], &format!("{}\n", CANONICAL));

    assert!(output.status.success());
    assert_eq!(stdout(&output), "10260.00");
}

#[test]
fn test_input_flag_overrides_stdin() {
    let output = run_with_stdin(&["--input", "1 2 100 -1 20 -1 1 16 -1 -1"], "");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "200.00");
}

#[test]
fn test_malformed_input_exits_with_one() {
    let output = run_with_stdin(&[], "1 1 15 -1 21 -1 1 144\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Malformed input"));
}

#[test]
fn test_invalid_utf8_input_exits_with_one() {
    let output = run_with_stdin_bytes(&[], b"1 1 15 -1 21 -1 1 \xff\xfe -1 -1\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Malformed input"));
}

#[test]
fn test_missing_config_exits_with_two() {
    let output = run_with_stdin(&["--config", "/nonexistent/payroll.yaml"], CANONICAL);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_default_config_file_is_accepted() {
    let output = run_with_stdin(&["--config", "./config/payroll.yaml"], CANONICAL);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "10260.00");
}

#[test]
fn test_config_file_is_applied() {
    let path = std::env::temp_dir().join("payroll_cli_permissive_config.yaml");
    fs::write(&path, "validation:\n  reject_negative_values: false\n").unwrap();
    let config = path.to_string_lossy().to_string();

    let negative_rate = "1 1 -10 -1 20 -1 1 8 -1 -1\n";
    let with_config = run_with_stdin(&["--config", &config], negative_rate);
    let without_config = run_with_stdin(&[], negative_rate);
    let _ = fs::remove_file(&path);

    assert!(with_config.status.success());
    assert_eq!(stdout(&with_config), "-80.00");
    assert_eq!(without_config.status.code(), Some(1));
}

#[test]
fn test_json_output_contains_breakdown() {
    let output = run_with_stdin(&["--json"], CANONICAL);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let amount = |v: &serde_json::Value| Decimal::from_str(v.as_str().unwrap()).unwrap();
    assert_eq!(amount(&json["totals"]["gross_pay"]), Decimal::from(10260));
    assert_eq!(json["salaries"].as_array().unwrap().len(), 3);
    assert_eq!(amount(&json["salaries"][1]["severance_bonus"]), Decimal::from(1700));
}
