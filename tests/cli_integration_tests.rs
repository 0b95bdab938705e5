use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_coursedesk(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_coursedesk"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute coursedesk");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

#[test]
fn test_cli_help_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_coursedesk"))
        .arg("--help")
        .output()
        .expect("Failed to execute coursedesk --help");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("--log-level"));
    assert!(stdout.contains("--format"));
}

#[test]
fn test_cli_exit_immediately() {
    let output = run_coursedesk(&[], "7\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Welcome to the University Course Management System"));
    assert!(stdout.ends_with("Goodbye!\n"));
}

#[test]
fn test_cli_closed_stdin_exits_cleanly() {
    let output = run_coursedesk(&[], "");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Enter your choice: "));
    assert!(!stdout.contains("Goodbye!"));
}

#[test]
fn test_cli_seeded_courses_listed() {
    let output = run_coursedesk(&[], "3\n7\n");

    let stdout = String::from_utf8(output.stdout).unwrap();
    for id in ["CS101", "MATH201", "PHYS101", "HIST301"] {
        assert!(stdout.contains(&format!("Course ID: {id},")), "missing {id}");
    }
}

#[test]
fn test_cli_logs_go_to_stderr() {
    let output = run_coursedesk(&["--log-level", "info"], "5\nCS101\nHello\n7\n");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stdout.contains("Notification sent successfully!"));
    assert!(stderr.contains("Notification sent"));
    assert!(!stdout.contains("INFO"));
}

#[test]
fn test_cli_rejects_unknown_flag_value() {
    let output = run_coursedesk(&["--format", "yaml"], "");
    assert!(!output.status.success());
}
