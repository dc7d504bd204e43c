//! REPL E2E tests.
//!
//! Tests spawn the CLI via cargo run, pipe a scripted session on stdin,
//! and verify the conversation on stdout. `--today` pins the reference
//! date so birthday scenarios are deterministic.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run a scripted REPL session and return (stdout, stderr, exit code).
fn run_session(extra_args: &[&str], script: &str) -> (String, String, i32) {
    let mut child = Command::new("cargo")
        .args(["run", "-p", "addressbook-cli", "--"])
        .args(extra_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    // the write can fail if the process rejects its arguments and exits
    // before reading stdin; that case is asserted via the exit code
    let _ = child
        .stdin
        .as_mut()
        .expect("stdin not piped")
        .write_all(script.as_bytes());

    let output = child.wait_with_output().expect("Failed to wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_greeting_and_farewell() {
    let (stdout, _, code) = run_session(&[], "hello\nclose\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("Welcome to the assistant bot!"));
    assert!(stdout.contains("How can I help you?"));
    assert!(stdout.contains("Good bye!"));
}

#[test]
fn test_add_then_phone_and_all() {
    let script = "add Alice 0501234567\nadd Alice 0667654321\nphone Alice\nall\nexit\n";
    let (stdout, _, code) = run_session(&[], script);
    assert_eq!(code, 0);
    assert!(stdout.contains("Contact added/updated."));
    assert!(stdout.contains("Contact name: Alice, phones: 0501234567; 0667654321"));
}

#[test]
fn test_invalid_phone_is_an_error_not_a_crash() {
    let script = "add Bob 123\nhello\nexit\n";
    let (stdout, _, code) = run_session(&[], script);
    assert_eq!(code, 0);
    assert!(stdout.contains("Error: Phone number must be 10 digits."));
    // the loop kept going after the error
    assert!(stdout.contains("How can I help you?"));
}

#[test]
fn test_invalid_birthday_message() {
    let script = "add Alice 0501234567\nadd-birthday Alice 1990-06-15\nexit\n";
    let (stdout, _, code) = run_session(&[], script);
    assert_eq!(code, 0);
    assert!(stdout.contains("Error: Invalid date format. Use DD.MM.YYYY"));
}

#[test]
fn test_birthdays_with_weekend_shift() {
    // 10.06.2024 is a Monday; 15.06 is the following Saturday
    let script = "add Alice 0501234567\n\
                  add-birthday Alice 10.06.1990\n\
                  add Bob 0667654321\n\
                  add-birthday Bob 15.06.1985\n\
                  add Carol 0731112233\n\
                  add-birthday Carol 09.06.1999\n\
                  birthdays\n\
                  exit\n";
    let (stdout, _, code) = run_session(&["--today", "10.06.2024"], script);
    assert_eq!(code, 0);
    assert!(stdout.contains("Alice: 10.06.2024"));
    assert!(stdout.contains("Bob: 17.06.2024"));
    assert!(!stdout.contains("Carol:"));
}

#[test]
fn test_empty_book_responses() {
    let script = "all\nbirthdays\nphone Nobody\nexit\n";
    let (stdout, _, code) = run_session(&[], script);
    assert_eq!(code, 0);
    assert!(stdout.contains("No contacts found."));
    assert!(stdout.contains("No upcoming birthdays."));
    assert!(stdout.contains("Contact not found."));
}

#[test]
fn test_unknown_command() {
    let (stdout, _, code) = run_session(&[], "frobnicate\nexit\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("Invalid command."));
}

#[test]
fn test_bad_today_flag_is_rejected() {
    let (_, stderr, code) = run_session(&["--today", "2024-06-10"], "exit\n");
    assert_ne!(code, 0);
    assert!(stderr.contains("DD.MM.YYYY"));
}
