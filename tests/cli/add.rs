//! Tests for `ghostpass add`.

use crate::support::*;

#[test]
fn test_add_then_view() {
    let t = Test::init("work");

    let output = t.add("work", MASTER_KEY, "github", "alice", "pw1");

    assert_success(&output);
    assert_stdout_contains(&output, "✓ added");
    assert_field(&t, "work", "github", "alice", "pw1");
}

#[test]
fn test_add_prompts_for_missing_values() {
    let t = Test::init("work");

    let output = t
        .cmd()
        .args(["add", "--name", "work"])
        .write_stdin("hunter2\ngithub\nalice\npw1\n")
        .output()
        .unwrap();

    assert_success(&output);
    assert_field(&t, "work", "github", "alice", "pw1");
}

#[test]
fn test_add_password_with_spaces() {
    let t = Test::init("work");

    let output = t.add("work", MASTER_KEY, "email", "alice", "correct horse battery staple");

    assert_success(&output);
    assert_field(&t, "work", "email", "alice", "correct horse battery staple");
}

#[test]
fn test_add_existing_overwrites_when_confirmed() {
    let t = Test::with_fields("work", &[("github", "alice", "old")]);

    let output = t
        .cmd()
        .args(["add", "--name", "work", "-s", "github", "-u", "bob"])
        .write_stdin("hunter2\nnew\ny\n")
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "already exists");
    assert_field(&t, "work", "github", "bob", "new");
}

#[test]
fn test_add_existing_kept_when_declined() {
    let t = Test::with_fields("work", &[("github", "alice", "old")]);

    let output = t
        .cmd()
        .args(["add", "--name", "work", "-s", "github", "-u", "bob"])
        .write_stdin("hunter2\nnew\nn\n")
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "aborted");
    assert_field(&t, "work", "github", "alice", "old");
}

#[test]
fn test_add_empty_service_fails() {
    let t = Test::init("work");

    let output = t
        .cmd()
        .args(["add", "--name", "work", "-u", "alice"])
        .write_stdin("hunter2\n\npw1\n")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "service name cannot be empty");
}

#[test]
fn test_add_wrong_key_fails_without_changes() {
    let t = Test::with_fields("work", STANDARD_FIELDS);
    let before = std::fs::read(t.store_path("work")).unwrap();

    let output = t.add("work", "wrong", "new", "alice", "pw");

    assert_failure(&output);
    assert_stderr_contains(&output, "authentication failed");
    assert_eq!(std::fs::read(t.store_path("work")).unwrap(), before);
}
