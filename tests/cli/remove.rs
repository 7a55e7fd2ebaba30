//! Tests for `ghostpass remove` and `ghostpass rm`.

use crate::support::*;

#[test]
fn test_rm_removes_field() {
    let t = Test::with_fields("work", STANDARD_FIELDS);

    let output = t.rm("work", MASTER_KEY, "github");
    assert_success(&output);
    assert_stdout_contains(&output, "✓ removed");

    let output = t.fields("work", MASTER_KEY);
    assert_stdout_excludes(&output, "github");
    assert_stdout_contains(&output, "aws");
}

#[test]
fn test_remove_long_form() {
    let t = Test::with_fields("work", &[("github", "alice", "pw1")]);

    let output = t
        .cmd()
        .args(["remove", "-n", "work", "-s", "github"])
        .write_stdin("hunter2\n")
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&t.fields("work", MASTER_KEY), "no fields in store");
}

#[test]
fn test_rm_nonexistent_fails() {
    let t = Test::with_fields("work", &[("github", "alice", "pw1")]);

    let output = t.rm("work", MASTER_KEY, "nonexistent");

    assert_failure(&output);
    assert_stderr_contains(&output, "field not found: nonexistent");
}

#[test]
fn test_rm_suggests_close_match() {
    let t = Test::with_fields("work", &[("github", "alice", "pw1")]);

    let output = t.rm("work", MASTER_KEY, "githib");

    assert_failure(&output);
    assert_stderr_contains(&output, "did you mean: github");
}
