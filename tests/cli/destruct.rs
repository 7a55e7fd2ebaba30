//! Tests for `ghostpass destruct`.

use crate::support::*;

#[test]
fn test_destruct_confirmed_deletes_store() {
    let t = Test::with_fields("work", STANDARD_FIELDS);

    let output = t.destruct("work", MASTER_KEY, "yes");

    assert_success(&output);
    assert_stdout_contains(&output, "✓ destroyed");
    assert!(!t.store_path("work").exists());
    assert!(!t.lock_path("work").exists());
}

#[test]
fn test_destruct_declined_keeps_store() {
    let t = Test::with_fields("work", STANDARD_FIELDS);

    let output = t.destruct("work", MASTER_KEY, "no");

    assert_success(&output);
    assert_stdout_contains(&output, "aborted");
    assert!(t.store_path("work").exists());
    assert_field(&t, "work", "github", "alice", "pw1");
}

#[test]
fn test_destruct_wrong_key_keeps_store() {
    let t = Test::init("work");

    let output = t.destruct("work", "wrong", "yes");

    assert_failure(&output);
    assert!(t.store_path("work").exists());
}

#[test]
fn test_open_after_destruct_not_found() {
    let t = Test::init("work");
    assert_success(&t.destruct("work", MASTER_KEY, "y"));

    let output = t.fields("work", MASTER_KEY);

    assert_failure(&output);
    assert_stderr_contains(&output, "secret store not found: work");
}
