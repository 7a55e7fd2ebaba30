//! Error output tests.

use crate::support::*;

#[test]
fn test_missing_store_has_hint() {
    let t = Test::new();

    let output = t.fields("ghost", MASTER_KEY);

    assert_failure(&output);
    assert_stderr_contains(&output, "✗ secret store not found: ghost");
    assert_stdout_contains(&output, "ghostpass stores");
}

#[test]
fn test_wrong_key_has_hint() {
    let t = Test::init("work");

    let output = t.fields("work", "nope");

    assert_failure(&output);
    assert_stdout_contains(&output, "check the master key");
}

#[test]
fn test_corrupt_store_file() {
    let t = Test::init("work");
    std::fs::write(t.store_path("work"), b"definitely not a store").unwrap();

    let output = t.fields("work", MASTER_KEY);

    assert_failure(&output);
    assert_stderr_contains(&output, "corrupt store header");
}

#[test]
fn test_tampered_store_fails_authentication() {
    let t = Test::with_fields("work", &[("github", "alice", "pw1")]);
    let path = t.store_path("work");
    let mut bytes = std::fs::read(&path).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;
    std::fs::write(&path, bytes).unwrap();

    let output = t.view("work", MASTER_KEY, "github");

    assert_failure(&output);
    assert_stderr_contains(&output, "authentication failed");
}

#[test]
fn test_live_lock_reports_already_open() {
    let t = Test::init("work");
    std::fs::write(t.lock_path("work"), format!("{}\n", std::process::id())).unwrap();

    let output = t.fields("work", MASTER_KEY);

    assert_failure(&output);
    assert_stderr_contains(&output, "already open");
    assert_stderr_contains(&output, "work.gp.lock");
}

#[cfg(unix)]
#[test]
fn test_dead_holder_lock_is_reclaimed() {
    let t = Test::init("work");
    let mut child = std::process::Command::new("true").spawn().unwrap();
    let dead = child.id();
    child.wait().unwrap();
    std::fs::write(t.lock_path("work"), format!("{}\n", dead)).unwrap();

    let output = t.fields("work", MASTER_KEY);

    assert_success(&output);
    assert!(!t.lock_path("work").exists());
}

#[test]
fn test_invalid_config_fails() {
    let t = Test::new();
    std::fs::write(t.home.path().join("config.toml"), "[kdf\n").unwrap();

    let output = t.stores();

    assert_failure(&output);
    assert_stderr_contains(&output, "invalid config");
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "ghostpass");
}
