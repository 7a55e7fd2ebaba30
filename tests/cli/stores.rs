//! Tests for `ghostpass stores`.

use crate::support::*;

#[test]
fn test_stores_empty_workspace() {
    let t = Test::new();

    let output = t.stores();

    assert_success(&output);
    assert_stdout_contains(&output, "no secret stores");
    assert_stdout_contains(&output, "ghostpass init");
}

#[test]
fn test_stores_lists_sorted_names() {
    let t = Test::new();
    for name in ["personal", "work", "archive"] {
        assert_success(&t.init_cmd(name, MASTER_KEY));
    }

    let output = t.stores();
    assert_success(&output);

    let out = stdout(&output);
    let archive = out.find("archive").unwrap();
    let personal = out.find("personal").unwrap();
    let work = out.find("work").unwrap();
    assert!(archive < personal && personal < work);
    assert_stdout_contains(&output, "Secret stores (3)");
}

#[test]
fn test_stores_ignores_other_files() {
    let t = Test::init("work");
    std::fs::write(t.home.path().join("notes.txt"), "hello").unwrap();

    let output = t.stores();
    assert_success(&output);
    assert_stdout_contains(&output, "Secret stores (1)");
    assert_stdout_excludes(&output, "notes");
    assert_stdout_excludes(&output, "config");
}
