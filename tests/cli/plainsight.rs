//! Tests for `ghostpass export` and `ghostpass import`.

use crate::support::*;

#[test]
fn test_export_then_import_into_fresh_workspace() {
    let source = Test::with_fields("work", STANDARD_FIELDS);
    let corpus = source.write_file("corpus.txt", &corpus(5000));
    let outfile = source.dir.path().join("hidden.txt");

    let output = source.export("work", MASTER_KEY, &corpus, &outfile);
    assert_success(&output);
    assert_stdout_contains(&output, "wrote plainsight file");

    let target = Test::new();
    let carried = target.write_file("received.txt", &source.read_file("hidden.txt"));

    let output = target.import(MASTER_KEY, &carried, "");
    assert_success(&output);
    assert_stdout_contains(&output, "imported");
    assert_stdout_contains(&output, "3 fields");

    for (service, username, password) in STANDARD_FIELDS {
        assert_field(&target, "work", service, username, password);
    }
}

#[test]
fn test_export_default_outfile() {
    let t = Test::with_fields("work", &[("github", "alice", "pw1")]);
    let corpus = t.write_file("corpus.txt", &corpus(3000));

    let output = t
        .cmd()
        .args(["export", "--name", "work", "--corpus"])
        .arg(&corpus)
        .write_stdin("hunter2\n")
        .output()
        .unwrap();

    assert_success(&output);
    assert!(t.dir.path().join("plainsight_work.out").exists());
}

#[test]
fn test_exported_text_reads_like_corpus() {
    let t = Test::with_fields("work", &[("github", "alice", "pw1")]);
    let text = corpus(3000);
    let corpus = t.write_file("corpus.txt", &text);
    let outfile = t.dir.path().join("out.txt");

    assert_success(&t.export("work", MASTER_KEY, &corpus, &outfile));

    let exported = t.read_file("out.txt");
    assert_eq!(
        exported.split_whitespace().collect::<Vec<_>>(),
        text.split_whitespace().collect::<Vec<_>>()
    );
    assert!(!exported.contains("github"));
    assert!(!exported.contains("pw1"));
}

#[test]
fn test_export_small_corpus_fails() {
    let t = Test::with_fields("work", STANDARD_FIELDS);
    let corpus = t.write_file("corpus.txt", &corpus(50));
    let outfile = t.dir.path().join("out.txt");

    let output = t.export("work", MASTER_KEY, &corpus, &outfile);

    assert_failure(&output);
    assert_stderr_contains(&output, "corpus too small");
    assert!(!outfile.exists());
}

#[test]
fn test_import_wrong_key_fails() {
    let t = Test::with_fields("work", &[("github", "alice", "pw1")]);
    let corpus = t.write_file("corpus.txt", &corpus(3000));
    let outfile = t.dir.path().join("out.txt");
    assert_success(&t.export("work", MASTER_KEY, &corpus, &outfile));

    let target = Test::new();
    let output = target.import("wrong", &outfile, "");

    assert_failure(&output);
    assert_stderr_contains(&output, "authentication failed");
    assert!(!target.store_path("work").exists());
}

#[test]
fn test_import_plain_text_has_no_payload() {
    let t = Test::new();
    let corpus = t.write_file("corpus.txt", &corpus(3000));

    let output = t.import(MASTER_KEY, &corpus, "");

    assert_failure(&output);
    assert_stderr_contains(&output, "no plainsight payload");
}

#[test]
fn test_import_over_existing_requires_confirmation() {
    let t = Test::with_fields("work", &[("github", "alice", "pw1")]);
    let corpus = t.write_file("corpus.txt", &corpus(3000));
    let outfile = t.dir.path().join("out.txt");
    assert_success(&t.export("work", MASTER_KEY, &corpus, &outfile));

    assert_success(&t.add("work", MASTER_KEY, "aws", "bob", "later"));

    let output = t.import(MASTER_KEY, &outfile, "n");
    assert_success(&output);
    assert_stdout_contains(&output, "aborted");
    assert_field(&t, "work", "aws", "bob", "later");

    let output = t.import(MASTER_KEY, &outfile, "y");
    assert_success(&output);
    let output = t.fields("work", MASTER_KEY);
    assert_stdout_excludes(&output, "aws");
}
