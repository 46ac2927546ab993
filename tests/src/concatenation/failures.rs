#![cfg(test)]
use mdbind_common::PAGE_BREAK_MARKER;
use mdbind_common::error::ConcatError;
use mdbind_core::run;
use std::fs;

#[test]
fn missing_source_is_fatal() {
    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("index.md");

    let result = run(&root.path().join("does-not-exist"), &out);

    assert!(
        matches!(result, Err(ConcatError::SourceUnavailable { .. })),
        "expected source error, got {result:?}"
    );
    assert!(!out.exists());
}

#[test]
fn file_as_source_is_fatal() {
    let root = tempfile::tempdir().unwrap();
    let not_a_dir = root.path().join("single.md");
    fs::write(&not_a_dir, "text").unwrap();

    let result = run(&not_a_dir, &root.path().join("index.md"));

    assert!(matches!(result, Err(ConcatError::SourceUnavailable { .. })));
}

#[test]
fn directory_named_like_markdown_is_a_read_error() {
    let src = tempfile::tempdir().unwrap();
    fs::create_dir(src.path().join("folder.md")).unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("index.md");

    let result = run(src.path(), &out);

    match result {
        Err(ConcatError::Read { path, .. }) => assert!(path.ends_with("folder.md")),
        other => panic!("expected read error, got {other:?}"),
    }
    assert!(!out.exists());
}

#[test]
fn non_utf8_content_is_a_read_error() {
    let src = tempfile::tempdir().unwrap();
    fs::write(src.path().join("latin1.md"), b"caf\xe9").unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("index.md");

    let result = run(src.path(), &out);

    assert!(matches!(result, Err(ConcatError::Read { .. })));
}

#[test]
fn unwritable_output_is_a_write_error() {
    let src = tempfile::tempdir().unwrap();
    fs::write(src.path().join("a.md"), "Hello").unwrap();
    let out = src.path().join("no-such-dir").join("index.md");

    let result = run(src.path(), &out);

    assert!(matches!(result, Err(ConcatError::Write { .. })));
}

#[test]
fn errors_name_the_failing_path() {
    let root = tempfile::tempdir().unwrap();
    let missing = root.path().join("gone");

    let err = run(&missing, &root.path().join("index.md")).unwrap_err();

    assert!(err.to_string().contains("gone"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn output_marker_is_literal_html() {
    assert_eq!(
        PAGE_BREAK_MARKER,
        "<div STYLE=\"page-break-after: always;\"></div>"
    );
}
