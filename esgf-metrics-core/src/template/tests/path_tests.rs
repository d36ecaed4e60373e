use crate::error::LineError;
use crate::template::normalize_request_path;

fn assert_normalized(raw: &str, expected: &str) {
    // Act
    let normalized = normalize_request_path(raw);

    // Assert
    match normalized {
        Ok(p) => assert_eq!(p, expected),
        Err(e) => panic!("Expected {expected}, got {:?}", e),
    }
}

fn assert_rejected(raw: &str) {
    match normalize_request_path(raw) {
        Err(LineError::UnrecognizedPath { path }) => assert_eq!(path, raw),
        other => panic!("Expected UnrecognizedPath, got {:?}", other),
    }
}

#[test]
fn canonical_path_is_unchanged() {
    assert_normalized("/thredds/fileServer/a/b.nc", "/thredds/fileServer/a/b.nc");
}

#[test]
fn encoded_separators_are_decoded() {
    assert_normalized(
        "/thredds/fileServer/user_pub_work%2FE3SM%2F1_0/f.nc",
        "/thredds/fileServer/user_pub_work/E3SM/1_0/f.nc",
    );
}

#[test]
fn query_string_is_dropped() {
    assert_normalized("/a/b.nc?download=1", "/a/b.nc");
}

#[test]
fn encoded_question_mark_is_not_a_query() {
    assert_normalized("/a/b%3F.nc", "/a/b?.nc");
}

#[test]
fn repeated_slashes_and_dots_collapse() {
    assert_normalized("//a/./b//c/", "/a/b/c");
}

#[test]
fn parent_segments_resolve() {
    assert_normalized("/a/x/../b", "/a/b");
}

#[test]
fn traversal_above_root_is_rejected() {
    assert_rejected("/../etc/passwd");
}

#[test]
fn nul_byte_is_rejected() {
    assert_rejected("/a/%00/b");
}

#[test]
fn invalid_utf8_is_rejected() {
    assert_rejected("/a/%ff%fe");
}
