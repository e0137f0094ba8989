use super::*;

#[test]
fn join_inserts_single_separator() {
    assert_eq!(join("/", "proj"), "/proj");
    assert_eq!(join("/proj", "index.marko"), "/proj/index.marko");
    assert_eq!(join("/proj/", "/index.marko"), "/proj/index.marko");
}

#[test]
fn dirname_and_basename() {
    assert_eq!(dirname("/proj/sub/file.marko"), "/proj/sub");
    assert_eq!(dirname("/proj"), "/");
    assert_eq!(dirname("/"), "/");
    assert_eq!(dirname("proj"), ".");
    assert_eq!(basename("/proj/sub/file.marko"), "file.marko");
    assert_eq!(basename("/proj/sub/"), "sub");
}

#[test]
fn extname_uses_last_dot_only() {
    assert_eq!(extname("/a/b.marko"), Some("marko"));
    assert_eq!(extname("/a/b.marko.js"), Some("js"));
    assert_eq!(extname("/a/.babelrc"), None);
    assert_eq!(extname("/a/Makefile"), None);
    assert!(has_extension("/a/b.marko", "marko"));
    assert!(has_extension("/a/b.marko", ".marko"));
    assert!(!has_extension("/a/b.marko.js", "marko"));
}

#[test]
fn normalize_rejects_relative_and_parent_segments() {
    assert_eq!(normalize("//proj//a/./b/"), Some("/proj/a/b".to_string()));
    assert_eq!(normalize("/"), Some("/".to_string()));
    assert_eq!(normalize("proj/a"), None);
    assert_eq!(normalize("/proj/../etc"), None);
}

#[test]
fn strip_root_requires_segment_boundary() {
    assert_eq!(strip_root("/proj1/a", "/"), Some("proj1/a"));
    assert_eq!(strip_root("/root/proj1/a", "/root"), Some("proj1/a"));
    assert_eq!(strip_root("/root", "/root"), Some(""));
    assert_eq!(strip_root("/rootless/a", "/root"), None);
    assert_eq!(strip_root("/other/a", "/root"), None);
}
