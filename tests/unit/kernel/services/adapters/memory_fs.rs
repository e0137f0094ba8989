use super::*;

#[test]
fn new_tree_has_only_root() {
    let fs = MemoryFs::new("/");
    assert!(fs.is_empty());
    assert!(fs.is_dir(fs.root()));
    assert_eq!(fs.root_path(), "/");
    assert!(fs.exists("/"));
}

#[test]
fn write_creates_parents_in_insertion_order() {
    let mut fs = MemoryFs::default();
    fs.write_file("/p/z.marko", "z").unwrap();
    fs.write_file("/p/a.marko", "a").unwrap();
    fs.write_file("/p/sub/m.js", "m").unwrap();

    let dir = fs.get_file("/p").unwrap();
    assert!(dir.is_dir());
    let names: Vec<&str> = dir.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["z.marko", "a.marko", "sub"]);
    assert_eq!(dir.files[2].files[0].path, "/p/sub/m.js");
}

#[test]
fn rewrite_replaces_text_in_place() {
    let mut fs = MemoryFs::default();
    fs.write_file("/p/a.marko", "one").unwrap();
    fs.write_file("/p/b.marko", "two").unwrap();
    fs.write_file("/p/a.marko", "three").unwrap();

    let dir = fs.get_file("/p").unwrap();
    assert_eq!(dir.files.len(), 2);
    assert_eq!(dir.files[0].text(), "three");
}

#[test]
fn lookups_normalize_paths() {
    let mut fs = MemoryFs::default();
    fs.write_file("/p/a.marko", "a").unwrap();

    assert!(fs.exists("/p//a.marko"));
    assert!(fs.exists("/p/"));
    assert!(fs.get_file("p/a.marko").is_none());
    assert!(!fs.exists("/p/missing"));
}

#[test]
fn write_errors() {
    let mut fs = MemoryFs::default();
    fs.write_file("/p/a.marko", "a").unwrap();

    assert_eq!(
        fs.write_file("/p", "x"),
        Err(VfsError::IsADirectory("/p".to_string()))
    );
    assert_eq!(
        fs.write_file("/p/a.marko/b", "x"),
        Err(VfsError::NotADirectory("/p/a.marko".to_string()))
    );
    assert_eq!(
        fs.write_file("relative", "x"),
        Err(VfsError::InvalidPath("relative".to_string()))
    );
}

#[test]
fn nested_root_rejects_outside_paths() {
    let mut fs = MemoryFs::new("/root");
    fs.write_file("/root/proj1/a.marko", "a").unwrap();

    assert_eq!(fs.read_tree().path, "/root");
    assert_eq!(fs.read_tree().files[0].path, "/root/proj1");
    assert!(matches!(
        fs.write_file("/elsewhere/a.marko", "a"),
        Err(VfsError::InvalidPath(_))
    ));
}

#[test]
fn writes_notify_live_subscribers_only() {
    let mut fs = MemoryFs::default();
    let rx = fs.subscribe();
    let dropped = fs.subscribe();
    drop(dropped);

    fs.write_file("/p/a.marko", "a").unwrap();

    assert_eq!(
        rx.try_recv().unwrap(),
        FileModified {
            path: "/p/a.marko".to_string(),
            name: "a.marko".to_string(),
        }
    );
    assert!(rx.try_recv().is_err());
    assert_eq!(fs.subscriber_count(), 1);
}
