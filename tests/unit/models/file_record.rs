use super::*;
use crate::models::vpath;

fn file(path: &str, text: &str) -> FileRef {
    Rc::new(FileRecord {
        path: path.to_string(),
        name: vpath::basename(path).to_string(),
        kind: NodeKind::File,
        text: Some(text.to_string()),
        files: Vec::new(),
    })
}

#[test]
fn preview_view_shares_the_record() {
    let record = file("/proj/index.marko", "<div/>");
    let view = PreviewView::new(record.clone(), OutputMode::Compiled);

    assert!(view.output());
    assert_eq!(view.output_mode(), OutputMode::Compiled);
    assert_eq!(view.path(), "/proj/index.marko");
    assert_eq!(view.name(), "index.marko");
    assert_eq!(view.text(), "<div/>");
    assert!(view.shares_record(&record));
    assert!(!view.shares_record(&file("/proj/index.marko", "<div/>")));
}

#[test]
fn pane_entry_distinguishes_views_from_files() {
    let record = file("/proj/demo.marko", "");
    let plain = PaneEntry::File(record.clone());
    let view = PaneEntry::View(PreviewView::new(record, OutputMode::Preview));

    assert!(!plain.is_output());
    assert!(plain.as_file().is_some());
    assert_eq!(plain.output_mode(), None);

    assert!(view.is_output());
    assert!(view.as_file().is_none());
    assert_eq!(view.output_mode(), Some(OutputMode::Preview));
    assert_eq!(view.path(), plain.path());
}

#[test]
fn walk_files_is_depth_first_in_tree_order() {
    let tree = FileRecord {
        path: "/".to_string(),
        name: String::new(),
        kind: NodeKind::Dir,
        text: None,
        files: vec![
            Rc::new(FileRecord {
                path: "/a".to_string(),
                name: "a".to_string(),
                kind: NodeKind::Dir,
                text: None,
                files: vec![file("/a/x.marko", "")],
            }),
            file("/b.txt", ""),
        ],
    };

    let paths: Vec<&str> = tree.walk_files().iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["/a/x.marko", "/b.txt"]);
}

#[test]
fn record_serializes_kind_as_type() {
    let json = serde_json::to_value(&*file("/a.marko", "x")).unwrap();
    assert_eq!(json["type"], "file");
    assert_eq!(json["text"], "x");
    assert!(json.get("files").is_none());
}
