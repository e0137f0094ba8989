use super::*;
use crate::models::{vpath, FileRecord, FileRef, NodeKind};
use std::rc::Rc;

fn record(path: &str) -> FileRef {
    Rc::new(FileRecord {
        path: path.to_string(),
        name: vpath::basename(path).to_string(),
        kind: NodeKind::File,
        text: Some(String::new()),
        files: Vec::new(),
    })
}

fn paths(entries: &[PaneEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.path()).collect()
}

#[test]
fn routing_table_first_match_wins() {
    let config = PlaygroundConfig::default();

    assert_eq!(route_open_file("demo.marko", &config), PaneSlot::InputTop);
    assert_eq!(route_open_file("index.marko", &config), PaneSlot::InputBottom);
    assert_eq!(route_open_file("index.marko.js", &config), PaneSlot::OutputTop);
    assert_eq!(route_open_file("demo.marko.js", &config), PaneSlot::OutputTop);
    assert_eq!(route_open_file("style.css", &config), PaneSlot::InputBottom);
    assert_eq!(route_open_file("other.marko", &config), PaneSlot::InputBottom);
}

#[test]
fn empty_state_yields_four_empty_buckets() {
    let state = AppState::new(record("/"));
    let panes = assign_open_files_to_panes(&state, &PlaygroundConfig::default());

    for slot in PaneSlot::ALL {
        assert!(panes.bucket(slot).is_empty());
    }
}

#[test]
fn preview_slots_are_placed_in_fixed_order() {
    let mut state = AppState::new(record("/"));
    state.preview_file = Some(record("/p/global.marko"));
    state.demo_preview_file = Some(record("/p/c/demo.marko"));
    state.component_preview_file = Some(record("/p/c/index.marko"));
    state.project_preview_file = Some(record("/p/index.marko"));

    let panes = assign_open_files_to_panes(&state, &PlaygroundConfig::default());

    assert_eq!(
        paths(&panes.output_top),
        vec!["/p/global.marko", "/p/c/demo.marko", "/p/index.marko"]
    );
    assert_eq!(paths(&panes.output_bottom), vec!["/p/c/index.marko"]);
    assert!(panes.output_top.iter().all(|e| e.output_mode() == Some(OutputMode::Preview)));
    assert_eq!(panes.output_bottom[0].output_mode(), Some(OutputMode::Compiled));
}

#[test]
fn open_files_follow_previews_in_their_buckets() {
    let mut state = AppState::new(record("/"));
    state.project_preview_file = Some(record("/p/index.marko"));
    state.open_files = vec![
        record("/p/c/demo.marko"),
        record("/p/c/index.marko"),
        record("/p/c/index.marko.js"),
        record("/p/c/style.css"),
    ];

    let panes = assign_open_files_to_panes(&state, &PlaygroundConfig::default());

    assert_eq!(paths(&panes.input_top), vec!["/p/c/demo.marko"]);
    assert_eq!(
        paths(&panes.input_bottom),
        vec!["/p/c/index.marko", "/p/c/style.css"]
    );
    assert_eq!(
        paths(&panes.output_top),
        vec!["/p/index.marko", "/p/c/index.marko.js"]
    );
    assert!(panes.output_top[0].is_output());
    assert!(!panes.output_top[1].is_output());
}

#[test]
fn every_open_file_and_preview_lands_exactly_once() {
    let mut state = AppState::new(record("/"));
    state.demo_preview_file = Some(record("/p/c/demo.marko"));
    state.component_preview_file = Some(record("/p/c/index.marko"));
    state.open_files = vec![
        record("/p/c/demo.marko"),
        record("/p/c/index.marko"),
        record("/p/c/readme.md"),
    ];

    let panes = assign_open_files_to_panes(&state, &PlaygroundConfig::default());

    for file in &state.open_files {
        let hits = panes
            .iter()
            .filter(|(_, e)| e.as_file().is_some_and(|f| Rc::ptr_eq(f, file)))
            .count();
        assert_eq!(hits, 1, "{}", file.path);
    }
    for preview in [&state.demo_preview_file, &state.component_preview_file]
        .into_iter()
        .flatten()
    {
        let hits = panes
            .iter()
            .filter(|(_, e)| e.as_view().is_some_and(|v| v.shares_record(preview) && v.output()))
            .count();
        assert_eq!(hits, 1, "{}", preview.path);
    }
    assert_eq!(panes.len(), 5);
}
