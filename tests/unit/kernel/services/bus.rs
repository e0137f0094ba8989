use super::*;
use crate::models::{FileRecord, NodeKind};
use std::cell::RefCell;
use std::rc::Rc;

fn empty_state() -> AppState {
    AppState::new(Rc::new(FileRecord {
        path: "/".to_string(),
        name: String::new(),
        kind: NodeKind::Dir,
        text: None,
        files: Vec::new(),
    }))
}

#[test]
fn listeners_run_in_subscription_order() {
    let mut bus = EventBus::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    for tag in ["first", "second", "third"] {
        let log = Rc::clone(&log);
        bus.on_focus_change(move |path| log.borrow_mut().push(format!("{tag}:{path}")));
    }

    bus.emit_focus_change("/p/a.marko");
    assert_eq!(
        *log.borrow(),
        vec!["first:/p/a.marko", "second:/p/a.marko", "third:/p/a.marko"]
    );
}

#[test]
fn topics_are_independent() {
    let mut bus = EventBus::new();
    let hits = Rc::new(RefCell::new(Vec::new()));

    let state_hits = Rc::clone(&hits);
    bus.on_state_change(move |_| state_hits.borrow_mut().push(Topic::StateChange));
    let file_hits = Rc::clone(&hits);
    bus.on_file_modified(move |_| file_hits.borrow_mut().push(Topic::FileModified));

    bus.emit_state_change(&empty_state());
    bus.emit_focus_change("/x");
    bus.emit_file_modified(&FileModified {
        path: "/x".to_string(),
        name: "x".to_string(),
    });

    assert_eq!(*hits.borrow(), vec![Topic::StateChange, Topic::FileModified]);
}

#[test]
fn unsubscribe_removes_only_that_listener() {
    let mut bus = EventBus::new();
    let count = Rc::new(RefCell::new(0));

    let c1 = Rc::clone(&count);
    let first = bus.on_state_change(move |_| *c1.borrow_mut() += 1);
    let c2 = Rc::clone(&count);
    bus.on_state_change(move |_| *c2.borrow_mut() += 10);

    assert_eq!(first.topic(), Topic::StateChange);
    assert!(bus.unsubscribe(first));
    assert!(!bus.unsubscribe(first));

    bus.emit_state_change(&empty_state());
    assert_eq!(*count.borrow(), 10);
    assert_eq!(bus.listener_count(Topic::StateChange), 1);

    bus.clear();
    assert_eq!(bus.listener_count(Topic::StateChange), 0);
}

#[test]
fn topic_names() {
    assert_eq!(Topic::StateChange.as_str(), "state:change");
    assert_eq!(Topic::FocusChange.as_str(), "focus:change");
    assert_eq!(Topic::FileModified.as_str(), "file:modified");
}
