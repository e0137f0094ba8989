use std::cell::RefCell;
use std::rc::Rc;

use crate::kernel::services::adapters::{MemoryFs, MemoryModuleCache};
use crate::kernel::services::ports::config::PlaygroundConfig;
use crate::kernel::services::ports::vfs::VirtualFs;
use crate::kernel::Store;

pub const BUTTON_DIR: &str = "/proj1/components/button";

pub const FILES: &[(&str, &str)] = &[
    (
        "/proj1/package.json",
        r#"{"name":"proj1","description":"First project"}"#,
    ),
    ("/proj1/index.marko", "<app/>"),
    ("/proj1/components/button/demo.marko", "<button-demo/>"),
    ("/proj1/components/button/index.marko", "<button/>"),
    (
        "/proj1/components/button/index.marko.js",
        "module.exports = {};",
    ),
    ("/proj1/components/button/style.css", ".btn {}"),
    ("/proj1/components/button/marko-tag.json", "{}"),
    ("/proj1/components/button/nested/helper.js", "exports.x = 1;"),
    ("/proj1/components/README.md", "# components"),
    ("/proj2/package.json", r#"{"name":"proj2"}"#),
    ("/proj2/a.marko", "<a/>"),
    ("/proj2/b.marko", "<b/>"),
    ("/proj2/readme.md", "# proj2"),
    ("/proj2/lib/util.js", "module.exports = 1;"),
    ("/notes.txt", "not a project"),
];

pub fn fixture_fs() -> MemoryFs {
    let mut fs = MemoryFs::new("/");
    for (path, text) in FILES {
        fs.write_file(path, text).unwrap();
    }
    fs
}

pub fn fixture_store() -> Store {
    let mut store = Store::new(
        fixture_fs(),
        MemoryModuleCache::new(),
        PlaygroundConfig::default(),
    );
    store.load_projects().unwrap();
    store
}

/// Records every outward notification as `topic:payload`.
pub fn record_events(store: &mut Store) -> Rc<RefCell<Vec<String>>> {
    let log = Rc::new(RefCell::new(Vec::new()));

    let state_log = Rc::clone(&log);
    store.on_state_change(move |state| {
        state_log
            .borrow_mut()
            .push(format!("state:{}", state.focused_file().unwrap_or("-")));
    });

    let focus_log = Rc::clone(&log);
    store.on_focus_change(move |path| focus_log.borrow_mut().push(format!("focus:{path}")));

    let file_log = Rc::clone(&log);
    store.on_file_modified(move |event| {
        file_log
            .borrow_mut()
            .push(format!("file:{}", event.path))
    });

    log
}

pub fn names(files: &[crate::models::FileRef]) -> Vec<&str> {
    files.iter().map(|f| f.name.as_str()).collect()
}
