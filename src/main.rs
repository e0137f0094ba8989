mod logging;

use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use playground::kernel::services::adapters::{
    load_settings, mirror_dir, DiskWatcher, MemoryFs, MemoryModuleCache,
};
use playground::kernel::{AppState, PaneSlot, Store};

const WATCH_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "playground", version, about = "Inspect playground focus and pane layout")]
struct Cli {
    /// Directory whose top-level subdirectories are the projects
    root: PathBuf,

    /// Virtual path to focus, e.g. /my-project/components/button (repeatable)
    #[arg(long)]
    focus: Vec<String>,

    /// Focus a project's entry file by project name
    #[arg(long)]
    project: Option<String>,

    /// Settings file overriding the default filename policy
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep running and push on-disk edits through the store
    #[arg(long)]
    watch: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let _logging = logging::init();

    let config = load_settings(cli.config.as_deref());

    let mut fs = MemoryFs::new("/");
    mirror_dir(&mut fs, &cli.root, "/")?;

    let mut store = Store::new(fs, MemoryModuleCache::new(), config);
    store.load_projects()?;
    print_projects(store.state());

    if let Some(name) = cli.project.as_deref() {
        if !store.focus_project(name) {
            eprintln!("unknown project: {name}");
        }
    }
    for path in &cli.focus {
        if !store.focus_file(path) {
            eprintln!("focus ignored: {path}");
        }
    }
    print_layout(store.state());

    if cli.watch {
        watch(&mut store, &cli.root)?;
    }
    Ok(())
}

fn watch(store: &mut Store, root: &std::path::Path) -> Result<(), Box<dyn Error>> {
    let mut watcher = DiskWatcher::new(root, "/")?;
    store.on_file_modified(|event| println!("modified: {}", event.path));
    tracing::info!(root = %watcher.disk_root().display(), "watching for changes");

    loop {
        let changes = watcher.drain_changes();
        if !changes.is_empty() {
            for change in &changes {
                store.save_file(&change.virtual_path, &change.text)?;
            }
            print_layout(store.state());
        }
        std::thread::sleep(WATCH_INTERVAL);
    }
}

fn print_projects(state: &AppState) {
    println!("projects:");
    for project in state.projects() {
        let preview = project
            .preview_file
            .as_ref()
            .map(|f| f.path.as_str())
            .unwrap_or("-");
        println!("  {} ({}) preview: {}", project.name, project.description, preview);
    }
}

fn print_layout(state: &AppState) {
    println!(
        "focus: {} (dir {})",
        state.focused_file().unwrap_or("-"),
        state.focused_directory().unwrap_or("-")
    );
    for slot in PaneSlot::ALL {
        println!("{}:", slot.as_str());
        for entry in state.panes().bucket(slot) {
            match entry.output_mode() {
                Some(mode) => println!("  {} [{}]", entry.path(), mode.as_str()),
                None => println!("  {}", entry.path()),
            }
        }
    }
}
