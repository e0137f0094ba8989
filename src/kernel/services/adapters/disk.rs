//! Bridges an on-disk directory into a [`MemoryFs`].
//!
//! `mirror_dir` copies a directory tree once; `DiskWatcher` reports later
//! on-disk edits so the host can push them through `Store::save_file`.

use notify::event::{CreateKind, ModifyKind};
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use thiserror::Error;

use super::memory_fs::MemoryFs;
use crate::kernel::services::ports::vfs::{VfsError, VirtualFs};
use crate::models::vpath;

const WATCHER_POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Error)]
pub enum DiskError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] io::Error),
    #[error(transparent)]
    Vfs(#[from] VfsError),
}

pub fn should_ignore(name: &str) -> bool {
    matches!(
        name,
        ".DS_Store"
            | ".Spotlight-V100"
            | ".Trashes"
            | ".fseventsd"
            | ".TemporaryItems"
            | "Thumbs.db"
            | "desktop.ini"
            | ".git"
            | "node_modules"
    )
}

fn load_dir_entries(path: &Path) -> Result<Vec<(String, bool)>, DiskError> {
    let read_dir = std::fs::read_dir(path).map_err(|e| DiskError::Io(path.to_path_buf(), e))?;
    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| DiskError::Io(path.to_path_buf(), e))?;
        let name = entry.file_name().to_string_lossy().to_string();
        if should_ignore(&name) {
            continue;
        }
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        entries.push((name, is_dir));
    }
    entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}

/// Copies every file under `disk_root` into `fs` below `virtual_dir`.
///
/// Entries are visited in name order so the virtual tree is deterministic.
/// Returns the number of files written.
pub fn mirror_dir(fs: &mut MemoryFs, disk_root: &Path, virtual_dir: &str) -> Result<usize, DiskError> {
    fs.create_dir_all(virtual_dir)?;

    let mut written = 0;
    let mut stack = vec![(disk_root.to_path_buf(), virtual_dir.to_string())];
    while let Some((disk_dir, virtual_dir)) = stack.pop() {
        let mut subdirs = Vec::new();
        for (name, is_dir) in load_dir_entries(&disk_dir)? {
            let disk_path = disk_dir.join(&name);
            let virtual_path = vpath::join(&virtual_dir, &name);
            if is_dir {
                fs.create_dir_all(&virtual_path)?;
                subdirs.push((disk_path, virtual_path));
            } else {
                let bytes =
                    std::fs::read(&disk_path).map_err(|e| DiskError::Io(disk_path.clone(), e))?;
                fs.write_file(&virtual_path, &String::from_utf8_lossy(&bytes))?;
                written += 1;
            }
        }
        stack.extend(subdirs.into_iter().rev());
    }

    tracing::debug!(root = %disk_root.display(), files = written, "mirrored directory");
    Ok(written)
}

/// Maps a host path below `disk_root` to its virtual path below `virtual_root`.
pub fn to_virtual_path(disk_root: &Path, virtual_root: &str, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(disk_root).ok()?;
    let mut out = virtual_root.to_string();
    for component in relative.components() {
        let Component::Normal(name) = component else {
            return None;
        };
        let name = name.to_str()?;
        if should_ignore(name) {
            return None;
        }
        out = vpath::join(&out, name);
    }
    Some(out)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskChange {
    pub virtual_path: String,
    pub text: String,
}

pub struct DiskWatcher {
    watcher: RecommendedWatcher,
    raw_event_rx: mpsc::Receiver<notify::Event>,
    disk_root: PathBuf,
    virtual_root: String,
}

impl DiskWatcher {
    pub fn new(disk_root: &Path, virtual_root: &str) -> Result<Self, notify::Error> {
        let disk_root = disk_root
            .canonicalize()
            .unwrap_or_else(|_| disk_root.to_path_buf());
        let (tx, rx) = mpsc::channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<notify::Event, notify::Error>| {
                let Ok(event) = res else { return };
                let _ = tx.send(event);
            },
            Config::default().with_poll_interval(WATCHER_POLL_INTERVAL),
        )?;
        watcher.watch(&disk_root, RecursiveMode::Recursive)?;
        Ok(Self {
            watcher,
            raw_event_rx: rx,
            disk_root,
            virtual_root: virtual_root.to_string(),
        })
    }

    pub fn disk_root(&self) -> &Path {
        &self.disk_root
    }

    /// Collects the files touched since the last call, deduplicated and
    /// sorted, with their current content.
    pub fn drain_changes(&mut self) -> Vec<DiskChange> {
        let _watcher_guard = &self.watcher;

        let mut touched = FxHashSet::default();
        while let Ok(event) = self.raw_event_rx.try_recv() {
            touched.extend(changed_paths(event));
        }

        let mut touched = touched.into_iter().collect::<Vec<_>>();
        touched.sort_unstable();

        touched
            .into_iter()
            .filter_map(|path| {
                let virtual_path = to_virtual_path(&self.disk_root, &self.virtual_root, &path)?;
                let bytes = std::fs::read(&path).ok()?;
                Some(DiskChange {
                    virtual_path,
                    text: String::from_utf8_lossy(&bytes).into_owned(),
                })
            })
            .collect()
    }
}

/// Paths whose content may have changed. Removals and renames-away are not
/// reported because the virtual filesystem has no delete operation.
fn changed_paths(event: notify::Event) -> Vec<PathBuf> {
    match event.kind {
        EventKind::Create(CreateKind::Folder) => Vec::new(),
        EventKind::Create(_) => event.paths,
        EventKind::Modify(ModifyKind::Data(_))
        | EventKind::Modify(ModifyKind::Any)
        | EventKind::Modify(ModifyKind::Other) => event.paths,
        EventKind::Modify(ModifyKind::Name(_)) => {
            event.paths.into_iter().filter(|p| p.is_file()).collect()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/disk.rs"]
mod tests;
