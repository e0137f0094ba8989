//! In-memory virtual filesystem.
//!
//! Flat arena storage; each node keeps its base name, its parent and, for
//! directories, the child ids in insertion order. Snapshots handed out through
//! [`VirtualFs`] are built on demand.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::kernel::services::ports::vfs::{FileModified, Result, VfsError, VirtualFs};
use crate::models::{vpath, FileRecord, FileRef, NodeKind};

new_key_type! { pub struct NodeId; }

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    name: String,
    path: String,
    parent: Option<NodeId>,
    children: Option<Vec<NodeId>>,
    text: Option<String>,
}

impl Node {
    fn new_file(name: String, path: String, parent: NodeId, text: String) -> Self {
        Self {
            kind: NodeKind::File,
            name,
            path,
            parent: Some(parent),
            children: None,
            text: Some(text),
        }
    }

    fn new_dir(name: String, path: String, parent: Option<NodeId>) -> Self {
        Self {
            kind: NodeKind::Dir,
            name,
            path,
            parent,
            children: Some(Vec::new()),
            text: None,
        }
    }
}

pub struct MemoryFs {
    arena: SlotMap<NodeId, Node>,
    root: NodeId,
    root_path: String,
    id_by_path: FxHashMap<String, NodeId>,
    subscribers: Vec<Sender<FileModified>>,
}

impl MemoryFs {
    /// Creates an empty tree rooted at `root_path`. Invalid roots fall back to `/`.
    pub fn new(root_path: &str) -> Self {
        let root_path = vpath::normalize(root_path).unwrap_or_else(|| "/".to_string());
        let root_name = vpath::basename(&root_path).to_string();

        let mut arena = SlotMap::with_key();
        let root = arena.insert(Node::new_dir(root_name, root_path.clone(), None));

        let mut id_by_path = FxHashMap::default();
        id_by_path.insert(root_path.clone(), root);

        Self {
            arena,
            root,
            root_path,
            id_by_path,
            subscribers: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 1
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn find_node_by_path(&self, path: &str) -> Option<NodeId> {
        let path = vpath::normalize(path)?;
        self.id_by_path.get(&path).copied()
    }

    pub fn is_dir(&self, id: NodeId) -> bool {
        self.arena
            .get(id)
            .map(|n| n.kind == NodeKind::Dir)
            .unwrap_or(false)
    }

    /// Creates `path` and any missing ancestors as directories.
    pub fn create_dir_all(&mut self, path: &str) -> Result<NodeId> {
        let path = self.checked_path(path)?;
        let relative = vpath::strip_root(&path, &self.root_path)
            .ok_or_else(|| VfsError::InvalidPath(path.clone()))?
            .to_string();

        let mut current = self.root;
        for segment in vpath::segments(&relative) {
            let current_path = self.arena[current].path.clone();
            let child_path = vpath::join(&current_path, segment);
            current = match self.id_by_path.get(&child_path).copied() {
                Some(id) if self.is_dir(id) => id,
                Some(_) => return Err(VfsError::NotADirectory(child_path)),
                None => self.insert_child(current, segment, NodeKind::Dir, None)?,
            };
        }
        Ok(current)
    }

    fn insert_child(
        &mut self,
        parent: NodeId,
        name: &str,
        kind: NodeKind,
        text: Option<String>,
    ) -> Result<NodeId> {
        let parent_path = {
            let parent_ro = self
                .arena
                .get(parent)
                .ok_or_else(|| VfsError::NotFound(name.to_string()))?;
            if parent_ro.children.is_none() {
                return Err(VfsError::NotADirectory(parent_ro.path.clone()));
            }
            parent_ro.path.clone()
        };

        let path = vpath::join(&parent_path, name);
        let node = match kind {
            NodeKind::File => {
                Node::new_file(name.to_string(), path.clone(), parent, text.unwrap_or_default())
            }
            NodeKind::Dir => Node::new_dir(name.to_string(), path.clone(), Some(parent)),
        };
        let id = self.arena.insert(node);

        if let Some(children) = self.arena.get_mut(parent).and_then(|n| n.children.as_mut()) {
            children.push(id);
        }
        self.id_by_path.insert(path, id);
        Ok(id)
    }

    fn checked_path(&self, path: &str) -> Result<String> {
        let normalized =
            vpath::normalize(path).ok_or_else(|| VfsError::InvalidPath(path.to_string()))?;
        if vpath::strip_root(&normalized, &self.root_path).is_none() {
            return Err(VfsError::InvalidPath(path.to_string()));
        }
        Ok(normalized)
    }

    fn snapshot(&self, id: NodeId) -> Option<FileRef> {
        let node = self.arena.get(id)?;
        let files = node
            .children
            .as_ref()
            .map(|children| {
                children
                    .iter()
                    .filter_map(|&child| self.snapshot(child))
                    .collect()
            })
            .unwrap_or_default();

        Some(Rc::new(FileRecord {
            path: node.path.clone(),
            name: node.name.clone(),
            kind: node.kind,
            text: node.text.clone(),
            files,
        }))
    }

    fn emit(&mut self, event: FileModified) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new("/")
    }
}

impl VirtualFs for MemoryFs {
    fn root_path(&self) -> &str {
        &self.root_path
    }

    fn read_tree(&self) -> FileRef {
        match self.snapshot(self.root) {
            Some(tree) => tree,
            None => Rc::new(FileRecord {
                path: self.root_path.clone(),
                name: vpath::basename(&self.root_path).to_string(),
                kind: NodeKind::Dir,
                text: None,
                files: Vec::new(),
            }),
        }
    }

    fn get_file(&self, path: &str) -> Option<FileRef> {
        self.snapshot(self.find_node_by_path(path)?)
    }

    fn exists(&self, path: &str) -> bool {
        self.find_node_by_path(path).is_some()
    }

    fn write_file(&mut self, path: &str, text: &str) -> Result<()> {
        let path = self.checked_path(path)?;
        if path == self.root_path {
            return Err(VfsError::IsADirectory(path));
        }

        match self.id_by_path.get(&path).copied() {
            Some(id) => {
                let node = &mut self.arena[id];
                if node.kind == NodeKind::Dir {
                    return Err(VfsError::IsADirectory(path));
                }
                node.text = Some(text.to_string());
            }
            None => {
                let parent = self.create_dir_all(vpath::dirname(&path))?;
                self.insert_child(
                    parent,
                    vpath::basename(&path),
                    NodeKind::File,
                    Some(text.to_string()),
                )?;
            }
        }

        let name = vpath::basename(&path).to_string();
        self.emit(FileModified { path, name });
        Ok(())
    }

    fn subscribe(&mut self) -> Receiver<FileModified> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/memory_fs.rs"]
mod tests;
