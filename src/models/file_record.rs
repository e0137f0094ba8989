//! File records handed out by the virtual filesystem, and the display-only
//! views the pane layout is built from.

use serde::{Deserialize, Serialize};
use std::rc::Rc;

pub type FileRef = Rc<FileRecord>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Dir,
}

/// Snapshot of one filesystem entry.
///
/// `path` is always `join(parent.path, name)`. Directory children keep the
/// insertion order of the underlying tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileRef>,
}

impl FileRecord {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Depth-first walk over every plain file below (and including) `self`.
    pub fn walk_files(&self) -> Vec<&FileRecord> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(record) = stack.pop() {
            if record.is_file() {
                out.push(record);
                continue;
            }
            for child in record.files.iter().rev() {
                stack.push(child);
            }
        }
        out
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Preview,
    Compiled,
}

impl OutputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Preview => "preview",
            Self::Compiled => "compiled",
        }
    }
}

/// Display-only facade over a file placed in an output pane.
///
/// It shares the underlying record instead of copying it and is never handed
/// to anything that keys off file identity.
#[derive(Debug, Clone)]
pub struct PreviewView {
    source: FileRef,
    mode: OutputMode,
}

impl PreviewView {
    pub fn new(source: FileRef, mode: OutputMode) -> Self {
        Self { source, mode }
    }

    pub fn output(&self) -> bool {
        true
    }

    pub fn output_mode(&self) -> OutputMode {
        self.mode
    }

    pub fn path(&self) -> &str {
        &self.source.path
    }

    pub fn name(&self) -> &str {
        &self.source.name
    }

    pub fn text(&self) -> &str {
        self.source.text()
    }

    pub fn source(&self) -> &FileRef {
        &self.source
    }

    pub fn shares_record(&self, record: &FileRef) -> bool {
        Rc::ptr_eq(&self.source, record)
    }
}

/// One entry in a pane bucket.
#[derive(Debug, Clone)]
pub enum PaneEntry {
    File(FileRef),
    View(PreviewView),
}

impl PaneEntry {
    pub fn path(&self) -> &str {
        match self {
            Self::File(file) => &file.path,
            Self::View(view) => view.path(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::File(file) => &file.name,
            Self::View(view) => view.name(),
        }
    }

    pub fn is_output(&self) -> bool {
        matches!(self, Self::View(_))
    }

    pub fn output_mode(&self) -> Option<OutputMode> {
        match self {
            Self::File(_) => None,
            Self::View(view) => Some(view.output_mode()),
        }
    }

    pub fn as_file(&self) -> Option<&FileRef> {
        match self {
            Self::File(file) => Some(file),
            Self::View(_) => None,
        }
    }

    pub fn as_view(&self) -> Option<&PreviewView> {
        match self {
            Self::File(_) => None,
            Self::View(view) => Some(view),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_record.rs"]
mod tests;
