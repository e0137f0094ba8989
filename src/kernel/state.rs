use rustc_hash::FxHashMap;
use std::rc::Rc;

use crate::models::{FileRef, PaneEntry, ProjectRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneSlot {
    InputTop,
    InputBottom,
    OutputTop,
    OutputBottom,
}

impl PaneSlot {
    pub const ALL: [PaneSlot; 4] = [
        PaneSlot::InputTop,
        PaneSlot::InputBottom,
        PaneSlot::OutputTop,
        PaneSlot::OutputBottom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InputTop => "inputTop",
            Self::InputBottom => "inputBottom",
            Self::OutputTop => "outputTop",
            Self::OutputBottom => "outputBottom",
        }
    }
}

/// Four-quadrant editor layout. Always derived, see `kernel::panes`.
#[derive(Debug, Clone, Default)]
pub struct Panes {
    pub input_top: Vec<PaneEntry>,
    pub input_bottom: Vec<PaneEntry>,
    pub output_top: Vec<PaneEntry>,
    pub output_bottom: Vec<PaneEntry>,
}

impl Panes {
    pub fn bucket(&self, slot: PaneSlot) -> &[PaneEntry] {
        match slot {
            PaneSlot::InputTop => &self.input_top,
            PaneSlot::InputBottom => &self.input_bottom,
            PaneSlot::OutputTop => &self.output_top,
            PaneSlot::OutputBottom => &self.output_bottom,
        }
    }

    pub(crate) fn bucket_mut(&mut self, slot: PaneSlot) -> &mut Vec<PaneEntry> {
        match slot {
            PaneSlot::InputTop => &mut self.input_top,
            PaneSlot::InputBottom => &mut self.input_bottom,
            PaneSlot::OutputTop => &mut self.output_top,
            PaneSlot::OutputBottom => &mut self.output_bottom,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PaneSlot, &PaneEntry)> {
        PaneSlot::ALL
            .into_iter()
            .flat_map(move |slot| self.bucket(slot).iter().map(move |entry| (slot, entry)))
    }

    pub fn len(&self) -> usize {
        PaneSlot::ALL.iter().map(|&slot| self.bucket(slot).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slot holding the entry for `path`, `output` selecting views or plain files.
    pub fn slot_of(&self, path: &str, output: bool) -> Option<PaneSlot> {
        self.iter()
            .find(|(_, entry)| entry.path() == path && entry.is_output() == output)
            .map(|(slot, _)| slot)
    }
}

/// The single mutable state record owned by the `Store`.
///
/// Mutation goes through the store; readers get accessors only.
#[derive(Debug, Clone)]
pub struct AppState {
    pub(crate) root_dir: FileRef,
    pub(crate) projects: Vec<Rc<ProjectRecord>>,
    pub(crate) project_lookup: FxHashMap<String, Rc<ProjectRecord>>,
    pub(crate) active_project: Option<Rc<ProjectRecord>>,
    pub(crate) focused_file: Option<String>,
    pub(crate) focused_directory: Option<String>,
    pub(crate) open_files: Vec<FileRef>,
    pub(crate) preview_file: Option<FileRef>,
    pub(crate) demo_preview_file: Option<FileRef>,
    pub(crate) project_preview_file: Option<FileRef>,
    pub(crate) component_preview_file: Option<FileRef>,
    pub(crate) panes: Panes,
}

impl AppState {
    pub fn new(root_dir: FileRef) -> Self {
        Self {
            root_dir,
            projects: Vec::new(),
            project_lookup: FxHashMap::default(),
            active_project: None,
            focused_file: None,
            focused_directory: None,
            open_files: Vec::new(),
            preview_file: None,
            demo_preview_file: None,
            project_preview_file: None,
            component_preview_file: None,
            panes: Panes::default(),
        }
    }

    pub fn root_dir(&self) -> &FileRef {
        &self.root_dir
    }

    pub fn projects(&self) -> &[Rc<ProjectRecord>] {
        &self.projects
    }

    pub fn project(&self, name: &str) -> Option<&Rc<ProjectRecord>> {
        self.project_lookup.get(name)
    }

    pub fn active_project(&self) -> Option<&Rc<ProjectRecord>> {
        self.active_project.as_ref()
    }

    pub fn focused_file(&self) -> Option<&str> {
        self.focused_file.as_deref()
    }

    pub fn focused_directory(&self) -> Option<&str> {
        self.focused_directory.as_deref()
    }

    pub fn open_files(&self) -> &[FileRef] {
        &self.open_files
    }

    pub fn preview_file(&self) -> Option<&FileRef> {
        self.preview_file.as_ref()
    }

    pub fn demo_preview_file(&self) -> Option<&FileRef> {
        self.demo_preview_file.as_ref()
    }

    pub fn project_preview_file(&self) -> Option<&FileRef> {
        self.project_preview_file.as_ref()
    }

    pub fn component_preview_file(&self) -> Option<&FileRef> {
        self.component_preview_file.as_ref()
    }

    pub fn panes(&self) -> &Panes {
        &self.panes
    }

    /// Empties the open-file list and every preview slot.
    pub(crate) fn clear_focus_outputs(&mut self) {
        self.open_files.clear();
        self.preview_file = None;
        self.demo_preview_file = None;
        self.project_preview_file = None;
        self.component_preview_file = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
