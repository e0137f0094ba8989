//! Focus resolution: one "focus this path" request becomes the open-file
//! list, the preview slots and the pane layout.

use rustc_hash::FxHashMap;

use crate::kernel::panes::assign_open_files_to_panes;
use crate::kernel::projects::project_name_for_path;
use crate::kernel::services::ports::config::PlaygroundConfig;
use crate::kernel::services::ports::vfs::VirtualFs;
use crate::kernel::state::AppState;
use crate::models::{vpath, FileRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOutcome {
    /// Unresolvable path, or the path is already focused.
    Ignored,
    /// The focused component directory was focused again; open files and
    /// previews were left as they were.
    Refocused,
    Resolved,
}

impl FocusOutcome {
    pub fn state_changed(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    pub fn focus_changed(self) -> bool {
        matches!(self, Self::Resolved)
    }
}

pub fn focus_file(
    state: &mut AppState,
    fs: &dyn VirtualFs,
    config: &PlaygroundConfig,
    path: &str,
) -> FocusOutcome {
    let Some(file) = fs.get_file(path) else {
        tracing::debug!(path, "focus ignored: unresolvable path");
        return FocusOutcome::Ignored;
    };

    if state.focused_file.as_deref() == Some(path) {
        return FocusOutcome::Ignored;
    }

    state.focused_file = Some(path.to_string());
    state.active_project = project_name_for_path(fs.root_path(), path)
        .and_then(|name| state.project_lookup.get(name))
        .cloned();

    let is_directory = file.is_dir();
    let dir_path = if is_directory {
        path.to_string()
    } else {
        vpath::dirname(path).to_string()
    };

    let previously_focused = state.focused_directory.replace(dir_path.clone());

    let dir = if is_directory {
        Some(file.clone())
    } else {
        fs.get_file(&dir_path)
    };
    let children: &[FileRef] = dir.as_ref().map(|d| d.files.as_slice()).unwrap_or_default();

    let index: FxHashMap<&str, &FileRef> =
        children.iter().map(|c| (c.name.as_str(), c)).collect();
    let is_component = index.contains_key(config.demo_entry.as_str());

    if is_component && is_directory && previously_focused.as_deref() == Some(dir_path.as_str()) {
        tracing::debug!(dir = %dir_path, "component directory refocused");
        return FocusOutcome::Refocused;
    }

    state.clear_focus_outputs();

    if is_component {
        for child in children.iter().filter(|c| c.is_file()) {
            state.open_files.push(child.clone());
            if config.is_demo_entry(&child.name) {
                state.demo_preview_file = Some(child.clone());
            } else if config.is_component_entry(&child.name) {
                state.component_preview_file = Some(child.clone());
            }
        }
        state.project_preview_file = state
            .active_project
            .as_ref()
            .and_then(|p| p.preview_file.clone());
    } else {
        for child in children {
            if child.is_file() && !config.is_manifest(&child.name) {
                state.open_files.push(child.clone());
            }
            // Matched by extension alone, directories included.
            if state.project_preview_file.is_none() && config.is_template_source(&child.path) {
                state.project_preview_file = Some(child.clone());
            }
        }

        if !is_directory && config.is_template_source(&file.path) {
            state.project_preview_file = Some(file);
        }
    }

    state.panes = assign_open_files_to_panes(state, config);

    tracing::debug!(
        path,
        dir = %dir_path,
        component = is_component,
        open = state.open_files.len(),
        "focus resolved"
    );
    FocusOutcome::Resolved
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/focus.rs"]
mod tests;
