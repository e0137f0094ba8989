//! Pane assignment: preview slots and open files into four buckets.

use crate::kernel::services::ports::config::PlaygroundConfig;
use crate::kernel::state::{AppState, PaneSlot, Panes};
use crate::models::{OutputMode, PaneEntry, PreviewView};

/// Bucket for an open file, first matching rule wins.
pub fn route_open_file(name: &str, config: &PlaygroundConfig) -> PaneSlot {
    if config.is_demo_entry(name) {
        PaneSlot::InputTop
    } else if config.is_component_entry(name) {
        PaneSlot::InputBottom
    } else if config.is_compiled_output(name) {
        PaneSlot::OutputTop
    } else {
        PaneSlot::InputBottom
    }
}

pub fn assign_open_files_to_panes(state: &AppState, config: &PlaygroundConfig) -> Panes {
    let mut panes = Panes::default();

    let previews = [
        (&state.preview_file, PaneSlot::OutputTop, OutputMode::Preview),
        (&state.demo_preview_file, PaneSlot::OutputTop, OutputMode::Preview),
        (&state.component_preview_file, PaneSlot::OutputBottom, OutputMode::Compiled),
        (&state.project_preview_file, PaneSlot::OutputTop, OutputMode::Preview),
    ];
    for (file, slot, mode) in previews {
        if let Some(file) = file {
            panes
                .bucket_mut(slot)
                .push(PaneEntry::View(PreviewView::new(file.clone(), mode)));
        }
    }

    for file in &state.open_files {
        panes
            .bucket_mut(route_open_file(&file.name, config))
            .push(PaneEntry::File(file.clone()));
    }

    panes
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/panes.rs"]
mod tests;
