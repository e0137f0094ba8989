use super::seed::SeedState;

#[derive(Debug, Clone)]
pub enum Action {
    LoadProjects,
    FocusFile(String),
    FocusProject(String),
    SaveFile {
        path: String,
        text: String,
    },
    /// Sets or clears the global preview slot.
    SetPreviewFile(Option<String>),
    /// Processes modifications queued by writes made directly on the filesystem.
    PumpFsEvents,
    Initialize(Box<SeedState>),
}
