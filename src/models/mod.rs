//! Data model layer

pub mod file_record;
pub mod project;
pub mod vpath;

pub use file_record::{FileRecord, FileRef, NodeKind, OutputMode, PaneEntry, PreviewView};
pub use project::ProjectRecord;
