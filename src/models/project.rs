use super::FileRef;

/// One top-level directory of the playground root.
#[derive(Debug, Clone)]
pub struct ProjectRecord {
    pub name: String,
    /// Manifest `description`, or `name` when the manifest has none.
    pub description: String,
    pub root_dir: FileRef,
    pub preview_file: Option<FileRef>,
}

impl ProjectRecord {
    pub fn root_path(&self) -> &str {
        &self.root_dir.path
    }
}
