//! Server-rendered seed used to hydrate a fresh store.

use serde::{Deserialize, Serialize};

use crate::models::FileRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFileRef {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedState {
    pub root_dir: FileRecord,
    #[serde(default)]
    pub focused_directory: Option<String>,
    #[serde(default)]
    pub focused_file: Option<String>,
    #[serde(default)]
    pub open_files: Vec<SeedFileRef>,
}

impl SeedState {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Every file in the seed tree with its content, depth first.
    pub fn files(&self) -> impl Iterator<Item = (&str, &str)> {
        self.root_dir
            .walk_files()
            .into_iter()
            .map(|f| (f.path.as_str(), f.text()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/seed.rs"]
mod tests;
