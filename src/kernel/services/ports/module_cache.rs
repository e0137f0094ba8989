//! Compiled-module cache contract.

use std::rc::Rc;

use thiserror::Error;

use super::vfs::VirtualFs;

#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("module not found: {0}")]
    NotFound(String),
    #[error("cannot require a directory: {0}")]
    IsADirectory(String),
    #[error("invalid JSON in `{path}`")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A loaded module. JSON files are parsed, everything else is kept as source.
#[derive(Debug, Clone, PartialEq)]
pub enum Module {
    Json(serde_json::Value),
    Source(String),
}

impl Module {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Source(_) => None,
        }
    }

    /// Top-level string field of a JSON module.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.as_json()?.get(key)?.as_str()
    }
}

pub trait ModuleCache {
    fn clear_file_cache(&mut self, path: &str);

    /// Drops every entry whose key matches `filter`, or everything when
    /// `filter` is `None`.
    fn clear_cache(&mut self, filter: Option<&dyn Fn(&str) -> bool>);

    fn require(&mut self, fs: &dyn VirtualFs, path: &str) -> Result<Rc<Module>, ModuleError>;

    fn is_cached(&self, path: &str) -> bool;

    /// Cached keys in sorted order.
    fn cached_paths(&self) -> Vec<String>;
}
