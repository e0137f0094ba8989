//! Virtual filesystem contract.
//!
//! The playground never owns file content: it reads snapshots through this
//! trait and writes through it on save.

use std::sync::mpsc::Receiver;

use thiserror::Error;

use crate::models::FileRef;

pub type Result<T> = std::result::Result<T, VfsError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VfsError {
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("not a directory: {0}")]
    NotADirectory(String),
    #[error("is a directory: {0}")]
    IsADirectory(String),
}

/// Payload of the filesystem's `file:modified` notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileModified {
    pub path: String,
    pub name: String,
}

pub trait VirtualFs {
    /// Path of the virtual root, e.g. `/`.
    fn root_path(&self) -> &str;

    fn read_tree(&self) -> FileRef;

    fn get_file(&self, path: &str) -> Option<FileRef>;

    fn exists(&self, path: &str) -> bool;

    fn write_file(&mut self, path: &str, text: &str) -> Result<()>;

    /// Opens a new modification feed. Dropping the receiver unsubscribes.
    fn subscribe(&mut self) -> Receiver<FileModified>;
}
