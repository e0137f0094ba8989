//! Service ports: traits + data contracts for the playground's collaborators.

pub mod config;
pub mod module_cache;
pub mod vfs;

pub use config::PlaygroundConfig;
pub use module_cache::{Module, ModuleCache, ModuleError};
pub use vfs::{FileModified, VfsError, VirtualFs};
