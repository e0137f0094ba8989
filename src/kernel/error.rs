use thiserror::Error;

use crate::kernel::services::ports::module_cache::ModuleError;
use crate::kernel::services::ports::vfs::VfsError;

/// Collaborator failures surfaced by `Store::dispatch`.
///
/// Focus and lookup misses are not errors; they are silent no-ops.
#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error(transparent)]
    Vfs(#[from] VfsError),
    #[error(transparent)]
    Module(#[from] ModuleError),
    #[error("invalid seed state")]
    Seed(#[from] serde_json::Error),
}
