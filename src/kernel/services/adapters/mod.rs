//! Service adapters: reference implementations of the ports plus host IO.

pub mod disk;
pub mod memory_fs;
pub mod module_cache;
pub mod settings;

pub use disk::{mirror_dir, should_ignore, to_virtual_path, DiskChange, DiskError, DiskWatcher};
pub use memory_fs::{MemoryFs, NodeId};
pub use module_cache::MemoryModuleCache;
pub use settings::{ensure_log_dir, get_log_dir, get_settings_path, load_settings, load_settings_from};
