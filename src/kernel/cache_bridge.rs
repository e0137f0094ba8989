//! Cache invalidation on filesystem modification.
//!
//! Every modified path is evicted on its own. A tag-registry change then
//! evicts every template, anything else clears the whole cache, since
//! cross-file dependencies are not tracked.

use std::sync::mpsc::{Receiver, TryRecvError};

use crate::kernel::services::ports::config::PlaygroundConfig;
use crate::kernel::services::ports::module_cache::ModuleCache;
use crate::kernel::services::ports::vfs::{FileModified, VirtualFs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidation {
    /// Entries whose key carries the template extension.
    Templates,
    Everything,
}

pub fn invalidation_for(event: &FileModified, config: &PlaygroundConfig) -> Invalidation {
    if config.is_tag_registry(&event.name) {
        Invalidation::Templates
    } else {
        Invalidation::Everything
    }
}

pub fn invalidate(
    cache: &mut dyn ModuleCache,
    event: &FileModified,
    config: &PlaygroundConfig,
) -> Invalidation {
    cache.clear_file_cache(&event.path);

    let scope = invalidation_for(event, config);
    match scope {
        Invalidation::Templates => {
            let is_template: &dyn Fn(&str) -> bool = &|path| config.is_template_source(path);
            cache.clear_cache(Some(is_template));
        }
        Invalidation::Everything => cache.clear_cache(None),
    }

    tracing::debug!(path = %event.path, scope = ?scope, "module cache invalidated");
    scope
}

/// Subscription to the filesystem's modification feed.
pub struct CacheBridge {
    rx: Receiver<FileModified>,
}

impl CacheBridge {
    pub fn attach(fs: &mut dyn VirtualFs) -> Self {
        Self { rx: fs.subscribe() }
    }

    /// Pending modifications, oldest first.
    pub fn drain(&self) -> Vec<FileModified> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("filesystem dropped the modification feed");
                    break;
                }
            }
        }
        events
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/cache_bridge.rs"]
mod tests;
