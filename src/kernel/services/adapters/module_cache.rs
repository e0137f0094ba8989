//! In-memory compiled-module cache keyed by virtual path.

use rustc_hash::FxHashMap;
use std::rc::Rc;

use crate::kernel::services::ports::module_cache::{Module, ModuleCache, ModuleError};
use crate::kernel::services::ports::vfs::VirtualFs;
use crate::models::vpath;

#[derive(Default)]
pub struct MemoryModuleCache {
    modules: FxHashMap<String, Rc<Module>>,
}

impl MemoryModuleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    fn load(fs: &dyn VirtualFs, path: &str) -> Result<Module, ModuleError> {
        let file = fs
            .get_file(path)
            .ok_or_else(|| ModuleError::NotFound(path.to_string()))?;
        if file.is_dir() {
            return Err(ModuleError::IsADirectory(path.to_string()));
        }

        if vpath::has_extension(path, "json") {
            let value = serde_json::from_str(file.text()).map_err(|source| ModuleError::Json {
                path: path.to_string(),
                source,
            })?;
            Ok(Module::Json(value))
        } else {
            Ok(Module::Source(file.text().to_string()))
        }
    }
}

impl ModuleCache for MemoryModuleCache {
    fn clear_file_cache(&mut self, path: &str) {
        self.modules.remove(path);
    }

    fn clear_cache(&mut self, filter: Option<&dyn Fn(&str) -> bool>) {
        match filter {
            Some(filter) => self.modules.retain(|path, _| !filter(path)),
            None => self.modules.clear(),
        }
    }

    fn require(&mut self, fs: &dyn VirtualFs, path: &str) -> Result<Rc<Module>, ModuleError> {
        if let Some(module) = self.modules.get(path) {
            return Ok(Rc::clone(module));
        }

        let module = Rc::new(Self::load(fs, path)?);
        tracing::trace!(path, "module loaded");
        self.modules.insert(path.to_string(), Rc::clone(&module));
        Ok(module)
    }

    fn is_cached(&self, path: &str) -> bool {
        self.modules.contains_key(path)
    }

    fn cached_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.modules.keys().cloned().collect();
        paths.sort_unstable();
        paths
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/module_cache.rs"]
mod tests;
