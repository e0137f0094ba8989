//! Project loading and path-to-project resolution.

use regex::Regex;
use rustc_hash::FxHashMap;
use std::rc::Rc;
use std::sync::OnceLock;

use crate::kernel::services::ports::config::PlaygroundConfig;
use crate::kernel::services::ports::module_cache::{ModuleCache, ModuleError};
use crate::kernel::services::ports::vfs::VirtualFs;
use crate::models::{vpath, FileRef, ProjectRecord};

fn project_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("valid project name pattern"))
}

#[derive(Debug, Default)]
pub struct ProjectIndex {
    pub projects: Vec<Rc<ProjectRecord>>,
    pub lookup: FxHashMap<String, Rc<ProjectRecord>>,
}

/// Builds one project per top-level directory of `root`, in tree order.
pub fn load_projects(
    root: &FileRef,
    fs: &dyn VirtualFs,
    cache: &mut dyn ModuleCache,
    config: &PlaygroundConfig,
) -> Result<ProjectIndex, ModuleError> {
    let mut index = ProjectIndex::default();

    for dir in root.files.iter().filter(|f| f.is_dir()) {
        let project = Rc::new(load_project(dir, fs, cache, config)?);
        if index
            .lookup
            .insert(project.name.clone(), Rc::clone(&project))
            .is_some()
        {
            tracing::warn!(name = %project.name, "duplicate project name, keeping the last one");
        }
        index.projects.push(project);
    }

    tracing::info!(count = index.projects.len(), "projects loaded");
    Ok(index)
}

fn load_project(
    dir: &FileRef,
    fs: &dyn VirtualFs,
    cache: &mut dyn ModuleCache,
    config: &PlaygroundConfig,
) -> Result<ProjectRecord, ModuleError> {
    let manifest_path = vpath::join(&dir.path, &config.manifest);
    let mut description = dir.name.clone();
    if fs.exists(&manifest_path) {
        let manifest = cache.require(fs, &manifest_path)?;
        if let Some(text) = manifest.str_field("description").filter(|d| !d.is_empty()) {
            description = text.to_string();
        }
    }

    let preview_path = vpath::join(&dir.path, &config.project_preview_entry);
    let preview_file = fs.get_file(&preview_path).filter(|f| f.is_file());

    Ok(ProjectRecord {
        name: dir.name.clone(),
        description,
        root_dir: Rc::clone(dir),
        preview_file,
    })
}

/// Name of the project owning `path`: the first segment below `root_path`,
/// provided it is a plain identifier (alphanumerics, `-` and `_`).
pub fn project_name_for_path<'a>(root_path: &str, path: &'a str) -> Option<&'a str> {
    let relative = vpath::strip_root(path, root_path)?;
    let first = vpath::segments(relative).next()?;
    project_name_regex().is_match(first).then_some(first)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/projects.rs"]
mod tests;
