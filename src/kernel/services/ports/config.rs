use serde::{Deserialize, Serialize};

use crate::models::vpath;

pub const DEFAULT_DEMO_ENTRY: &str = "demo.marko";
pub const DEFAULT_COMPONENT_ENTRY: &str = "index.marko";
pub const DEFAULT_PROJECT_PREVIEW_ENTRY: &str = "index.marko";
pub const DEFAULT_COMPILED_SUFFIX: &str = ".marko.js";
pub const DEFAULT_TEMPLATE_EXTENSION: &str = "marko";
pub const DEFAULT_MANIFEST: &str = "package.json";
pub const DEFAULT_TAG_REGISTRIES: [&str; 2] = ["marko-tag.json", "marko-taglib.json"];

/// Filename policy used by focus resolution, pane routing and cache
/// invalidation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// A directory holding this file is a component.
    pub demo_entry: String,
    pub component_entry: String,
    /// Project-level preview, looked up at each project root.
    pub project_preview_entry: String,
    pub compiled_suffix: String,
    /// Without the leading dot.
    pub template_extension: String,
    pub manifest: String,
    pub tag_registries: Vec<String>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            demo_entry: DEFAULT_DEMO_ENTRY.to_string(),
            component_entry: DEFAULT_COMPONENT_ENTRY.to_string(),
            project_preview_entry: DEFAULT_PROJECT_PREVIEW_ENTRY.to_string(),
            compiled_suffix: DEFAULT_COMPILED_SUFFIX.to_string(),
            template_extension: DEFAULT_TEMPLATE_EXTENSION.to_string(),
            manifest: DEFAULT_MANIFEST.to_string(),
            tag_registries: DEFAULT_TAG_REGISTRIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl PlaygroundConfig {
    pub fn is_demo_entry(&self, name: &str) -> bool {
        name == self.demo_entry
    }

    pub fn is_component_entry(&self, name: &str) -> bool {
        name == self.component_entry
    }

    pub fn is_compiled_output(&self, name: &str) -> bool {
        name.ends_with(self.compiled_suffix.as_str())
    }

    /// Matches on the final extension only, so `x.marko.js` is not a template.
    pub fn is_template_source(&self, path: &str) -> bool {
        vpath::has_extension(path, &self.template_extension)
    }

    pub fn is_tag_registry(&self, name: &str) -> bool {
        self.tag_registries.iter().any(|r| r == name)
    }

    pub fn is_manifest(&self, name: &str) -> bool {
        name == self.manifest
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
