//! The state container.
//!
//! `Store` owns the `AppState`, the filesystem and module cache it works
//! against, the cache bridge subscription and the outward event bus. Every
//! mutation happens synchronously inside one `dispatch` call.

use std::rc::Rc;

use crate::kernel::cache_bridge::{self, CacheBridge};
use crate::kernel::error::PlaygroundError;
use crate::kernel::focus::{self, FocusOutcome};
use crate::kernel::panes::assign_open_files_to_panes;
use crate::kernel::projects::{self, project_name_for_path};
use crate::kernel::services::adapters::{MemoryFs, MemoryModuleCache};
use crate::kernel::services::bus::{EventBus, SubscriptionId};
use crate::kernel::services::ports::config::PlaygroundConfig;
use crate::kernel::services::ports::module_cache::ModuleCache;
use crate::kernel::services::ports::vfs::{FileModified, VirtualFs};
use crate::models::{vpath, FileRef, ProjectRecord};

use super::{Action, AppState, SeedState};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchResult {
    pub state_changed: bool,
    pub focus_changed: bool,
    /// Filesystem modifications processed during the call.
    pub fs_events: usize,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed() -> Self {
        Self {
            state_changed: true,
            ..Self::default()
        }
    }
}

pub struct Store<F: VirtualFs = MemoryFs, C: ModuleCache = MemoryModuleCache> {
    state: AppState,
    fs: F,
    cache: C,
    config: PlaygroundConfig,
    bridge: CacheBridge,
    bus: EventBus,
}

impl<F: VirtualFs, C: ModuleCache> Store<F, C> {
    pub fn new(mut fs: F, cache: C, config: PlaygroundConfig) -> Self {
        let bridge = CacheBridge::attach(&mut fs);
        let mut state = AppState::new(fs.read_tree());
        state.panes = assign_open_files_to_panes(&state, &config);
        Self {
            state,
            fs,
            cache,
            config,
            bridge,
            bus: EventBus::new(),
        }
    }

    /// Drops the filesystem subscription and every outward listener, and
    /// hands the collaborators back.
    pub fn dispose(self) -> (F, C) {
        let Self {
            fs,
            cache,
            bridge,
            mut bus,
            ..
        } = self;
        drop(bridge);
        bus.clear();
        (fs, cache)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Writes made here are picked up by the next `pump_fs_events`.
    pub fn fs_mut(&mut self) -> &mut F {
        &mut self.fs
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    pub fn on_state_change<L>(&mut self, listener: L) -> SubscriptionId
    where
        L: FnMut(&AppState) + 'static,
    {
        self.bus.on_state_change(listener)
    }

    pub fn on_focus_change<L>(&mut self, listener: L) -> SubscriptionId
    where
        L: FnMut(&str) + 'static,
    {
        self.bus.on_focus_change(listener)
    }

    pub fn on_file_modified<L>(&mut self, listener: L) -> SubscriptionId
    where
        L: FnMut(&FileModified) + 'static,
    {
        self.bus.on_file_modified(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    pub fn dispatch(&mut self, action: Action) -> Result<DispatchResult, PlaygroundError> {
        match action {
            Action::LoadProjects => {
                self.reload_projects()?;
                Ok(DispatchResult::changed())
            }
            Action::FocusFile(path) => Ok(self.apply_focus(&path)),
            Action::FocusProject(name) => {
                let Some(project) = self.state.project_lookup.get(&name) else {
                    tracing::debug!(name = %name, "focus ignored: unknown project");
                    return Ok(DispatchResult::unchanged());
                };
                let path = vpath::join(project.root_path(), &self.config.project_preview_entry);
                Ok(self.apply_focus(&path))
            }
            Action::SaveFile { path, text } => {
                self.fs.write_file(&path, &text)?;
                let fs_events = self.process_fs_events();
                Ok(DispatchResult {
                    fs_events,
                    ..DispatchResult::unchanged()
                })
            }
            Action::SetPreviewFile(path) => Ok(self.apply_preview(path.as_deref())),
            Action::PumpFsEvents => Ok(DispatchResult {
                fs_events: self.process_fs_events(),
                ..DispatchResult::unchanged()
            }),
            Action::Initialize(seed) => {
                self.hydrate(*seed)?;
                Ok(DispatchResult::changed())
            }
        }
    }

    pub fn load_projects(&mut self) -> Result<(), PlaygroundError> {
        self.dispatch(Action::LoadProjects).map(|_| ())
    }

    /// Returns whether anything changed. Unresolvable or already focused
    /// paths are a silent no-op.
    pub fn focus_file(&mut self, path: &str) -> bool {
        self.apply_focus(path).state_changed
    }

    pub fn focus_project(&mut self, name: &str) -> bool {
        self.dispatch(Action::FocusProject(name.to_string()))
            .map(|r| r.state_changed)
            .unwrap_or(false)
    }

    pub fn save_file(&mut self, path: &str, text: &str) -> Result<(), PlaygroundError> {
        self.dispatch(Action::SaveFile {
            path: path.to_string(),
            text: text.to_string(),
        })
        .map(|_| ())
    }

    pub fn set_preview_file(&mut self, path: Option<&str>) -> bool {
        self.apply_preview(path).state_changed
    }

    pub fn pump_fs_events(&mut self) -> usize {
        self.process_fs_events()
    }

    pub fn initialize(&mut self, seed: SeedState) -> Result<(), PlaygroundError> {
        self.dispatch(Action::Initialize(Box::new(seed))).map(|_| ())
    }

    /// Parses a seed document and hydrates from it.
    pub fn initialize_json(&mut self, json: &str) -> Result<(), PlaygroundError> {
        let seed = SeedState::from_json(json)?;
        self.initialize(seed)
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.fs.get_file(path).is_some()
    }

    pub fn get_project_for_path(&self, path: &str) -> Option<&Rc<ProjectRecord>> {
        let name = project_name_for_path(self.fs.root_path(), path)?;
        self.state.project_lookup.get(name)
    }

    pub fn focused_file(&self) -> Option<&str> {
        self.state.focused_file()
    }

    pub fn focused_directory(&self) -> Option<&str> {
        self.state.focused_directory()
    }

    fn apply_focus(&mut self, path: &str) -> DispatchResult {
        let outcome = focus::focus_file(&mut self.state, &self.fs, &self.config, path);
        match outcome {
            FocusOutcome::Ignored => return DispatchResult::unchanged(),
            FocusOutcome::Refocused => self.bus.emit_state_change(&self.state),
            FocusOutcome::Resolved => {
                self.bus.emit_state_change(&self.state);
                self.bus.emit_focus_change(path);
            }
        }
        DispatchResult {
            state_changed: outcome.state_changed(),
            focus_changed: outcome.focus_changed(),
            fs_events: 0,
        }
    }

    fn apply_preview(&mut self, path: Option<&str>) -> DispatchResult {
        let file = match path {
            Some(path) => match self.fs.get_file(path).filter(|f| f.is_file()) {
                Some(file) => Some(file),
                None => return DispatchResult::unchanged(),
            },
            None => None,
        };

        self.state.preview_file = file;
        self.state.panes = assign_open_files_to_panes(&self.state, &self.config);
        self.bus.emit_state_change(&self.state);
        DispatchResult::changed()
    }

    fn reload_projects(&mut self) -> Result<(), PlaygroundError> {
        self.state.root_dir = self.fs.read_tree();
        let index =
            projects::load_projects(&self.state.root_dir, &self.fs, &mut self.cache, &self.config)?;
        self.state.projects = index.projects;
        self.state.project_lookup = index.lookup;
        Ok(())
    }

    /// Invalidates the cache for each pending modification, then forwards it.
    fn process_fs_events(&mut self) -> usize {
        let events = self.bridge.drain();
        if events.is_empty() {
            return 0;
        }

        self.refresh_snapshots();
        for event in &events {
            cache_bridge::invalidate(&mut self.cache, event, &self.config);
            self.bus.emit_file_modified(event);
        }
        events.len()
    }

    /// Re-reads every record the state holds so content matches the
    /// filesystem after a write. Records that vanished are dropped.
    fn refresh_snapshots(&mut self) {
        let fs = &self.fs;
        let refresh = |file: &FileRef| fs.get_file(&file.path);
        let refresh_slot = |slot: &Option<FileRef>| slot.as_ref().and_then(refresh);

        self.state.root_dir = fs.read_tree();
        self.state.open_files = self.state.open_files.iter().filter_map(refresh).collect();
        self.state.preview_file = refresh_slot(&self.state.preview_file);
        self.state.demo_preview_file = refresh_slot(&self.state.demo_preview_file);
        self.state.project_preview_file = refresh_slot(&self.state.project_preview_file);
        self.state.component_preview_file = refresh_slot(&self.state.component_preview_file);

        let mut projects = Vec::with_capacity(self.state.projects.len());
        for project in &self.state.projects {
            let Some(root_dir) = refresh(&project.root_dir) else {
                continue;
            };
            projects.push(Rc::new(ProjectRecord {
                name: project.name.clone(),
                description: project.description.clone(),
                root_dir,
                preview_file: project.preview_file.as_ref().and_then(refresh),
            }));
        }
        self.state.project_lookup = projects
            .iter()
            .map(|p| (p.name.clone(), Rc::clone(p)))
            .collect();
        self.state.active_project = self
            .state
            .active_project
            .as_ref()
            .and_then(|p| self.state.project_lookup.get(&p.name))
            .cloned();
        self.state.projects = projects;

        self.state.panes = assign_open_files_to_panes(&self.state, &self.config);
    }

    fn hydrate(&mut self, seed: SeedState) -> Result<(), PlaygroundError> {
        for (path, text) in seed.files() {
            self.fs.write_file(path, text)?;
        }
        self.process_fs_events();
        self.reload_projects()?;

        self.state.active_project = self.state.projects.first().cloned();
        self.state.focused_directory = seed.focused_directory;
        self.state.focused_file = seed.focused_file;
        self.state.clear_focus_outputs();
        for entry in &seed.open_files {
            match self.fs.get_file(&entry.path) {
                Some(file) => self.state.open_files.push(file),
                None => tracing::warn!(path = %entry.path, "seed open file not found"),
            }
        }
        self.state.panes = assign_open_files_to_panes(&self.state, &self.config);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
