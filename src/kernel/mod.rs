//! Headless playground core (state/action/store).

pub mod action;
pub mod cache_bridge;
pub mod error;
pub mod focus;
pub mod panes;
pub mod projects;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use cache_bridge::{CacheBridge, Invalidation};
pub use error::PlaygroundError;
pub use focus::FocusOutcome;
pub use projects::ProjectIndex;
pub use seed::{SeedFileRef, SeedState};
pub use state::{AppState, PaneSlot, Panes};
pub use store::{DispatchResult, Store};

#[cfg(test)]
#[path = "../../tests/unit/kernel/fixtures.rs"]
pub(crate) mod fixtures;
