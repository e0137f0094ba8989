//! playground - runtime state of an in-browser code playground
//!
//! Module layout:
//! - models: plain data (FileRecord, PreviewView, ProjectRecord, slash paths)
//! - kernel: headless core (Store, focus resolution, pane assignment, cache bridge)
//! - kernel::services: collaborator contracts (ports) and reference adapters

pub mod kernel;
pub mod models;
