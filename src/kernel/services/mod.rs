//! Services layer (ports + adapters).
//!
//! - `ports`: contracts for the collaborators the core talks to.
//! - `adapters`: in-memory and host implementations of those contracts.
//! - `bus`: typed publish/subscribe for outward notifications.

pub mod adapters;
pub mod bus;
pub mod ports;

pub use bus::{EventBus, SubscriptionId, Topic};
