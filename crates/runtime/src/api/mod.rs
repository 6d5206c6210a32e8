//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! workers can stay focused on resolving actions.

pub mod battle;
pub mod errors;
pub mod providers;
pub mod registry;

pub use battle::Battle;
pub use errors::{Result, RuntimeError};
pub use providers::{ActionProvider, FixedProvider, GreedyProvider};
pub use registry::BattleRegistry;
