//! Runtime orchestration for concurrent battles.
//!
//! This crate wires battle state from `battle-core` into worker tasks: every
//! started battle gets one worker that owns its state and resolves queued
//! actions strictly one at a time. Consumers create battles through a
//! [`BattleRegistry`] and interact with them through [`Battle`] handles.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the types downstream clients interact with
//! - [`config`] loads runtime tunables
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod config;

mod workers;

pub use api::{
    ActionProvider, Battle, BattleRegistry, FixedProvider, GreedyProvider, Result, RuntimeError,
};
pub use config::RuntimeConfig;
