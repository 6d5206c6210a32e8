//! Worker tasks that back each battle.
//!
//! One battle worker per started battle owns all mutation of that battle.

mod battle;

pub use battle::{BattleWorker, Command};
