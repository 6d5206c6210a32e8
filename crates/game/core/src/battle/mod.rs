//! Battle state machine.
//!
//! A [`BattleState`] owns both combatants and moves through
//! `Pending → Active → Complete`. It is synchronous and single-owner: the
//! runtime keeps exactly one worker per battle that calls
//! [`BattleState::process_action`] for each queued action, which gives every
//! battle a strict total order of resolution without any locking here.

mod action;
mod snapshot;
mod state;

pub use action::{ActionOutcome, BattleAction, Knockout, TurnReport};
pub use snapshot::BattleSnapshot;
pub use state::{BattleId, BattlePhase, BattleState};
