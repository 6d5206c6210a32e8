//! Deterministic battle rules shared by the runtime and content loaders.
//!
//! `battle-core` defines combatants, abilities, status effects and the battle
//! state machine as pure, synchronous APIs. All battle mutation flows through
//! [`BattleState::process_action`]; the runtime serializes access to it and
//! supporting crates depend on the types re-exported here.
pub mod ability;
pub mod battle;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod error;
pub mod stats;
pub mod status;

pub use ability::Ability;
pub use battle::{
    ActionOutcome, BattleAction, BattleId, BattlePhase, BattleSnapshot, BattleState, Knockout,
    TurnReport,
};
pub use combat::{AbilityOutcome, apply_damage, calculate_damage, use_ability};
pub use combatant::{Combatant, CombatantId};
pub use config::BattleConfig;
pub use error::{ActionRejection, CombatantError, ErrorSeverity};
pub use stats::{Stat, Stats};
pub use status::{EffectTick, RoundReport, StatusEffect, StatusKind};
