//! Data-driven combatant content and loaders.
//!
//! This crate houses the stock loadouts and the RON roster loader:
//! - Preset loadouts and combatants (always available)
//! - Two-combatant rosters (data-driven via RON, behind `loaders`)
//!
//! Effect kinds are written by name in content files and parsed into
//! [`battle_core::StatusKind`] at load time, so malformed names never reach a
//! battle.

pub mod presets;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use presets::{default_roster, mage, mage_loadout, preset_loadout, warrior, warrior_loadout};

#[cfg(feature = "loaders")]
pub use loaders::{AbilitySpec, CombatantSpec, EffectSpec, RosterLoader, RosterSpec};
