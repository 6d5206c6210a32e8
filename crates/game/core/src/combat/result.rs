//! Combat result types.

use crate::status::StatusEffect;

/// Attacker-side half of an ability use.
///
/// Produced once the ability passed its checks and went on cooldown; landing
/// it on the target cannot fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Strike {
    pub attacker: String,
    pub ability: String,
    /// Ability damage plus the attacker's attack, before defense.
    pub damage: i32,
    pub effect: Option<StatusEffect>,
}

/// Result of a successful ability use.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityOutcome {
    pub ability: String,
    /// Computed damage before the target's defense.
    pub damage: i32,
    /// Health actually removed from the target.
    pub dealt: i32,
    /// Effect instance attached to the target, if the ability carries one.
    pub effect: Option<StatusEffect>,
    pub message: String,
}
