//! Abilities: the moves in a combatant's loadout.
//!
//! Using an ability puts it on cooldown for `cooldown_max` rounds. Each status
//! processing pass brings the cooldown one step closer to zero, and only a
//! zero cooldown allows another use.

use crate::status::StatusEffect;

/// A usable move with damage, an optional effect template, and a cooldown.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub name: String,
    /// Base damage, added to the attacker's attack stat.
    pub damage: i32,
    /// Template copied onto the target on every successful use.
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<StatusEffect>,
    pub cooldown_max: u32,
    /// Rounds left before the ability can be used again.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown: u32,
}

impl Ability {
    pub fn new(name: impl Into<String>, damage: i32, cooldown_max: u32) -> Self {
        Self {
            name: name.into(),
            damage,
            effect: None,
            cooldown_max,
            cooldown: 0,
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: StatusEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub const fn is_ready(&self) -> bool {
        self.cooldown == 0
    }

    /// Starts the cooldown. Has no effect unless the ability is ready.
    pub fn trigger(&mut self) {
        if self.is_ready() {
            self.cooldown = self.cooldown_max;
        }
    }

    pub fn reduce_cooldown(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }
}
