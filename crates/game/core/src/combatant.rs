//! Combatants: one side of a battle.

use std::fmt;

use crate::ability::Ability;
use crate::combat::damage::{apply_damage, mitigate};
use crate::combat::{AbilityOutcome, resolver};
use crate::config::BattleConfig;
use crate::error::{ActionRejection, CombatantError};
use crate::stats::Stats;
use crate::status::{RoundReport, StatusEffect, process_round};

/// Opaque combatant identifier, unique within a battle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CombatantId(pub String);

impl CombatantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random identifier.
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CombatantId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for CombatantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A combatant with stats, a fixed loadout, and active status effects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub stats: Stats,
    /// Loadout, addressed by index. Never grows or shrinks after creation.
    pub abilities: Vec<Ability>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<StatusEffect>,
}

impl Combatant {
    pub fn new(
        id: impl Into<CombatantId>,
        name: impl Into<String>,
        stats: Stats,
        abilities: Vec<Ability>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stats,
            abilities,
            effects: Vec::new(),
        }
    }

    /// Checks the definition invariants required to enter a battle.
    pub fn validate(&self) -> Result<(), CombatantError> {
        let name = || self.name.clone();
        let Stats {
            health,
            attack,
            defense,
            speed,
        } = self.stats;

        if self.name.is_empty() {
            return Err(CombatantError::EmptyName);
        }
        if health <= 0 {
            return Err(CombatantError::NonPositiveHealth { name: name(), health });
        }
        if attack < 0 {
            return Err(CombatantError::NegativeAttack { name: name(), attack });
        }
        if defense < 0 {
            return Err(CombatantError::NegativeDefense {
                name: name(),
                defense,
            });
        }
        if speed <= 0 {
            return Err(CombatantError::NonPositiveSpeed { name: name(), speed });
        }
        if self.abilities.len() > BattleConfig::MAX_ABILITIES {
            return Err(CombatantError::TooManyAbilities {
                name: name(),
                count: self.abilities.len(),
                max: BattleConfig::MAX_ABILITIES,
            });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub const fn is_defeated(&self) -> bool {
        self.stats.health <= 0
    }

    /// Applies combat damage reduced by defense. Returns the health removed.
    pub fn take_hit(&mut self, raw_damage: i32) -> i32 {
        let before = self.stats.health;
        self.stats.health = apply_damage(before, mitigate(raw_damage, self.stats.defense));
        before - self.stats.health
    }

    /// Uses the ability at `index` against `target`.
    pub fn use_ability(
        &mut self,
        index: usize,
        target: &mut Combatant,
    ) -> Result<AbilityOutcome, ActionRejection> {
        resolver::use_ability(self, index, target)
    }

    /// Runs one round of status effects, then ticks every cooldown down.
    pub fn process_round(&mut self) -> RoundReport {
        let report = process_round(&mut self.stats, &mut self.effects);
        for ability in &mut self.abilities {
            ability.reduce_cooldown();
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusKind;

    fn valid() -> Combatant {
        Combatant::new(
            "hero",
            "Hero",
            Stats::new(100, 10, 5, 10),
            vec![Ability::new("Basic Attack", 10, 0)],
        )
    }

    #[test]
    fn validate_accepts_sane_definition() {
        assert!(valid().is_valid());

        let mut zero_attack = valid();
        zero_attack.stats.attack = 0;
        zero_attack.stats.defense = 0;
        assert!(zero_attack.is_valid());
    }

    #[test]
    fn validate_rejects_each_broken_invariant() {
        let cases: Vec<(fn(&mut Combatant), &str)> = vec![
            (|c: &mut Combatant| c.name.clear(), "empty name"),
            (|c: &mut Combatant| c.stats.health = 0, "zero health"),
            (|c: &mut Combatant| c.stats.health = -5, "negative health"),
            (|c: &mut Combatant| c.stats.attack = -1, "negative attack"),
            (|c: &mut Combatant| c.stats.defense = -1, "negative defense"),
            (|c: &mut Combatant| c.stats.speed = 0, "zero speed"),
            (
                |c: &mut Combatant| {
                    c.abilities = vec![Ability::new("Jab", 1, 0); BattleConfig::MAX_ABILITIES + 1]
                },
                "oversized loadout",
            ),
        ];

        for (breakage, label) in cases {
            let mut combatant = valid();
            breakage(&mut combatant);
            assert!(combatant.validate().is_err(), "{label} should be invalid");
        }
    }

    #[test]
    fn take_hit_clamps_to_zero() {
        let mut hero = valid();
        assert_eq!(hero.take_hit(20), 15);
        assert_eq!(hero.stats.health, 85);

        assert_eq!(hero.take_hit(3), 0);
        assert_eq!(hero.stats.health, 85);

        assert_eq!(hero.take_hit(500), 85);
        assert_eq!(hero.stats.health, 0);
        assert!(hero.is_defeated());
    }

    #[test]
    fn process_round_ages_effects_and_cooldowns_together() {
        let mut hero = valid();
        hero.abilities.push(Ability::new("Power Strike", 20, 2));
        hero.abilities[1].trigger();
        hero.effects.push(StatusEffect::new(StatusKind::Enraged, 2, 20));

        let report = hero.process_round();
        assert_eq!(report.ticks.len(), 1);
        assert_eq!(hero.stats.attack, 12);
        assert_eq!(hero.abilities[1].cooldown, 1);

        hero.process_round();
        assert!(hero.abilities[1].is_ready());
        assert!(hero.effects.is_empty());
    }
}
