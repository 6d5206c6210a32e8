//! Roster loader.
//!
//! Loads the two combatants of a battle from a RON file. Effect kinds are
//! given by name (`"BURNING"`, `"POISON"`, ...) and abilities may be omitted to
//! fall back to the slot's preset loadout.
//!
//! ```ron
//! (
//!     first: (
//!         name: "Warrior",
//!         stats: (health: 100, attack: 15, defense: 10, speed: 8),
//!     ),
//!     second: (
//!         name: "Mage",
//!         stats: (health: 80, attack: 20, defense: 5, speed: 12),
//!         abilities: Some([
//!             (name: "Fireball", damage: 15, cooldown: 2,
//!              effect: Some((kind: "BURNING", duration: 3, potency: 5))),
//!         ]),
//!     ),
//! )
//! ```

use std::path::Path;

use battle_core::{Ability, Combatant, CombatantId, StatusEffect, StatusKind, Stats};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};
use crate::presets::preset_loadout;

/// Raw roster file contents.
#[derive(Clone, Debug, Deserialize)]
pub struct RosterSpec {
    pub first: CombatantSpec,
    pub second: CombatantSpec,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CombatantSpec {
    pub name: String,
    pub stats: Stats,
    /// `None` selects the slot's preset loadout.
    #[serde(default)]
    pub abilities: Option<Vec<AbilitySpec>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AbilitySpec {
    pub name: String,
    pub damage: i32,
    #[serde(default)]
    pub cooldown: u32,
    #[serde(default)]
    pub effect: Option<EffectSpec>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EffectSpec {
    pub kind: String,
    pub duration: i32,
    pub potency: i32,
}

impl EffectSpec {
    fn resolve(&self, ability: &str) -> LoadResult<StatusEffect> {
        let kind: StatusKind = self.kind.parse().map_err(|_| {
            anyhow::anyhow!(
                "Unknown status effect '{}' on ability '{}'",
                self.kind,
                ability
            )
        })?;
        Ok(StatusEffect::new(kind, self.duration, self.potency))
    }
}

impl AbilitySpec {
    fn resolve(&self) -> LoadResult<Ability> {
        let mut ability = Ability::new(&self.name, self.damage, self.cooldown);
        if let Some(effect) = &self.effect {
            ability = ability.with_effect(effect.resolve(&self.name)?);
        }
        Ok(ability)
    }
}

impl CombatantSpec {
    /// Builds a validated combatant with a fresh id.
    pub fn build(&self, slot: usize) -> LoadResult<Combatant> {
        let abilities = match &self.abilities {
            Some(specs) => specs
                .iter()
                .map(AbilitySpec::resolve)
                .collect::<LoadResult<Vec<_>>>()?,
            None => preset_loadout(slot),
        };

        let combatant = Combatant::new(CombatantId::random(), &self.name, self.stats, abilities);
        combatant
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid combatant in slot {}: {}", slot, e))?;
        Ok(combatant)
    }
}

impl RosterSpec {
    pub fn build(&self) -> LoadResult<[Combatant; 2]> {
        Ok([self.first.build(0)?, self.second.build(1)?])
    }
}

/// Loader for two-combatant rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load and build a roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<[Combatant; 2]> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Build a roster from RON text.
    pub fn parse(content: &str) -> LoadResult<[Combatant; 2]> {
        let spec: RosterSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;
        spec.build()
    }
}
