//! Stock loadouts and combatants.
//!
//! The first roster slot defaults to the warrior loadout and the second to the
//! mage loadout whenever a definition leaves its abilities unspecified.

use battle_core::{Ability, Combatant, CombatantId, StatusEffect, StatusKind, Stats};

/// Basic Attack plus Power Strike, which enrages the target.
pub fn warrior_loadout() -> Vec<Ability> {
    vec![
        Ability::new("Basic Attack", 10, 0),
        Ability::new("Power Strike", 20, 2)
            .with_effect(StatusEffect::new(StatusKind::Enraged, 2, 20)),
    ]
}

/// Basic Attack plus Fireball, which sets the target burning.
pub fn mage_loadout() -> Vec<Ability> {
    vec![
        Ability::new("Basic Attack", 8, 0),
        Ability::new("Fireball", 15, 2).with_effect(StatusEffect::new(StatusKind::Burning, 3, 5)),
    ]
}

/// Loadout for a roster slot: warrior for slot 0, mage otherwise.
pub fn preset_loadout(slot: usize) -> Vec<Ability> {
    match slot {
        0 => warrior_loadout(),
        _ => mage_loadout(),
    }
}

pub fn warrior(name: impl Into<String>) -> Combatant {
    Combatant::new(
        CombatantId::random(),
        name,
        Stats::new(100, 15, 10, 8),
        warrior_loadout(),
    )
}

pub fn mage(name: impl Into<String>) -> Combatant {
    Combatant::new(
        CombatantId::random(),
        name,
        Stats::new(80, 20, 5, 12),
        mage_loadout(),
    )
}

/// Warrior versus mage, with fresh ids.
pub fn default_roster() -> [Combatant; 2] {
    [warrior("Warrior"), mage("Mage")]
}
