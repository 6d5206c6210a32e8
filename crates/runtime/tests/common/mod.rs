#![allow(dead_code)]

use std::time::Duration;

use battle_core::{Ability, Combatant, Stats};
use battle_runtime::RuntimeConfig;

pub fn config() -> RuntimeConfig {
    RuntimeConfig::default().with_poll_interval(Duration::from_millis(10))
}

/// Sturdy combatant with a zero-cooldown hit and a cooldown-2 special.
pub fn fighter(id: &str, health: i32) -> Combatant {
    Combatant::new(
        id,
        id.to_uppercase(),
        Stats::new(health, 10, 5, 10),
        vec![Ability::new("Basic Attack", 10, 0), Ability::new("Special", 20, 2)],
    )
}

/// Health 10, defense 0.
pub fn frail(id: &str) -> Combatant {
    Combatant::new(
        id,
        "Frail",
        Stats::new(10, 0, 0, 1),
        vec![Ability::new("Poke", 1, 0)],
    )
}

/// Attack 50 with a 20 damage ability.
pub fn brute(id: &str) -> Combatant {
    Combatant::new(
        id,
        "Brute",
        Stats::new(100, 50, 0, 1),
        vec![Ability::new("Smash", 20, 0)],
    )
}
