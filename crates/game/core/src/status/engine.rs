//! Per-round status effect processing.
//!
//! # Formulas
//!
//! All values are read from the combatant's *current* stats, so two effects of
//! the same kind compound against each other within one round in list order.
//!
//! ```text
//! ACCELERATE    speed  += speed  * potency / 100
//! ENRAGED       attack += attack * potency / 100
//! BURNING       damage  = health * (potency * remaining) / 100 / 10
//! POISONED      damage  = health * potency / 100 / remaining
//! REGENERATING  health += health * potency / 100 / 10
//! ```
//!
//! Status damage goes through [`apply_damage`] directly: defense does not
//! mitigate it.

use crate::combat::damage::apply_damage;
use crate::config::BattleConfig;
use crate::stats::{Stat, Stats, clamp_to_i32, percent_of};

use super::{StatusEffect, StatusKind};

/// What a single effect instance did during one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectTick {
    pub kind: StatusKind,
    pub stat: Stat,
    pub before: i32,
    pub after: i32,
    /// Duration left after this round's decrement.
    pub remaining: i32,
}

impl EffectTick {
    pub const fn expired(&self) -> bool {
        self.remaining <= 0
    }

    /// Signed change to the affected stat.
    pub const fn delta(&self) -> i32 {
        self.after.saturating_sub(self.before)
    }
}

/// Outcome of one processing pass over a combatant's effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    pub ticks: Vec<EffectTick>,
    /// Instances dropped without being applied because their duration was
    /// already non-positive.
    pub discarded: usize,
}

impl RoundReport {
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty() && self.discarded == 0
    }
}

/// Applies one round of every effect in list order, then ages and prunes.
pub fn process_round(stats: &mut Stats, effects: &mut Vec<StatusEffect>) -> RoundReport {
    let mut report = RoundReport {
        ticks: Vec::with_capacity(effects.len()),
        discarded: 0,
    };

    effects.retain_mut(|effect| {
        if !effect.is_active() {
            report.discarded += 1;
            return false;
        }

        let (stat, before) = apply_effect(stats, effect);
        effect.duration -= 1;

        report.ticks.push(EffectTick {
            kind: effect.kind,
            stat,
            before,
            after: stats.get(stat),
            remaining: effect.duration,
        });

        effect.is_active()
    });

    report
}

/// Applies `effect` once and returns the affected stat with its prior value.
fn apply_effect(stats: &mut Stats, effect: &StatusEffect) -> (Stat, i32) {
    let potency = i64::from(effect.potency);
    let remaining = i64::from(effect.duration);
    let tick_divisor = i64::from(BattleConfig::TICK_DIVISOR);

    match effect.kind {
        StatusKind::Accelerate => (Stat::Speed, stats.amplify(Stat::Speed, effect.potency)),
        StatusKind::Enraged => (Stat::Attack, stats.amplify(Stat::Attack, effect.potency)),
        StatusKind::Burning => {
            let before = stats.health;
            let damage = percent_of(before, potency * remaining) / tick_divisor;
            stats.health = apply_damage(before, clamp_to_i32(damage));
            (Stat::Health, before)
        }
        StatusKind::Poisoned => {
            let before = stats.health;
            let damage = percent_of(before, potency) / remaining;
            stats.health = apply_damage(before, clamp_to_i32(damage));
            (Stat::Health, before)
        }
        StatusKind::Regenerating => {
            let before = stats.health;
            let heal = percent_of(before, potency) / tick_divisor;
            stats.health = clamp_to_i32(i64::from(before) + heal);
            (Stat::Health, before)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> Stats {
        Stats::new(100, 10, 10, 10)
    }

    /// Runs `rounds` passes over a single effect and records `stat` after each.
    fn run(effect: StatusEffect, stat: Stat, rounds: usize) -> (Vec<i32>, Vec<StatusEffect>) {
        let mut stats = stats();
        let mut effects = vec![effect];
        let values = (0..rounds)
            .map(|_| {
                process_round(&mut stats, &mut effects);
                stats.get(stat)
            })
            .collect();
        (values, effects)
    }

    #[test]
    fn accelerate_compounds_speed() {
        let (values, left) = run(
            StatusEffect::new(StatusKind::Accelerate, 3, 10),
            Stat::Speed,
            3,
        );
        assert_eq!(values, vec![11, 12, 13]);
        assert!(left.is_empty());
    }

    #[test]
    fn enraged_compounds_attack_then_expires() {
        let (values, left) = run(StatusEffect::new(StatusKind::Enraged, 3, 20), Stat::Attack, 3);
        assert_eq!(values, vec![12, 14, 16]);
        assert!(left.is_empty());
    }

    #[test]
    fn burning_front_loads_and_ignores_defense() {
        // 100 * (5 * 3) / 1000 = 1, then 99 * 10 / 1000 = 0, then 99 * 5 / 1000 = 0
        let (values, left) = run(StatusEffect::new(StatusKind::Burning, 3, 5), Stat::Health, 3);
        assert_eq!(values, vec![99, 99, 99]);
        assert!(left.is_empty());
    }

    #[test]
    fn burning_first_tick_scales_with_duration() {
        let mut stats = Stats::new(200, 0, 50, 1);
        let mut effects = vec![StatusEffect::new(StatusKind::Burning, 4, 10)];
        let report = process_round(&mut stats, &mut effects);

        // 200 * 40 / 1000 = 8, defense 50 does not absorb it
        assert_eq!(stats.health, 192);
        assert_eq!(report.ticks[0].delta(), -8);
        assert_eq!(effects[0].duration, 3);
    }

    #[test]
    fn poison_back_loads_damage() {
        // 100*15/100/3 = 5, 95*15/100/2 = 7, 88*15/100/1 = 13
        let (values, left) = run(StatusEffect::new(StatusKind::Poisoned, 3, 15), Stat::Health, 3);
        assert_eq!(values, vec![95, 88, 75]);
        assert!(left.is_empty());
    }

    #[test]
    fn regeneration_is_uncapped() {
        let (values, _) = run(
            StatusEffect::new(StatusKind::Regenerating, 3, 10),
            Stat::Health,
            3,
        );
        assert_eq!(values, vec![101, 102, 103]);
    }

    #[test]
    fn status_damage_never_drops_health_below_zero() {
        let mut stats = Stats::new(5, 0, 0, 1);
        let mut effects = vec![StatusEffect::new(StatusKind::Burning, 10, 200)];
        process_round(&mut stats, &mut effects);
        assert_eq!(stats.health, 0);
    }

    #[test]
    fn multiple_effects_apply_in_list_order() {
        let mut stats = stats();
        let mut effects = vec![
            StatusEffect::new(StatusKind::Enraged, 2, 20),
            StatusEffect::new(StatusKind::Accelerate, 2, 10),
        ];

        process_round(&mut stats, &mut effects);
        assert_eq!((stats.attack, stats.speed), (12, 11));

        process_round(&mut stats, &mut effects);
        assert_eq!((stats.attack, stats.speed), (14, 12));
        assert!(effects.is_empty());
    }

    #[test]
    fn duplicate_effects_compound_within_a_round() {
        let mut stats = stats();
        let mut effects = vec![
            StatusEffect::new(StatusKind::Enraged, 1, 50),
            StatusEffect::new(StatusKind::Enraged, 1, 50),
        ];

        let report = process_round(&mut stats, &mut effects);

        // 10 -> 15 -> 22, the second instance sees the first one's result
        assert_eq!(stats.attack, 22);
        assert_eq!(report.ticks[1].before, 15);
    }

    #[test]
    fn single_round_effect_is_removed_and_stops_applying() {
        let mut stats = stats();
        let mut effects = vec![StatusEffect::new(StatusKind::Enraged, 1, 20)];

        let report = process_round(&mut stats, &mut effects);
        assert_eq!(stats.attack, 12);
        assert!(effects.is_empty());
        assert!(report.ticks[0].expired());

        let report = process_round(&mut stats, &mut effects);
        assert_eq!(stats.attack, 12);
        assert!(report.is_empty());
    }

    #[test]
    fn non_positive_durations_are_discarded_unapplied() {
        let mut stats = stats();
        let mut effects = vec![
            StatusEffect::new(StatusKind::Enraged, 0, 50),
            StatusEffect::new(StatusKind::Accelerate, 2, 10),
        ];

        let report = process_round(&mut stats, &mut effects);

        assert_eq!(stats.attack, 10);
        assert_eq!(stats.speed, 11);
        assert_eq!(report.discarded, 1);
        assert_eq!(effects, vec![StatusEffect::new(StatusKind::Accelerate, 1, 10)]);
    }
}
