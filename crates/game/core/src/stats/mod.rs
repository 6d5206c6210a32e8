//! Combatant stat block.
//!
//! Four integer stats describe a combatant. Status effects rescale them by a
//! potency percentage each round; all arithmetic truncates toward zero and is
//! carried out in 64-bit before being clamped back into `i32`.

use crate::config::BattleConfig;

/// Selector for one of the four combatant stats.
///
/// Textual names ("health", "attack", ...) parse case-insensitively, so a stat
/// arriving from a content file is rejected at the boundary instead of reaching
/// the scaling code.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Stat {
    Health,
    Attack,
    Defense,
    Speed,
}

/// Current stat values of a combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

impl Stats {
    pub const fn new(health: i32, attack: i32, defense: i32, speed: i32) -> Self {
        Self {
            health,
            attack,
            defense,
            speed,
        }
    }

    pub const fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Health => self.health,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::Speed => self.speed,
        }
    }

    pub fn set(&mut self, stat: Stat, value: i32) {
        match stat {
            Stat::Health => self.health = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::Speed => self.speed = value,
        }
    }

    /// Scales a stat by a potency fraction and then divides the result.
    ///
    /// ```text
    /// (value + value * potency / scalar) / divisor
    /// ```
    ///
    /// A zero `scalar` or `divisor` yields 0.
    pub fn scaling_value(&self, stat: Stat, scalar: i32, potency: i32, divisor: i32) -> i32 {
        let value = i64::from(self.get(stat));
        let Some(bonus) = (value * i64::from(potency)).checked_div(i64::from(scalar)) else {
            return 0;
        };
        (value + bonus)
            .checked_div(i64::from(divisor))
            .map_or(0, clamp_to_i32)
    }

    /// Compounds a stat by `potency` percent of its current value.
    ///
    /// Returns the previous value.
    pub fn amplify(&mut self, stat: Stat, potency: i32) -> i32 {
        let before = self.get(stat);
        let after = self.scaling_value(stat, BattleConfig::PERCENT, potency, 1);
        self.set(stat, after);
        before
    }
}

/// `potency` percent of `value`, truncated toward zero.
pub fn percent_of(value: i32, potency: i64) -> i64 {
    i64::from(value) * potency / i64::from(BattleConfig::PERCENT)
}

pub(crate) fn clamp_to_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
