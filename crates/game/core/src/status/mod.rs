//! Status effects attached to combatants.
//!
//! An ability may carry a [`StatusEffect`] template. Each use appends an
//! independent copy to the target, so effects of the same kind stack rather
//! than refresh. Every round the [`engine`] applies each instance once and
//! ages it by one.

pub mod engine;

pub use engine::{EffectTick, RoundReport, process_round};

/// Kinds of status effects.
///
/// Text names use the upper-case spelling found in content files. `POISON`
/// is accepted as an alias of `POISONED`.
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
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum StatusKind {
    /// Speed grows by potency percent each round.
    Accelerate,

    /// Damage over time that shrinks as the remaining duration runs down.
    Burning,

    /// Damage over time that grows as the remaining duration runs down.
    #[strum(to_string = "POISONED", serialize = "POISON")]
    #[cfg_attr(feature = "serde", serde(alias = "POISON"))]
    Poisoned,

    /// Attack grows by potency percent each round.
    Enraged,

    /// Health grows by a tenth of potency percent each round, uncapped.
    Regenerating,
}

impl StatusKind {
    /// Returns true for effects that hurt the combatant carrying them.
    pub const fn is_harmful(&self) -> bool {
        matches!(self, Self::Burning | Self::Poisoned)
    }
}

/// A status effect instance (or the template an ability copies from).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusKind,
    /// Rounds remaining, including the one about to be processed.
    pub duration: i32,
    /// Strength as an integer percentage.
    pub potency: i32,
}

impl StatusEffect {
    pub const fn new(kind: StatusKind, duration: i32, potency: i32) -> Self {
        Self {
            kind,
            duration,
            potency,
        }
    }

    pub const fn is_active(&self) -> bool {
        self.duration > 0
    }
}
