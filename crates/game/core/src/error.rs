//! Common error infrastructure for battle-core.
//!
//! Two families of errors exist:
//!
//! - [`CombatantError`]: a combatant definition violates the stat invariants
//!   and must be rejected before it enters a battle.
//! - [`ActionRejection`]: a submitted action or lifecycle request was refused.
//!   Rejections never mutate battle state, and their `Display` output is the
//!   exact message reported back to the submitter.

/// Severity level of an error, used for categorization and logging.
///
/// - **Validation**: invalid input that should be rejected without retry
/// - **StateConflict**: request does not fit the battle's current phase
/// - **Internal**: unexpected state inconsistency, should be investigated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: unknown combatant id, ability index out of range
    Validation,

    /// Valid input arriving at the wrong time.
    ///
    /// Examples: ability on cooldown, battle not active, battle already started
    StateConflict,

    /// Internal error - unexpected state inconsistency.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::StateConflict => "state_conflict",
            Self::Internal => "internal",
        }
    }

    /// Returns true if retrying the same request later may succeed.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::StateConflict)
    }
}

/// Reasons a combatant definition is rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatantError {
    #[error("combatant name must not be empty")]
    EmptyName,

    #[error("combatant '{name}' must start with positive health (got {health})")]
    NonPositiveHealth { name: String, health: i32 },

    #[error("combatant '{name}' has negative attack ({attack})")]
    NegativeAttack { name: String, attack: i32 },

    #[error("combatant '{name}' has negative defense ({defense})")]
    NegativeDefense { name: String, defense: i32 },

    #[error("combatant '{name}' must have positive speed (got {speed})")]
    NonPositiveSpeed { name: String, speed: i32 },

    #[error("combatant '{name}' has {count} abilities, at most {max} allowed")]
    TooManyAbilities {
        name: String,
        count: usize,
        max: usize,
    },

    #[error("both combatants share the id '{0}'")]
    DuplicateId(String),
}

impl CombatantError {
    pub const fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}

/// Reasons an action (or a lifecycle request) was refused.
///
/// The `Display` strings are part of the submit contract and are surfaced to
/// callers verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionRejection {
    #[error("battle not active")]
    BattleNotActive,

    #[error("battle already started")]
    AlreadyStarted,

    #[error("invalid character ID")]
    InvalidCharacter,

    #[error("invalid target ID")]
    InvalidTarget,

    #[error("Invalid ability index.")]
    InvalidAbilityIndex,

    #[error("Ability on cooldown.")]
    OnCooldown,
}

impl ActionRejection {
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidCharacter | Self::InvalidTarget | Self::InvalidAbilityIndex => {
                ErrorSeverity::Validation
            }
            Self::BattleNotActive | Self::AlreadyStarted | Self::OnCooldown => {
                ErrorSeverity::StateConflict
            }
        }
    }

    /// Returns a static identifier for this rejection, useful in structured logs.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BattleNotActive => "battle_not_active",
            Self::AlreadyStarted => "already_started",
            Self::InvalidCharacter => "invalid_character",
            Self::InvalidTarget => "invalid_target",
            Self::InvalidAbilityIndex => "invalid_ability_index",
            Self::OnCooldown => "on_cooldown",
        }
    }
}
