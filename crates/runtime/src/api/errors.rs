//! Unified error types surfaced by the runtime API.
//!
//! Action-level failures (cooldowns, bad ids, inactive battles) are not errors
//! here: they come back as unsuccessful [`battle_core::ActionOutcome`]s. This
//! type covers battle creation, lookup, and worker coordination.
use thiserror::Error;
use tokio::sync::{oneshot, watch};

use battle_core::{BattleId, CombatantError, ErrorSeverity};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid combatant definition: {0}")]
    InvalidCombatant(#[source] CombatantError),

    #[error("both combatants share the id {0:?}")]
    DuplicateCombatantId(String),

    #[error("battle {0} not found")]
    BattleNotFound(BattleId),

    #[error("battle {0} already started")]
    AlreadyStarted(BattleId),

    #[error("battle worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("battle snapshot channel closed before completion")]
    SnapshotChannelClosed(#[source] watch::error::RecvError),

    #[error("battle worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("battle registry lock was poisoned")]
    LockPoisoned,
}

impl From<CombatantError> for RuntimeError {
    fn from(error: CombatantError) -> Self {
        match error {
            CombatantError::DuplicateId(id) => Self::DuplicateCombatantId(id),
            other => Self::InvalidCombatant(other),
        }
    }
}

impl RuntimeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidCombatant(_) | Self::DuplicateCombatantId(_) | Self::BattleNotFound(_) => {
                ErrorSeverity::Validation
            }
            Self::AlreadyStarted(_) => ErrorSeverity::StateConflict,
            Self::ReplyChannelClosed(_)
            | Self::SnapshotChannelClosed(_)
            | Self::WorkerJoin(_)
            | Self::LockPoisoned => ErrorSeverity::Internal,
        }
    }
}
