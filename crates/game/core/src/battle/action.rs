//! Battle actions and what processing them produced.

use crate::combat::AbilityOutcome;
use crate::combatant::CombatantId;
use crate::error::ActionRejection;
use crate::status::RoundReport;

use super::snapshot::BattleSnapshot;

/// One ability use requested by a combatant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleAction {
    pub actor: CombatantId,
    pub ability_index: usize,
    pub target: CombatantId,
}

impl BattleAction {
    pub fn new(
        actor: impl Into<CombatantId>,
        ability_index: usize,
        target: impl Into<CombatantId>,
    ) -> Self {
        Self {
            actor: actor.into(),
            ability_index,
            target: target.into(),
        }
    }
}

/// A combatant reaching zero health as a result of an action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knockout {
    pub winner: CombatantId,
    pub loser: CombatantId,
    /// Both combatants were at zero health. The winner then follows check
    /// order (first combatant checked first).
    pub simultaneous: bool,
}

/// Everything processing one action did to a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub action: BattleAction,
    pub outcome: Result<AbilityOutcome, ActionRejection>,
    pub knockout: Option<Knockout>,
    /// Status passes that followed the action, in combatant order. `None`
    /// when the battle was not active afterwards.
    pub effects: Option<[RoundReport; 2]>,
    /// Round counter after processing. Advances once per action that leaves
    /// the battle active, so the knockout action keeps the round it landed in.
    pub round: u32,
}

impl TurnReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn message(&self) -> String {
        match &self.outcome {
            Ok(outcome) => outcome.message.clone(),
            Err(rejection) => rejection.to_string(),
        }
    }
}

/// Result handed back to the caller that submitted an action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub success: bool,
    pub message: String,
    pub battle: BattleSnapshot,
}

impl ActionOutcome {
    pub fn from_report(report: &TurnReport, battle: BattleSnapshot) -> Self {
        Self {
            success: report.is_success(),
            message: report.message(),
            battle,
        }
    }

    pub fn rejected(rejection: ActionRejection, battle: BattleSnapshot) -> Self {
        Self {
            success: false,
            message: rejection.to_string(),
            battle,
        }
    }
}
