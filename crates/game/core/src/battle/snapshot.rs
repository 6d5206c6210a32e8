//! Read-only battle views.

use crate::combatant::{Combatant, CombatantId};

use super::state::{BattleId, BattlePhase};

/// Immutable copy of a battle's public state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSnapshot {
    pub id: BattleId,
    pub combatants: [Combatant; 2],
    pub phase: BattlePhase,
    pub winner: Option<CombatantId>,
    /// Starts at 1 and advances after every processed action, rejected ones
    /// included, except the one that completes the battle.
    pub round: u32,
}

impl BattleSnapshot {
    pub fn combatant(&self, id: &CombatantId) -> Option<&Combatant> {
        self.combatants.iter().find(|c| &c.id == id)
    }

    /// The other side of the battle from `id`.
    pub fn opponent_of(&self, id: &CombatantId) -> Option<&Combatant> {
        let [first, second] = &self.combatants;
        if &first.id == id {
            Some(second)
        } else if &second.id == id {
            Some(first)
        } else {
            None
        }
    }

    pub fn winner(&self) -> Option<&Combatant> {
        self.winner.as_ref().and_then(|id| self.combatant(id))
    }

    pub fn is_complete(&self) -> bool {
        self.phase == BattlePhase::Complete
    }
}
