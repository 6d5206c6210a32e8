//! Battle lifecycle and action resolution.

use std::fmt;
use std::str::FromStr;

use crate::combat::{AbilityOutcome, use_ability, use_ability_on_self};
use crate::combatant::{Combatant, CombatantId};
use crate::config::BattleConfig;
use crate::error::{ActionRejection, CombatantError};
use crate::status::RoundReport;

use super::action::{BattleAction, Knockout, TurnReport};
use super::snapshot::BattleSnapshot;

/// Unique battle identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BattleId(pub uuid::Uuid);

impl BattleId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for BattleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BattleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for BattleId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}

/// Lifecycle phase of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum BattlePhase {
    /// Created, waiting for an explicit start.
    Pending,
    /// Accepting actions.
    Active,
    /// A combatant was knocked out. Terminal.
    Complete,
}

/// Authoritative state of one battle between two combatants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleState {
    id: BattleId,
    combatants: [Combatant; 2],
    phase: BattlePhase,
    winner: Option<CombatantId>,
    round: u32,
}

impl BattleState {
    /// Creates a pending battle with a fresh id.
    ///
    /// Both definitions are validated up front; an invalid combatant never
    /// enters a battle.
    pub fn new(first: Combatant, second: Combatant) -> Result<Self, CombatantError> {
        Self::with_id(BattleId::new(), first, second)
    }

    pub fn with_id(
        id: BattleId,
        first: Combatant,
        second: Combatant,
    ) -> Result<Self, CombatantError> {
        first.validate()?;
        second.validate()?;
        if first.id == second.id {
            return Err(CombatantError::DuplicateId(first.id.0));
        }

        Ok(Self {
            id,
            combatants: [first, second],
            phase: BattlePhase::Pending,
            winner: None,
            round: BattleConfig::INITIAL_ROUND,
        })
    }

    pub fn id(&self) -> BattleId {
        self.id
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn combatants(&self) -> &[Combatant; 2] {
        &self.combatants
    }

    pub fn combatant(&self, id: &CombatantId) -> Option<&Combatant> {
        self.combatants.iter().find(|c| &c.id == id)
    }

    pub fn winner(&self) -> Option<&Combatant> {
        self.winner.as_ref().and_then(|id| self.combatant(id))
    }

    pub fn is_active(&self) -> bool {
        self.phase == BattlePhase::Active
    }

    pub fn is_complete(&self) -> bool {
        self.phase == BattlePhase::Complete
    }

    /// Moves a pending battle to active.
    pub fn start(&mut self) -> Result<(), ActionRejection> {
        if self.phase != BattlePhase::Pending {
            return Err(ActionRejection::AlreadyStarted);
        }
        self.phase = BattlePhase::Active;
        Ok(())
    }

    /// Resolves one action and, while the battle stays active, runs the
    /// round of status effects that follows it.
    pub fn process_action(&mut self, action: BattleAction) -> TurnReport {
        let (outcome, knockout) = match self.resolve(&action) {
            Ok((outcome, knockout)) => (Ok(outcome), knockout),
            Err(rejection) => (Err(rejection), None),
        };
        let effects = self.end_round();

        TurnReport {
            action,
            outcome,
            knockout,
            effects,
            round: self.round,
        }
    }

    /// Resolves the ability use itself and checks for a knockout.
    ///
    /// Does not run the status pass; see [`Self::end_round`].
    pub fn resolve(
        &mut self,
        action: &BattleAction,
    ) -> Result<(AbilityOutcome, Option<Knockout>), ActionRejection> {
        if !self.is_active() {
            return Err(ActionRejection::BattleNotActive);
        }

        let attacker = self
            .position(&action.actor)
            .ok_or(ActionRejection::InvalidCharacter)?;
        let target = self
            .position(&action.target)
            .ok_or(ActionRejection::InvalidTarget)?;

        let outcome = if attacker == target {
            use_ability_on_self(&mut self.combatants[attacker], action.ability_index)?
        } else {
            let [first, second] = &mut self.combatants;
            let (attacker, target) = if attacker == 0 {
                (first, second)
            } else {
                (second, first)
            };
            use_ability(attacker, action.ability_index, target)?
        };

        Ok((outcome, self.check_knockout()))
    }

    /// Runs one round of status effects and cooldowns on both combatants.
    ///
    /// Returns `None` without touching anything unless the battle is active.
    pub fn end_round(&mut self) -> Option<[RoundReport; 2]> {
        if !self.is_active() {
            return None;
        }

        let [first, second] = &mut self.combatants;
        let reports = [first.process_round(), second.process_round()];
        self.round += 1;
        Some(reports)
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            id: self.id,
            combatants: self.combatants.clone(),
            phase: self.phase,
            winner: self.winner.clone(),
            round: self.round,
        }
    }

    fn position(&self, id: &CombatantId) -> Option<usize> {
        self.combatants.iter().position(|c| &c.id == id)
    }

    fn check_knockout(&mut self) -> Option<Knockout> {
        let [first, second] = &self.combatants;
        let (loser, winner) = if first.is_defeated() {
            (first, second)
        } else if second.is_defeated() {
            (second, first)
        } else {
            return None;
        };

        let knockout = Knockout {
            winner: winner.id.clone(),
            loser: loser.id.clone(),
            simultaneous: first.is_defeated() && second.is_defeated(),
        };

        self.winner = Some(knockout.winner.clone());
        self.phase = BattlePhase::Complete;
        Some(knockout)
    }
}
