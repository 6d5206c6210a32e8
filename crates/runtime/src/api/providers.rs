//! Asynchronous abstraction for choosing a combatant's next action.
//!
//! Drivers plug in [`ActionProvider`] implementations so a battle can run with
//! human input, scripted fixtures, or simple AI policies.
use async_trait::async_trait;
use battle_core::{BattleAction, BattleSnapshot, CombatantId};

/// Trait for providing actions based on the current battle snapshot.
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// Provide an action for `actor`, or `None` when it cannot act (unknown
    /// id or no abilities).
    async fn provide_action(
        &self,
        actor: &CombatantId,
        battle: &BattleSnapshot,
    ) -> Option<BattleAction>;
}

/// Uses the hardest-hitting ability that is ready, against the opponent.
///
/// Falls back to ability 0 when everything is on cooldown; the battle then
/// reports the cooldown like for any other submission.
pub struct GreedyProvider;

#[async_trait]
impl ActionProvider for GreedyProvider {
    async fn provide_action(
        &self,
        actor: &CombatantId,
        battle: &BattleSnapshot,
    ) -> Option<BattleAction> {
        let me = battle.combatant(actor)?;
        let opponent = battle.opponent_of(actor)?;
        if me.abilities.is_empty() {
            return None;
        }

        let index = me
            .abilities
            .iter()
            .enumerate()
            .filter(|(_, ability)| ability.is_ready())
            .max_by_key(|(index, ability)| (ability.damage, std::cmp::Reverse(*index)))
            .map(|(index, _)| index)
            .unwrap_or(0);

        Some(BattleAction::new(actor.clone(), index, opponent.id.clone()))
    }
}

/// Always uses the same ability index against the opponent.
pub struct FixedProvider {
    pub ability_index: usize,
}

#[async_trait]
impl ActionProvider for FixedProvider {
    async fn provide_action(
        &self,
        actor: &CombatantId,
        battle: &BattleSnapshot,
    ) -> Option<BattleAction> {
        let opponent = battle.opponent_of(actor)?;
        Some(BattleAction::new(
            actor.clone(),
            self.ability_index,
            opponent.id.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{Ability, BattleState, Combatant, Stats};

    fn snapshot(cooldown: u32) -> BattleSnapshot {
        let mut power = Ability::new("Power", 20, 2);
        power.cooldown = cooldown;
        let hero = Combatant::new(
            "hero",
            "Hero",
            Stats::new(100, 10, 5, 10),
            vec![Ability::new("Jab", 5, 0), power, Ability::new("Poke", 20, 0)],
        );
        let foe = Combatant::new("foe", "Foe", Stats::new(100, 10, 5, 10), vec![]);
        BattleState::new(hero, foe).unwrap().snapshot()
    }

    #[tokio::test]
    async fn greedy_prefers_ready_high_damage_lowest_index() {
        let action = GreedyProvider
            .provide_action(&"hero".into(), &snapshot(0))
            .await
            .unwrap();
        assert_eq!(action, BattleAction::new("hero", 1, "foe"));

        let action = GreedyProvider
            .provide_action(&"hero".into(), &snapshot(1))
            .await
            .unwrap();
        assert_eq!(action.ability_index, 2);
    }

    #[tokio::test]
    async fn greedy_gives_up_without_abilities_or_unknown_actor() {
        let battle = snapshot(0);
        assert!(GreedyProvider.provide_action(&"foe".into(), &battle).await.is_none());
        assert!(GreedyProvider.provide_action(&"ghost".into(), &battle).await.is_none());
    }

    #[tokio::test]
    async fn fixed_targets_the_opponent() {
        let action = FixedProvider { ability_index: 3 }
            .provide_action(&"foe".into(), &snapshot(0))
            .await
            .unwrap();
        assert_eq!(action, BattleAction::new("foe", 3, "hero"));
    }
}
