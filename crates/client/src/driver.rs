//! Automated battle driver.
//!
//! Runs one task per combatant. Each task asks its provider for an action
//! based on the latest snapshot and submits it, so both sides race for the
//! battle's queue the way two independent players would.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context, Result};
use battle_core::{BattlePhase, BattleSnapshot, CombatantId};
use battle_runtime::{ActionProvider, Battle};
use tracing::{debug, info, warn};

/// How a driven battle ended.
#[derive(Clone, Debug)]
pub struct DriveOutcome {
    pub snapshot: BattleSnapshot,
    /// Submissions made by both sides together.
    pub turns: usize,
}

impl DriveOutcome {
    pub fn is_complete(&self) -> bool {
        self.snapshot.is_complete()
    }
}

/// Drives a started battle until it completes or `max_turns` submissions
/// have been made.
pub async fn drive(
    battle: Arc<Battle>,
    providers: [Arc<dyn ActionProvider>; 2],
    max_turns: usize,
) -> Result<DriveOutcome> {
    let turns = Arc::new(AtomicUsize::new(0));
    let ids: Vec<CombatantId> = battle
        .snapshot()
        .combatants
        .iter()
        .map(|c| c.id.clone())
        .collect();

    let mut tasks = Vec::with_capacity(2);
    for (actor, provider) in ids.into_iter().zip(providers) {
        let battle = Arc::clone(&battle);
        let turns = Arc::clone(&turns);
        tasks.push(tokio::spawn(async move {
            act_until_done(battle, actor, provider, turns, max_turns).await
        }));
    }

    for task in tasks {
        task.await.context("driver task panicked")??;
    }

    let snapshot = battle.snapshot();
    let turns = turns.load(Ordering::SeqCst).min(max_turns);
    match snapshot.winner() {
        Some(winner) => info!(winner = %winner.name, turns, "Battle finished"),
        None => warn!(turns, max_turns, "Turn cap reached before a knockout"),
    }

    Ok(DriveOutcome { snapshot, turns })
}

async fn act_until_done(
    battle: Arc<Battle>,
    actor: CombatantId,
    provider: Arc<dyn ActionProvider>,
    turns: Arc<AtomicUsize>,
    max_turns: usize,
) -> Result<()> {
    loop {
        let snapshot = battle.snapshot();
        if snapshot.is_complete() {
            return Ok(());
        }
        let Some(action) = provider.provide_action(&actor, &snapshot).await else {
            debug!(%actor, "Provider has no action, standing down");
            return Ok(());
        };
        if turns.fetch_add(1, Ordering::SeqCst) >= max_turns {
            return Ok(());
        }

        let outcome = battle.submit(action).await?;
        debug!(
            %actor,
            success = outcome.success,
            round = outcome.battle.round,
            "{}",
            outcome.message
        );
        if !outcome.success && outcome.battle.phase != BattlePhase::Active {
            return Ok(());
        }

        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use battle_core::BattleAction;
    use battle_runtime::{BattleRegistry, FixedProvider, GreedyProvider};

    struct Idle;

    #[async_trait]
    impl ActionProvider for Idle {
        async fn provide_action(
            &self,
            _actor: &CombatantId,
            _battle: &BattleSnapshot,
        ) -> Option<BattleAction> {
            None
        }
    }

    #[tokio::test]
    async fn preset_battle_runs_to_completion() {
        let registry = BattleRegistry::default();
        let [warrior, mage] = battle_content::default_roster();
        let battle = registry.create(warrior, mage).unwrap();
        battle.start().await.unwrap();

        let outcome = drive(
            Arc::clone(&battle),
            [Arc::new(GreedyProvider), Arc::new(GreedyProvider)],
            200,
        )
        .await
        .unwrap();

        assert!(outcome.is_complete());
        assert!(outcome.snapshot.winner().is_some());
        assert!(outcome.turns <= 200);
    }

    #[tokio::test]
    async fn stops_at_turn_cap() {
        let registry = BattleRegistry::default();
        let [warrior, mage] = battle_content::default_roster();
        let battle = registry.create(warrior, mage).unwrap();
        battle.start().await.unwrap();

        // Index 9 never resolves, so only the cap ends the drive.
        let outcome = drive(
            Arc::clone(&battle),
            [
                Arc::new(FixedProvider { ability_index: 9 }),
                Arc::new(FixedProvider { ability_index: 9 }),
            ],
            6,
        )
        .await
        .unwrap();

        assert!(!outcome.is_complete());
        assert_eq!(outcome.turns, 6);
        assert_eq!(outcome.snapshot.round, 7);
    }

    #[tokio::test]
    async fn idle_provider_does_not_spend_turns() {
        let registry = BattleRegistry::default();
        let [warrior, mage] = battle_content::default_roster();
        let battle = registry.create(warrior, mage).unwrap();
        battle.start().await.unwrap();

        let outcome = drive(
            Arc::clone(&battle),
            [Arc::new(Idle), Arc::new(FixedProvider { ability_index: 9 })],
            4,
        )
        .await
        .unwrap();

        assert_eq!(outcome.turns, 4);
        // Every one of the four turns reached the battle.
        assert_eq!(outcome.snapshot.round, 5);
    }
}
