mod common;

use std::time::Duration;

use battle_core::{BattleAction, BattlePhase};
use battle_runtime::{BattleRegistry, RuntimeError};
use common::{brute, config, fighter, frail};

#[tokio::test]
async fn submit_before_start_is_rejected_without_mutation() {
    let registry = BattleRegistry::new(config());
    let battle = registry.create(fighter("a", 100), fighter("b", 100)).unwrap();

    let outcome = battle
        .submit(BattleAction::new("a", 0, "b"))
        .await
        .unwrap();

    assert!(!outcome.success);
    assert_eq!(outcome.message, "battle not active");
    assert_eq!(outcome.battle.phase, BattlePhase::Pending);
    assert_eq!(outcome.battle.combatants[1].stats.health, 100);
    assert!(!battle.is_running());
}

#[tokio::test]
async fn start_activates_once() {
    let registry = BattleRegistry::new(config());
    let battle = registry.create(fighter("a", 100), fighter("b", 100)).unwrap();

    let snapshot = battle.start().await.unwrap();
    assert_eq!(snapshot.phase, BattlePhase::Active);
    assert_eq!(snapshot.round, 1);
    assert_eq!(battle.snapshot().phase, BattlePhase::Active);

    let err = battle.start().await.unwrap_err();
    assert!(matches!(err, RuntimeError::AlreadyStarted(id) if id == battle.id()));
}

#[tokio::test]
async fn actions_resolve_and_publish_snapshots() {
    let registry = BattleRegistry::new(config());
    let battle = registry.create(fighter("a", 100), fighter("b", 100)).unwrap();
    let mut updates = battle.subscribe();
    battle.start().await.unwrap();

    let outcome = battle
        .submit(BattleAction::new("a", 0, "b"))
        .await
        .unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.message, "A used Basic Attack on B for 15 damage.");
    assert_eq!(outcome.battle.combatants[1].stats.health, 85);
    assert_eq!(outcome.battle.round, 2);

    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().round, 2);
    assert_eq!(battle.snapshot(), outcome.battle);
}

#[tokio::test]
async fn rejections_come_back_as_failed_outcomes() {
    let registry = BattleRegistry::new(config());
    let battle = registry.create(fighter("a", 100), fighter("b", 100)).unwrap();
    battle.start().await.unwrap();

    let cases = [
        (BattleAction::new("nobody", 0, "b"), "invalid character ID"),
        (BattleAction::new("a", 0, "nobody"), "invalid target ID"),
        (BattleAction::new("a", 7, "b"), "Invalid ability index."),
    ];
    for (action, message) in cases {
        let outcome = battle.submit(action).await.unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.message, message);
        assert_eq!(outcome.battle.combatants[1].stats.health, 100);
    }

    assert!(battle.submit(BattleAction::new("a", 1, "b")).await.unwrap().success);
    let outcome = battle
        .submit(BattleAction::new("a", 1, "b"))
        .await
        .unwrap();
    assert_eq!(outcome.message, "Ability on cooldown.");
}

#[tokio::test]
async fn knockout_completes_battle_and_worker_exits() {
    let registry = BattleRegistry::new(config());
    let battle = registry.create(frail("a"), brute("b")).unwrap();
    battle.start().await.unwrap();

    let outcome = battle
        .submit(BattleAction::new("b", 0, "a"))
        .await
        .unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.battle.combatants[0].stats.health, 0);
    assert_eq!(outcome.battle.phase, BattlePhase::Complete);

    let finished = battle.wait_for_completion().await.unwrap();
    assert_eq!(finished.winner().map(|c| c.name.as_str()), Some("Brute"));

    tokio::time::timeout(Duration::from_secs(2), async {
        while battle.is_running() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("worker should exit after completion");

    let outcome = battle
        .submit(BattleAction::new("a", 0, "b"))
        .await
        .unwrap();
    assert!(!outcome.success);
    assert_eq!(outcome.message, "battle not active");
    assert_eq!(outcome.battle, finished);
}

#[tokio::test]
async fn submit_between_completion_and_worker_exit_is_rejected() {
    let registry = BattleRegistry::new(config().with_poll_interval(Duration::from_secs(60)));
    let battle = registry.create(frail("a"), brute("b")).unwrap();
    battle.start().await.unwrap();

    battle.submit(BattleAction::new("b", 0, "a")).await.unwrap();
    let outcome = battle
        .submit(BattleAction::new("b", 0, "a"))
        .await
        .unwrap();

    assert!(!outcome.success);
    assert_eq!(outcome.message, "battle not active");
    assert_eq!(outcome.battle.phase, BattlePhase::Complete);
}

#[tokio::test]
async fn shutdown_stops_accepting_actions() {
    let registry = BattleRegistry::new(config());
    let battle = registry.create(fighter("a", 100), fighter("b", 100)).unwrap();
    battle.start().await.unwrap();

    let snapshot = battle.shutdown().await.unwrap();
    assert_eq!(snapshot.phase, BattlePhase::Active);
    assert!(!battle.is_running());

    let outcome = battle
        .submit(BattleAction::new("a", 0, "b"))
        .await
        .unwrap();
    assert_eq!(outcome.message, "battle not active");

    let err = battle.wait_for_completion().await.unwrap_err();
    assert!(matches!(err, RuntimeError::SnapshotChannelClosed(_)));
}
