//! Battle worker that owns the authoritative [`battle_core::BattleState`].
//!
//! Receives commands from [`crate::Battle`], resolves actions through
//! [`BattleState::process_action`], and publishes a snapshot after each one.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use battle_core::{
    ActionOutcome, ActionRejection, BattleAction, BattleSnapshot, BattleState, TurnReport,
};

/// Commands that can be sent to a battle worker.
pub enum Command {
    /// Resolve one action and run the status round that follows it.
    Submit {
        action: BattleAction,
        reply: oneshot::Sender<ActionOutcome>,
    },
}

/// Background task that serializes every mutation of one battle.
pub struct BattleWorker {
    state: BattleState,
    command_rx: mpsc::Receiver<Command>,
    snapshot_tx: watch::Sender<BattleSnapshot>,
    stop_rx: oneshot::Receiver<()>,
    poll_interval: Duration,
}

impl BattleWorker {
    pub fn new(
        state: BattleState,
        command_rx: mpsc::Receiver<Command>,
        snapshot_tx: watch::Sender<BattleSnapshot>,
        stop_rx: oneshot::Receiver<()>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            state,
            command_rx,
            snapshot_tx,
            stop_rx,
            poll_interval,
        }
    }

    /// Main worker loop.
    ///
    /// Runs until the battle is observed complete on a poll tick or a stop is
    /// requested, then rejects whatever is still queued.
    pub async fn run(mut self) {
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = &mut self.stop_rx => {
                    info!(
                        target: "runtime::worker",
                        battle = %self.state.id(),
                        "Stop requested"
                    );
                    break;
                }
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                _ = ticker.tick() => {
                    if self.state.is_complete() {
                        break;
                    }
                }
            }
        }

        self.drain();
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Submit { action, reply } => {
                let outcome = self.handle_action(action);
                if reply.send(outcome).is_err() {
                    debug!(
                        target: "runtime::worker",
                        "Submit reply channel closed (caller dropped)"
                    );
                }
            }
        }
    }

    fn handle_action(&mut self, action: BattleAction) -> ActionOutcome {
        let report = self.state.process_action(action);
        self.log_report(&report);

        let snapshot = self.state.snapshot();
        self.snapshot_tx.send_replace(snapshot.clone());
        ActionOutcome::from_report(&report, snapshot)
    }

    fn log_report(&self, report: &TurnReport) {
        let battle = self.state.id();

        match &report.outcome {
            Ok(outcome) => debug!(
                target: "runtime::worker",
                %battle,
                actor = %report.action.actor,
                defender = %report.action.target,
                ability = %outcome.ability,
                dealt = outcome.dealt,
                round = report.round,
                "Action resolved"
            ),
            Err(rejection) => debug!(
                target: "runtime::worker",
                %battle,
                actor = %report.action.actor,
                ability_index = report.action.ability_index,
                code = rejection.code(),
                "Action rejected: {}",
                rejection
            ),
        }

        if let Some(reports) = &report.effects {
            for (combatant, round) in self.state.combatants().iter().zip(reports) {
                for tick in &round.ticks {
                    debug!(
                        target: "runtime::worker",
                        %battle,
                        combatant = %combatant.id,
                        effect = %tick.kind,
                        stat = %tick.stat,
                        before = tick.before,
                        after = tick.after,
                        remaining = tick.remaining,
                        harmful = tick.kind.is_harmful(),
                        "Status effect applied"
                    );
                }
                if round.discarded > 0 {
                    warn!(
                        target: "runtime::worker",
                        %battle,
                        combatant = %combatant.id,
                        discarded = round.discarded,
                        "Discarded status effects with non-positive duration"
                    );
                }
            }
        }

        if let Some(knockout) = &report.knockout {
            if knockout.simultaneous {
                warn!(
                    target: "runtime::worker",
                    %battle,
                    winner = %knockout.winner,
                    loser = %knockout.loser,
                    "Both combatants knocked out; winner taken by check order"
                );
            }
            info!(
                target: "runtime::worker",
                %battle,
                winner = %knockout.winner,
                round = report.round,
                "Battle complete"
            );
        }
    }

    /// Closes the queue and answers every command still in it.
    fn drain(&mut self) {
        self.command_rx.close();

        let snapshot = self.state.snapshot();
        let mut drained = 0usize;

        while let Ok(cmd) = self.command_rx.try_recv() {
            match cmd {
                Command::Submit { reply, .. } => {
                    let outcome =
                        ActionOutcome::rejected(ActionRejection::BattleNotActive, snapshot.clone());
                    if reply.send(outcome).is_err() {
                        debug!(
                            target: "runtime::worker",
                            "Submit reply channel closed (caller dropped)"
                        );
                    }
                }
            }
            drained += 1;
        }

        info!(
            target: "runtime::worker",
            battle = %self.state.id(),
            phase = %self.state.phase(),
            drained,
            "Battle worker exited"
        );
    }
}
