//! Shareable handle to one battle.
//!
//! A [`Battle`] starts out holding its [`BattleState`] directly. Starting it
//! moves the state into a dedicated worker task; from then on the handle only
//! forwards actions over a bounded queue and reads published snapshots.
use std::sync::{Mutex, MutexGuard};

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use battle_core::{
    ActionOutcome, ActionRejection, BattleAction, BattleId, BattleSnapshot, BattleState,
};

use super::errors::{Result, RuntimeError};
use crate::config::RuntimeConfig;
use crate::workers::{BattleWorker, Command};

enum Lifecycle {
    Pending {
        state: BattleState,
        snapshot_tx: watch::Sender<BattleSnapshot>,
    },
    Running {
        command_tx: mpsc::Sender<Command>,
        stop_tx: oneshot::Sender<()>,
        worker: JoinHandle<()>,
    },
    Stopped,
}

/// Client-facing handle to a single battle.
///
/// Usually held as `Arc<Battle>` and shared between every task that acts in
/// or observes the battle.
pub struct Battle {
    id: BattleId,
    config: RuntimeConfig,
    lifecycle: Mutex<Lifecycle>,
    snapshot_rx: watch::Receiver<BattleSnapshot>,
}

impl Battle {
    /// Wraps a pending battle. Nothing runs until [`Battle::start`].
    pub fn new(state: BattleState, config: RuntimeConfig) -> Self {
        let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());

        Self {
            id: state.id(),
            config,
            lifecycle: Mutex::new(Lifecycle::Pending { state, snapshot_tx }),
            snapshot_rx,
        }
    }

    pub fn id(&self) -> BattleId {
        self.id
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> BattleSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Receiver that observes every snapshot the worker publishes.
    pub fn subscribe(&self) -> watch::Receiver<BattleSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Activates the battle and spawns its worker.
    pub async fn start(&self) -> Result<BattleSnapshot> {
        let mut lifecycle = self.lock()?;

        let (mut state, snapshot_tx) =
            match std::mem::replace(&mut *lifecycle, Lifecycle::Stopped) {
                Lifecycle::Pending { state, snapshot_tx } => (state, snapshot_tx),
                other => {
                    *lifecycle = other;
                    return Err(RuntimeError::AlreadyStarted(self.id));
                }
            };

        if state.start().is_err() {
            *lifecycle = Lifecycle::Pending { state, snapshot_tx };
            return Err(RuntimeError::AlreadyStarted(self.id));
        }
        let snapshot = state.snapshot();
        snapshot_tx.send_replace(snapshot.clone());

        let (command_tx, command_rx) = mpsc::channel(self.config.queue_capacity);
        let (stop_tx, stop_rx) = oneshot::channel();
        let worker = BattleWorker::new(
            state,
            command_rx,
            snapshot_tx,
            stop_rx,
            self.config.poll_interval,
        );
        let worker = tokio::spawn(async move {
            worker.run().await;
        });

        *lifecycle = Lifecycle::Running {
            command_tx,
            stop_tx,
            worker,
        };

        info!(
            target: "runtime::worker",
            battle = %self.id,
            queue_capacity = self.config.queue_capacity,
            "Battle started"
        );
        Ok(snapshot)
    }

    /// Submits an action and waits for its outcome.
    ///
    /// Blocks while the queue is full. Returns an unsuccessful outcome, not an
    /// error, when the battle is not accepting actions.
    pub async fn submit(&self, action: BattleAction) -> Result<ActionOutcome> {
        let Some(command_tx) = self.command_sender()? else {
            return Ok(self.not_active());
        };

        let (reply_tx, reply_rx) = oneshot::channel();
        let command = Command::Submit {
            action,
            reply: reply_tx,
        };
        if command_tx.send(command).await.is_err() {
            debug!(
                target: "runtime::worker",
                battle = %self.id,
                "Submit after worker exit"
            );
            return Ok(self.not_active());
        }

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Resolves with the final snapshot once the battle is complete.
    pub async fn wait_for_completion(&self) -> Result<BattleSnapshot> {
        let mut snapshot_rx = self.snapshot_rx.clone();
        let snapshot = snapshot_rx
            .wait_for(BattleSnapshot::is_complete)
            .await
            .map_err(RuntimeError::SnapshotChannelClosed)?;
        Ok(snapshot.clone())
    }

    /// Returns true while the worker task is running.
    pub fn is_running(&self) -> bool {
        self.lock()
            .map(|lifecycle| match &*lifecycle {
                Lifecycle::Running { worker, .. } => !worker.is_finished(),
                _ => false,
            })
            .unwrap_or(false)
    }

    /// Stops the worker, if any, and waits for it to exit.
    ///
    /// Actions still queued are answered with "battle not active". A pending
    /// battle simply stops accepting a start.
    pub async fn shutdown(&self) -> Result<BattleSnapshot> {
        let previous = std::mem::replace(&mut *self.lock()?, Lifecycle::Stopped);

        if let Lifecycle::Running {
            command_tx,
            stop_tx,
            worker,
        } = previous
        {
            drop(command_tx);
            // Err only means the worker already exited on its own.
            let _ = stop_tx.send(());
            worker.await.map_err(RuntimeError::WorkerJoin)?;
        }

        Ok(self.snapshot())
    }

    /// Queue sender of a running worker, cloned so the lock is not held
    /// across the send.
    fn command_sender(&self) -> Result<Option<mpsc::Sender<Command>>> {
        Ok(match &*self.lock()? {
            Lifecycle::Running { command_tx, .. } => Some(command_tx.clone()),
            Lifecycle::Pending { .. } | Lifecycle::Stopped => None,
        })
    }

    fn not_active(&self) -> ActionOutcome {
        ActionOutcome::rejected(ActionRejection::BattleNotActive, self.snapshot())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Lifecycle>> {
        self.lifecycle
            .lock()
            .map_err(|_| RuntimeError::LockPoisoned)
    }
}
