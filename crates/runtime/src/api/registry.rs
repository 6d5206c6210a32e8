//! Battle registry.
//!
//! [`BattleRegistry`] is an explicit, owned store of battles. Share it with an
//! `Arc` wherever battles are created or looked up. Its lock only guards the
//! id map and is never held while a battle does work.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use battle_core::{BattleId, BattleSnapshot, BattleState, Combatant};
use tracing::info;

use super::battle::Battle;
use super::errors::{Result, RuntimeError};
use crate::config::RuntimeConfig;

pub struct BattleRegistry {
    config: RuntimeConfig,
    battles: RwLock<HashMap<BattleId, Arc<Battle>>>,
}

impl BattleRegistry {
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            battles: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Create a pending battle between two combatants.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::InvalidCombatant` or
    /// `RuntimeError::DuplicateCombatantId` when a definition is rejected.
    /// Nothing is registered in that case.
    pub fn create(&self, first: Combatant, second: Combatant) -> Result<Arc<Battle>> {
        let state = BattleState::new(first, second)?;
        let battle = Arc::new(Battle::new(state, self.config.clone()));

        let mut battles = self
            .battles
            .write()
            .map_err(|_| RuntimeError::LockPoisoned)?;
        battles.insert(battle.id(), Arc::clone(&battle));
        drop(battles);

        let snapshot = battle.snapshot();
        let [first, second] = &snapshot.combatants;
        info!(
            target: "runtime::registry",
            battle = %battle.id(),
            first = %first.name,
            second = %second.name,
            "Battle created"
        );

        Ok(battle)
    }

    /// Look up a battle by id.
    pub fn get(&self, id: BattleId) -> Result<Arc<Battle>> {
        self.battles
            .read()
            .map_err(|_| RuntimeError::LockPoisoned)?
            .get(&id)
            .cloned()
            .ok_or(RuntimeError::BattleNotFound(id))
    }

    /// Snapshots of every registered battle, ordered by id.
    pub fn list(&self) -> Result<Vec<BattleSnapshot>> {
        let battles: Vec<Arc<Battle>> = self
            .battles
            .read()
            .map_err(|_| RuntimeError::LockPoisoned)?
            .values()
            .cloned()
            .collect();

        let mut snapshots: Vec<BattleSnapshot> = battles.iter().map(|b| b.snapshot()).collect();
        snapshots.sort_by_key(|s| s.id);
        Ok(snapshots)
    }

    /// Unregister a battle and shut its worker down.
    ///
    /// Returns the battle's final snapshot.
    pub async fn remove(&self, id: BattleId) -> Result<BattleSnapshot> {
        let battle = self
            .battles
            .write()
            .map_err(|_| RuntimeError::LockPoisoned)?
            .remove(&id)
            .ok_or(RuntimeError::BattleNotFound(id))?;

        let snapshot = battle.shutdown().await?;
        info!(
            target: "runtime::registry",
            battle = %id,
            phase = %snapshot.phase,
            "Battle removed"
        );
        Ok(snapshot)
    }

    pub fn len(&self) -> usize {
        self.battles.read().map(|b| b.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BattleRegistry {
    fn default() -> Self {
        Self::new(RuntimeConfig::default())
    }
}
