//! Battle client binary.
//!
//! Loads two combatants (from `BATTLE_ROSTER` or the warrior/mage presets),
//! runs them against each other with greedy providers, and prints the final
//! snapshot as JSON.

use std::sync::Arc;

use anyhow::Result;
use battle_client::{ClientConfig, drive, setup_logging};
use battle_content::{RosterLoader, default_roster};
use battle_runtime::{BattleRegistry, GreedyProvider, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let runtime_config = RuntimeConfig::from_env();

    let _guard = setup_logging(config.log_dir.as_deref())?;

    let [first, second] = match &config.roster {
        Some(path) => {
            tracing::info!("Loading roster from {}", path.display());
            RosterLoader::load(path)?
        }
        None => default_roster(),
    };

    let registry = BattleRegistry::new(runtime_config);
    let battle = registry.create(first, second)?;
    battle.start().await?;

    let outcome = drive(
        Arc::clone(&battle),
        [Arc::new(GreedyProvider), Arc::new(GreedyProvider)],
        config.max_turns,
    )
    .await?;

    let snapshot = registry.remove(battle.id()).await?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    if !outcome.is_complete() {
        tracing::warn!("Battle stopped after {} turns without a winner", outcome.turns);
    }

    Ok(())
}
