//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Settings for the automated battle driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// RON roster to load. Preset warrior and mage when unset.
    pub roster: Option<PathBuf>,
    /// Safety cap on submissions across both combatants.
    pub max_turns: usize,
    /// Directory for an additional log file.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            roster: None,
            max_turns: 200,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `BATTLE_ROSTER`
    /// - `BATTLE_MAX_TURNS`
    /// - `BATTLE_LOG_DIR`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_env::<PathBuf>("BATTLE_ROSTER") {
            config.roster = Some(path);
        }

        if let Some(turns) = read_env::<usize>("BATTLE_MAX_TURNS") {
            config.max_turns = turns.max(1);
        }

        if let Some(dir) = read_env::<PathBuf>("BATTLE_LOG_DIR") {
            config.log_dir = Some(dir);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok().filter(|v| !v.is_empty())?.parse().ok()
}
