//! Battle client: configuration, logging, and the automated driver behind
//! the `battle` binary.
//!
//! The binary is the composition root. It loads a roster, creates a battle in
//! a [`battle_runtime::BattleRegistry`], and lets two providers fight it out.

pub mod config;
pub mod driver;
pub mod logging;

pub use config::ClientConfig;
pub use driver::{DriveOutcome, drive};
pub use logging::setup_logging;
