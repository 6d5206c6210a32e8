//! Combat resolution system.
//!
//! Pure functions and small value types for resolving one ability use.
//!
//! # Core Functions
//!
//! - `use_ability`: full resolution (cooldown gate, damage, effect attachment)
//! - `calculate_damage`: ability damage plus attack, mitigated by defense
//! - `apply_damage`: HP reduction (clamped to 0)

pub mod damage;
pub mod resolver;
pub mod result;

pub use damage::{apply_damage, calculate_damage, mitigate};
pub use resolver::{use_ability, use_ability_on_self};
pub use result::{AbilityOutcome, Strike};
