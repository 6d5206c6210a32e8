//! Damage calculation and application.

// ============================================================================
// Damage Calculation
// ============================================================================

/// Calculate the raw damage of an ability use.
///
/// # Formula
///
/// ```text
/// raw_damage = ability_damage + attack_stat
/// ```
///
/// Defense is applied separately by [`mitigate`] on the receiving side.
pub fn calculate_damage(ability_damage: i32, attack: i32) -> i32 {
    ability_damage.saturating_add(attack)
}

/// Reduce raw damage by the defender's defense.
///
/// ```text
/// mitigated = max(0, raw_damage - defense)
/// ```
pub fn mitigate(raw_damage: i32, defense: i32) -> i32 {
    raw_damage.saturating_sub(defense).max(0)
}

/// Apply damage to current HP.
///
/// Negative damage is treated as zero.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: i32, damage: i32) -> i32 {
    current_hp.saturating_sub(damage.max(0)).max(0)
}
