/// Battle constants and tunable defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct BattleConfig;

impl BattleConfig {
    // ===== rules =====
    /// Round counter value of a freshly created battle.
    pub const INITIAL_ROUND: u32 = 1;
    /// Maximum abilities in one combatant's loadout.
    pub const MAX_ABILITIES: usize = 8;
    /// Denominator for potency percentages.
    pub const PERCENT: i32 = 100;
    /// Extra divisor applied to BURNING and REGENERATING ticks.
    pub const TICK_DIVISOR: i32 = 10;

    // ===== runtime-tunable defaults =====
    /// Default capacity of a battle's action queue.
    pub const DEFAULT_QUEUE_CAPACITY: usize = 100;
    /// Default period of the worker's idle wake-up, in milliseconds.
    pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;
}
