/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Mana every living hero regains at the end of a round.
    pub mana_regen: i32,
    /// Number of battle log entries retained before the oldest is dropped.
    pub log_capacity: usize,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// A party must contain exactly this many heroes to start a battle.
    pub const PARTY_SIZE: usize = 4;
    /// Log lines a frontend shows at once.
    pub const LOG_VISIBLE: usize = 5;
    pub const STRONG_ATTACK_COST: i32 = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MANA_REGEN: i32 = 5;
    pub const DEFAULT_LOG_CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self {
            mana_regen: Self::DEFAULT_MANA_REGEN,
            log_capacity: Self::DEFAULT_LOG_CAPACITY,
        }
    }

    pub fn with_mana_regen(mut self, mana_regen: i32) -> Self {
        self.mana_regen = mana_regen;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
