//! Bounded battle log.
use std::collections::VecDeque;

use crate::config::GameConfig;

/// FIFO buffer of battle messages; the oldest entry is dropped once full.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl BattleLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message.into());
    }

    /// The last `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &String> {
        let skip = self.entries.len().saturating_sub(limit);
        self.entries.iter().skip(skip)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for BattleLog {
    fn default() -> Self {
        Self::new(GameConfig::DEFAULT_LOG_CAPACITY)
    }
}
