use std::collections::VecDeque;

use crate::types::Tick;

pub const DEFAULT_MAX_TICKS: usize = 10_000;

/// Bounded per-symbol tick history with ring-buffer semantics.
///
/// Ticks are appended in arrival order (non-decreasing timestamps as
/// received from the feed; no sorting is performed). Once the buffer is
/// at capacity, each append evicts the oldest tick, so memory stays
/// bounded no matter how long the feed runs.
#[derive(Debug, Clone)]
pub struct TickHistory {
    ticks: VecDeque<Tick>,
    capacity: usize,
}

impl TickHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            ticks: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a tick, evicting the oldest one if the buffer is full.
    pub fn push(&mut self, tick: Tick) {
        if self.ticks.len() == self.capacity {
            self.ticks.pop_front();
        }
        self.ticks.push_back(tick);
    }

    pub fn latest(&self) -> Option<&Tick> {
        self.ticks.back()
    }

    /// Owned copy of the retained ticks in arrival order.
    pub fn snapshot(&self) -> Vec<Tick> {
        self.ticks.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

impl Default for TickHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TICKS)
    }
}
