//! Shared counters: remaining bricks and player lives

use serde::{Deserialize, Serialize};

use crate::consts::{INIT_LIVES, MAX_LIVES};

/// Remaining bricks; reaching zero is the win signal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickCounter {
    value: u32,
}

impl BrickCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.value += 1;
    }

    /// Never goes below zero
    pub fn decrement(&mut self) {
        if self.value == 0 {
            log::warn!("brick counter decremented at zero");
            return;
        }
        self.value -= 1;
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_cleared(&self) -> bool {
        self.value == 0
    }
}

/// Player lives, capped at a maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lives {
    count: u8,
    max: u8,
}

impl Default for Lives {
    fn default() -> Self {
        Self::new(INIT_LIVES, MAX_LIVES)
    }
}

impl Lives {
    pub fn new(count: u8, max: u8) -> Self {
        Self {
            count: count.min(max),
            max,
        }
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// Restore one life; false (no-op) when already at the cap
    pub fn gain(&mut self) -> bool {
        if self.count >= self.max {
            return false;
        }
        self.count += 1;
        true
    }

    /// Lose one life and return what is left (stays at zero)
    pub fn lose(&mut self) -> u8 {
        self.count = self.count.saturating_sub(1);
        self.count
    }

    pub fn is_out(&self) -> bool {
        self.count == 0
    }
}
