//! Static text rotation and mode-cycle timing for the standalone sign

use heapless::{String, Vec};

use crate::traits::elapsed_ms;

/// Capacity of one static text entry
pub const STATIC_TEXT_CAPACITY: usize = 16;

/// Maximum number of static texts
pub const MAX_STATIC_TEXTS: usize = 8;

/// One entry of the static text list
pub type StaticText = String<STATIC_TEXT_CAPACITY>;

/// Ordered list of static texts
pub type StaticTextList = Vec<StaticText, MAX_STATIC_TEXTS>;

/// Ordered static texts shown one per rotation tick
#[derive(Debug, Clone)]
pub struct StaticTextCycle {
    texts: StaticTextList,
    index: usize,
}

impl StaticTextCycle {
    /// Create a cycle starting at the first text
    pub fn new(texts: StaticTextList) -> Self {
        Self { texts, index: 0 }
    }

    /// Text at the current position, empty if the list is empty
    pub fn current(&self) -> &str {
        self.texts.get(self.index).map(|t| t.as_str()).unwrap_or("")
    }

    /// Current position in the list
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of texts in the cycle
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Check if the cycle has no texts
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Return the current text and move to the next, wrapping at the end
    pub fn take_next(&mut self) -> &str {
        if self.texts.is_empty() {
            return "";
        }
        let shown = self.index;
        self.index = (self.index + 1) % self.texts.len();
        self.texts[shown].as_str()
    }
}

/// What a rotation tick asks the sign to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RotationTick {
    /// Advance to the next mode after handling this tick
    pub advance_mode: bool,
}

/// Fixed-interval rotation timer with a mode-advance counter
///
/// Fires every `interval_ms`; every `rotations_per_mode` firings it also
/// requests a mode advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RotationTimer {
    interval_ms: u32,
    rotations_per_mode: u8,
    last_tick_ms: u32,
    rotations: u8,
}

impl RotationTimer {
    /// Create a timer whose first tick is due once `interval_ms` has
    /// elapsed since time zero
    pub const fn new(interval_ms: u32, rotations_per_mode: u8) -> Self {
        Self {
            interval_ms,
            rotations_per_mode,
            last_tick_ms: 0,
            rotations: 0,
        }
    }

    /// Rotations counted toward the next mode advance
    pub const fn rotations(&self) -> u8 {
        self.rotations
    }

    /// Check the timer at `now_ms`
    ///
    /// Returns `Some` when the interval has elapsed.
    pub fn poll(&mut self, now_ms: u32) -> Option<RotationTick> {
        if elapsed_ms(now_ms, self.last_tick_ms) < self.interval_ms {
            return None;
        }
        self.last_tick_ms = now_ms;

        self.rotations = self.rotations.saturating_add(1);
        let advance_mode = self.rotations >= self.rotations_per_mode;
        if advance_mode {
            self.rotations = 0;
        }

        Some(RotationTick { advance_mode })
    }
}
