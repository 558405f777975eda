//! Horizontal scroll engine
//!
//! Moves a single line of text from the right edge of the panel to the
//! left, one step per interval. Once the text has fully left the panel
//! (offset below minus its estimated width) it restarts off-screen right.

use crate::text::text_width_px;
use crate::traits::{elapsed_ms, Panel, PanelExt};

/// Scroll position and cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollEngine {
    /// Current x position of the text's left edge
    offset_x: i32,
    /// Timestamp of the last advance
    last_advance_ms: u32,
    /// Pixels moved per advance
    step_px: i32,
    /// Position the text restarts from (the panel width)
    restart_x: i32,
}

impl ScrollEngine {
    /// Create an engine positioned at `restart_x`
    pub const fn new(restart_x: i32, step_px: i32) -> Self {
        Self {
            offset_x: restart_x,
            last_advance_ms: 0,
            step_px,
            restart_x,
        }
    }

    /// Current x position
    pub const fn offset(&self) -> i32 {
        self.offset_x
    }

    /// Move the text back to the right edge
    pub fn restart(&mut self) {
        self.offset_x = self.restart_x;
    }

    /// Force the position
    pub fn set_offset(&mut self, offset_x: i32) {
        self.offset_x = offset_x;
    }

    /// Check if an advance is due at `now_ms`
    pub fn is_due(&self, now_ms: u32, interval_ms: u32) -> bool {
        elapsed_ms(now_ms, self.last_advance_ms) >= interval_ms
    }

    /// Move one step left, wrapping once `text` has left the panel
    pub fn step(&mut self, text: &str) {
        self.offset_x -= self.step_px;
        if self.offset_x < -text_width_px(text) {
            self.offset_x = self.restart_x;
        }
    }

    /// Draw one frame and advance if the interval has elapsed
    ///
    /// The text is drawn at the current position before stepping. Returns
    /// true if a frame was drawn.
    pub fn tick<P: Panel + ?Sized>(
        &mut self,
        panel: &mut P,
        now_ms: u32,
        interval_ms: u32,
        y: i32,
        text: &str,
    ) -> bool {
        if !self.is_due(now_ms, interval_ms) {
            return false;
        }

        panel.show_text(self.offset_x, y, text).ok();
        self.step(text);
        self.last_advance_ms = now_ms;
        true
    }
}
