//! Monotonic millisecond counter

/// Source of uptime in milliseconds
///
/// The counter wraps around like a 32-bit hardware tick; interval checks
/// must go through [`elapsed_ms`].
pub trait Clock {
    /// Milliseconds since boot (wrapping)
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Milliseconds elapsed from `since` to `now`, tolerant of one wraparound
pub const fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

/// Clock backed by the embassy time driver
#[cfg(feature = "embassy")]
pub struct EmbassyClock {
    start: embassy_time::Instant,
}

#[cfg(feature = "embassy")]
impl EmbassyClock {
    /// Start counting from the current instant
    pub fn new() -> Self {
        Self {
            start: embassy_time::Instant::now(),
        }
    }
}

#[cfg(feature = "embassy")]
impl Default for EmbassyClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "embassy")]
impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}
