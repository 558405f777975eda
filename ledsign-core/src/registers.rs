//! Holding register map and the locally mirrored display configuration
//!
//! The bus master owns four word registers. The sign copies them into a
//! [`DisplayConfig`] after every successful transaction and once per loop
//! iteration. Scroll speeds outside the accepted range never reach the
//! mirror; the previous speed stays in effect.

use crate::mode::RegisterMode;
use crate::traits::RegisterBus;

/// Register 0: display mode
pub const REG_MODE: u16 = 0;
/// Register 1: scroll interval in milliseconds
pub const REG_SCROLL_SPEED: u16 = 1;
/// Register 2: value A (price), signed
pub const REG_VALUE_A: u16 = 2;
/// Register 3: value B (time), signed
pub const REG_VALUE_B: u16 = 3;
/// Number of holding registers exposed to the bus master
pub const REGISTER_COUNT: u16 = 4;

/// Fastest accepted scroll interval
pub const SCROLL_SPEED_MIN_MS: u16 = 50;
/// Slowest accepted scroll interval
pub const SCROLL_SPEED_MAX_MS: u16 = 500;

/// Check if a scroll interval may be applied
pub const fn scroll_speed_in_range(speed_ms: u16) -> bool {
    speed_ms >= SCROLL_SPEED_MIN_MS && speed_ms <= SCROLL_SPEED_MAX_MS
}

/// Raw contents of the four holding registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterSnapshot {
    pub mode: u16,
    pub scroll_speed_ms: u16,
    pub value_a: i16,
    pub value_b: i16,
}

impl RegisterSnapshot {
    /// Read all registers from the bus
    ///
    /// Registers the bus cannot provide keep the value already mirrored
    /// in `current`.
    pub fn read<B: RegisterBus + ?Sized>(bus: &B, current: &DisplayConfig) -> Self {
        Self {
            mode: bus
                .register(REG_MODE)
                .unwrap_or(current.mode.to_register()),
            scroll_speed_ms: bus
                .register(REG_SCROLL_SPEED)
                .unwrap_or(current.scroll_speed_ms),
            value_a: bus
                .register(REG_VALUE_A)
                .map(|raw| raw as i16)
                .unwrap_or(current.value_a),
            value_b: bus
                .register(REG_VALUE_B)
                .map(|raw| raw as i16)
                .unwrap_or(current.value_b),
        }
    }

    /// Register words in index order
    pub fn to_words(&self) -> [u16; REGISTER_COUNT as usize] {
        [
            self.mode,
            self.scroll_speed_ms,
            self.value_a as u16,
            self.value_b as u16,
        ]
    }

    /// Write every register to the bus, returns false if any write failed
    pub fn write<B: RegisterBus + ?Sized>(&self, bus: &mut B) -> bool {
        let mut ok = true;
        for (index, word) in self.to_words().into_iter().enumerate() {
            ok &= bus.set_register(index as u16, word);
        }
        ok
    }
}

/// Result of mirroring a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MirrorReport {
    /// Mode before the snapshot was applied
    pub previous_mode: RegisterMode,
    /// False if the snapshot carried an out-of-range scroll speed
    pub speed_accepted: bool,
}

impl MirrorReport {
    /// Check if the snapshot changed the display mode
    pub fn mode_changed(&self, config: &DisplayConfig) -> bool {
        self.previous_mode != config.mode
    }
}

/// Local display configuration mirrored from the registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Active render path
    pub mode: RegisterMode,
    /// Scroll interval in milliseconds, always within 50-500
    pub scroll_speed_ms: u16,
    /// Value A (price)
    pub value_a: i16,
    /// Value B (time)
    pub value_b: i16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: RegisterMode::Welcome,
            scroll_speed_ms: 100,
            value_a: 0,
            value_b: 0,
        }
    }
}

impl DisplayConfig {
    /// Copy register contents into the mirror
    ///
    /// The scroll speed is only taken when it lies within
    /// [`SCROLL_SPEED_MIN_MS`]..=[`SCROLL_SPEED_MAX_MS`].
    pub fn mirror(&mut self, snapshot: &RegisterSnapshot) -> MirrorReport {
        let previous_mode = self.mode;
        self.mode = RegisterMode::from_register(snapshot.mode);

        let speed_accepted = scroll_speed_in_range(snapshot.scroll_speed_ms);
        if speed_accepted {
            self.scroll_speed_ms = snapshot.scroll_speed_ms;
        }

        self.value_a = snapshot.value_a;
        self.value_b = snapshot.value_b;

        MirrorReport {
            previous_mode,
            speed_accepted,
        }
    }
}
