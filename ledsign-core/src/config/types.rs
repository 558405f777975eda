//! Configuration types for both firmware variants

use heapless::String;

use crate::cycle::{StaticText, StaticTextList};
use crate::registers::{scroll_speed_in_range, RegisterSnapshot};
use crate::traits::{Font, SerialConfig};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width of one P10 module in pixels
pub const PANEL_MODULE_WIDTH_PX: u16 = 32;

/// Height of one P10 module in pixels
pub const PANEL_MODULE_HEIGHT_PX: u16 = 16;

/// Highest valid slave node address
pub const MAX_NODE_ADDRESS: u8 = 247;

/// Maximum length of a scrolling banner
pub const MAX_BANNER_LEN: usize = 64;

/// Maximum length of a short label
pub const MAX_LABEL_LEN: usize = 16;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// TOML text could not be parsed
    Parse,
    /// Panel chain has zero modules in one direction
    NoPanels,
    /// Node address outside 1-247
    InvalidNodeAddress,
    /// Initial scroll speed outside 50-500 ms
    ScrollSpeedOutOfRange,
    /// Scroll step of zero would never move the text
    ZeroScrollStep,
    /// Static text list is empty
    NoStaticTexts,
    /// Rotation interval of zero
    ZeroRotationInterval,
    /// Mode advance after zero rotations
    ZeroRotationsPerMode,
}

/// Physical layout and initial settings of the panel chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelLayout {
    /// Modules chained horizontally
    pub panels_wide: u8,
    /// Modules stacked vertically
    pub panels_high: u8,
    /// Brightness applied at boot, `None` keeps the driver default
    pub brightness: Option<u8>,
    /// Font selected at boot
    pub font: Font,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            panels_wide: 1,
            panels_high: 1,
            brightness: None,
            font: Font::System5x7,
        }
    }
}

impl PanelLayout {
    /// Total width in pixels
    pub const fn width_px(&self) -> u16 {
        self.panels_wide as u16 * PANEL_MODULE_WIDTH_PX
    }

    /// Total height in pixels
    pub const fn height_px(&self) -> u16 {
        self.panels_high as u16 * PANEL_MODULE_HEIGHT_PX
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.panels_wide == 0 || self.panels_high == 0 {
            return Err(ConfigError::NoPanels);
        }
        Ok(())
    }
}

/// Copy `text`, dropping whatever does not fit in `N` bytes
fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

/// Configuration of the register-configured sign
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegisterSignConfig {
    /// Panel chain
    pub panel: PanelLayout,
    /// Slave address on the field bus
    pub node_address: u8,
    /// Serial line settings of the bus
    pub serial: SerialConfig,
    /// Register contents written at boot
    pub initial_registers: RegisterSnapshot,
    /// Text scrolled in welcome mode
    pub welcome_text: String<MAX_BANNER_LEN>,
    /// Left edge of static layouts (value displays, error banner)
    pub text_x: i32,
    /// Top row of static layouts and of the welcome scroll
    pub text_y: i32,
    /// Pixels moved per scroll advance
    pub scroll_step_px: i32,
    /// Banner shown for unknown modes
    pub error_text: String<MAX_LABEL_LEN>,
    /// Blocking pause after drawing the error banner
    pub error_hold_ms: u32,
    /// Pause at the end of every loop iteration
    pub loop_delay_ms: u32,
}

impl Default for RegisterSignConfig {
    fn default() -> Self {
        Self {
            panel: PanelLayout::default(),
            node_address: 1,
            serial: SerialConfig::default(),
            initial_registers: RegisterSnapshot {
                mode: 1,
                scroll_speed_ms: 100,
                value_a: 1500,
                value_b: 60,
            },
            welcome_text: truncated("Welcome"),
            text_x: 2,
            text_y: 4,
            scroll_step_px: 1,
            error_text: truncated("MODE ERROR"),
            error_hold_ms: 1000,
            loop_delay_ms: 10,
        }
    }
}

impl RegisterSignConfig {
    /// Check the configuration for values the sign cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.panel.validate()?;
        if self.node_address == 0 || self.node_address > MAX_NODE_ADDRESS {
            return Err(ConfigError::InvalidNodeAddress);
        }
        if !scroll_speed_in_range(self.initial_registers.scroll_speed_ms) {
            return Err(ConfigError::ScrollSpeedOutOfRange);
        }
        if self.scroll_step_px <= 0 {
            return Err(ConfigError::ZeroScrollStep);
        }
        Ok(())
    }
}

/// Configuration of the standalone sign
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StandaloneSignConfig {
    /// Panel chain
    pub panel: PanelLayout,
    /// Text shown while booting
    pub boot_text: String<MAX_LABEL_LEN>,
    /// How long the boot text stays up
    pub boot_hold_ms: u32,
    /// Texts rotated in static mode
    pub static_texts: StaticTextList,
    /// Banner scrolled in scrolling mode
    pub scroll_text: String<MAX_BANNER_LEN>,
    /// Scroll cadence
    pub scroll_interval_ms: u32,
    /// Pixels moved per scroll advance
    pub scroll_step_px: i32,
    /// Baseline row of scrolling text and the clock
    pub text_y: i32,
    /// Rotation timer interval
    pub rotation_interval_ms: u32,
    /// Rotations before the mode advances
    pub rotations_per_mode: u8,
    /// Pause at the end of every loop iteration
    pub loop_delay_ms: u32,
    /// Status log cadence
    pub status_log_period_ms: u32,
}

impl Default for StandaloneSignConfig {
    fn default() -> Self {
        let mut static_texts = StaticTextList::new();
        for text in ["MERHABA", "DUNYA!", "ESP8266", "P10 LED", "PANEL", "PROJESI"] {
            let mut entry = StaticText::new();
            let _ = entry.push_str(text);
            let _ = static_texts.push(entry);
        }

        Self {
            panel: PanelLayout {
                panels_wide: 2,
                panels_high: 1,
                brightness: Some(50),
                font: Font::System5x7,
            },
            boot_text: truncated("BASLIYOR..."),
            boot_hold_ms: 2000,
            static_texts,
            scroll_text: truncated("*** PlatformIO ESP8266 P10 LED Panel Projesi *** "),
            scroll_interval_ms: 100,
            scroll_step_px: 2,
            text_y: 4,
            rotation_interval_ms: 3000,
            rotations_per_mode: 5,
            loop_delay_ms: 10,
            status_log_period_ms: 5000,
        }
    }
}

impl StandaloneSignConfig {
    /// Check the configuration for values the sign cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.panel.validate()?;
        if self.static_texts.is_empty() {
            return Err(ConfigError::NoStaticTexts);
        }
        if self.rotation_interval_ms == 0 {
            return Err(ConfigError::ZeroRotationInterval);
        }
        if self.rotations_per_mode == 0 {
            return Err(ConfigError::ZeroRotationsPerMode);
        }
        if self.scroll_step_px <= 0 {
            return Err(ConfigError::ZeroScrollStep);
        }
        Ok(())
    }
}
