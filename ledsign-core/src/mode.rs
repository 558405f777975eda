//! Display mode selection
//!
//! Each firmware variant has a closed set of render paths selected by a
//! single mode value. Only one path is active at any instant.

/// Display modes of the register-configured sign
///
/// Decoded from holding register 0. Every value outside 0-3 maps to
/// `Invalid`, which renders an error banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterMode {
    /// Panel blank
    Off,
    /// Scrolling welcome text
    Welcome,
    /// Value A with the price suffix
    Price,
    /// Value B with the seconds suffix
    Time,
    /// Unknown register value
    Invalid(u16),
}

impl RegisterMode {
    /// Decode the raw register value
    pub const fn from_register(raw: u16) -> Self {
        match raw {
            0 => RegisterMode::Off,
            1 => RegisterMode::Welcome,
            2 => RegisterMode::Price,
            3 => RegisterMode::Time,
            other => RegisterMode::Invalid(other),
        }
    }

    /// Raw register value for this mode
    pub const fn to_register(self) -> u16 {
        match self {
            RegisterMode::Off => 0,
            RegisterMode::Welcome => 1,
            RegisterMode::Price => 2,
            RegisterMode::Time => 3,
            RegisterMode::Invalid(raw) => raw,
        }
    }

    /// Check if this mode scrolls text
    pub fn is_scrolling(&self) -> bool {
        matches!(self, RegisterMode::Welcome)
    }
}

/// Display modes of the standalone sign
///
/// The mode space is closed: advancing wraps from `Clock` back to
/// `StaticText`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StandaloneMode {
    /// Rotate through the compiled-in static texts
    #[default]
    StaticText,
    /// Scroll the long banner text
    Scrolling,
    /// Show uptime as a clock
    Clock,
}

impl StandaloneMode {
    /// Number of standalone modes
    pub const COUNT: u8 = 3;

    /// Mode index (0-2)
    pub const fn index(self) -> u8 {
        match self {
            StandaloneMode::StaticText => 0,
            StandaloneMode::Scrolling => 1,
            StandaloneMode::Clock => 2,
        }
    }

    /// Mode for an index, wrapped modulo [`Self::COUNT`]
    pub const fn from_index(index: u8) -> Self {
        match index % Self::COUNT {
            0 => StandaloneMode::StaticText,
            1 => StandaloneMode::Scrolling,
            _ => StandaloneMode::Clock,
        }
    }

    /// The mode that follows this one
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}
