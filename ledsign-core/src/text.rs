//! Text formatting and layout helpers
//!
//! Widths use a fixed per-character advance rather than real glyph
//! metrics. Proportional fonts can render narrower or wider than this
//! estimate; wrap points and centring follow the estimate regardless.

use core::fmt::Write;

use heapless::String;

/// Capacity of a formatted display string
pub const TEXT_CAPACITY: usize = 16;

/// Estimated horizontal advance per character in pixels
pub const CHAR_ADVANCE_PX: i32 = 6;

/// Glyph height of the 5x7 system font in pixels
pub const SYSTEM_FONT_HEIGHT_PX: i32 = 7;

/// Suffix for value A (price)
pub const PRICE_SUFFIX: &str = " TL";

/// Suffix for value B (seconds)
pub const TIME_SUFFIX: &str = " sn";

/// A short formatted display string
pub type DisplayText = String<TEXT_CAPACITY>;

/// Estimated rendered width of `text` in pixels
pub fn text_width_px(text: &str) -> i32 {
    text.len() as i32 * CHAR_ADVANCE_PX
}

/// X position that centres `text` on a panel `panel_width` pixels wide
///
/// Texts wider than the panel produce a negative position.
pub fn centered_x(panel_width: u16, text: &str) -> i32 {
    (panel_width as i32 - text_width_px(text)) / 2
}

/// Format a signed value followed by a unit suffix, e.g. `"-42 TL"`
pub fn format_value(value: i16, suffix: &str) -> DisplayText {
    let mut out = DisplayText::new();
    // "-32768" plus a three-character suffix always fits
    let _ = write!(out, "{}{}", value, suffix);
    out
}

/// Format uptime as `H:MM:SS`
///
/// Hours wrap at 24 and are not padded; minutes and seconds are always
/// two digits.
pub fn format_clock(elapsed_ms: u32) -> DisplayText {
    let seconds = elapsed_ms / 1000;
    let hours = (seconds / 3600) % 24;
    let minutes = (seconds / 60) % 60;
    let secs = seconds % 60;

    let mut out = DisplayText::new();
    let _ = write!(out, "{}:{:02}:{:02}", hours, minutes, secs);
    out
}
