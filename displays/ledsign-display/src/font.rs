//! Mapping of panel fonts to `embedded-graphics` mono fonts

use embedded_graphics::mono_font::ascii::{FONT_5X7, FONT_9X15_BOLD};
use embedded_graphics::mono_font::MonoFont;
use ledsign_core::traits::Font;

/// Glyph set used to rasterize `font`
pub fn mono_font(font: Font) -> &'static MonoFont<'static> {
    match font {
        Font::System5x7 => &FONT_5X7,
        // Closest bold face that fits a 16 pixel module
        Font::ArialBlack16 => &FONT_9X15_BOLD,
    }
}
