//! Panel driver trait for the dot-matrix display

/// Errors reported by a panel driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// Transfer to the panel hardware failed
    Communication,
    /// Panel used before `begin`
    NotInitialized,
    /// Requested geometry does not fit the frame buffer
    BufferOverflow,
}

/// Fonts available on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Font {
    /// 5x7 system font, one text line on a 16 pixel panel
    #[default]
    System5x7,
    /// Bold font filling the full panel height
    ArialBlack16,
}

/// Trait for a buffered dot-matrix panel
///
/// Drawing operations only touch the buffer. `refresh` pushes the buffer
/// to the hardware. Coordinates are in pixels relative to the top-left
/// corner; text may start off-panel (negative `x`) and is clipped.
pub trait Panel {
    /// Initialize the panel hardware
    fn begin(&mut self) -> Result<(), PanelError>;

    /// Set the LED brightness (0-255)
    fn set_brightness(&mut self, level: u8) -> Result<(), PanelError>;

    /// Select the font used by subsequent `draw_string` calls
    fn select_font(&mut self, font: Font);

    /// Clear the entire buffer
    fn clear(&mut self) -> Result<(), PanelError>;

    /// Draw text with its top-left corner at (`x`, `y`)
    fn draw_string(&mut self, x: i32, y: i32, text: &str) -> Result<(), PanelError>;

    /// Push the buffer to the hardware
    fn refresh(&mut self) -> Result<(), PanelError>;

    /// Panel width in pixels
    fn width(&self) -> u16;

    /// Panel height in pixels
    fn height(&self) -> u16;
}

/// Helper trait for whole-screen text layouts
pub trait PanelExt: Panel {
    /// Clear the buffer and draw a single string at (`x`, `y`)
    fn show_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), PanelError> {
        self.clear()?;
        self.draw_string(x, y, text)
    }
}

// Blanket implementation for all Panel types
impl<T: Panel + ?Sized> PanelExt for T {}
