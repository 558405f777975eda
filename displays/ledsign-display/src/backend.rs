//! Frame sink trait
//!
//! Defines the interface between the framebuffer and the panel hardware.

use ledsign_core::traits::PanelError;

/// Receiver of finished frames
///
/// `frame` holds `height` rows of `width / 8` bytes, most significant
/// bit first; a set bit is a lit LED.
pub trait FrameSink {
    /// Prepare the hardware (pins, scan timer)
    fn init(&mut self) -> Result<(), PanelError> {
        Ok(())
    }

    /// Apply the LED brightness (0-255)
    fn set_brightness(&mut self, level: u8) -> Result<(), PanelError>;

    /// Latch a complete frame
    fn write_frame(&mut self, width: u16, height: u16, frame: &[u8]) -> Result<(), PanelError>;
}

impl<T: FrameSink + ?Sized> FrameSink for &mut T {
    fn init(&mut self) -> Result<(), PanelError> {
        (**self).init()
    }

    fn set_brightness(&mut self, level: u8) -> Result<(), PanelError> {
        (**self).set_brightness(level)
    }

    fn write_frame(&mut self, width: u16, height: u16, frame: &[u8]) -> Result<(), PanelError> {
        (**self).write_frame(width, height, frame)
    }
}
