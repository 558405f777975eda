//! 1-bit frame buffer
//!
//! Pixels are stored row-major, `width / 8` bytes per row, most
//! significant bit = leftmost pixel. Writes outside the frame are
//! dropped, so text may start left of the panel and scroll in.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use ledsign_core::traits::PanelError;

/// Buffer capacity: eight 32x16 modules (e.g. 4 wide x 2 high)
pub const MAX_FRAME_BYTES: usize = 8 * (32 * 16 / 8);

/// Frame buffer for a chain of modules
#[derive(Clone)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    bits: [u8; MAX_FRAME_BYTES],
}

impl FrameBuffer {
    /// Create a blank buffer
    ///
    /// Fails with `BufferOverflow` if the geometry exceeds
    /// [`MAX_FRAME_BYTES`] or is empty.
    pub fn new(width: u16, height: u16) -> Result<Self, PanelError> {
        let bytes = Self::row_bytes_for(width) * height as usize;
        if width == 0 || height == 0 || bytes > MAX_FRAME_BYTES {
            return Err(PanelError::BufferOverflow);
        }
        Ok(Self {
            width,
            height,
            bits: [0; MAX_FRAME_BYTES],
        })
    }

    const fn row_bytes_for(width: u16) -> usize {
        (width as usize + 7) / 8
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Bytes per row
    pub fn row_bytes(&self) -> usize {
        Self::row_bytes_for(self.width)
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((y * self.row_bytes() + x / 8, 0x80 >> (x % 8)))
    }

    /// Set one pixel; out-of-frame coordinates are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if let Some((index, mask)) = self.locate(x, y) {
            if on {
                self.bits[index] |= mask;
            } else {
                self.bits[index] &= !mask;
            }
        }
    }

    /// Read one pixel; out-of-frame coordinates read as off
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        self.locate(x, y)
            .map(|(index, mask)| self.bits[index] & mask != 0)
            .unwrap_or(false)
    }

    /// Frame contents, `row_bytes() * height()` bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits[..self.row_bytes() * self.height as usize]
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> usize {
        self.as_bytes()
            .iter()
            .map(|byte| byte.count_ones() as usize)
            .sum()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let on = color.is_on();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                self.set_pixel(x, y, on);
            }
        }
        Ok(())
    }
}
