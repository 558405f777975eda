//! `Panel` implementation on top of the frame buffer

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ledsign_core::config::PanelLayout;
use ledsign_core::traits::{Font, Panel, PanelError};

use crate::backend::FrameSink;
use crate::font::mono_font;
use crate::framebuffer::FrameBuffer;

/// Buffered dot-matrix panel
///
/// Drawing only touches the local buffer; `refresh` hands the buffer to
/// the sink.
pub struct MatrixPanel<S> {
    sink: S,
    frame: FrameBuffer,
    font: Font,
    brightness: Option<u8>,
    initialized: bool,
}

impl<S: FrameSink> MatrixPanel<S> {
    /// Create a panel sized for `layout`
    pub fn new(sink: S, layout: &PanelLayout) -> Result<Self, PanelError> {
        Self::with_size(sink, layout.width_px(), layout.height_px())
    }

    /// Create a panel with an explicit pixel size
    pub fn with_size(sink: S, width: u16, height: u16) -> Result<Self, PanelError> {
        Ok(Self {
            sink,
            frame: FrameBuffer::new(width, height)?,
            font: Font::default(),
            brightness: None,
            initialized: false,
        })
    }

    /// Current buffer contents
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Font used by `draw_string`
    pub fn font(&self) -> Font {
        self.font
    }

    /// Last brightness applied
    pub fn brightness(&self) -> Option<u8> {
        self.brightness
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Release the sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: FrameSink> Panel for MatrixPanel<S> {
    fn begin(&mut self) -> Result<(), PanelError> {
        self.sink.init()?;
        self.initialized = true;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Matrix panel {}x{} initialized",
            self.frame.width(),
            self.frame.height()
        );
        Ok(())
    }

    fn set_brightness(&mut self, level: u8) -> Result<(), PanelError> {
        // Allowed before begin; the sink applies it once scanning starts
        self.brightness = Some(level);
        self.sink.set_brightness(level)
    }

    fn select_font(&mut self, font: Font) {
        self.font = font;
    }

    fn clear(&mut self) -> Result<(), PanelError> {
        self.frame.clear();
        Ok(())
    }

    fn draw_string(&mut self, x: i32, y: i32, text: &str) -> Result<(), PanelError> {
        let style = MonoTextStyle::new(mono_font(self.font), BinaryColor::On);
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.frame)
            .ok();
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), PanelError> {
        if !self.initialized {
            return Err(PanelError::NotInitialized);
        }
        self.sink
            .write_frame(self.frame.width(), self.frame.height(), self.frame.as_bytes())
    }

    fn width(&self) -> u16 {
        self.frame.width()
    }

    fn height(&self) -> u16 {
        self.frame.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::MAX_FRAME_BYTES;
    use ledsign_core::traits::PanelExt;

    struct RecordingSink {
        init_calls: usize,
        brightness: Option<u8>,
        frames: usize,
        dims: (u16, u16),
        last: [u8; MAX_FRAME_BYTES],
        last_len: usize,
        fail: bool,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                init_calls: 0,
                brightness: None,
                frames: 0,
                dims: (0, 0),
                last: [0; MAX_FRAME_BYTES],
                last_len: 0,
                fail: false,
            }
        }
    }

    impl FrameSink for RecordingSink {
        fn init(&mut self) -> Result<(), PanelError> {
            self.init_calls += 1;
            Ok(())
        }

        fn set_brightness(&mut self, level: u8) -> Result<(), PanelError> {
            self.brightness = Some(level);
            Ok(())
        }

        fn write_frame(&mut self, width: u16, height: u16, frame: &[u8]) -> Result<(), PanelError> {
            if self.fail {
                return Err(PanelError::Communication);
            }
            self.frames += 1;
            self.dims = (width, height);
            self.last[..frame.len()].copy_from_slice(frame);
            self.last_len = frame.len();
            Ok(())
        }
    }

    fn lit_in(frame: &FrameBuffer, xs: core::ops::Range<i32>, ys: core::ops::Range<i32>) -> usize {
        let mut count = 0;
        for y in ys {
            for x in xs.clone() {
                if frame.pixel(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_layout_sizes_panel() {
        let layout = PanelLayout {
            panels_wide: 2,
            panels_high: 1,
            brightness: Some(50),
            font: Font::System5x7,
        };
        let panel = MatrixPanel::new(RecordingSink::new(), &layout).unwrap();
        assert_eq!(panel.width(), 64);
        assert_eq!(panel.height(), 16);
    }

    #[test]
    fn test_refresh_requires_begin() {
        let mut panel = MatrixPanel::with_size(RecordingSink::new(), 32, 16).unwrap();
        assert_eq!(panel.refresh(), Err(PanelError::NotInitialized));

        panel.begin().unwrap();
        assert_eq!(panel.sink().init_calls, 1);
        assert_eq!(panel.refresh(), Ok(()));
        assert_eq!(panel.sink().frames, 1);
        assert_eq!(panel.sink().dims, (32, 16));
        assert_eq!(panel.sink().last_len, 64);
    }

    #[test]
    fn test_sink_errors_propagate() {
        let mut panel = MatrixPanel::with_size(RecordingSink::new(), 32, 16).unwrap();
        panel.begin().unwrap();
        panel.sink_mut().fail = true;
        assert_eq!(panel.refresh(), Err(PanelError::Communication));
    }

    #[test]
    fn test_brightness_before_begin() {
        let mut panel = MatrixPanel::with_size(RecordingSink::new(), 64, 16).unwrap();
        panel.set_brightness(50).unwrap();
        assert_eq!(panel.brightness(), Some(50));
        assert_eq!(panel.sink().brightness, Some(50));
    }

    #[test]
    fn test_text_lands_at_anchor() {
        let mut panel = MatrixPanel::with_size(RecordingSink::new(), 32, 16).unwrap();
        panel.draw_string(2, 4, "W").unwrap();

        let frame = panel.frame();
        assert!(lit_in(frame, 2..7, 4..11) > 0);
        assert_eq!(frame.lit_count(), lit_in(frame, 2..7, 4..11));
    }

    #[test]
    fn test_text_clipped_off_left_edge() {
        let mut panel = MatrixPanel::with_size(RecordingSink::new(), 32, 16).unwrap();
        panel.draw_string(-100, 4, "Welcome").unwrap();
        assert_eq!(panel.frame().lit_count(), 0);

        // Half of the text still on the panel
        panel.draw_string(-20, 4, "Welcome").unwrap();
        assert!(panel.frame().lit_count() > 0);
        assert_eq!(lit_in(panel.frame(), 25..32, 0..16), 0);
    }

    #[test]
    fn test_show_text_replaces_content() {
        let mut panel = MatrixPanel::with_size(RecordingSink::new(), 32, 16).unwrap();
        panel.draw_string(20, 0, "X").unwrap();
        panel.show_text(0, 0, "I").unwrap();
        assert_eq!(lit_in(panel.frame(), 20..32, 0..16), 0);
        assert!(panel.frame().lit_count() > 0);
    }

    #[test]
    fn test_bold_font_is_taller() {
        let mut panel = MatrixPanel::with_size(RecordingSink::new(), 32, 16).unwrap();
        panel.select_font(Font::ArialBlack16);
        assert_eq!(panel.font(), Font::ArialBlack16);
        panel.draw_string(0, 0, "H").unwrap();
        assert!(lit_in(panel.frame(), 0..9, 8..15) > 0);
    }
}
