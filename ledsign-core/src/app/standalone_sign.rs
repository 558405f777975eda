//! Standalone sign
//!
//! Runs without a bus. A rotation timer fires every few seconds and
//! renders the current mode: the next static text, the start of a scroll
//! pass, or the uptime clock. After a fixed number of rotations the mode
//! advances, cycling static text -> scrolling -> clock.

use embedded_hal::delay::DelayNs;

use crate::config::StandaloneSignConfig;
use crate::cycle::{RotationTimer, StaticTextCycle};
use crate::mode::StandaloneMode;
use crate::scroll::ScrollEngine;
use crate::text::{centered_x, format_clock, SYSTEM_FONT_HEIGHT_PX};
use crate::traits::{Clock, Panel, PanelExt};

/// Label reported for the clock mode
pub const CLOCK_LABEL: &str = "SAAT";

/// Status is logged when `now % status_log_period_ms` falls below this
#[cfg(feature = "defmt")]
const STATUS_LOG_WINDOW_MS: u32 = 50;

/// Standalone sign main loop
pub struct StandaloneSign<P, C, D> {
    panel: P,
    clock: C,
    delay: D,
    config: StandaloneSignConfig,
    mode: StandaloneMode,
    cycle: StaticTextCycle,
    rotation: RotationTimer,
    scroll: ScrollEngine,
    scrolling: bool,
}

impl<P, C, D> StandaloneSign<P, C, D>
where
    P: Panel,
    C: Clock,
    D: DelayNs,
{
    /// Create the sign; nothing touches the hardware until [`Self::setup`]
    pub fn new(panel: P, clock: C, delay: D, config: StandaloneSignConfig) -> Self {
        let mut scroll = ScrollEngine::new(panel.width() as i32, config.scroll_step_px);
        scroll.set_offset(0);

        Self {
            cycle: StaticTextCycle::new(config.static_texts.clone()),
            rotation: RotationTimer::new(config.rotation_interval_ms, config.rotations_per_mode),
            panel,
            clock,
            delay,
            config,
            mode: StandaloneMode::default(),
            scroll,
            scrolling: false,
        }
    }

    /// Bring up the panel and hold the boot banner
    pub fn setup(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("Standalone sign starting...");

        if let Some(level) = self.config.panel.brightness {
            self.panel.set_brightness(level).ok();
        }
        self.panel.select_font(self.config.panel.font);
        self.panel.begin().ok();

        self.panel
            .show_text(0, 0, self.config.boot_text.as_str())
            .ok();
        self.panel.refresh().ok();
        self.delay.delay_ms(self.config.boot_hold_ms);

        #[cfg(feature = "defmt")]
        {
            defmt::info!("Panel ready, static texts:");
            for text in self.config.static_texts.iter() {
                defmt::info!("- {}", text.as_str());
            }
        }
    }

    /// Run one loop iteration
    ///
    /// Returns the mode active at the end of the iteration.
    pub fn poll(&mut self) -> StandaloneMode {
        let now = self.clock.now_ms();

        if let Some(tick) = self.rotation.poll(now) {
            match self.mode {
                StandaloneMode::StaticText => self.show_static_text(),
                StandaloneMode::Scrolling => {
                    if !self.scrolling {
                        self.start_scrolling();
                    }
                }
                StandaloneMode::Clock => self.show_clock(now),
            }

            if tick.advance_mode {
                self.mode = self.mode.next();
                self.scrolling = false;
                self.scroll.set_offset(0);

                #[cfg(feature = "defmt")]
                defmt::info!("Mode advanced to {}", self.mode);
            }
        }

        if self.scrolling {
            self.scroll.tick(
                &mut self.panel,
                now,
                self.config.scroll_interval_ms,
                self.config.text_y,
                self.config.scroll_text.as_str(),
            );
        }

        self.panel.refresh().ok();
        self.log_status(now);
        self.delay.delay_ms(self.config.loop_delay_ms);
        self.mode
    }

    /// Run the main loop forever
    pub fn run(mut self) -> ! {
        self.setup();
        loop {
            self.poll();
        }
    }

    /// Text associated with the current mode
    pub fn current_text(&self) -> &str {
        match self.mode {
            StandaloneMode::StaticText => self.cycle.current(),
            StandaloneMode::Scrolling => self.config.scroll_text.as_str(),
            StandaloneMode::Clock => CLOCK_LABEL,
        }
    }

    /// Centre the next static text and advance the cycle
    fn show_static_text(&mut self) {
        let text = self.cycle.take_next();
        let x = centered_x(self.panel.width(), text).max(0);
        let y = ((self.panel.height() as i32 - SYSTEM_FONT_HEIGHT_PX) / 2).max(0);
        self.panel.show_text(x, y, text).ok();

        #[cfg(feature = "defmt")]
        defmt::debug!("Static text: {}", text);
    }

    fn start_scrolling(&mut self) {
        self.scrolling = true;
        self.scroll.restart();
        self.panel.clear().ok();

        #[cfg(feature = "defmt")]
        defmt::debug!("Scrolling started: {}", self.config.scroll_text.as_str());
    }

    /// Uptime clock, centred horizontally
    fn show_clock(&mut self, now_ms: u32) {
        let text = format_clock(now_ms);
        let x = centered_x(self.panel.width(), &text);
        self.panel.show_text(x, self.config.text_y, &text).ok();

        #[cfg(feature = "defmt")]
        defmt::debug!("Clock: {}", text.as_str());
    }

    fn log_status(&self, _now_ms: u32) {
        #[cfg(feature = "defmt")]
        {
            if let Some(phase) = _now_ms.checked_rem(self.config.status_log_period_ms) {
                if phase < STATUS_LOG_WINDOW_MS {
                    defmt::info!("Mode: {} | Text: {}", self.mode, self.current_text());
                }
            }
        }
    }

    /// Active mode
    pub fn mode(&self) -> StandaloneMode {
        self.mode
    }

    /// Check if a scroll pass is running
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Scroll engine state
    pub fn scroll(&self) -> &ScrollEngine {
        &self.scroll
    }

    /// Static text rotation state
    pub fn cycle(&self) -> &StaticTextCycle {
        &self.cycle
    }

    /// Active configuration
    pub fn config(&self) -> &StandaloneSignConfig {
        &self.config
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    /// Release the collaborators
    pub fn into_parts(self) -> (P, C, D) {
        (self.panel, self.clock, self.delay)
    }
}
