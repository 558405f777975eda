//! Register-configured sign
//!
//! A bus master configures the sign through four holding registers
//! (mode, scroll speed, value A, value B). Each iteration services the
//! bus, mirrors the registers and renders the selected mode.
//!
//! Unknown modes draw an error banner and then block for the configured
//! hold time. Bus servicing stops for that duration as well.

use embedded_hal::delay::DelayNs;

use crate::config::RegisterSignConfig;
use crate::mode::RegisterMode;
use crate::registers::{DisplayConfig, MirrorReport, RegisterSnapshot, REGISTER_COUNT};
use crate::scroll::ScrollEngine;
use crate::text::{format_value, PRICE_SUFFIX, TIME_SUFFIX};
use crate::traits::{Clock, Panel, PanelExt, RegisterBus, TransactionOutcome};

/// Register-configured sign main loop
pub struct RegisterSign<P, B, C, D> {
    panel: P,
    bus: B,
    clock: C,
    delay: D,
    config: RegisterSignConfig,
    display: DisplayConfig,
    scroll: ScrollEngine,
}

impl<P, B, C, D> RegisterSign<P, B, C, D>
where
    P: Panel,
    B: RegisterBus,
    C: Clock,
    D: DelayNs,
{
    /// Create the sign; nothing touches the hardware until [`Self::setup`]
    pub fn new(panel: P, bus: B, clock: C, delay: D, config: RegisterSignConfig) -> Self {
        let scroll = ScrollEngine::new(panel.width() as i32, config.scroll_step_px);
        Self {
            panel,
            bus,
            clock,
            delay,
            config,
            display: DisplayConfig::default(),
            scroll,
        }
    }

    /// Bring up the panel and the bus, then load the boot register values
    pub fn setup(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("Register sign starting...");

        if let Some(level) = self.config.panel.brightness {
            self.panel.set_brightness(level).ok();
        }
        self.panel.begin().ok();
        self.panel.select_font(self.config.panel.font);
        self.panel.clear().ok();

        self.bus.begin(self.config.node_address, &self.config.serial);
        if !self.bus.add_registers(REGISTER_COUNT) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Bus refused {} registers", REGISTER_COUNT);
        }
        if !self.config.initial_registers.write(&mut self.bus) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Failed to write boot register values");
        }
        self.apply_transaction();

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Panel ready, node {} at {} baud",
            self.config.node_address,
            self.config.serial.baudrate
        );
    }

    /// Run one loop iteration
    ///
    /// Returns the mode that was rendered.
    pub fn poll(&mut self) -> RegisterMode {
        match self.bus.poll() {
            Some(TransactionOutcome::Success) => {
                let report = self.apply_transaction();
                self.log_transaction(&report);
            }
            Some(TransactionOutcome::Failed(_code)) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Bus transaction failed: {}", _code);
            }
            None => {}
        }

        // Registers are mirrored every iteration, with or without traffic
        let snapshot = RegisterSnapshot::read(&self.bus, &self.display);
        self.display.mirror(&snapshot);

        let mode = self.display.mode;
        self.render(mode);

        self.panel.refresh().ok();
        self.delay.delay_ms(self.config.loop_delay_ms);
        mode
    }

    /// Run the main loop forever
    pub fn run(mut self) -> ! {
        self.setup();
        loop {
            self.poll();
        }
    }

    /// Mirror the registers after a successful transaction
    ///
    /// Restarts the scroll whenever the incoming mode is the scrolling
    /// mode, so every write in welcome mode begins a fresh pass.
    fn apply_transaction(&mut self) -> MirrorReport {
        let snapshot = RegisterSnapshot::read(&self.bus, &self.display);
        let report = self.display.mirror(&snapshot);
        if self.display.mode.is_scrolling() {
            self.scroll.restart();
        }
        report
    }

    fn log_transaction(&self, _report: &MirrorReport) {
        #[cfg(feature = "defmt")]
        {
            if _report.mode_changed(&self.display) {
                defmt::info!("Mode {} -> {}", _report.previous_mode, self.display.mode);
            }
            if !_report.speed_accepted {
                defmt::debug!(
                    "Scroll speed out of range, keeping {} ms",
                    self.display.scroll_speed_ms
                );
            }
        }
    }

    fn render(&mut self, mode: RegisterMode) {
        let (x, y) = (self.config.text_x, self.config.text_y);

        match mode {
            RegisterMode::Off => {
                self.panel.clear().ok();
            }
            RegisterMode::Welcome => {
                let now = self.clock.now_ms();
                self.scroll.tick(
                    &mut self.panel,
                    now,
                    self.display.scroll_speed_ms as u32,
                    y,
                    self.config.welcome_text.as_str(),
                );
            }
            RegisterMode::Price => {
                let text = format_value(self.display.value_a, PRICE_SUFFIX);
                self.panel.show_text(x, y, &text).ok();
            }
            RegisterMode::Time => {
                let text = format_value(self.display.value_b, TIME_SUFFIX);
                self.panel.show_text(x, y, &text).ok();
            }
            RegisterMode::Invalid(_raw) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Unknown display mode {}", _raw);

                self.panel
                    .show_text(x, y, self.config.error_text.as_str())
                    .ok();
                // Banner must be on the modules for the whole hold
                self.panel.refresh().ok();
                // Blocks bus servicing too
                self.delay.delay_ms(self.config.error_hold_ms);
            }
        }
    }

    /// Current mirrored configuration
    pub fn display_config(&self) -> &DisplayConfig {
        &self.display
    }

    /// Scroll engine state
    pub fn scroll(&self) -> &ScrollEngine {
        &self.scroll
    }

    /// Active configuration
    pub fn config(&self) -> &RegisterSignConfig {
        &self.config
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Release the collaborators
    pub fn into_parts(self) -> (P, B, C, D) {
        (self.panel, self.bus, self.clock, self.delay)
    }
}
