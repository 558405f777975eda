//! Recording test doubles for the collaborator traits

use std::cell::Cell;
use std::string::String;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::traits::{Clock, Font, Panel, PanelError, RegisterBus, SerialConfig, TransactionOutcome};

/// One recorded panel call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelOp {
    Begin,
    Brightness(u8),
    Font(Font),
    Clear,
    Draw(i32, i32, String),
    Refresh,
}

/// Panel that records every call
pub struct MockPanel {
    width: u16,
    height: u16,
    ops: Vec<PanelOp>,
}

impl MockPanel {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[PanelOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<PanelOp> {
        std::mem::take(&mut self.ops)
    }

    /// Texts drawn, in order
    pub fn drawn(&self) -> Vec<(i32, i32, String)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PanelOp::Draw(x, y, text) => Some((*x, *y, text.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn last_drawn(&self) -> Option<(i32, i32, String)> {
        self.drawn().pop()
    }
}

impl Panel for MockPanel {
    fn begin(&mut self) -> Result<(), PanelError> {
        self.ops.push(PanelOp::Begin);
        Ok(())
    }

    fn set_brightness(&mut self, level: u8) -> Result<(), PanelError> {
        self.ops.push(PanelOp::Brightness(level));
        Ok(())
    }

    fn select_font(&mut self, font: Font) {
        self.ops.push(PanelOp::Font(font));
    }

    fn clear(&mut self) -> Result<(), PanelError> {
        self.ops.push(PanelOp::Clear);
        Ok(())
    }

    fn draw_string(&mut self, x: i32, y: i32, text: &str) -> Result<(), PanelError> {
        self.ops.push(PanelOp::Draw(x, y, text.into()));
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), PanelError> {
        self.ops.push(PanelOp::Refresh);
        Ok(())
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }
}

/// Panel that timestamps every buffer push against a [`MockClock`]
///
/// Shares the clock with [`MockDelay`], so pushes and pauses land on one
/// timeline.
pub struct TimedPanel<'a> {
    clock: &'a MockClock,
    width: u16,
    height: u16,
    buffer: String,
    /// (time of `refresh`, buffer text at that time)
    pub pushes: Vec<(u32, String)>,
}

impl<'a> TimedPanel<'a> {
    pub fn new(clock: &'a MockClock, width: u16, height: u16) -> Self {
        Self {
            clock,
            width,
            height,
            buffer: String::new(),
            pushes: Vec::new(),
        }
    }

    /// Time `text` was first pushed to the hardware
    pub fn first_push_of(&self, text: &str) -> Option<u32> {
        self.pushes
            .iter()
            .find(|(_, shown)| shown == text)
            .map(|(at, _)| *at)
    }
}

impl Panel for TimedPanel<'_> {
    fn begin(&mut self) -> Result<(), PanelError> {
        Ok(())
    }

    fn set_brightness(&mut self, _level: u8) -> Result<(), PanelError> {
        Ok(())
    }

    fn select_font(&mut self, _font: Font) {}

    fn clear(&mut self) -> Result<(), PanelError> {
        self.buffer.clear();
        Ok(())
    }

    fn draw_string(&mut self, _x: i32, _y: i32, text: &str) -> Result<(), PanelError> {
        self.buffer.push_str(text);
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), PanelError> {
        self.pushes.push((self.clock.now_ms(), self.buffer.clone()));
        Ok(())
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }
}

/// Register bus with a scripted transaction queue
///
/// `master_write` simulates the bus master: it updates the registers and
/// queues a successful outcome for the next `poll`.
#[derive(Default)]
pub struct MockBus {
    registers: Vec<u16>,
    pending: Vec<TransactionOutcome>,
    pub node_address: Option<u8>,
    pub serial: Option<SerialConfig>,
    pub polls: usize,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registers(values: &[u16]) -> Self {
        Self {
            registers: values.to_vec(),
            ..Self::default()
        }
    }

    pub fn master_write(&mut self, index: u16, value: u16) {
        self.registers[index as usize] = value;
        self.pending.push(TransactionOutcome::Success);
    }

    /// Queue a transaction that fails without touching the registers
    pub fn master_fail(&mut self, code: u8) {
        self.pending.push(TransactionOutcome::Failed(code));
    }
}

impl RegisterBus for MockBus {
    fn begin(&mut self, node_address: u8, serial: &SerialConfig) {
        self.node_address = Some(node_address);
        self.serial = Some(*serial);
    }

    fn add_registers(&mut self, count: u16) -> bool {
        self.registers.resize(count as usize, 0);
        true
    }

    fn register(&self, index: u16) -> Option<u16> {
        self.registers.get(index as usize).copied()
    }

    fn set_register(&mut self, index: u16, value: u16) -> bool {
        match self.registers.get_mut(index as usize) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    fn poll(&mut self) -> Option<TransactionOutcome> {
        self.polls += 1;
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

/// Manually advanced millisecond counter
#[derive(Default)]
pub struct MockClock {
    now: Cell<u32>,
}

impl MockClock {
    pub fn new(start_ms: u32) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, now_ms: u32) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, delta_ms: u32) {
        self.now.set(self.now.get().wrapping_add(delta_ms));
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

/// Delay that advances a shared [`MockClock`] and records each pause
pub struct MockDelay<'a> {
    clock: &'a MockClock,
    pub pauses_ms: Vec<u32>,
}

impl<'a> MockDelay<'a> {
    pub fn new(clock: &'a MockClock) -> Self {
        Self {
            clock,
            pauses_ms: Vec::new(),
        }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        let ms = ns / 1_000_000;
        self.pauses_ms.push(ms);
        self.clock.advance(ms);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.pauses_ms.push(ms);
        self.clock.advance(ms);
    }
}
