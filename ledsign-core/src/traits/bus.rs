//! Field-bus register access
//!
//! The bus stack (framing, CRC, exception replies) is an external
//! collaborator. The sign only sees a small table of 16-bit holding
//! registers and the outcome of each serviced transaction.

/// Outcome of a transaction serviced by [`RegisterBus::poll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransactionOutcome {
    /// The bus master completed a request; registers may have changed
    Success,
    /// The request failed with a stack-specific result code
    Failed(u8),
}

impl TransactionOutcome {
    /// Check if the transaction completed successfully
    pub fn is_success(&self) -> bool {
        matches!(self, TransactionOutcome::Success)
    }
}

/// Slave-side register bus
///
/// Servicing is synchronous: `poll` handles whatever the transport has
/// buffered and returns immediately. Its return value replaces the
/// completion callback of callback-style bus stacks.
pub trait RegisterBus {
    /// Start answering requests addressed to `node_address`
    fn begin(&mut self, node_address: u8, serial: &SerialConfig);

    /// Declare `count` word registers starting at index 0
    ///
    /// Returns false if the stack cannot hold that many registers.
    fn add_registers(&mut self, count: u16) -> bool;

    /// Read a register, or `None` if it was never declared
    fn register(&self, index: u16) -> Option<u16>;

    /// Write a register locally, returns false if it was never declared
    fn set_register(&mut self, index: u16, value: u16) -> bool;

    /// Service pending transactions
    ///
    /// Returns `Some(outcome)` when a transaction completed during this
    /// call, `None` when the line was idle.
    fn poll(&mut self) -> Option<TransactionOutcome>;
}

/// Serial line settings for the bus transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerialConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baudrate: 9600,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopBits {
    One,
    Two,
}
