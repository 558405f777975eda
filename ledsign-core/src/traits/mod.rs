//! Hardware abstraction traits
//!
//! These traits define the interface between the sign logic and the
//! external collaborators: the panel driver, the field-bus stack and the
//! monotonic millisecond counter.

pub mod bus;
pub mod clock;
pub mod panel;

pub use bus::{DataBits, Parity, RegisterBus, SerialConfig, StopBits, TransactionOutcome};
pub use clock::{elapsed_ms, Clock};
pub use panel::{Font, Panel, PanelError, PanelExt};

#[cfg(feature = "embassy")]
pub use clock::EmbassyClock;
