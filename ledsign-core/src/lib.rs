//! Board-agnostic core logic for the LED sign firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (panel, register bus, clock)
//! - Register mirroring and the scroll-speed range check
//! - Display mode selection for both firmware variants
//! - Text formatting (numeric values, uptime clock)
//! - Scroll engine and static text rotation
//! - The two firmware main loops
//!
//! # Firmware variants
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │ RegisterSign                 │   │ StandaloneSign               │
//! │ bus master writes 4 regs     │   │ compiled-in texts and timers │
//! └──────────────────────────────┘   └──────────────────────────────┘
//!                │                                  │
//!                └────────────────┬─────────────────┘
//!                                 ▼
//!                    ┌─────────────────────────┐
//!                    │ Panel (external driver) │
//!                    └─────────────────────────┘
//! ```
//!
//! The variants are mutually exclusive: a board runs one or the other.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod cycle;
pub mod mode;
pub mod registers;
pub mod scroll;
pub mod text;
pub mod traits;

#[cfg(test)]
mod testing;

pub use app::{RegisterSign, StandaloneSign};
pub use config::{ConfigError, RegisterSignConfig, StandaloneSignConfig};
pub use mode::{RegisterMode, StandaloneMode};
pub use registers::DisplayConfig;
pub use scroll::ScrollEngine;
