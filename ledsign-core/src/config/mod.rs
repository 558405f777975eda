//! Configuration type definitions
//!
//! Each firmware variant has one configuration struct. `Default` yields
//! the compiled-in values; with the `std` feature a configuration can
//! also be loaded from TOML on the host.

#[cfg(feature = "std")]
pub mod toml;
pub mod types;

pub use types::{
    ConfigError, PanelLayout, RegisterSignConfig, StandaloneSignConfig, MAX_NODE_ADDRESS,
    PANEL_MODULE_HEIGHT_PX, PANEL_MODULE_WIDTH_PX,
};
