//! Framebuffer panel for chained P10 dot-matrix modules
//!
//! This crate provides:
//! - `FrameBuffer`: a 1-bit pixel buffer usable as an `embedded-graphics`
//!   draw target
//! - `MatrixPanel`: an implementation of the core `Panel` trait that
//!   renders text into the buffer with `embedded-graphics` mono fonts
//! - `FrameSink`: the hook through which a board pushes finished frames
//!   to the modules
//!
//! # Architecture
//!
//! Row scanning and shift-register timing belong to the board. The sink
//! receives the whole buffer on every refresh and is free to latch it
//! into whatever scan routine drives the hardware.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod font;
pub mod framebuffer;
pub mod panel;

// Re-export key types
pub use backend::FrameSink;
pub use framebuffer::{FrameBuffer, MAX_FRAME_BYTES};
pub use panel::MatrixPanel;
