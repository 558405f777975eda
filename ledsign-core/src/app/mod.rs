//! Firmware main loops
//!
//! Each variant is a plain struct owning its collaborators. `poll` runs a
//! single loop iteration (including the end-of-iteration pause) and
//! `run` repeats it forever. All state lives in the struct; there is one
//! thread of control and no interior mutability.

pub mod register_sign;
pub mod standalone_sign;

pub use register_sign::RegisterSign;
pub use standalone_sign::StandaloneSign;
