// libpn532-rs/libpn532/src/lib.rs

//! libpn532
//!
//! Pure Rust host driver for NXP PN532 NFC controllers over HSU (serial).
//! Covers the link framing and ACK handshake, register and RF
//! configuration with write-elision caches, raw exchanges with host-set
//! modulation, and Type A / Type B target discovery.
#![warn(missing_docs)]

pub mod backend;
pub mod card;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the target types are available for consumers and for convenient
// `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
