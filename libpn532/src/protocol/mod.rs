// libpn532-rs/libpn532/src/protocol/mod.rs
//! Wire format: frames, checksums, command codes, CIU registers and
//! reply parsers.

pub mod checksum;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod presets;
pub mod registers;
pub mod responses;

pub use checksum::{crc_a, dcs, lcs, with_crc_a};
pub use commands::*;
pub use frame::{Frame, FrameHead};
pub use presets::analog_preset;
pub use registers::{BitFramingValue, Field, ModeValue, Register, TxAutoValue};
pub use responses::*;
