// libpn532-rs/libpn532/src/prelude.rs
//! Common imports for users of the crate.

pub use crate::backend::NfcBackend;
pub use crate::card::{ExpectedApdu, Tag};
pub use crate::config::{DriverConfig, SerialConfig, Strictness};
pub use crate::device::{Device, DeviceBuilder, RawExchange};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::protocol::{Command, Register, RfConfigItem};
pub use crate::{
    BitRate, DetectedTarget, Error, FirmwareVersion, Modulation, PollOutcome, Result, TypeATarget,
    TypeBTarget,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, ms, parse_hex};
