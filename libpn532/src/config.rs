// libpn532-rs/libpn532/src/config.rs
//! Driver configuration

use std::time::Duration;

use derive_more::Display;

use crate::utils::ms;

/// Default read timeout for general commands (ms)
pub const COMMAND_TIMEOUT_MS: u64 = 500;

/// Default read timeout for InDataExchange (ms)
pub const EXCHANGE_TIMEOUT_MS: u64 = 5000;

/// Read timeout for SAM/RF setup during initialization (ms)
pub const SETUP_TIMEOUT_MS: u64 = 1000;

/// Default RF timeout for raw exchanges (ms)
pub const RAW_RF_TIMEOUT_MS: u64 = 1000;

/// How the link reacts to framing anomalies the controller is known to
/// produce on noisy lines.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strictness {
    /// Log ACK/checksum/postamble anomalies and keep going.
    #[default]
    #[display(fmt = "tolerant")]
    Tolerant,
    /// Turn every anomaly into an error.
    #[display(fmt = "strict")]
    Strict,
}

/// Timeouts and link behaviour of one driver instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriverConfig {
    /// Read timeout of general commands
    pub command_timeout: Duration,
    /// Read timeout of InDataExchange
    pub exchange_timeout: Duration,
    /// Read timeout of SAM and RF setup during initialization
    pub setup_timeout: Duration,
    /// RF timeout of raw exchanges that do not set their own
    pub raw_rf_timeout: Duration,
    /// Reaction to link anomalies
    pub strictness: Strictness,
    /// Set MxRtyATR/MxRtyPSL/MxRtyPassiveActivation to zero on init
    pub disable_retries: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            command_timeout: ms(COMMAND_TIMEOUT_MS),
            exchange_timeout: ms(EXCHANGE_TIMEOUT_MS),
            setup_timeout: ms(SETUP_TIMEOUT_MS),
            raw_rf_timeout: ms(RAW_RF_TIMEOUT_MS),
            strictness: Strictness::Tolerant,
            disable_retries: true,
        }
    }
}

/// Serial port parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerialConfig {
    /// Port path; the first available port is used when empty
    pub path: Option<String>,
    /// HSU baud rate
    pub baud_rate: u32,
    /// Port-level read timeout
    pub read_timeout: Duration,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            path: None,
            baud_rate: crate::constants::DEFAULT_BAUD_RATE,
            read_timeout: ms(COMMAND_TIMEOUT_MS),
        }
    }
}

impl SerialConfig {
    /// Defaults with an explicit port path.
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }
}
