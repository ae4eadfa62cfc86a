// libpn532-rs/libpn532/src/error.rs
//! Crate error type.

use thiserror::Error;

/// 共通エラー型
///
/// Every fallible operation of the crate returns this.
#[derive(Error, Debug)]
pub enum Error {
    /// No controller or serial port to open
    #[error("device not found")]
    DeviceNotFound,

    /// I/O failure on the transport
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // シリアル実装を後から有効化できるように optional dependency にしている
    /// Serial port failure
    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// The controller stayed silent where a reply was required
    #[error("no response for command {command:#04x}")]
    NoResponse {
        /// Command code that went unanswered
        command: u8,
    },

    /// A frame or reply is shorter or longer than its layout requires
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Length required
        expected: usize,
        /// Length seen
        actual: usize,
    },

    /// LCS or DCS does not close
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// Checksum computed locally
        expected: u8,
        /// Checksum on the wire
        actual: u8,
    },

    /// Preamble, marker or postamble out of place
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// The reply did not echo the command code plus one
    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse {
        /// Echo expected
        expected: u8,
        /// Code received
        actual: u8,
    },

    /// GetFirmwareVersion did not identify a PN532
    #[error("firmware mismatch: GetFirmwareVersion returned {response}")]
    FirmwareMismatch {
        /// Raw reply, as hex
        response: String,
    },

    /// The backend or modulation does not provide this operation
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl Error {
    /// True for errors caused by a response that did not follow the link or
    /// command protocol (echoed code, checksum, marker, framing).
    pub fn is_protocol_violation(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedResponse { .. } | Self::ChecksumMismatch { .. } | Self::FrameFormat(_)
        )
    }

    /// True when the controller did not answer.
    pub fn is_no_response(&self) -> bool {
        matches!(self, Self::NoResponse { .. })
    }

    pub(crate) fn unsupported(operation: &str) -> Self {
        Self::UnsupportedOperation(operation.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
