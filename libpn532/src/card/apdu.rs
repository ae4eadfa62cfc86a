// libpn532-rs/libpn532/src/card/apdu.rs
//! Expected APDU responses and how they are compared.

use std::fmt;

use crate::utils::HexBytes;

/// Response a transaction step expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedApdu {
    /// Any response, or none, is accepted
    Any,
    /// Exact bytes, optionally behind a 0x00 status byte
    Bytes(Vec<u8>),
}

impl From<Vec<u8>> for ExpectedApdu {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for ExpectedApdu {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl ExpectedApdu {
    /// Whether `actual` satisfies this expectation.
    pub fn matches(&self, actual: Option<&[u8]>) -> bool {
        match self {
            Self::Any => true,
            Self::Bytes(expected) => responses_match(expected, actual),
        }
    }
}

impl fmt::Display for ExpectedApdu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Bytes(b) => write!(f, "{}", HexBytes(b)),
        }
    }
}

/// Exact match, or `actual` is `expected` behind a leading 0x00 status byte
/// (which `expected` must not start with itself).
pub fn responses_match(expected: &[u8], actual: Option<&[u8]>) -> bool {
    let Some(actual) = actual else {
        return false;
    };
    if expected == actual {
        return true;
    }
    if expected.is_empty() || actual.is_empty() {
        return false;
    }
    expected[0] != 0x00 && actual[0] == 0x00 && expected == &actual[1..]
}
