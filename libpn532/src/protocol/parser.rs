// libpn532-rs/libpn532/src/protocol/parser.rs
//! Bounds-checked accessors shared by the reply parsers.

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Read a length byte at `idx` followed by that many bytes. Returns the
/// bytes and the index just past them.
pub fn length_prefixed_at(data: &[u8], idx: usize) -> Result<(&[u8], usize)> {
    let len = byte_at(data, idx)? as usize;
    let bytes = slice_at(data, idx + 1, len)?;
    Ok((bytes, idx + 1 + len))
}

/// Ensure the first byte (response code) equals `expected` and that at
/// least one byte exists in the slice. Returns UnexpectedResponse on mismatch.
pub fn expect_response_code(data: &[u8], expected: u8) -> Result<()> {
    let actual = byte_at(data, 0)?;
    if actual != expected {
        return Err(Error::UnexpectedResponse { expected, actual });
    }
    Ok(())
}
