// libpn532-rs/libpn532/src/protocol/checksum.rs
//! Link-frame checksums and the ISO/IEC 14443-3 CRC_A.

use crate::constants::CRC_A_PRESET;

/// Compute Length Checksum (LCS) for an information frame
/// LCS = 0x100 - LEN (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute Data Checksum (DCS) over the frame identifier and body
/// DCS = 0x100 - ((TFI + sum(body)) & 0xff)
pub fn dcs(marker: u8, body: &[u8]) -> u8 {
    let sum = body.iter().fold(marker, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}

/// LEN + LCS must be zero modulo 256.
pub fn length_checksum_ok(len: u8, lcs: u8) -> bool {
    len.wrapping_add(lcs) == 0
}

/// TFI + sum(body) + DCS must be zero modulo 256.
pub fn data_checksum_ok(marker: u8, body: &[u8], dcs: u8) -> bool {
    body.iter()
        .fold(marker.wrapping_add(dcs), |acc, &b| acc.wrapping_add(b))
        == 0
}

/// CRC_A (ISO/IEC 14443-3 Annex B), returned least significant byte first.
pub fn crc_a(data: &[u8]) -> [u8; 2] {
    let crc = data.iter().fold(CRC_A_PRESET, |crc, &byte| {
        let mut b = byte ^ (crc & 0x00FF) as u8;
        b ^= b << 4;
        let b = u16::from(b);
        (crc >> 8) ^ (b << 8) ^ (b << 3) ^ (b >> 4)
    });
    crc.to_le_bytes()
}

/// Append CRC_A to `data`, for frames sent through InCommunicateThru where
/// the controller does not add the CRC itself.
pub fn with_crc_a(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + 2);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc_a(data));
    out
}
