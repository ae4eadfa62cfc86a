// libpn532-rs/libpn532/src/protocol/frame.rs
//! Normal information frames and their 6-byte head.

use crate::constants::{DEVICE_MARKER, HOST_MARKER, MAX_BODY_LEN, POSTAMBLE, PREAMBLE, RESPONSE_HEAD_LEN};
use crate::protocol::checksum::{data_checksum_ok, dcs, lcs, length_checksum_ok};
use crate::{Error, Result};

/// Normal information frame.
/// Format: [Preamble+Start(3)] [LEN(1)] [LCS(1)] [TFI(1)] [Body(n)] [DCS(1)] [Postamble(1)]
/// LEN counts TFI + body. TFI is 0xD4 host->controller, 0xD5 controller->host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Frame identifier (TFI)
    pub marker: u8,
    /// Command or response code followed by its data
    pub body: Vec<u8>,
}

impl Frame {
    /// Build a host frame carrying `command` followed by `args`.
    pub fn encode(command: u8, args: &[u8]) -> Result<Vec<u8>> {
        let mut body = Vec::with_capacity(1 + args.len());
        body.push(command);
        body.extend_from_slice(args);
        Self::encode_with_marker(HOST_MARKER, &body)
    }

    /// Build a frame with an explicit frame identifier. Controller replies
    /// use [`DEVICE_MARKER`].
    pub fn encode_with_marker(marker: u8, body: &[u8]) -> Result<Vec<u8>> {
        if body.len() > MAX_BODY_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_BODY_LEN,
                actual: body.len(),
            });
        }

        let len = (body.len() + 1) as u8;
        let mut out = Vec::with_capacity(PREAMBLE.len() + 3 + body.len() + 2);
        out.extend_from_slice(&PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.push(marker);
        out.extend_from_slice(body);
        out.push(dcs(marker, body));
        out.push(POSTAMBLE);
        Ok(out)
    }

    /// Build a controller reply frame, as seen on the wire by the host.
    pub fn encode_response(body: &[u8]) -> Result<Vec<u8>> {
        Self::encode_with_marker(DEVICE_MARKER, body)
    }

    /// Decode a complete frame, validating every field.
    pub fn decode(frame: &[u8]) -> Result<Frame> {
        if frame.len() < RESPONSE_HEAD_LEN {
            return Err(Error::InvalidLength {
                expected: RESPONSE_HEAD_LEN,
                actual: frame.len(),
            });
        }

        let head = FrameHead::parse(&frame[..RESPONSE_HEAD_LEN])?;
        if !head.preamble_ok() {
            return Err(Error::FrameFormat("invalid preamble".into()));
        }
        if !head.length_checksum_ok() {
            return Err(Error::ChecksumMismatch {
                expected: lcs(head.len),
                actual: head.lcs,
            });
        }
        let body_len = head.body_len()?;

        let required_len = RESPONSE_HEAD_LEN + body_len + 2;
        if frame.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let body = &frame[RESPONSE_HEAD_LEN..RESPONSE_HEAD_LEN + body_len];
        let dcs_actual = frame[RESPONSE_HEAD_LEN + body_len];
        if !data_checksum_ok(head.marker, body, dcs_actual) {
            return Err(Error::ChecksumMismatch {
                expected: dcs(head.marker, body),
                actual: dcs_actual,
            });
        }

        if frame[required_len - 1] != POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        Ok(Frame {
            marker: head.marker,
            body: body.to_vec(),
        })
    }
}

/// First six bytes of a frame: preamble, LEN, LCS and TFI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHead {
    /// Preamble and start code
    pub start: [u8; 3],
    /// LEN
    pub len: u8,
    /// LCS
    pub lcs: u8,
    /// TFI
    pub marker: u8,
}

impl FrameHead {
    /// Split the first six bytes of `bytes` into their fields.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != RESPONSE_HEAD_LEN {
            return Err(Error::InvalidLength {
                expected: RESPONSE_HEAD_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            start: [bytes[0], bytes[1], bytes[2]],
            len: bytes[3],
            lcs: bytes[4],
            marker: bytes[5],
        })
    }

    /// Preamble and start code are `00 00 FF`.
    pub fn preamble_ok(&self) -> bool {
        self.start == PREAMBLE
    }

    /// LEN + LCS is zero modulo 256.
    pub fn length_checksum_ok(&self) -> bool {
        length_checksum_ok(self.len, self.lcs)
    }

    /// Body bytes that follow the head (LEN minus the TFI byte).
    pub fn body_len(&self) -> Result<usize> {
        (self.len as usize).checked_sub(1).ok_or(Error::InvalidLength {
            expected: 1,
            actual: 0,
        })
    }

    /// The head back in wire order.
    pub fn as_bytes(&self) -> [u8; RESPONSE_HEAD_LEN] {
        [self.start[0], self.start[1], self.start[2], self.len, self.lcs, self.marker]
    }
}
