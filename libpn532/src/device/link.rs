// libpn532-rs/libpn532/src/device/link.rs
//! ACK handshake over the byte stream.
//!
//! One call walks Idle -> FrameSent -> AckAwaited -> AckVerified ->
//! ResponseAwaited -> ResponseParsed and always ends back in Idle, whatever
//! the outcome. No retries happen here.

use std::time::Duration;

use log::{debug, error, warn};

use crate::config::Strictness;
use crate::constants::{ACK_FRAME, DEVICE_MARKER, LONG_PREAMBLE_LEN, POSTAMBLE, RESPONSE_HEAD_LEN};
use crate::protocol::checksum::{data_checksum_ok, dcs, lcs};
use crate::protocol::FrameHead;
use crate::transport::Transport;
use crate::utils::HexBytes;
use crate::{Error, Result};

/// Handshake progress of the current command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// No command in flight
    Idle,
    /// Frame written
    FrameSent,
    /// Waiting for the ACK
    AckAwaited,
    /// ACK checked
    AckVerified,
    /// Waiting for the reply frame
    ResponseAwaited,
    /// Reply decoded
    ResponseParsed,
}

/// Frame-level link to the controller over one transport.
pub struct Link {
    transport: Box<dyn Transport>,
    strictness: Strictness,
    label: String,
    state: LinkState,
}

impl Link {
    /// Wrap `transport`; the log label is derived from its name.
    pub fn new(transport: Box<dyn Transport>, strictness: Strictness) -> Self {
        let label = format!("[PN532|{}]", transport.name());
        Self {
            transport,
            strictness,
            label,
            state: LinkState::Idle,
        }
    }

    /// `[PN532|<port>]`
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current handshake state.
    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Current strictness.
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Change how anomalies are handled.
    pub fn set_strictness(&mut self, strictness: Strictness) {
        self.strictness = strictness;
    }

    /// Underlying transport.
    pub fn transport_mut(&mut self) -> &mut dyn Transport {
        &mut *self.transport
    }

    /// Wake the controller from power-down: a long run of zeros followed by
    /// an ACK, then drop whatever the wake-up provoked.
    pub fn wake_up(&mut self) -> Result<()> {
        self.transport.flush()?;
        let mut bytes = vec![0u8; LONG_PREAMBLE_LEN];
        bytes.extend_from_slice(&ACK_FRAME);
        self.transport.send(&bytes)?;
        self.transport.reset_input()
    }

    /// Drop pending bytes in both directions.
    pub fn reset_buffers(&mut self) -> Result<()> {
        self.transport.reset_buffers()
    }

    /// Write `frame` and run the handshake. `Ok(None)` means the controller
    /// stayed silent or, in tolerant mode, sent a head that cannot be
    /// trusted. The returned body has the TFI stripped.
    pub fn send_frame(&mut self, frame: &[u8], timeout: Duration) -> Result<Option<Vec<u8>>> {
        let result = self.exchange(frame, timeout);
        self.transition(LinkState::Idle);
        result
    }

    fn exchange(&mut self, frame: &[u8], timeout: Duration) -> Result<Option<Vec<u8>>> {
        debug!("{} sending {}", self.label, HexBytes(frame));
        self.transport.send(frame)?;
        self.transition(LinkState::FrameSent);

        self.transition(LinkState::AckAwaited);
        let ack = self.transport.receive(ACK_FRAME.len(), timeout)?;
        if ack.is_empty() {
            error!("{} did not get response from PN532", self.label);
            return Ok(None);
        }
        if ack != ACK_FRAME {
            self.anomaly(format!("did not get ACK frame, got {}", HexBytes(&ack)))?;
        }
        self.transition(LinkState::AckVerified);

        self.transition(LinkState::ResponseAwaited);
        let head_bytes = self.transport.receive(RESPONSE_HEAD_LEN, timeout)?;
        if head_bytes.is_empty() {
            debug!("{} no response frame", self.label);
            return Ok(None);
        }
        let head = FrameHead::parse(&head_bytes)?;
        if !head.preamble_ok() {
            self.anomaly(format!(
                "unexpected start of frame, got {}",
                HexBytes(&head.start)
            ))?;
        }
        if !head.length_checksum_ok() {
            if self.strict() {
                return Err(Error::ChecksumMismatch {
                    expected: lcs(head.len),
                    actual: head.lcs,
                });
            }
            error!("{} frame failed length checksum", self.label);
            return Ok(None);
        }
        if head.marker != DEVICE_MARKER {
            if self.strict() {
                return Err(Error::FrameFormat(format!(
                    "unexpected TFI {:#04x}",
                    head.marker
                )));
            }
            error!("{} unexpected TFI byte, got {:02x}", self.label, head.marker);
            return Ok(None);
        }

        let body_len = head.body_len()?;
        let body = self.read_exact(body_len, timeout)?;
        let checksum = self.read_exact(1, timeout)?[0];

        // Checksum and postamble problems are reported only after the ACK
        // has gone out, so the controller never stays in its wait state.
        let mut deferred = None;
        if !data_checksum_ok(head.marker, &body, checksum) {
            if self.strict() {
                deferred = Some(Error::ChecksumMismatch {
                    expected: dcs(head.marker, &body),
                    actual: checksum,
                });
            } else {
                error!("{} frame failed data checksum", self.label);
            }
        }
        let postamble = self.transport.receive(1, timeout)?;
        if postamble.first() != Some(&POSTAMBLE) {
            if self.strict() {
                deferred.get_or_insert_with(|| {
                    Error::FrameFormat(format!("unexpected postamble {}", HexBytes(&postamble)))
                });
            } else {
                warn!("{} unexpected postamble, got {}", self.label, HexBytes(&postamble));
            }
        }

        self.transport.send(&ACK_FRAME)?;
        self.transition(LinkState::ResponseParsed);
        debug!(
            "{} received {}{}",
            self.label,
            HexBytes(&head.as_bytes()),
            HexBytes(&body)
        );

        match deferred {
            Some(e) => Err(e),
            None => Ok(Some(body)),
        }
    }

    /// A short read here means the LEN byte promised more than arrived.
    fn read_exact(&mut self, len: usize, timeout: Duration) -> Result<Vec<u8>> {
        let bytes = self.transport.receive(len, timeout)?;
        if bytes.len() != len {
            return Err(Error::InvalidLength {
                expected: len,
                actual: bytes.len(),
            });
        }
        Ok(bytes)
    }

    fn strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }

    fn anomaly(&self, message: String) -> Result<()> {
        if self.strict() {
            return Err(Error::FrameFormat(message));
        }
        error!("{} {}", self.label, message);
        Ok(())
    }

    fn transition(&mut self, next: LinkState) {
        #[cfg(feature = "diagnostics")]
        log::trace!("{} {:?} -> {:?}", self.label, self.state, next);
        self.state = next;
    }
}
