// libpn532-rs/libpn532/src/card/mod.rs
//! Activated targets and APDU transactions with them.

use log::{debug, error};

use crate::backend::NfcBackend;
use crate::types::{DetectedTarget, Modulation};
use crate::utils::HexBytes;
use crate::Result;

mod apdu;
pub use apdu::{responses_match, ExpectedApdu};

/// Activated target plus the ISO-DEP exchange helpers used by tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    target: DetectedTarget,
}

impl Tag {
    /// Wrap a target reported by a poll or a listing.
    pub fn new(target: impl Into<DetectedTarget>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// The target as it was detected.
    pub fn target(&self) -> &DetectedTarget {
        &self.target
    }

    /// Logical target number (Tg) assigned by the controller.
    pub fn target_id(&self) -> u8 {
        self.target.target_id()
    }

    /// NFCID1 for Type A, PUPI for Type B.
    pub fn nfcid(&self) -> &[u8] {
        self.target.nfcid()
    }

    /// Modulation the target was found with.
    pub fn modulation(&self) -> Modulation {
        self.target.modulation()
    }

    /// Exchange one APDU with this target. An error status from the
    /// controller yields `None`.
    pub fn transceive(&self, backend: &mut dyn NfcBackend, data: &[u8]) -> Result<Option<Vec<u8>>> {
        let timeout = backend.exchange_timeout();
        backend.in_data_exchange(self.target_id(), data, timeout)
    }

    /// Send each command and check its response, stopping at the first
    /// mismatch. Extra commands or responses beyond the shorter list are
    /// ignored.
    pub fn transact(
        &self,
        backend: &mut dyn NfcBackend,
        commands: &[Vec<u8>],
        responses: &[ExpectedApdu],
    ) -> Result<bool> {
        debug!(
            "{} starting transaction with {} pairs",
            backend.label(),
            commands.len().min(responses.len())
        );
        for (command, expected) in commands.iter().zip(responses) {
            let rsp = self.transceive(backend, command)?;
            if !expected.matches(rsp.as_deref()) {
                let label = backend.label();
                match &rsp {
                    Some(r) => error!("{} unexpected APDU: received {}, expected {}", label, HexBytes(r), expected),
                    None => error!("{} unexpected APDU: received None, expected {}", label, expected),
                }
                return Ok(false);
            }
        }
        Ok(true)
    }
}
