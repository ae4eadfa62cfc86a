// libpn532-rs/libpn532/src/protocol/responses.rs
//! Decoding of controller replies. Every function here takes the payload
//! with the echoed command code already stripped.

use crate::constants::{PN532_IC, SENSB_RES_MARKER, SEL_RES_ISO_DEP};
use crate::protocol::parser::{byte_at, ensure_len, length_prefixed_at, slice_at};
use crate::types::{DetectedTarget, FirmwareVersion, Modulation, TypeATarget, TypeBTarget};
use crate::{Error, Result};

/// SENSB_RES length reported inside InListPassiveTarget target data
pub const SENSB_RES_LEN: usize = 12;

impl FirmwareVersion {
    /// Parse `[IC, Ver, Rev, Support]`.
    pub fn parse(payload: &[u8]) -> Result<Self> {
        let b = slice_at(payload, 0, 4)?;
        Ok(Self {
            ic: b[0],
            version: b[1],
            revision: b[2],
            support: b[3],
        })
    }

    /// True when the IC byte identifies a PN532.
    pub fn is_pn532(&self) -> bool {
        self.ic == PN532_IC
    }
}

impl TypeATarget {
    /// Parse one TargetData block of a 106 kbps Type A listing. ATS is only
    /// present for ISO-DEP targets. Returns the target and bytes consumed.
    pub fn from_target_data(data: &[u8]) -> Result<(Self, usize)> {
        let target_id = byte_at(data, 0)?;
        let sens = slice_at(data, 1, 2)?;
        let sel_res = byte_at(data, 3)?;
        let (nfcid, mut idx) = length_prefixed_at(data, 4)?;
        let mut ats = Vec::new();
        if sel_res & SEL_RES_ISO_DEP != 0 && idx < data.len() {
            // ATS length byte counts itself
            let ats_len = data[idx] as usize;
            let body = ats_len.saturating_sub(1);
            ats = slice_at(data, idx + 1, body)?.to_vec();
            idx += 1 + body;
        }
        Ok((
            Self {
                target_id,
                sens_res: [sens[0], sens[1]],
                sel_res,
                nfcid: nfcid.to_vec(),
                ats,
            },
            idx,
        ))
    }
}

impl TypeBTarget {
    /// Parse one TargetData block of a 106 kbps Type B listing:
    /// Tg, ATQB(12), ATTRIB_RES length, ATTRIB_RES.
    pub fn from_target_data(data: &[u8]) -> Result<(Self, usize)> {
        let target_id = byte_at(data, 0)?;
        let sensb_res = slice_at(data, 1, SENSB_RES_LEN)?;
        if sensb_res[0] != SENSB_RES_MARKER {
            return Err(Error::FrameFormat(format!(
                "SENSB_RES must start with {:#04x}, got {:#04x}",
                SENSB_RES_MARKER, sensb_res[0]
            )));
        }
        let (attrib_res, idx) = length_prefixed_at(data, 1 + SENSB_RES_LEN)?;
        Ok((
            Self {
                target_id,
                sensb_res: sensb_res.to_vec(),
                attrib_res: attrib_res.to_vec(),
            },
            idx,
        ))
    }
}

/// Parse a single-target Type A poll reply: `[NbTg, TargetData...]`.
///
/// The ATS length byte is honoured whenever it is present, and a missing one
/// leaves the ATS empty. NbTg = 0 means nothing answered.
pub fn parse_poll_a(payload: &[u8]) -> Result<Option<TypeATarget>> {
    if byte_at(payload, 0)? == 0 {
        return Ok(None);
    }
    let data = &payload[1..];
    let target_id = byte_at(data, 0)?;
    let sens = slice_at(data, 1, 2)?;
    let sel_res = byte_at(data, 3)?;
    let (nfcid, idx) = length_prefixed_at(data, 4)?;
    let ats = match data.get(idx) {
        Some(&len) => slice_at(data, idx + 1, (len as usize).saturating_sub(1))?.to_vec(),
        None => Vec::new(),
    };
    Ok(Some(TypeATarget {
        target_id,
        sens_res: [sens[0], sens[1]],
        sel_res,
        nfcid: nfcid.to_vec(),
        ats,
    }))
}

/// Parse an InListPassiveTarget reply holding up to NbTg targets.
pub fn parse_target_list(modulation: Modulation, payload: &[u8]) -> Result<Vec<DetectedTarget>> {
    let count = byte_at(payload, 0)? as usize;
    let mut rest = &payload[1..];
    let mut targets = Vec::with_capacity(count);
    for _ in 0..count {
        let (target, used): (DetectedTarget, usize) = match modulation {
            Modulation::TypeA => {
                let (t, used) = TypeATarget::from_target_data(rest)?;
                (t.into(), used)
            }
            Modulation::TypeB => {
                let (t, used) = TypeBTarget::from_target_data(rest)?;
                (t.into(), used)
            }
            Modulation::TypeF => {
                return Err(Error::unsupported("listing Type F targets"));
            }
        };
        targets.push(target);
        rest = &rest[used..];
    }
    Ok(targets)
}

/// Split the status byte off an InDataExchange/InCommunicateThru reply.
pub fn split_status(payload: &[u8]) -> Result<(u8, &[u8])> {
    ensure_len(payload, 1)?;
    Ok((payload[0], &payload[1..]))
}
