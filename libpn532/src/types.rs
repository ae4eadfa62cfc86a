// libpn532-rs/libpn532/src/types.rs
//! Value types shared by the protocol and device layers.

use derive_more::Display;

use crate::Error;

/// Radio bit rate of the contactless interface.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitRate {
    /// 106 kbps
    #[default]
    #[display(fmt = "106 kbps")]
    Kbps106,
    /// 212 kbps
    #[display(fmt = "212 kbps")]
    Kbps212,
    /// 424 kbps
    #[display(fmt = "424 kbps")]
    Kbps424,
    /// 848 kbps
    #[display(fmt = "848 kbps")]
    Kbps848,
}

impl BitRate {
    /// 3-bit speed code used by the TxMode/RxMode registers.
    pub const fn code(self) -> u8 {
        match self {
            Self::Kbps106 => 0b000,
            Self::Kbps212 => 0b001,
            Self::Kbps424 => 0b010,
            Self::Kbps848 => 0b011,
        }
    }

    /// Bit rate for a speed in kbps, if the controller supports it.
    pub fn from_kbps(kbps: u16) -> Option<Self> {
        match kbps {
            106 => Some(Self::Kbps106),
            212 => Some(Self::Kbps212),
            424 => Some(Self::Kbps424),
            848 => Some(Self::Kbps848),
            _ => None,
        }
    }
}

/// 2-bit framing code of the TxMode/RxMode registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framing {
    /// ISO/IEC 14443A and MIFARE
    TypeA,
    /// Active communication (DEP)
    Dep,
    /// FeliCa
    Felica,
    /// ISO/IEC 14443B
    TypeB,
}

impl Framing {
    /// 2-bit register code.
    pub const fn code(self) -> u8 {
        match self {
            Self::TypeA => 0b00,
            Self::Dep => 0b01,
            Self::Felica => 0b10,
            Self::TypeB => 0b11,
        }
    }

    /// Framing for the low two bits of `code`.
    pub const fn from_code(code: u8) -> Self {
        match code & 0b11 {
            0b00 => Self::TypeA,
            0b01 => Self::Dep,
            0b10 => Self::Felica,
            _ => Self::TypeB,
        }
    }
}

/// Modulation scheme the controller transmits and receives with.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modulation {
    /// ISO/IEC 14443A
    #[default]
    #[display(fmt = "A")]
    TypeA,
    /// ISO/IEC 14443B
    #[display(fmt = "B")]
    TypeB,
    /// FeliCa (JIS X 6319-4)
    #[display(fmt = "F")]
    TypeF,
}

impl Modulation {
    /// Register framing used for this modulation.
    pub const fn framing(self) -> Framing {
        match self {
            Self::TypeA => Framing::TypeA,
            Self::TypeB => Framing::TypeB,
            Self::TypeF => Framing::Felica,
        }
    }

    /// BrTy value passed to InListPassiveTarget for this modulation.
    pub const fn passive_activation_code(self) -> u8 {
        match self {
            Self::TypeA => 0x00,
            Self::TypeF => 0x01,
            Self::TypeB => 0x03,
        }
    }
}

/// Identification returned by GetFirmwareVersion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmwareVersion {
    /// IC type, 0x32 for a PN532
    pub ic: u8,
    /// Firmware version
    pub version: u8,
    /// Firmware revision
    pub revision: u8,
    /// Supported card types bitmap
    pub support: u8,
}

/// ISO/IEC 14443 Type A target as reported by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeATarget {
    /// Logical target number (Tg)
    pub target_id: u8,
    /// SENS_RES (ATQA)
    pub sens_res: [u8; 2],
    /// SEL_RES (SAK)
    pub sel_res: u8,
    /// NFCID1 (UID)
    pub nfcid: Vec<u8>,
    /// ATS without its length byte, empty for non ISO-DEP targets
    pub ats: Vec<u8>,
}

impl TypeATarget {
    /// Whether SEL_RES announces ISO-DEP support.
    pub fn supports_iso_dep(&self) -> bool {
        self.sel_res & crate::constants::SEL_RES_ISO_DEP != 0
    }
}

/// ISO/IEC 14443 Type B target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeBTarget {
    /// Logical target number (Tg)
    pub target_id: u8,
    /// SENSB_RES (ATQB), starting with 0x50
    pub sensb_res: Vec<u8>,
    /// ATTRIB_RES as reported by the listing
    pub attrib_res: Vec<u8>,
}

impl TypeBTarget {
    /// NFCID0 (PUPI), bytes 1..5 of SENSB_RES.
    pub fn nfcid(&self) -> &[u8] {
        self.sensb_res.get(1..5).unwrap_or(&[])
    }

    /// Application family identifier, first byte of the application data.
    pub fn afi(&self) -> Option<u8> {
        self.sensb_res.get(5).copied()
    }
}

/// Target found by a discovery command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DetectedTarget {
    /// Type A target
    TypeA(TypeATarget),
    /// Type B target
    TypeB(TypeBTarget),
}

impl DetectedTarget {
    /// Logical target number (Tg).
    pub fn target_id(&self) -> u8 {
        match self {
            Self::TypeA(t) => t.target_id,
            Self::TypeB(t) => t.target_id,
        }
    }

    /// NFCID1 for Type A, PUPI for Type B.
    pub fn nfcid(&self) -> &[u8] {
        match self {
            Self::TypeA(t) => &t.nfcid,
            Self::TypeB(t) => t.nfcid(),
        }
    }

    /// Modulation the target answered to.
    pub fn modulation(&self) -> Modulation {
        match self {
            Self::TypeA(_) => Modulation::TypeA,
            Self::TypeB(_) => Modulation::TypeB,
        }
    }
}

impl From<TypeATarget> for DetectedTarget {
    fn from(t: TypeATarget) -> Self {
        Self::TypeA(t)
    }
}

impl From<TypeBTarget> for DetectedTarget {
    fn from(t: TypeBTarget) -> Self {
        Self::TypeB(t)
    }
}

/// Result of a polling operation. An empty field is an expected outcome and
/// is kept apart from genuine failures.
#[derive(Debug)]
pub enum PollOutcome<T> {
    /// A target answered
    Found(T),
    /// The field is empty
    NotFound,
    /// The poll went wrong
    Failed(Error),
}

impl<T> PollOutcome<T> {
    /// True for [`PollOutcome::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// True for [`PollOutcome::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// The found target, discarding the distinction between a miss and a
    /// failure.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(t) => Some(t),
            _ => None,
        }
    }

    /// `Ok(Some)` when found, `Ok(None)` for an empty field.
    pub fn into_result(self) -> Result<Option<T>, Error> {
        match self {
            Self::Found(t) => Ok(Some(t)),
            Self::NotFound => Ok(None),
            Self::Failed(e) => Err(e),
        }
    }

    /// Transform the found target.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PollOutcome<U> {
        match self {
            Self::Found(t) => PollOutcome::Found(f(t)),
            Self::NotFound => PollOutcome::NotFound,
            Self::Failed(e) => PollOutcome::Failed(e),
        }
    }
}

impl<T> From<Result<Option<T>, Error>> for PollOutcome<T> {
    fn from(result: Result<Option<T>, Error>) -> Self {
        match result {
            Ok(Some(t)) => Self::Found(t),
            Ok(None) => Self::NotFound,
            Err(e) => Self::Failed(e),
        }
    }
}
