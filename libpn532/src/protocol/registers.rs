// libpn532-rs/libpn532/src/protocol/registers.rs
//! CIU registers (PN532/C1, 8.6.22) and their bit-fields.

use derive_more::{From, Into};

use crate::types::{BitRate, Framing};

/// CIU registers driven by this crate. Addresses are 16-bit, values 8-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum Register {
    /// General transmit and receive modes
    Mode = 0x6301,
    /// Transmission data rate and framing
    TxMode = 0x6302,
    /// Reception data rate and framing
    RxMode = 0x6303,
    /// Antenna driver pins TX1/TX2
    TxControl = 0x6304,
    /// Automatic transmitter settings
    TxAuto = 0x6305,
    /// Internal sources for the analog module
    TxSel = 0x6306,
    /// Receiver settings
    RxSel = 0x6307,
    /// Bit decoder thresholds
    RxThreshold = 0x6308,
    /// Demodulator settings
    Demod = 0x6309,
    /// Manual receiver tuning
    ManualRcv = 0x630D,
    /// ISO/IEC 14443B framing
    TypeB = 0x630E,
    /// Driver conductance when the field is off
    GsNOff = 0x6313,
    /// Miller modulation width
    ModWidth = 0x6314,
    /// Bit phase adjustment
    TxBitPhase = 0x6315,
    /// Receiver gain and RF level
    RfCfg = 0x6316,
    /// Driver conductance when the field is on
    GsNOn = 0x6317,
    /// P-driver conductance, no modulation
    CwGsP = 0x6318,
    /// P-driver conductance, modulation
    ModGsP = 0x6319,
    /// CIU command
    Command = 0x6331,
    /// Interrupt enable
    CommIEn = 0x6332,
    /// Interrupt enable
    DivIEn = 0x6333,
    /// Interrupt request bits
    CommIRq = 0x6334,
    /// Interrupt request bits
    DivIRq = 0x6335,
    /// Error flags of the last command
    Error = 0x6336,
    /// FIFO level thresholds
    WaterLevel = 0x633B,
    /// Miscellaneous control bits
    Control = 0x633C,
    /// Bit-oriented frame adjustments
    BitFraming = 0x633D,
    /// Bit position of the first collision
    Coll = 0x633E,
}

impl Register {
    /// 16-bit register address.
    pub const fn address(self) -> u16 {
        self as u16
    }

    /// Address as sent in ReadRegister/WriteRegister arguments.
    pub const fn address_bytes(self) -> [u8; 2] {
        (self as u16).to_be_bytes()
    }
}

/// Contiguous bit-field inside an 8-bit register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    shift: u8,
    width: u8,
}

impl Field {
    /// Field of `width` bits starting at bit `shift`.
    pub const fn new(shift: u8, width: u8) -> Self {
        Self { shift, width }
    }

    /// Bits covered by the field.
    pub const fn mask(self) -> u8 {
        (((1u16 << self.width) - 1) << self.shift) as u8
    }

    /// Field value extracted from `reg`.
    pub const fn get(self, reg: u8) -> u8 {
        (reg & self.mask()) >> self.shift
    }

    /// Replace the field, leaving every other bit of `reg` untouched.
    pub const fn set(self, reg: u8, value: u8) -> u8 {
        (reg & !self.mask()) | ((value << self.shift) & self.mask())
    }
}

/// TxMode/RxMode: CRCEn(7) Speed(6..4) InvMod/RxNoErr(3) RxMultiple(2) Framing(1..0)
pub const MODE_CRC_EN: Field = Field::new(7, 1);
/// TxMode/RxMode speed bits
pub const MODE_SPEED: Field = Field::new(4, 3);
/// TxMode/RxMode framing bits
pub const MODE_FRAMING: Field = Field::new(0, 2);
/// TxAuto: Force100ASK(6)
pub const TX_AUTO_FORCE_100_ASK: Field = Field::new(6, 1);
/// BitFraming: StartSend(7) RxAlign(6..4) TxLastBits(2..0)
pub const BIT_FRAMING_TX_LAST_BITS: Field = Field::new(0, 3);

/// Value of a TxMode or RxMode register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From, Into)]
pub struct ModeValue(pub u8);

impl ModeValue {
    /// Raw speed code.
    pub fn speed(self) -> u8 {
        MODE_SPEED.get(self.0)
    }

    /// Value with the speed bits set for `rate`.
    pub fn with_bit_rate(self, rate: BitRate) -> Self {
        Self(MODE_SPEED.set(self.0, rate.code()))
    }

    /// Framing encoded in the value.
    pub fn framing(self) -> Framing {
        Framing::from_code(MODE_FRAMING.get(self.0))
    }

    /// Value with the framing bits replaced.
    pub fn with_framing(self, framing: Framing) -> Self {
        Self(MODE_FRAMING.set(self.0, framing.code()))
    }

    /// CRCEn bit.
    pub fn crc_enabled(self) -> bool {
        MODE_CRC_EN.get(self.0) != 0
    }

    /// Value with CRCEn set or cleared.
    pub fn with_crc(self, enabled: bool) -> Self {
        Self(MODE_CRC_EN.set(self.0, enabled as u8))
    }
}

/// Value of the TxAuto register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From, Into)]
pub struct TxAutoValue(pub u8);

impl TxAutoValue {
    /// Force100ASK bit.
    pub fn force_100_ask(self) -> bool {
        TX_AUTO_FORCE_100_ASK.get(self.0) != 0
    }

    /// Value with Force100ASK set or cleared.
    pub fn with_force_100_ask(self, force: bool) -> Self {
        Self(TX_AUTO_FORCE_100_ASK.set(self.0, force as u8))
    }
}

/// Value of the BitFraming register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From, Into)]
pub struct BitFramingValue(pub u8);

impl BitFramingValue {
    /// Bits of the last byte to transmit; 0 means the whole byte.
    pub fn tx_last_bits(self) -> u8 {
        BIT_FRAMING_TX_LAST_BITS.get(self.0)
    }

    /// Value with TxLastBits replaced; only the low three bits of `bits` count.
    pub fn with_tx_last_bits(self, bits: u8) -> Self {
        Self(BIT_FRAMING_TX_LAST_BITS.set(self.0, bits & 0b111))
    }
}
