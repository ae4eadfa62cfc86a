// libpn532-rs/libpn532/src/protocol/presets.rs
//! Analog register settings per modulation (UM0701-02, analog settings).
//!
//! Values were captured from the register changes the controller applies
//! itself during InListPassiveTarget for each target type. They must be
//! applied as-is before a raw exchange.

use crate::protocol::registers::Register::{self, *};
use crate::types::Modulation;

const TYPE_A: &[(Register, u8)] = &[
    (Control, 0b0001_0000),
    (TxControl, 0b1000_0011),
    (RxThreshold, 0b1000_0101),
    (Demod, 0b0100_1101),
    (GsNOff, 0b0110_1111),
    (TxBitPhase, 0b1000_0111),
    (RfCfg, 0b0101_1001),
    (GsNOn, 0b1111_0100),
    (CwGsP, 0b0011_1111),
    (ModGsP, 0b0001_0001),
];

const TYPE_B: &[(Register, u8)] = &[
    (Control, 0b0001_0000),
    (TxControl, 0b1000_0011),
    (RxThreshold, 0b1000_0101),
    (Demod, 0b0100_1101),
    (GsNOff, 0b0110_1111),
    (RfCfg, 0b0101_1001),
    (GsNOn, 0b1111_1111),
    (CwGsP, 0b0011_1111),
    (ModGsP, 0b0001_0111),
];

const TYPE_F: &[(Register, u8)] = &[
    (Control, 0b0001_0000),
    (TxControl, 0b1000_0011),
    (RxThreshold, 0b1000_0101),
    (Demod, 0b0100_0001),
    (GsNOff, 0b0110_1111),
    (TxBitPhase, 0b1000_1111),
    (RfCfg, 0b0110_1001),
    (GsNOn, 0b1111_1111),
    (CwGsP, 0b0011_1111),
    (ModGsP, 0b0001_0001),
];

/// Analog register values the RF front end needs for `modulation`.
pub fn analog_preset(modulation: Modulation) -> &'static [(Register, u8)] {
    match modulation {
        Modulation::TypeA => TYPE_A,
        Modulation::TypeB => TYPE_B,
        Modulation::TypeF => TYPE_F,
    }
}
