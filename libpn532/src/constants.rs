// libpn532-rs/libpn532/src/constants.rs
//! Link-layer and chip constants used across the crate

/// Frame preamble and start code: 0x00 0x00 0xFF
pub const PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Frame postamble: 0x00
pub const POSTAMBLE: u8 = 0x00;

/// Frame identifier (TFI) for host->controller frames
pub const HOST_MARKER: u8 = 0xD4;

/// Frame identifier (TFI) for controller->host frames
pub const DEVICE_MARKER: u8 = 0xD5;

/// ACK frame exchanged in both directions after every information frame
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Bytes read as the response head: preamble(3) + LEN + LCS + TFI
pub const RESPONSE_HEAD_LEN: usize = 6;

/// Largest body (command byte + arguments) that fits a normal information
/// frame. LEN counts the TFI too and must fit in one byte.
pub const MAX_BODY_LEN: usize = 254;

/// Number of zero bytes sent ahead of frames that must wake the controller
/// from power-down over HSU.
pub const LONG_PREAMBLE_LEN: usize = 20;

/// HSU baud rate the controller boots with
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// IC byte reported by GetFirmwareVersion on a PN532
pub const PN532_IC: u8 = 0x32;

/// Length of a GetFirmwareVersion response including the echoed code
pub const FIRMWARE_RESPONSE_LEN: usize = 5;

/// CRC_A register preset (ISO/IEC 14443-3)
pub const CRC_A_PRESET: u16 = 0x6363;

/// Default fATR_RES_Timeout index for the VARIOUS_TIMINGS item
pub const ATR_RES_TIMEOUT_DEFAULT: u8 = 0x0B;

/// Largest timeout index accepted by the VARIOUS_TIMINGS item
pub const MAX_TIMEOUT_INDEX: u8 = 0x10;

/// S(DESELECT) broadcast used to release a Type B target before WUPB
pub const DESELECT_BROADCAST: u8 = 0xC2;

/// APf byte opening a REQB/WUPB command
pub const WUPB_APF: u8 = 0x05;

/// PARAM byte selecting WUPB (bit 3) with a single slot
pub const WUPB_PARAM: u8 = 0x08;

/// First byte of every SENSB_RES (ATQB)
pub const SENSB_RES_MARKER: u8 = 0x50;

/// SEL_RES bit announcing ISO/IEC 14443-4 compliance (an ATS follows)
pub const SEL_RES_ISO_DEP: u8 = 0x20;
