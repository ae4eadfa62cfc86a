// fixtures.rs: provides commonly used test payloads/frames

use libpn532::protocol::Frame;

/// Decode a hex fixture; spaces are allowed for readability.
pub fn bytes(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str.replace(' ', "")).expect("valid hex fixture")
}

/// GetFirmwareVersion reply: PN532, v1.6, all card types
pub fn firmware_reply() -> Vec<u8> {
    bytes("03 32 01 06 07")
}

pub fn firmware_request_frame() -> Vec<u8> {
    bytes("00 00 ff 02 fe d4 02 2a 00")
}

pub fn sample_nfcid() -> Vec<u8> {
    vec![0x01, 0x02, 0x03, 0x04]
}

/// InListPassiveTarget reply with one ISO-DEP Type A target and ATS [0x75]
pub fn poll_a_reply() -> Vec<u8> {
    bytes("4b 01 01 00 04 20 04 01 02 03 04 02 75")
}

pub fn poll_a_empty_reply() -> Vec<u8> {
    bytes("4b 00")
}

pub fn sensb_res() -> Vec<u8> {
    bytes("50 a1 b2 c3 d4 00 00 00 00 00 71 85")
}

/// InListPassiveTarget reply with one Type B target and a 1-byte ATTRIB_RES
pub fn poll_b_list_reply() -> Vec<u8> {
    let mut v = bytes("4b 01 01");
    v.extend(sensb_res());
    v.extend(bytes("01 00"));
    v
}

pub fn response_frame(body: &[u8]) -> Vec<u8> {
    Frame::encode_response(body).expect("body fits a frame")
}
