#[path = "../common/mod.rs"]
mod common;

use libpn532::constants::{ACK_FRAME, DEVICE_MARKER, HOST_MARKER};
use libpn532::protocol::{Frame, FrameHead};
use proptest::prelude::*;

#[test]
fn firmware_request_matches_wire_bytes() {
    let frame = Frame::encode(0x02, &[]).unwrap();
    assert_eq!(frame, common::fixtures::firmware_request_frame());
}

#[test]
fn reply_frame_decodes() {
    let wire = common::fixtures::response_frame(&common::fixtures::firmware_reply());
    let frame = Frame::decode(&wire).unwrap();
    assert_eq!(frame.marker, DEVICE_MARKER);
    assert_eq!(frame.body, common::fixtures::firmware_reply());

    let head = FrameHead::parse(&wire[..6]).unwrap();
    assert_eq!(head.body_len().unwrap(), 5);
}

#[test]
fn ack_is_rejected_as_information_frame() {
    assert!(Frame::decode(&ACK_FRAME).is_err());
}

#[test]
fn truncated_frame_is_invalid_length() {
    let wire = Frame::encode(0x4A, &[0x01, 0x00]).unwrap();
    match Frame::decode(&wire[..wire.len() - 1]) {
        Err(libpn532::Error::InvalidLength { .. }) => {}
        other => panic!("expected InvalidLength, got {:?}", other),
    }
}

proptest! {
    #[test]
    fn host_frames_roundtrip(command in any::<u8>(), args in prop::collection::vec(any::<u8>(), 0..=249)) {
        let wire = Frame::encode(command, &args).unwrap();
        let frame = Frame::decode(&wire).unwrap();
        prop_assert_eq!(frame.marker, HOST_MARKER);
        prop_assert_eq!(frame.body[0], command);
        prop_assert_eq!(&frame.body[1..], &args[..]);
    }
}
