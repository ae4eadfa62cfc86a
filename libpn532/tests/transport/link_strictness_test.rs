#[path = "../common/mod.rs"]
mod common;

use libpn532::config::Strictness;
use libpn532::device::{Link, LinkState};
use libpn532::protocol::Frame;
use libpn532::test_support::SharedMock;
use libpn532::utils::ms;
use libpn532::Error;

fn link(mock: &SharedMock, strictness: Strictness) -> Link {
    common::helpers::init_logging();
    Link::new(mock.boxed(), strictness)
}

fn request() -> Vec<u8> {
    Frame::encode(0x02, &[]).unwrap()
}

fn reply_with_bad_dcs() -> Vec<u8> {
    let mut wire = common::fixtures::response_frame(&common::fixtures::firmware_reply());
    let idx = wire.len() - 2;
    wire[idx] ^= 0xFF;
    wire
}

#[test]
fn good_exchange_acks_reply() {
    let mock = SharedMock::new();
    mock.borrow_mut().push_exchange(&common::fixtures::firmware_reply());
    let mut link = link(&mock, Strictness::Strict);

    let body = link.send_frame(&request(), ms(100)).unwrap();
    assert_eq!(body, Some(common::fixtures::firmware_reply()));
    assert_eq!(link.state(), LinkState::Idle);
    assert_eq!(mock.borrow().sent.last().unwrap(), &vec![0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00]);
}

#[test]
fn tolerant_link_accepts_bad_data_checksum() {
    let mock = SharedMock::new();
    {
        let mut m = mock.borrow_mut();
        m.push_ack();
        m.push_bytes(&reply_with_bad_dcs());
    }
    let mut link = link(&mock, Strictness::Tolerant);
    let body = link.send_frame(&request(), ms(100)).unwrap();
    assert_eq!(body, Some(common::fixtures::firmware_reply()));
}

#[test]
fn strict_link_reports_bad_checksum_after_ack() {
    let mock = SharedMock::new();
    {
        let mut m = mock.borrow_mut();
        m.push_ack();
        m.push_bytes(&reply_with_bad_dcs());
    }
    let mut link = link(&mock, Strictness::Strict);
    match link.send_frame(&request(), ms(100)) {
        Err(Error::ChecksumMismatch { .. }) => {}
        other => panic!("expected ChecksumMismatch, got {:?}", other),
    }
    // the controller was still acknowledged
    assert_eq!(mock.borrow().sent.len(), 2);
    assert_eq!(link.state(), LinkState::Idle);
}

#[test]
fn missing_ack_is_silence() {
    let mock = SharedMock::new();
    let mut link = link(&mock, Strictness::Strict);
    assert_eq!(link.send_frame(&request(), ms(100)).unwrap(), None);
    assert_eq!(link.state(), LinkState::Idle);
}

#[test]
fn truncated_reply_is_invalid_length() {
    let mock = SharedMock::new();
    {
        let mut m = mock.borrow_mut();
        m.push_ack();
        let wire = common::fixtures::response_frame(&common::fixtures::firmware_reply());
        m.push_bytes(&wire[..8]);
    }
    let mut link = link(&mock, Strictness::Tolerant);
    match link.send_frame(&request(), ms(100)) {
        Err(Error::InvalidLength { .. }) => {}
        other => panic!("expected InvalidLength, got {:?}", other),
    }
}
