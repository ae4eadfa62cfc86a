#[path = "../common/mod.rs"]
mod common;

use libpn532::transport::{MockTransport, Transport};
use libpn532::utils::ms;

#[test]
fn replies_are_one_byte_stream() {
    let mut t = MockTransport::new();
    t.push_exchange(&common::fixtures::firmware_reply());

    let ack = t.receive(6, ms(10)).unwrap();
    assert_eq!(ack, vec![0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00]);
    let rest = t.receive(64, ms(10)).unwrap();
    assert_eq!(rest, common::fixtures::response_frame(&common::fixtures::firmware_reply()));
    assert!(t.receive(1, ms(10)).unwrap().is_empty());
    assert_eq!(t.reads.len(), 3);
}

#[test]
fn sent_frames_skip_acks_and_wake_bytes() {
    let mut t = MockTransport::new();
    let mut wake = vec![0u8; 20];
    wake.extend_from_slice(&common::fixtures::firmware_request_frame());
    t.send(&wake).unwrap();
    t.send(&[0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00]).unwrap();

    let frames = t.sent_frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].body, vec![0x02]);
    assert_eq!(t.command_count(0x02), 1);
}

#[test]
fn boxed_transport_delegates() {
    let mut t: Box<dyn Transport> = Box::new(MockTransport::new());
    t.send(&[0x01]).unwrap();
    t.reset_buffers().unwrap();
    t.flush().unwrap();
    assert_eq!(t.name(), "mock");
}
