#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::{Register, RfConfigItem};

#[test]
fn read_populates_cache() {
    let (mock, mut dev) = common::helpers::initialized_mock_device().unwrap();
    mock.borrow_mut().push_exchange(&[0x07, 0x80, 0x00]);

    let regs = [Register::TxMode, Register::BitFraming];
    assert_eq!(dev.read_registers(&regs, true).unwrap(), vec![0x80, 0x00]);
    assert_eq!(dev.read_registers(&regs, true).unwrap(), vec![0x80, 0x00]);
    assert_eq!(mock.borrow().command_count(0x06), 1);
    assert_eq!(
        mock.borrow().sent_frames()[0].body,
        vec![0x06, 0x63, 0x02, 0x63, 0x3D]
    );
}

#[test]
fn write_sends_only_changed_pairs() {
    let (mock, mut dev) = common::helpers::initialized_mock_device().unwrap();
    {
        let mut m = mock.borrow_mut();
        m.push_exchange(&[0x09]);
        m.push_exchange(&[0x09]);
    }
    dev.write_registers(&[(Register::TxMode, 0x80), (Register::RxMode, 0x80)], true)
        .unwrap();
    dev.write_registers(&[(Register::TxMode, 0x80), (Register::RxMode, 0x00)], true)
        .unwrap();

    let frames = mock.borrow().sent_frames();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1].body, vec![0x08, 0x63, 0x03, 0x00]);
}

#[test]
fn polling_invalidates_caches() {
    let (mock, mut dev) = common::helpers::initialized_mock_device().unwrap();
    {
        let mut m = mock.borrow_mut();
        m.push_exchange(&[0x09]);
        m.push_exchange(&common::fixtures::poll_a_empty_reply());
        m.push_exchange(&[0x09]);
    }
    dev.write_registers(&[(Register::TxMode, 0x80)], true).unwrap();
    assert!(dev.poll_a().is_not_found());
    dev.write_registers(&[(Register::TxMode, 0x80)], true).unwrap();
    assert_eq!(mock.borrow().command_count(0x08), 2);
}

#[test]
fn rf_configuration_is_cached_by_item() {
    let (mock, mut dev) = common::helpers::initialized_mock_device().unwrap();
    {
        let mut m = mock.borrow_mut();
        m.push_exchange(&[0x33]);
        m.push_exchange(&[0x33]);
    }
    dev.rf_configuration(RfConfigItem::MaxRtyCom, &[0x00], true).unwrap();
    dev.rf_configuration(RfConfigItem::MaxRtyCom, &[0x00], true).unwrap();
    dev.rf_configuration(RfConfigItem::MaxRtyCom, &[0x01], true).unwrap();
    assert_eq!(mock.borrow().command_count(0x32), 2);
}

#[test]
fn mute_and_unmute_always_go_out() {
    let (mock, mut dev) = common::helpers::initialized_mock_device().unwrap();
    {
        let mut m = mock.borrow_mut();
        for _ in 0..3 {
            m.push_exchange(&[0x33]);
        }
    }
    dev.mute().unwrap();
    dev.mute().unwrap();
    dev.unmute().unwrap();

    let bodies: Vec<Vec<u8>> = mock.borrow().sent_frames().into_iter().map(|f| f.body).collect();
    assert_eq!(
        bodies,
        vec![
            vec![0x32, 0x01, 0x02],
            vec![0x32, 0x01, 0x02],
            vec![0x32, 0x01, 0x03],
        ]
    );
}
