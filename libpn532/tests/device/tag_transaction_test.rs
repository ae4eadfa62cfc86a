#[path = "../common/mod.rs"]
mod common;

use libpn532::backend::NfcBackend;
use libpn532::card::{ExpectedApdu, Tag};

#[test]
fn select_and_read_through_backend() {
    let (mock, mut dev) = common::helpers::initialized_mock_device().unwrap();
    mock.borrow_mut().push_exchange(&common::fixtures::poll_a_reply());
    let target = dev.poll_a().found().unwrap();
    let tag = Tag::new(target);
    {
        let mut m = mock.borrow_mut();
        m.push_exchange(&[0x41, 0x00, 0x90, 0x00]);
        m.push_exchange(&[0x41, 0x00, 0xCA, 0xFE, 0x90, 0x00]);
    }

    let backend: &mut dyn NfcBackend = &mut dev;
    let ok = tag
        .transact(
            backend,
            &[
                vec![0x00, 0xA4, 0x04, 0x00, 0x02, 0xF0, 0x01],
                vec![0x00, 0xB0, 0x00, 0x00, 0x00],
            ],
            &[vec![0x90, 0x00].into(), ExpectedApdu::Any],
        )
        .unwrap();
    assert!(ok);
    assert_eq!(mock.borrow().command_count(0x40), 2);
}

#[test]
fn failed_exchange_stops_transaction() {
    let (mock, mut dev) = common::helpers::initialized_mock_device().unwrap();
    let tag = Tag::new(libpn532::TypeATarget {
        target_id: 1,
        sens_res: [0x00, 0x04],
        sel_res: 0x20,
        nfcid: common::fixtures::sample_nfcid(),
        ats: vec![],
    });
    // status 0x01: timeout on the RF side
    mock.borrow_mut().push_exchange(&[0x41, 0x01]);

    let ok = tag
        .transact(
            &mut dev,
            &[vec![0x00, 0xB0, 0x00, 0x00, 0x00], vec![0x00]],
            &[vec![0x90, 0x00].into(), ExpectedApdu::Any],
        )
        .unwrap();
    assert!(!ok);
    assert_eq!(mock.borrow().command_count(0x40), 1);
}
