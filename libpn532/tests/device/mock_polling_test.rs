#[path = "../common/mod.rs"]
mod common;

use libpn532::{Error, Modulation, PollOutcome};

#[test]
fn poll_a_finds_iso_dep_target() {
    let (mock, mut dev) = common::helpers::initialized_mock_device().unwrap();
    mock.borrow_mut().push_exchange(&common::fixtures::poll_a_reply());

    let target = match dev.poll_a() {
        PollOutcome::Found(t) => t,
        other => panic!("expected a target, got {:?}", other),
    };
    assert!(target.supports_iso_dep());
    assert_eq!(target.nfcid, common::fixtures::sample_nfcid());

    let frames = mock.borrow().sent_frames();
    assert_eq!(frames[0].body, vec![0x4A, 0x01, 0x00]);
}

#[test]
fn poll_a_empty_field() {
    let (mock, mut dev) = common::helpers::initialized_mock_device().unwrap();
    mock.borrow_mut().push_exchange(&common::fixtures::poll_a_empty_reply());
    assert!(dev.poll_a().is_not_found());
}

#[test]
fn poll_a_silence_is_a_miss() {
    let (_mock, mut dev) = common::helpers::initialized_mock_device().unwrap();
    assert!(dev.poll_a().is_not_found());
}

#[test]
fn poll_b_deselects_and_wakes() {
    let (mock, mut dev) = common::helpers::initialized_mock_device().unwrap();
    let mut wupb_reply = vec![0x43, 0x00];
    wupb_reply.extend(common::fixtures::sensb_res());
    {
        let mut m = mock.borrow_mut();
        m.push_exchange(&common::fixtures::poll_b_list_reply());
        m.push_exchange(&[0x09]);
        m.push_exchange(&[0x43, 0x01]);
        m.push_exchange(&[0x09]);
        m.push_exchange(&wupb_reply);
    }

    let target = dev.poll_b().found().unwrap();
    assert_eq!(target.target_id, 1);
    assert_eq!(target.sensb_res, common::fixtures::sensb_res());
    assert_eq!(target.attrib_res, vec![0x00]);

    let bodies: Vec<Vec<u8>> = mock.borrow().sent_frames().into_iter().map(|f| f.body).collect();
    assert_eq!(bodies[0], vec![0x4A, 0x01, 0x03, 0x00]);
    // DESELECT broadcast with CRC_A
    assert_eq!(bodies[2], vec![0x42, 0xC2, 0xE0, 0xB4]);
    // WUPB for AFI 0x00
    assert_eq!(bodies[4], vec![0x42, 0x05, 0x00, 0x08, 0xE1, 0x10]);
}

#[test]
fn poll_b_silent_wupb_is_a_failure() {
    let (mock, mut dev) = common::helpers::initialized_mock_device().unwrap();
    {
        let mut m = mock.borrow_mut();
        m.push_exchange(&common::fixtures::poll_b_list_reply());
        m.push_exchange(&[0x09]);
        m.push_exchange(&[0x43, 0x01]);
        m.push_exchange(&[0x09]);
        m.push_exchange(&[0x43, 0x01]);
    }
    match dev.poll_b() {
        PollOutcome::Failed(Error::NoResponse { command }) => assert_eq!(command, 0x42),
        other => panic!("expected NoResponse failure, got {:?}", other),
    }
}

#[test]
fn list_passive_targets_reports_all() {
    let (mock, mut dev) = common::helpers::initialized_mock_device().unwrap();
    mock.borrow_mut().push_exchange(&common::fixtures::poll_a_reply());

    let targets = dev.list_passive_targets(Modulation::TypeA, 2).unwrap();
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].nfcid(), &common::fixtures::sample_nfcid()[..]);
    assert_eq!(mock.borrow().sent_frames()[0].body, vec![0x4A, 0x02, 0x00]);
}

#[test]
fn list_passive_targets_silence_is_empty() {
    let (_mock, mut dev) = common::helpers::initialized_mock_device().unwrap();
    assert!(dev.list_passive_targets(Modulation::TypeB, 1).unwrap().is_empty());
}
