#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::responses::{parse_poll_a, parse_target_list};
use libpn532::{DetectedTarget, FirmwareVersion, Modulation};

#[test]
fn firmware_reply_decodes() {
    let reply = common::fixtures::firmware_reply();
    let fw = FirmwareVersion::parse(&reply[1..]).unwrap();
    assert!(fw.is_pn532());
    assert_eq!(fw.support, 0x07);
}

#[test]
fn poll_a_reply_decodes() {
    let reply = common::fixtures::poll_a_reply();
    let t = parse_poll_a(&reply[1..]).unwrap().unwrap();
    assert_eq!(t.sens_res, [0x00, 0x04]);
    assert_eq!(t.sel_res, 0x20);
    assert_eq!(t.nfcid, common::fixtures::sample_nfcid());
    assert_eq!(t.ats, vec![0x75]);
}

#[test]
fn empty_poll_a_reply() {
    let reply = common::fixtures::poll_a_empty_reply();
    assert!(parse_poll_a(&reply[1..]).unwrap().is_none());
}

#[test]
fn type_b_listing_decodes() {
    let reply = common::fixtures::poll_b_list_reply();
    let targets = parse_target_list(Modulation::TypeB, &reply[1..]).unwrap();
    match &targets[..] {
        [DetectedTarget::TypeB(t)] => {
            assert_eq!(t.sensb_res, common::fixtures::sensb_res());
            assert_eq!(t.nfcid(), &[0xA1, 0xB2, 0xC3, 0xD4]);
            assert_eq!(t.afi(), Some(0x00));
        }
        other => panic!("expected one Type B target, got {:?}", other),
    }
}
