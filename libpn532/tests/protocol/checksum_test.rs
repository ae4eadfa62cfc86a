use libpn532::protocol::checksum::{crc_a, data_checksum_ok, dcs, lcs, length_checksum_ok, with_crc_a};
use proptest::prelude::*;

#[test]
fn crc_a_known_vectors() {
    // HLTA
    assert_eq!(crc_a(&[0x50, 0x00]), [0x57, 0xCD]);
    // WUPB, AFI 0x00
    assert_eq!(crc_a(&[0x05, 0x00, 0x08]), [0xE1, 0x10]);
    assert_eq!(crc_a(&[]), [0x63, 0x63]);
}

#[test]
fn frame_checksums() {
    assert_eq!(lcs(0x02), 0xFE);
    assert_eq!(dcs(0xD4, &[0x02]), 0x2A);
    assert!(length_checksum_ok(0x02, 0xFE));
    assert!(data_checksum_ok(0xD5, &[0x03, 0x32, 0x01, 0x06, 0x07], dcs(0xD5, &[0x03, 0x32, 0x01, 0x06, 0x07])));
}

proptest! {
    #[test]
    fn with_crc_a_appends_crc(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let out = with_crc_a(&data);
        prop_assert_eq!(out.len(), data.len() + 2);
        prop_assert_eq!(&out[..data.len()], &data[..]);
        prop_assert_eq!(&out[data.len()..], &crc_a(&data)[..]);
    }

    #[test]
    fn checksums_close(len in any::<u8>(), marker in any::<u8>(), body in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert!(length_checksum_ok(len, lcs(len)));
        prop_assert!(data_checksum_ok(marker, &body, dcs(marker, &body)));
    }
}
