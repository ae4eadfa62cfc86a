#![cfg(feature = "serial")]

#[path = "common.rs"]
mod common;

use libpn532::Result;
use serial_test::serial;

// These tests need a PN532 on a serial port. They are marked `#[ignore]` so
// CI does not attempt to run them. Run manually with:
//
// PN532_PORT=/dev/ttyUSB0 cargo test -p libpn532 --test hardware --features serial -- --ignored
//

#[test]
#[ignore]
#[serial]
fn open_and_initialize_pn532() -> Result<()> {
    match common::open_and_initialize_device()? {
        Some(mut device) => {
            assert!(device.verify_firmware_version()?);
            Ok(())
        }
        None => Ok(()),
    }
}

#[test]
#[ignore]
#[serial]
fn poll_empty_or_present_field() -> Result<()> {
    let Some(mut device) = common::open_and_initialize_device()? else {
        return Ok(());
    };
    // Either outcome is fine; a failure is not.
    device.poll_a().into_result()?;
    device.mute()?;
    device.unmute()?;
    Ok(())
}
