#[path = "../common/mod.rs"]
mod common;

use libpn532::config::{DriverConfig, Strictness};
use libpn532::device::{Device, DeviceBuilder};
use libpn532::test_support::{seed_init, SharedMock};
use libpn532::utils::ms;
use libpn532::Error;

#[test]
fn builder_then_initialize() {
    common::helpers::init_logging();
    let mock = SharedMock::new();
    seed_init(&mut mock.borrow_mut());

    let device = DeviceBuilder::new()
        .with_transport(mock.boxed())
        .strictness(Strictness::Strict)
        .command_timeout(ms(250))
        .build_uninitialized()
        .unwrap();
    assert_eq!(device.label(), "[PN532|mock]");
    assert_eq!(device.config().command_timeout, ms(250));

    let _device = device.initialize().unwrap();
    let m = mock.borrow();
    assert_eq!(m.remaining(), 0);
    // GetFirmwareVersion, SAMConfiguration, RFConfiguration(MaxRetries)
    let codes: Vec<u8> = m.sent_frames().iter().map(|f| f.body[0]).collect();
    assert_eq!(codes, vec![0x02, 0x14, 0x32]);
}

#[test]
fn wake_up_precedes_first_command() {
    let mock = SharedMock::new();
    seed_init(&mut mock.borrow_mut());
    Device::new_with_transport(mock.boxed()).initialize().unwrap();

    let m = mock.borrow();
    let wake = &m.sent[0];
    assert!(wake.starts_with(&[0x00; 20]));
    assert!(wake.ends_with(&[0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00]));
}

#[test]
fn retries_left_alone_when_not_disabled() {
    let mock = SharedMock::new();
    {
        let mut m = mock.borrow_mut();
        m.push_exchange(&common::fixtures::firmware_reply());
        m.push_exchange(&[0x15]);
    }
    let config = DriverConfig {
        disable_retries: false,
        ..DriverConfig::default()
    };
    Device::with_config(mock.boxed(), config).initialize().unwrap();
    assert_eq!(mock.borrow().command_count(0x32), 0);
}

#[test]
fn foreign_firmware_is_rejected() {
    let mock = SharedMock::new();
    mock.borrow_mut().push_exchange(&[0x03, 0x31, 0x01, 0x06, 0x07]);

    match Device::new_with_transport(mock.boxed()).initialize() {
        Err(Error::FirmwareMismatch { response }) => assert_eq!(response, "0331010607"),
        Err(e) => panic!("expected FirmwareMismatch, got {:?}", e),
        Ok(_) => panic!("expected FirmwareMismatch, got a device"),
    }
}

#[test]
fn silent_controller_fails_initialization() {
    let mock = SharedMock::new();
    assert!(Device::new_with_transport(mock.boxed()).initialize().is_err());
}

#[test]
fn builder_without_transport() {
    match DeviceBuilder::new().build_uninitialized() {
        Err(Error::DeviceNotFound) => {}
        Err(e) => panic!("expected DeviceNotFound, got {:?}", e),
        Ok(_) => panic!("expected DeviceNotFound, got a device"),
    }
}

#[test]
fn firmware_version_after_init() {
    let (mock, mut dev) = common::helpers::initialized_mock_device().unwrap();
    mock.borrow_mut().push_exchange(&common::fixtures::firmware_reply());
    let fw = dev.firmware_version().unwrap();
    assert!(fw.is_pn532());
    assert_eq!((fw.version, fw.revision), (0x01, 0x06));
}
