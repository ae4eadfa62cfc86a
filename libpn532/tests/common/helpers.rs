// helpers.rs: device/transport setup shared by integration tests

use libpn532::config::DriverConfig;
use libpn532::device::{Device, Initialized};
use libpn532::test_support::{self, SharedMock};
use libpn532::Result;

/// Route `log` output to the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Mock-backed initialized device; the init traffic is already cleared
/// from the mock.
pub fn initialized_mock_device() -> Result<(SharedMock, Device<Initialized>)> {
    init_logging();
    let mock = SharedMock::new();
    let dev = test_support::initialized_mock_device(&mock)?;
    Ok((mock, dev))
}

pub fn initialized_mock_device_with(config: DriverConfig) -> Result<(SharedMock, Device<Initialized>)> {
    init_logging();
    let mock = SharedMock::new();
    let dev = test_support::initialized_mock_device_with(&mock, config)?;
    Ok((mock, dev))
}
