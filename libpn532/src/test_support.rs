//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use std::time::Duration;

use crate::config::DriverConfig;
use crate::device::{Device, Initialized};
use crate::transport::mock::MockTransport;
use crate::transport::Transport;
use crate::Result;

/// Replies to the initialization sequence: GetFirmwareVersion,
/// SAMConfiguration and RFConfiguration (retries off).
pub const INIT_REPLIES: [&[u8]; 3] = [&[0x03, 0x32, 0x01, 0x06, 0x07], &[0x15], &[0x33]];

/// MockTransport shared between a Device (which owns its transport) and the
/// test that wants to inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct SharedMock(Rc<RefCell<MockTransport>>);

impl SharedMock {
    /// Empty mock with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect the mock.
    pub fn borrow(&self) -> Ref<'_, MockTransport> {
        self.0.borrow()
    }

    /// Queue replies or clear recorded traffic.
    pub fn borrow_mut(&self) -> RefMut<'_, MockTransport> {
        self.0.borrow_mut()
    }

    /// Another handle to the same mock, ready to hand to a Device.
    pub fn boxed(&self) -> Box<dyn Transport> {
        Box::new(self.clone())
    }
}

impl Transport for SharedMock {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.0.borrow_mut().send(data)
    }

    fn receive(&mut self, len: usize, timeout: Duration) -> Result<Vec<u8>> {
        self.0.borrow_mut().receive(len, timeout)
    }

    fn flush(&mut self) -> Result<()> {
        self.0.borrow_mut().flush()
    }

    fn reset_input(&mut self) -> Result<()> {
        self.0.borrow_mut().reset_input()
    }

    fn name(&self) -> String {
        self.0.borrow().name()
    }
}

/// Queue ACK + reply for every step of [`Device::initialize`].
#[doc(hidden)]
pub fn seed_init(mock: &mut MockTransport) {
    for reply in INIT_REPLIES {
        mock.push_exchange(reply);
    }
}

/// Initialize a Device over `mock` with the default configuration, then
/// forget everything the initialization wrote so tests only see their own
/// traffic.
#[doc(hidden)]
pub fn initialized_mock_device(mock: &SharedMock) -> Result<Device<Initialized>> {
    initialized_mock_device_with(mock, DriverConfig::default())
}

/// [`initialized_mock_device`] with an explicit driver configuration.
#[doc(hidden)]
pub fn initialized_mock_device_with(
    mock: &SharedMock,
    config: DriverConfig,
) -> Result<Device<Initialized>> {
    #[cfg(test)]
    init_logging();
    seed_init(&mut mock.borrow_mut());
    let device = Device::with_config(mock.boxed(), config).initialize()?;
    let mut m = mock.borrow_mut();
    m.sent.clear();
    m.reads.clear();
    Ok(device)
}

/// Route `log` records to the test harness output. Safe to call from every
/// test.
#[cfg(test)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
