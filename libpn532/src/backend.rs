// libpn532-rs/libpn532/src/backend.rs
//! Operations shared by every way of driving a reader under test, so test
//! code can switch between a local controller and other implementations.

use std::time::Duration;

use crate::config::EXCHANGE_TIMEOUT_MS;
use crate::device::{Device, Initialized, RawExchange};
use crate::protocol::{Register, RfConfigItem};
use crate::types::{PollOutcome, TypeATarget, TypeBTarget};
use crate::utils::ms;
use crate::{Error, Result};

/// A reader that can discover targets and exchange data with them.
///
/// Only discovery, exchange and antenna control are required. Register
/// level and raw entry points default to [`Error::UnsupportedOperation`].
pub trait NfcBackend {
    /// Prefix for log records about this backend.
    fn label(&self) -> &str {
        "[NfcBackend]"
    }

    /// Read timeout used for exchanges with an activated target.
    fn exchange_timeout(&self) -> Duration {
        ms(EXCHANGE_TIMEOUT_MS)
    }

    /// True when the reader identifies as the expected controller.
    fn verify_firmware_version(&mut self) -> Result<bool>;

    /// Look for one Type A target.
    fn poll_a(&mut self) -> PollOutcome<TypeATarget>;

    /// Look for one Type B target.
    fn poll_b(&mut self) -> PollOutcome<TypeBTarget>;

    /// Send `data` (target number first) to an activated target. `None`
    /// when nothing usable came back.
    fn transceive(&mut self, data: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Send each APDU in turn, stopping at the first one left unanswered.
    fn transceive_multiple(&mut self, apdus: &[Vec<u8>]) -> Result<Option<Vec<Vec<u8>>>> {
        let mut responses = Vec::with_capacity(apdus.len());
        for apdu in apdus {
            match self.transceive(apdu)? {
                Some(rsp) => responses.push(rsp),
                None => return Ok(None),
            }
        }
        Ok(Some(responses))
    }

    /// Exchange `data` with target `target_id`. The default prepends the
    /// target number and goes through [`NfcBackend::transceive`], ignoring
    /// `timeout`.
    fn in_data_exchange(
        &mut self,
        target_id: u8,
        data: &[u8],
        _timeout: Duration,
    ) -> Result<Option<Vec<u8>>> {
        let mut args = Vec::with_capacity(1 + data.len());
        args.push(target_id);
        args.extend_from_slice(data);
        self.transceive(&args)
    }

    /// Switch the antenna off.
    fn mute(&mut self) -> Result<()>;

    /// Switch the antenna on.
    fn unmute(&mut self) -> Result<()>;

    /// Send `data` with CRC_A appended to every target in the field.
    fn send_broadcast(&mut self, _data: &[u8]) -> Result<Vec<u8>> {
        Err(Error::unsupported("send_broadcast"))
    }

    /// Exchange `data` with host-controlled framing.
    fn transceive_raw(&mut self, _data: &[u8], _exchange: &RawExchange) -> Result<Option<Vec<u8>>> {
        Err(Error::unsupported("transceive_raw"))
    }

    /// Read controller registers in order.
    fn read_registers(&mut self, _registers: &[Register], _use_cache: bool) -> Result<Vec<u8>> {
        Err(Error::unsupported("read_registers"))
    }

    /// Write controller registers.
    fn write_registers(&mut self, _values: &[(Register, u8)], _use_cache: bool) -> Result<()> {
        Err(Error::unsupported("write_registers"))
    }

    /// Apply one RF configuration item.
    fn rf_configuration(&mut self, _item: RfConfigItem, _value: &[u8], _use_cache: bool) -> Result<()> {
        Err(Error::unsupported("rf_configuration"))
    }

    /// Link frame for `body`, for backends that speak the controller's
    /// framing.
    fn construct_frame(&self, _body: &[u8]) -> Result<Vec<u8>> {
        Err(Error::unsupported("construct_frame"))
    }

    /// Drop anything buffered between host and reader.
    fn reset_buffers(&mut self) -> Result<()> {
        Ok(())
    }
}

impl NfcBackend for Device<Initialized> {
    fn label(&self) -> &str {
        Device::label(self)
    }

    fn exchange_timeout(&self) -> Duration {
        self.config.exchange_timeout
    }

    fn verify_firmware_version(&mut self) -> Result<bool> {
        Device::verify_firmware_version(self)
    }

    fn poll_a(&mut self) -> PollOutcome<TypeATarget> {
        Device::poll_a(self)
    }

    fn poll_b(&mut self) -> PollOutcome<TypeBTarget> {
        Device::poll_b(self)
    }

    fn transceive(&mut self, data: &[u8]) -> Result<Option<Vec<u8>>> {
        Device::transceive(self, data)
    }

    fn in_data_exchange(&mut self, target_id: u8, data: &[u8], timeout: Duration) -> Result<Option<Vec<u8>>> {
        Device::in_data_exchange(self, target_id, data, timeout)
    }

    fn mute(&mut self) -> Result<()> {
        Device::mute(self)
    }

    fn unmute(&mut self) -> Result<()> {
        Device::unmute(self)
    }

    fn send_broadcast(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        Device::send_broadcast(self, data)
    }

    fn transceive_raw(&mut self, data: &[u8], exchange: &RawExchange) -> Result<Option<Vec<u8>>> {
        Device::transceive_raw(self, data, exchange)
    }

    fn read_registers(&mut self, registers: &[Register], use_cache: bool) -> Result<Vec<u8>> {
        Device::read_registers(self, registers, use_cache)
    }

    fn write_registers(&mut self, values: &[(Register, u8)], use_cache: bool) -> Result<()> {
        Device::write_registers(self, values, use_cache)
    }

    fn rf_configuration(&mut self, item: RfConfigItem, value: &[u8], use_cache: bool) -> Result<()> {
        Device::rf_configuration(self, item, value, use_cache)
    }

    fn construct_frame(&self, body: &[u8]) -> Result<Vec<u8>> {
        crate::protocol::Frame::encode_with_marker(crate::constants::HOST_MARKER, body)
    }

    fn reset_buffers(&mut self) -> Result<()> {
        Device::reset_buffers(self)
    }
}
