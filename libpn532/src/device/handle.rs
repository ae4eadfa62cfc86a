// libpn532-rs/libpn532/src/device/handle.rs
//! The type-state driver handle and command dispatch.

use std::marker::PhantomData;
use std::time::Duration;

use log::{debug, error};

use crate::config::DriverConfig;
use crate::constants::{FIRMWARE_RESPONSE_LEN, LONG_PREAMBLE_LEN, PN532_IC};
use crate::device::cache::{RegisterCache, RfConfigCache};
use crate::device::link::Link;
use crate::protocol::parser::expect_response_code;
use crate::protocol::{Command, Frame, RfConfigItem};
use crate::transport::Transport;
use crate::types::FirmwareVersion;
use crate::utils::{bytes_to_hex, HexBytes};
use crate::{Error, Result};

/// Device state before [`Device::initialize`].
pub struct Uninitialized;
/// Device state once the controller answered initialization.
pub struct Initialized;

/// Driver for one controller. Owns the transport and both write-elision
/// caches; initialization state is enforced at compile time.
pub struct Device<State = Uninitialized> {
    pub(crate) link: Link,
    pub(crate) config: DriverConfig,
    pub(crate) registers: RegisterCache,
    pub(crate) rf_config: RfConfigCache,
    _state: PhantomData<State>,
}

impl Device<Uninitialized> {
    /// Create a Device from an existing Transport instance. This is
    /// primarily intended for tests where a MockTransport is provided.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, DriverConfig::default())
    }

    /// Like [`Device::new_with_transport`] with an explicit configuration.
    pub fn with_config(transport: Box<dyn Transport>, config: DriverConfig) -> Self {
        let link = Link::new(transport, config.strictness);
        Self {
            link,
            config,
            registers: RegisterCache::new(),
            rf_config: RfConfigCache::new(),
            _state: PhantomData,
        }
    }

    /// Open a serial port and wrap it in an uninitialized Device.
    #[cfg(feature = "serial")]
    pub fn open(serial: &crate::config::SerialConfig) -> Result<Self> {
        let transport = crate::transport::SerialTransport::open(serial)?;
        Ok(Self::new_with_transport(Box::new(transport)))
    }

    /// Wake the controller, check that it is a PN532 and put it in normal
    /// mode. Every step must be answered.
    pub fn initialize(mut self) -> Result<Device<Initialized>> {
        debug!("{} initializing", self.label());
        self.link.wake_up()?;

        let rsp = self.firmware_response()?;
        if !firmware_matches(&rsp) {
            error!("{} could not verify PN532 firmware", self.label());
            return Err(Error::FirmwareMismatch {
                response: bytes_to_hex(&rsp),
            });
        }

        // SAMConfiguration: normal mode, no virtual card timeout
        let setup = self.config.setup_timeout;
        self.execute_long(Command::SamConfiguration, &[0x01, 0x00], setup)?;

        if self.config.disable_retries {
            self.link.transport_mut().reset_input()?;
            self.apply_rf_configuration(RfConfigItem::MaxRetries, &[0x00, 0x00, 0x00], false, setup)?;
        }

        Ok(Device {
            link: self.link,
            config: self.config,
            registers: self.registers,
            rf_config: self.rf_config,
            _state: PhantomData,
        })
    }
}

impl<S> Device<S> {
    /// `[PN532|<port>]`, prefixed to every log record of this driver.
    pub fn label(&self) -> &str {
        self.link.label()
    }

    /// Active configuration.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Send `command` and return its reply with the echoed code stripped.
    /// Silence is [`Error::NoResponse`]; a wrong echo is
    /// [`Error::UnexpectedResponse`].
    pub fn execute(&mut self, command: Command, args: &[u8], timeout: Duration) -> Result<Vec<u8>> {
        let rsp = self
            .send_command(command, args, timeout)?
            .ok_or(Error::NoResponse {
                command: command.code(),
            })?;
        strip_response_code(command, rsp)
    }

    /// Like [`Device::execute`], preceded by a long preamble so the frame
    /// also wakes a sleeping controller.
    pub(crate) fn execute_long(
        &mut self,
        command: Command,
        args: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>> {
        let mut frame = vec![0u8; LONG_PREAMBLE_LEN];
        frame.extend(Frame::encode(command.code(), args)?);
        let rsp = self.link.send_frame(&frame, timeout)?.ok_or(Error::NoResponse {
            command: command.code(),
        })?;
        strip_response_code(command, rsp)
    }

    /// Raw reply body, echoed code included. `None` when nothing came back.
    pub(crate) fn send_command(
        &mut self,
        command: Command,
        args: &[u8],
        timeout: Duration,
    ) -> Result<Option<Vec<u8>>> {
        debug!("{} {:?} {}", self.label(), command, HexBytes(args));
        let frame = Frame::encode(command.code(), args)?;
        self.link.send_frame(&frame, timeout)
    }

    /// Drop pending bytes in both directions.
    pub fn reset_buffers(&mut self) -> Result<()> {
        self.link.reset_buffers()
    }

    /// Forget every cached register and RF setting. Needed whenever the
    /// controller changes them on its own (InListPassiveTarget, target mode).
    pub fn invalidate_caches(&mut self) {
        self.registers.clear();
        self.rf_config.clear();
    }

    /// True when the controller identifies itself as a PN532. A reply of the
    /// wrong shape is logged and yields false; silence is an error.
    pub fn verify_firmware_version(&mut self) -> Result<bool> {
        let rsp = self.firmware_response()?;
        Ok(firmware_matches(&rsp))
    }

    /// Read and parse GetFirmwareVersion.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        let timeout = self.config.command_timeout;
        let payload = self.execute_long(Command::GetFirmwareVersion, &[], timeout)?;
        FirmwareVersion::parse(&payload)
    }

    fn firmware_response(&mut self) -> Result<Vec<u8>> {
        debug!("{} checking firmware version", self.label());
        let command = Command::GetFirmwareVersion;
        let mut frame = vec![0u8; LONG_PREAMBLE_LEN];
        frame.extend(Frame::encode(command.code(), &[])?);
        let timeout = self.config.command_timeout;
        let rsp = self.link.send_frame(&frame, timeout)?.ok_or(Error::NoResponse {
            command: command.code(),
        })?;
        if rsp.first() != Some(&command.response_code()) || rsp.len() != FIRMWARE_RESPONSE_LEN {
            error!(
                "{} got unexpected response for GetFirmwareVersion: {}",
                self.label(),
                HexBytes(&rsp)
            );
        }
        Ok(rsp)
    }
}

fn firmware_matches(rsp: &[u8]) -> bool {
    rsp.len() == FIRMWARE_RESPONSE_LEN
        && rsp[0] == Command::GetFirmwareVersion.response_code()
        && rsp[1] == PN532_IC
}

fn strip_response_code(command: Command, mut rsp: Vec<u8>) -> Result<Vec<u8>> {
    expect_response_code(&rsp, command.response_code())?;
    rsp.remove(0);
    Ok(rsp)
}
