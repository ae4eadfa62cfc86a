// libpn532-rs/libpn532/src/device/builder.rs
//! Builder for [`Device`](crate::device::Device).

use std::time::Duration;

use crate::config::{DriverConfig, Strictness};
use crate::device::handle::{Device, Uninitialized};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    config: DriverConfig,
}

impl DeviceBuilder {
    /// Builder with default configuration and no transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Open a serial port as the transport.
    #[cfg(feature = "serial")]
    pub fn with_serial(self, serial: &crate::config::SerialConfig) -> Result<Self> {
        let transport = crate::transport::SerialTransport::open(serial)?;
        Ok(self.with_transport(Box::new(transport)))
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: DriverConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the link strictness.
    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.config.strictness = strictness;
        self
    }

    /// Set the general command timeout.
    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.config.command_timeout = timeout;
        self
    }

    /// Set the InDataExchange timeout.
    pub fn exchange_timeout(mut self, timeout: Duration) -> Self {
        self.config.exchange_timeout = timeout;
        self
    }

    /// Whether initialization zeroes the activation retries.
    pub fn disable_retries(mut self, disable: bool) -> Self {
        self.config.disable_retries = disable;
        self
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        match self.transport {
            Some(t) => Ok(Device::with_config(t, self.config)),
            None => Err(Error::DeviceNotFound),
        }
    }
}
