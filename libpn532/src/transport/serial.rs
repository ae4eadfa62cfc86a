// libpn532-rs/libpn532/src/transport/serial.rs

//! Serial (HSU) transport.
#![cfg(feature = "serial")]

use std::io::{ErrorKind, Read, Write};
use std::time::{Duration, Instant};

use log::debug;
use serialport::{ClearBuffer, SerialPort};

use crate::config::SerialConfig;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// HSU transport over a serial port (UART or USB-serial bridge).
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    path: String,
}

impl SerialTransport {
    /// Open the configured port, or the first port the system reports when
    /// no path is given.
    pub fn open(config: &SerialConfig) -> Result<Self> {
        let path = match &config.path {
            Some(p) => p.clone(),
            None => serialport::available_ports()?
                .into_iter()
                .next()
                .map(|p| p.port_name)
                .ok_or(Error::DeviceNotFound)?,
        };
        debug!("opening {} at {} baud", path, config.baud_rate);
        let port = serialport::new(&path, config.baud_rate)
            .timeout(config.read_timeout)
            .open()?;
        Ok(Self { port, path })
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.port.write_all(data)?;
        Ok(())
    }

    fn receive(&mut self, len: usize, timeout: Duration) -> Result<Vec<u8>> {
        let deadline = Instant::now() + timeout;
        let mut out = vec![0u8; len];
        let mut filled = 0;
        while filled < len {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            self.port.set_timeout(deadline - now)?;
            match self.port.read(&mut out[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::TimedOut => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        out.truncate(filled);
        Ok(out)
    }

    fn flush(&mut self) -> Result<()> {
        self.port.flush()?;
        Ok(())
    }

    fn reset_input(&mut self) -> Result<()> {
        self.port.clear(ClearBuffer::Input)?;
        Ok(())
    }

    fn reset_output(&mut self) -> Result<()> {
        self.port.clear(ClearBuffer::Output)?;
        Ok(())
    }

    fn name(&self) -> String {
        self.path.clone()
    }
}
