// libpn532-rs/libpn532/src/transport/traits.rs
//! The transport abstraction.

use std::time::Duration;

use crate::Result;

/// Transport trait abstracts the byte stream away from protocol/device
/// logic. Any channel that can write bytes, read with a timeout and drop
/// pending input (a real serial port, a simulated stream) can drive the
/// controller.
pub trait Transport {
    /// Write raw bytes to the device
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Read up to `len` bytes, returning early with fewer (possibly none)
    /// when `timeout` elapses. A timeout is not an error at this level.
    fn receive(&mut self, len: usize, timeout: Duration) -> Result<Vec<u8>>;

    /// Wait until written bytes have left the host.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Discard bytes received but not yet read.
    fn reset_input(&mut self) -> Result<()>;

    /// Discard bytes written but not yet transmitted.
    fn reset_output(&mut self) -> Result<()> {
        Ok(())
    }

    /// Discard pending input and output.
    fn reset_buffers(&mut self) -> Result<()> {
        self.reset_input()?;
        self.reset_output()
    }

    /// Identifier used in log labels (port path, "mock", ...)
    fn name(&self) -> String;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        (**self).send(data)
    }

    fn receive(&mut self, len: usize, timeout: Duration) -> Result<Vec<u8>> {
        (**self).receive(len, timeout)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn reset_input(&mut self) -> Result<()> {
        (**self).reset_input()
    }

    fn reset_output(&mut self) -> Result<()> {
        (**self).reset_output()
    }

    fn reset_buffers(&mut self) -> Result<()> {
        (**self).reset_buffers()
    }

    fn name(&self) -> String {
        (**self).name()
    }
}
