// libpn532-rs/libpn532/src/device/registers.rs
//! ReadRegister / WriteRegister with optional write elision.

use log::{debug, trace};

use crate::device::handle::{Device, Initialized};
use crate::protocol::parser::slice_at;
use crate::protocol::{Command, Register};
use crate::Result;

impl Device<Initialized> {
    /// Read `registers` in order. With `use_cache`, no command is sent when
    /// every value is already known.
    pub fn read_registers(&mut self, registers: &[Register], use_cache: bool) -> Result<Vec<u8>> {
        if use_cache {
            if let Some(values) = self.registers.lookup_all(registers) {
                trace!("{} register read served from cache", self.label());
                return Ok(values);
            }
        }

        let args: Vec<u8> = registers.iter().flat_map(|r| r.address_bytes()).collect();
        let timeout = self.config.command_timeout;
        let rsp = self.execute(Command::ReadRegister, &args, timeout)?;
        let values = slice_at(&rsp, 0, registers.len())?.to_vec();
        for (reg, val) in registers.iter().zip(&values) {
            debug!("{} read {:?} = 0b{:08b}", self.label(), reg, val);
            self.registers.store(*reg, *val);
        }
        Ok(values)
    }

    /// Write `values`. With `use_cache`, only pairs that differ from the cache
    /// go out, and nothing is sent if none do. Afterwards the cache holds
    /// the full input.
    pub fn write_registers(&mut self, values: &[(Register, u8)], use_cache: bool) -> Result<()> {
        let pending = if use_cache {
            self.registers.changed(values)
        } else {
            values.to_vec()
        };
        if pending.is_empty() {
            trace!("{} register write elided", self.label());
            return Ok(());
        }

        let mut args = Vec::with_capacity(pending.len() * 3);
        for (reg, val) in &pending {
            debug!("{} write {:?} = 0b{:08b}", self.label(), reg, val);
            args.extend_from_slice(&reg.address_bytes());
            args.push(*val);
        }
        let timeout = self.config.command_timeout;
        self.execute(Command::WriteRegister, &args, timeout)?;
        self.registers.store_all(values);
        Ok(())
    }
}
