// libpn532-rs/libpn532/src/device/rf_config.rs
//! RFConfiguration items, cached by item.

use std::time::Duration;

use log::{debug, trace};

use crate::constants::{ATR_RES_TIMEOUT_DEFAULT, MAX_TIMEOUT_INDEX};
use crate::device::handle::{Device, Initialized};
use crate::protocol::{Command, RfConfigItem};
use crate::Result;

/// Smallest index `n` in 1..=16 whose timeout `100 * 2^(n-1)` µs covers
/// `timeout`. Anything longer than the table gets the largest index.
pub fn timeout_index(timeout: Duration) -> u8 {
    let micros = timeout.as_micros();
    (1..=MAX_TIMEOUT_INDEX)
        .find(|&n| 100u128 << (n - 1) >= micros)
        .unwrap_or(MAX_TIMEOUT_INDEX)
}

impl<S> Device<S> {
    pub(crate) fn apply_rf_configuration(
        &mut self,
        item: RfConfigItem,
        value: &[u8],
        use_cache: bool,
        timeout: Duration,
    ) -> Result<()> {
        if use_cache && self.rf_config.get(&item).map(Vec::as_slice) == Some(value) {
            trace!("{} {:?} unchanged", self.label(), item);
            return Ok(());
        }
        let mut args = Vec::with_capacity(1 + value.len());
        args.push(item.code());
        args.extend_from_slice(value);
        self.execute(Command::RfConfiguration, &args, timeout)?;
        self.rf_config.store(item, value.to_vec());
        Ok(())
    }
}

impl Device<Initialized> {
    /// Send one RFConfiguration item. With `use_cache`, an item already
    /// holding `value` is not sent again.
    pub fn rf_configuration(&mut self, item: RfConfigItem, value: &[u8], use_cache: bool) -> Result<()> {
        let timeout = self.config.command_timeout;
        self.apply_rf_configuration(item, value, use_cache, timeout)
    }

    /// Set fRetryTimeout for `timeout`, keeping the default ATR_RES timeout.
    /// Returns the index applied.
    pub fn set_timings(&mut self, timeout: Duration, use_cache: bool) -> Result<u8> {
        let index = timeout_index(timeout);
        self.rf_configuration(
            RfConfigItem::VariousTimings,
            &[0x00, ATR_RES_TIMEOUT_DEFAULT, index],
            use_cache,
        )?;
        Ok(index)
    }

    /// MxRtyATR, MxRtyPSL and MxRtyPassiveActivation. 0xFF retries forever.
    pub fn set_max_retries(&mut self, atr: u8, psl: u8, passive_activation: u8, use_cache: bool) -> Result<()> {
        self.rf_configuration(RfConfigItem::MaxRetries, &[atr, psl, passive_activation], use_cache)
    }

    /// MaxRtyCOM for InDataExchange.
    pub fn set_max_command_retries(&mut self, retries: u8, use_cache: bool) -> Result<()> {
        self.rf_configuration(RfConfigItem::MaxRtyCom, &[retries], use_cache)
    }

    /// Field on/off and automatic RF collision avoidance.
    pub fn set_rf_field(&mut self, rf_on: bool, auto_rfca: bool, use_cache: bool) -> Result<()> {
        let value = (u8::from(auto_rfca) << 1) | u8::from(rf_on);
        self.rf_configuration(RfConfigItem::RfField, &[value], use_cache)
    }

    /// Switch the antenna off.
    pub fn mute(&mut self) -> Result<()> {
        debug!("{} muting", self.label());
        self.set_rf_field(false, true, false)
    }

    /// Switch the antenna on.
    pub fn unmute(&mut self) -> Result<()> {
        debug!("{} unmuting", self.label());
        self.set_rf_field(true, true, false)
    }
}
