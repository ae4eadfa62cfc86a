// libpn532-rs/libpn532/src/device/modulation.rs
//! Raw exchanges through InCommunicateThru with host-controlled framing.

use std::time::Duration;

use log::debug;

use crate::device::handle::{Device, Initialized};
use crate::protocol::parser::slice_at;
use crate::protocol::registers::{BitFramingValue, ModeValue, Register, TxAutoValue};
use crate::protocol::responses::split_status;
use crate::protocol::{analog_preset, Command};
use crate::types::{BitRate, Modulation};
use crate::utils::HexBytes;
use crate::Result;

/// Radio settings for one raw exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RawExchange {
    /// Modulation of the target
    pub modulation: Modulation,
    /// Let the CIU append and check the CRC
    pub crc: bool,
    /// Bits to send of the last byte, 8 for a full byte
    pub bits: u8,
    /// Bit rate in both directions
    pub bit_rate: BitRate,
    /// RF response timeout; `None` uses [`DriverConfig::raw_rf_timeout`]
    ///
    /// [`DriverConfig::raw_rf_timeout`]: crate::config::DriverConfig::raw_rf_timeout
    pub timeout: Option<Duration>,
    /// Skip register and RF writes the chip already holds
    pub cache_configuration: bool,
}

impl Default for RawExchange {
    fn default() -> Self {
        Self {
            modulation: Modulation::TypeA,
            crc: true,
            bits: 8,
            bit_rate: BitRate::Kbps106,
            timeout: None,
            cache_configuration: true,
        }
    }
}

impl RawExchange {
    /// Full-byte exchange with CRC at 106 kbps.
    pub fn new(modulation: Modulation) -> Self {
        Self {
            modulation,
            ..Self::default()
        }
    }

    /// Enable or disable hardware CRC.
    pub fn with_crc(mut self, crc: bool) -> Self {
        self.crc = crc;
        self
    }

    /// Bits of the last byte to send.
    pub fn with_bits(mut self, bits: u8) -> Self {
        self.bits = bits;
        self
    }

    /// Set the bit rate.
    pub fn with_bit_rate(mut self, bit_rate: BitRate) -> Self {
        self.bit_rate = bit_rate;
        self
    }

    /// Override the configured RF timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Skip writes the chip already holds.
    pub fn with_cache_configuration(mut self, cache: bool) -> Self {
        self.cache_configuration = cache;
        self
    }
}

/// TxMode, RxMode, TxAuto and BitFraming as read from the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeRegisters {
    /// TxMode
    pub tx_mode: u8,
    /// RxMode
    pub rx_mode: u8,
    /// TxAuto
    pub tx_auto: u8,
    /// BitFraming
    pub bit_framing: u8,
}

impl ModeRegisters {
    /// Read order of the four registers.
    pub const REGISTERS: [Register; 4] = [
        Register::TxMode,
        Register::RxMode,
        Register::TxAuto,
        Register::BitFraming,
    ];

    /// Build from values read in [`ModeRegisters::REGISTERS`] order.
    pub fn from_values(values: &[u8]) -> Result<Self> {
        let v = slice_at(values, 0, Self::REGISTERS.len())?;
        Ok(Self {
            tx_mode: v[0],
            rx_mode: v[1],
            tx_auto: v[2],
            bit_framing: v[3],
        })
    }

    /// Set the fields `exchange` controls. Every other bit keeps its
    /// read-back value.
    pub fn apply(self, exchange: &RawExchange) -> Self {
        let mode = |value: u8| -> u8 {
            ModeValue(value)
                .with_bit_rate(exchange.bit_rate)
                .with_framing(exchange.modulation.framing())
                .with_crc(exchange.crc)
                .into()
        };
        Self {
            tx_mode: mode(self.tx_mode),
            rx_mode: mode(self.rx_mode),
            // Type A does not work without 100% ASK
            tx_auto: TxAutoValue(self.tx_auto)
                .with_force_100_ask(exchange.modulation == Modulation::TypeA)
                .into(),
            bit_framing: BitFramingValue(self.bit_framing)
                .with_tx_last_bits(exchange.bits)
                .into(),
        }
    }

    /// Register/value pairs ready for a write.
    pub fn pairs(&self) -> [(Register, u8); 4] {
        [
            (Register::TxMode, self.tx_mode),
            (Register::RxMode, self.rx_mode),
            (Register::TxAuto, self.tx_auto),
            (Register::BitFraming, self.bit_framing),
        ]
    }
}

impl Device<Initialized> {
    /// Configure the CIU for `exchange` and send `data` as-is. A non-zero
    /// status (timeout, collision, ...) is reported as `Ok(None)`.
    pub fn transceive_raw(&mut self, data: &[u8], exchange: &RawExchange) -> Result<Option<Vec<u8>>> {
        let cache = exchange.cache_configuration;
        let rf_timeout = exchange.timeout.unwrap_or(self.config.raw_rf_timeout);
        self.set_timings(rf_timeout, cache)?;

        let values = self.read_registers(&ModeRegisters::REGISTERS, cache)?;
        let updated = ModeRegisters::from_values(&values)?.apply(exchange);
        let mut writes = updated.pairs().to_vec();
        writes.extend_from_slice(analog_preset(exchange.modulation));
        self.write_registers(&writes, cache)?;

        let payload = match exchange.modulation {
            // FeliCa frames carry their own length byte
            Modulation::TypeF => {
                let mut p = Vec::with_capacity(data.len() + 1);
                p.push((data.len() + 1) as u8);
                p.extend_from_slice(data);
                p
            }
            Modulation::TypeA | Modulation::TypeB => data.to_vec(),
        };

        let timeout = self.config.command_timeout.max(rf_timeout);
        let rsp = self.execute(Command::InCommunicateThru, &payload, timeout)?;
        let (status, body) = split_status(&rsp)?;
        if status != 0 {
            debug!("{} raw exchange ended with status {:#04x}", self.label(), status);
            return Ok(None);
        }
        debug!("{} raw exchange got {}", self.label(), HexBytes(body));
        Ok(Some(body.to_vec()))
    }
}
