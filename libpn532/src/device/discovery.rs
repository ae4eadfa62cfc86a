// libpn532-rs/libpn532/src/device/discovery.rs
//! Target discovery and data exchange with activated targets.

use std::time::Duration;

use log::{debug, error};

use crate::constants::{DESELECT_BROADCAST, WUPB_APF, WUPB_PARAM};
use crate::device::handle::{Device, Initialized};
use crate::protocol::checksum::with_crc_a;
use crate::protocol::parser::{byte_at, expect_response_code};
use crate::protocol::responses::{parse_poll_a, parse_target_list, split_status};
use crate::protocol::{Command, Register};
use crate::types::{DetectedTarget, Modulation, PollOutcome, TypeATarget, TypeBTarget};
use crate::utils::HexBytes;
use crate::{Error, Result};

/// TgInitAsTarget parameters: PICC only, SENS_RES 0x0400, NFCID1t 123456,
/// SEL_RES 0x20, no FeliCa or DEP parameters, no general or historical
/// bytes.
const TARGET_MODE_PARAMS: [u8; 37] = [
    0x05, // mode
    0x04, 0x00, // SENS_RES
    0x12, 0x34, 0x56, // NFCID1t
    0x20, // SEL_RES
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // FeliCaParams
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // NFCID3t
    0x00, // LEN Gt
    0x00, // LEN Tk
];

impl Device<Initialized> {
    /// Look for one Type A target at 106 kbps.
    pub fn poll_a(&mut self) -> PollOutcome<TypeATarget> {
        debug!("{} polling A", self.label());
        self.try_poll_a().into()
    }

    fn try_poll_a(&mut self) -> Result<Option<TypeATarget>> {
        let Some(payload) = self.list_passive(Modulation::TypeA, 1, &[])? else {
            return Ok(None);
        };
        let target = parse_poll_a(&payload)?;
        if let Some(t) = &target {
            debug!("{} got tag, SEL_RES is {:02x}", self.label(), t.sel_res);
        }
        Ok(target)
    }

    /// Look for one Type B target, then deselect it and wake it again with
    /// WUPB so it answers with a fresh SENSB_RES. Silence to the WUPB is a
    /// failure, not a miss.
    pub fn poll_b(&mut self) -> PollOutcome<TypeBTarget> {
        debug!("{} polling B", self.label());
        self.try_poll_b().into()
    }

    fn try_poll_b(&mut self) -> Result<Option<TypeBTarget>> {
        // InitiatorData: AFI 0x00 selects every application family
        let Some(payload) = self.list_passive(Modulation::TypeB, 1, &[0x00])? else {
            return Ok(None);
        };
        if byte_at(&payload, 0)? == 0 {
            return Ok(None);
        }
        let (listed, _) = TypeBTarget::from_target_data(&payload[1..])?;
        let afi = listed.afi().unwrap_or(0x00);

        self.send_broadcast(&[DESELECT_BROADCAST])?;

        self.write_registers(&[(Register::BitFraming, 0x00)], false)?;
        let wupb = with_crc_a(&[WUPB_APF, afi, WUPB_PARAM]);
        let timeout = self.config.command_timeout;
        let rsp = self.execute(Command::InCommunicateThru, &wupb, timeout)?;
        let (status, sensb_res) = split_status(&rsp)?;
        if status != 0 {
            error!("{} no response for WUPB, status {:#04x}", self.label(), status);
            return Err(Error::NoResponse {
                command: Command::InCommunicateThru.code(),
            });
        }

        Ok(Some(TypeBTarget {
            target_id: listed.target_id,
            sensb_res: sensb_res.to_vec(),
            attrib_res: listed.attrib_res,
        }))
    }

    /// Send `data` with CRC_A appended, transmitting every bit of the last
    /// byte. Returns the InCommunicateThru reply (status first).
    pub fn send_broadcast(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        debug!("{} sending broadcast {}", self.label(), HexBytes(data));
        self.write_registers(&[(Register::BitFraming, 0x00)], false)?;
        let timeout = self.config.command_timeout;
        self.execute(Command::InCommunicateThru, &with_crc_a(data), timeout)
    }

    /// InListPassiveTarget for up to `max_targets` targets. Both caches are
    /// dropped since the controller reprograms the CIU itself. Type F needs
    /// a polling payload this call does not take, so it is refused before
    /// anything is sent.
    pub fn list_passive_targets(
        &mut self,
        modulation: Modulation,
        max_targets: u8,
    ) -> Result<Vec<DetectedTarget>> {
        if modulation == Modulation::TypeF {
            return Err(Error::unsupported("listing Type F targets"));
        }
        self.invalidate_caches();
        let command = Command::InListPassiveTarget;
        let args = [max_targets, modulation.passive_activation_code()];
        let timeout = self.config.command_timeout;
        let Some(rsp) = self.send_command(command, &args, timeout)? else {
            return Ok(Vec::new());
        };
        expect_response_code(&rsp, command.response_code())?;
        parse_target_list(modulation, &rsp[1..])
    }

    /// Poll path of InListPassiveTarget: silence is a miss and a wrong echo
    /// is only logged.
    fn list_passive(
        &mut self,
        modulation: Modulation,
        max_targets: u8,
        initiator_data: &[u8],
    ) -> Result<Option<Vec<u8>>> {
        self.invalidate_caches();
        let command = Command::InListPassiveTarget;
        let mut args = vec![max_targets, modulation.passive_activation_code()];
        args.extend_from_slice(initiator_data);
        let timeout = self.config.command_timeout;
        let Some(mut rsp) = self.send_command(command, &args, timeout)? else {
            debug!("{} no response to poll {}", self.label(), modulation);
            return Ok(None);
        };
        if rsp.first() != Some(&command.response_code()) {
            error!("{} got unexpected command code in response", self.label());
        }
        if !rsp.is_empty() {
            rsp.remove(0);
        }
        Ok(Some(rsp))
    }

    /// InDataExchange with `data` sent as-is, so it must start with the
    /// target number (Tg). Uses the exchange timeout. Silence and error
    /// status both yield `None`.
    pub fn transceive(&mut self, data: &[u8]) -> Result<Option<Vec<u8>>> {
        debug!("{} transceive", self.label());
        let timeout = self.config.exchange_timeout;
        self.data_exchange(data, timeout)
    }

    /// InDataExchange with target `target_id`.
    pub fn in_data_exchange(
        &mut self,
        target_id: u8,
        data: &[u8],
        timeout: Duration,
    ) -> Result<Option<Vec<u8>>> {
        let mut args = Vec::with_capacity(1 + data.len());
        args.push(target_id);
        args.extend_from_slice(data);
        self.data_exchange(&args, timeout)
    }

    fn data_exchange(&mut self, args: &[u8], timeout: Duration) -> Result<Option<Vec<u8>>> {
        let command = Command::InDataExchange;
        let Some(mut rsp) = self.send_command(command, args, timeout)? else {
            return Ok(None);
        };
        if rsp.first() != Some(&command.response_code()) {
            error!("{} got unexpected command code in response", self.label());
        }
        if !rsp.is_empty() {
            rsp.remove(0);
        }
        let (status, body) = split_status(&rsp)?;
        if status != 0 {
            error!("{} got error {:#04x} exchanging data", self.label(), status);
            return Ok(None);
        }
        Ok(Some(body.to_vec()))
    }

    /// Configure the controller as a Type A PICC. Returns the activation
    /// reply (mode byte and initiator command), or `None` when no initiator
    /// showed up within the command timeout.
    pub fn initialize_target_mode(&mut self) -> Result<Option<Vec<u8>>> {
        debug!("{} initializing target mode", self.label());
        self.invalidate_caches();
        let command = Command::TgInitAsTarget;
        let timeout = self.config.command_timeout;
        let Some(rsp) = self.send_command(command, &TARGET_MODE_PARAMS, timeout)? else {
            return Ok(None);
        };
        expect_response_code(&rsp, command.response_code())?;
        Ok(Some(rsp[1..].to_vec()))
    }
}
