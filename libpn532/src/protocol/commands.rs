// libpn532-rs/libpn532/src/protocol/commands.rs
//! Controller command codes (UM0701-02, chapter 7).

/// Command codes understood by the controller. Every reply echoes the code
/// plus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    /// Self-test
    Diagnose = 0x00,
    /// IC and firmware identification
    GetFirmwareVersion = 0x02,
    /// Field and target status
    GetGeneralStatus = 0x04,
    /// Read SFR/XRAM registers
    ReadRegister = 0x06,
    /// Write SFR/XRAM registers
    WriteRegister = 0x08,
    /// SAM mode and IRQ usage
    SamConfiguration = 0x14,
    /// Enter power down
    PowerDown = 0x16,
    /// RF settings, see [`RfConfigItem`]
    RfConfiguration = 0x32,
    /// Protocol-level exchange with an activated target
    InDataExchange = 0x40,
    /// Raw frame exchange
    InCommunicateThru = 0x42,
    /// Deselect targets
    InDeselect = 0x44,
    /// DEP activation with PSL
    InJumpForPsl = 0x46,
    /// Detect passive targets
    InListPassiveTarget = 0x4A,
    /// Release targets
    InRelease = 0x52,
    /// Select a target
    InSelect = 0x54,
    /// DEP activation
    InJumpForDep = 0x56,
    /// Autonomous polling
    InAutoPoll = 0x60,
    /// Target mode: receive
    TgGetData = 0x86,
    /// Target mode: initiator command
    TgGetInitiatorCommand = 0x88,
    /// Target mode: status
    TgGetTargetStatus = 0x8A,
    /// Enter target mode
    TgInitAsTarget = 0x8C,
    /// Target mode: send
    TgSetData = 0x8E,
    /// Target mode: respond
    TgResponseToInitiator = 0x90,
    /// Target mode: general bytes
    TgSetGeneralBytes = 0x92,
    /// Target mode: metadata
    TgSetMetadata = 0x94,
}

impl Command {
    /// Command byte sent after the TFI.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Code the controller echoes at the start of its reply.
    pub const fn response_code(self) -> u8 {
        (self as u8).wrapping_add(1)
    }
}

/// Items accepted by RFConfiguration (UM0701-02, 7.3.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RfConfigItem {
    /// ConfigurationData: bit0 RF on, bit1 AutoRFCA
    RfField = 0x01,
    /// RFU, fATR_RES_Timeout, fRetryTimeout
    VariousTimings = 0x02,
    /// MaxRtyCOM
    MaxRtyCom = 0x04,
    /// MxRtyATR, MxRtyPSL, MxRtyPassiveActivation
    MaxRetries = 0x05,
}

impl RfConfigItem {
    /// CfgItem byte.
    pub const fn code(self) -> u8 {
        self as u8
    }
}
