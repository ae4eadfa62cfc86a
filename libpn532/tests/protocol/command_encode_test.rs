use libpn532::protocol::{Command, Frame, Register, RfConfigItem};

#[test]
fn every_command_echoes_code_plus_one() {
    let commands = [
        Command::Diagnose,
        Command::GetFirmwareVersion,
        Command::ReadRegister,
        Command::WriteRegister,
        Command::SamConfiguration,
        Command::RfConfiguration,
        Command::InDataExchange,
        Command::InCommunicateThru,
        Command::InListPassiveTarget,
        Command::TgInitAsTarget,
    ];
    for c in commands {
        assert_eq!(c.response_code(), c.code() + 1, "{:?}", c);
    }
}

#[test]
fn write_register_frame() {
    let [hi, lo] = Register::BitFraming.address_bytes();
    let wire = Frame::encode(Command::WriteRegister.code(), &[hi, lo, 0x00]).unwrap();
    assert_eq!(
        wire,
        vec![0x00, 0x00, 0xFF, 0x05, 0xFB, 0xD4, 0x08, 0x63, 0x3D, 0x00, 0x84, 0x00]
    );
}

#[test]
fn rf_configuration_frame() {
    let wire = Frame::encode(
        Command::RfConfiguration.code(),
        &[RfConfigItem::MaxRetries.code(), 0x00, 0x00, 0x00],
    )
    .unwrap();
    assert_eq!(&wire[3..7], &[0x06, 0xFA, 0xD4, 0x32]);
    let sum = wire[5..wire.len() - 1].iter().fold(0u8, |a, &b| a.wrapping_add(b));
    assert_eq!(sum, 0);
}
