//! Poll once for a Type A and a Type B target and print what answered.
//!
//! Usage:
//!   cargo run -p libpn532 --example poll_loop --features serial -- /dev/ttyUSB0
//!
//! Without a port argument the first serial port found is used.

use anyhow::Context;
use libpn532::config::SerialConfig;
use libpn532::device::Device;
use libpn532::utils::bytes_to_hex;
use libpn532::PollOutcome;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SerialConfig::with_path(path),
        None => SerialConfig::default(),
    };
    let device = Device::open(&config).context("opening serial port")?;
    let mut device = device.initialize().context("initializing PN532")?;

    let fw = device.firmware_version()?;
    println!(
        "PN532 firmware {}.{} (support {:#04x})",
        fw.version, fw.revision, fw.support
    );

    match device.poll_a() {
        PollOutcome::Found(t) => println!(
            "Type A: UID {} SENS_RES {} SEL_RES {:02x} ATS {}",
            bytes_to_hex(&t.nfcid),
            bytes_to_hex(&t.sens_res),
            t.sel_res,
            bytes_to_hex(&t.ats)
        ),
        PollOutcome::NotFound => println!("Type A: none"),
        PollOutcome::Failed(e) => println!("Type A: poll failed: {}", e),
    }

    match device.poll_b() {
        PollOutcome::Found(t) => println!(
            "Type B: PUPI {} SENSB_RES {}",
            bytes_to_hex(t.nfcid()),
            bytes_to_hex(&t.sensb_res)
        ),
        PollOutcome::NotFound => println!("Type B: none"),
        PollOutcome::Failed(e) => println!("Type B: poll failed: {}", e),
    }

    device.mute()?;
    Ok(())
}
