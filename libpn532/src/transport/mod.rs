// libpn532-rs/libpn532/src/transport/mod.rs
//! Byte-stream transports the link runs over.

pub mod mock;
#[cfg(feature = "serial")]
pub mod serial;
pub mod traits;

pub use mock::MockTransport;
#[cfg(feature = "serial")]
pub use serial::SerialTransport;
pub use traits::Transport;
