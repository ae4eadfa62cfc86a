// libpn532-rs/libpn532/src/device/mod.rs
//! Driver instance: link handshake, caches, configuration and discovery.

pub mod builder;
pub mod cache;
mod discovery;
pub mod handle;
pub mod link;
pub mod modulation;
mod registers;
pub mod rf_config;

pub use builder::DeviceBuilder;
pub use cache::{RegisterCache, RfConfigCache, StateCache};
pub use handle::{Device, Initialized, Uninitialized};
pub use link::{Link, LinkState};
pub use modulation::{ModeRegisters, RawExchange};
pub use rf_config::timeout_index;
