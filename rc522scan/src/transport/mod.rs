// rc522scan/src/transport/mod.rs

//! Register transports: the trait, a mock chip, and SPI hardware behind `hal`.

#[cfg(feature = "hal")]
pub mod hal;
pub mod mock;
pub mod traits;

#[cfg(feature = "hal")]
pub use hal::SpiTransport;
pub use mock::{ChipReply, MockTransport};
pub use traits::Transport;
