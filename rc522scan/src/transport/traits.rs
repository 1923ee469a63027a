// rc522scan/src/transport/traits.rs

//! Register transport trait.

use crate::Result;
use crate::device::registers::Register;

/// Transport trait abstracts register I/O away from protocol/device logic.
///
/// Every call is one chip-select framed exchange on the serial bus.
pub trait Transport {
    /// Write one byte to a chip register
    fn write_register(&mut self, reg: Register, value: u8) -> Result<()>;

    /// Read one byte from a chip register
    fn read_register(&mut self, reg: Register) -> Result<u8>;

    /// Pulse the hardware reset line (low, then high). Transports without a
    /// reset line keep the default no-op.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }

    /// Read-modify-write: set `mask` bits.
    fn set_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let value = self.read_register(reg)?;
        self.write_register(reg, value | mask)
    }

    /// Read-modify-write: clear `mask` bits.
    fn clear_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let value = self.read_register(reg)?;
        self.write_register(reg, value & !mask)
    }
}
