// rc522scan/src/transport/hal.rs

//! SPI transport over `embedded-hal` 1.0.

#![cfg(feature = "hal")]

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{Operation, SpiDevice};

use crate::device::registers::Register;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Reset pulse and oscillator start-up time
const RESET_HOLD_MS: u32 = 50;

/// SPI transport for a real chip. The SPI device drives chip select, so a
/// register access is exactly one transaction.
pub struct SpiTransport<SPI, RST, D> {
    spi: SPI,
    rst: RST,
    delay: D,
}

impl<SPI, RST, D> SpiTransport<SPI, RST, D>
where
    SPI: SpiDevice,
    RST: OutputPin,
    D: DelayNs,
{
    /// Wrap an SPI device, the reset pin and a delay source.
    pub fn new(spi: SPI, rst: RST, delay: D) -> Self {
        Self { spi, rst, delay }
    }

    /// Give the bus, reset pin and delay back.
    pub fn release(self) -> (SPI, RST, D) {
        (self.spi, self.rst, self.delay)
    }
}

impl<SPI, RST, D> Transport for SpiTransport<SPI, RST, D>
where
    SPI: SpiDevice,
    RST: OutputPin,
    D: DelayNs,
{
    fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        self.spi
            .write(&[reg.write_address(), value])
            .map_err(|e| Error::Transport(format!("write {:?}: {:?}", reg, e)))
    }

    fn read_register(&mut self, reg: Register) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.spi
            .transaction(&mut [
                Operation::Write(&[reg.read_address()]),
                Operation::Read(&mut buf),
            ])
            .map_err(|e| Error::Transport(format!("read {:?}: {:?}", reg, e)))?;
        Ok(buf[0])
    }

    fn reset(&mut self) -> Result<()> {
        self.rst
            .set_low()
            .map_err(|e| Error::ResetLine(format!("{:?}", e)))?;
        self.delay.delay_ms(RESET_HOLD_MS);
        self.rst
            .set_high()
            .map_err(|e| Error::ResetLine(format!("{:?}", e)))?;
        self.delay.delay_ms(RESET_HOLD_MS);
        Ok(())
    }
}
