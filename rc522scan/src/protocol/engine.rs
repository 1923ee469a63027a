// rc522scan/src/protocol/engine.rs

//! Command engine: one PCD command round against the chip, plus the CRC
//! coprocessor handshake.

use log::{debug, warn};

use crate::constants::{FIFO_CAPACITY, MAX_PAYLOAD_LEN};
use crate::device::handle::{Initialized, Reader};
use crate::device::registers::{
    Command, FLUSH_BUFFER, RX_LAST_BITS, Register, START_SEND, div_irq, error, irq,
};
use crate::types::RawResponse;
use crate::{Error, Result};

/// Interrupt configuration of a command round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrqProfile {
    /// Written to ComIEn
    pub enable: u8,
    /// ComIrq bits that mark completion
    pub wait: u8,
}

impl IrqProfile {
    /// Profile for the commands `execute` supports, `None` for the rest.
    pub fn for_command(cmd: Command) -> Option<Self> {
        match cmd {
            Command::Transceive => Some(Self {
                enable: 0x77,
                wait: irq::RX | irq::IDLE,
            }),
            Command::MfAuthent => Some(Self {
                enable: irq::ERR | irq::IDLE,
                wait: irq::IDLE,
            }),
            _ => None,
        }
    }
}

impl Reader<Initialized> {
    /// Run `command` with `input` loaded into the FIFO and collect the answer.
    ///
    /// Returns `Error::NoTag` when the chip timer fired without a reply and
    /// a protocol error for busy-wait exhaustion or chip error flags. No
    /// retries happen here.
    pub fn execute(&mut self, command: Command, input: &[u8]) -> Result<RawResponse> {
        let profile = IrqProfile::for_command(command).ok_or_else(|| {
            Error::UnsupportedOperation(format!("execute {:?}", command))
        })?;
        if input.len() > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLong {
                len: input.len(),
                max: MAX_PAYLOAD_LEN,
            });
        }

        self.write(Register::ComIEn, profile.enable | irq::SET)?;
        self.write(Register::ComIrq, !irq::SET)?;
        self.write(Register::FifoLevel, FLUSH_BUFFER)?;
        self.write(Register::Command, Command::Idle.code())?;

        #[cfg(feature = "diagnostics")]
        log::trace!("{:?} >> {}", command, crate::utils::bytes_to_hex_spaced(input));
        for &b in input {
            self.write(Register::FifoData, b)?;
        }
        self.write(Register::Command, command.code())?;

        if command == Command::Transceive {
            self.set_bits(Register::BitFraming, START_SEND)?;
        }

        let iterations = self.config().transceive_wait_iterations;
        let fired = self.wait_for_irq(profile.wait | irq::TIMER, iterations)?;

        self.clear_bits(Register::BitFraming, START_SEND)?;

        let Some(com_irq) = fired else {
            warn!(
                "{:?} did not complete within {} polls",
                command, iterations
            );
            return Err(Error::BusyWaitExhausted {
                register: Register::ComIrq,
                iterations,
            });
        };

        let flags = self.read(Register::Error)? & error::FATAL;
        if flags != 0 {
            debug!("{:?} failed, Error register {:#04x}", command, flags);
            return Err(Error::ChipError { flags });
        }

        if com_irq & profile.enable & irq::TIMER != 0 {
            return Err(Error::NoTag);
        }

        if command != Command::Transceive {
            return Ok(RawResponse::default());
        }

        self.drain_fifo()
    }

    /// Have the coprocessor compute CRC_A over `data`, low byte first.
    ///
    /// The result registers are read even if the coprocessor never signals
    /// completion; a bad CRC is rejected by the tag anyway.
    pub fn compute_crc(&mut self, data: &[u8]) -> Result<[u8; 2]> {
        self.write(Register::DivIrq, div_irq::CRC)?;
        self.write(Register::FifoLevel, FLUSH_BUFFER)?;

        for &b in data {
            self.write(Register::FifoData, b)?;
        }
        self.write(Register::Command, Command::CalcCrc.code())?;

        let iterations = self.config().crc_wait_iterations;
        let mut done = false;
        for _ in 0..iterations {
            if self.read(Register::DivIrq)? & div_irq::CRC != 0 {
                done = true;
                break;
            }
        }
        if !done {
            debug!("CRC coprocessor silent after {} polls", iterations);
        }

        let low = self.read(Register::CrcResultL)?;
        let high = self.read(Register::CrcResultH)?;
        Ok([low, high])
    }

    /// Poll ComIrq until any `mask` bit is set. `None` once `iterations`
    /// reads have gone by without one.
    fn wait_for_irq(&mut self, mask: u8, iterations: u32) -> Result<Option<u8>> {
        for _ in 0..iterations {
            let n = self.read(Register::ComIrq)?;
            if n & mask != 0 {
                return Ok(Some(n));
            }
        }
        Ok(None)
    }

    fn drain_fifo(&mut self) -> Result<RawResponse> {
        let level = self.read(Register::FifoLevel)? as usize;
        let last_bits = (self.read(Register::Control)? & RX_LAST_BITS) as usize;

        let bits = if last_bits != 0 {
            level.saturating_sub(1) * 8 + last_bits
        } else {
            level * 8
        };

        let count = level.clamp(1, FIFO_CAPACITY);
        let mut data = Vec::with_capacity(count);
        for _ in 0..count {
            data.push(self.read(Register::FifoData)?);
        }
        #[cfg(feature = "diagnostics")]
        log::trace!("<< {} ({} bits)", crate::utils::bytes_to_hex_spaced(&data), bits);
        Ok(RawResponse { data, bits })
    }
}
