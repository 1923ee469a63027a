// rc522scan/src/device/handle.rs

//! Reader handle and its lifecycle.

use std::marker::PhantomData;

use log::{debug, info};

use crate::Result;
use crate::device::config::{AntennaGain, INIT_SEQUENCE, ReaderConfig};
use crate::device::registers::{ANTENNA_BITS, Command, RX_GAIN_MASK, Register};
use crate::transport::Transport;

/// Type-state marker: chip not configured yet
pub struct Uninitialized;
/// Type-state marker: chip reset, configured, antenna on
pub struct Initialized;

/// Reader handle that enforces initialization state at compile time.
///
/// The chip's registers behave like global mutable state, so the handle owns
/// the transport exclusively and every chip operation takes `&mut self`.
pub struct Reader<State = Uninitialized> {
    transport: Box<dyn Transport>,
    config: ReaderConfig,
    _state: PhantomData<State>,
}

impl<State> Reader<State> {
    /// Engine configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub(crate) fn write(&mut self, reg: Register, value: u8) -> Result<()> {
        #[cfg(feature = "diagnostics")]
        log::trace!("write {:?} <- {:#04x}", reg, value);
        self.transport.write_register(reg, value)
    }

    pub(crate) fn read(&mut self, reg: Register) -> Result<u8> {
        let value = self.transport.read_register(reg)?;
        #[cfg(feature = "diagnostics")]
        log::trace!("read {:?} -> {:#04x}", reg, value);
        Ok(value)
    }

    pub(crate) fn set_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        self.transport.set_bits(reg, mask)
    }

    pub(crate) fn clear_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        self.transport.clear_bits(reg, mask)
    }
}

impl Reader<Uninitialized> {
    /// Create a Reader from an existing Transport instance (SPI transport on
    /// hardware, MockTransport in tests).
    pub fn new_with_transport(transport: Box<dyn Transport>, config: ReaderConfig) -> Self {
        Self {
            transport,
            config,
            _state: PhantomData,
        }
    }

    /// Reset the chip and run the register configuration sequence, then
    /// switch the antenna on. Returns an initialized Reader on success.
    pub fn initialize(self) -> Result<Reader<Initialized>> {
        let mut this = self;
        this.transport.reset()?;
        this.write(Register::Command, Command::SoftReset.code())?;

        for &(reg, value) in INIT_SEQUENCE {
            this.write(reg, value)?;
        }

        let mut reader = Reader {
            transport: this.transport,
            config: this.config,
            _state: PhantomData,
        };

        if let Some(gain) = reader.config.antenna_gain {
            reader.set_antenna_gain(gain)?;
        }
        reader.antenna_on(true)?;

        let version = reader.version()?;
        info!("MFRC522 initialized (version {:#04x})", version);
        Ok(reader)
    }
}

impl Reader<Initialized> {
    /// Switch the antenna drivers TX1/TX2 on or off. Does nothing when the
    /// antenna is already in the requested state.
    pub fn antenna_on(&mut self, on: bool) -> Result<()> {
        let current = self.read(Register::TxControl)?;
        let enabled = current & ANTENNA_BITS != 0;
        match (on, enabled) {
            (true, false) => self.set_bits(Register::TxControl, ANTENNA_BITS),
            (false, true) => self.clear_bits(Register::TxControl, ANTENNA_BITS),
            _ => Ok(()),
        }
    }

    /// Whether either antenna driver is enabled
    pub fn is_antenna_on(&mut self) -> Result<bool> {
        Ok(self.read(Register::TxControl)? & ANTENNA_BITS != 0)
    }

    /// Set the receiver gain, leaving the other RFCfg bits untouched.
    pub fn set_antenna_gain(&mut self, gain: AntennaGain) -> Result<()> {
        let current = self.read(Register::RfCfg)?;
        let value = (current & !RX_GAIN_MASK) | gain.register_bits();
        debug!("antenna gain {:?} (RFCfg {:#04x})", gain, value);
        self.write(Register::RfCfg, value)
    }

    /// Chip type and version (0x91 = v1.0, 0x92 = v2.0).
    pub fn version(&mut self) -> Result<u8> {
        self.read(Register::Version)
    }
}
