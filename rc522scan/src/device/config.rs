// rc522scan/src/device/config.rs

//! Reader configuration

use crate::constants::{CRC_WAIT_ITERATIONS, TRANSCEIVE_WAIT_ITERATIONS};
use crate::device::registers::Register;

/// Register writes applied after the soft reset, in order.
///
/// TAuto with a 0x0D3E prescaler gives a ~40 kHz timer; a reload of 30
/// makes the receive timeout roughly 0.75 ms. TxAsk forces 100% ASK and
/// Mode presets the CRC coprocessor to 0x6363.
pub const INIT_SEQUENCE: &[(Register, u8)] = &[
    (Register::TMode, 0x8D),
    (Register::TPrescaler, 0x3E),
    (Register::TReloadL, 30),
    (Register::TReloadH, 0),
    (Register::TxAsk, 0x40),
    (Register::Mode, 0x3D),
];

/// Receiver gain (RFCfg RxGain)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AntennaGain {
    /// 18 dB
    Db18 = 0x00,
    /// 23 dB
    Db23 = 0x01,
    /// 33 dB
    Db33 = 0x04,
    /// 38 dB, the reset value
    Db38 = 0x05,
    /// 43 dB
    Db43 = 0x06,
    /// 48 dB
    Db48 = 0x07,
}

impl AntennaGain {
    /// Value in RFCfg bit position
    pub fn register_bits(&self) -> u8 {
        (*self as u8) << 4
    }
}

/// Tunables of the command engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderConfig {
    /// ComIrq polls before a transceive round is abandoned
    pub transceive_wait_iterations: u32,
    /// DivIrq polls before the CRC result is read regardless
    pub crc_wait_iterations: u32,
    /// Applied during initialization when set
    pub antenna_gain: Option<AntennaGain>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            transceive_wait_iterations: TRANSCEIVE_WAIT_ITERATIONS,
            crc_wait_iterations: CRC_WAIT_ITERATIONS,
            antenna_gain: None,
        }
    }
}

impl ReaderConfig {
    /// Set the ComIrq poll bound
    pub fn with_transceive_wait_iterations(mut self, n: u32) -> Self {
        self.transceive_wait_iterations = n;
        self
    }

    /// Set the DivIrq poll bound
    pub fn with_crc_wait_iterations(mut self, n: u32) -> Self {
        self.crc_wait_iterations = n;
        self
    }

    /// Apply `gain` during initialization
    pub fn with_antenna_gain(mut self, gain: AntennaGain) -> Self {
        self.antenna_gain = Some(gain);
        self
    }
}
