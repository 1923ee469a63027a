// rc522scan/src/device/registers.rs

//! MFRC522 register map, command codes and bit masks.

/// Register addresses (datasheet section 9). Pages 0-3 only; reserved
/// addresses are left out.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    // page 0: command and status
    /// Starts and stops command execution
    Command = 0x01,
    /// Interrupt request enable
    ComIEn = 0x02,
    /// Interrupt request enable, CRC and MFIN
    DivIEn = 0x03,
    /// Interrupt request bits
    ComIrq = 0x04,
    /// Interrupt request bits, CRC and MFIN
    DivIrq = 0x05,
    /// Error bits of the last command
    Error = 0x06,
    /// Communication status
    Status1 = 0x07,
    /// Receiver and transmitter status
    Status2 = 0x08,
    /// FIFO input and output
    FifoData = 0x09,
    /// Bytes stored in the FIFO
    FifoLevel = 0x0A,
    /// FIFO underflow and overflow warning level
    WaterLevel = 0x0B,
    /// Miscellaneous control, RxLastBits
    Control = 0x0C,
    /// Bit-oriented frame adjustments, StartSend
    BitFraming = 0x0D,
    /// First bit collision position
    Coll = 0x0E,
    // page 1: command
    /// Transmit and receive modes, CRC preset
    Mode = 0x11,
    /// Transmission data rate and framing
    TxMode = 0x12,
    /// Reception data rate and framing
    RxMode = 0x13,
    /// Antenna driver pins TX1 and TX2
    TxControl = 0x14,
    /// Transmission modulation
    TxAsk = 0x15,
    /// Analog module source selection
    TxSel = 0x16,
    /// Receiver settings
    RxSel = 0x17,
    /// Bit decoder thresholds
    RxThreshold = 0x18,
    /// Demodulator settings
    Demod = 0x19,
    /// MIFARE transmission parameters
    MfTx = 0x1C,
    /// MIFARE reception parameters
    MfRx = 0x1D,
    /// UART speed
    SerialSpeed = 0x1F,
    // page 2: configuration
    /// CRC result, high byte
    CrcResultH = 0x21,
    /// CRC result, low byte
    CrcResultL = 0x22,
    /// Modulation width
    ModWidth = 0x24,
    /// Receiver gain
    RfCfg = 0x26,
    /// n-driver conductance
    GsN = 0x27,
    /// p-driver conductance, no modulation
    CwGsP = 0x28,
    /// p-driver conductance, modulation
    ModGsP = 0x29,
    /// Timer settings
    TMode = 0x2A,
    /// Timer prescaler, low bits
    TPrescaler = 0x2B,
    /// Timer reload value, high byte
    TReloadH = 0x2C,
    /// Timer reload value, low byte
    TReloadL = 0x2D,
    /// Timer value, high byte
    TCounterValH = 0x2E,
    /// Timer value, low byte
    TCounterValL = 0x2F,
    // page 3: test
    /// Self-test control
    AutoTest = 0x36,
    /// Chip version
    Version = 0x37,
}

impl Register {
    /// Register address, 0x00-0x3F
    pub fn address(&self) -> u8 {
        *self as u8
    }

    /// SPI address byte for a write: `0 | addr[5:0] | 0`.
    pub fn write_address(&self) -> u8 {
        (self.address() << 1) & 0x7E
    }

    /// SPI address byte for a read: MSB set.
    pub fn read_address(&self) -> u8 {
        self.write_address() | 0x80
    }
}

/// PCD command codes written to `Register::Command`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// No action, cancels the current command
    Idle = 0x00,
    /// Stores 25 bytes into the internal buffer
    Mem = 0x01,
    /// Generates a 10-byte random ID
    GenerateRandomId = 0x02,
    /// Runs the CRC coprocessor
    CalcCrc = 0x03,
    /// Transmits the FIFO contents
    Transmit = 0x04,
    /// Modifies Command register bits without changing the command
    NoCmdChange = 0x07,
    /// Activates the receiver
    Receive = 0x08,
    /// Transmits the FIFO, then activates the receiver
    Transceive = 0x0C,
    /// MIFARE standard authentication
    MfAuthent = 0x0E,
    /// Resets the chip
    SoftReset = 0x0F,
}

impl Command {
    /// Value written to `Register::Command`
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Decode the command bits of a `Command` register value.
    pub fn from_code(code: u8) -> Option<Self> {
        match code & 0x0F {
            0x00 => Some(Self::Idle),
            0x01 => Some(Self::Mem),
            0x02 => Some(Self::GenerateRandomId),
            0x03 => Some(Self::CalcCrc),
            0x04 => Some(Self::Transmit),
            0x07 => Some(Self::NoCmdChange),
            0x08 => Some(Self::Receive),
            0x0C => Some(Self::Transceive),
            0x0E => Some(Self::MfAuthent),
            0x0F => Some(Self::SoftReset),
            _ => None,
        }
    }
}

/// ComIrq / ComIEn bits
pub mod irq {
    /// Timer reached zero
    pub const TIMER: u8 = 0x01;
    /// A bit in the Error register is set
    pub const ERR: u8 = 0x02;
    /// FIFO almost empty
    pub const LO_ALERT: u8 = 0x04;
    /// FIFO almost full
    pub const HI_ALERT: u8 = 0x08;
    /// Command finished
    pub const IDLE: u8 = 0x10;
    /// End of received stream
    pub const RX: u8 = 0x20;
    /// Last bit transmitted
    pub const TX: u8 = 0x40;
    /// Set1 in ComIrq, IRqInv in ComIEn
    pub const SET: u8 = 0x80;
}

/// DivIrq bits
pub mod div_irq {
    /// CRC coprocessor finished
    pub const CRC: u8 = 0x04;
    /// Set2: written bits are set instead of cleared
    pub const SET: u8 = 0x80;
}

/// Error register bits
pub mod error {
    /// SOF error or wrong byte count
    pub const PROTOCOL: u8 = 0x01;
    /// Parity check failed
    pub const PARITY: u8 = 0x02;
    /// RxCRCEn set and the CRC failed
    pub const CRC: u8 = 0x04;
    /// Bit collision detected
    pub const COLL: u8 = 0x08;
    /// FIFO written while full
    pub const BUFFER_OVFL: u8 = 0x10;

    /// Flags that invalidate a transceive round
    pub const FATAL: u8 = BUFFER_OVFL | COLL | PARITY | PROTOCOL;
}

/// FifoLevel: FlushBuffer
pub const FLUSH_BUFFER: u8 = 0x80;

/// BitFraming: StartSend
pub const START_SEND: u8 = 0x80;

/// BitFraming: TxLastBits for a 7-bit short frame
pub const SHORT_FRAME_BITS: u8 = 0x07;

/// Control: RxLastBits
pub const RX_LAST_BITS: u8 = 0x07;

/// TxControl: Tx1RFEn | Tx2RFEn
pub const ANTENNA_BITS: u8 = 0x03;

/// RFCfg: RxGain[2:0]
pub const RX_GAIN_MASK: u8 = 0x70;
