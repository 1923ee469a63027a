// rc522scan/src/transport/mock.rs

//! Register-level mock of the reader chip.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::Result;
use crate::device::registers::{
    Command, FLUSH_BUFFER, RX_LAST_BITS, Register, START_SEND, div_irq, irq,
};
use crate::protocol::checksum::crc_a;
use crate::transport::traits::Transport;

/// What the simulated tag does when the chip transmits a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChipReply {
    /// Tag answers with `data`; `last_bits` valid bits in the final byte
    /// (0 = whole byte).
    Frame {
        /// Answer bytes
        data: Vec<u8>,
        /// Valid bits in the last byte
        last_bits: u8,
    },
    /// Nobody answers: the chip timer fires.
    Timeout,
    /// Reception completes with the given Error register flags.
    ChipError(u8),
    /// The chip never raises any interrupt.
    Silent,
}

impl ChipReply {
    /// Whole-byte answer
    pub fn bytes(data: Vec<u8>) -> Self {
        Self::Frame { data, last_bits: 0 }
    }
}

#[derive(Debug)]
struct ChipState {
    regs: [u8; 0x40],
    fifo: VecDeque<u8>,
    replies: VecDeque<ChipReply>,
    writes: Vec<(Register, u8)>,
    reads: HashMap<Register, usize>,
    frames: Vec<Vec<u8>>,
    crc_stalled: bool,
    resets: usize,
}

impl ChipState {
    fn new() -> Self {
        let mut regs = [0u8; 0x40];
        regs[Register::Version as usize] = 0x92;
        Self {
            regs,
            fifo: VecDeque::new(),
            replies: VecDeque::new(),
            writes: Vec::new(),
            reads: HashMap::new(),
            frames: Vec::new(),
            crc_stalled: false,
            resets: 0,
        }
    }

    fn reg(&self, reg: Register) -> u8 {
        self.regs[reg as usize]
    }

    fn set(&mut self, reg: Register, value: u8) {
        self.regs[reg as usize] = value;
    }

    /// ComIrq/DivIrq: bit 7 selects whether the marked bits are set or cleared.
    fn write_irq(&mut self, reg: Register, value: u8) {
        let marked = value & 0x7F;
        let current = self.reg(reg);
        if value & 0x80 != 0 {
            self.set(reg, current | marked);
        } else {
            self.set(reg, current & !marked);
        }
    }

    fn current_command(&self) -> Option<Command> {
        Command::from_code(self.reg(Register::Command))
    }

    fn run_command(&mut self, cmd: Option<Command>) {
        match cmd {
            Some(Command::CalcCrc) => {
                let data: Vec<u8> = self.fifo.drain(..).collect();
                if !self.crc_stalled {
                    let crc = crc_a(&data);
                    self.set(Register::CrcResultL, crc[0]);
                    self.set(Register::CrcResultH, crc[1]);
                    let div = self.reg(Register::DivIrq);
                    self.set(Register::DivIrq, div | div_irq::CRC);
                }
            }
            Some(Command::MfAuthent) => self.answer(),
            Some(Command::SoftReset) => {
                self.fifo.clear();
                self.set(Register::Command, 0);
            }
            _ => {}
        }
    }

    fn answer(&mut self) {
        let sent: Vec<u8> = self.fifo.drain(..).collect();
        self.frames.push(sent);
        let reply = self.replies.pop_front().unwrap_or(ChipReply::Timeout);
        let com = self.reg(Register::ComIrq);
        match reply {
            ChipReply::Frame { data, last_bits } => {
                self.fifo.extend(data);
                self.set(Register::Control, last_bits & RX_LAST_BITS);
                self.set(Register::Error, 0);
                self.set(Register::ComIrq, com | irq::RX | irq::IDLE);
            }
            ChipReply::Timeout => {
                self.set(Register::Error, 0);
                self.set(Register::ComIrq, com | irq::TIMER);
            }
            ChipReply::ChipError(flags) => {
                self.set(Register::Error, flags);
                self.set(Register::ComIrq, com | irq::RX | irq::IDLE | irq::ERR);
            }
            ChipReply::Silent => {}
        }
    }
}

/// Mock transport for unit tests: a register-level model of the reader chip.
///
/// Clones share the same chip, so a test can hand one clone to a `Reader`
/// and keep another for assertions.
#[derive(Debug, Clone)]
pub struct MockTransport {
    chip: Rc<RefCell<ChipState>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Fresh chip: registers zeroed except `Version` (0x92)
    pub fn new() -> Self {
        Self {
            chip: Rc::new(RefCell::new(ChipState::new())),
        }
    }

    /// Queue the answer to the next transmitted frame. With no queued
    /// replies the chip reports a timeout, i.e. an empty field.
    pub fn push_reply(&self, reply: ChipReply) {
        self.chip.borrow_mut().replies.push_back(reply);
    }

    /// Queue several answers
    pub fn push_replies(&self, replies: impl IntoIterator<Item = ChipReply>) {
        self.chip.borrow_mut().replies.extend(replies);
    }

    /// Answers not consumed yet
    pub fn pending_replies(&self) -> usize {
        self.chip.borrow().replies.len()
    }

    /// Keep the CRC coprocessor from ever finishing.
    pub fn set_crc_stalled(&self, stalled: bool) {
        self.chip.borrow_mut().crc_stalled = stalled;
    }

    /// Frames handed to the tag, in order.
    pub fn sent_frames(&self) -> Vec<Vec<u8>> {
        self.chip.borrow().frames.clone()
    }

    /// Every register write, in order.
    pub fn writes(&self) -> Vec<(Register, u8)> {
        self.chip.borrow().writes.clone()
    }

    /// Reads of `reg` since the log was last cleared
    pub fn read_count(&self, reg: Register) -> usize {
        self.chip.borrow().reads.get(&reg).copied().unwrap_or(0)
    }

    /// Current register content
    pub fn register(&self, reg: Register) -> u8 {
        self.chip.borrow().reg(reg)
    }

    /// Overwrite a register without logging a write
    pub fn set_register(&self, reg: Register, value: u8) {
        self.chip.borrow_mut().set(reg, value);
    }

    /// Number of hardware resets requested.
    pub fn resets(&self) -> usize {
        self.chip.borrow().resets
    }

    /// Forget recorded writes, reads and frames but keep register state and
    /// queued replies.
    pub fn clear_log(&self) {
        let mut chip = self.chip.borrow_mut();
        chip.writes.clear();
        chip.reads.clear();
        chip.frames.clear();
    }
}

impl Transport for MockTransport {
    fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        let mut chip = self.chip.borrow_mut();
        chip.writes.push((reg, value));
        match reg {
            Register::ComIrq | Register::DivIrq => chip.write_irq(reg, value),
            Register::FifoData => chip.fifo.push_back(value),
            Register::FifoLevel => {
                if value & FLUSH_BUFFER != 0 {
                    chip.fifo.clear();
                }
            }
            Register::Command => {
                chip.set(reg, value);
                let cmd = Command::from_code(value);
                chip.run_command(cmd);
            }
            Register::BitFraming => {
                chip.set(reg, value);
                if value & START_SEND != 0
                    && chip.current_command() == Some(Command::Transceive)
                {
                    chip.answer();
                }
            }
            _ => chip.set(reg, value),
        }
        Ok(())
    }

    fn read_register(&mut self, reg: Register) -> Result<u8> {
        let mut chip = self.chip.borrow_mut();
        *chip.reads.entry(reg).or_insert(0) += 1;
        let value = match reg {
            Register::FifoData => chip.fifo.pop_front().unwrap_or(0),
            Register::FifoLevel => chip.fifo.len().min(64) as u8,
            _ => chip.reg(reg),
        };
        Ok(value)
    }

    fn reset(&mut self) -> Result<()> {
        let mut chip = self.chip.borrow_mut();
        chip.resets += 1;
        chip.fifo.clear();
        Ok(())
    }
}
