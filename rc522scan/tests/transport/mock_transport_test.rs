use rc522scan::device::{Command, Register};
use rc522scan::transport::{ChipReply, MockTransport, Transport};

#[test]
fn irq_register_bit7_selects_set_or_clear() {
    let mut m = MockTransport::new();
    m.write_register(Register::ComIrq, 0x80 | 0x21).unwrap();
    assert_eq!(m.read_register(Register::ComIrq).unwrap(), 0x21);
    m.write_register(Register::ComIrq, 0x01).unwrap();
    assert_eq!(m.read_register(Register::ComIrq).unwrap(), 0x20);
}

#[test]
fn transceive_fires_on_start_send() {
    let mut m = MockTransport::new();
    m.push_reply(ChipReply::bytes(vec![0xAA, 0xBB]));

    m.write_register(Register::FifoData, 0x26).unwrap();
    m.write_register(Register::Command, Command::Transceive.code())
        .unwrap();
    assert!(m.sent_frames().is_empty());

    m.set_bits(Register::BitFraming, 0x80).unwrap();
    assert_eq!(m.sent_frames(), vec![vec![0x26]]);
    assert_eq!(m.read_register(Register::FifoLevel).unwrap(), 2);
    assert_eq!(m.read_register(Register::FifoData).unwrap(), 0xAA);
    assert_eq!(m.pending_replies(), 0);
}

#[test]
fn clones_share_chip_state() {
    let a = MockTransport::new();
    let mut b = a.clone();
    b.write_register(Register::TReloadL, 30).unwrap();
    assert_eq!(a.register(Register::TReloadL), 30);
    assert_eq!(a.writes(), vec![(Register::TReloadL, 30)]);

    a.clear_log();
    assert!(b.writes().is_empty());
    assert_eq!(b.register(Register::TReloadL), 30);
}
