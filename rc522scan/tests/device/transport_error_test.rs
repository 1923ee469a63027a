use rc522scan::device::{Reader, ReaderConfig, Register};
use rc522scan::transport::{MockTransport, Transport};
use rc522scan::{Error, RequestMode, Result, Status};

/// Wraps the mock chip and fails every bus access once `budget` runs out.
struct FlakyBus {
    inner: MockTransport,
    budget: usize,
}

impl FlakyBus {
    fn spend(&mut self) -> Result<()> {
        if self.budget == 0 {
            return Err(Error::Transport("bus fault".into()));
        }
        self.budget -= 1;
        Ok(())
    }
}

impl Transport for FlakyBus {
    fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        self.spend()?;
        self.inner.write_register(reg, value)
    }

    fn read_register(&mut self, reg: Register) -> Result<u8> {
        self.spend()?;
        self.inner.read_register(reg)
    }
}

#[test]
fn initialize_propagates_bus_fault() {
    let bus = FlakyBus {
        inner: MockTransport::new(),
        budget: 3,
    };
    let reader = Reader::new_with_transport(Box::new(bus), ReaderConfig::default());
    match reader.initialize() {
        Err(Error::Transport(msg)) => assert_eq!(msg, "bus fault"),
        Err(other) => panic!("expected Transport, got {:?}", other),
        Ok(_) => panic!("initialize should fail"),
    }
}

#[test]
fn bus_fault_mid_request_is_a_protocol_error() -> anyhow::Result<()> {
    let bus = FlakyBus {
        inner: MockTransport::new(),
        budget: 15,
    };
    let mut reader = Reader::new_with_transport(Box::new(bus), ReaderConfig::default())
        .initialize()?;

    let result = reader.request(RequestMode::Idle);
    assert!(matches!(result, Err(Error::Transport(_))));
    assert_eq!(Status::of(&result), Status::Error);
    Ok(())
}
