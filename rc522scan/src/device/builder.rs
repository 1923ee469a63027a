// rc522scan/src/device/builder.rs

//! Builder for `Reader`.

use crate::device::config::ReaderConfig;
use crate::device::handle::{Initialized, Reader, Uninitialized};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
#[derive(Default)]
pub struct ReaderBuilder {
    transport: Option<Box<dyn Transport>>,
    config: ReaderConfig,
}

impl ReaderBuilder {
    /// Empty builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the reader configuration
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return an uninitialized Reader.
    /// Requires a transport to be provided; otherwise returns NoTransport.
    pub fn build_uninitialized(self) -> Result<Reader<Uninitialized>> {
        match self.transport {
            Some(t) => Ok(Reader::new_with_transport(t, self.config)),
            None => Err(Error::NoTransport),
        }
    }

    /// Build and initialize in one step.
    pub fn build(self) -> Result<Reader<Initialized>> {
        self.build_uninitialized()?.initialize()
    }
}
