// Shared helpers for integration tests. Each aggregator in `tests/` pulls
// this in with `#[path]`, so not every item is used by every crate.
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

pub use helpers::*;
