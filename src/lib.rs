// src/lib.rs

#![no_std] // Specify no_std at the crate root

pub mod common;
pub mod sensor;

#[cfg(feature = "embedded-hal")]
pub mod hal;

// Re-export key types for convenience
pub use common::RangeError;
pub use common::{EchoPin, Level, PulseOutcome, RangeDelay, TriggerPin};
pub use sensor::RangeSensor;
