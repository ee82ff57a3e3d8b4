// src/common/hal_traits.rs

use super::types::{Level, PulseOutcome};
use core::fmt::Debug;

/// Abstraction for the delays required by the trigger sequence.
///
/// Note: This could potentially be replaced by directly requiring
/// `embedded_hal::delay::DelayNs` if embedded-hal v1 is mandated; the
/// `embedded-hal` feature provides an adapter instead.
pub trait RangeDelay {
    /// Block the calling thread for at least the specified number of
    /// microseconds.
    fn delay_us(&mut self, us: u32);
}

/// Write-only digital output driving the sensor's trigger line.
pub trait TriggerPin {
    /// Associated error type for pin I/O errors.
    type Error: Debug;

    /// Drives the line to the given logic level.
    fn set_level(&mut self, level: Level) -> Result<(), Self::Error>;
}

/// Read-only digital input attached to the sensor's echo line.
///
/// Implementations must also provide the bounded pulse-width measurement
/// primitive the ranging cycle is built on. Platforms with a hardware
/// pulse capture unit should implement `measure_pulse` on top of it; the
/// `embedded-hal` feature offers a software-polled fallback.
pub trait EchoPin {
    /// Associated error type for pin I/O errors.
    type Error: Debug;

    /// Reads the current logic level of the line.
    fn read_level(&mut self) -> Result<Level, Self::Error>;

    /// Blocks until the line reaches `level` and then returns to the
    /// opposite level, or until `timeout_us` microseconds have elapsed.
    ///
    /// Returns `Ok(PulseOutcome::Elapsed(us))` with the time the line
    /// held `level`, or `Ok(PulseOutcome::TimedOut)` if the budget was
    /// spent first. The budget covers both the wait for the level to be
    /// reached and the pulse itself. Hardware faults are returned as
    /// `Err(Self::Error)` and are never folded into the outcome.
    fn measure_pulse(
        &mut self,
        level: Level,
        timeout_us: u32,
    ) -> Result<PulseOutcome, Self::Error>;
}
