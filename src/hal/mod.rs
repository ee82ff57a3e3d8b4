// src/hal/mod.rs

// Adapters bridging embedded-hal 1.0 peripherals to the driver's pin
// traits, for platforms without a native pulse-capture primitive.

use crate::common::{
    hal_traits::{EchoPin, RangeDelay, TriggerPin},
    types::{Level, PulseOutcome},
};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

/// Sampling step of the software-polled echo measurement, in
/// microseconds.
const POLL_STEP_US: u32 = 1;

// --- Trigger Adapter ---

/// Adapts any `embedded_hal::digital::OutputPin` to [`TriggerPin`].
pub struct OutputTrigger<P> {
    pin: P,
}

impl<P: OutputPin> OutputTrigger<P> {
    pub fn new(pin: P) -> Self {
        OutputTrigger { pin }
    }

    /// Consumes the adapter and returns the wrapped pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> TriggerPin for OutputTrigger<P> {
    type Error = P::Error;

    fn set_level(&mut self, level: Level) -> Result<(), Self::Error> {
        match level {
            Level::Low => self.pin.set_low(),
            Level::High => self.pin.set_high(),
        }
    }
}

// --- Delay Adapter ---

/// Adapts any `embedded_hal::delay::DelayNs` to [`RangeDelay`].
pub struct HalDelay<D> {
    delay: D,
}

impl<D: DelayNs> HalDelay<D> {
    pub fn new(delay: D) -> Self {
        HalDelay { delay }
    }

    /// Consumes the adapter and returns the wrapped delay.
    pub fn release(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> RangeDelay for HalDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}

// --- Echo Adapter ---

/// Adapts an `embedded_hal::digital::InputPin` plus a delay source to
/// [`EchoPin`] by sampling the line once per [`POLL_STEP_US`].
///
/// Resolution is bounded by the poll step plus the platform's pin read
/// latency, which is plenty for the ~58 us/cm scale of this sensor.
/// Platforms with a hardware pulse-width counter should implement
/// [`EchoPin`] directly on top of it instead.
pub struct PolledEcho<P, D> {
    pin: P,
    delay: D,
}

impl<P: InputPin, D: DelayNs> PolledEcho<P, D> {
    pub fn new(pin: P, delay: D) -> Self {
        PolledEcho { pin, delay }
    }

    /// Consumes the adapter and returns the wrapped pin and delay.
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    fn at_level(&mut self, level: Level) -> Result<bool, P::Error> {
        Ok(Level::from(self.pin.is_high()?) == level)
    }
}

impl<P: InputPin, D: DelayNs> EchoPin for PolledEcho<P, D> {
    type Error = P::Error;

    fn read_level(&mut self) -> Result<Level, Self::Error> {
        Ok(Level::from(self.pin.is_high()?))
    }

    fn measure_pulse(
        &mut self,
        level: Level,
        timeout_us: u32,
    ) -> Result<PulseOutcome, Self::Error> {
        let mut budget_us = timeout_us;

        // Wait for the line to reach the target level.
        while !self.at_level(level)? {
            if budget_us == 0 {
                return Ok(PulseOutcome::TimedOut);
            }
            self.delay.delay_us(POLL_STEP_US);
            budget_us = budget_us.saturating_sub(POLL_STEP_US);
        }

        // Time how long the line holds the level, against the same
        // budget: a pulse that never falls inside the window is a
        // timeout, not a reading.
        let mut held_us = 0u32;
        while self.at_level(level)? {
            if budget_us == 0 {
                return Ok(PulseOutcome::TimedOut);
            }
            self.delay.delay_us(POLL_STEP_US);
            budget_us = budget_us.saturating_sub(POLL_STEP_US);
            held_us += POLL_STEP_US;
        }

        Ok(PulseOutcome::Elapsed(held_us))
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use heapless::Vec;

    /// Input pin replaying a scripted level sequence; the last entry
    /// sticks once the script is exhausted.
    struct ScriptedPin<'a> {
        levels: &'a [bool],
        idx: usize,
    }

    impl<'a> ScriptedPin<'a> {
        fn new(levels: &'a [bool]) -> Self {
            ScriptedPin { levels, idx: 0 }
        }

        fn sample(&mut self) -> bool {
            let level = self
                .levels
                .get(self.idx)
                .or(self.levels.last())
                .copied()
                .unwrap_or(false);
            self.idx += 1;
            level
        }
    }

    impl ErrorType for ScriptedPin<'_> {
        type Error = Infallible;
    }

    impl InputPin for ScriptedPin<'_> {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.sample())
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.sample())
        }
    }

    /// Output pin recording every level it is driven to.
    #[derive(Default)]
    struct RecordingPin {
        states: Vec<bool, 8>,
    }

    impl ErrorType for RecordingPin {
        type Error = Infallible;
    }

    impl OutputPin for RecordingPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.states.push(false).unwrap();
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.states.push(true).unwrap();
            Ok(())
        }
    }

    /// Delay that only counts requested nanoseconds.
    #[derive(Default)]
    struct CountingDelay {
        total_ns: u64,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    #[test]
    fn test_output_trigger_maps_levels() {
        let mut trigger = OutputTrigger::new(RecordingPin::default());
        trigger.set_level(Level::Low).unwrap();
        trigger.set_level(Level::High).unwrap();
        trigger.set_level(Level::Low).unwrap();
        let pin = trigger.release();
        assert_eq!(pin.states.as_slice(), &[false, true, false]);
    }

    #[test]
    fn test_hal_delay_passes_microseconds() {
        let mut delay = HalDelay::new(CountingDelay::default());
        delay.delay_us(7);
        assert_eq!(delay.release().total_ns, 7_000);
    }

    #[test]
    fn test_polled_echo_measures_scripted_pulse() {
        // Two low samples, then the rise, then four more high samples
        // before the fall. The rising sample itself starts the pulse, so
        // the measured width is the four held steps.
        let script = [false, false, true, true, true, true, true, false];
        let mut echo = PolledEcho::new(ScriptedPin::new(&script), CountingDelay::default());
        let outcome = echo.measure_pulse(Level::High, 1_000).unwrap();
        assert_eq!(outcome, PulseOutcome::Elapsed(4));
    }

    #[test]
    fn test_polled_echo_times_out_on_silent_line() {
        let script = [false];
        let mut echo = PolledEcho::new(ScriptedPin::new(&script), CountingDelay::default());
        let outcome = echo.measure_pulse(Level::High, 25).unwrap();
        assert_eq!(outcome, PulseOutcome::TimedOut);
        // The whole budget was slept away waiting for the rise.
        let (_, delay) = echo.release();
        assert_eq!(delay.total_ns, 25_000);
    }

    #[test]
    fn test_polled_echo_times_out_on_stuck_high_line() {
        // Some clones hold echo high for a very long time instead of
        // dropping it; that must report as a timeout, not a reading.
        let script = [true];
        let mut echo = PolledEcho::new(ScriptedPin::new(&script), CountingDelay::default());
        let outcome = echo.measure_pulse(Level::High, 25).unwrap();
        assert_eq!(outcome, PulseOutcome::TimedOut);
    }

    #[test]
    fn test_polled_echo_read_level() {
        let script = [true, false];
        let mut echo = PolledEcho::new(ScriptedPin::new(&script), CountingDelay::default());
        assert_eq!(echo.read_level().unwrap(), Level::High);
        assert_eq!(echo.read_level().unwrap(), Level::Low);
    }
}
