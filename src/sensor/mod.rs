// src/sensor/mod.rs

use crate::common::{
    convert,
    error::RangeError,
    hal_traits::{EchoPin, RangeDelay, TriggerPin},
    timing,
    types::{Level, PulseOutcome},
};
use core::fmt::Debug;

/// Driver for an HC-SR04 class ultrasonic range sensor.
///
/// Owns the trigger output, the echo input and a delay provider for its
/// whole lifetime; no other code may drive the trigger line or read the
/// echo line while the driver exists, or the timing of a cycle is
/// corrupted. Rust's ownership of the two handles enforces this for safe
/// code. Handing the driver two handles that alias one physical line is
/// undefined at the hardware level and is not runtime-checked.
///
/// The driver holds no per-measurement state: every call runs one
/// independent, blocking measurement cycle and returns the sensor to
/// idle.
#[derive(Debug)]
pub struct RangeSensor<TRIG, ECHO, D> {
    trigger: TRIG,
    echo: ECHO,
    delay: D,
    echo_timeout_us: u32,
}

impl<TRIG, ECHO, D, E> RangeSensor<TRIG, ECHO, D>
where
    TRIG: TriggerPin<Error = E>,
    ECHO: EchoPin<Error = E>,
    D: RangeDelay,
    E: Debug,
{
    /// Creates a driver with the default echo timeout.
    ///
    /// The default window is derived from the chip's 4 m range limit
    /// (see [`timing::DEFAULT_ECHO_TIMEOUT`]). The trigger line is
    /// driven low before this returns, so the sensor starts from a known
    /// idle state.
    pub fn new(trigger: TRIG, echo: ECHO, delay: D) -> Result<Self, RangeError<E>> {
        Self::with_timeout(
            trigger,
            echo,
            delay,
            timing::DEFAULT_ECHO_TIMEOUT.as_micros() as u32,
        )
    }

    /// Creates a driver with an explicit echo timeout in microseconds.
    ///
    /// Returns [`RangeError::InvalidTimeout`] if `echo_timeout_us` is
    /// zero, and [`RangeError::Io`] if the trigger line cannot be driven
    /// to its idle low state.
    pub fn with_timeout(
        mut trigger: TRIG,
        echo: ECHO,
        delay: D,
        echo_timeout_us: u32,
    ) -> Result<Self, RangeError<E>> {
        if echo_timeout_us == 0 {
            return Err(RangeError::InvalidTimeout(echo_timeout_us));
        }
        trigger.set_level(Level::Low)?;
        Ok(RangeSensor {
            trigger,
            echo,
            delay,
            echo_timeout_us,
        })
    }

    /// The configured echo timeout in microseconds.
    pub fn echo_timeout_us(&self) -> u32 {
        self.echo_timeout_us
    }

    /// Measures the distance to the target in whole millimetres.
    ///
    /// Integer-only arithmetic (`mm = pulse_us * 100 / 582`, floor
    /// division), suited to targets without floating-point support.
    /// Returns [`RangeError::OutOfRange`] when no echo arrives within
    /// the configured timeout.
    pub fn distance_mm(&mut self) -> Result<u32, RangeError<E>> {
        let pulse_time_us = self.send_pulse_and_wait()?;
        Ok(convert::pulse_to_mm(pulse_time_us))
    }

    /// Measures the distance to the target in fractional centimetres.
    ///
    /// True division (`cm = (pulse_us / 2) / 29.1`). Fails exactly like
    /// [`RangeSensor::distance_mm`].
    pub fn distance_cm(&mut self) -> Result<f32, RangeError<E>> {
        let pulse_time_us = self.send_pulse_and_wait()?;
        Ok(convert::pulse_to_cm(pulse_time_us))
    }

    /// Consumes the driver and returns the underlying handles.
    pub fn release(self) -> (TRIG, ECHO, D) {
        (self.trigger, self.echo, self.delay)
    }

    // --- Measurement Cycle (Private) ---

    /// Runs one trigger/echo cycle and returns the raw pulse time.
    ///
    /// Idle -> Triggering -> Waiting-for-Echo -> {Elapsed | TimedOut};
    /// `TimedOut` maps to `OutOfRange`, every other platform failure
    /// passes through unchanged as `Io`.
    fn send_pulse_and_wait(&mut self) -> Result<u32, RangeError<E>> {
        // Hold low first to stabilize the sensor; a shortened settle can
        // produce undefined readings.
        self.trigger.set_level(Level::Low)?;
        self.delay
            .delay_us(timing::TRIGGER_SETTLE_TIME.as_micros() as u32);

        // 10 us high pulse, the documented minimum to start a ping.
        self.trigger.set_level(Level::High)?;
        self.delay
            .delay_us(timing::TRIGGER_PULSE_WIDTH.as_micros() as u32);
        self.trigger.set_level(Level::Low)?;

        match self.echo.measure_pulse(Level::High, self.echo_timeout_us) {
            Ok(PulseOutcome::Elapsed(us)) => Ok(us),
            Ok(PulseOutcome::TimedOut) => Err(RangeError::OutOfRange),
            Err(e) => Err(RangeError::Io(e)),
        }
    }
}
