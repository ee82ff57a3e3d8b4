// src/common/timing.rs

use core::time::Duration;

// Nominal values from the HC-SR04 datasheet. The settle and pulse widths
// are minimums; holding the trigger longer is harmless but delays the
// ping. Skipping or shortening the settle hold can produce noisy reads.

// === Trigger Timing ===

/// Low hold before the trigger pulse, to stabilize the sensor.
pub const TRIGGER_SETTLE_TIME: Duration = Duration::from_micros(5);
/// Width of the high trigger pulse (datasheet minimum to start a ping).
pub const TRIGGER_PULSE_WIDTH: Duration = Duration::from_micros(10);

// === Echo Timing ===

/// Maximum detectable range of the chip.
pub const MAX_RANGE_CM: u32 = 400;

/// Default listen window for the echo line.
///
/// Derived from the chip's range limit with margin: 500 cm out-and-back
/// at ~30 us of round-trip pulse time per cm, i.e. 500 * 2 * 30 us.
pub const DEFAULT_ECHO_TIMEOUT: Duration = Duration::from_micros(500 * 2 * 30);
