// src/common/convert.rs

// Both conversions encode the same physics: sound travels at ~343.2 m/s,
// so each cm of target distance adds ~29.1 us of round-trip pulse time
// (the pulse walks the distance twice), i.e. ~5.82 us per mm. The two
// formulas are deliberately asymmetric and must stay that way: callers
// on integer-only targets rely on the truncation of `pulse_to_mm`.

/// One-way sound travel time per centimetre, in microseconds.
///
/// 343.2 m/s is 0.03432 cm/us, so covering 1 cm takes ~29.1 us. The
/// centimetre conversion halves the pulse time first (out and back),
/// then divides by this constant.
pub const PULSE_US_PER_CM: f32 = 29.1;

/// Scaled integer divisor for the millimetre conversion.
///
/// 5.82 us of pulse time per mm, scaled by 100 so the whole conversion
/// stays in integer arithmetic: `mm = pulse_us * 100 / 582`.
pub const PULSE_US_PER_MM_X100: u64 = 582;

/// Converts an echo pulse time to a distance in millimetres.
///
/// Integer-only arithmetic with floor division, suited to targets
/// without floating-point support. The intermediate product is widened
/// to `u64` so no `u32` pulse time can overflow.
///
/// # Arguments
///
/// * `pulse_time_us`: Microseconds the echo line was held high.
///
/// # Returns
///
/// The distance in whole millimetres, truncated.
#[inline]
pub const fn pulse_to_mm(pulse_time_us: u32) -> u32 {
    ((pulse_time_us as u64 * 100) / PULSE_US_PER_MM_X100) as u32
}

/// Converts an echo pulse time to a distance in centimetres.
///
/// True floating-point division, yielding fractional precision:
/// `cm = (pulse_us / 2) / 29.1`.
///
/// # Arguments
///
/// * `pulse_time_us`: Microseconds the echo line was held high.
///
/// # Returns
///
/// The distance in centimetres.
#[inline]
pub fn pulse_to_cm(pulse_time_us: u32) -> f32 {
    (pulse_time_us as f32 / 2.0) / PULSE_US_PER_CM
}
