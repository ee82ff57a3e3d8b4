// src/common/error.rs

#[derive(Debug, thiserror::Error)]
pub enum RangeError<E = ()>
where
    E: core::fmt::Debug, // Debug is the minimum bound for the Io format string
{
    /// Underlying I/O error from the HAL implementation.
    #[error("I/O error: {0:?}")] // Format string requires Debug on E
    Io(E),

    /// No echo was detected within the configured `echo_timeout_us`.
    ///
    /// The target is beyond the sensor's usable distance or absent.
    /// Recoverable: the next measurement cycle may succeed.
    #[error("no echo within timeout, target out of range")]
    OutOfRange,

    /// The echo timeout passed at construction was not a positive number
    /// of microseconds.
    #[error("invalid echo timeout: {0} us")]
    InvalidTimeout(u32),
}

// Allow mapping from underlying HAL error if From is implemented
impl<E: core::fmt::Debug> From<E> for RangeError<E> {
    fn from(e: E) -> Self {
        RangeError::Io(e)
    }
}

// Note: For the Io(E) variant's #[error("...")] message to work correctly even
// in no_std, the underlying error type `E` must implement `core::fmt::Debug`.
