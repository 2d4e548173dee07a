//! Error type for the deadline-bounded retry loop

use std::error::Error;
use std::fmt;
use std::time::Duration;

/// Returned when the deadline passes before the operation succeeds
///
/// The reported failure is the timeout. The error from the final attempt is
/// carried along for observability: it appears in the `Display` output and,
/// when `E` implements [`Error`], as the [`Error::source`].
#[derive(Debug)]
pub struct RetryError<E> {
    attempts: u32,
    elapsed: Duration,
    timeout: Duration,
    last_error: E,
}

impl<E> RetryError<E> {
    pub(crate) fn new(attempts: u32, elapsed: Duration, timeout: Duration, last_error: E) -> Self {
        Self {
            attempts,
            elapsed,
            timeout,
            last_error,
        }
    }

    /// Number of attempts made before giving up
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Wall-clock time spent across all attempts
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The deadline that was exceeded
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The error from the final attempt
    pub fn last_error(&self) -> &E {
        &self.last_error
    }

    /// The error from the final attempt, consuming this error
    pub fn into_last_error(self) -> E {
        self.last_error
    }
}

impl<E: fmt::Display> fmt::Display for RetryError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "timeout reached after {} attempts over {:.2}s: {}",
            self.attempts,
            self.elapsed.as_secs_f64(),
            self.last_error
        )
    }
}

impl<E: Error + 'static> Error for RetryError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.last_error)
    }
}
