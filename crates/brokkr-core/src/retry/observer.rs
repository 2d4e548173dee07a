//! Retry observation and logging
//!
//! The [`RetryObserver`] trait receives callbacks from the retry loop, and
//! [`TracingObserver`] logs them through the `tracing` crate.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Observer trait for retry lifecycle events
///
/// Implement this to receive callbacks during retry execution, for logging,
/// metrics collection, or test assertions.
pub trait RetryObserver: Send + Sync {
    /// Called when an attempt is about to start (1-indexed)
    fn on_attempt_start(&self, attempt: u32);

    /// Called when an attempt fails and the loop will sleep and retry
    fn on_attempt_failed(&self, attempt: u32, error: &dyn fmt::Display, delay: Duration);

    /// Called when the operation succeeds
    fn on_success(&self, attempt: u32, total_duration: Duration);

    /// Called when the deadline passes before a success
    fn on_deadline_exceeded(&self, attempts: u32, elapsed: Duration, last_error: &dyn fmt::Display);
}

/// A no-op observer that does nothing
///
/// Used when no observation is needed but the API requires an observer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl RetryObserver for NoOpObserver {
    fn on_attempt_start(&self, _attempt: u32) {}

    fn on_attempt_failed(&self, _attempt: u32, _error: &dyn fmt::Display, _delay: Duration) {}

    fn on_success(&self, _attempt: u32, _total_duration: Duration) {}

    fn on_deadline_exceeded(
        &self,
        _attempts: u32,
        _elapsed: Duration,
        _last_error: &dyn fmt::Display,
    ) {
    }
}

/// An observer that logs retry events using the `tracing` crate
///
/// # Log levels
///
/// - `on_attempt_start`: DEBUG
/// - `on_attempt_failed`: WARN
/// - `on_success`: INFO (if > 1 attempt) or DEBUG (first attempt)
/// - `on_deadline_exceeded`: ERROR
#[derive(Debug, Clone)]
pub struct TracingObserver {
    /// Name of the operation being retried (for log context)
    operation: String,
}

impl TracingObserver {
    /// Create a new tracing observer
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
        }
    }

    /// Get the operation name
    pub fn operation(&self) -> &str {
        &self.operation
    }
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new("retry")
    }
}

impl RetryObserver for TracingObserver {
    fn on_attempt_start(&self, attempt: u32) {
        tracing::debug!(
            operation = %self.operation,
            attempt = attempt,
            "starting attempt"
        );
    }

    fn on_attempt_failed(&self, attempt: u32, error: &dyn fmt::Display, delay: Duration) {
        tracing::warn!(
            operation = %self.operation,
            attempt = attempt,
            error = %error,
            delay_ms = delay.as_millis() as u64,
            "attempt failed, will retry"
        );
    }

    fn on_success(&self, attempt: u32, total_duration: Duration) {
        if attempt > 1 {
            tracing::info!(
                operation = %self.operation,
                attempt = attempt,
                total_duration_ms = total_duration.as_millis() as u64,
                "succeeded after retry"
            );
        } else {
            tracing::debug!(
                operation = %self.operation,
                duration_ms = total_duration.as_millis() as u64,
                "succeeded on first attempt"
            );
        }
    }

    fn on_deadline_exceeded(
        &self,
        attempts: u32,
        elapsed: Duration,
        last_error: &dyn fmt::Display,
    ) {
        tracing::error!(
            operation = %self.operation,
            attempts = attempts,
            elapsed_ms = elapsed.as_millis() as u64,
            error = %last_error,
            "deadline passed before operation succeeded"
        );
    }
}

/// An observer that counts retry events
///
/// Useful for testing and metrics collection.
#[derive(Debug, Default)]
pub struct StatsObserver {
    attempt_starts: AtomicU32,
    failures: AtomicU32,
    successes: AtomicU32,
    deadline_exceeded: AtomicU32,
}

impl StatsObserver {
    /// Create a new stats observer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attempts started
    pub fn attempt_starts(&self) -> u32 {
        self.attempt_starts.load(Ordering::SeqCst)
    }

    /// Number of failed attempts that were followed by a retry
    pub fn failures(&self) -> u32 {
        self.failures.load(Ordering::SeqCst)
    }

    /// Number of successes
    pub fn successes(&self) -> u32 {
        self.successes.load(Ordering::SeqCst)
    }

    /// Number of deadline expiries
    pub fn deadline_exceeded(&self) -> u32 {
        self.deadline_exceeded.load(Ordering::SeqCst)
    }
}

impl RetryObserver for StatsObserver {
    fn on_attempt_start(&self, _attempt: u32) {
        self.attempt_starts.fetch_add(1, Ordering::SeqCst);
    }

    fn on_attempt_failed(&self, _attempt: u32, _error: &dyn fmt::Display, _delay: Duration) {
        self.failures.fetch_add(1, Ordering::SeqCst);
    }

    fn on_success(&self, _attempt: u32, _total_duration: Duration) {
        self.successes.fetch_add(1, Ordering::SeqCst);
    }

    fn on_deadline_exceeded(
        &self,
        _attempts: u32,
        _elapsed: Duration,
        _last_error: &dyn fmt::Display,
    ) {
        self.deadline_exceeded.fetch_add(1, Ordering::SeqCst);
    }
}

impl<T: RetryObserver + ?Sized> RetryObserver for Arc<T> {
    fn on_attempt_start(&self, attempt: u32) {
        (**self).on_attempt_start(attempt)
    }

    fn on_attempt_failed(&self, attempt: u32, error: &dyn fmt::Display, delay: Duration) {
        (**self).on_attempt_failed(attempt, error, delay)
    }

    fn on_success(&self, attempt: u32, total_duration: Duration) {
        (**self).on_success(attempt, total_duration)
    }

    fn on_deadline_exceeded(
        &self,
        attempts: u32,
        elapsed: Duration,
        last_error: &dyn fmt::Display,
    ) {
        (**self).on_deadline_exceeded(attempts, elapsed, last_error)
    }
}
