//! The deadline-bounded retry loop

use std::fmt;
use std::thread;
use std::time::Instant;

use crate::types::RetryPolicy;

use super::error::RetryError;
use super::observer::{NoOpObserver, RetryObserver};

/// Execute an operation until it succeeds or the deadline passes
///
/// Convenience wrapper over [`DeadlineRetrier`] with no observer. For logging
/// or metrics, build a retrier and attach one.
///
/// # Example
///
/// ```rust,no_run
/// use brokkr_core::retry::retry_until_deadline;
/// use brokkr_core::types::RetryPolicy;
///
/// fn example() {
///     let policy = RetryPolicy::default();
///
///     let result = retry_until_deadline(&policy, || {
///         Ok::<_, std::io::Error>(())
///     });
/// }
/// ```
pub fn retry_until_deadline<F, T, E>(policy: &RetryPolicy, op: F) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Result<T, E>,
    E: fmt::Display,
{
    DeadlineRetrier::new(policy.clone()).execute(op)
}

/// A blocking retry loop with a fixed interval and a wall-clock deadline
///
/// The calling thread is blocked for the whole sequence; the loop ends only
/// on success or when the deadline passes.
pub struct DeadlineRetrier<O = NoOpObserver> {
    policy: RetryPolicy,
    observer: O,
}

impl DeadlineRetrier<NoOpObserver> {
    /// Create a retrier with the given policy and no observer
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            observer: NoOpObserver,
        }
    }
}

impl<O> DeadlineRetrier<O> {
    /// Set the observer receiving attempt lifecycle callbacks
    pub fn with_observer<O2>(self, observer: O2) -> DeadlineRetrier<O2> {
        DeadlineRetrier {
            policy: self.policy,
            observer,
        }
    }
}

impl<O: RetryObserver> DeadlineRetrier<O> {
    /// Run `op` until it succeeds or the deadline passes
    ///
    /// The deadline is checked after each failed call, never before the
    /// first one: a zero timeout still runs the operation once. A success is
    /// returned immediately without consulting the deadline.
    pub fn execute<F, T, E>(&self, mut op: F) -> Result<T, RetryError<E>>
    where
        F: FnMut() -> Result<T, E>,
        E: fmt::Display,
    {
        let interval = self.policy.interval();
        let timeout = self.policy.timeout();
        let start = Instant::now();
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            self.observer.on_attempt_start(attempt);

            match op() {
                Ok(value) => {
                    self.observer.on_success(attempt, start.elapsed());
                    return Ok(value);
                }
                Err(err) => {
                    let elapsed = start.elapsed();
                    if elapsed > timeout {
                        self.observer.on_deadline_exceeded(attempt, elapsed, &err);
                        return Err(RetryError::new(attempt, elapsed, timeout, err));
                    }

                    self.observer.on_attempt_failed(attempt, &err, interval);
                    thread::sleep(interval);
                }
            }
        }
    }
}
