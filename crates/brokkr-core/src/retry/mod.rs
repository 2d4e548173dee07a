//! Deadline-bounded retry execution
//!
//! Repeatedly invokes a fallible operation on the calling thread until it
//! succeeds or a wall-clock deadline passes. The delay between attempts is
//! fixed; there is no attempt cap, no backoff, and no external cancellation.
//! The deadline is checked after each failed call, never before the first
//! one, so the operation always runs at least once.
//!
//! # Example
//!
//! ```rust,no_run
//! use brokkr_core::retry::retry_until_deadline;
//! use brokkr_core::types::RetryPolicy;
//!
//! fn example() {
//!     let policy = RetryPolicy::default();
//!
//!     let result = retry_until_deadline(&policy, || {
//!         // Your fallible operation here
//!         Ok::<_, std::io::Error>("ready")
//!     });
//! }
//! ```

mod error;
mod executor;
mod observer;

pub use error::RetryError;
pub use executor::{retry_until_deadline, DeadlineRetrier};
pub use observer::{NoOpObserver, RetryObserver, StatsObserver, TracingObserver};
