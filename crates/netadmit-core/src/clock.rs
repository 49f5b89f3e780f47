//! Time source abstraction.
//!
//! Staleness evaluation compares result ages against enforcement thresholds,
//! so the current time must be injectable: production code uses
//! [`SystemClock`], tests pin a [`FixedClock`] to make due/not-due verdicts
//! reproducible.

use chrono::{DateTime, Utc};

/// Abstraction over the wall-clock time source.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Returns the current wall-clock time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed instant.
///
/// Intended for tests and replay; returns the same time on every call.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
