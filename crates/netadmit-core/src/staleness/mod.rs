//! Staleness evaluation: deciding whether an enforcement is due.
//!
//! An enforcement is due when the device has never produced a result for
//! its policy, when the latest result is non-compliant (anything other than
//! [`Recommendation::Allow`] — a bad verdict always forces a re-check,
//! regardless of age), or when the latest compliant result is older than
//! the enforcement's `max_age_secs`.
//!
//! Evaluation is a pure function of the store snapshot, the clock, and the
//! enforcement; there is no hidden state.

use chrono::Duration;

use crate::clock::Clock;
use crate::model::{DeviceId, Enforcement, Recommendation};
use crate::storage::{StorageError, Store};

/// Returns whether the device owes a (re)check for the enforcement's
/// policy.
///
/// # Errors
///
/// Returns [`StorageError`] if the result history cannot be read.
pub fn is_due(
    store: &impl Store,
    clock: &impl Clock,
    device: DeviceId,
    enforcement: &Enforcement,
) -> Result<bool, StorageError> {
    let Some(latest) = store.latest_result(device, enforcement.policy)? else {
        // First-time check.
        return Ok(true);
    };

    if latest.recommendation != Recommendation::Allow {
        return Ok(true);
    }

    let age = clock.now().signed_duration_since(latest.session_time);
    Ok(age > Duration::seconds(i64::from(enforcement.max_age_secs)))
}
