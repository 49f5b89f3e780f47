//! Attestation sessions and their check results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DeviceId, PolicyId, Recommendation, ResultId, SessionId};

/// One attestation event from a device at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Storage-assigned identifier.
    pub id: SessionId,

    /// The reporting device.
    pub device: DeviceId,

    /// When the session was opened.
    pub time: DateTime<Utc>,

    /// Transport connection id reported by the access requestor.
    pub connection_id: u32,
}

/// Outcome of checking one policy within one session.
///
/// `session_time` is denormalized from the owning session so that staleness
/// evaluation needs a single storage lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Storage-assigned identifier; breaks ties between results recorded
    /// at the same session time (highest id wins).
    pub id: ResultId,

    /// The session the check ran in.
    pub session: SessionId,

    /// Time of the owning session.
    pub session_time: DateTime<Utc>,

    /// The checked policy.
    pub policy: PolicyId,

    /// Raw result payload as reported by the agent.
    pub raw: String,

    /// The verdict derived from the raw result.
    pub recommendation: Recommendation,
}
