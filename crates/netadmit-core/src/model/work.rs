//! Work items: measurement requests derived from due enforcements.

use serde::{Deserialize, Serialize};

use super::{EnforcementId, PolicyId, PolicyType, Recommendation, SessionId, WorkItemId};

/// A persisted unit of measurement work.
///
/// Created by the engine with `result` and `recommendation` unset; the
/// measurement agent fills both in asynchronously. `policy` is denormalized
/// from the enforcement so duplicate suppression per session is a single
/// scan over [`Store::work_items_of`](crate::storage::Store::work_items_of).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Storage-assigned identifier.
    pub id: WorkItemId,

    /// The enforcement this work item was derived from.
    pub enforcement: EnforcementId,

    /// The session the work is attached to.
    pub session: SessionId,

    /// The policy being checked.
    pub policy: PolicyId,

    /// The kind of check the agent must perform.
    pub work_type: PolicyType,

    /// Policy-type-specific argument (file id, directory id, raw payload,
    /// or empty).
    pub argument: String,

    /// Effective verdict to report when the check fails.
    pub fail: Recommendation,

    /// Effective verdict to report when the check yields no result.
    pub noresult: Recommendation,

    /// Raw result payload, set by the agent on completion.
    pub result: Option<String>,

    /// Verdict derived from the result, set by the agent on completion.
    pub recommendation: Option<Recommendation>,
}

/// The fields of a work item the engine provides at creation time.
///
/// The storage layer assigns the id and initializes `result` and
/// `recommendation` to unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWorkItem {
    /// The enforcement the work item is derived from.
    pub enforcement: EnforcementId,

    /// The session to attach the work item to.
    pub session: SessionId,

    /// The policy being checked.
    pub policy: PolicyId,

    /// The kind of check the agent must perform.
    pub work_type: PolicyType,

    /// Policy-type-specific argument.
    pub argument: String,

    /// Effective fail verdict.
    pub fail: Recommendation,

    /// Effective noresult verdict.
    pub noresult: Recommendation,
}
