//! Enforcements: policy-to-group bindings with a staleness threshold.

use serde::{Deserialize, Serialize};

use super::{EnforcementId, GroupId, Policy, PolicyId, Recommendation};

/// A rule binding one policy to one group.
///
/// At most one enforcement exists per (policy, group) pair; the storage
/// layer upholds that uniqueness. `max_age_secs` is the staleness threshold:
/// a compliant result older than this forces a re-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enforcement {
    /// Storage-assigned identifier.
    pub id: EnforcementId,

    /// The enforced policy.
    pub policy: PolicyId,

    /// The group the policy is enforced on.
    pub group: GroupId,

    /// Maximum age in seconds of the latest compliant result before the
    /// check is due again.
    pub max_age_secs: u32,

    /// Per-group override of the policy's `fail` verdict.
    pub fail: Option<Recommendation>,

    /// Per-group override of the policy's `noresult` verdict.
    pub noresult: Option<Recommendation>,
}

impl Enforcement {
    /// The verdict the agent reports when the check fails: the enforcement
    /// override if present, else the policy default.
    #[must_use]
    pub fn effective_fail(&self, policy: &Policy) -> Recommendation {
        self.fail.unwrap_or(policy.fail)
    }

    /// The verdict the agent reports when the check yields no result: the
    /// enforcement override if present, else the policy default.
    #[must_use]
    pub fn effective_noresult(&self, policy: &Policy) -> Recommendation {
        self.noresult.unwrap_or(policy.noresult)
    }
}
