//! The enforcement resolution pipeline.
//!
//! [`Engine::resolve_and_create_work_items`] is the single externally
//! callable operation: invoked once per incoming attestation session, it
//! resolves the device's group set, collapses the groups' enforcements to
//! the strictest rule per policy, evaluates which of those are due, and
//! persists one work item per due policy.
//!
//! # Event flow
//!
//! ```text
//! resolve groups -> collect enforcements -> reduce per policy
//!                                                |
//!      create_work_item <- argument/verdicts <- due?
//! ```
//!
//! # Retry safety
//!
//! Policies that already have a work item attached to the session are
//! skipped, so re-invoking the engine for the same session against an
//! unchanged snapshot creates nothing new.

mod error;

#[cfg(test)]
mod tests;

pub use error::EngineError;

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::enforcement;
use crate::hierarchy::{self, DEFAULT_MAX_PARENT_DEPTH};
use crate::model::{DeviceId, NewWorkItem, PolicyId, SessionId, WorkItem};
use crate::staleness;
use crate::storage::Store;

/// Tunables for a resolution run.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Bound on the length of a single group parent chain; see
    /// [`hierarchy::DEFAULT_MAX_PARENT_DEPTH`].
    pub max_parent_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_parent_depth: DEFAULT_MAX_PARENT_DEPTH,
        }
    }
}

/// The enforcement resolution engine.
///
/// Holds the injected clock and configuration; all persistent state lives
/// behind the [`Store`] passed to each invocation.
#[derive(Debug, Clone)]
pub struct Engine<C: Clock = SystemClock> {
    clock: C,
    config: EngineConfig,
}

impl Engine<SystemClock> {
    /// Creates an engine on the system clock with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Engine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Engine<C> {
    /// Creates an engine on the given clock with default configuration.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            config: EngineConfig::default(),
        }
    }

    /// Creates an engine with explicit configuration.
    #[must_use]
    pub fn with_config(clock: C, config: EngineConfig) -> Self {
        Self { clock, config }
    }

    /// Resolves the device's enforcements and creates one work item per due
    /// policy, attached to the session.
    ///
    /// Returns the work items created by this invocation (empty when
    /// nothing is due or everything due already has a work item on the
    /// session).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownDevice`] if the device does not exist
    /// and [`EngineError::Storage`] if the store fails; inconsistent
    /// individual records are skipped with a warning instead.
    pub fn resolve_and_create_work_items<S: Store>(
        &self,
        store: &mut S,
        device: DeviceId,
        session: SessionId,
    ) -> Result<Vec<WorkItem>, EngineError> {
        if store.device(device)?.is_none() {
            return Err(EngineError::UnknownDevice { device });
        }

        let groups = hierarchy::resolve_group_set(store, device, self.config.max_parent_depth)?;
        let collected = enforcement::collect(store, &groups)?;
        let reduced = enforcement::reduce(collected);
        debug!(
            %device,
            %session,
            groups = groups.len(),
            policies = reduced.len(),
            "resolved enforcement set"
        );

        let requested: BTreeSet<PolicyId> = store
            .work_items_of(session)?
            .into_iter()
            .map(|item| item.policy)
            .collect();

        let mut created = Vec::new();
        for (policy_id, enforcement) in reduced {
            if requested.contains(&policy_id) {
                debug!(%device, %session, policy = %policy_id, "work item already requested");
                continue;
            }

            let Some(policy) = store.policy(policy_id)? else {
                warn!(
                    %device,
                    enforcement = %enforcement.id,
                    policy = %policy_id,
                    "enforcement references a missing policy; skipping"
                );
                continue;
            };

            if !staleness::is_due(store, &self.clock, device, &enforcement)? {
                continue;
            }

            let argument = match policy.work_item_argument() {
                Ok(argument) => argument,
                Err(error) => {
                    warn!(
                        %device,
                        enforcement = %enforcement.id,
                        policy = %policy_id,
                        %error,
                        "cannot derive work item argument; skipping"
                    );
                    continue;
                }
            };

            let item = store.create_work_item(NewWorkItem {
                enforcement: enforcement.id,
                session,
                policy: policy_id,
                work_type: policy.policy_type,
                argument,
                fail: enforcement.effective_fail(&policy),
                noresult: enforcement.effective_noresult(&policy),
            })?;
            debug!(%device, %session, policy = %policy_id, item = %item.id, "work item created");
            created.push(item);
        }

        Ok(created)
    }
}
