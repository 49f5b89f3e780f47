//! In-memory store backed by ordered maps.
//!
//! Iteration order is the key order of the underlying `BTreeMap`s, so every
//! read is deterministic for an unchanged store. Work-item ids are assigned
//! from a monotonically increasing counter.

use std::collections::BTreeMap;

use crate::model::{
    CheckResult, Device, DeviceId, Enforcement, EnforcementId, Group, GroupId, NewWorkItem, Policy,
    PolicyId, ResultId, Session, SessionId, WorkItem, WorkItemId,
};

use super::error::StorageError;
use super::Store;

/// A deterministic in-process [`Store`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    devices: BTreeMap<DeviceId, Device>,
    groups: BTreeMap<GroupId, Group>,
    policies: BTreeMap<PolicyId, Policy>,
    enforcements: BTreeMap<EnforcementId, Enforcement>,
    sessions: BTreeMap<SessionId, Session>,
    results: BTreeMap<ResultId, CheckResult>,
    work_items: BTreeMap<WorkItemId, WorkItem>,
    next_work_item_id: u64,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a device.
    pub fn insert_device(&mut self, device: Device) {
        self.devices.insert(device.id, device);
    }

    /// Inserts or replaces a group.
    pub fn insert_group(&mut self, group: Group) {
        self.groups.insert(group.id, group);
    }

    /// Inserts or replaces a policy.
    pub fn insert_policy(&mut self, policy: Policy) {
        self.policies.insert(policy.id, policy);
    }

    /// Inserts or replaces an enforcement.
    pub fn insert_enforcement(&mut self, enforcement: Enforcement) {
        self.enforcements.insert(enforcement.id, enforcement);
    }

    /// Inserts or replaces a session.
    pub fn insert_session(&mut self, session: Session) {
        self.sessions.insert(session.id, session);
    }

    /// Records a check result.
    ///
    /// The result's `session` must refer to an inserted session; the
    /// `session_time` field is taken as given (callers denormalize it from
    /// the owning session).
    pub fn insert_result(&mut self, result: CheckResult) {
        self.results.insert(result.id, result);
    }

    /// Number of work items currently stored, across all sessions.
    #[must_use]
    pub fn work_item_count(&self) -> usize {
        self.work_items.len()
    }
}

impl Store for MemoryStore {
    fn device(&self, id: DeviceId) -> Result<Option<Device>, StorageError> {
        Ok(self.devices.get(&id).cloned())
    }

    fn group(&self, id: GroupId) -> Result<Option<Group>, StorageError> {
        Ok(self.groups.get(&id).cloned())
    }

    fn groups_of(&self, device: DeviceId) -> Result<Vec<Group>, StorageError> {
        let Some(device) = self.devices.get(&device) else {
            return Ok(Vec::new());
        };
        let mut ids: Vec<GroupId> = device.groups.clone();
        ids.sort_unstable();
        ids.dedup();
        Ok(ids
            .into_iter()
            .filter_map(|id| self.groups.get(&id).cloned())
            .collect())
    }

    fn enforcements_of(&self, group: GroupId) -> Result<Vec<Enforcement>, StorageError> {
        Ok(self
            .enforcements
            .values()
            .filter(|e| e.group == group)
            .cloned()
            .collect())
    }

    fn policy(&self, id: PolicyId) -> Result<Option<Policy>, StorageError> {
        Ok(self.policies.get(&id).cloned())
    }

    fn latest_result(
        &self,
        device: DeviceId,
        policy: PolicyId,
    ) -> Result<Option<CheckResult>, StorageError> {
        Ok(self
            .results
            .values()
            .filter(|r| {
                r.policy == policy
                    && self
                        .sessions
                        .get(&r.session)
                        .is_some_and(|s| s.device == device)
            })
            .max_by_key(|r| (r.session_time, r.id))
            .cloned())
    }

    fn work_items_of(&self, session: SessionId) -> Result<Vec<WorkItem>, StorageError> {
        Ok(self
            .work_items
            .values()
            .filter(|w| w.session == session)
            .cloned()
            .collect())
    }

    fn create_work_item(&mut self, new: NewWorkItem) -> Result<WorkItem, StorageError> {
        if !self.sessions.contains_key(&new.session) {
            return Err(StorageError::UnknownSession {
                session: new.session,
            });
        }
        self.next_work_item_id += 1;
        let item = WorkItem {
            id: WorkItemId(self.next_work_item_id),
            enforcement: new.enforcement,
            session: new.session,
            policy: new.policy,
            work_type: new.work_type,
            argument: new.argument,
            fail: new.fail,
            noresult: new.noresult,
            result: None,
            recommendation: None,
        };
        self.work_items.insert(item.id, item.clone());
        Ok(item)
    }
}
