//! Repository interface between the engine and the persisted store.
//!
//! The engine never touches a database directly; it reads and writes through
//! the [`Store`] trait with clearly bounded inputs and outputs. Absence of a
//! record is `Ok(None)` (or an empty list), never an error — only genuine
//! storage failures surface as [`StorageError`].
//!
//! [`MemoryStore`] is a deterministic in-process implementation used by the
//! test suite and by embedders that keep the compliance state resident.

mod error;
mod memory;


pub use error::StorageError;
pub use memory::MemoryStore;

use crate::model::{
    CheckResult, Device, DeviceId, Enforcement, Group, GroupId, NewWorkItem, Policy, PolicyId,
    SessionId, WorkItem,
};

/// Read and write access to the compliance records the engine operates on.
///
/// # Snapshot semantics
///
/// The engine holds no lock across its pipeline; a single invocation sees a
/// best-effort snapshot. Implementations must only guarantee that individual
/// calls are atomic.
pub trait Store {
    /// Looks up a device by id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read.
    fn device(&self, id: DeviceId) -> Result<Option<Device>, StorageError>;

    /// Looks up a group by id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read.
    fn group(&self, id: GroupId) -> Result<Option<Group>, StorageError>;

    /// Returns the groups a device is directly assigned to.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read.
    fn groups_of(&self, device: DeviceId) -> Result<Vec<Group>, StorageError>;

    /// Returns every enforcement attached to a group.
    ///
    /// The returned order must be stable across calls for an unchanged
    /// store; the engine relies on it for deterministic tie-breaking.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read.
    fn enforcements_of(&self, group: GroupId) -> Result<Vec<Enforcement>, StorageError>;

    /// Looks up a policy by id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read.
    fn policy(&self, id: PolicyId) -> Result<Option<Policy>, StorageError>;

    /// Returns the most recent check result for a device and policy across
    /// all of the device's sessions.
    ///
    /// Latest session time wins; results recorded at the same time are
    /// broken by highest result id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read.
    fn latest_result(
        &self,
        device: DeviceId,
        policy: PolicyId,
    ) -> Result<Option<CheckResult>, StorageError>;

    /// Returns the work items attached to a session.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read.
    fn work_items_of(&self, session: SessionId) -> Result<Vec<WorkItem>, StorageError>;

    /// Persists a new work item and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UnknownSession`] if the target session does
    /// not exist, or another [`StorageError`] if the write fails.
    fn create_work_item(&mut self, new: NewWorkItem) -> Result<WorkItem, StorageError>;
}
