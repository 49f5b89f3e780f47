//! Enforcement resolution engine for network-admission compliance.
//!
//! Devices periodically submit attestation sessions. For each session the
//! engine decides which compliance policies are owed a (re)check and emits
//! one work item per due policy for the measurement agent to execute.
//!
//! # Architecture
//!
//! ```text
//! Session --> resolve groups --> collect enforcements --> reduce per policy
//!                                                              |
//!                                                              v
//!             WorkItems <-- emit for due <-- evaluate staleness
//! ```
//!
//! - [`hierarchy`] resolves a device's direct groups plus every ancestor
//!   reachable through `parent` links, tolerating misconfigured cycles.
//! - [`enforcement`] gathers the groups' enforcement rules and collapses
//!   them to the strictest rule per policy (smallest `max_age`).
//! - [`staleness`] decides whether an enforcement is due given the most
//!   recent check result for the device.
//! - [`engine`] ties the pipeline together and persists work items through
//!   the [`storage::Store`] trait.
//!
//! # Determinism
//!
//! Given a fixed storage snapshot and clock, the pipeline is a pure
//! function: the same device and session always yield the same due/not-due
//! verdicts and the same work items. Group and policy iteration is over
//! ordered maps, never hash order. Re-invoking the engine for a session
//! whose work items already exist creates nothing new.
//!
//! # Example
//!
//! ```rust,ignore
//! use netadmit_core::{Engine, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! // ... populate devices, groups, policies, enforcements ...
//! let engine = Engine::new();
//! let items = engine.resolve_and_create_work_items(&mut store, device_id, session_id)?;
//! ```

pub mod clock;
pub mod enforcement;
pub mod engine;
pub mod hierarchy;
pub mod model;
pub mod staleness;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{Engine, EngineConfig, EngineError};
pub use model::{
    CheckResult, Device, DeviceId, DirectoryId, Enforcement, EnforcementId, FileId, Group, GroupId,
    NewWorkItem, Policy, PolicyArgumentError, PolicyId, PolicyType, Product, ProductId,
    Recommendation, ResultId, Session, SessionId, WorkItem, WorkItemId,
};
pub use storage::{MemoryStore, StorageError, Store};
