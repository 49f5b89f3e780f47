//! Engine error types.

use thiserror::Error;

use crate::model::DeviceId;
use crate::storage::StorageError;

/// Errors from a full resolution run.
///
/// Per-enforcement inconsistencies (dangling policy references, policies
/// missing their argument target) are not errors: they are logged and the
/// affected enforcement is skipped, so one bad record never blocks the rest
/// of the device's checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// The storage layer failed; the invocation is aborted.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The device to resolve does not exist.
    #[error("device {device} does not exist")]
    UnknownDevice {
        /// The missing device.
        device: DeviceId,
    },
}
