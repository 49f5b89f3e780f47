//! Model error types.

use thiserror::Error;

use super::PolicyId;

/// Errors deriving a work-item argument from a policy record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PolicyArgumentError {
    /// A file-scoped policy has no target file reference.
    #[error("policy {policy} is file-scoped but has no file reference")]
    MissingFileRef {
        /// The inconsistent policy.
        policy: PolicyId,
    },

    /// A directory-scoped policy has no target directory reference.
    #[error("policy {policy} is directory-scoped but has no directory reference")]
    MissingDirectoryRef {
        /// The inconsistent policy.
        policy: PolicyId,
    },
}
