//! Policies: the check definitions enforcements refer to.

use serde::{Deserialize, Serialize};

use super::error::PolicyArgumentError;
use super::{DirectoryId, FileId, PolicyId, Recommendation};

/// The kind of check a policy performs.
///
/// This is a closed set: adding a policy type is a source change, and every
/// match over it is total. Numeric codes are part of the agent wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum PolicyType {
    /// Hash a single file and compare against the reference measurement.
    FileHash = 1,
    /// Hash every file below a directory.
    DirHash = 2,
    /// List open listening ports and compare against an allowed range.
    ListeningPort = 3,
    /// Assert that a file exists.
    FileExist = 4,
    /// Assert that a file does not exist.
    NotFileExist = 5,
    /// Report packages with pending updates.
    MissingUpdate = 6,
    /// Report packages with pending security updates.
    MissingSecurityUpdate = 7,
    /// Report installed blacklisted packages.
    BlacklistedPackage = 8,
    /// Check operating system settings.
    OsSettings = 9,
    /// Unconditionally deny; used to fence off groups entirely.
    Deny = 10,
}

impl PolicyType {
    /// Stable numeric code of this policy type.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parses a stable numeric code back into a policy type.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::FileHash),
            2 => Some(Self::DirHash),
            3 => Some(Self::ListeningPort),
            4 => Some(Self::FileExist),
            5 => Some(Self::NotFileExist),
            6 => Some(Self::MissingUpdate),
            7 => Some(Self::MissingSecurityUpdate),
            8 => Some(Self::BlacklistedPackage),
            9 => Some(Self::OsSettings),
            10 => Some(Self::Deny),
            _ => None,
        }
    }
}

/// A check definition.
///
/// `fail` and `noresult` are the default verdicts the agent reports when the
/// check fails or produces no result; an [`Enforcement`](super::Enforcement)
/// may override either per group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Storage-assigned identifier.
    pub id: PolicyId,

    /// The kind of check.
    pub policy_type: PolicyType,

    /// Unique human-readable name.
    pub name: String,

    /// Raw argument payload for checks that carry one directly
    /// (e.g. the port range of [`PolicyType::ListeningPort`]).
    pub argument: String,

    /// Default verdict when the check fails.
    pub fail: Recommendation,

    /// Default verdict when the check yields no result.
    pub noresult: Recommendation,

    /// Target file for file-scoped checks.
    pub file: Option<FileId>,

    /// Target directory for directory-scoped checks.
    pub directory: Option<DirectoryId>,
}

impl Policy {
    /// Computes the argument string carried by a work item for this policy.
    ///
    /// File-scoped checks resolve to their target file id, directory-scoped
    /// checks to their directory id, [`PolicyType::ListeningPort`] passes
    /// its raw argument through, and argument-less checks yield an empty
    /// string.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyArgumentError`] when the policy is missing the
    /// file or directory reference its type requires. This indicates an
    /// inconsistent policy record; callers skip the enforcement rather
    /// than abort the session.
    pub fn work_item_argument(&self) -> Result<String, PolicyArgumentError> {
        match self.policy_type {
            PolicyType::FileHash | PolicyType::FileExist | PolicyType::NotFileExist => self
                .file
                .map(|file| file.to_string())
                .ok_or(PolicyArgumentError::MissingFileRef { policy: self.id }),
            PolicyType::DirHash => self
                .directory
                .map(|dir| dir.to_string())
                .ok_or(PolicyArgumentError::MissingDirectoryRef { policy: self.id }),
            PolicyType::ListeningPort => Ok(self.argument.clone()),
            PolicyType::MissingUpdate
            | PolicyType::MissingSecurityUpdate
            | PolicyType::BlacklistedPackage
            | PolicyType::OsSettings
            | PolicyType::Deny => Ok(String::new()),
        }
    }
}
