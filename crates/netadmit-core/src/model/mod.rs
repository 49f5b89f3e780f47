//! Domain model for the compliance platform.
//!
//! These are the records the engine reads from and writes to storage:
//! devices and their management groups, policies and the enforcements that
//! bind them to groups, attestation sessions with their check results, and
//! the work items the engine derives.
//!
//! All identifiers are opaque `u64` newtypes assigned by the storage layer.
//! The engine never fabricates ids except through
//! [`Store::create_work_item`](crate::storage::Store::create_work_item).

mod device;
mod enforcement;
mod error;
mod group;
mod policy;
mod recommendation;
mod session;
mod work;


pub use device::{Device, Product};
pub use enforcement::Enforcement;
pub use error::PolicyArgumentError;
pub use group::Group;
pub use policy::{Policy, PolicyType};
pub use recommendation::Recommendation;
pub use session::{CheckResult, Session};
pub use work::{NewWorkItem, WorkItem};

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`Device`].
    DeviceId
);
define_id!(
    /// Identifier of a [`Group`].
    GroupId
);
define_id!(
    /// Identifier of a [`Product`].
    ProductId
);
define_id!(
    /// Identifier of a [`Policy`].
    PolicyId
);
define_id!(
    /// Identifier of an [`Enforcement`].
    EnforcementId
);
define_id!(
    /// Identifier of a [`Session`].
    SessionId
);
define_id!(
    /// Identifier of a [`CheckResult`].
    ResultId
);
define_id!(
    /// Identifier of a [`WorkItem`].
    WorkItemId
);
define_id!(
    /// Identifier of a registered file, the measurement target of
    /// file-scoped policies.
    FileId
);
define_id!(
    /// Identifier of a registered directory, the measurement target of
    /// directory-scoped policies.
    DirectoryId
);
