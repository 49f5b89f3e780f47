//! Management groups.

use serde::{Deserialize, Serialize};

use super::{GroupId, ProductId};

/// A management group of devices.
///
/// Groups form a forest through `parent` links under correct configuration.
/// The engine tolerates cycles introduced by misconfiguration; see
/// [`hierarchy`](crate::hierarchy).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Storage-assigned identifier.
    pub id: GroupId,

    /// Unique display name.
    pub name: String,

    /// Optional parent group. Enforcements of ancestors apply to every
    /// device of this group.
    pub parent: Option<GroupId>,

    /// Products whose new devices join this group by default.
    pub product_defaults: Vec<ProductId>,
}
