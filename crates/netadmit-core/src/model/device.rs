//! Devices and the products they run.

use serde::{Deserialize, Serialize};

use super::{DeviceId, GroupId, ProductId};

/// A platform (e.g. a specific Android or Ubuntu release).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Storage-assigned identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,
}

/// An enrolled device, identified by its opaque platform-assigned value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Storage-assigned identifier.
    pub id: DeviceId,

    /// Opaque platform-assigned identity (unique per device).
    pub value: String,

    /// Free-form description for operators.
    pub description: String,

    /// The product the device runs.
    pub product: ProductId,

    /// Whether the device is administratively trusted.
    pub trusted: bool,

    /// Directly assigned management groups. Ancestors are resolved by the
    /// engine, not stored here.
    pub groups: Vec<GroupId>,
}
