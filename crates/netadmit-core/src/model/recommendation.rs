//! Compliance verdict for a single check result.

use serde::{Deserialize, Serialize};

/// The remediation verdict attached to a check result.
///
/// Numeric codes are part of the wire contract with the measurement agent
/// and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Recommendation {
    /// No verdict was produced.
    None = 0,
    /// The device may access the network.
    Allow = 1,
    /// The device is confined to an isolation network.
    Isolate = 2,
    /// The device is denied network access.
    Block = 3,
}

impl Recommendation {
    /// Stable numeric code of this verdict.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parses a stable numeric code back into a verdict.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Allow),
            2 => Some(Self::Isolate),
            3 => Some(Self::Block),
            _ => None,
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Allow => write!(f, "allow"),
            Self::Isolate => write!(f, "isolate"),
            Self::Block => write!(f, "block"),
        }
    }
}
