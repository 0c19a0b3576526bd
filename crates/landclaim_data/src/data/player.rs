use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based player id.
///
/// The raw value `0` is reserved for "unowned" in the ownership table and can
/// never be wrapped in a `PlayerId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Wraps a raw id; `None` for `0`.
    #[must_use]
    pub const fn new(raw: u8) -> Option<Self> {
        if raw == 0 {
            None
        } else {
            Some(Self(raw))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based slot index for registry storage.
    #[must_use]
    pub const fn slot(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| "player id 0 is reserved for unowned".to_string())
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> u8 {
        id.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}
