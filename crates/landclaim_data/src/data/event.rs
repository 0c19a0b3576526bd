use super::building::BuildingKind;
use super::player::PlayerId;
use super::point::MapPoint;
use serde::{Deserialize, Serialize};

/// An input to the territory engine, as raised by the construction subsystem.
///
/// Worlds are saved as an ordered list of these and rebuilt by replaying
/// them, so the placement order (and with it every tie-break) is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TerritoryEvent {
    Place {
        kind: BuildingKind,
        pos: MapPoint,
        owner: PlayerId,
        /// Overrides the configured radius for `kind`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        radius: Option<u16>,
    },
    Remove {
        pos: MapPoint,
    },
}

impl TerritoryEvent {
    #[must_use]
    pub fn pos(&self) -> MapPoint {
        match self {
            TerritoryEvent::Place { pos, .. } | TerritoryEvent::Remove { pos } => *pos,
        }
    }
}
