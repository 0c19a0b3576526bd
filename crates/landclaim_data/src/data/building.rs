use super::player::PlayerId;
use super::point::MapPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle for a placed granting building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BuildingId(pub u32);

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Building types that claim territory around themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingKind {
    /// Player headquarters. At most one per player.
    #[default]
    Headquarters,
    Barracks,
    Guardhouse,
    Watchtower,
    Fortress,
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 5] = [
        BuildingKind::Headquarters,
        BuildingKind::Barracks,
        BuildingKind::Guardhouse,
        BuildingKind::Watchtower,
        BuildingKind::Fortress,
    ];

    /// Radius used when no configuration overrides it.
    #[must_use]
    pub const fn default_radius(self) -> u16 {
        match self {
            BuildingKind::Headquarters => 9,
            BuildingKind::Barracks => 8,
            BuildingKind::Guardhouse => 9,
            BuildingKind::Watchtower => 10,
            BuildingKind::Fortress => 11,
        }
    }

    #[must_use]
    pub const fn is_headquarters(self) -> bool {
        matches!(self, BuildingKind::Headquarters)
    }

    /// Single-character glyph for text dumps.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            BuildingKind::Headquarters => 'H',
            BuildingKind::Barracks => 'b',
            BuildingKind::Guardhouse => 'g',
            BuildingKind::Watchtower => 'w',
            BuildingKind::Fortress => 'f',
        }
    }
}

/// A placed building that grants its owner every point within `radius`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantingBuilding {
    pub id: BuildingId,
    pub kind: BuildingKind,
    pub pos: MapPoint,
    pub owner: PlayerId,
    pub radius: u16,
    /// Placement sequence number. Later placements carry larger values and
    /// win ties against earlier ones.
    pub seq: u64,
}
