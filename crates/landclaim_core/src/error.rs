//! Error types for territory operations.
//!
//! The spatial core (distance, radius, ownership reads) is total. These errors
//! are raised by the [`World`](crate::world::World) facade when it rejects an
//! event before the assignment engine ever sees it.

use landclaim_data::{BuildingId, BuildingKind, MapExtent, MapPoint, PlayerId};
use thiserror::Error;

/// Main error type for landclaim_core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TerritoryError {
    /// World size the hex torus cannot represent
    #[error("Invalid map dimensions {width}x{height}: sides must be >= 4 and height even")]
    InvalidDimensions { width: u16, height: u16 },

    /// Configuration rejected by `AppConfig::validate`
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Coordinates outside the map
    #[error("Point {pos} is outside the {}x{} map", extent.width, extent.height)]
    OutOfBounds { pos: MapPoint, extent: MapExtent },

    /// Another building already stands on the point
    #[error("Point {pos} is already occupied by building {by}")]
    Occupied { pos: MapPoint, by: BuildingId },

    /// Granting radius of zero
    #[error("Granting radius must be positive for {kind:?} at {pos}")]
    InvalidRadius { kind: BuildingKind, pos: MapPoint },

    /// Player slot is not in use
    #[error("Player {0} is not an active player")]
    InactivePlayer(PlayerId),

    /// Second headquarters for the same player
    #[error("Player {player} already has a headquarters at {at}")]
    HeadquartersExists { player: PlayerId, at: MapPoint },

    /// Removal of a building that was never placed
    #[error("No granting building {0}")]
    UnknownBuilding(BuildingId),

    /// Removal at a point without a granting building
    #[error("No granting building at {0}")]
    NoBuildingAt(MapPoint),

    /// A replayed event failed
    #[error("Replay failed at event {index}: {source}")]
    Replay {
        index: usize,
        source: Box<TerritoryError>,
    },
}

/// Result type alias for landclaim_core operations.
pub type Result<T> = std::result::Result<T, TerritoryError>;

impl TerritoryError {
    /// Wraps an error with the index of the replayed event that caused it.
    #[must_use]
    pub fn at_event(self, index: usize) -> Self {
        Self::Replay {
            index,
            source: Box::new(self),
        }
    }
}
