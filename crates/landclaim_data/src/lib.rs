//! # Landclaim Data
//!
//! Plain data types shared by every crate in the workspace: map coordinates,
//! player and building identifiers, granting buildings and the replayable
//! territory event stream. Nothing in here knows about ownership rules.

pub mod data;

pub use data::building::{BuildingId, BuildingKind, GrantingBuilding};
pub use data::event::TerritoryEvent;
pub use data::player::PlayerId;
pub use data::point::{Direction, MapExtent, MapPoint};
