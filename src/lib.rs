//! Library side of the `landclaim` binary: command implementations and
//! text reports over a territory world.

pub mod app;

pub use landclaim_core::{AppConfig, BorderLogic, World};
pub use landclaim_data::{BuildingKind, MapPoint, PlayerId, TerritoryEvent};
pub use landclaim_io::{load_world, ReplayLog};
