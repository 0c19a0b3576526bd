//! # Landclaim Core
//!
//! The territorial-control engine: given a wrap-around hex grid and a set of
//! player-owned granting buildings, decides which player controls every point
//! and which controlled points sit on a territory border.
//!
//! This crate contains:
//! - The point space (distance metric and neighbours on the hex torus)
//! - Expanding-ring radius queries
//! - The ownership table and copy-on-write snapshots
//! - The territory assignment engine (closest source wins, latest placement breaks ties)
//! - Border classification derived from live ownership
//! - Configuration, errors, metrics and logging
//!
//! ## Example
//!
//! ```
//! use landclaim_core::{AppConfig, BorderLogic, World};
//! use landclaim_data::{BuildingKind, MapPoint, PlayerId};
//!
//! let mut world = World::new(AppConfig::default()).unwrap();
//! let player = PlayerId::new(1).unwrap();
//! let hq = MapPoint::new(10, 10);
//! world.place_building(BuildingKind::Headquarters, hq, player).unwrap();
//!
//! assert_eq!(world.owner(hq), Some(player));
//! assert!(!world.is_border_node(hq, player));
//! ```

/// Border-node classification and contiguous-region counting
pub mod border;
/// Configuration management for world size and building radii
pub mod config;
/// Error types for rejected territory events
pub mod error;
/// Hex-torus coordinate arithmetic and distance metric
pub mod geometry;
/// Territory metrics collection and logging setup
pub mod metrics;
/// Per-point ownership table and snapshots
pub mod ownership;
/// Player slots and headquarters positions
pub mod players;
/// Expanding-ring radius queries
pub mod radius;
/// Seeded generation of replayable event streams
pub mod scenario;
/// Territory assignment engine
pub mod territory;
/// World facade tying the components together
pub mod world;

pub use border::BorderLogic;
pub use config::AppConfig;
pub use error::{Result, TerritoryError};
pub use geometry::PointSpace;
pub use metrics::{init_logging, Metrics};
pub use ownership::{Node, OwnershipSnapshot, OwnershipTable};
pub use players::PlayerRegistry;
pub use radius::{for_each_point_in_radius, points_in_radius};
pub use territory::{Claim, TerritoryEngine, TerritoryUpdate};
pub use world::World;
