//! Configuration management for territory parameters.
//!
//! Strongly-typed configuration structures mapping to `config.toml`.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 64
//! height = 64
//! player_count = 4
//!
//! [buildings]
//! headquarters_radius = 9
//! watchtower_radius = 10
//!
//! [logging]
//! level = "debug"
//! ```

use landclaim_data::{BuildingKind, MapExtent};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// World-level configuration: grid size and number of player slots.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u16,
    pub height: u16,
    pub player_count: u8,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            player_count: 4,
        }
    }
}

impl WorldConfig {
    #[must_use]
    pub fn extent(&self) -> MapExtent {
        MapExtent::new(self.width, self.height)
    }
}

/// Territory radius per granting building kind.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BuildingConfig {
    pub headquarters_radius: u16,
    pub barracks_radius: u16,
    pub guardhouse_radius: u16,
    pub watchtower_radius: u16,
    pub fortress_radius: u16,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            headquarters_radius: BuildingKind::Headquarters.default_radius(),
            barracks_radius: BuildingKind::Barracks.default_radius(),
            guardhouse_radius: BuildingKind::Guardhouse.default_radius(),
            watchtower_radius: BuildingKind::Watchtower.default_radius(),
            fortress_radius: BuildingKind::Fortress.default_radius(),
        }
    }
}

impl BuildingConfig {
    #[must_use]
    pub fn radius_for(&self, kind: BuildingKind) -> u16 {
        match kind {
            BuildingKind::Headquarters => self.headquarters_radius,
            BuildingKind::Barracks => self.barracks_radius,
            BuildingKind::Guardhouse => self.guardhouse_radius,
            BuildingKind::Watchtower => self.watchtower_radius,
            BuildingKind::Fortress => self.fortress_radius,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `landclaim_core=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub buildings: BuildingConfig,
    pub logging: LoggingConfig,
}

/// Largest accepted width or height.
pub const MAX_MAP_SIDE: u16 = 1024;

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    ///
    /// # Validation Rules
    /// - Both map sides at least 4 and at most [`MAX_MAP_SIDE`]
    /// - Even number of rows (the hex layout alternates row offsets)
    /// - At least one player slot
    /// - Every building radius positive
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.world.width >= MapExtent::MIN_SIDE,
            "World width must be at least {}",
            MapExtent::MIN_SIDE
        );
        anyhow::ensure!(
            self.world.width <= MAX_MAP_SIDE,
            "World width too large (max {MAX_MAP_SIDE})"
        );
        anyhow::ensure!(
            self.world.height >= MapExtent::MIN_SIDE,
            "World height must be at least {}",
            MapExtent::MIN_SIDE
        );
        anyhow::ensure!(
            self.world.height <= MAX_MAP_SIDE,
            "World height too large (max {MAX_MAP_SIDE})"
        );
        anyhow::ensure!(
            self.world.height % 2 == 0,
            "World height must be even for the wrap-around hex layout"
        );
        anyhow::ensure!(self.world.player_count > 0, "At least one player slot is required");

        for kind in BuildingKind::ALL {
            anyhow::ensure!(
                self.buildings.radius_for(kind) > 0,
                "Radius for {kind:?} must be positive"
            );
        }

        anyhow::ensure!(!self.logging.level.trim().is_empty(), "Logging level must not be empty");

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the file
    /// does not exist. A file that exists but fails to parse or validate is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| e.context(format!("invalid config {}", path.display())))
    }

    /// Hash of every setting that influences ownership. Replay logs store it so
    /// a log is never replayed against a world with different radii or size.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.buildings).as_bytes());
        hex::encode(hasher.finalize())
    }
}
