pub mod macros;

use landclaim_core::{AppConfig, World};
use landclaim_data::{BuildingKind, MapPoint, PlayerId};

type Placement = (BuildingKind, MapPoint, PlayerId, Option<u16>);

#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    placements: Vec<Placement>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            placements: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.config.world.width = width;
        self.config.world.height = height;
        self
    }

    pub fn with_players(mut self, count: u8) -> Self {
        self.config.world.player_count = count;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// Queues a placement with the configured radius for `kind`.
    pub fn with_building(mut self, kind: BuildingKind, x: u16, y: u16, owner: u8) -> Self {
        self.placements
            .push((kind, MapPoint::new(x, y), player(owner), None));
        self
    }

    pub fn with_building_radius(
        mut self,
        kind: BuildingKind,
        x: u16,
        y: u16,
        owner: u8,
        radius: u16,
    ) -> Self {
        self.placements
            .push((kind, MapPoint::new(x, y), player(owner), Some(radius)));
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.config).expect("Failed to create world in test builder");
        for (kind, pos, owner, radius) in self.placements {
            let radius = radius.unwrap_or_else(|| world.config.buildings.radius_for(kind));
            world
                .place_building_with_radius(kind, pos, owner, radius)
                .expect("Failed to place building in test builder");
        }
        world
    }
}

impl Default for WorldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
pub fn player(raw: u8) -> PlayerId {
    PlayerId::new(raw).expect("player ids start at 1")
}
