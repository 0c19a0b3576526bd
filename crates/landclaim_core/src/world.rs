//! The world: one explicitly-owned object holding the grid, the player slots,
//! the ownership table and the assignment engine for a game session.
//!
//! Every territory change enters through [`World::place_building`],
//! [`World::remove_building`] or [`World::apply`]. Those validate the event
//! and only then hand it to the engine, which cannot fail.

use crate::border::BorderLogic;
use crate::config::AppConfig;
use crate::error::{Result, TerritoryError};
use crate::geometry::PointSpace;
use crate::metrics::Metrics;
use crate::ownership::{OwnershipSnapshot, OwnershipTable};
use crate::players::PlayerRegistry;
use crate::radius::points_in_radius;
use crate::territory::{TerritoryEngine, TerritoryUpdate};
use landclaim_data::{
    BuildingId, BuildingKind, GrantingBuilding, MapExtent, MapPoint, PlayerId, TerritoryEvent,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

pub struct World {
    pub config: AppConfig,
    pub metrics: Arc<Metrics>,
    extent: MapExtent,
    players: PlayerRegistry,
    ownership: Arc<OwnershipTable>,
    engine: TerritoryEngine,
    occupancy: HashMap<MapPoint, BuildingId>,
    version: u64,
}

impl World {
    /// Allocates the grid with every point unowned and activates player slots
    /// `1..=config.world.player_count`. The whole config is validated first.
    pub fn new(config: AppConfig) -> Result<Self> {
        let extent = config.world.extent();
        if !extent.is_valid() {
            return Err(TerritoryError::InvalidDimensions {
                width: extent.width,
                height: extent.height,
            });
        }
        config
            .validate()
            .map_err(|e| TerritoryError::InvalidConfig(e.to_string()))?;
        tracing::info!(
            width = extent.width,
            height = extent.height,
            players = config.world.player_count,
            "World created"
        );
        Ok(Self {
            players: PlayerRegistry::new(config.world.player_count),
            ownership: Arc::new(OwnershipTable::new(extent)),
            engine: TerritoryEngine::new(extent),
            occupancy: HashMap::new(),
            metrics: Arc::new(Metrics::new()),
            version: 0,
            extent,
            config,
        })
    }

    #[must_use]
    pub fn extent(&self) -> MapExtent {
        self.extent
    }

    /// Checked point construction.
    pub fn point(&self, x: u16, y: u16) -> Result<MapPoint> {
        self.extent.point(x, y).ok_or(TerritoryError::OutOfBounds {
            pos: MapPoint::new(x, y),
            extent: self.extent,
        })
    }

    #[must_use]
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Number of completed territory changes. Bumped once per accepted event.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    // ------------------------------------------------------------------
    // Read API
    // ------------------------------------------------------------------

    #[must_use]
    pub fn owner(&self, pt: MapPoint) -> Option<PlayerId> {
        self.ownership.owner(pt)
    }

    #[must_use]
    pub fn ownership(&self) -> &OwnershipTable {
        &self.ownership
    }

    #[must_use]
    pub fn calc_distance(&self, a: MapPoint, b: MapPoint) -> u32 {
        self.extent.calc_distance(a, b)
    }

    #[must_use]
    pub fn points_in_radius(&self, center: MapPoint, radius: u32) -> Vec<MapPoint> {
        points_in_radius(&self.extent, center, radius)
    }

    /// Consistent view of ownership for readers on other threads.
    #[must_use]
    pub fn snapshot(&self) -> OwnershipSnapshot {
        OwnershipSnapshot::new(self.version, Arc::clone(&self.ownership))
    }

    #[must_use]
    pub fn building(&self, id: BuildingId) -> Option<&GrantingBuilding> {
        self.engine.building(id)
    }

    #[must_use]
    pub fn building_at(&self, pos: MapPoint) -> Option<&GrantingBuilding> {
        self.occupancy.get(&pos).and_then(|id| self.engine.building(*id))
    }

    /// Placed buildings in placement order.
    pub fn buildings(&self) -> impl Iterator<Item = &GrantingBuilding> {
        self.engine.buildings()
    }

    #[must_use]
    pub fn engine(&self) -> &TerritoryEngine {
        &self.engine
    }

    // ------------------------------------------------------------------
    // Territory changes
    // ------------------------------------------------------------------

    /// Places a building with the configured radius for its kind.
    pub fn place_building(
        &mut self,
        kind: BuildingKind,
        pos: MapPoint,
        owner: PlayerId,
    ) -> Result<(BuildingId, TerritoryUpdate)> {
        let radius = self.config.buildings.radius_for(kind);
        self.place_building_with_radius(kind, pos, owner, radius)
    }

    pub fn place_building_with_radius(
        &mut self,
        kind: BuildingKind,
        pos: MapPoint,
        owner: PlayerId,
        radius: u16,
    ) -> Result<(BuildingId, TerritoryUpdate)> {
        if !self.extent.contains(pos) {
            return Err(TerritoryError::OutOfBounds {
                pos,
                extent: self.extent,
            });
        }
        if radius == 0 {
            return Err(TerritoryError::InvalidRadius { kind, pos });
        }
        if !self.players.is_used(owner) {
            return Err(TerritoryError::InactivePlayer(owner));
        }
        if let Some(&by) = self.occupancy.get(&pos) {
            return Err(TerritoryError::Occupied { pos, by });
        }
        if kind.is_headquarters() {
            if let Some(at) = self.players.hq_pos(owner) {
                return Err(TerritoryError::HeadquartersExists { player: owner, at });
            }
        }

        let started = Instant::now();
        let (id, update) = self.engine.place(
            Arc::make_mut(&mut self.ownership),
            kind,
            pos,
            owner,
            radius,
        );
        self.metrics.record_placement(update.len(), started.elapsed());

        self.occupancy.insert(pos, id);
        if kind.is_headquarters() {
            self.players.set_hq(owner, Some(pos));
        }
        self.version += 1;
        Ok((id, update))
    }

    pub fn remove_building(&mut self, id: BuildingId) -> Result<TerritoryUpdate> {
        let started = Instant::now();
        let (removed, update) = self
            .engine
            .remove(Arc::make_mut(&mut self.ownership), id)
            .ok_or(TerritoryError::UnknownBuilding(id))?;
        self.metrics.record_removal(update.len(), started.elapsed());

        self.occupancy.remove(&removed.pos);
        if removed.kind.is_headquarters() {
            self.players.set_hq(removed.owner, None);
        }
        self.version += 1;
        Ok(update)
    }

    pub fn remove_building_at(&mut self, pos: MapPoint) -> Result<TerritoryUpdate> {
        let id = *self
            .occupancy
            .get(&pos)
            .ok_or(TerritoryError::NoBuildingAt(pos))?;
        self.remove_building(id)
    }

    /// Removes every building of `player` and frees the slot, so its owner id
    /// no longer appears anywhere in the table.
    pub fn retire_player(&mut self, player: PlayerId) -> Result<TerritoryUpdate> {
        if !self.players.is_used(player) {
            return Err(TerritoryError::InactivePlayer(player));
        }
        let owned: Vec<BuildingId> = self
            .engine
            .buildings()
            .filter(|b| b.owner == player)
            .map(|b| b.id)
            .collect();
        let mut update = TerritoryUpdate::default();
        for id in owned {
            update.changed.extend(self.remove_building(id)?.changed);
        }
        update.changed.sort_unstable();
        update.changed.dedup();
        self.players.retire(player);
        tracing::info!(player = %player, changed = update.len(), "Player retired");
        Ok(update)
    }

    pub fn apply(&mut self, event: &TerritoryEvent) -> Result<TerritoryUpdate> {
        match *event {
            TerritoryEvent::Place {
                kind,
                pos,
                owner,
                radius,
            } => {
                let radius = radius.unwrap_or_else(|| self.config.buildings.radius_for(kind));
                self.place_building_with_radius(kind, pos, owner, radius)
                    .map(|(_, update)| update)
            }
            TerritoryEvent::Remove { pos } => self.remove_building_at(pos),
        }
    }

    /// Applies `events` in order, stopping at the first rejected one.
    /// Returns the number of events applied.
    pub fn replay<'a, I>(&mut self, events: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a TerritoryEvent>,
    {
        let mut applied = 0;
        for (index, event) in events.into_iter().enumerate() {
            if let Err(e) = self.apply(event) {
                tracing::warn!(index, error = %e, "Replay rejected event");
                return Err(e.at_event(index));
            }
            applied += 1;
        }
        tracing::info!(applied, version = self.version, "Replay finished");
        Ok(applied)
    }

    /// Points whose live owner differs from a from-scratch computation.
    /// Empty for a healthy world.
    #[must_use]
    pub fn verify_consistency(&self) -> Vec<MapPoint> {
        self.engine
            .cold_claims()
            .iter()
            .enumerate()
            .filter_map(|(idx, claim)| {
                let pt = self.extent.point_at(idx);
                (self.ownership.owner(pt) != claim.map(|c| c.owner)).then_some(pt)
            })
            .collect()
    }

    /// Rebuilds ownership from scratch.
    pub fn recompute_all(&mut self) -> TerritoryUpdate {
        let update = self.engine.recompute_all(Arc::make_mut(&mut self.ownership));
        if !update.is_empty() {
            self.version += 1;
        }
        update
    }
}

impl BorderLogic for World {
    fn map_extent(&self) -> MapExtent {
        self.extent
    }

    fn owner_at(&self, pt: MapPoint) -> Option<PlayerId> {
        self.ownership.owner(pt)
    }
}
