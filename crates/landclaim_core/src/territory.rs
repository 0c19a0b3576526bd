//! Territory assignment engine.
//!
//! Every granting building claims the points within its radius. Where claims
//! overlap, the point goes to the building closest to it; between equally close
//! buildings the one placed most recently wins. The winner of each point is
//! therefore the minimum over all covering buildings of `(distance, -seq)`,
//! which does not depend on how the set of buildings was reached.
//!
//! The engine keeps the winning [`Claim`] of every point so placement only
//! has to compare against it, and removal only has to re-resolve the points
//! the removed building was winning.

use crate::geometry::PointSpace;
use crate::ownership::OwnershipTable;
use crate::radius::for_each_point_in_radius;
use landclaim_data::{BuildingId, BuildingKind, GrantingBuilding, MapExtent, MapPoint, PlayerId};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// The building currently winning a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim {
    pub building: BuildingId,
    pub owner: PlayerId,
    pub distance: u32,
    pub seq: u64,
}

impl Claim {
    /// Closer wins; on equal distance the later placement wins.
    #[inline]
    #[must_use]
    pub fn beats(&self, other: &Claim) -> bool {
        self.distance < other.distance || (self.distance == other.distance && self.seq > other.seq)
    }

    fn of(building: &GrantingBuilding, distance: u32) -> Self {
        Self {
            building: building.id,
            owner: building.owner,
            distance,
            seq: building.seq,
        }
    }
}

/// Points whose owner changed in one engine operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerritoryUpdate {
    pub changed: Vec<MapPoint>,
}

impl TerritoryUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.changed.len()
    }

    /// Changed points plus their neighbours: every point whose border
    /// classification may differ after the update. Sorted, no duplicates.
    #[must_use]
    pub fn border_candidates(&self, extent: &MapExtent) -> Vec<MapPoint> {
        let mut set = BTreeSet::new();
        for &pt in &self.changed {
            set.insert(pt);
            set.extend(extent.neighbours(pt));
        }
        set.into_iter().collect()
    }
}

/// Granting buildings and the claim each of them holds on the map.
#[derive(Debug, Clone)]
pub struct TerritoryEngine {
    extent: MapExtent,
    buildings: BTreeMap<BuildingId, GrantingBuilding>,
    claims: Vec<Option<Claim>>,
    next_id: u32,
    next_seq: u64,
}

impl TerritoryEngine {
    #[must_use]
    pub fn new(extent: MapExtent) -> Self {
        Self {
            extent,
            buildings: BTreeMap::new(),
            claims: vec![None; extent.node_count()],
            next_id: 1,
            next_seq: 0,
        }
    }

    #[must_use]
    pub fn extent(&self) -> MapExtent {
        self.extent
    }

    #[must_use]
    pub fn building(&self, id: BuildingId) -> Option<&GrantingBuilding> {
        self.buildings.get(&id)
    }

    /// Buildings in id order, which is also placement order.
    pub fn buildings(&self) -> impl Iterator<Item = &GrantingBuilding> {
        self.buildings.values()
    }

    #[must_use]
    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }

    /// Winning claim at `pt`, `None` when unclaimed or outside the map.
    #[must_use]
    pub fn claim(&self, pt: MapPoint) -> Option<Claim> {
        if !self.extent.contains(pt) {
            return None;
        }
        self.claims[self.extent.index(pt)]
    }

    /// Places a granting building and claims its disc.
    ///
    /// Callers validate the position and owner beforehand; the engine accepts
    /// any in-bounds input.
    pub fn place(
        &mut self,
        table: &mut OwnershipTable,
        kind: BuildingKind,
        pos: MapPoint,
        owner: PlayerId,
        radius: u16,
    ) -> (BuildingId, TerritoryUpdate) {
        let building = GrantingBuilding {
            id: BuildingId(self.next_id),
            kind,
            pos,
            owner,
            radius,
            seq: self.next_seq,
        };
        self.next_id += 1;
        self.next_seq += 1;

        let extent = self.extent;
        let claims = &mut self.claims;
        let mut update = TerritoryUpdate::default();
        for_each_point_in_radius(&extent, pos, u32::from(radius), |pt, distance| {
            let claim = Claim::of(&building, distance);
            let slot = &mut claims[extent.index(pt)];
            if slot.is_none_or(|current| claim.beats(&current)) {
                *slot = Some(claim);
                if table.set_owner(pt, Some(owner)) {
                    update.changed.push(pt);
                }
            }
        });

        tracing::debug!(
            building = %building.id,
            ?kind,
            pos = %pos,
            owner = %owner,
            radius,
            changed = update.len(),
            "Granting building placed"
        );

        let id = building.id;
        self.buildings.insert(id, building);
        (id, update)
    }

    /// Removes a building and hands the points it was winning to the best
    /// remaining claimant, or leaves them unowned.
    ///
    /// Returns `None` when `id` is not a placed building.
    pub fn remove(
        &mut self,
        table: &mut OwnershipTable,
        id: BuildingId,
    ) -> Option<(GrantingBuilding, TerritoryUpdate)> {
        let removed = self.buildings.remove(&id)?;
        let extent = self.extent;

        // Only buildings whose disc overlaps the vacated one can inherit points.
        let reach = u32::from(removed.radius);
        let candidates: Vec<&GrantingBuilding> = self
            .buildings
            .values()
            .filter(|b| extent.calc_distance(b.pos, removed.pos) <= reach + u32::from(b.radius))
            .collect();

        let claims = &mut self.claims;
        let mut update = TerritoryUpdate::default();
        for_each_point_in_radius(&extent, removed.pos, reach, |pt, _| {
            let slot = &mut claims[extent.index(pt)];
            if slot.map(|c| c.building) != Some(id) {
                return;
            }
            let best = best_claim(&extent, candidates.iter().copied(), pt);
            *slot = best;
            if table.set_owner(pt, best.map(|c| c.owner)) {
                update.changed.push(pt);
            }
        });

        tracing::debug!(
            building = %removed.id,
            pos = %removed.pos,
            owner = %removed.owner,
            inheritors = candidates.len(),
            changed = update.len(),
            "Granting building removed"
        );

        Some((removed, update))
    }

    /// Winning claim of every point computed from scratch, ignoring the
    /// incremental state. Row-major.
    #[must_use]
    pub fn cold_claims(&self) -> Vec<Option<Claim>> {
        let extent = self.extent;
        let buildings: Vec<&GrantingBuilding> = self.buildings.values().collect();
        (0..extent.node_count())
            .into_par_iter()
            .map(|idx| best_claim(&extent, buildings.iter().copied(), extent.point_at(idx)))
            .collect()
    }

    /// Replaces the incremental state with a from-scratch computation and
    /// writes every owner that differs.
    pub fn recompute_all(&mut self, table: &mut OwnershipTable) -> TerritoryUpdate {
        let cold = self.cold_claims();
        let mut update = TerritoryUpdate::default();
        for (idx, claim) in cold.iter().enumerate() {
            let pt = self.extent.point_at(idx);
            if table.set_owner(pt, claim.map(|c| c.owner)) {
                update.changed.push(pt);
            }
        }
        self.claims = cold;
        tracing::info!(
            buildings = self.buildings.len(),
            changed = update.len(),
            "Territory recomputed from scratch"
        );
        update
    }
}

/// Best claim on `pt` among `buildings`, `None` if none reaches it.
fn best_claim<'a, I>(extent: &MapExtent, buildings: I, pt: MapPoint) -> Option<Claim>
where
    I: IntoIterator<Item = &'a GrantingBuilding>,
{
    let mut best: Option<Claim> = None;
    for b in buildings {
        let distance = extent.calc_distance(b.pos, pt);
        if distance > u32::from(b.radius) {
            continue;
        }
        let claim = Claim::of(b, distance);
        if best.is_none_or(|current| claim.beats(&current)) {
            best = Some(claim);
        }
    }
    best
}
