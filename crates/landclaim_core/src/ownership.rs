//! Per-point ownership state.
//!
//! The table is readable by anyone but only the assignment engine in
//! [`crate::territory`] writes it.

use landclaim_data::{MapExtent, MapPoint, PlayerId};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// One map point's territorial state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// `0` for unowned, otherwise the 1-based player id.
    pub owner: u8,
}

impl Node {
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        PlayerId::new(self.owner)
    }
}

/// Owner of every point on the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipTable {
    extent: MapExtent,
    nodes: Vec<Node>,
}

impl OwnershipTable {
    /// A table with every point unowned.
    #[must_use]
    pub fn new(extent: MapExtent) -> Self {
        Self {
            extent,
            nodes: vec![Node::default(); extent.node_count()],
        }
    }

    #[must_use]
    pub fn extent(&self) -> MapExtent {
        self.extent
    }

    /// Node at `pt`, `None` outside the map.
    #[must_use]
    pub fn node(&self, pt: MapPoint) -> Option<&Node> {
        if self.extent.contains(pt) {
            self.nodes.get(self.extent.index(pt))
        } else {
            None
        }
    }

    /// Owner of `pt`; `None` for unowned points and points outside the map.
    #[must_use]
    pub fn owner(&self, pt: MapPoint) -> Option<PlayerId> {
        self.node(pt).and_then(Node::owner)
    }

    /// Writes the owner of `pt` and reports whether it changed. Setting the
    /// current owner again is a no-op.
    pub(crate) fn set_owner(&mut self, pt: MapPoint, owner: Option<PlayerId>) -> bool {
        debug_assert!(self.extent.contains(pt), "set_owner outside map: {pt}");
        let idx = self.extent.index(pt);
        let raw = owner.map_or(0, PlayerId::get);
        match self.nodes.get_mut(idx) {
            Some(node) if node.owner != raw => {
                node.owner = raw;
                true
            }
            _ => false,
        }
    }

    /// Every point with its owner, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (MapPoint, Option<PlayerId>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (self.extent.point_at(idx), node.owner()))
    }

    #[must_use]
    pub fn owned_points(&self, player: PlayerId) -> Vec<MapPoint> {
        self.iter()
            .filter_map(|(pt, owner)| (owner == Some(player)).then_some(pt))
            .collect()
    }

    #[must_use]
    pub fn territory_size(&self, player: PlayerId) -> usize {
        self.nodes.iter().filter(|n| n.owner == player.get()).count()
    }

    /// Raw owner bytes in row-major order, for cheap whole-map comparisons.
    #[must_use]
    pub fn raw_owners(&self) -> Vec<u8> {
        self.nodes.iter().map(|n| n.owner).collect()
    }
}

/// An immutable view of the ownership table at one point in time.
///
/// Holding a snapshot never blocks the simulation: the world copies the table
/// on its next write instead, so a snapshot always reflects a completed
/// recomputation.
#[derive(Debug, Clone)]
pub struct OwnershipSnapshot {
    pub version: u64,
    table: Arc<OwnershipTable>,
}

impl OwnershipSnapshot {
    pub(crate) fn new(version: u64, table: Arc<OwnershipTable>) -> Self {
        Self { version, table }
    }
}

impl Deref for OwnershipSnapshot {
    type Target = OwnershipTable;

    fn deref(&self) -> &OwnershipTable {
        &self.table
    }
}
