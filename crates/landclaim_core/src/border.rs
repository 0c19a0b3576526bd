//! Border classification, derived from live ownership on every call.

use crate::geometry::PointSpace;
use crate::ownership::OwnershipTable;
use landclaim_data::{MapExtent, MapPoint, PlayerId};
use petgraph::unionfind::UnionFind;
use std::collections::HashSet;

/// Read-side territory predicates over anything that can report owners.
pub trait BorderLogic {
    fn map_extent(&self) -> MapExtent;

    fn owner_at(&self, pt: MapPoint) -> Option<PlayerId>;

    /// Whether `pt` belongs to any player.
    fn is_player_territory(&self, pt: MapPoint) -> bool {
        self.owner_at(pt).is_some()
    }

    /// Whether `pt` is owned by `player` and touches a point that is not:
    /// unowned and enemy neighbours count the same.
    fn is_border_node(&self, pt: MapPoint, player: PlayerId) -> bool {
        if self.owner_at(pt) != Some(player) {
            return false;
        }
        self.map_extent()
            .neighbours(pt)
            .iter()
            .any(|&n| self.owner_at(n) != Some(player))
    }

    /// Every border node of `player`, row-major.
    fn border_nodes(&self, player: PlayerId) -> Vec<MapPoint> {
        self.map_extent()
            .points()
            .filter(|&pt| self.is_border_node(pt, player))
            .collect()
    }

    /// Number of separate contiguous regions `player` owns.
    fn territory_regions(&self, player: PlayerId) -> usize {
        let extent = self.map_extent();
        let mut regions = UnionFind::<usize>::new(extent.node_count());
        let mut owned = Vec::new();
        for pt in extent.points() {
            if self.owner_at(pt) != Some(player) {
                continue;
            }
            let idx = extent.index(pt);
            owned.push(idx);
            for n in extent.neighbours(pt) {
                if self.owner_at(n) == Some(player) {
                    regions.union(idx, extent.index(n));
                }
            }
        }
        let roots: HashSet<usize> = owned.into_iter().map(|idx| regions.find_mut(idx)).collect();
        roots.len()
    }
}

impl BorderLogic for OwnershipTable {
    fn map_extent(&self) -> MapExtent {
        self.extent()
    }

    fn owner_at(&self, pt: MapPoint) -> Option<PlayerId> {
        self.owner(pt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(raw: u8) -> PlayerId {
        PlayerId::new(raw).unwrap()
    }

    fn fill_disc(table: &mut OwnershipTable, center: MapPoint, radius: u32, player: PlayerId) {
        for pt in crate::radius::points_in_radius(&table.extent(), center, radius) {
            table.set_owner(pt, Some(player));
        }
    }

    #[test]
    fn test_unowned_point_is_never_border() {
        let table = OwnershipTable::new(MapExtent::new(10, 10));
        assert!(!table.is_border_node(MapPoint::new(3, 3), p(1)));
        assert!(!table.is_player_territory(MapPoint::new(3, 3)));
    }

    #[test]
    fn test_disc_edge_is_border_interior_is_not() {
        let mut table = OwnershipTable::new(MapExtent::new(30, 30));
        let center = MapPoint::new(15, 15);
        fill_disc(&mut table, center, 3, p(1));
        let extent = table.extent();
        for pt in extent.points() {
            let d = extent.calc_distance(center, pt);
            assert_eq!(table.is_border_node(pt, p(1)), d == 3, "{pt}");
            assert_eq!(table.is_player_territory(pt), d <= 3, "{pt}");
        }
        assert_eq!(table.border_nodes(p(1)).len(), 18);
    }

    #[test]
    fn test_border_is_per_player() {
        let mut table = OwnershipTable::new(MapExtent::new(10, 10));
        table.set_owner(MapPoint::new(4, 4), Some(p(1)));
        assert!(table.is_border_node(MapPoint::new(4, 4), p(1)));
        assert!(!table.is_border_node(MapPoint::new(4, 4), p(2)));
    }

    #[test]
    fn test_enemy_neighbour_counts_as_border() {
        let mut table = OwnershipTable::new(MapExtent::new(20, 20));
        fill_disc(&mut table, MapPoint::new(5, 5), 2, p(1));
        let inner = MapPoint::new(5, 5);
        assert!(!table.is_border_node(inner, p(1)));
        table.set_owner(MapPoint::new(6, 5), Some(p(2)));
        assert!(table.is_border_node(inner, p(1)));
    }

    #[test]
    fn test_territory_regions_counts_components() {
        let mut table = OwnershipTable::new(MapExtent::new(40, 40));
        assert_eq!(table.territory_regions(p(1)), 0);
        fill_disc(&mut table, MapPoint::new(5, 5), 2, p(1));
        assert_eq!(table.territory_regions(p(1)), 1);
        fill_disc(&mut table, MapPoint::new(25, 25), 2, p(1));
        assert_eq!(table.territory_regions(p(1)), 2);
        // Wraps across the seam into a single region.
        fill_disc(&mut table, MapPoint::new(0, 20), 2, p(2));
        fill_disc(&mut table, MapPoint::new(38, 20), 2, p(2));
        assert_eq!(table.territory_regions(p(2)), 1);
    }
}
