//! Radius queries: every point within a given distance of a center.
//!
//! Queries walk outward ring by ring from the center over the neighbour
//! relation, so the cost is proportional to the size of the disc rather than
//! the size of the map. Because the graph distance on the hex torus equals
//! [`PointSpace::calc_distance`], ring `d` of the walk is exactly the set of
//! points at distance `d`.

use crate::geometry::PointSpace;
use landclaim_data::{MapExtent, MapPoint};
use std::collections::HashSet;

/// Calls `callback(point, distance)` once for every point with
/// `calc_distance(center, point) <= radius`.
///
/// Order is deterministic: by increasing distance, and within a ring in the
/// order the walk discovers points (neighbours in `Direction::ALL` order).
pub fn for_each_point_in_radius<F>(
    extent: &MapExtent,
    center: MapPoint,
    radius: u32,
    mut callback: F,
)
where
    F: FnMut(MapPoint, u32),
{
    let mut visited: HashSet<MapPoint> = HashSet::new();
    visited.insert(center);
    callback(center, 0);

    let mut ring = vec![center];
    let mut next = Vec::new();
    for distance in 1..=radius {
        next.clear();
        for &pt in &ring {
            for n in extent.neighbours(pt) {
                if visited.insert(n) {
                    callback(n, distance);
                    next.push(n);
                }
            }
        }
        // Disc already covers the whole map.
        if next.is_empty() {
            break;
        }
        std::mem::swap(&mut ring, &mut next);
    }
}

/// All points within `radius` of `center`, `center` first.
#[must_use]
pub fn points_in_radius(extent: &MapExtent, center: MapPoint, radius: u32) -> Vec<MapPoint> {
    let mut result = Vec::with_capacity(disc_size(radius).min(extent.node_count()));
    for_each_point_in_radius(extent, center, radius, |pt, _| result.push(pt));
    result
}

/// Points at exactly `radius` from `center`.
#[must_use]
pub fn ring_points(extent: &MapExtent, center: MapPoint, radius: u32) -> Vec<MapPoint> {
    let mut result = Vec::new();
    for_each_point_in_radius(extent, center, radius, |pt, d| {
        if d == radius {
            result.push(pt);
        }
    });
    result
}

/// Number of points in a disc of `radius` on an unbounded hex plane:
/// `1 + 3 * r * (r + 1)`. On a small torus the real disc can be smaller.
#[must_use]
pub fn disc_size(radius: u32) -> usize {
    let r = radius as usize;
    1 + 3 * r * (r + 1)
}
