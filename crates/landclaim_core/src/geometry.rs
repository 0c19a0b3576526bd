//! Point space of the wrap-around hex grid.
//!
//! Rows are laid out offset-style: every odd row is shifted half a cell east,
//! so each point touches two cells in the row above, two in the row below and
//! one on either side. Both axes wrap.
//!
//! Distances are measured in half-cell horizontal units internally: a point's
//! horizontal position is `2 * x + (y & 1)`. A diagonal step moves one row and
//! one half-cell, a horizontal step moves two half-cells.

use landclaim_data::{Direction, MapExtent, MapPoint};

/// Coordinate arithmetic and the distance metric.
pub trait PointSpace {
    /// Wraps signed coordinates into the map.
    fn wrap(&self, x: i32, y: i32) -> MapPoint;

    /// Adjacent point in `dir`.
    fn neighbour(&self, pt: MapPoint, dir: Direction) -> MapPoint;

    /// All six adjacent points, in [`Direction::ALL`] order.
    fn neighbours(&self, pt: MapPoint) -> [MapPoint; Direction::COUNT] {
        Direction::ALL.map(|dir| self.neighbour(pt, dir))
    }

    /// Minimum number of adjacency steps between `a` and `b`, taking the
    /// shorter way round each seam.
    fn calc_distance(&self, a: MapPoint, b: MapPoint) -> u32;
}

impl PointSpace for MapExtent {
    #[inline]
    fn wrap(&self, x: i32, y: i32) -> MapPoint {
        MapPoint {
            x: x.rem_euclid(i32::from(self.width)) as u16,
            y: y.rem_euclid(i32::from(self.height)) as u16,
        }
    }

    #[inline]
    fn neighbour(&self, pt: MapPoint, dir: Direction) -> MapPoint {
        let odd = i32::from(pt.y & 1);
        let (dx, dy) = match dir {
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
            Direction::NorthWest => (odd - 1, -1),
            Direction::NorthEast => (odd, -1),
            Direction::SouthWest => (odd - 1, 1),
            Direction::SouthEast => (odd, 1),
        };
        self.wrap(i32::from(pt.x) + dx, i32::from(pt.y) + dy)
    }

    #[inline]
    fn calc_distance(&self, a: MapPoint, b: MapPoint) -> u32 {
        let width = i32::from(self.width);
        let height = i32::from(self.height);

        // Half-cell column delta and doubled row delta.
        let mut dx = ((i32::from(a.x) - i32::from(b.x)) * 2 + i32::from(a.y & 1)
            - i32::from(b.y & 1))
        .abs();
        let mut dy = (i32::from(a.y) - i32::from(b.y)).abs() * 2;

        // Periods are 2 * width half-cells and 2 * height doubled rows.
        if dx > width {
            dx = 2 * width - dx;
        }
        if dy > height {
            dy = 2 * height - dy;
        }

        // Row steps cover dy / 2 half-cells for free; the rest costs two
        // half-cells per horizontal step.
        let extra = (dx - dy / 2).max(0);
        ((dy + extra) / 2) as u32
    }
}
