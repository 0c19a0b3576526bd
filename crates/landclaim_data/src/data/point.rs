use serde::{Deserialize, Serialize};
use std::fmt;

/// A single grid cell, addressed by column `x` and row `y`.
///
/// A point carries no extent of its own; whether it is valid depends on the
/// [`MapExtent`] of the world it is used with. Use [`MapExtent::point`] to
/// build points from untrusted coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MapPoint {
    /// Column.
    pub x: u16,
    /// Row. Odd rows are shifted half a cell east.
    pub y: u16,
}

impl MapPoint {
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u16, u16)> for MapPoint {
    fn from((x, y): (u16, u16)) -> Self {
        Self { x, y }
    }
}

/// Size of a wrap-around world.
///
/// Both axes wrap: leaving the map on one side re-enters on the opposite side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapExtent {
    pub width: u16,
    pub height: u16,
}

impl MapExtent {
    /// Smallest width or height for which every point has six distinct neighbours.
    pub const MIN_SIDE: u16 = 4;

    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether this extent supports the hex torus: both sides at least
    /// [`Self::MIN_SIDE`] and an even number of rows, so row parity survives
    /// the vertical seam.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.width >= Self::MIN_SIDE && self.height >= Self::MIN_SIDE && self.height % 2 == 0
    }

    #[must_use]
    pub const fn contains(&self, pt: MapPoint) -> bool {
        pt.x < self.width && pt.y < self.height
    }

    /// Checked construction: `None` for coordinates outside the map.
    #[must_use]
    pub fn point(&self, x: u16, y: u16) -> Option<MapPoint> {
        let pt = MapPoint::new(x, y);
        self.contains(pt).then_some(pt)
    }

    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of an in-bounds point.
    #[inline(always)]
    #[must_use]
    pub const fn index(&self, pt: MapPoint) -> usize {
        (pt.y as usize * self.width as usize) + pt.x as usize
    }

    /// Inverse of [`Self::index`].
    #[inline]
    #[must_use]
    pub const fn point_at(&self, idx: usize) -> MapPoint {
        let w = self.width as usize;
        MapPoint {
            x: (idx % w) as u16,
            y: (idx / w) as u16,
        }
    }

    /// Every point in row-major order.
    pub fn points(&self) -> impl Iterator<Item = MapPoint> + '_ {
        (0..self.node_count()).map(|idx| self.point_at(idx))
    }
}

/// The six hex directions, in the fixed order neighbours are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    West,
    NorthWest,
    NorthEast,
    East,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const COUNT: usize = 6;

    pub const ALL: [Direction; Self::COUNT] = [
        Direction::West,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }
}
