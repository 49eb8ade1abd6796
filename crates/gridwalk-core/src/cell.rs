//! The [`Cell`] type: one grid square and its terrain.

use crate::geom::Coord;

/// What occupies a cell. Walls and weights are mutually exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Clear,
    Wall,
    /// Traversable, but entering the cell costs the configured weight.
    Weight,
}

/// A grid square. Start/end designation is held by the [`Grid`](crate::Grid),
/// not by the cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub coord: Coord,
    pub terrain: Terrain,
}

impl Cell {
    /// A clear cell at `coord`.
    #[inline]
    pub const fn new(coord: Coord) -> Self {
        Self {
            coord,
            terrain: Terrain::Clear,
        }
    }

    /// Set the terrain (builder).
    #[inline]
    pub const fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = terrain;
        self
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        self.terrain == Terrain::Wall
    }

    #[inline]
    pub fn is_weight(&self) -> bool {
        self.terrain == Terrain::Weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_is_exclusive() {
        let c = Cell::new(Coord::new(1, 1));
        assert!(!c.is_wall() && !c.is_weight());
        let w = c.with_terrain(Terrain::Wall);
        assert!(w.is_wall() && !w.is_weight());
        let h = w.with_terrain(Terrain::Weight);
        assert!(!h.is_wall() && h.is_weight());
        assert_eq!(h.coord, Coord::new(1, 1));
    }
}
