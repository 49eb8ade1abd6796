//! Neighbour resolution over a [`Grid`].
//!
//! Every function returns in-bound cells only, in an order derived from the
//! fixed up, right, down, left sequence of [`Coord::DIRECTIONS`]. Searches
//! and maze carving rely on that order for reproducible tie-breaking.

use gridwalk_core::{Cell, Coord, Grid};

/// The up to four axis-aligned neighbours of `c`.
pub fn neighbors(grid: &Grid, c: Coord) -> impl Iterator<Item = &Cell> + '_ {
    neighbors_with_stride(grid, c, 1)
}

/// The up to four cells `stride` steps away from `c` along each axis.
///
/// With `stride == 2` this jumps over the wall cell separating two passage
/// cells of a maze lattice.
pub fn neighbors_with_stride(grid: &Grid, c: Coord, stride: i32) -> impl Iterator<Item = &Cell> + '_ {
    c.neighbors_4(stride).into_iter().filter_map(move |n| grid.cell(n))
}

/// The cells directly above and below `c`.
pub fn vertical_neighbors(grid: &Grid, c: Coord) -> impl Iterator<Item = &Cell> + '_ {
    [c.shift(-1, 0), c.shift(1, 0)]
        .into_iter()
        .filter_map(move |n| grid.cell(n))
}

/// The cells directly right and left of `c`.
pub fn horizontal_neighbors(grid: &Grid, c: Coord) -> impl Iterator<Item = &Cell> + '_ {
    [c.shift(0, 1), c.shift(0, -1)]
        .into_iter()
        .filter_map(move |n| grid.cell(n))
}
