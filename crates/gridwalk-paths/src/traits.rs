use gridwalk_core::Coord;

/// The graph a [`Searcher`](crate::Searcher) walks.
///
/// [`GridPather`](crate::GridPather) is the one used on a [`Grid`]; tests
/// and callers of [`Searcher::run_with`](crate::Searcher::run_with) can plug
/// in their own.
///
/// [`Grid`]: gridwalk_core::Grid
pub trait Pather {
    /// Push the cells reachable in one move from `c` onto `buf`.
    ///
    /// `buf` arrives empty. Push order is expansion order, so keep it fixed
    /// for reproducible runs. Cells outside the `rows x cols` area given to
    /// the searcher are dropped with a warning.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

pub trait WeightedPather: Pather {
    /// Price of the move `from -> to`. Searches assume it is at least 1.
    fn cost(&self, from: Coord, to: Coord) -> i32;
}

pub trait AstarPather: WeightedPather {
    /// Guess of the cheapest cost from `from` to `to`. A* stays optimal as
    /// long as this never exceeds the real cost.
    fn estimate(&self, from: Coord, to: Coord) -> f64;
}
