use gridwalk_core::{Coord, Grid};

use crate::config::SearchConfig;
use crate::neighbors::neighbors;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// The [`Grid`] seen as a search graph.
///
/// Walls are never neighbours. Start and end cells are always traversable,
/// whatever terrain lies under them. Entering a weighted cell costs
/// [`SearchConfig::weight_cost`], any other move costs 1.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'g> {
    grid: &'g Grid,
    config: SearchConfig,
}

impl<'g> GridPather<'g> {
    pub fn new(grid: &'g Grid, config: SearchConfig) -> Self {
        Self { grid, config }
    }

    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        buf.extend(
            neighbors(self.grid, c)
                .map(|n| n.coord)
                .filter(|&n| !self.grid.is_only_wall(n)),
        );
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, _from: Coord, to: Coord) -> i32 {
        if self.grid.is_only_weight(to) {
            self.config.weight_cost.max(1)
        } else {
            1
        }
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Coord, to: Coord) -> f64 {
        self.config.heuristic.estimate(from, to)
    }
}

/// Total cost of walking `path` on `grid`: the sum of the entry cost of
/// every cell after the first.
pub fn path_cost(grid: &Grid, path: &[Coord], config: SearchConfig) -> i32 {
    let pather = GridPather::new(grid, config);
    path.windows(2).map(|w| pather.cost(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_are_skipped_and_markers_are_not() {
        let mut g = Grid::parse(".#.\n#..\n...").unwrap();
        let p = GridPather::new(&g, SearchConfig::default());
        let mut buf = Vec::new();
        p.neighbors(Coord::new(0, 0), &mut buf);
        assert!(buf.is_empty());

        // A start marker dropped on a wall makes it passable.
        g.set_start(Coord::new(0, 1)).unwrap();
        let p = GridPather::new(&g, SearchConfig::default());
        buf.clear();
        p.neighbors(Coord::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Coord::new(0, 1)]);
    }

    #[test]
    fn weight_cost_applies_on_entry() {
        let g = Grid::parse("Sw.").unwrap();
        let cfg = SearchConfig::default();
        let p = GridPather::new(&g, cfg);
        assert_eq!(p.cost(Coord::new(0, 0), Coord::new(0, 1)), 15);
        assert_eq!(p.cost(Coord::new(0, 1), Coord::new(0, 2)), 1);
        let path = [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)];
        assert_eq!(path_cost(&g, &path, cfg), 16);
        assert_eq!(path_cost(&g, &path[..1], cfg), 0);
    }
}
