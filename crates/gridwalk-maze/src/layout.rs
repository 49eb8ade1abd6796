//! The carved result and the checks it must pass.

use std::collections::{BTreeSet, VecDeque};

use gridwalk_core::{Coord, Grid, GridError, Terrain};
use gridwalk_paths::neighbors::{horizontal_neighbors, neighbors_with_stride, vertical_neighbors};

use crate::error::MazeError;

/// A generated maze: every cell of `passages` is open, everything else in
/// the `rows x cols` area is wall.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeLayout {
    pub rows: i32,
    pub cols: i32,
    pub passages: BTreeSet<Coord>,
}

/// Whether `c` sits on the coarse lattice (even row, even column).
#[inline]
pub fn is_lattice(c: Coord) -> bool {
    c.row % 2 == 0 && c.col % 2 == 0
}

impl MazeLayout {
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
            passages: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn is_passage(&self, c: Coord) -> bool {
        self.passages.contains(&c)
    }

    /// Number of lattice cells in the area.
    pub fn lattice_len(&self) -> usize {
        let r = (self.rows.max(0) as usize).div_ceil(2);
        let c = (self.cols.max(0) as usize).div_ceil(2);
        r * c
    }

    /// Paint the layout onto `grid`: walls everywhere, then the passages
    /// cleared. Start and end markers are left where they are.
    pub fn apply(&self, grid: &mut Grid) -> Result<(), GridError> {
        grid.fill(Terrain::Wall);
        for &p in &self.passages {
            grid.clear(p)?;
        }
        Ok(())
    }

    /// The passage graph between lattice cells, one `(a, b)` pair per open
    /// connector with `a < b`, in connector order.
    ///
    /// A connector on an even row joins the lattice cells left and right of
    /// it; one on an even column joins the cells above and below.
    pub fn coarse_edges(&self) -> Vec<(Coord, Coord)> {
        let area = Grid::new(self.rows, self.cols);
        let mut edges = Vec::new();
        for &c in self.passages.iter().filter(|&&c| !is_lattice(c)) {
            let ends: Vec<Coord> = if c.row % 2 == 0 {
                horizontal_neighbors(&area, c).map(|n| n.coord).collect()
            } else if c.col % 2 == 0 {
                vertical_neighbors(&area, c).map(|n| n.coord).collect()
            } else {
                continue;
            };
            if let [a, b] = ends[..] {
                if self.is_passage(a) && self.is_passage(b) {
                    edges.push((a.min(b), a.max(b)));
                }
            }
        }
        edges
    }

    /// Lattice cells joined to exactly one other.
    pub fn dead_ends(&self) -> Vec<Coord> {
        let mut degree = std::collections::BTreeMap::new();
        for (a, b) in self.coarse_edges() {
            *degree.entry(a).or_insert(0) += 1;
            *degree.entry(b).or_insert(0) += 1;
        }
        degree
            .into_iter()
            .filter_map(|(c, d)| (d == 1).then_some(c))
            .collect()
    }

    /// Check that every lattice cell is reachable from the top-left one.
    ///
    /// Walks the lattice directly, one stride-2 hop per open connector, so
    /// the cost stays linear in the area.
    pub fn check_connected(&self) -> Result<(), MazeError> {
        let expected = self.lattice_len();
        if expected == 0 {
            return Ok(());
        }
        if !self.is_passage(Coord::ZERO) {
            return Err(MazeError::Disconnected { reached: 0, expected });
        }
        let area = Grid::new(self.rows, self.cols);
        let mut seen = BTreeSet::from([Coord::ZERO]);
        let mut queue = VecDeque::from([Coord::ZERO]);
        while let Some(c) = queue.pop_front() {
            for n in neighbors_with_stride(&area, c, 2) {
                let n = n.coord;
                if self.is_passage(c.midpoint(n)) && self.is_passage(n) && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        if seen.len() != expected {
            return Err(MazeError::Disconnected {
                reached: seen.len(),
                expected,
            });
        }
        Ok(())
    }

    /// Check that the passages form a spanning tree of the lattice: all of
    /// it reachable, no cycle.
    pub fn validate(&self) -> Result<(), MazeError> {
        self.check_connected()?;
        let nodes = self.lattice_len();
        let edges = self.coarse_edges().len();
        if nodes > 0 && edges != nodes - 1 {
            return Err(MazeError::Cycle { edges, nodes });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(rows: i32, cols: i32, cells: &[(i32, i32)]) -> MazeLayout {
        let mut l = MazeLayout::new(rows, cols);
        l.passages.extend(cells.iter().map(|&c| Coord::from(c)));
        l
    }

    #[test]
    fn lattice_size() {
        assert_eq!(MazeLayout::new(5, 5).lattice_len(), 9);
        assert_eq!(MazeLayout::new(4, 6).lattice_len(), 6);
        assert_eq!(MazeLayout::new(1, 1).lattice_len(), 1);
        assert_eq!(MazeLayout::new(0, 7).lattice_len(), 0);
    }

    #[test]
    fn edges_follow_connectors() {
        // Lattice (0,0) (0,2) (2,0) (2,2); open (0,1) and (1,0) and (1,2).
        let l = layout(
            3,
            3,
            &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 2)],
        );
        assert_eq!(
            l.coarse_edges(),
            vec![
                (Coord::new(0, 0), Coord::new(0, 2)),
                (Coord::new(0, 0), Coord::new(2, 0)),
                (Coord::new(0, 2), Coord::new(2, 2)),
            ]
        );
        assert_eq!(l.validate(), Ok(()));
        assert_eq!(l.dead_ends(), vec![Coord::new(2, 0), Coord::new(2, 2)]);
    }

    #[test]
    fn cycle_and_gap_are_reported() {
        let mut l = layout(
            3,
            3,
            &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)],
        );
        assert_eq!(l.validate(), Err(MazeError::Cycle { edges: 4, nodes: 4 }));
        assert_eq!(l.check_connected(), Ok(()));

        l.passages.remove(&Coord::new(1, 0));
        l.passages.remove(&Coord::new(2, 1));
        assert_eq!(
            l.validate(),
            Err(MazeError::Disconnected { reached: 3, expected: 4 })
        );
    }

    #[test]
    fn apply_keeps_markers() {
        let l = layout(1, 3, &[(0, 0), (0, 1), (0, 2)]);
        let mut g = Grid::parse("S#E\n...").unwrap();
        l.apply(&mut g).unwrap();
        assert_eq!(g.to_string(), "S.E\n###\n");
        assert!(g.start().is_some() && g.end().is_some());
    }

    #[test]
    fn apply_reports_passages_outside_the_grid() {
        let l = layout(3, 3, &[(0, 0), (2, 2)]);
        let mut g = Grid::new(2, 2);
        assert!(matches!(l.apply(&mut g), Err(GridError::OutOfBounds { .. })));
    }
}
