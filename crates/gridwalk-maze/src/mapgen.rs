//! Carving algorithms.

use gridwalk_core::{Coord, Grid};
use gridwalk_paths::neighbors_with_stride;
use log::debug;
use rand::Rng;

use crate::config::MazeAlgorithm;
use crate::layout::{MazeLayout, is_lattice};

/// Generation-time state of one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MazeCell {
    pub visited: bool,
    pub is_passage: bool,
    /// Lattice cell this one was carved from. Backtracking follows it.
    pub parent: Option<Coord>,
}

/// Maze generator over a `rows x cols` area.
///
/// The generator owns its random source, so a seeded `R` yields the same
/// layout every time.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    area: Grid,
    cells: Vec<MazeCell>,
    nbuf: Vec<Coord>,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rows: i32, cols: i32, rng: R) -> Self {
        let area = Grid::new(rows.max(0), cols.max(0));
        let cells = vec![MazeCell::default(); area.len()];
        Self {
            rng,
            area,
            cells,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Generation state of `c`, if it lies in the area.
    pub fn cell(&self, c: Coord) -> Option<&MazeCell> {
        self.area
            .contains(c)
            .then(|| &self.cells[c.index(self.area.cols())])
    }

    fn cell_mut(&mut self, c: Coord) -> &mut MazeCell {
        let i = c.index(self.area.cols());
        &mut self.cells[i]
    }

    /// Carve a fresh maze with `algorithm`. The result is a spanning tree
    /// of the lattice.
    pub fn carve(&mut self, algorithm: MazeAlgorithm) -> MazeLayout {
        self.cells.fill(MazeCell::default());
        if !self.area.is_empty() {
            match algorithm {
                MazeAlgorithm::Backtracker => self.backtracker(),
                MazeAlgorithm::Prim => self.prim(),
            }
        }
        let layout = self.layout();
        debug!(
            "carved {} passages, {} dead ends",
            layout.passages.len(),
            layout.dead_ends().len()
        );
        #[cfg(debug_assertions)]
        {
            let check = layout.validate();
            if let Err(err) = &check {
                log::error!("{algorithm:?} produced an invalid maze: {err}");
            }
            debug_assert!(check.is_ok());
        }
        layout
    }

    fn layout(&self) -> MazeLayout {
        let mut layout = MazeLayout::new(self.area.rows(), self.area.cols());
        layout.passages.extend(
            self.area
                .iter()
                .zip(&self.cells)
                .filter(|(_, m)| m.is_passage)
                .map(|(c, _)| c.coord),
        );
        layout
    }

    fn visit(&mut self, c: Coord, parent: Option<Coord>) {
        let m = self.cell_mut(c);
        m.visited = true;
        m.is_passage = true;
        m.parent = parent;
    }

    /// Open `to`, reached from `from`, and the wall cell between them.
    fn open(&mut self, from: Coord, to: Coord) {
        self.cell_mut(from.midpoint(to)).is_passage = true;
        self.visit(to, Some(from));
    }

    /// Fill `nbuf` with the unvisited lattice neighbours of `c`.
    fn unvisited_around(&mut self, c: Coord) {
        self.nbuf.clear();
        let cols = self.area.cols();
        let cells = &self.cells;
        self.nbuf.extend(
            neighbors_with_stride(&self.area, c, 2)
                .map(|n| n.coord)
                .filter(|n| !cells[n.index(cols)].visited),
        );
    }

    fn pick(&mut self) -> Coord {
        let i = self.rng.random_range(0..self.nbuf.len());
        self.nbuf[i]
    }

    /// Randomized depth-first carving from the top-left corner.
    fn backtracker(&mut self) {
        let mut current = Coord::ZERO;
        self.visit(current, None);
        loop {
            self.unvisited_around(current);
            if self.nbuf.is_empty() {
                match self.cell_mut(current).parent {
                    Some(p) => current = p,
                    None => break,
                }
                continue;
            }
            let next = self.pick();
            self.open(current, next);
            current = next;
        }
    }

    /// Randomized Prim: repeatedly open a random candidate passage leading
    /// out of the carved region.
    fn prim(&mut self) {
        let root = Coord::ZERO;
        self.visit(root, None);
        let mut frontier: Vec<(Coord, Coord)> = Vec::new();
        self.unvisited_around(root);
        frontier.extend(self.nbuf.iter().map(|&n| (root, n)));
        while !frontier.is_empty() {
            let i = self.rng.random_range(0..frontier.len());
            let (from, to) = frontier.swap_remove(i);
            if self.cell_mut(to).visited {
                continue;
            }
            self.open(from, to);
            self.unvisited_around(to);
            frontier.extend(self.nbuf.iter().map(|&n| (to, n)));
        }
    }

    /// Open one extra wall at each dead end of `layout` with probability
    /// `chance`, turning the tree into a braided maze with cycles.
    ///
    /// Returns the number of walls opened.
    pub fn braid(&mut self, layout: &mut MazeLayout, chance: f64) -> usize {
        if chance.is_nan() || chance <= 0.0 {
            return 0;
        }
        let chance = chance.min(1.0);
        let area = Grid::new(layout.rows, layout.cols);
        let mut opened = 0;
        for c in layout.dead_ends() {
            // An earlier opening may already have joined this one.
            let degree = neighbors_with_stride(&area, c, 2)
                .filter(|n| layout.is_passage(c.midpoint(n.coord)))
                .count();
            if degree != 1 || !self.rng.random_bool(chance) {
                continue;
            }
            self.nbuf.clear();
            self.nbuf.extend(
                neighbors_with_stride(&area, c, 2)
                    .map(|n| n.coord)
                    .filter(|&n| is_lattice(n) && !layout.is_passage(c.midpoint(n))),
            );
            if self.nbuf.is_empty() {
                continue;
            }
            let n = self.pick();
            layout.passages.insert(c.midpoint(n));
            opened += 1;
        }
        debug!("braiding opened {opened} walls");
        #[cfg(debug_assertions)]
        {
            let check = layout.check_connected();
            if let Err(err) = &check {
                log::error!("braiding disconnected the maze: {err}");
            }
            debug_assert!(check.is_ok());
        }
        opened
    }
}
