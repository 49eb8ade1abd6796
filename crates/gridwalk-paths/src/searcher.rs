use gridwalk_core::{Coord, Grid, GridError, InvalidState, in_bounds};
use log::debug;

use crate::algorithm::Algorithm;
use crate::config::SearchConfig;
use crate::pather::GridPather;
use crate::search::SearchRun;
use crate::traits::AstarPather;

/// Sentinel distance of a cell no frontier has reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// Which frontier a visitation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Grown from the start cell. Single-frontier searches only use this side.
    Start,
    /// Grown from the end cell.
    End,
}

impl Side {
    #[inline]
    pub fn other(self) -> Side {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

// ---------------------------------------------------------------------------
// ExplorationCell
// ---------------------------------------------------------------------------

/// Search-time decoration of a grid cell. Lives only for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorationCell {
    pub visited_from_start: bool,
    pub visited_from_end: bool,
    /// Predecessor on the path from the start.
    pub parent: Option<Coord>,
    /// Predecessor on the path from the end (bidirectional runs only).
    pub parent_from_end: Option<Coord>,
    /// Best known distance from the start, [`UNREACHABLE`] until reached.
    pub distance: i32,
    /// Best known distance from the end (bidirectional runs only).
    pub distance_from_end: i32,
    /// Estimated distance to the end, fixed when the decoration is created.
    pub heuristic: f64,
    pub(crate) discovered_from_start: bool,
    pub(crate) discovered_from_end: bool,
    pub(crate) generation: u32,
}

impl Default for ExplorationCell {
    fn default() -> Self {
        Self {
            visited_from_start: false,
            visited_from_end: false,
            parent: None,
            parent_from_end: None,
            distance: UNREACHABLE,
            distance_from_end: UNREACHABLE,
            heuristic: 0.0,
            discovered_from_start: false,
            discovered_from_end: false,
            generation: 0,
        }
    }
}

impl ExplorationCell {
    #[inline]
    pub fn visited(&self, side: Side) -> bool {
        match side {
            Side::Start => self.visited_from_start,
            Side::End => self.visited_from_end,
        }
    }

    #[inline]
    pub fn parent_on(&self, side: Side) -> Option<Coord> {
        match side {
            Side::Start => self.parent,
            Side::End => self.parent_from_end,
        }
    }

    #[inline]
    pub fn distance_on(&self, side: Side) -> i32 {
        match side {
            Side::Start => self.distance,
            Side::End => self.distance_from_end,
        }
    }

    #[inline]
    pub(crate) fn set_visited(&mut self, side: Side) {
        match side {
            Side::Start => self.visited_from_start = true,
            Side::End => self.visited_from_end = true,
        }
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, side: Side, p: Option<Coord>) {
        match side {
            Side::Start => self.parent = p,
            Side::End => self.parent_from_end = p,
        }
    }

    #[inline]
    pub(crate) fn set_distance(&mut self, side: Side, d: i32) {
        match side {
            Side::Start => self.distance = d,
            Side::End => self.distance_from_end = d,
        }
    }

    /// Mark as discovered on `side`; returns `false` if it already was.
    #[inline]
    pub(crate) fn discover(&mut self, side: Side) -> bool {
        let flag = match side {
            Side::Start => &mut self.discovered_from_start,
            Side::End => &mut self.discovered_from_end,
        };
        !std::mem::replace(flag, true)
    }
}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// Owner of the [`ExplorationCell`] arena, reused across runs.
///
/// Each run bumps a generation counter; a decoration whose generation is
/// stale is re-created on first access, so no state from a previous run can
/// leak into the next one and no run pays for clearing the whole arena.
pub struct Searcher {
    pub(crate) config: SearchConfig,
    pub(crate) rows: i32,
    pub(crate) cols: i32,
    pub(crate) nodes: Vec<ExplorationCell>,
    pub(crate) generation: u32,
    pub(crate) goal: Coord,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Coord>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            rows: 0,
            cols: 0,
            nodes: Vec::new(),
            generation: 0,
            goal: Coord::ZERO,
            nbuf: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Start a search on `grid` from `start` to `end`.
    ///
    /// Nothing is traversed until the returned [`SearchRun`] is pulled.
    pub fn run<'a>(
        &'a mut self,
        grid: &'a Grid,
        start: Coord,
        end: Coord,
        algorithm: Algorithm,
    ) -> Result<SearchRun<'a, GridPather<'a>>, GridError> {
        let pather = GridPather::new(grid, self.config);
        self.run_with(pather, grid.rows(), grid.cols(), start, end, algorithm)
    }

    /// Start a search between the grid's own start and end markers.
    pub fn run_markers<'a>(
        &'a mut self,
        grid: &'a Grid,
        algorithm: Algorithm,
    ) -> Result<SearchRun<'a, GridPather<'a>>, GridError> {
        let (start, end) = grid.endpoints()?;
        self.run(grid, start, end, algorithm)
    }

    /// Start a search over any `rows x cols` lattice described by `pather`.
    pub fn run_with<'a, P: AstarPather>(
        &'a mut self,
        pather: P,
        rows: i32,
        cols: i32,
        start: Coord,
        end: Coord,
        algorithm: Algorithm,
    ) -> Result<SearchRun<'a, P>, GridError> {
        for c in [start, end] {
            if !in_bounds(c.row, c.col, rows, cols) {
                return Err(GridError::OutOfBounds { coord: c, rows, cols });
            }
        }
        if start == end {
            return Err(InvalidState::StartEqualsEnd.into());
        }
        self.reset(rows, cols, end);
        debug!("{algorithm} search {start} -> {end} on {rows}x{cols} grid");
        Ok(SearchRun::new(self, pather, algorithm, start, end))
    }

    /// Invalidate every decoration and size the arena for `rows x cols`.
    fn reset(&mut self, rows: i32, cols: i32, goal: Coord) {
        let len = (rows.max(0) as usize) * (cols.max(0) as usize);
        self.rows = rows;
        self.cols = cols;
        self.goal = goal;
        if len > self.nodes.len() {
            self.nodes.clear();
            self.nodes.resize(len, ExplorationCell::default());
            self.generation = 0;
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale generations could collide with the new one.
            self.nodes.fill(ExplorationCell::default());
            self.generation = 1;
        }
    }

    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        in_bounds(c.row, c.col, self.rows, self.cols).then(|| c.index(self.cols))
    }

    /// The current run's decoration of `c`, if the run has touched it.
    pub fn exploration(&self, c: Coord) -> Option<&ExplorationCell> {
        let n = &self.nodes[self.idx(c)?];
        (n.generation == self.generation).then_some(n)
    }

    /// The current run's decoration of `c`, created on first access.
    /// `None` when `c` lies outside the arena.
    pub(crate) fn node_mut<P: AstarPather>(
        &mut self,
        c: Coord,
        pather: &P,
    ) -> Option<&mut ExplorationCell> {
        let i = self.idx(c)?;
        let generation = self.generation;
        let goal = self.goal;
        let n = &mut self.nodes[i];
        if n.generation != generation {
            *n = ExplorationCell {
                heuristic: pather.estimate(c, goal),
                generation,
                ..ExplorationCell::default()
            };
        }
        Some(n)
    }
}
