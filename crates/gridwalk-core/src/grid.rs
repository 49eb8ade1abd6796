//! The [`Grid`] store: a `rows x cols` array of [`Cell`]s plus the start and
//! end markers.
//!
//! The grid owns its cells in a flat row-major `Vec`. Searches and maze
//! generation only read it; edits come from the UI layer through the
//! mutation methods below or the gesture methods in [`edit`](crate::edit).

use std::fmt;

use log::warn;

use crate::cell::{Cell, Terrain};
use crate::error::{GridError, InvalidState};
use crate::geom::{Coord, in_bounds};

/// A rectangular grid of cells with start/end markers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
    start: Option<Coord>,
    end: Option<Coord>,
}

impl Grid {
    /// Create a grid of clear cells with no markers set.
    ///
    /// Negative dimensions are treated as zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let cells = (0..rows * cols)
            .map(|i| Cell::new(Coord::from_index(i as usize, cols)))
            .collect();
        Self {
            rows,
            cols,
            cells,
            start: None,
            end: None,
        }
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        in_bounds(c.row, c.col, self.rows, self.cols)
    }

    /// Fail with [`GridError::OutOfBounds`] unless `c` lies inside the grid.
    pub fn check(&self, c: Coord) -> Result<(), GridError> {
        if self.contains(c) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                coord: c,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// The cell at `c`, or `None` outside the grid.
    #[inline]
    pub fn cell(&self, c: Coord) -> Option<&Cell> {
        if !self.contains(c) {
            return None;
        }
        self.cells.get(c.index(self.cols))
    }

    /// The cell at `c`, or [`GridError::OutOfBounds`].
    pub fn get(&self, c: Coord) -> Result<&Cell, GridError> {
        self.check(c)?;
        Ok(&self.cells[c.index(self.cols)])
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    // -----------------------------------------------------------------------
    // Markers and classification
    // -----------------------------------------------------------------------

    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    #[inline]
    pub fn is_start(&self, c: Coord) -> bool {
        self.start == Some(c)
    }

    #[inline]
    pub fn is_end(&self, c: Coord) -> bool {
        self.end == Some(c)
    }

    /// Whether `c` is a wall that is not overridden by a start/end marker.
    pub fn is_only_wall(&self, c: Coord) -> bool {
        self.cell(c).is_some_and(Cell::is_wall) && !self.is_start(c) && !self.is_end(c)
    }

    /// Whether `c` is a weight that is not overridden by a start/end marker.
    pub fn is_only_weight(&self, c: Coord) -> bool {
        self.cell(c).is_some_and(Cell::is_weight) && !self.is_start(c) && !self.is_end(c)
    }

    /// Whether `c` is clear terrain and neither start nor end.
    pub fn is_clear(&self, c: Coord) -> bool {
        self.cell(c).is_some_and(|cell| cell.terrain == Terrain::Clear)
            && !self.is_start(c)
            && !self.is_end(c)
    }

    /// Both markers, validated for a search run.
    pub fn endpoints(&self) -> Result<(Coord, Coord), GridError> {
        let start = self.start.ok_or(InvalidState::MissingStart)?;
        let end = self.end.ok_or(InvalidState::MissingEnd)?;
        self.check(start)?;
        self.check(end)?;
        if start == end {
            return Err(InvalidState::StartEqualsEnd.into());
        }
        Ok((start, end))
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Make `c` a wall. Returns `false` (and changes nothing) when `c` holds
    /// a marker.
    pub fn set_wall(&mut self, c: Coord) -> Result<bool, GridError> {
        self.set_terrain(c, Terrain::Wall)
    }

    /// Make `c` a weight. Returns `false` (and changes nothing) when `c`
    /// holds a marker.
    pub fn set_weight(&mut self, c: Coord) -> Result<bool, GridError> {
        self.set_terrain(c, Terrain::Weight)
    }

    /// Clear any wall or weight at `c`. Returns whether anything changed.
    pub fn clear(&mut self, c: Coord) -> Result<bool, GridError> {
        self.check(c)?;
        let i = c.index(self.cols);
        let changed = self.cells[i].terrain != Terrain::Clear;
        self.cells[i].terrain = Terrain::Clear;
        Ok(changed)
    }

    fn set_terrain(&mut self, c: Coord, terrain: Terrain) -> Result<bool, GridError> {
        self.check(c)?;
        if self.is_start(c) || self.is_end(c) {
            warn!("refusing to place {terrain:?} on marker cell {c}");
            return Ok(false);
        }
        self.cells[c.index(self.cols)].terrain = terrain;
        Ok(true)
    }

    /// Move the start marker to `c`. Refused (returns `false`) when `c` is
    /// the end marker.
    pub fn set_start(&mut self, c: Coord) -> Result<bool, GridError> {
        self.check(c)?;
        if self.is_end(c) {
            warn!("refusing to move start onto end at {c}");
            return Ok(false);
        }
        self.start = Some(c);
        Ok(true)
    }

    /// Move the end marker to `c`. Refused (returns `false`) when `c` is the
    /// start marker.
    pub fn set_end(&mut self, c: Coord) -> Result<bool, GridError> {
        self.check(c)?;
        if self.is_start(c) {
            warn!("refusing to move end onto start at {c}");
            return Ok(false);
        }
        self.end = Some(c);
        Ok(true)
    }

    /// Remove both markers.
    pub fn unset_markers(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Turn every wall back into clear terrain.
    pub fn clear_walls(&mut self) {
        self.retain_terrain(|t| t != Terrain::Wall);
    }

    /// Turn every weight back into clear terrain.
    pub fn clear_weights(&mut self) {
        self.retain_terrain(|t| t != Terrain::Weight);
    }

    fn retain_terrain(&mut self, keep: impl Fn(Terrain) -> bool) {
        for cell in self.cells.iter_mut() {
            if !keep(cell.terrain) {
                cell.terrain = Terrain::Clear;
            }
        }
    }

    /// Set every cell to `terrain`, skipping the marker cells.
    pub fn fill(&mut self, terrain: Terrain) {
        let (start, end) = (self.start, self.end);
        for cell in self.cells.iter_mut() {
            if Some(cell.coord) != start && Some(cell.coord) != end {
                cell.terrain = terrain;
            }
        }
    }

    /// Replace the grid wholesale with a clear `rows x cols` grid.
    ///
    /// Markers that still fit are kept; the others are unset.
    pub fn resize(&mut self, rows: i32, cols: i32) {
        let mut next = Grid::new(rows, cols);
        next.start = self.start.filter(|&c| next.contains(c));
        next.end = self.end.filter(|&c| next.contains(c));
        *self = next;
    }

    // -----------------------------------------------------------------------
    // Text form
    // -----------------------------------------------------------------------

    /// Parse a grid from text, one line per row.
    ///
    /// Glyphs: `.` clear, `#` wall, `w` weight, `S` start, `E` end. Leading
    /// and trailing blank lines are ignored.
    pub fn parse(s: &str) -> Result<Grid, GridError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .skip_while(|l| l.is_empty())
            .collect();
        let lines: Vec<&str> = match lines.iter().rposition(|l| !l.is_empty()) {
            Some(last) => lines[..=last].to_vec(),
            None => Vec::new(),
        };

        let rows = lines.len() as i32;
        let cols = lines.first().map_or(0, |l| l.chars().count()) as i32;
        let mut grid = Grid::new(rows, cols);

        for (r, line) in lines.iter().enumerate() {
            if line.chars().count() as i32 != cols {
                return Err(GridError::InconsistentWidth { line: r });
            }
            for (c, ch) in line.chars().enumerate() {
                let coord = Coord::new(r as i32, c as i32);
                let i = coord.index(cols);
                match ch {
                    '.' => {}
                    '#' => grid.cells[i].terrain = Terrain::Wall,
                    'w' => grid.cells[i].terrain = Terrain::Weight,
                    'S' => grid.start = Some(coord),
                    'E' => grid.end = Some(coord),
                    _ => return Err(GridError::InvalidGlyph { ch, coord }),
                }
            }
        }
        Ok(grid)
    }

    fn glyph(&self, cell: &Cell) -> char {
        if self.is_start(cell.coord) {
            'S'
        } else if self.is_end(cell.coord) {
            'E'
        } else {
            match cell.terrain {
                Terrain::Clear => '.',
                Terrain::Wall => '#',
                Terrain::Weight => 'w',
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1) as usize) {
            let line: String = row.iter().map(|c| self.glyph(c)).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse("S.#\n.wE").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
