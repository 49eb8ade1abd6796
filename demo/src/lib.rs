//! Shared pieces of the walkthrough binary: building the demo board and
//! drawing a finished search on top of it.

use gridwalk_core::{Coord, Grid, GridError};
use gridwalk_maze::{MazeConfig, generate_with};
use gridwalk_paths::{Algorithm, SearchResult, Searcher, path_cost};

pub const ROWS: i32 = 15;
pub const COLS: i32 = 31;

/// A maze-filled grid with the start in the top-left corner and the end in
/// the bottom-right lattice cell.
pub fn board(rows: i32, cols: i32, config: &MazeConfig) -> Result<Grid, GridError> {
    let layout = generate_with(rows, cols, config);
    let mut grid = Grid::new(rows, cols);
    grid.set_start(Coord::ZERO)?;
    grid.set_end(Coord::new((rows - 1) & !1, (cols - 1) & !1))?;
    layout.apply(&mut grid)?;
    log::debug!("demo board {rows}x{cols} ready");
    Ok(grid)
}

/// One line of the summary table.
#[derive(Debug, Clone)]
pub struct Summary {
    pub algorithm: Algorithm,
    pub visited: usize,
    pub path_len: Option<usize>,
    pub cost: Option<i32>,
}

/// Run `algorithm` to completion on `grid`'s markers.
pub fn run(
    searcher: &mut Searcher,
    grid: &Grid,
    algorithm: Algorithm,
) -> Result<(Summary, SearchResult), GridError> {
    let result = searcher.run_markers(grid, algorithm)?.finish();
    let summary = Summary {
        algorithm,
        visited: result.visited_order.len(),
        path_len: result.path.as_ref().map(Vec::len),
        cost: result
            .path
            .as_deref()
            .map(|p| path_cost(grid, p, searcher.config())),
    };
    Ok((summary, result))
}

/// Draw `grid` with visited cells as `o` and the path as `*`.
pub fn render(grid: &Grid, result: &SearchResult) -> String {
    let mut rows: Vec<Vec<char>> = grid
        .to_string()
        .lines()
        .map(|l| l.chars().collect())
        .collect();
    let mut mark = |c: Coord, ch: char| {
        if grid.is_start(c) || grid.is_end(c) {
            return;
        }
        if let Some(cell) = rows
            .get_mut(c.row as usize)
            .and_then(|r| r.get_mut(c.col as usize))
        {
            *cell = ch;
        }
    };
    for &c in &result.visited_order {
        mark(c, 'o');
    }
    for &c in result.path.iter().flatten() {
        mark(c, '*');
    }
    let mut out = String::new();
    for r in rows {
        out.extend(r);
        out.push('\n');
    }
    out
}
