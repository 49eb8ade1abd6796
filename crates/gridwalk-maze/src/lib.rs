//! Maze generation for gridwalk grids.
//!
//! Mazes are carved on the *coarse lattice*: the cells at even row and even
//! column. The odd rows and columns hold the walls between them, and carving
//! a passage between two lattice cells clears the wall cell in between.
//!
//! Two carving algorithms are provided, both producing a spanning tree of
//! the lattice:
//! - **Backtracker**: randomized depth-first carving that backs up along
//!   the `parent` chain when stuck.
//! - **Prim**: grows the maze from a frontier of candidate passages, drawing
//!   the next one uniformly at random.
//!
//! An optional [`braid`](MazeGen::braid) pass runs afterwards and opens
//! extra walls at dead ends, introducing cycles.

pub mod config;
pub mod error;
pub mod layout;
pub mod mapgen;

pub use config::{MazeAlgorithm, MazeConfig};
pub use error::MazeError;
pub use layout::MazeLayout;
pub use mapgen::{MazeCell, MazeGen};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generate a `rows x cols` maze with the default backtracker.
///
/// With `seed == None` a fresh seed is drawn and the result is not
/// reproducible.
pub fn generate(rows: i32, cols: i32, seed: Option<u64>) -> MazeLayout {
    generate_with(
        rows,
        cols,
        &MazeConfig {
            seed,
            ..MazeConfig::default()
        },
    )
}

/// Generate a maze as described by `config`.
pub fn generate_with(rows: i32, cols: i32, config: &MazeConfig) -> MazeLayout {
    let seed = config.seed.unwrap_or_else(rand::random);
    log::debug!(
        "generating {rows}x{cols} maze with {:?}, seed {seed}",
        config.algorithm
    );
    let mut mg = MazeGen::new(rows, cols, StdRng::seed_from_u64(seed));
    let mut layout = mg.carve(config.algorithm);
    if config.braid > 0.0 {
        mg.braid(&mut layout, config.braid);
    }
    layout
}
