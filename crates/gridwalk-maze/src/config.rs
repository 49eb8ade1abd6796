//! Maze generation settings.

/// Carving algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MazeAlgorithm {
    /// Randomized depth-first carving with backtracking.
    #[default]
    Backtracker,
    /// Randomized Prim: grow from a frontier of candidate passages.
    Prim,
}

/// Settings for [`generate_with`](crate::generate_with).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub algorithm: MazeAlgorithm,
    /// Probability (0.0–1.0) that each dead end gets an extra opening in
    /// the braiding pass. `0.0` skips the pass and keeps the maze a tree.
    pub braid: f64,
    /// RNG seed. `None` draws a fresh one.
    pub seed: Option<u64>,
}
