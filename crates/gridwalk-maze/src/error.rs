use std::fmt;

/// A maze that violates the spanning-tree invariant.
///
/// Carving cannot produce these; seeing one means the generator is broken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Not every lattice cell can be reached from the top-left one.
    Disconnected { reached: usize, expected: usize },
    /// The passage graph has more edges than a tree on its nodes.
    Cycle { edges: usize, nodes: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected { reached, expected } => {
                write!(f, "maze is disconnected: reached {reached} of {expected} cells")
            }
            Self::Cycle { edges, nodes } => {
                write!(f, "maze has a cycle: {edges} passages between {nodes} cells")
            }
        }
    }
}

impl std::error::Error for MazeError {}
