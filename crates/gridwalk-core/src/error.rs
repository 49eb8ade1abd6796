//! Errors raised by the grid store and checked before a search starts.

use std::fmt;

use crate::geom::Coord;

/// Why a grid cannot be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidState {
    MissingStart,
    MissingEnd,
    StartEqualsEnd,
}

impl fmt::Display for InvalidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => write!(f, "start is not set"),
            Self::MissingEnd => write!(f, "end is not set"),
            Self::StartEqualsEnd => write!(f, "start and end coincide"),
        }
    }
}

/// Errors produced by [`Grid`](crate::Grid) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside the grid reached an accessor. Always a caller bug.
    OutOfBounds { coord: Coord, rows: i32, cols: i32 },
    /// The start/end markers do not describe a searchable grid.
    InvalidGridState(InvalidState),
    /// A text grid has lines of different widths.
    InconsistentWidth { line: usize },
    /// A text grid contains a character outside the glyph set.
    InvalidGlyph { ch: char, coord: Coord },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, rows, cols } => {
                write!(f, "coordinate {coord} outside {rows}x{cols} grid")
            }
            Self::InvalidGridState(s) => write!(f, "invalid grid state: {s}"),
            Self::InconsistentWidth { line } => {
                write!(f, "grid text: line {line} has a different width")
            }
            Self::InvalidGlyph { ch, coord } => {
                write!(f, "grid text: invalid glyph \u{201c}{ch}\u{201d} at {coord}")
            }
        }
    }
}

impl std::error::Error for GridError {}

impl From<InvalidState> for GridError {
    fn from(s: InvalidState) -> Self {
        Self::InvalidGridState(s)
    }
}
