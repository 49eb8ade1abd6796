//! **gridwalk-core**: the shared data model of the gridwalk engine.
//!
//! This crate owns everything the search engine and the maze generator read:
//! coordinates, per-cell terrain, the [`Grid`] store with its start/end
//! markers, and the [`EditContext`] that a UI layer threads through edit
//! gestures.

pub mod cell;
pub mod edit;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, Terrain};
pub use edit::{Drag, EditContext, Tool};
pub use error::{GridError, InvalidState};
pub use geom::{Coord, coord_from_pointer, in_bounds};
pub use grid::Grid;
