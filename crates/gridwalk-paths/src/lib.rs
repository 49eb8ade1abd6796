//! Step-by-step graph search over a gridwalk [`Grid`](gridwalk_core::Grid).
//!
//! Every algorithm runs through one engine, parameterised by frontier policy
//! and by single or dual frontier mode:
//!
//! | [`Algorithm`] | Frontier | Weights |
//! |---|---|---|
//! | `Bfs`, `BidirectionalBfs` | FIFO queue | ignored |
//! | `Dfs` | LIFO stack | ignored |
//! | `Dijkstra`, `BidirectionalDijkstra` | min-heap on distance | summed |
//! | `AStar` | min-heap on distance + heuristic | summed |
//! | `GreedyBestFirst` | min-heap on heuristic | ignored |
//!
//! Priority ties are broken by [`Coord`](gridwalk_core::Coord) order and
//! neighbours are always expanded up, right, down, left, so two runs on the
//! same grid produce the same trace.
//!
//! [`Searcher`] owns the per-cell [`ExplorationCell`] decorations and reuses
//! them between runs. [`Searcher::run`] returns a lazy [`SearchRun`] that
//! yields one [`Visit`] per finalised cell and exposes the path when done.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | heuristic estimates |

mod algorithm;
mod config;
mod distance;
mod frontier;
pub mod neighbors;
mod pather;
mod search;
mod searcher;
mod traits;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use config::{DEFAULT_WEIGHT_COST, FrontierTurn, Heuristic, SearchConfig};
pub use distance::{euclidean, manhattan};
pub use neighbors::{horizontal_neighbors, neighbors, neighbors_with_stride, vertical_neighbors};
pub use pather::{GridPather, path_cost};
pub use search::{SearchOutcome, SearchResult, SearchRun, Visit};
pub use searcher::{ExplorationCell, Searcher, Side, UNREACHABLE};
pub use traits::{AstarPather, Pather, WeightedPather};
