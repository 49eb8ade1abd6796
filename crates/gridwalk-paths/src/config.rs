//! Search configuration.

use gridwalk_core::Coord;

use crate::distance::{euclidean, manhattan};

/// Cost of entering a weighted cell, in multiples of a plain move.
pub const DEFAULT_WEIGHT_COST: i32 = 15;

/// Distance estimate used by A* and greedy best-first search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    #[default]
    Euclidean,
    Manhattan,
}

impl Heuristic {
    /// Estimated remaining cost from `from` to `to`. Admissible on a
    /// 4-connected grid whose moves cost at least 1.
    pub fn estimate(self, from: Coord, to: Coord) -> f64 {
        match self {
            Self::Euclidean => euclidean(from, to),
            Self::Manhattan => f64::from(manhattan(from, to)),
        }
    }
}

/// Which frontier a bidirectional search expands next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontierTurn {
    /// Start side, then end side, strictly in turn.
    #[default]
    Alternate,
    /// The side whose frontier holds fewer entries; the start side on ties.
    Smaller,
}

/// Parameters shared by every search run of a
/// [`Searcher`](crate::Searcher).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Cost of entering a weighted cell. Plain moves cost 1. Values below 1
    /// are clamped to 1.
    pub weight_cost: i32,
    pub heuristic: Heuristic,
    pub turn: FrontierTurn,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weight_cost: DEFAULT_WEIGHT_COST,
            heuristic: Heuristic::default(),
            turn: FrontierTurn::default(),
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig {
            weight_cost: 5,
            heuristic: Heuristic::Manhattan,
            turn: FrontierTurn::Smaller,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
