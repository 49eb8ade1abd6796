use std::fmt;
use std::str::FromStr;

/// The search algorithms the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
    GreedyBestFirst,
    BidirectionalBfs,
    BidirectionalDijkstra,
}

/// How a frontier orders its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Policy {
    Fifo,
    Lifo,
    /// Priority = distance.
    Distance,
    /// Priority = distance + heuristic.
    DistanceHeuristic,
    /// Priority = heuristic.
    Heuristic,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Self::Bfs,
        Self::Dfs,
        Self::Dijkstra,
        Self::AStar,
        Self::GreedyBestFirst,
        Self::BidirectionalBfs,
        Self::BidirectionalDijkstra,
    ];

    /// Whether two frontiers grow from start and end.
    pub fn is_bidirectional(self) -> bool {
        matches!(self, Self::BidirectionalBfs | Self::BidirectionalDijkstra)
    }

    /// Whether weighted cells cost more than plain ones.
    pub fn is_weighted(self) -> bool {
        matches!(
            self,
            Self::Dijkstra | Self::AStar | Self::BidirectionalDijkstra
        )
    }

    /// Whether the returned path is guaranteed shortest.
    pub fn is_optimal(self) -> bool {
        matches!(self, Self::Bfs | Self::Dijkstra | Self::AStar)
    }

    pub(crate) fn policy(self) -> Policy {
        match self {
            Self::Bfs | Self::BidirectionalBfs => Policy::Fifo,
            Self::Dfs => Policy::Lifo,
            Self::Dijkstra | Self::BidirectionalDijkstra => Policy::Distance,
            Self::AStar => Policy::DistanceHeuristic,
            Self::GreedyBestFirst => Policy::Heuristic,
        }
    }

    /// Short lowercase name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
            Self::GreedyBestFirst => "greedy",
            Self::BidirectionalBfs => "bibfs",
            Self::BidirectionalDijkstra => "bidijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
