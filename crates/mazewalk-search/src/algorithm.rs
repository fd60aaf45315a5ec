use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The five interchangeable search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Breadth-first search. Shortest by edge count, ignores weights.
    Bfs,
    /// Depth-first search. Finds a path, not a short one.
    Dfs,
    /// A* with the Manhattan heuristic. Weight-optimal.
    AStar,
    /// Greedy best-first on the heuristic alone. Fast, not optimal.
    GreedyBestFirst,
    /// Dijkstra. Weight-optimal.
    Dijkstra,
}

impl Algorithm {
    /// Every algorithm, in selector order.
    pub const ALL: [Algorithm; 5] = [
        Self::Bfs,
        Self::Dfs,
        Self::AStar,
        Self::GreedyBestFirst,
        Self::Dijkstra,
    ];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::AStar => "AStar",
            Self::GreedyBestFirst => "GreedyBestFirst",
            Self::Dijkstra => "Dijkstra",
        }
    }

    /// Algorithm at position `i` of [`ALL`](Self::ALL).
    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Whether the returned path is guaranteed to have minimum total weight.
    pub const fn is_weight_optimal(self) -> bool {
        matches!(self, Self::AStar | Self::Dijkstra)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search algorithm \u{201c}{0}\u{201d}")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Case-insensitive; accepts the display names plus `a*`, `astar`,
    /// `greedy` and `best-first`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "bfs" | "breadthfirst" => Ok(Self::Bfs),
            "dfs" | "depthfirst" => Ok(Self::Dfs),
            "astar" | "a*" => Ok(Self::AStar),
            "greedybestfirst" | "greedy" | "bestfirst" => Ok(Self::GreedyBestFirst),
            "dijkstra" => Ok(Self::Dijkstra),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for a in Algorithm::ALL {
            assert_eq!(a.to_string().parse::<Algorithm>(), Ok(a));
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("a*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("Greedy".parse::<Algorithm>(), Ok(Algorithm::GreedyBestFirst));
        assert_eq!("best-first".parse::<Algorithm>(), Ok(Algorithm::GreedyBestFirst));
        assert_eq!("DIJKSTRA".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert!("bellman-ford".parse::<Algorithm>().is_err());
    }

    #[test]
    fn selector_index() {
        assert_eq!(Algorithm::from_index(0), Some(Algorithm::Bfs));
        assert_eq!(Algorithm::from_index(2), Some(Algorithm::AStar));
        assert_eq!(Algorithm::from_index(4), Some(Algorithm::Dijkstra));
        assert_eq!(Algorithm::from_index(5), None);
    }
}
