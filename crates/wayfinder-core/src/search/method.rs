//! Search method selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Frontier ordering strategy of a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchMethod {
    /// FIFO frontier; shortest path by edge count.
    #[default]
    #[serde(
        rename = "breadth_first_search",
        alias = "BREADTH_FIRST_SEARCH",
        alias = "bfs"
    )]
    BreadthFirst,
    /// LIFO frontier; first path found, not necessarily shortest.
    #[serde(
        rename = "depth_first_search",
        alias = "DEPTH_FIRST_SEARCH",
        alias = "dfs"
    )]
    DepthFirst,
    /// Priority frontier on accumulated cost; minimum total cost.
    #[serde(
        rename = "uniform_cost_search",
        alias = "UNIFORM_COST_SEARCH",
        alias = "ucs"
    )]
    UniformCost,
    /// Priority frontier on accumulated cost plus goal heuristic.
    #[serde(rename = "a_star", alias = "A_STAR", alias = "astar")]
    AStar,
}

impl SearchMethod {
    /// All methods, in declaration order.
    pub const ALL: [SearchMethod; 4] = [
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::UniformCost,
        Self::AStar,
    ];

    /// Returns true if frontier order depends on value-based edge cost.
    #[must_use]
    pub fn is_cost_aware(&self) -> bool {
        matches!(self, Self::UniformCost | Self::AStar)
    }

    /// Returns true if the method returns a minimum-cost path under its own
    /// cost model (edge count for BFS).
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        !matches!(self, Self::DepthFirst)
    }

    /// Configuration name of the method.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth_first_search",
            Self::DepthFirst => "depth_first_search",
            Self::UniformCost => "uniform_cost_search",
            Self::AStar => "a_star",
        }
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breadth_first_search" | "bfs" => Ok(Self::BreadthFirst),
            "depth_first_search" | "dfs" => Ok(Self::DepthFirst),
            "uniform_cost_search" | "ucs" => Ok(Self::UniformCost),
            "a_star" | "astar" | "a*" => Ok(Self::AStar),
            other => Err(format!("unknown search method: {other}")),
        }
    }
}
