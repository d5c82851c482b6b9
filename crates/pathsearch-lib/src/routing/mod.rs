//! Request validation and algorithm dispatch.
//!
//! This module provides:
//! - [`SearchAlgorithm`] - The seven supported strategies
//! - [`SearchRequest`] - Endpoints, algorithm and optional heuristic/seed
//! - [`SearchPlan`] - Validated request plus its [`SearchResult`]
//! - [`plan_search`] - Main entry point: validate, then run
//!
//! # Strategy Pattern
//!
//! Each algorithm is wrapped in a [`SearchPlanner`] implementation chosen by
//! [`select_planner`], so `plan_search` only deals with validation and
//! reporting.
//!
//! # Example
//!
//! ```
//! use pathsearch_lib::{plan_search, Graph, SearchAlgorithm, SearchRequest};
//!
//! let graph = Graph::from_matrix(vec![vec![0, 1], vec![1, 0]])?;
//! let request = SearchRequest::new(0, 1, SearchAlgorithm::Bfs);
//! let plan = plan_search(&graph, &request)?;
//! assert_eq!(plan.result.path, vec![0, 1]);
//! # Ok::<(), pathsearch_lib::Error>(())
//! ```

mod planner;

pub use planner::{
    select_planner, AStarPlanner, BfsPlanner, DfsPlanner, GreedyPlanner, HillClimbPlanner,
    IdsPlanner, SearchPlanner, UcsPlanner,
};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Cost, Graph, NodeId};
use crate::heuristic::Heuristic;
use crate::search::SearchResult;

/// Supported search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SearchAlgorithm {
    /// Breadth-first search.
    #[default]
    Bfs,
    /// Depth-first search.
    Dfs,
    /// Uniform-cost search.
    Ucs,
    /// Iterative-deepening search.
    Ids,
    /// Greedy best-first search (heuristic guided).
    Gbfs,
    /// A* search (heuristic guided).
    AStar,
    /// First-choice hill-climbing (heuristic guided, randomised).
    HillClimbing,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 7] = [
        SearchAlgorithm::Bfs,
        SearchAlgorithm::Dfs,
        SearchAlgorithm::Ucs,
        SearchAlgorithm::Ids,
        SearchAlgorithm::Gbfs,
        SearchAlgorithm::AStar,
        SearchAlgorithm::HillClimbing,
    ];

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            SearchAlgorithm::Bfs => "bfs",
            SearchAlgorithm::Dfs => "dfs",
            SearchAlgorithm::Ucs => "ucs",
            SearchAlgorithm::Ids => "ids",
            SearchAlgorithm::Gbfs => "gbfs",
            SearchAlgorithm::AStar => "a-star",
            SearchAlgorithm::HillClimbing => "hill-climbing",
        }
    }

    /// Whether the algorithm consumes a per-node heuristic.
    pub fn requires_heuristic(self) -> bool {
        matches!(
            self,
            SearchAlgorithm::Gbfs | SearchAlgorithm::AStar | SearchAlgorithm::HillClimbing
        )
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        let algorithm = match normalized.as_str() {
            "bfs" => SearchAlgorithm::Bfs,
            "dfs" => SearchAlgorithm::Dfs,
            "ucs" => SearchAlgorithm::Ucs,
            "ids" => SearchAlgorithm::Ids,
            "gbfs" => SearchAlgorithm::Gbfs,
            "a-star" | "astar" | "a*" => SearchAlgorithm::AStar,
            "hill-climbing" | "hc" => SearchAlgorithm::HillClimbing,
            _ => {
                return Err(Error::UnknownAlgorithm {
                    name: value.to_string(),
                    suggestions: suggest_algorithms(&normalized),
                })
            }
        };
        Ok(algorithm)
    }
}

fn suggest_algorithms(name: &str) -> Vec<String> {
    let mut scored: Vec<(f64, &'static str)> = SearchAlgorithm::ALL
        .iter()
        .map(|algorithm| {
            let candidate = algorithm.as_str();
            (strsim::normalized_damerau_levenshtein(name, candidate), candidate)
        })
        .filter(|(score, _)| *score >= 0.3)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

/// High-level search request.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub source: NodeId,
    pub destination: NodeId,
    pub algorithm: SearchAlgorithm,
    /// Required by greedy best-first, A* and hill-climbing; ignored otherwise.
    pub heuristic: Option<Heuristic>,
    /// Seed for hill-climbing's neighbour shuffle. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl SearchRequest {
    pub fn new(source: NodeId, destination: NodeId, algorithm: SearchAlgorithm) -> Self {
        Self {
            source,
            destination,
            algorithm,
            heuristic: None,
            seed: None,
        }
    }

    /// Attach a heuristic to the request.
    pub fn with_heuristic(mut self, heuristic: impl Into<Heuristic>) -> Self {
        self.heuristic = Some(heuristic.into());
        self
    }

    /// Fix the hill-climbing shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the request against `graph` without running anything.
    pub fn validate(&self, graph: &Graph) -> Result<()> {
        graph.check_node(self.source)?;
        graph.check_node(self.destination)?;

        if self.algorithm.requires_heuristic() {
            let heuristic = self
                .heuristic
                .as_ref()
                .ok_or(Error::MissingHeuristic {
                    algorithm: self.algorithm,
                })?;
            heuristic.check_len(graph.node_count())?;
        }
        Ok(())
    }
}

/// Search outcome returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPlan {
    pub algorithm: SearchAlgorithm,
    pub source: NodeId,
    pub destination: NodeId,
    pub result: SearchResult,
    /// Total edge weight of the path; `None` when no path was found.
    pub cost: Option<Cost>,
}

impl SearchPlan {
    pub fn is_found(&self) -> bool {
        self.result.is_found()
    }

    /// Number of hops in the path.
    pub fn hop_count(&self) -> usize {
        self.result.hop_count()
    }
}

/// Validate `request` against `graph` and run the requested algorithm.
///
/// Malformed input is rejected before any search runs. A search that finds
/// no path succeeds with an empty path.
pub fn plan_search(graph: &Graph, request: &SearchRequest) -> Result<SearchPlan> {
    request.validate(graph)?;

    let planner = select_planner(request);
    tracing::debug!(
        algorithm = %planner.algorithm(),
        source = request.source,
        destination = request.destination,
        nodes = graph.node_count(),
        "running search"
    );

    let result = planner.search(
        graph,
        request.heuristic.as_ref(),
        request.source,
        request.destination,
    );
    let cost = graph.path_cost(&result.path);

    tracing::debug!(
        algorithm = %planner.algorithm(),
        found = result.is_found(),
        hops = result.hop_count(),
        explored = result.explored_nodes().len(),
        "search finished"
    );

    Ok(SearchPlan {
        algorithm: request.algorithm,
        source: request.source,
        destination: request.destination,
        result,
        cost,
    })
}
