//! Search strategies behind the `SearchPlanner` trait.
//!
//! Each planner wraps one algorithm from [`crate::search`] so `plan_search`
//! can dispatch without knowing which inputs each algorithm consumes.

use std::borrow::Cow;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::graph::{Graph, NodeId};
use crate::heuristic::Heuristic;
use crate::search::{
    a_star, breadth_first, depth_first, greedy_best_first, hill_climbing, iterative_deepening,
    uniform_cost, SearchResult,
};

use super::{SearchAlgorithm, SearchRequest};

/// Trait for search strategies.
///
/// Implementations are stateless between calls (hill-climbing creates a
/// fresh RNG per search), so one planner can serve concurrent searches.
pub trait SearchPlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> SearchAlgorithm;

    /// Execute the search on the given graph.
    ///
    /// Informed planners treat a missing heuristic as all zeros; callers
    /// going through `plan_search` have already been validated.
    fn search(
        &self,
        graph: &Graph,
        heuristic: Option<&Heuristic>,
        source: NodeId,
        destination: NodeId,
    ) -> SearchResult;
}

fn heuristic_or_zero<'h>(graph: &Graph, heuristic: Option<&'h Heuristic>) -> Cow<'h, Heuristic> {
    match heuristic {
        Some(heuristic) => Cow::Borrowed(heuristic),
        None => Cow::Owned(Heuristic::zero(graph.node_count())),
    }
}

/// Breadth-first search planner.
#[derive(Debug, Clone, Default)]
pub struct BfsPlanner;

impl SearchPlanner for BfsPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::Bfs
    }

    fn search(
        &self,
        graph: &Graph,
        _heuristic: Option<&Heuristic>,
        source: NodeId,
        destination: NodeId,
    ) -> SearchResult {
        breadth_first(graph, source, destination)
    }
}

/// Depth-first search planner.
#[derive(Debug, Clone, Default)]
pub struct DfsPlanner;

impl SearchPlanner for DfsPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::Dfs
    }

    fn search(
        &self,
        graph: &Graph,
        _heuristic: Option<&Heuristic>,
        source: NodeId,
        destination: NodeId,
    ) -> SearchResult {
        depth_first(graph, source, destination)
    }
}

/// Uniform-cost search planner.
#[derive(Debug, Clone, Default)]
pub struct UcsPlanner;

impl SearchPlanner for UcsPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::Ucs
    }

    fn search(
        &self,
        graph: &Graph,
        _heuristic: Option<&Heuristic>,
        source: NodeId,
        destination: NodeId,
    ) -> SearchResult {
        uniform_cost(graph, source, destination)
    }
}

/// Iterative-deepening search planner.
#[derive(Debug, Clone, Default)]
pub struct IdsPlanner;

impl SearchPlanner for IdsPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::Ids
    }

    fn search(
        &self,
        graph: &Graph,
        _heuristic: Option<&Heuristic>,
        source: NodeId,
        destination: NodeId,
    ) -> SearchResult {
        iterative_deepening(graph, source, destination)
    }
}

/// Greedy best-first search planner.
#[derive(Debug, Clone, Default)]
pub struct GreedyPlanner;

impl SearchPlanner for GreedyPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::Gbfs
    }

    fn search(
        &self,
        graph: &Graph,
        heuristic: Option<&Heuristic>,
        source: NodeId,
        destination: NodeId,
    ) -> SearchResult {
        let heuristic = heuristic_or_zero(graph, heuristic);
        greedy_best_first(graph, &heuristic, source, destination)
    }
}

/// A* search planner.
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner;

impl SearchPlanner for AStarPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::AStar
    }

    fn search(
        &self,
        graph: &Graph,
        heuristic: Option<&Heuristic>,
        source: NodeId,
        destination: NodeId,
    ) -> SearchResult {
        let heuristic = heuristic_or_zero(graph, heuristic);
        a_star(graph, &heuristic, source, destination)
    }
}

/// Hill-climbing planner.
///
/// With a seed every search replays the same shuffles; without one each
/// search draws a fresh RNG from entropy.
#[derive(Debug, Clone, Default)]
pub struct HillClimbPlanner {
    seed: Option<u64>,
}

impl HillClimbPlanner {
    /// Create a planner whose shuffles are drawn from entropy.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Create a planner that reproduces the shuffles of `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl SearchPlanner for HillClimbPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::HillClimbing
    }

    fn search(
        &self,
        graph: &Graph,
        heuristic: Option<&Heuristic>,
        source: NodeId,
        destination: NodeId,
    ) -> SearchResult {
        let heuristic = heuristic_or_zero(graph, heuristic);
        let mut rng = self.rng();
        hill_climbing(graph, &heuristic, source, destination, &mut rng)
    }
}

/// Select the appropriate planner for a given request.
pub fn select_planner(request: &SearchRequest) -> Box<dyn SearchPlanner> {
    match request.algorithm {
        SearchAlgorithm::Bfs => Box::new(BfsPlanner),
        SearchAlgorithm::Dfs => Box::new(DfsPlanner),
        SearchAlgorithm::Ucs => Box::new(UcsPlanner),
        SearchAlgorithm::Ids => Box::new(IdsPlanner),
        SearchAlgorithm::Gbfs => Box::new(GreedyPlanner),
        SearchAlgorithm::AStar => Box::new(AStarPlanner),
        SearchAlgorithm::HillClimbing => Box::new(HillClimbPlanner { seed: request.seed }),
    }
}
