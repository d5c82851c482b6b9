//! pathsearch library entry points.
//!
//! This crate builds an immutable [`Graph`] from a weighted adjacency matrix
//! and runs one of seven classical search strategies over it, reporting both
//! the path found and the nodes examined along the way. Higher-level
//! consumers (the CLI, visualisers) should go through [`plan_search`] so
//! that malformed input is rejected before any algorithm runs.
//!
//! Graphs and heuristics are never mutated after construction, so any
//! number of searches may share them across threads.

#![deny(warnings)]

pub mod error;
pub mod frontier;
pub mod graph;
pub mod heuristic;
pub mod output;
pub mod problem;
pub mod routing;
pub mod search;

pub use error::{Error, Result};
pub use graph::{Cost, Edge, Graph, NodeId};
pub use heuristic::Heuristic;
pub use output::{PredecessorEdge, SearchSummary};
pub use problem::{load_problem, Problem};
pub use routing::{plan_search, SearchAlgorithm, SearchPlan, SearchPlanner, SearchRequest};
pub use search::{
    a_star, breadth_first, depth_first, depth_limited, greedy_best_first, hill_climbing,
    iterative_deepening, uniform_cost, SearchResult, Trace,
};
