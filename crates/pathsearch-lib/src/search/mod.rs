//! Classical search strategies over a [`Graph`](crate::Graph).
//!
//! Six of the strategies share one traversal driver and differ only in the
//! frontier they use, when they test for the goal, and how they key queued
//! nodes:
//!
//! | Strategy | Frontier | Goal test | Key |
//! |---|---|---|---|
//! | [`breadth_first`] | FIFO | on generation | - |
//! | [`depth_first`] | LIFO | on generation | - |
//! | [`depth_limited`] / [`iterative_deepening`] | LIFO, depth bounded | on generation | - |
//! | [`uniform_cost`] | priority, decrease-key | on extraction | `g` |
//! | [`greedy_best_first`] | priority | on generation | `h` |
//! | [`a_star`] | priority, decrease-key | on extraction | `g + h` |
//!
//! [`hill_climbing`] is a local search with no frontier and reports a
//! predecessor map instead of an explored set.
//!
//! Every strategy returns a fresh [`SearchResult`]; an empty path means no
//! path was found and is never an error.

mod cost_aware;
mod driver;
mod hill_climb;
mod uninformed;

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::graph::NodeId;

pub use cost_aware::{a_star, greedy_best_first, uniform_cost};
pub use hill_climb::hill_climbing;
pub use uninformed::{breadth_first, depth_first, depth_limited, iterative_deepening};

/// Record of the nodes a search touched, used for reporting only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trace {
    /// Nodes removed from the frontier and expanded before termination.
    Explored(BTreeSet<NodeId>),
    /// Hill-climbing moves, keyed by the node moved into.
    Predecessors(BTreeMap<NodeId, NodeId>),
}

impl Default for Trace {
    fn default() -> Self {
        Trace::Explored(BTreeSet::new())
    }
}

/// Outcome of a single search invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub trace: Trace,
    /// Source to destination inclusive; empty when no path was found.
    pub path: Vec<NodeId>,
}

impl SearchResult {
    pub fn explored(explored: BTreeSet<NodeId>, path: Vec<NodeId>) -> Self {
        Self {
            trace: Trace::Explored(explored),
            path,
        }
    }

    /// A failed search that reports nothing explored.
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges in the path.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Every node the search reported touching, in ascending order.
    pub fn explored_nodes(&self) -> BTreeSet<NodeId> {
        match &self.trace {
            Trace::Explored(nodes) => nodes.clone(),
            Trace::Predecessors(moves) => moves.keys().copied().collect(),
        }
    }

    /// Hill-climbing predecessor map, if this result came from hill-climbing.
    pub fn predecessors(&self) -> Option<&BTreeMap<NodeId, NodeId>> {
        match &self.trace {
            Trace::Predecessors(moves) => Some(moves),
            Trace::Explored(_) => None,
        }
    }
}
