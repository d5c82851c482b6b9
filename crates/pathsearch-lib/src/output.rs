use std::fmt::Write;

use serde::Serialize;

use crate::graph::{Cost, NodeId};
use crate::routing::{SearchAlgorithm, SearchPlan};

/// Move taken by hill-climbing, `from -> to`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PredecessorEdge {
    pub from: NodeId,
    pub to: NodeId,
}

/// Structured representation of a search that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchSummary {
    pub algorithm: SearchAlgorithm,
    pub source: NodeId,
    pub destination: NodeId,
    pub found: bool,
    pub hops: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    pub path: Vec<NodeId>,
    pub explored: Vec<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessors: Option<Vec<PredecessorEdge>>,
}

impl SearchSummary {
    /// Flatten a [`SearchPlan`] into a summary.
    pub fn from_plan(plan: &SearchPlan) -> Self {
        let predecessors = plan.result.predecessors().map(|moves| {
            moves
                .iter()
                .map(|(&to, &from)| PredecessorEdge { from, to })
                .collect()
        });

        Self {
            algorithm: plan.algorithm,
            source: plan.source,
            destination: plan.destination,
            found: plan.is_found(),
            hops: plan.hop_count(),
            cost: plan.cost,
            path: plan.result.path.clone(),
            explored: plan.result.explored_nodes().into_iter().collect(),
            predecessors,
        }
    }

    /// Render the summary as plain text.
    pub fn render_plain_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Search from {} to {} (algorithm: {}):",
            self.source, self.destination, self.algorithm
        );

        if self.found {
            let _ = writeln!(buffer, "  path: {}", join_nodes(&self.path, " -> "));
            let _ = writeln!(
                buffer,
                "  hops: {}, cost: {}",
                self.hops,
                self.cost.map_or_else(|| "-".to_string(), |c| c.to_string())
            );
        } else {
            let _ = writeln!(buffer, "  no path found");
        }

        match &self.predecessors {
            Some(moves) if !moves.is_empty() => {
                let rendered: Vec<String> = moves
                    .iter()
                    .map(|edge| format!("{}->{}", edge.from, edge.to))
                    .collect();
                let _ = writeln!(buffer, "  moves: {}", rendered.join(", "));
            }
            Some(_) => {
                let _ = writeln!(buffer, "  moves: none");
            }
            None => {
                let _ = writeln!(
                    buffer,
                    "  explored ({}): {}",
                    self.explored.len(),
                    join_nodes(&self.explored, ", ")
                );
            }
        }

        buffer
    }
}

fn join_nodes(nodes: &[NodeId], separator: &str) -> String {
    nodes
        .iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
