use std::sync::Arc;

use serde::Serialize;

use crate::error::{Error, Result};

/// Dense node identifier in `0..node_count`.
pub type NodeId = usize;

/// Non-negative edge weight and accumulated path cost.
pub type Cost = u64;

/// Directed, positively weighted edge within the search graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub target: NodeId,
    pub cost: Cost,
}

/// Immutable graph queried by the search algorithms.
///
/// Only traversable edges (cost > 0) are stored. Each node's neighbours are
/// kept in ascending target order, which is the order an adjacency-matrix row
/// enumerates them and therefore the order every algorithm generates them.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<Vec<Vec<Edge>>>,
}

impl Graph {
    /// Build a graph from an `n × n` adjacency matrix where `0` means "no edge".
    pub fn from_matrix(rows: Vec<Vec<Cost>>) -> Result<Self> {
        let expected = rows.len();
        let mut adjacency = Vec::with_capacity(expected);

        for (row, costs) in rows.into_iter().enumerate() {
            if costs.len() != expected {
                return Err(Error::MatrixNotSquare {
                    row,
                    expected,
                    found: costs.len(),
                });
            }
            let edges = costs
                .into_iter()
                .enumerate()
                .filter(|(_, cost)| *cost > 0)
                .map(|(target, cost)| Edge { target, cost })
                .collect();
            adjacency.push(edges);
        }

        Ok(Self {
            adjacency: Arc::new(adjacency),
        })
    }

    /// Build a graph from an explicit list of `(from, to, cost)` edges.
    ///
    /// Zero-cost edges are ignored. A repeated `(from, to)` pair keeps the
    /// last cost supplied, matching what writing into a matrix cell would do.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId, Cost)>,
    {
        let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); node_count];

        for (from, to, cost) in edges {
            for node in [from, to] {
                if node >= node_count {
                    return Err(Error::NodeOutOfRange { node, node_count });
                }
            }
            if cost == 0 {
                continue;
            }
            let row = &mut adjacency[from];
            match row.binary_search_by_key(&to, |edge| edge.target) {
                Ok(index) => row[index].cost = cost,
                Err(index) => row.insert(index, Edge { target: to, cost }),
            }
        }

        Ok(Self {
            adjacency: Arc::new(adjacency),
        })
    }

    /// Number of nodes, fixed at construction.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of traversable edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Whether `node` is a valid identifier for this graph.
    pub fn contains(&self, node: NodeId) -> bool {
        node < self.node_count()
    }

    /// Return the outgoing edges for a given node.
    pub fn neighbours(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weight of the edge `from -> to`, if one exists.
    pub fn edge_cost(&self, from: NodeId, to: NodeId) -> Option<Cost> {
        let row = self.neighbours(from);
        row.binary_search_by_key(&to, |edge| edge.target)
            .ok()
            .map(|index| row[index].cost)
    }

    /// Total weight of a path, or `None` when a consecutive pair has no edge.
    ///
    /// An empty path has no cost; a single-node path costs zero.
    pub fn path_cost(&self, path: &[NodeId]) -> Option<Cost> {
        if path.is_empty() {
            return None;
        }
        path.windows(2).try_fold(0, |total: Cost, pair| {
            self.edge_cost(pair[0], pair[1])
                .map(|cost| total.saturating_add(cost))
        })
    }

    /// Reject `node` when it is not part of the graph.
    pub fn check_node(&self, node: NodeId) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(Error::NodeOutOfRange {
                node,
                node_count: self.node_count(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_entries_are_not_edges() {
        let graph = Graph::from_matrix(vec![vec![0, 3, 0], vec![0, 0, 0], vec![1, 0, 2]])
            .expect("square matrix");

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbours(0), &[Edge { target: 1, cost: 3 }]);
        assert!(graph.neighbours(1).is_empty());
        assert_eq!(graph.edge_cost(2, 2), Some(2));
        assert_eq!(graph.edge_cost(1, 0), None);
    }

    #[test]
    fn ragged_matrix_is_rejected() {
        let error = Graph::from_matrix(vec![vec![0, 1], vec![1]]).expect_err("ragged");
        assert!(matches!(
            error,
            Error::MatrixNotSquare {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn from_edges_sorts_targets_and_rejects_unknown_nodes() {
        let graph = Graph::from_edges(3, [(0, 2, 5), (0, 1, 1), (1, 0, 0)]).expect("valid");
        let targets: Vec<_> = graph.neighbours(0).iter().map(|e| e.target).collect();
        assert_eq!(targets, vec![1, 2]);
        assert!(graph.neighbours(1).is_empty());

        let error = Graph::from_edges(2, [(0, 4, 1)]).expect_err("out of range");
        assert!(matches!(
            error,
            Error::NodeOutOfRange {
                node: 4,
                node_count: 2
            }
        ));
    }

    #[test]
    fn path_cost_sums_hops() {
        let graph = Graph::from_edges(3, [(0, 1, 2), (1, 2, 5)]).expect("valid");
        assert_eq!(graph.path_cost(&[0, 1, 2]), Some(7));
        assert_eq!(graph.path_cost(&[2]), Some(0));
        assert_eq!(graph.path_cost(&[0, 2]), None);
        assert_eq!(graph.path_cost(&[]), None);
    }

    #[test]
    fn unknown_node_has_no_neighbours() {
        let graph = Graph::default();
        assert!(graph.neighbours(7).is_empty());
        assert!(graph.check_node(0).is_err());
    }
}
