use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Cost, NodeId};

/// Caller-supplied estimate of the remaining cost from each node to the goal.
///
/// No admissibility or consistency check is made; informed algorithms trust
/// these values as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Heuristic {
    values: Vec<Cost>,
}

impl Heuristic {
    pub fn new(values: Vec<Cost>) -> Self {
        Self { values }
    }

    /// The all-zero heuristic, under which A* behaves like uniform-cost search.
    pub fn zero(node_count: usize) -> Self {
        Self {
            values: vec![0; node_count],
        }
    }

    /// Estimate for `node`. Nodes beyond the supplied values estimate to zero.
    pub fn estimate(&self, node: NodeId) -> Cost {
        self.values.get(node).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[Cost] {
        &self.values
    }

    /// Reject a heuristic that does not have exactly one value per node.
    pub fn check_len(&self, node_count: usize) -> Result<()> {
        if self.values.len() == node_count {
            Ok(())
        } else {
            Err(Error::HeuristicLength {
                expected: node_count,
                found: self.values.len(),
            })
        }
    }
}

impl From<Vec<Cost>> for Heuristic {
    fn from(values: Vec<Cost>) -> Self {
        Self::new(values)
    }
}
