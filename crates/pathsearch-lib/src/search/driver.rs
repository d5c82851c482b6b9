//! Shared expand-and-check loop behind the frontier-based strategies.

use crate::frontier::{Frontier, FrontierEntry, NodeSet};
use crate::graph::{Cost, Graph, NodeId};

/// When a strategy compares nodes against the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GoalTest {
    /// As soon as the destination is generated as a neighbour. The
    /// destination is then neither explored nor queued.
    OnGeneration,
    /// Only once the destination is removed from the frontier, so its cost
    /// is final.
    OnExtraction,
}

/// Parameters that turn [`traverse`] into a concrete search strategy.
pub(crate) trait Strategy {
    type Frontier: Frontier;

    fn frontier(&self, node_count: usize) -> Self::Frontier;

    fn goal_test(&self) -> GoalTest;

    /// Priority key for `node` reached with accumulated cost `cost`.
    fn key(&self, _node: NodeId, cost: Cost) -> Cost {
        cost
    }

    /// Whether a cheaper route to a queued node replaces its frontier entry.
    fn relaxes(&self) -> bool {
        false
    }

    /// Whether a node `depth` edges from the source may be queued.
    fn admits(&self, _depth: usize) -> bool {
        true
    }

    /// Whether an explored or queued node reached over fewer edges than
    /// before is queued again at the shallower depth. Depth-bounded search
    /// needs this, otherwise a node first reached down a long branch cuts
    /// off the short route through it.
    fn reopens_shallower(&self) -> bool {
        false
    }
}

/// Raw outcome of [`traverse`] before it is packaged for callers.
#[derive(Debug)]
pub(crate) struct Traversal {
    pub(crate) explored: NodeSet,
    pub(crate) path: Vec<NodeId>,
}

impl Traversal {
    pub(crate) fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

pub(crate) fn traverse<S: Strategy>(
    graph: &Graph,
    source: NodeId,
    destination: NodeId,
    strategy: &S,
) -> Traversal {
    let node_count = graph.node_count();
    let mut explored = NodeSet::with_capacity(node_count);
    let goal_test = strategy.goal_test();

    // Extraction-time strategies reach this on their first pop.
    if source == destination && goal_test == GoalTest::OnGeneration {
        return Traversal {
            explored,
            path: vec![source],
        };
    }

    let mut parents: Vec<Option<NodeId>> = vec![None; node_count];
    let mut depths: Vec<usize> = vec![usize::MAX; node_count];
    if let Some(depth) = depths.get_mut(source) {
        *depth = 0;
    }
    let mut frontier = strategy.frontier(node_count);
    frontier.push(FrontierEntry::root(source, strategy.key(source, 0)));

    while let Some(current) = frontier.pop() {
        if goal_test == GoalTest::OnExtraction && current.node == destination {
            return Traversal {
                explored,
                path: reconstruct_path(&parents, destination),
            };
        }

        explored.insert(current.node);

        for edge in graph.neighbours(current.node) {
            let next = edge.target;
            let cost = current.cost.saturating_add(edge.cost);
            let child = FrontierEntry {
                node: next,
                cost,
                key: strategy.key(next, cost),
                depth: current.depth + 1,
            };

            if explored.contains(next) || frontier.contains(next) {
                let improved = if strategy.relaxes() {
                    frontier.decrease_key(child)
                } else if strategy.reopens_shallower()
                    && child.depth < depths[next]
                    && strategy.admits(child.depth)
                {
                    if !frontier.decrease_key(child) {
                        frontier.push(child);
                    }
                    true
                } else {
                    false
                };
                if improved {
                    parents[next] = Some(current.node);
                    depths[next] = child.depth;
                }
                continue;
            }

            if goal_test == GoalTest::OnGeneration && next == destination {
                parents[next] = Some(current.node);
                return Traversal {
                    explored,
                    path: reconstruct_path(&parents, destination),
                };
            }

            if !strategy.admits(child.depth) {
                continue;
            }

            parents[next] = Some(current.node);
            depths[next] = child.depth;
            frontier.push(child);
        }
    }

    Traversal {
        explored,
        path: Vec::new(),
    }
}

/// Walk parent links back from `goal`. Links point either at a node explored
/// earlier or at one recorded at a smaller depth, so the walk terminates.
fn reconstruct_path(parents: &[Option<NodeId>], goal: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        current = parents.get(node).copied().flatten();
    }
    path.reverse();
    path
}
