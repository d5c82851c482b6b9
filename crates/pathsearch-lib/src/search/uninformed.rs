use crate::frontier::{FifoFrontier, LifoFrontier};
use crate::graph::{Graph, NodeId};

use super::driver::{traverse, GoalTest, Strategy};
use super::SearchResult;

struct BreadthFirst;

impl Strategy for BreadthFirst {
    type Frontier = FifoFrontier;

    fn frontier(&self, node_count: usize) -> FifoFrontier {
        FifoFrontier::new(node_count)
    }

    fn goal_test(&self) -> GoalTest {
        GoalTest::OnGeneration
    }
}

struct DepthFirst {
    max_depth: Option<usize>,
}

impl Strategy for DepthFirst {
    type Frontier = LifoFrontier;

    fn frontier(&self, node_count: usize) -> LifoFrontier {
        LifoFrontier::new(node_count)
    }

    fn goal_test(&self) -> GoalTest {
        GoalTest::OnGeneration
    }

    fn admits(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |limit| depth < limit)
    }

    fn reopens_shallower(&self) -> bool {
        self.max_depth.is_some()
    }
}

/// Run breadth-first search.
///
/// The destination is recognised when it is generated, so it never enters
/// the explored set. On a graph whose edges all cost 1 the path has the
/// fewest possible edges.
pub fn breadth_first(graph: &Graph, source: NodeId, destination: NodeId) -> SearchResult {
    let traversal = traverse(graph, source, destination, &BreadthFirst);
    SearchResult::explored(traversal.explored.to_sorted_set(), traversal.path)
}

/// Run depth-first search: breadth-first's structure over a LIFO frontier.
pub fn depth_first(graph: &Graph, source: NodeId, destination: NodeId) -> SearchResult {
    let traversal = traverse(graph, source, destination, &DepthFirst { max_depth: None });
    SearchResult::explored(traversal.explored.to_sorted_set(), traversal.path)
}

/// Run depth-first search that never queues a node `limit` or more edges
/// from the source. The destination itself may sit exactly `limit` edges away.
///
/// A node already explored or queued is queued again when reached over
/// fewer edges, so the destination is found whenever it lies within `limit`
/// edges. A negative limit always fails. A limit of zero succeeds only when
/// `source == destination`. A failed search reports nothing explored.
pub fn depth_limited(
    graph: &Graph,
    source: NodeId,
    destination: NodeId,
    limit: i64,
) -> SearchResult {
    let Ok(limit) = usize::try_from(limit) else {
        return SearchResult::not_found();
    };

    if limit == 0 {
        return if source == destination {
            SearchResult::explored(Default::default(), vec![source])
        } else {
            SearchResult::not_found()
        };
    }

    let strategy = DepthFirst {
        max_depth: Some(limit),
    };
    let traversal = traverse(graph, source, destination, &strategy);
    if traversal.is_found() {
        SearchResult::explored(traversal.explored.to_sorted_set(), traversal.path)
    } else {
        SearchResult::not_found()
    }
}

/// Run depth-limited search with limits `0, 1, …, node_count - 1` and return
/// the first success.
///
/// Each depth starts from scratch with fresh explored and frontier
/// bookkeeping; nothing is carried between iterations, which keeps memory
/// bounded by the current depth at the price of repeated work.
pub fn iterative_deepening(graph: &Graph, source: NodeId, destination: NodeId) -> SearchResult {
    for limit in 0..graph.node_count() {
        tracing::trace!(limit, "iterative deepening pass");
        let Ok(depth) = i64::try_from(limit) else {
            break;
        };
        let result = depth_limited(graph, source, destination, depth);
        if result.is_found() {
            return result;
        }
    }
    SearchResult::not_found()
}
