use crate::frontier::PriorityFrontier;
use crate::graph::{Cost, Graph, NodeId};
use crate::heuristic::Heuristic;

use super::driver::{traverse, GoalTest, Strategy};
use super::SearchResult;

struct UniformCost;

impl Strategy for UniformCost {
    type Frontier = PriorityFrontier;

    fn frontier(&self, _node_count: usize) -> PriorityFrontier {
        PriorityFrontier::new()
    }

    fn goal_test(&self) -> GoalTest {
        GoalTest::OnExtraction
    }

    fn relaxes(&self) -> bool {
        true
    }
}

struct GreedyBestFirst<'h> {
    heuristic: &'h Heuristic,
}

impl Strategy for GreedyBestFirst<'_> {
    type Frontier = PriorityFrontier;

    fn frontier(&self, _node_count: usize) -> PriorityFrontier {
        PriorityFrontier::new()
    }

    fn goal_test(&self) -> GoalTest {
        GoalTest::OnGeneration
    }

    fn key(&self, node: NodeId, _cost: Cost) -> Cost {
        self.heuristic.estimate(node)
    }
}

struct AStar<'h> {
    heuristic: &'h Heuristic,
}

impl Strategy for AStar<'_> {
    type Frontier = PriorityFrontier;

    fn frontier(&self, _node_count: usize) -> PriorityFrontier {
        PriorityFrontier::new()
    }

    fn goal_test(&self) -> GoalTest {
        GoalTest::OnExtraction
    }

    fn key(&self, node: NodeId, cost: Cost) -> Cost {
        cost.saturating_add(self.heuristic.estimate(node))
    }

    fn relaxes(&self) -> bool {
        true
    }
}

/// Run uniform-cost search, ordering the frontier by `(cost, node)`.
///
/// The destination is only accepted when it leaves the frontier, at which
/// point its cost is minimal. A strictly cheaper route to a queued node
/// replaces that node's entry.
pub fn uniform_cost(graph: &Graph, source: NodeId, destination: NodeId) -> SearchResult {
    let traversal = traverse(graph, source, destination, &UniformCost);
    SearchResult::explored(traversal.explored.to_sorted_set(), traversal.path)
}

/// Run greedy best-first search, ordering the frontier by `(h(node), node)`.
///
/// The goal is tested on generation. A node already queued is never
/// re-keyed, since its key depends on the node alone.
pub fn greedy_best_first(
    graph: &Graph,
    heuristic: &Heuristic,
    source: NodeId,
    destination: NodeId,
) -> SearchResult {
    let traversal = traverse(graph, source, destination, &GreedyBestFirst { heuristic });
    SearchResult::explored(traversal.explored.to_sorted_set(), traversal.path)
}

/// Run A* search, ordering the frontier by `(g + h(node), node)`.
///
/// The path is optimal when `heuristic` never overestimates; with an
/// inadmissible heuristic the result is still a valid path, just not
/// necessarily the cheapest.
pub fn a_star(
    graph: &Graph,
    heuristic: &Heuristic,
    source: NodeId,
    destination: NodeId,
) -> SearchResult {
    let traversal = traverse(graph, source, destination, &AStar { heuristic });
    SearchResult::explored(traversal.explored.to_sorted_set(), traversal.path)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::search::breadth_first;

    fn detour() -> Graph {
        Graph::from_edges(3, [(0, 1, 10), (0, 2, 1), (2, 1, 1)]).expect("valid")
    }

    #[test]
    fn uniform_cost_prefers_cheaper_detour() {
        let graph = detour();
        let result = uniform_cost(&graph, 0, 1);
        assert_eq!(result.path, vec![0, 2, 1]);
        assert_eq!(result.explored_nodes(), BTreeSet::from([0, 2]));
        assert_eq!(graph.path_cost(&result.path), Some(2));

        assert_eq!(breadth_first(&graph, 0, 1).path, vec![0, 1]);
    }

    #[test]
    fn a_star_replaces_queued_entry_on_cheaper_route() {
        let graph = Graph::from_edges(4, [(0, 1, 5), (0, 2, 1), (2, 1, 1), (1, 3, 1)])
            .expect("valid");
        let heuristic = Heuristic::new(vec![2, 1, 2, 0]);

        let result = a_star(&graph, &heuristic, 0, 3);
        assert_eq!(result.path, vec![0, 2, 1, 3]);
        assert_eq!(graph.path_cost(&result.path), Some(3));
        assert_eq!(result.explored_nodes(), BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn zero_heuristic_a_star_costs_match_uniform_cost() {
        let graph = detour();
        let ucs = uniform_cost(&graph, 0, 1);
        let astar = a_star(&graph, &Heuristic::zero(3), 0, 1);
        assert_eq!(graph.path_cost(&ucs.path), graph.path_cost(&astar.path));
    }

    #[test]
    fn greedy_follows_heuristic_even_when_longer() {
        let graph = Graph::from_edges(5, [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 4, 1), (4, 3, 1)])
            .expect("valid");
        let heuristic = Heuristic::new(vec![3, 5, 1, 0, 1]);

        let result = greedy_best_first(&graph, &heuristic, 0, 3);
        assert_eq!(result.path, vec![0, 2, 4, 3]);
        assert_eq!(result.explored_nodes(), BTreeSet::from([0, 2, 4]));
    }

    #[test]
    fn trivial_searches_return_the_source() {
        let graph = detour();
        let heuristic = Heuristic::zero(3);
        for result in [
            uniform_cost(&graph, 2, 2),
            greedy_best_first(&graph, &heuristic, 2, 2),
            a_star(&graph, &heuristic, 2, 2),
        ] {
            assert_eq!(result.path, vec![2]);
            assert!(result.explored_nodes().is_empty());
        }
    }

    #[test]
    fn unreachable_destination_explores_component() {
        let graph = detour();
        let result = uniform_cost(&graph, 1, 0);
        assert!(!result.is_found());
        assert_eq!(result.explored_nodes(), BTreeSet::from([1]));
    }
}
