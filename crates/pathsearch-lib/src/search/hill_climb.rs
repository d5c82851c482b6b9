use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::graph::{Graph, NodeId};
use crate::heuristic::Heuristic;

use super::{SearchResult, Trace};

/// Run first-choice hill-climbing from `source`.
///
/// At each step the neighbours reachable over positive-cost edges are
/// shuffled with `rng` and the first one whose heuristic value is strictly
/// lower than the current node's is taken. The search fails at a dead end or
/// a local optimum; there is no backtracking, sideways move or restart.
///
/// The shuffle only decides which improving neighbour wins when several
/// exist. A seeded `rng` reproduces the same choices.
pub fn hill_climbing<R>(
    graph: &Graph,
    heuristic: &Heuristic,
    source: NodeId,
    destination: NodeId,
    rng: &mut R,
) -> SearchResult
where
    R: Rng + ?Sized,
{
    let mut moves: BTreeMap<NodeId, NodeId> = BTreeMap::new();
    let mut path = vec![source];
    let mut current = source;
    let mut candidates: Vec<NodeId> = Vec::new();

    while current != destination {
        candidates.clear();
        candidates.extend(graph.neighbours(current).iter().map(|edge| edge.target));
        if candidates.is_empty() {
            tracing::trace!(node = current, "hill climbing reached a dead end");
            return failed(moves);
        }

        candidates.shuffle(rng);

        let current_estimate = heuristic.estimate(current);
        let Some(&next) = candidates
            .iter()
            .find(|&&candidate| heuristic.estimate(candidate) < current_estimate)
        else {
            tracing::trace!(node = current, "hill climbing stuck at local optimum");
            return failed(moves);
        };

        moves.insert(next, current);
        path.push(next);
        current = next;
    }

    SearchResult {
        trace: Trace::Predecessors(moves),
        path,
    }
}

fn failed(moves: BTreeMap<NodeId, NodeId>) -> SearchResult {
    SearchResult {
        trace: Trace::Predecessors(moves),
        path: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn descends_to_destination() {
        let graph = Graph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1), (1, 0, 1)])
            .expect("valid");
        let heuristic = Heuristic::new(vec![3, 2, 1, 0]);
        let mut rng = StdRng::seed_from_u64(7);

        let result = hill_climbing(&graph, &heuristic, 0, 3, &mut rng);
        assert_eq!(result.path, vec![0, 1, 2, 3]);
        assert_eq!(
            result.predecessors(),
            Some(&BTreeMap::from([(1, 0), (2, 1), (3, 2)]))
        );
    }

    #[test]
    fn local_optimum_keeps_moves_so_far() {
        // 1 is a local minimum that does not lead to 3.
        let graph = Graph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1)]).expect("valid");
        let heuristic = Heuristic::new(vec![5, 1, 2, 0]);
        let mut rng = StdRng::seed_from_u64(1);

        let result = hill_climbing(&graph, &heuristic, 0, 3, &mut rng);
        assert!(!result.is_found());
        assert_eq!(result.predecessors(), Some(&BTreeMap::from([(1, 0)])));
    }

    #[test]
    fn dead_end_fails() {
        let graph = Graph::from_edges(3, [(0, 1, 1)]).expect("valid");
        let heuristic = Heuristic::new(vec![2, 1, 0]);
        let mut rng = StdRng::seed_from_u64(3);

        let result = hill_climbing(&graph, &heuristic, 0, 2, &mut rng);
        assert!(!result.is_found());
        assert_eq!(result.explored_nodes().len(), 1);
    }

    #[test]
    fn same_seed_reproduces_choice_among_improving_neighbours() {
        let graph = Graph::from_edges(
            5,
            [(0, 1, 1), (0, 2, 1), (0, 3, 1), (1, 4, 1), (2, 4, 1), (3, 4, 1)],
        )
        .expect("valid");
        let heuristic = Heuristic::new(vec![2, 1, 1, 1, 0]);

        let first = hill_climbing(&graph, &heuristic, 0, 4, &mut StdRng::seed_from_u64(42));
        let second = hill_climbing(&graph, &heuristic, 0, 4, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
        assert_eq!(first.path.len(), 3);
        assert!(first.path.windows(2).all(|pair| {
            heuristic.estimate(pair[1]) < heuristic.estimate(pair[0])
        }));
    }

    #[test]
    fn source_equal_to_destination_does_not_move() {
        let graph = Graph::from_edges(2, [(0, 1, 1)]).expect("valid");
        let heuristic = Heuristic::new(vec![1, 0]);
        let result = hill_climbing(&graph, &heuristic, 1, 1, &mut StdRng::seed_from_u64(0));
        assert_eq!(result.path, vec![1]);
        assert_eq!(result.predecessors(), Some(&BTreeMap::new()));
    }
}
