//! Common fixture graphs for integration tests.

use pathsearch_lib::{Cost, Graph, Heuristic, NodeId};

/// Bidirectional chain `0 <-> 1 <-> … <-> n-1`, each edge costing 1.
#[allow(dead_code)]
pub fn chain(n: usize) -> Graph {
    let edges = (0..n.saturating_sub(1)).flat_map(|i| [(i, i + 1, 1), (i + 1, i, 1)]);
    Graph::from_edges(n, edges).expect("chain fixture is valid")
}

/// Exact remaining distance along [`chain`] to its last node.
#[allow(dead_code)]
pub fn chain_heuristic(n: usize) -> Heuristic {
    Heuristic::new((0..n as Cost).rev().collect())
}

/// Five nodes where node 2 has no edges in or out.
#[allow(dead_code)]
pub fn isolated_middle() -> Graph {
    let rows = vec![
        vec![0, 1, 0, 1, 0],
        vec![1, 0, 0, 1, 0],
        vec![0, 0, 0, 0, 0],
        vec![1, 1, 0, 0, 1],
        vec![0, 0, 0, 1, 0],
    ];
    Graph::from_matrix(rows).expect("isolated fixture is valid")
}

/// Weighted graph where the fewest-hop route is not the cheapest.
///
/// ```text
/// 0 -9-> 5
/// 0 -1-> 1 -1-> 2 -1-> 3 -1-> 5
/// 0 -2-> 4 -4-> 5
/// ```
#[allow(dead_code)]
pub fn weighted() -> Graph {
    Graph::from_edges(
        6,
        [
            (0, 5, 9),
            (0, 1, 1),
            (1, 2, 1),
            (2, 3, 1),
            (3, 5, 1),
            (0, 4, 2),
            (4, 5, 4),
        ],
    )
    .expect("weighted fixture is valid")
}

/// Admissible heuristic for [`weighted`] (true remaining cost to node 5).
#[allow(dead_code)]
pub fn weighted_heuristic() -> Heuristic {
    Heuristic::new(vec![4, 3, 2, 1, 4, 0])
}

/// Strongly connected `width × height` grid with uneven weights.
#[allow(dead_code)]
pub fn grid(width: usize, height: usize) -> Graph {
    let id = |x: usize, y: usize| -> NodeId { y * width + x };
    let mut edges = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let cost = ((x * 7 + y * 3) % 5 + 1) as Cost;
            if x + 1 < width {
                edges.push((id(x, y), id(x + 1, y), cost));
                edges.push((id(x + 1, y), id(x, y), cost));
            }
            if y + 1 < height {
                edges.push((id(x, y), id(x, y + 1), cost + 1));
                edges.push((id(x, y + 1), id(x, y), cost + 1));
            }
        }
    }
    Graph::from_edges(width * height, edges).expect("grid fixture is valid")
}
