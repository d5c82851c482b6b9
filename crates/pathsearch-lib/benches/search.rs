use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use pathsearch_lib::{plan_search, Cost, Graph, Heuristic, NodeId, SearchAlgorithm, SearchRequest};
use std::hint::black_box;

const WIDTH: usize = 40;
const HEIGHT: usize = 40;
const GOAL: NodeId = WIDTH * HEIGHT - 1;

fn grid() -> Graph {
    let id = |x: usize, y: usize| y * WIDTH + x;
    let mut edges = Vec::new();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let cost = ((x * 7 + y * 3) % 5 + 1) as Cost;
            if x + 1 < WIDTH {
                edges.push((id(x, y), id(x + 1, y), cost));
                edges.push((id(x + 1, y), id(x, y), cost));
            }
            if y + 1 < HEIGHT {
                edges.push((id(x, y), id(x, y + 1), cost));
                edges.push((id(x, y + 1), id(x, y), cost));
            }
        }
    }
    Graph::from_edges(WIDTH * HEIGHT, edges).expect("grid is valid")
}

/// Manhattan distance to the far corner; admissible since every edge costs at least 1.
fn manhattan() -> Heuristic {
    Heuristic::new(
        (0..WIDTH * HEIGHT)
            .map(|node| ((WIDTH - 1 - node % WIDTH) + (HEIGHT - 1 - node / WIDTH)) as Cost)
            .collect(),
    )
}

static GRID: Lazy<Graph> = Lazy::new(grid);
static MANHATTAN: Lazy<Heuristic> = Lazy::new(manhattan);

fn request(algorithm: SearchAlgorithm) -> SearchRequest {
    SearchRequest::new(0, GOAL, algorithm)
        .with_heuristic(MANHATTAN.clone())
        .with_seed(7)
}

fn benchmark_search(c: &mut Criterion) {
    let graph = &*GRID;

    for algorithm in [
        SearchAlgorithm::Bfs,
        SearchAlgorithm::Dfs,
        SearchAlgorithm::Ucs,
        SearchAlgorithm::Gbfs,
        SearchAlgorithm::AStar,
        SearchAlgorithm::HillClimbing,
    ] {
        let request = request(algorithm);
        c.bench_function(&format!("{algorithm}_grid_40x40"), |b| {
            b.iter(|| {
                let plan = plan_search(graph, &request).expect("request is valid");
                black_box(plan.hop_count())
            });
        });
    }

    // Each deepening pass repeats the previous one.
    let small = Graph::from_edges(
        64,
        (0..63).flat_map(|i| [(i, i + 1, 1), (i + 1, i, 1)]),
    )
    .expect("chain is valid");
    let ids = SearchRequest::new(0, 63, SearchAlgorithm::Ids);
    c.bench_function("ids_chain_64", |b| {
        b.iter(|| {
            let plan = plan_search(&small, &ids).expect("request is valid");
            black_box(plan.hop_count())
        });
    });
}

criterion_group!(benches, benchmark_search);
criterion_main!(benches);
