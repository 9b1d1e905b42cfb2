use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use route_planner::graph::generators::{generate_grid, generate_random_geometric};
use route_planner::{AStar, Heuristic};

fn bench_grid(c: &mut Criterion) {
    let map = generate_grid(60, 60, 1.0).unwrap();
    let astar = AStar::new();
    let dijkstra = AStar::new().with_heuristic(Heuristic::Zero);

    c.bench_function("grid 60x60 corner to corner (A*)", |b| {
        b.iter(|| astar.search(&map, black_box(0), black_box(3599)).unwrap())
    });
    c.bench_function("grid 60x60 corner to corner (Dijkstra)", |b| {
        b.iter(|| dijkstra.search(&map, black_box(0), black_box(3599)).unwrap())
    });
}

fn bench_random_geometric(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let map = generate_random_geometric(2_000, 0.04, &mut rng).unwrap();
    let astar = AStar::new();

    c.bench_function("random geometric 2000 (A*)", |b| {
        b.iter(|| astar.search(&map, black_box(0), black_box(1_999)).unwrap())
    });
}

criterion_group!(benches, bench_grid, bench_random_geometric);
criterion_main!(benches);
