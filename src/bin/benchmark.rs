use std::time::{Duration, Instant};
use rand::Rng;
use route_planner::graph::generators::generate_random_geometric;
use route_planner::graph::{Graph, RoadMap};
use route_planner::{AStar, Heuristic};

// Function to benchmark a search over a batch of queries
fn benchmark_search(finder: &AStar, map: &RoadMap<f64>, queries: &[(usize, usize)]) -> Result<Duration, route_planner::Error> {
    println!("Running {} on {} queries...", finder.name(), queries.len());

    let start = Instant::now();
    let mut found = 0;
    for &(from, to) in queries {
        if finder.search(map, from, to)?.is_some() {
            found += 1;
        }
    }
    let duration = start.elapsed();

    println!("  - Found {} routes in {:?}", found, duration);
    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Define map sizes to test
    let map_sizes = vec![500, 1_000, 2_000, 5_000];
    let queries_per_map = 50;

    println!("=====================================================");
    println!("Benchmark: A* vs Dijkstra on random geometric road maps");
    println!("=====================================================");

    let astar = AStar::new();
    let dijkstra = AStar::new().with_heuristic(Heuristic::Zero);
    let mut rng = rand::thread_rng();
    let mut results = Vec::new();

    for &size in &map_sizes {
        // Keep average degree roughly constant as the map grows
        let radius = (8.0 / (std::f64::consts::PI * size as f64)).sqrt();
        println!("\nGenerating road map with {} intersections...", size);
        let map = generate_random_geometric(size, radius, &mut rng)?;
        println!("Map has {} intersections and {} roads", map.intersection_count(), map.road_count());

        let queries: Vec<(usize, usize)> = (0..queries_per_map)
            .map(|_| (rng.gen_range(0..size), rng.gen_range(0..size)))
            .collect();

        let astar_time = benchmark_search(&astar, &map, &queries)?;
        let dijkstra_time = benchmark_search(&dijkstra, &map, &queries)?;

        let speedup = dijkstra_time.as_secs_f64() / astar_time.as_secs_f64();
        println!("Speedup - A* vs Dijkstra: {:.2}x", speedup);
        results.push((size, astar_time, dijkstra_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<14} | {:<8}", "Nodes", "A* (ms)", "Dijkstra (ms)", "SpeedUp");
    println!("-----------------------------------------------------");

    for (size, astar_time, dijkstra_time) in &results {
        let speedup = dijkstra_time.as_secs_f64() / astar_time.as_secs_f64();
        println!("{:<10} | {:<12} | {:<14} | {:<8.2}",
                 size,
                 astar_time.as_millis(),
                 dijkstra_time.as_millis(),
                 speedup);
    }

    Ok(())
}
