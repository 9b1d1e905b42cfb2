use route_planner::fixtures::{check_routes, load_cases, CheckConfig, USAGE};
use route_planner::graph::{load_map, Graph, RoadMap};
use route_planner::AStar;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = match CheckConfig::from_args(args.as_slice()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    if config.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let map: RoadMap<f64> = load_map(&config.map_path)?;
    let cases = load_cases(&config.cases_path)?;
    let finder = AStar::new().with_heuristic(config.heuristic);

    println!(
        "Checking {} cases on {} ({} intersections, {} roads) with {}",
        cases.len(),
        config.map_path,
        map.intersection_count(),
        map.road_count(),
        finder.name()
    );

    let report = check_routes(&finder, &map, &cases)?;

    for failure in &report.failures {
        println!("For start: {}", failure.case.start);
        println!("End:       {}", failure.case.end);
        println!("Got:       {:?}", failure.actual);
        println!("Expected:  {:?}", failure.case.expected);
    }

    if report.all_passed() {
        println!("All {} cases pass", report.total());
        Ok(())
    } else {
        println!("Passed {} / {} cases", report.passed, report.total());
        std::process::exit(1);
    }
}
