//! Checking computed routes against known answers.

use std::fmt::Debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{info, warn};
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::algorithm::{AStar, Heuristic};
use crate::graph::Graph;
use crate::{Error, Result};

/// A query with its expected answer; `expected: null` means no route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteCase {
    pub start: usize,
    pub end: usize,
    pub expected: Option<Vec<usize>>,
}

/// A case whose computed route differs from the expected one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure {
    pub case: RouteCase,
    pub actual: Option<Vec<usize>>,
}

/// Outcome of running a set of cases
#[derive(Debug, Clone, Default)]
pub struct FixtureReport {
    pub passed: usize,
    pub failures: Vec<CaseFailure>,
}

impl FixtureReport {
    pub fn total(&self) -> usize {
        self.passed + self.failures.len()
    }

    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

pub const USAGE: &str = "Usage: route_check [map.json] [cases.json] [--dijkstra] [--help]";

/// Configuration for a fixture run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub map_path: String,
    pub cases_path: String,
    pub heuristic: Heuristic,
    pub help: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            map_path: "map.json".to_string(),
            cases_path: "cases.json".to_string(),
            heuristic: Heuristic::Euclidean,
            help: false,
        }
    }
}

impl CheckConfig {
    /// Parses command line arguments, excluding the program name
    ///
    /// Positional arguments fill in the map path, then the cases path.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let mut config = CheckConfig::default();
        let mut positional = Vec::new();

        for arg in args {
            match arg.as_ref() {
                "--dijkstra" => config.heuristic = Heuristic::Zero,
                "--help" | "-h" => config.help = true,
                other if other.starts_with('-') => {
                    return Err(Error::UnexpectedArgument(other.to_string()))
                }
                other => positional.push(other.to_string()),
            }
        }

        let mut positional = positional.into_iter();
        if let Some(map_path) = positional.next() {
            config.map_path = map_path;
        }
        if let Some(cases_path) = positional.next() {
            config.cases_path = cases_path;
        }
        if let Some(extra) = positional.next() {
            return Err(Error::UnexpectedArgument(extra));
        }
        Ok(config)
    }
}

/// Loads a JSON array of cases
pub fn load_cases<P: AsRef<Path>>(path: P) -> Result<Vec<RouteCase>> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Runs every case through `finder` and tallies the results
///
/// An id in a case that is not in the graph is an error, not a failure.
pub fn check_routes<W, G>(finder: &AStar, graph: &G, cases: &[RouteCase]) -> Result<FixtureReport>
where
    W: Float + Debug,
    G: Graph<W>,
{
    let mut report = FixtureReport::default();

    for case in cases {
        let actual = finder.find_path(graph, case.start, case.end)?;
        if actual == case.expected {
            report.passed += 1;
        } else {
            warn!(
                "Route {} -> {}: got {:?}, expected {:?}",
                case.start, case.end, actual, case.expected
            );
            report.failures.push(CaseFailure {
                case: case.clone(),
                actual,
            });
        }
    }

    info!(
        "{}: {} / {} cases pass",
        finder.name(),
        report.passed,
        report.total()
    );
    Ok(report)
}
