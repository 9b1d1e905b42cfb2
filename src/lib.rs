//! Route Planner - A* shortest routes on road networks
//!
//! Intersections are points in the plane and roads are undirected straight
//! segments between them. Given a start and a goal intersection, the planner
//! returns the shortest sequence of intersections connecting them, using A*
//! with the straight-line distance to the goal as heuristic.

pub mod algorithm;
pub mod data_structures;
pub mod fixtures;
pub mod graph;

pub use algorithm::{astar::find_path, AStar, Heuristic, Route};
/// Re-export main types for convenient use
pub use graph::{Graph, Point, RoadMap};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid intersection ID: {0}")]
    InvalidIntersection(usize),

    #[error("Invalid road: from {0} to {1}")]
    InvalidRoad(usize, usize),

    #[error("Non-finite coordinate for intersection {0}")]
    InvalidCoordinate(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
