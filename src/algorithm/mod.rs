pub mod heuristic;
pub mod astar;

pub use astar::{AStar, Candidate, Route};
pub use heuristic::{distance_between_nodes, Heuristic};
