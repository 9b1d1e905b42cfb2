use std::fmt::Debug;
use num_traits::Float;

use crate::graph::Graph;
use crate::{Error, Result};

/// Straight-line distance between two intersections
///
/// Used both as the cost of a road and as the estimate of the remaining
/// distance to the goal.
pub fn distance_between_nodes<W, G>(graph: &G, a: usize, b: usize) -> Result<W>
where
    W: Float + Debug,
    G: Graph<W>,
{
    let pa = graph.position(a).ok_or(Error::InvalidIntersection(a))?;
    let pb = graph.position(b).ok_or(Error::InvalidIntersection(b))?;
    Ok(pa.distance(&pb))
}

/// Estimate of the remaining distance from an intersection to the goal
///
/// Both variants are admissible and consistent, so the first time an
/// intersection leaves the frontier its cost is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// Euclidean distance to the goal
    #[default]
    Euclidean,
    /// Always zero; the search degenerates into Dijkstra's algorithm
    Zero,
}

impl Heuristic {
    pub fn estimate<W, G>(&self, graph: &G, from: usize, goal: usize) -> Result<W>
    where
        W: Float + Debug,
        G: Graph<W>,
    {
        match self {
            Heuristic::Euclidean => distance_between_nodes(graph, from, goal),
            Heuristic::Zero => Ok(W::zero()),
        }
    }
}
