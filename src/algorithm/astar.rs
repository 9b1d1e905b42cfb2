use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt::Debug;

use log::{debug, trace};
use num_traits::Float;
use ordered_float::OrderedFloat;

use crate::algorithm::heuristic::{distance_between_nodes, Heuristic};
use crate::data_structures::MinHeap;
use crate::graph::Graph;
use crate::{Error, Result};

/// A frontier entry: a partial route from the start plus its costs
///
/// Candidates are ordered by estimated total cost, then by cost so far, then
/// by their path compared id by id. The last key only matters for routes of
/// equal length and makes the winner among them the lexicographically
/// smallest path.
#[derive(Debug, Clone)]
pub struct Candidate<W> {
    estimate: OrderedFloat<W>,
    cost: OrderedFloat<W>,
    path: Vec<usize>,
}

impl<W: Float> Candidate<W> {
    /// A route consisting of `start` alone
    ///
    /// Paths only grow through [`Candidate::extend`], so they are never empty.
    pub fn new(estimate: W, cost: W, start: usize) -> Self {
        Candidate {
            estimate: OrderedFloat(estimate),
            cost: OrderedFloat(cost),
            path: vec![start],
        }
    }

    /// Cost so far plus the heuristic estimate to the goal
    pub fn estimate(&self) -> W {
        self.estimate.into_inner()
    }

    /// Length of the path so far
    pub fn cost(&self) -> W {
        self.cost.into_inner()
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// The intersection this candidate ends at
    pub fn current(&self) -> usize {
        self.path[self.path.len() - 1]
    }

    /// A new candidate continuing this path to `next`
    pub fn extend(&self, next: usize, estimate: W, cost: W) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next);
        Candidate {
            estimate: OrderedFloat(estimate),
            cost: OrderedFloat(cost),
            path,
        }
    }

    fn into_route(self) -> Route<W> {
        Route {
            length: self.cost(),
            intersections: self.path,
        }
    }
}

impl<W: Float> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.estimate
            .cmp(&other.estimate)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| self.path.cmp(&other.path))
    }
}

impl<W: Float> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Float> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Float> Eq for Candidate<W> {}

/// A shortest route between two intersections
#[derive(Debug, Clone, PartialEq)]
pub struct Route<W> {
    /// Intersections from start to end, inclusive
    pub intersections: Vec<usize>,

    /// Total length of the roads travelled
    pub length: W,
}

/// A* search over a road network
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar {
    heuristic: Heuristic,
}

impl AStar {
    /// Creates a search using the Euclidean heuristic
    pub fn new() -> Self {
        AStar::default()
    }

    /// Sets the goal-distance estimate used to order the frontier
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Get the name of the algorithm
    pub fn name(&self) -> &'static str {
        match self.heuristic {
            Heuristic::Euclidean => "A*",
            Heuristic::Zero => "Dijkstra",
        }
    }

    /// Computes the shortest route from `start` to `end`
    ///
    /// Returns `Ok(None)` when `end` cannot be reached from `start`, and
    /// `Error::InvalidIntersection` if either id is not in the graph.
    pub fn search<W, G>(&self, graph: &G, start: usize, end: usize) -> Result<Option<Route<W>>>
    where
        W: Float + Debug,
        G: Graph<W>,
    {
        if !graph.has_intersection(start) {
            return Err(Error::InvalidIntersection(start));
        }
        if !graph.has_intersection(end) {
            return Err(Error::InvalidIntersection(end));
        }

        debug!("{} search from {} to {}", self.name(), start, end);

        let mut visited = HashSet::new();
        let mut frontier = MinHeap::new();

        let cost = distance_between_nodes(graph, start, start)?;
        let estimate = cost + self.heuristic.estimate(graph, start, end)?;
        frontier.push(Candidate::new(estimate, cost, start));

        let mut expanded = 0usize;

        while let Some(candidate) = frontier.pop() {
            let current = candidate.current();

            // Already settled through a cheaper entry
            if !visited.insert(current) {
                trace!("Skipping stale entry for {}", current);
                continue;
            }

            if current == end {
                let route = candidate.into_route();
                debug!(
                    "Found route of length {:?} ({} intersections) after {} expansions",
                    route.length,
                    route.intersections.len(),
                    expanded
                );
                return Ok(Some(route));
            }

            expanded += 1;

            for neighbor in graph.neighbors(current) {
                if visited.contains(&neighbor) {
                    continue;
                }

                let cost = candidate.cost() + distance_between_nodes(graph, current, neighbor)?;
                let estimate = cost + self.heuristic.estimate(graph, neighbor, end)?;
                frontier.push(candidate.extend(neighbor, estimate, cost));
            }
        }

        debug!(
            "No route from {} to {} ({} intersections settled)",
            start,
            end,
            visited.len()
        );
        Ok(None)
    }

    /// Like [`AStar::search`], returning only the intersection ids
    pub fn find_path<W, G>(&self, graph: &G, start: usize, end: usize) -> Result<Option<Vec<usize>>>
    where
        W: Float + Debug,
        G: Graph<W>,
    {
        Ok(self
            .search(graph, start, end)?
            .map(|route| route.intersections))
    }
}

/// Finds the shortest route from `start` to `end` with A* and the Euclidean
/// heuristic
pub fn find_path<W, G>(graph: &G, start: usize, end: usize) -> Result<Option<Vec<usize>>>
where
    W: Float + Debug,
    G: Graph<W>,
{
    AStar::new().find_path(graph, start, end)
}
