use std::fmt::Debug;
use num_traits::Float;

use crate::graph::Point;

/// Trait representing an undirected road network embedded in the plane
///
/// Intersections are identified by dense, 0-based ids. Adjacency is
/// symmetric: if `b` is a neighbor of `a`, then `a` is a neighbor of `b`.
pub trait Graph<W>: Debug
where
    W: Float + Debug,
{
    /// Returns the number of intersections in the network
    fn intersection_count(&self) -> usize;

    /// Returns the number of (undirected) roads in the network
    fn road_count(&self) -> usize;

    /// Returns true if the intersection exists in the network
    fn has_intersection(&self, id: usize) -> bool;

    /// Returns the coordinate of an intersection
    fn position(&self, id: usize) -> Option<Point<W>>;

    /// Returns an iterator over the intersections one road away from `id`
    fn neighbors(&self, id: usize) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns true if a road joins the two intersections
    fn has_road(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).any(|n| n == b)
    }
}
