use crate::graph::traits::Graph;
use crate::graph::Point;
use crate::{Error, Result};
use num_traits::Float;
use std::fmt::Debug;

/// An undirected road network using adjacency lists
///
/// Neighbor lists keep insertion order, so searches over the same map are
/// reproducible.
#[derive(Debug, Clone)]
pub struct RoadMap<W>
where
    W: Float + Debug,
{
    /// Coordinates, indexed by intersection id
    intersections: Vec<Point<W>>,

    /// Roads for each intersection: id -> [neighbor ids]
    roads: Vec<Vec<usize>>,

    /// Number of undirected roads
    road_count: usize,
}

impl<W> Default for RoadMap<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> RoadMap<W>
where
    W: Float + Debug,
{
    /// Creates a new empty road map
    pub fn new() -> Self {
        RoadMap {
            intersections: Vec::new(),
            roads: Vec::new(),
            road_count: 0,
        }
    }

    /// Creates an empty road map with room for `intersections` intersections
    pub fn with_capacity(intersections: usize) -> Self {
        RoadMap {
            intersections: Vec::with_capacity(intersections),
            roads: Vec::with_capacity(intersections),
            road_count: 0,
        }
    }

    /// Builds a map from coordinates and a list of roads
    pub fn from_parts<P, I>(points: I, roads: &[(usize, usize)]) -> Result<Self>
    where
        P: Into<Point<W>>,
        I: IntoIterator<Item = P>,
    {
        let points = points.into_iter();
        let mut map = RoadMap::with_capacity(points.size_hint().0);
        for point in points {
            map.add_intersection(point.into())?;
        }
        for &(a, b) in roads {
            map.add_road(a, b)?;
        }
        Ok(map)
    }

    /// Adds an intersection and returns its ID
    pub fn add_intersection(&mut self, point: Point<W>) -> Result<usize> {
        let id = self.intersections.len();
        if !point.is_finite() {
            return Err(Error::InvalidCoordinate(id));
        }
        self.intersections.push(point);
        self.roads.push(Vec::new());
        Ok(id)
    }

    /// Adds a road between two intersections
    ///
    /// Returns `Ok(false)` if the road already exists.
    pub fn add_road(&mut self, a: usize, b: usize) -> Result<bool> {
        if a == b || !self.has_intersection(a) || !self.has_intersection(b) {
            return Err(Error::InvalidRoad(a, b));
        }
        if self.roads[a].contains(&b) {
            return Ok(false);
        }

        self.roads[a].push(b);
        self.roads[b].push(a);
        self.road_count += 1;
        Ok(true)
    }

    /// Iterates every road once, as `(a, b)` with `a < b`
    pub fn roads(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.roads.iter().enumerate().flat_map(|(a, neighbors)| {
            neighbors
                .iter()
                .filter(move |&&b| a < b)
                .map(move |&b| (a, b))
        })
    }

    /// Coordinates of all intersections, indexed by id
    pub fn intersections(&self) -> &[Point<W>] {
        &self.intersections
    }
}

impl<W> Graph<W> for RoadMap<W>
where
    W: Float + Debug,
{
    fn intersection_count(&self) -> usize {
        self.intersections.len()
    }

    fn road_count(&self) -> usize {
        self.road_count
    }

    fn has_intersection(&self, id: usize) -> bool {
        id < self.intersections.len()
    }

    fn position(&self, id: usize) -> Option<Point<W>> {
        self.intersections.get(id).copied()
    }

    fn neighbors(&self, id: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        if let Some(neighbors) = self.roads.get(id) {
            Box::new(neighbors.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_road(&self, a: usize, b: usize) -> bool {
        self.roads.get(a).map_or(false, |neighbors| neighbors.contains(&b))
    }
}
