use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A 2-D coordinate of an intersection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point<W> {
    pub x: W,
    pub y: W,
}

impl<W: Float> Point<W> {
    pub fn new(x: W, y: W) -> Self {
        Point { x, y }
    }

    /// Straight-line distance to another point
    pub fn distance(&self, other: &Point<W>) -> W {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<W: Float> From<[W; 2]> for Point<W> {
    fn from([x, y]: [W; 2]) -> Self {
        Point::new(x, y)
    }
}

impl<W: Float> From<(W, W)> for Point<W> {
    fn from((x, y): (W, W)) -> Self {
        Point::new(x, y)
    }
}
