use crate::graph::{Point, RoadMap};
use crate::Result;
use rand::Rng;

/// Generates a `width` x `height` street grid with blocks of side `spacing`
///
/// Intersection `(i, j)` gets id `j * width + i` and sits at
/// `(i * spacing, j * spacing)`; roads join horizontal and vertical neighbors.
pub fn generate_grid(width: usize, height: usize, spacing: f64) -> Result<RoadMap<f64>> {
    let mut map = RoadMap::with_capacity(width * height);

    for j in 0..height {
        for i in 0..width {
            map.add_intersection(Point::new(i as f64 * spacing, j as f64 * spacing))?;
        }
    }

    let index = |i: usize, j: usize| j * width + i;

    for j in 0..height {
        for i in 0..width {
            if i + 1 < width {
                map.add_road(index(i, j), index(i + 1, j))?;
            }
            if j + 1 < height {
                map.add_road(index(i, j), index(i, j + 1))?;
            }
        }
    }

    Ok(map)
}

/// Generates a random geometric road map in the unit square
/// n: number of intersections
/// radius: intersections closer than this are joined by a road
pub fn generate_random_geometric<R: Rng>(n: usize, radius: f64, rng: &mut R) -> Result<RoadMap<f64>> {
    let mut map = RoadMap::with_capacity(n);

    for _ in 0..n {
        let x = rng.gen_range(0.0..1.0);
        let y = rng.gen_range(0.0..1.0);
        map.add_intersection(Point::new(x, y))?;
    }

    let points = map.intersections().to_vec();
    for i in 0..n {
        for j in (i + 1)..n {
            if points[i].distance(&points[j]) <= radius {
                map.add_road(i, j)?;
            }
        }
    }

    Ok(map)
}
