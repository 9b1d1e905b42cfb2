pub mod traits;
pub mod point;
pub mod road_map;
pub mod io;
pub mod generators;

pub use traits::Graph;
pub use point::Point;
pub use road_map::RoadMap;
pub use io::{load_map, read_map};
