//! JSON map files.
//!
//! A map file stores coordinates by intersection id and each road once:
//!
//! ```json
//! { "intersections": [[0.0, 0.0], [1.0, 0.0]], "roads": [[0, 1]] }
//! ```

use std::fmt::Debug;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::debug;
use num_traits::Float;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::graph::{Graph, RoadMap};
use crate::Result;

#[derive(Debug, Serialize, Deserialize)]
struct MapFile<W> {
    intersections: Vec<[W; 2]>,
    roads: Vec<[usize; 2]>,
}

/// Loads and validates a map from a JSON file
pub fn load_map<W, P>(path: P) -> Result<RoadMap<W>>
where
    W: Float + Debug + DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)?;
    let map = read_map(BufReader::new(file))?;
    debug!(
        "Loaded {}: {} intersections, {} roads",
        path.display(),
        map.intersection_count(),
        map.road_count()
    );
    Ok(map)
}

/// Reads and validates a map from any JSON source
pub fn read_map<W, R>(reader: R) -> Result<RoadMap<W>>
where
    W: Float + Debug + DeserializeOwned,
    R: Read,
{
    let file: MapFile<W> = serde_json::from_reader(reader)?;
    let roads: Vec<(usize, usize)> = file.roads.iter().map(|&[a, b]| (a, b)).collect();
    RoadMap::from_parts(file.intersections, &roads)
}

impl<W> RoadMap<W>
where
    W: Float + Debug + Serialize,
{
    /// Saves the map as a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the map as pretty-printed JSON
    pub fn write_to(&self, writer: impl Write) -> Result<()> {
        let file = MapFile {
            intersections: self.intersections().iter().map(|p| [p.x, p.y]).collect(),
            roads: self.roads().map(|(a, b)| [a, b]).collect(),
        };
        serde_json::to_writer_pretty(writer, &file)?;
        Ok(())
    }
}
