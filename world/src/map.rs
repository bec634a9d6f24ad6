//! Serialisable map description supplied by the asset loader.

use pirate_fleet_core::IslandRect;
use serde::{Deserialize, Serialize};

/// Tile map dimensions, cost layers and islands used to populate a
/// [`SpatialGrid`](crate::SpatialGrid).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapDefinition {
    /// Number of tile columns.
    pub columns: u32,
    /// Number of tile rows.
    pub rows: u32,
    /// Width of one tile in world units.
    pub tile_width: f32,
    /// Height of one tile in world units.
    pub tile_height: f32,
    /// Tile layers, some of which contribute movement cost.
    #[serde(default)]
    pub layers: Vec<CostLayer>,
    /// Island collision rectangles in world units.
    #[serde(default)]
    pub islands: Vec<IslandRect>,
}

/// One tile layer of the map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostLayer {
    /// Human readable layer name.
    #[serde(default)]
    pub name: String,
    /// Cost added to every tile the layer touches; `None` for decorative layers.
    #[serde(default)]
    pub cost: Option<u32>,
    /// `[column, row]` pairs of the tiles painted on this layer.
    #[serde(default)]
    pub tiles: Vec<[u32; 2]>,
}
