#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative spatial state for Pirate Fleet.
//!
//! The [`SpatialGrid`] owns the translation between screen, world and tile
//! space, the additive per-tile movement cost matrix consumed by path
//! planners, and the island rectangles loaded with the map. It performs no
//! collision testing itself.

mod map;

pub use map::{CostLayer, MapDefinition};

use glam::Vec2;
use log::debug;
use pirate_fleet_core::{IslandRect, TileCoord};
use thiserror::Error;

/// Failures raised at the spatial grid boundary.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GridError {
    /// A tile lies outside the cost matrix.
    #[error("tile ({column}, {row}) lies outside the {columns}x{rows} cost matrix")]
    OutOfBounds {
        /// Column of the offending tile.
        column: i32,
        /// Row of the offending tile.
        row: i32,
        /// Number of columns in the matrix.
        columns: u32,
        /// Number of rows in the matrix.
        rows: u32,
    },
    /// Tiles must have a positive, finite extent on both axes.
    #[error("tile size {width}x{height} must be positive and finite")]
    InvalidTileSize {
        /// Requested tile width.
        width: f32,
        /// Requested tile height.
        height: f32,
    },
    /// The cost matrix needs at least one row and one column.
    #[error("grid of {columns}x{rows} tiles has no area")]
    EmptyGrid {
        /// Requested column count.
        columns: u32,
        /// Requested row count.
        rows: u32,
    },
    /// A cost layer references a tile outside the map.
    #[error("cost layer {layer} references tile ({column}, {row}) outside the map")]
    LayerTileOutOfBounds {
        /// Position of the layer within the map definition.
        layer: usize,
        /// Column of the offending tile.
        column: u32,
        /// Row of the offending tile.
        row: u32,
    },
}

/// Extent of a single tile in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileSize {
    width: f32,
    height: f32,
}

impl TileSize {
    /// Creates a tile size, rejecting non-positive or non-finite extents.
    pub fn new(width: f32, height: f32) -> Result<Self, GridError> {
        let valid = |value: f32| value.is_finite() && value > 0.0;
        if !valid(width) || !valid(height) {
            return Err(GridError::InvalidTileSize { width, height });
        }

        Ok(Self { width, height })
    }

    /// Width of a tile.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height of a tile.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Extent as a vector.
    #[must_use]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Coordinate translation, movement costs and islands of the loaded map.
#[derive(Clone, Debug)]
pub struct SpatialGrid {
    columns: u32,
    rows: u32,
    tile_size: TileSize,
    costs: Vec<u32>,
    islands: Vec<IslandRect>,
    viewport_origin: Vec2,
}

impl SpatialGrid {
    /// Creates a grid with an all-zero cost matrix and no islands.
    pub fn new(columns: u32, rows: u32, tile_size: TileSize) -> Result<Self, GridError> {
        let cell_count = usize::try_from(columns)
            .ok()
            .zip(usize::try_from(rows).ok())
            .and_then(|(columns, rows)| columns.checked_mul(rows))
            .unwrap_or(0);
        if cell_count == 0 {
            return Err(GridError::EmptyGrid { columns, rows });
        }

        Ok(Self {
            columns,
            rows,
            tile_size,
            costs: vec![0; cell_count],
            islands: Vec::new(),
            viewport_origin: Vec2::ZERO,
        })
    }

    /// Builds the grid described by a loaded map.
    ///
    /// Layers without a cost contribute nothing; costs of layers touching the
    /// same tile add up.
    pub fn from_definition(definition: &MapDefinition) -> Result<Self, GridError> {
        let tile_size = TileSize::new(definition.tile_width, definition.tile_height)?;
        let mut grid = Self::new(definition.columns, definition.rows, tile_size)?;

        for (layer_index, layer) in definition.layers.iter().enumerate() {
            let Some(cost) = layer.cost else {
                continue;
            };
            grid.add_cost_layer(layer_index, cost, &layer.tiles)?;
        }
        grid.islands = definition.islands.clone();

        debug!(
            "spatial grid ready: {}x{} tiles of {}x{}, {} islands",
            grid.columns,
            grid.rows,
            tile_size.width(),
            tile_size.height(),
            grid.islands.len()
        );
        Ok(grid)
    }

    fn add_cost_layer(
        &mut self,
        layer: usize,
        cost: u32,
        tiles: &[[u32; 2]],
    ) -> Result<(), GridError> {
        for &[column, row] in tiles {
            let index = self
                .index(column, row)
                .ok_or(GridError::LayerTileOutOfBounds { layer, column, row })?;
            self.costs[index] = self.costs[index].saturating_add(cost);
        }
        Ok(())
    }

    /// Number of tile columns.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of tile rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Extent of one tile.
    #[must_use]
    pub const fn tile_size(&self) -> TileSize {
        self.tile_size
    }

    /// Extent of the whole map in world units.
    #[must_use]
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(
            self.columns as f32 * self.tile_size.width(),
            self.rows as f32 * self.tile_size.height(),
        )
    }

    /// Translates a screen position into world space.
    ///
    /// Zoom is not supported; the viewport origin is the only offset.
    #[must_use]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.viewport_origin
    }

    /// Translates a world position into the tile containing it.
    ///
    /// Components are floored, so positions left of or above the origin land
    /// on negative tiles rather than collapsing onto tile zero.
    #[must_use]
    pub fn world_to_tile(&self, world: Vec2) -> TileCoord {
        let scaled = world / self.tile_size.as_vec2();
        TileCoord::new(scaled.x.floor() as i32, scaled.y.floor() as i32)
    }

    /// Translates a tile into the world position of its centre.
    ///
    /// Only tile centres survive a `world_to_tile` / `tile_to_world` round trip.
    #[must_use]
    pub fn tile_to_world(&self, tile: TileCoord) -> Vec2 {
        let size = self.tile_size.as_vec2();
        let next_corner = Vec2::new(tile.column() as f32 + 1.0, tile.row() as f32 + 1.0) * size;
        next_corner - size * 0.5
    }

    /// Reports whether the tile indexes the cost matrix.
    #[must_use]
    pub fn contains_tile(&self, tile: TileCoord) -> bool {
        self.tile_index(tile).is_some()
    }

    /// Movement cost of the tile containing the world position.
    pub fn cost(&self, world: Vec2) -> Result<u32, GridError> {
        let tile = self.world_to_tile(world);
        let index = self.tile_index(tile).ok_or(GridError::OutOfBounds {
            column: tile.column(),
            row: tile.row(),
            columns: self.columns,
            rows: self.rows,
        })?;
        Ok(self.costs[index])
    }

    /// Island collision rectangles, immutable after load.
    #[must_use]
    pub fn islands(&self) -> &[IslandRect] {
        &self.islands
    }

    /// World position currently shown at the top-left screen pixel.
    #[must_use]
    pub const fn viewport_origin(&self) -> Vec2 {
        self.viewport_origin
    }

    /// Moves the viewport to the provided world origin.
    pub fn set_viewport_origin(&mut self, origin: Vec2) {
        self.viewport_origin = origin;
    }

    /// Centres the viewport on `focus`, keeping it inside the map where possible.
    ///
    /// Axes on which the screen is larger than the map pin the origin to zero.
    pub fn center_viewport_on(&mut self, focus: Vec2, screen_size: Vec2) {
        let max_origin = (self.world_size() - screen_size).max(Vec2::ZERO);
        self.viewport_origin = (focus - screen_size * 0.5).clamp(Vec2::ZERO, max_origin);
    }

    fn tile_index(&self, tile: TileCoord) -> Option<usize> {
        let column = u32::try_from(tile.column()).ok()?;
        let row = u32::try_from(tile.row()).ok()?;
        self.index(column, row)
    }

    fn index(&self, column: u32, row: u32) -> Option<usize> {
        if column >= self.columns || row >= self.rows {
            return None;
        }

        let width = usize::try_from(self.columns).ok()?;
        let column = usize::try_from(column).ok()?;
        let row = usize::try_from(row).ok()?;
        row.checked_mul(width)?.checked_add(column)
    }
}
