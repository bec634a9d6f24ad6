use pirate_fleet_core::{IslandRect, TileCoord, Vec2};
use pirate_fleet_world::{CostLayer, GridError, MapDefinition, SpatialGrid};

const MAP: &str = r#"
columns = 6
rows = 4
tile_width = 64.0
tile_height = 32.0

[[layers]]
name = "ocean"
tiles = [[0, 0], [1, 0], [2, 2]]

[[layers]]
name = "shallows"
cost = 2
tiles = [[2, 2], [3, 1]]

[[layers]]
name = "reef"
cost = 3
tiles = [[2, 2]]

[[islands]]
x = 128.0
y = 32.0
width = 64.0
height = 48.0
"#;

fn loaded_grid() -> SpatialGrid {
    let definition: MapDefinition = toml::from_str(MAP).expect("map parses");
    SpatialGrid::from_definition(&definition).expect("map builds")
}

#[test]
fn untouched_tile_costs_nothing() {
    let grid = loaded_grid();
    assert_eq!(grid.cost(Vec2::new(10.0, 10.0)), Ok(0));
    assert_eq!(grid.cost(Vec2::new(5.0 * 64.0 + 1.0, 3.0 * 32.0 + 1.0)), Ok(0));
}

#[test]
fn overlapping_cost_layers_add_up() {
    let grid = loaded_grid();
    let reef_tile = grid.tile_to_world(TileCoord::new(2, 2));
    assert_eq!(grid.cost(reef_tile), Ok(5));

    let shallows_only = grid.tile_to_world(TileCoord::new(3, 1));
    assert_eq!(grid.cost(shallows_only), Ok(2));
}

#[test]
fn layers_without_cost_are_ignored() {
    let grid = loaded_grid();
    assert_eq!(grid.cost(grid.tile_to_world(TileCoord::new(1, 0))), Ok(0));
}

#[test]
fn cost_outside_matrix_is_out_of_bounds() {
    let grid = loaded_grid();

    assert_eq!(
        grid.cost(Vec2::new(6.0 * 64.0, 0.0)),
        Err(GridError::OutOfBounds {
            column: 6,
            row: 0,
            columns: 6,
            rows: 4,
        })
    );
    assert!(matches!(
        grid.cost(Vec2::new(-1.0, 10.0)),
        Err(GridError::OutOfBounds { column: -1, row: 0, .. })
    ));
    assert!(matches!(
        grid.cost(Vec2::new(10.0, 4.0 * 32.0 + 0.5)),
        Err(GridError::OutOfBounds { row: 4, .. })
    ));
}

#[test]
fn tile_centres_round_trip_for_every_tile() {
    let grid = loaded_grid();
    for row in 0..grid.rows() as i32 {
        for column in 0..grid.columns() as i32 {
            let tile = TileCoord::new(column, row);
            assert_eq!(grid.world_to_tile(grid.tile_to_world(tile)), tile);
        }
    }
}

#[test]
fn arbitrary_points_snap_to_tile_centre() {
    let grid = loaded_grid();
    let samples = [
        Vec2::new(1.0, 1.0),
        Vec2::new(100.0, 50.0),
        Vec2::new(383.0, 127.0),
        Vec2::new(64.0, 32.0),
    ];

    for point in samples {
        let snapped = grid.tile_to_world(grid.world_to_tile(point));
        assert_ne!(snapped, point, "{point} is not a tile centre");
        let tile = grid.world_to_tile(point);
        let expected = Vec2::new(
            tile.column() as f32 * 64.0 + 32.0,
            tile.row() as f32 * 32.0 + 16.0,
        );
        assert_eq!(snapped, expected);
    }
}

#[test]
fn screen_to_world_offsets_by_viewport_origin() {
    let mut grid = loaded_grid();
    assert_eq!(grid.screen_to_world(Vec2::new(5.0, 7.0)), Vec2::new(5.0, 7.0));

    grid.set_viewport_origin(Vec2::new(100.0, 40.0));
    assert_eq!(
        grid.screen_to_world(Vec2::new(5.0, 7.0)),
        Vec2::new(105.0, 47.0)
    );
}

#[test]
fn islands_are_exposed_as_loaded() {
    let grid = loaded_grid();
    assert_eq!(grid.islands(), &[IslandRect::new(128.0, 32.0, 64.0, 48.0)]);
}

#[test]
fn layer_tiles_outside_map_fail_the_load() {
    let definition = MapDefinition {
        columns: 2,
        rows: 2,
        tile_width: 16.0,
        tile_height: 16.0,
        layers: vec![
            CostLayer::default(),
            CostLayer {
                name: "reef".into(),
                cost: Some(1),
                tiles: vec![[1, 1], [1, 2]],
            },
        ],
        islands: Vec::new(),
    };

    assert_eq!(
        SpatialGrid::from_definition(&definition).expect_err("tile outside map"),
        GridError::LayerTileOutOfBounds {
            layer: 1,
            column: 1,
            row: 2,
        }
    );
}
