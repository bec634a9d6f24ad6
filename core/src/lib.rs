#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Pirate Fleet engine.
//!
//! This crate defines the vocabulary that connects adapters, the spatial
//! grid, and the pure systems. Adapters translate platform input into
//! [`InputEvent`] values, the mode controller routes those events to the
//! active mode, and every mode answers a render request with a [`FrameView`]
//! describing computed state only. Backends never see simulation internals.

use std::fmt;

pub use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Title shown by adapters that open a window.
pub const WINDOW_TITLE: &str = "Arrrrr!!! Me Pirate Game!";

/// Identifies a top-level game mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameModeId {
    /// Placeholder for modes that never declared an identity.
    Unknown,
    /// Title screen offering to start or quit.
    StartMenu,
    /// The sailing and fighting part of the game.
    Gameplay,
    /// Shown after the player's ship sinks.
    GameOver,
    /// Shown after every enemy ship sinks.
    Won,
    /// Terminal identifier; the frame loop stops once it becomes active.
    Exit,
}

impl fmt::Display for GameModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::StartMenu => "start-menu",
            Self::Gameplay => "gameplay",
            Self::GameOver => "game-over",
            Self::Won => "won",
            Self::Exit => "exit",
        };
        f.write_str(name)
    }
}

/// Discrete damage stage of a ship.
///
/// The ordinal doubles as the index into a ship's list of visual variants,
/// and the ordering follows severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShipCondition {
    /// Hull intact.
    Healthy = 0,
    /// First visible damage.
    Damaged = 1,
    /// Barely afloat.
    VeryDamaged = 2,
    /// Terminal stage.
    Sunk = 3,
}

impl ShipCondition {
    /// Every condition in severity order.
    pub const ALL: [ShipCondition; 4] = [
        ShipCondition::Healthy,
        ShipCondition::Damaged,
        ShipCondition::VeryDamaged,
        ShipCondition::Sunk,
    ];

    /// Number of distinct conditions, and therefore of visual variants per ship.
    pub const COUNT: usize = Self::ALL.len();

    /// Zero-based ordinal used to select a visual variant.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }
}

/// Physical keys the engine reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Return / Enter.
    Enter,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// The `M` letter key.
    M,
    /// Any key without a dedicated binding.
    Other,
}

/// Mouse buttons the engine distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Wheel button.
    Middle,
}

/// Platform input translated by adapters, expressed in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown(Key),
    /// A mouse button was pressed.
    MouseDown {
        /// Cursor position in screen pixels.
        position: Vec2,
        /// Button that went down.
        button: MouseButton,
    },
    /// A mouse button was released.
    MouseUp {
        /// Cursor position in screen pixels.
        position: Vec2,
        /// Button that went up.
        button: MouseButton,
    },
    /// The cursor moved.
    MouseMotion {
        /// Cursor position in screen pixels.
        position: Vec2,
    },
    /// The window was resized to a new drawable size.
    Resized {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// The platform asked the application to close.
    Quit,
}

/// Signed tile index pair produced by world-to-tile translation.
///
/// Tiles left of or above the map origin carry negative components; they are
/// valid coordinates but never valid cost-matrix indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    column: i32,
    row: i32,
}

impl TileCoord {
    /// Creates a tile coordinate from column and row indices.
    #[must_use]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Column index (x axis).
    #[must_use]
    pub const fn column(&self) -> i32 {
        self.column
    }

    /// Row index (y axis).
    #[must_use]
    pub const fn row(&self) -> i32 {
        self.row
    }
}

/// Axis-aligned island rectangle in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IslandRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Extent along the x axis.
    pub width: f32,
    /// Extent along the y axis.
    pub height: f32,
}

impl IslandRect {
    /// Creates a new rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Reports whether the point lies inside the rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges are not.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }
}

/// Opaque identifier of a visual variant (sprite) owned by the asset loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariantId(u32);

impl VariantId {
    /// Wraps the loader-assigned identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Purpose a font is used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontRole {
    /// Large in-game score display.
    Scoreboard,
    /// Menu entries and headlines.
    Menu,
    /// Small helper and prompt text.
    Debug,
}

/// Handle to a font loaded by the rendering backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontHandle {
    id: u32,
    point_size: u16,
}

impl FontHandle {
    /// Creates a handle for the backend font `id` rendered at `point_size`.
    #[must_use]
    pub const fn new(id: u32, point_size: u16) -> Self {
        Self { id, point_size }
    }

    /// Backend-specific font identifier.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Requested glyph size in points.
    #[must_use]
    pub const fn point_size(&self) -> u16 {
        self.point_size
    }
}

/// Which side a ship fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Allegiance {
    /// The ship steered by the user.
    Player,
    /// A hostile ship.
    Enemy,
}

/// A line of text together with the font chosen for it.
#[derive(Clone, Debug, PartialEq)]
pub struct TextView {
    /// Text content.
    pub content: String,
    /// Font resolved from the game context.
    pub font: FontHandle,
    /// Top-left anchor in screen pixels.
    pub position: Vec2,
}

/// Entry shown by the start menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    /// Begins a new game.
    Start,
    /// Leaves the application.
    Quit,
}

impl MenuEntry {
    /// Entries in display order.
    pub const ALL: [MenuEntry; 2] = [MenuEntry::Start, MenuEntry::Quit];

    /// Label drawn for the entry.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Quit => "Quit",
        }
    }
}

/// Computed state of the start menu.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuView {
    /// Menu title.
    pub title: TextView,
    /// Entry labels in display order.
    pub entries: Vec<TextView>,
    /// Index of the highlighted entry within `entries`.
    pub highlighted: usize,
}

/// Computed state of a single ship.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShipView {
    /// Side the ship fights for.
    pub allegiance: Allegiance,
    /// Ship centre in world units.
    pub position: Vec2,
    /// Sprite rotation in degrees relative to the sprite's north-facing default.
    pub heading_degrees: f32,
    /// Current damage stage.
    pub condition: ShipCondition,
    /// Visual variant selected for the condition.
    pub variant: VariantId,
}

/// Computed state of an in-flight projectile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileView {
    /// Current position in world units.
    pub position: Vec2,
}

/// Computed state of the gameplay mode.
#[derive(Clone, Debug, PartialEq)]
pub struct GameplayView {
    /// World position mapped to the top-left screen pixel.
    pub viewport_origin: Vec2,
    /// Island rectangles in world units.
    pub islands: Vec<IslandRect>,
    /// Ships in update order, player first.
    pub ships: Vec<ShipView>,
    /// Projectiles in spawn order.
    pub projectiles: Vec<ProjectileView>,
    /// Score display.
    pub scoreboard: TextView,
}

/// Computed state of a full-screen message (game over, won).
#[derive(Clone, Debug, PartialEq)]
pub struct MessageView {
    /// Large headline.
    pub headline: TextView,
    /// Smaller instruction underneath.
    pub prompt: TextView,
}

/// Everything a backend needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameView {
    /// Start menu.
    Menu(MenuView),
    /// Gameplay.
    Gameplay(GameplayView),
    /// Game over or won screen.
    Message(MessageView),
}

#[cfg(test)]
mod tests {
    use super::{IslandRect, MenuEntry, ShipCondition, Vec2};

    #[test]
    fn condition_ordinals_follow_severity() {
        let ordinals: Vec<usize> = ShipCondition::ALL.iter().map(|c| c.ordinal()).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3]);
        assert!(ShipCondition::Healthy < ShipCondition::Sunk);
        assert_eq!(ShipCondition::COUNT, 4);
    }

    #[test]
    fn island_contains_is_half_open() {
        let island = IslandRect::new(10.0, 20.0, 5.0, 5.0);
        assert!(island.contains(Vec2::new(10.0, 20.0)));
        assert!(island.contains(Vec2::new(14.9, 24.9)));
        assert!(!island.contains(Vec2::new(15.0, 22.0)));
        assert!(!island.contains(Vec2::new(12.0, 25.0)));
    }

    #[test]
    fn menu_starts_with_start_entry() {
        assert_eq!(MenuEntry::ALL[0], MenuEntry::Start);
        assert_eq!(MenuEntry::Quit.label(), "Quit");
    }
}
