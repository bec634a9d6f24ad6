use std::collections::BTreeMap;

use glam::Vec2;
use pirate_fleet_core::{FontHandle, FontRole};
use pirate_fleet_system_ships::ShipSpec;
use pirate_fleet_world::SpatialGrid;

use crate::ModeError;

/// Volume control shared with the audio backend.
///
/// The core only adjusts the scalar; the backend applies it to playback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AudioHandle {
    background_volume: f32,
    volume: f32,
}

impl AudioHandle {
    /// Creates a handle playing at the configured background volume.
    #[must_use]
    pub fn new(background_volume: f32) -> Self {
        let background_volume = background_volume.clamp(0.0, 1.0);
        Self {
            background_volume,
            volume: background_volume,
        }
    }

    /// Current playback volume in `0.0..=1.0`.
    #[must_use]
    pub const fn volume(&self) -> f32 {
        self.volume
    }

    /// Volume restored when unmuting.
    #[must_use]
    pub const fn background_volume(&self) -> f32 {
        self.background_volume
    }

    /// Sets the playback volume, clamped to `0.0..=1.0`.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Flips between silence and the background volume.
    pub fn toggle_mute(&mut self) {
        self.set_volume(self.background_volume - self.volume);
    }
}

/// Fonts loaded by the backend, keyed by purpose.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontRegistry {
    fonts: BTreeMap<FontRole, FontHandle>,
}

impl FontRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registry with `handle` registered for `role`.
    #[must_use]
    pub fn with(mut self, role: FontRole, handle: FontHandle) -> Self {
        self.insert(role, handle);
        self
    }

    /// Registers `handle` for `role`, replacing any previous handle.
    pub fn insert(&mut self, role: FontRole, handle: FontHandle) {
        let _ = self.fonts.insert(role, handle);
    }

    /// Font registered for `role`.
    pub fn get(&self, role: FontRole) -> Result<FontHandle, ModeError> {
        self.fonts
            .get(&role)
            .copied()
            .ok_or(ModeError::MissingFont(role))
    }
}

/// Ships spawned whenever gameplay starts.
#[derive(Clone, Debug, PartialEq)]
pub struct FleetSetup {
    /// The player's ship.
    pub player: ShipSpec,
    /// Enemy ships in spawn order.
    pub enemies: Vec<ShipSpec>,
}

/// Session-wide state shared with every mode.
#[derive(Clone, Debug)]
pub struct GameContext {
    fonts: FontRegistry,
    audio: AudioHandle,
    grid: SpatialGrid,
    fleet: FleetSetup,
    screen_size: Vec2,
}

impl GameContext {
    /// Bundles the loaded session resources.
    #[must_use]
    pub fn new(
        fonts: FontRegistry,
        audio: AudioHandle,
        grid: SpatialGrid,
        fleet: FleetSetup,
        screen_size: Vec2,
    ) -> Self {
        Self {
            fonts,
            audio,
            grid,
            fleet,
            screen_size,
        }
    }

    /// Loaded fonts.
    #[must_use]
    pub const fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    /// Shared audio volume.
    #[must_use]
    pub const fn audio(&self) -> &AudioHandle {
        &self.audio
    }

    /// Mutable access to the shared audio volume.
    pub fn audio_mut(&mut self) -> &mut AudioHandle {
        &mut self.audio
    }

    /// The map's spatial grid.
    #[must_use]
    pub const fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    /// Mutable access to the spatial grid, for viewport updates.
    pub fn grid_mut(&mut self) -> &mut SpatialGrid {
        &mut self.grid
    }

    /// Ships spawned on entering gameplay.
    #[must_use]
    pub const fn fleet_setup(&self) -> &FleetSetup {
        &self.fleet
    }

    /// Drawable size of the window in pixels.
    #[must_use]
    pub const fn screen_size(&self) -> Vec2 {
        self.screen_size
    }

    /// Records a new drawable size.
    pub fn set_screen_size(&mut self, screen_size: Vec2) {
        self.screen_size = screen_size;
    }
}
