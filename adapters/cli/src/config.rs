//! Runtime configuration loaded from `pirate-fleet.toml`.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glam::Vec2;
use log::{info, warn};
use pirate_fleet_core::{Allegiance, FontHandle, FontRole, VariantId, WINDOW_TITLE};
use pirate_fleet_system_modes::{AudioHandle, FleetSetup, FontRegistry, GameContext};
use pirate_fleet_system_ships::{ShipSpec, VisualVariants, DEFAULT_HIT_POINTS, DEFAULT_SHIP_SPEED};
use pirate_fleet_world::{MapDefinition, SpatialGrid};
use serde::Deserialize;

/// Identifier of macroquad's built-in font.
const BUILTIN_FONT: u32 = 0;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub(crate) struct GameConfig {
    pub(crate) window: WindowConfig,
    pub(crate) audio: AudioConfig,
    pub(crate) fonts: FontConfig,
    pub(crate) map: PathBuf,
    pub(crate) fleet: FleetConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            audio: AudioConfig::default(),
            fonts: FontConfig::default(),
            map: PathBuf::from("assets/worldmap.toml"),
            fleet: FleetConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub(crate) struct WindowConfig {
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_owned(),
            width: 1920,
            height: 1080,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub(crate) struct AudioConfig {
    pub(crate) background_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            background_volume: 0.5,
        }
    }
}

/// Point sizes per font role.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub(crate) struct FontConfig {
    pub(crate) scoreboard: u16,
    pub(crate) menu: u16,
    pub(crate) debug: u16,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            scoreboard: 72,
            menu: 128,
            debug: 18,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub(crate) struct FleetConfig {
    pub(crate) player: ShipConfig,
    pub(crate) enemies: Vec<ShipConfig>,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            player: ShipConfig::at([160.0, 160.0], [2, 8, 14, 20]),
            enemies: vec![
                ShipConfig::at([800.0, 480.0], [4, 10, 16, 22]),
                ShipConfig::at([1440.0, 224.0], [4, 10, 16, 22]),
            ],
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct ShipConfig {
    pub(crate) spawn: [f32; 2],
    #[serde(default = "default_hit_points")]
    pub(crate) hit_points: u32,
    #[serde(default = "default_speed")]
    pub(crate) speed: f32,
    /// Visual variant ids in condition order, healthy first.
    pub(crate) variants: Vec<u32>,
}

impl ShipConfig {
    fn at(spawn: [f32; 2], variants: [u32; 4]) -> Self {
        Self {
            spawn,
            hit_points: DEFAULT_HIT_POINTS,
            speed: DEFAULT_SHIP_SPEED,
            variants: variants.to_vec(),
        }
    }

    fn spec(&self, allegiance: Allegiance) -> Result<ShipSpec> {
        let variants = self.variants.iter().copied().map(VariantId::new).collect();
        Ok(ShipSpec {
            allegiance,
            spawn: Vec2::from(self.spawn),
            hit_points: self.hit_points,
            speed: self.speed,
            variants: VisualVariants::new(variants)
                .with_context(|| format!("invalid visual variants for {allegiance:?} ship"))?,
        })
    }
}

fn default_hit_points() -> u32 {
    DEFAULT_HIT_POINTS
}

fn default_speed() -> f32 {
    DEFAULT_SHIP_SPEED
}

impl GameConfig {
    /// Reads the configuration file, falling back to defaults when it does not exist.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text)
                .with_context(|| format!("failed to parse config {}", path.display())),
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                warn!("{} not found, using default settings", path.display());
                Ok(Self::default())
            }
            Err(error) => {
                Err(error).with_context(|| format!("failed to read config {}", path.display()))
            }
        }
    }

    /// Loads the configuration and the map it names, resolving the map
    /// against the configuration file's directory.
    pub(crate) fn load_session(path: &Path) -> Result<(Self, GameContext)> {
        let config = Self::load(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let context = config.build_context(base)?;
        Ok((config, context))
    }

    pub(crate) fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads the map relative to `base` and assembles the session context.
    pub(crate) fn build_context(&self, base: &Path) -> Result<GameContext> {
        let map_path = base.join(&self.map);
        let text = fs::read_to_string(&map_path)
            .with_context(|| format!("failed to read map {}", map_path.display()))?;
        let definition: MapDefinition = toml::from_str(&text)
            .with_context(|| format!("failed to parse map {}", map_path.display()))?;
        info!("loaded map {}", map_path.display());
        self.context_for(&definition)
    }

    pub(crate) fn context_for(&self, definition: &MapDefinition) -> Result<GameContext> {
        let grid = SpatialGrid::from_definition(definition).context("invalid map")?;

        let fleet = FleetSetup {
            player: self.fleet.player.spec(Allegiance::Player)?,
            enemies: self
                .fleet
                .enemies
                .iter()
                .map(|enemy| enemy.spec(Allegiance::Enemy))
                .collect::<Result<_>>()?,
        };

        let fonts = FontRegistry::new()
            .with(
                FontRole::Scoreboard,
                FontHandle::new(BUILTIN_FONT, self.fonts.scoreboard),
            )
            .with(FontRole::Menu, FontHandle::new(BUILTIN_FONT, self.fonts.menu))
            .with(FontRole::Debug, FontHandle::new(BUILTIN_FONT, self.fonts.debug));

        Ok(GameContext::new(
            fonts,
            AudioHandle::new(self.audio.background_volume),
            grid,
            fleet,
            Vec2::new(self.window.width as f32, self.window.height as f32),
        ))
    }
}
