#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Pirate Fleet adapters.
//!
//! Modes describe what is on screen with a [`FrameView`]; this crate turns
//! that description into backend-agnostic [`DrawCommand`]s in screen space so
//! every backend draws the same picture.

use anyhow::Result as AnyResult;
use glam::Vec2;
use pirate_fleet_core::{
    Allegiance, FontHandle, FrameView, GameplayView, InputEvent, MenuView, MessageView,
    ShipCondition, ShipView, TextView, VariantId,
};
use std::time::Duration;

/// Length of a drawn hull along its heading, in pixels.
pub const HULL_LENGTH: f32 = 48.0;

/// Width of a drawn hull across its heading, in pixels.
pub const HULL_BEAM: f32 = 20.0;

/// Radius of a drawn cannonball, in pixels.
pub const CANNONBALL_RADIUS: f32 = 4.0;

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Returns a new color lightened towards white by the provided amount.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        self.map_channels(|channel| channel + (1.0 - channel) * amount)
    }

    /// Returns a new color darkened towards black by the provided amount.
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        self.map_channels(|channel| channel * (1.0 - amount))
    }

    fn map_channels(self, map: impl Fn(f32) -> f32) -> Self {
        Self {
            red: map(self.red),
            green: map(self.green),
            blue: map(self.blue),
            alpha: self.alpha,
        }
    }
}

/// Colors used to compose scenes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Open water, used to clear each frame.
    pub sea: Color,
    /// Island fill.
    pub island: Color,
    /// Hull of the player's ship.
    pub player_hull: Color,
    /// Hull of enemy ships.
    pub enemy_hull: Color,
    /// Cannonballs in flight.
    pub cannonball: Color,
    /// Regular text.
    pub text: Color,
    /// Highlighted menu entry.
    pub highlight: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            sea: Color::from_rgb_u8(100, 149, 237),
            island: Color::from_rgb_u8(214, 190, 122),
            player_hull: Color::from_rgb_u8(150, 95, 45),
            enemy_hull: Color::from_rgb_u8(60, 60, 60),
            cannonball: Color::from_rgb_u8(20, 20, 20),
            text: Color::from_rgb_u8(0, 0, 0),
            highlight: Color::from_rgb_u8(200, 30, 30),
        }
    }
}

impl Palette {
    /// Hull color of a ship, darkened as it takes damage.
    #[must_use]
    pub fn hull(&self, allegiance: Allegiance, condition: ShipCondition) -> Color {
        let base = match allegiance {
            Allegiance::Player => self.player_hull,
            Allegiance::Enemy => self.enemy_hull,
        };
        let severity = condition.ordinal() as f32 / ShipCondition::COUNT as f32;
        base.darken(severity)
    }
}

/// A single primitive in screen space.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Axis-aligned filled rectangle.
    Rect {
        /// Top-left corner in pixels.
        top_left: Vec2,
        /// Extent in pixels.
        size: Vec2,
        /// Fill color.
        color: Color,
    },
    /// Ship hull rotated to its heading.
    Hull {
        /// Hull centre in pixels.
        centre: Vec2,
        /// Rotation in degrees relative to a north-facing hull.
        heading_degrees: f32,
        /// Visual variant, for backends drawing sprites.
        variant: VariantId,
        /// Fill color.
        color: Color,
    },
    /// Filled circle.
    Circle {
        /// Centre in pixels.
        centre: Vec2,
        /// Radius in pixels.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// Line of text.
    Text {
        /// Text content.
        content: String,
        /// Font to draw with.
        font: FontHandle,
        /// Top-left anchor in pixels.
        position: Vec2,
        /// Glyph color.
        color: Color,
    },
}

/// Ordered list of primitives making up one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Commands in painting order.
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Lays out a frame description in screen space.
    #[must_use]
    pub fn compose(frame: &FrameView, palette: &Palette) -> Self {
        let mut scene = Self::default();
        match frame {
            FrameView::Menu(menu) => scene.push_menu(menu, palette),
            FrameView::Gameplay(gameplay) => scene.push_gameplay(gameplay, palette),
            FrameView::Message(message) => scene.push_message(message, palette),
        }
        scene
    }

    fn push_menu(&mut self, menu: &MenuView, palette: &Palette) {
        self.push_text(&menu.title, palette.text);
        for (index, entry) in menu.entries.iter().enumerate() {
            let color = if index == menu.highlighted {
                palette.highlight
            } else {
                palette.text
            };
            self.push_text(entry, color);
        }
    }

    fn push_gameplay(&mut self, gameplay: &GameplayView, palette: &Palette) {
        let origin = gameplay.viewport_origin;
        for island in &gameplay.islands {
            self.commands.push(DrawCommand::Rect {
                top_left: Vec2::new(island.x, island.y) - origin,
                size: Vec2::new(island.width, island.height),
                color: palette.island,
            });
        }
        for ship in &gameplay.ships {
            self.commands.push(hull(ship, origin, palette));
        }
        for projectile in &gameplay.projectiles {
            self.commands.push(DrawCommand::Circle {
                centre: projectile.position - origin,
                radius: CANNONBALL_RADIUS,
                color: palette.cannonball,
            });
        }
        self.push_text(&gameplay.scoreboard, palette.text);
    }

    fn push_message(&mut self, message: &MessageView, palette: &Palette) {
        self.push_text(&message.headline, palette.text);
        self.push_text(&message.prompt, palette.text);
    }

    fn push_text(&mut self, text: &TextView, color: Color) {
        self.commands.push(DrawCommand::Text {
            content: text.content.clone(),
            font: text.font,
            position: text.position,
            color,
        });
    }
}

fn hull(ship: &ShipView, origin: Vec2, palette: &Palette) -> DrawCommand {
    DrawCommand::Hull {
        centre: ship.position - origin,
        heading_degrees: ship.heading_degrees,
        variant: ship.variant,
        color: palette.hull(ship.allegiance, ship.condition),
    }
}

/// Window settings consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Initial window width in pixels.
    pub width: u32,
    /// Initial window height in pixels.
    pub height: u32,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, width: u32, height: u32, clear_color: Color) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            width,
            height,
            clear_color,
        }
    }
}

/// Rendering backend capable of presenting Pirate Fleet scenes.
pub trait RenderingBackend {
    /// Runs the backend until the frame closure stops it or fails.
    ///
    /// Each frame the closure receives the elapsed time and the input events
    /// gathered since the previous frame, in arrival order. Returning
    /// `Ok(None)` closes the window.
    fn run<F>(self, presentation: Presentation, frame: F) -> AnyResult<()>
    where
        F: FnMut(Duration, Vec<InputEvent>) -> AnyResult<Option<Scene>> + 'static;
}
