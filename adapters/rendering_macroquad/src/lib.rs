#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for Pirate Fleet.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in the containerised CI environment.
//! To keep `cargo test` usable everywhere we depend on macroquad without its
//! default `audio` feature, so the shared volume is tracked by the engine but
//! not applied to playback here.
//!
//! Hulls are drawn as primitives and text uses macroquad's built-in font at
//! the point size carried by each font handle.

mod input;

use anyhow::Result;
use glam::Vec2;
use macroquad::math::Vec2 as MacroquadVec2;
use pirate_fleet_core::InputEvent;
use pirate_fleet_rendering::{
    Color, DrawCommand, Presentation, RenderingBackend, Scene, HULL_BEAM, HULL_LENGTH,
};
use std::{sync::mpsc, time::Duration};

use self::input::{FrameObservation, InputTracker};

/// Rendering backend that presents scenes using macroquad.
#[derive(Clone, Copy, Debug, Default)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
}

impl MacroquadBackend {
    /// Returns a backend that requests the platform's default swap interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to either synchronise presentation with the display refresh rate
    /// or render as fast as possible.
    #[must_use]
    pub fn with_vsync(mut self, enabled: bool) -> Self {
        self.swap_interval = Some(i32::from(enabled));
        self
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut frame: F) -> Result<()>
    where
        F: FnMut(Duration, Vec<InputEvent>) -> Result<Option<Scene>> + 'static,
    {
        let Presentation {
            window_title,
            width,
            height,
            clear_color,
        } = presentation;

        let mut config = macroquad::window::Conf {
            window_title,
            window_width: i32::try_from(width).unwrap_or(i32::MAX),
            window_height: i32::try_from(height).unwrap_or(i32::MAX),
            window_resizable: true,
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = self.swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }

        let (outcome_sender, outcome_receiver) = mpsc::channel::<Result<()>>();

        macroquad::Window::from_config(config, async move {
            // window close arrives as InputEvent::Quit instead of ending the loop
            macroquad::input::prevent_quit();
            let background = to_macroquad_color(clear_color);
            let mut tracker = InputTracker::default();

            let outcome = loop {
                let events = tracker.translate(&FrameObservation::poll());
                let dt_seconds = macroquad::time::get_frame_time();
                let frame_dt = Duration::from_secs_f32(dt_seconds.max(0.0));

                match frame(frame_dt, events) {
                    Ok(Some(scene)) => {
                        macroquad::window::clear_background(background);
                        draw_scene(&scene);
                    }
                    Ok(None) => break Ok(()),
                    Err(error) => break Err(error),
                }

                macroquad::window::next_frame().await;
            };

            let _ = outcome_sender.send(outcome);
        });

        outcome_receiver.recv().unwrap_or(Ok(()))
    }
}

fn draw_scene(scene: &Scene) {
    for command in &scene.commands {
        match command {
            DrawCommand::Rect {
                top_left,
                size,
                color,
            } => macroquad::shapes::draw_rectangle(
                top_left.x,
                top_left.y,
                size.x,
                size.y,
                to_macroquad_color(*color),
            ),
            DrawCommand::Hull {
                centre,
                heading_degrees,
                color,
                ..
            } => draw_hull(*centre, *heading_degrees, to_macroquad_color(*color)),
            DrawCommand::Circle {
                centre,
                radius,
                color,
            } => macroquad::shapes::draw_circle(
                centre.x,
                centre.y,
                *radius,
                to_macroquad_color(*color),
            ),
            DrawCommand::Text {
                content,
                font,
                position,
                color,
            } => {
                let size = f32::from(font.point_size());
                // draw_text anchors on the baseline
                let _ = macroquad::text::draw_text(
                    content,
                    position.x,
                    position.y + size * 0.75,
                    size,
                    to_macroquad_color(*color),
                );
            }
        }
    }
}

fn draw_hull(centre: Vec2, heading_degrees: f32, color: macroquad::color::Color) {
    let [bow, port_front, port_aft, starboard_aft, starboard_front] =
        hull_outline(centre, heading_degrees).map(|point| MacroquadVec2::new(point.x, point.y));

    macroquad::shapes::draw_triangle(bow, port_front, starboard_front, color);
    macroquad::shapes::draw_triangle(port_front, port_aft, starboard_aft, color);
    macroquad::shapes::draw_triangle(port_front, starboard_aft, starboard_front, color);
}

/// Hull polygon in drawing order: bow, then the port and starboard corners.
///
/// A heading of 90 degrees faces +x and 0 degrees faces +y, matching the
/// headings ships derive from their travel vectors.
fn hull_outline(centre: Vec2, heading_degrees: f32) -> [Vec2; 5] {
    let radians = heading_degrees.to_radians();
    let forward = Vec2::new(radians.sin(), radians.cos());
    let side = forward.perp() * (HULL_BEAM * 0.5);
    let half_length = HULL_LENGTH * 0.5;
    let shoulder = centre + forward * (half_length * 0.4);
    let stern = centre - forward * half_length;

    [
        centre + forward * half_length,
        shoulder + side,
        stern + side,
        stern - side,
        shoulder - side,
    ]
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}
