//! Translation of polled macroquad input into engine events.

use glam::Vec2;
use macroquad::input::KeyCode;
use pirate_fleet_core::{InputEvent, Key, MouseButton};

/// Keys polled every frame together with their engine binding.
pub(crate) const POLLED_KEYS: [(KeyCode, Key); 8] = [
    (KeyCode::Up, Key::Up),
    (KeyCode::Down, Key::Down),
    (KeyCode::Left, Key::Left),
    (KeyCode::Right, Key::Right),
    (KeyCode::Enter, Key::Enter),
    (KeyCode::Space, Key::Space),
    (KeyCode::Escape, Key::Escape),
    (KeyCode::M, Key::M),
];

/// Raw input state sampled once per frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct FrameObservation {
    pub(crate) cursor: Vec2,
    pub(crate) screen_size: (u32, u32),
    pub(crate) keys_pressed: Vec<Key>,
    pub(crate) buttons_pressed: Vec<MouseButton>,
    pub(crate) buttons_released: Vec<MouseButton>,
    /// The window's close button was pressed.
    pub(crate) quit_requested: bool,
}

impl FrameObservation {
    pub(crate) fn poll() -> Self {
        let (x, y) = macroquad::input::mouse_position();
        let buttons = [
            (macroquad::input::MouseButton::Left, MouseButton::Left),
            (macroquad::input::MouseButton::Right, MouseButton::Right),
            (macroquad::input::MouseButton::Middle, MouseButton::Middle),
        ];

        Self {
            cursor: Vec2::new(x, y),
            screen_size: (
                macroquad::window::screen_width().max(0.0) as u32,
                macroquad::window::screen_height().max(0.0) as u32,
            ),
            keys_pressed: POLLED_KEYS
                .iter()
                .filter(|(code, _)| macroquad::input::is_key_pressed(*code))
                .map(|(_, key)| *key)
                .collect(),
            buttons_pressed: buttons
                .iter()
                .filter(|(button, _)| macroquad::input::is_mouse_button_pressed(*button))
                .map(|(_, button)| *button)
                .collect(),
            buttons_released: buttons
                .iter()
                .filter(|(button, _)| macroquad::input::is_mouse_button_released(*button))
                .map(|(_, button)| *button)
                .collect(),
            quit_requested: macroquad::input::is_quit_requested(),
        }
    }
}

/// Turns per-frame observations into an ordered event stream.
///
/// A close request leads the stream. Resizes and cursor motion are detected by comparing against the previous
/// observation, so the first frame always reports both.
#[derive(Clone, Debug, Default)]
pub(crate) struct InputTracker {
    last_cursor: Option<Vec2>,
    last_screen_size: Option<(u32, u32)>,
}

impl InputTracker {
    pub(crate) fn translate(&mut self, observation: &FrameObservation) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if observation.quit_requested {
            events.push(InputEvent::Quit);
        }

        if self.last_screen_size != Some(observation.screen_size) {
            let (width, height) = observation.screen_size;
            events.push(InputEvent::Resized { width, height });
            self.last_screen_size = Some(observation.screen_size);
        }

        if self.last_cursor != Some(observation.cursor) {
            events.push(InputEvent::MouseMotion {
                position: observation.cursor,
            });
            self.last_cursor = Some(observation.cursor);
        }

        events.extend(observation.keys_pressed.iter().copied().map(InputEvent::KeyDown));
        events.extend(
            observation
                .buttons_pressed
                .iter()
                .map(|&button| InputEvent::MouseDown {
                    position: observation.cursor,
                    button,
                }),
        );
        events.extend(
            observation
                .buttons_released
                .iter()
                .map(|&button| InputEvent::MouseUp {
                    position: observation.cursor,
                    button,
                }),
        );
        events
    }
}
