use std::time::Duration;

use glam::Vec2;
use log::{debug, info};
use pirate_fleet_core::{FrameView, GameModeId, InputEvent, Key};

use crate::{GameContext, GameMode, ModeError};

/// How the controller handled a single input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The event was passed to the active mode.
    Forwarded,
    /// A global shortcut consumed the event.
    Consumed,
    /// The user asked to quit; remaining events of the frame are dropped.
    Quit,
}

/// Whether the frame loop should keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// Keep running frames.
    Running,
    /// The game reached [`GameModeId::Exit`].
    Stopped,
}

/// Owns the active mode and the session context, and drives both once per frame.
#[derive(Debug)]
pub struct GameModeController {
    context: GameContext,
    active: Option<GameMode>,
}

impl GameModeController {
    /// Creates a controller showing the start menu.
    #[must_use]
    pub fn new(context: GameContext) -> Self {
        Self {
            context,
            active: Some(GameMode::StartMenu(crate::StartMenu::new())),
        }
    }

    /// Identifier of the active mode, [`GameModeId::Exit`] once stopped.
    #[must_use]
    pub fn active_id(&self) -> GameModeId {
        self.active.as_ref().map_or(GameModeId::Exit, GameMode::id)
    }

    /// Reports whether a mode is still active.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// The active mode, if the game has not exited.
    #[must_use]
    pub const fn active_mode(&self) -> Option<&GameMode> {
        self.active.as_ref()
    }

    /// Mutable access to the active mode.
    pub fn active_mode_mut(&mut self) -> Option<&mut GameMode> {
        self.active.as_mut()
    }

    /// Session state shared by all modes.
    #[must_use]
    pub const fn context(&self) -> &GameContext {
        &self.context
    }

    /// Routes one event: global shortcuts first, then the active mode.
    pub fn dispatch_input(&mut self, event: InputEvent) -> Dispatch {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => {
                self.stop();
                Dispatch::Quit
            }
            InputEvent::KeyDown(Key::M) => {
                self.context.audio_mut().toggle_mute();
                debug!("volume set to {}", self.context.audio().volume());
                Dispatch::Consumed
            }
            InputEvent::Resized { width, height } => {
                self.context
                    .set_screen_size(Vec2::new(width as f32, height as f32));
                Dispatch::Consumed
            }
            _ => match self.active.as_mut() {
                Some(mode) => {
                    mode.handle_input(event, &self.context);
                    Dispatch::Forwarded
                }
                None => Dispatch::Consumed,
            },
        }
    }

    /// Updates the active mode once and swaps it when it names another mode.
    ///
    /// The active mode is kept, with its state, for as long as it names itself.
    pub fn tick(&mut self, dt: Duration) -> Result<GameModeId, ModeError> {
        let Some(mode) = self.active.as_mut() else {
            return Ok(GameModeId::Exit);
        };

        let current = mode.id();
        let next = mode.update(dt, &mut self.context)?;
        if next == current {
            return Ok(current);
        }

        if next == GameModeId::Exit {
            self.stop();
        } else {
            self.active = Some(GameMode::enter(next, &mut self.context)?);
            info!("switched game mode {current} -> {next}");
        }
        Ok(next)
    }

    /// Drains a frame's events in order, then ticks the active mode once.
    ///
    /// A quit request skips the rest of the frame, including the tick.
    pub fn run_frame<I>(&mut self, events: I, dt: Duration) -> Result<FrameStatus, ModeError>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if self.dispatch_input(event) == Dispatch::Quit {
                return Ok(FrameStatus::Stopped);
            }
        }

        let _ = self.tick(dt)?;
        Ok(if self.is_running() {
            FrameStatus::Running
        } else {
            FrameStatus::Stopped
        })
    }

    /// Describes the active mode for drawing; `None` once the game exited.
    pub fn render(&self) -> Result<Option<FrameView>, ModeError> {
        self.active
            .as_ref()
            .map(|mode| mode.render(&self.context))
            .transpose()
    }

    fn stop(&mut self) {
        if let Some(mode) = self.active.take() {
            info!("switched game mode {} -> {}", mode.id(), GameModeId::Exit);
        }
    }
}
