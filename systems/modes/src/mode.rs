use std::time::Duration;

use pirate_fleet_core::{FrameView, GameModeId, InputEvent};

use crate::{GameContext, Gameplay, MessageScreen, ModeError, StartMenu};

/// The closed set of modes the game can be in.
#[derive(Clone, Debug)]
pub enum GameMode {
    /// Title screen.
    StartMenu(StartMenu),
    /// Sailing and fighting.
    Gameplay(Gameplay),
    /// The player's ship has sunk.
    GameOver(MessageScreen),
    /// Every enemy ship has sunk.
    Won(MessageScreen),
}

impl GameMode {
    /// Constructs a fresh mode for `id`.
    ///
    /// [`GameModeId::Unknown`] and [`GameModeId::Exit`] have no mode behind
    /// them and are rejected with [`ModeError::UnknownMode`].
    pub fn enter(id: GameModeId, context: &mut GameContext) -> Result<Self, ModeError> {
        match id {
            GameModeId::StartMenu => Ok(Self::StartMenu(StartMenu::new())),
            GameModeId::Gameplay => Ok(Self::Gameplay(Gameplay::enter(context)?)),
            GameModeId::GameOver => Ok(Self::GameOver(MessageScreen::game_over())),
            GameModeId::Won => Ok(Self::Won(MessageScreen::won())),
            GameModeId::Unknown | GameModeId::Exit => Err(ModeError::UnknownMode(id)),
        }
    }

    /// Identifier of the mode.
    #[must_use]
    pub const fn id(&self) -> GameModeId {
        match self {
            Self::StartMenu(_) => GameModeId::StartMenu,
            Self::Gameplay(_) => GameModeId::Gameplay,
            Self::GameOver(screen) | Self::Won(screen) => screen.id(),
        }
    }

    /// Applies one input event.
    pub fn handle_input(&mut self, event: InputEvent, context: &GameContext) {
        match self {
            Self::StartMenu(menu) => menu.handle_input(event),
            Self::Gameplay(gameplay) => gameplay.handle_input(event, context),
            Self::GameOver(screen) | Self::Won(screen) => screen.handle_input(event),
        }
    }

    /// Advances the mode and names the mode that should be active next.
    pub fn update(
        &mut self,
        dt: Duration,
        context: &mut GameContext,
    ) -> Result<GameModeId, ModeError> {
        match self {
            Self::StartMenu(menu) => Ok(menu.update()),
            Self::Gameplay(gameplay) => gameplay.update(dt, context),
            Self::GameOver(screen) | Self::Won(screen) => Ok(screen.update()),
        }
    }

    /// Describes the mode's current state for a backend to draw.
    pub fn render(&self, context: &GameContext) -> Result<FrameView, ModeError> {
        match self {
            Self::StartMenu(menu) => menu.render(context),
            Self::Gameplay(gameplay) => gameplay.render(context),
            Self::GameOver(screen) | Self::Won(screen) => screen.render(context),
        }
    }
}
