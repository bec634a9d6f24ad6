use glam::Vec2;
use pirate_fleet_core::{
    FontRole, FrameView, GameModeId, InputEvent, MessageView, MouseButton, TextView,
};

use crate::{GameContext, ModeError};

const HEADLINE_POSITION: Vec2 = Vec2::new(100.0, 325.0);
const PROMPT_POSITION: Vec2 = Vec2::new(500.0, 470.0);
const PROMPT: &str = "Click to return to the main menu";

/// Full-screen message shown when a battle ends; a left click returns to the menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageScreen {
    id: GameModeId,
    headline: &'static str,
    acknowledged: bool,
}

impl MessageScreen {
    /// Screen shown after the player's ship sinks.
    #[must_use]
    pub const fn game_over() -> Self {
        Self::new(GameModeId::GameOver, "Your ship has sunk, you lost!")
    }

    /// Screen shown after every enemy ship sinks.
    #[must_use]
    pub const fn won() -> Self {
        Self::new(GameModeId::Won, "Congratulations, you won!")
    }

    const fn new(id: GameModeId, headline: &'static str) -> Self {
        Self {
            id,
            headline,
            acknowledged: false,
        }
    }

    /// Identifier of the mode this screen stands for.
    #[must_use]
    pub const fn id(&self) -> GameModeId {
        self.id
    }

    pub(crate) fn handle_input(&mut self, event: InputEvent) {
        if let InputEvent::MouseDown {
            button: MouseButton::Left,
            ..
        } = event
        {
            self.acknowledged = true;
        }
    }

    pub(crate) fn update(&mut self) -> GameModeId {
        if std::mem::take(&mut self.acknowledged) {
            GameModeId::StartMenu
        } else {
            self.id
        }
    }

    pub(crate) fn render(&self, context: &GameContext) -> Result<FrameView, ModeError> {
        Ok(FrameView::Message(MessageView {
            headline: TextView {
                content: self.headline.to_owned(),
                font: context.fonts().get(FontRole::Menu)?,
                position: HEADLINE_POSITION,
            },
            prompt: TextView {
                content: PROMPT.to_owned(),
                font: context.fonts().get(FontRole::Debug)?,
                position: PROMPT_POSITION,
            },
        }))
    }
}
