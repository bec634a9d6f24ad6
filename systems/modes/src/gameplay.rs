use std::time::Duration;

use glam::Vec2;
use log::debug;
use pirate_fleet_core::{
    FontRole, FrameView, GameModeId, GameplayView, InputEvent, MouseButton, TextView,
};
use pirate_fleet_system_ships::{Fleet, FleetOutcome};

use crate::{GameContext, ModeError};

const SCOREBOARD_POSITION: Vec2 = Vec2::new(20.0, 20.0);

/// Sailing and fighting mode.
///
/// A fresh [`Fleet`] is spawned every time the mode is entered. Left clicks
/// steer the player toward the centre of the clicked tile, right clicks fire
/// the player's cannons at the cursor.
#[derive(Clone, Debug)]
pub struct Gameplay {
    fleet: Fleet,
}

impl Gameplay {
    /// Spawns the configured fleet and centres the viewport on the player.
    pub fn enter(context: &mut GameContext) -> Result<Self, ModeError> {
        let setup = context.fleet_setup();
        let fleet = Fleet::new(&setup.player, &setup.enemies)?;
        let focus = fleet.player().position();
        let screen_size = context.screen_size();
        context.grid_mut().center_viewport_on(focus, screen_size);
        Ok(Self { fleet })
    }

    /// Ships and projectiles of the running battle.
    #[must_use]
    pub const fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Mutable access to the running battle.
    pub fn fleet_mut(&mut self) -> &mut Fleet {
        &mut self.fleet
    }

    pub(crate) fn handle_input(&mut self, event: InputEvent, context: &GameContext) {
        let InputEvent::MouseDown { position, button } = event else {
            return;
        };

        let grid = context.grid();
        let world = grid.screen_to_world(position);
        match button {
            MouseButton::Left => {
                let tile = grid.world_to_tile(world);
                match grid.cost(world) {
                    Ok(cost) => {
                        let waypoint = grid.tile_to_world(tile);
                        debug!("player ordered to {waypoint} (tile cost {cost})");
                        self.fleet.player_mut().set_path([waypoint]);
                    }
                    Err(error) => debug!("ignoring order: {error}"),
                }
            }
            MouseButton::Right => {
                if !self.fleet.player_fire(world) {
                    debug!("player cannons still reloading");
                }
            }
            MouseButton::Middle => {}
        }
    }

    pub(crate) fn update(
        &mut self,
        dt: Duration,
        context: &mut GameContext,
    ) -> Result<GameModeId, ModeError> {
        let outcome = self.fleet.update(dt, context.grid().islands())?;

        let focus = self.fleet.player().position();
        let screen_size = context.screen_size();
        context.grid_mut().center_viewport_on(focus, screen_size);

        Ok(match outcome {
            FleetOutcome::Ongoing => GameModeId::Gameplay,
            FleetOutcome::Defeat => GameModeId::GameOver,
            FleetOutcome::Victory => GameModeId::Won,
        })
    }

    pub(crate) fn render(&self, context: &GameContext) -> Result<FrameView, ModeError> {
        let scoreboard = TextView {
            content: format!("Score: {}", self.fleet.score()),
            font: context.fonts().get(FontRole::Scoreboard)?,
            position: SCOREBOARD_POSITION,
        };

        let ships = std::iter::once(self.fleet.player())
            .chain(self.fleet.enemies())
            .map(|ship| ship.view())
            .collect();

        Ok(FrameView::Gameplay(GameplayView {
            viewport_origin: context.grid().viewport_origin(),
            islands: context.grid().islands().to_vec(),
            ships,
            projectiles: self
                .fleet
                .projectiles()
                .iter()
                .map(|projectile| projectile.view())
                .collect(),
            scoreboard,
        }))
    }
}
