#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Top-level game modes and the controller that switches between them.
//!
//! Exactly one [`GameMode`] is active at a time. The
//! [`GameModeController`] routes input to it, ticks it once per frame and
//! swaps it out when its update names a different [`GameModeId`]. The
//! session-wide [`GameContext`] outlives every mode.

mod context;
mod controller;
mod gameplay;
mod menu;
mod message;
mod mode;

pub use context::{AudioHandle, FleetSetup, FontRegistry, GameContext};
pub use controller::{Dispatch, FrameStatus, GameModeController};
pub use gameplay::Gameplay;
pub use menu::StartMenu;
pub use message::MessageScreen;
pub use mode::GameMode;

use pirate_fleet_core::{FontRole, GameModeId};
use pirate_fleet_system_ships::ShipError;
use pirate_fleet_world::GridError;
use thiserror::Error;

/// Failures raised while entering, updating or rendering a mode.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModeError {
    /// No mode is registered for the requested identifier.
    #[error("no game mode registered for `{0}`")]
    UnknownMode(GameModeId),
    /// A mode asked for a font the backend never loaded.
    #[error("font for {0:?} text was not loaded")]
    MissingFont(FontRole),
    /// The spatial grid rejected a query.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// A ship could not be spawned or redrawn.
    #[error(transparent)]
    Ship(#[from] ShipError),
}
