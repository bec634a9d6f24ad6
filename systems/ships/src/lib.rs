#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Ships, cannonballs and the fleet that ticks them.
//!
//! Each [`Ship`] owns a condition state machine and a movement controller.
//! The [`Fleet`] updates every ship and projectile exactly once per tick in
//! a fixed order (player first, then enemies and projectiles in spawn order)
//! and reports whether the battle was won or lost.

mod fleet;
mod projectile;
mod ship;

pub use fleet::{Fleet, FleetOutcome, ENEMY_FIRING_RANGE, ENEMY_RELOAD, HIT_RADIUS, PLAYER_RELOAD};
pub use projectile::{Projectile, CANNONBALL_SPEED};
pub use ship::{Ship, ShipSpec, VisualVariants, DEFAULT_HIT_POINTS, DEFAULT_SHIP_SPEED};

use thiserror::Error;

/// Contract violations detected while spawning or redrawing ships.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ShipError {
    /// A condition ordinal does not index the ship's variant list.
    #[error("visual variant index {index} outside list of {len} variants")]
    VariantOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of variants available.
        len: usize,
    },
    /// A variant list must provide one entry per ship condition.
    #[error("expected {expected} visual variants, received {actual}")]
    VariantCountMismatch {
        /// Number of ship conditions.
        expected: usize,
        /// Number of variants supplied.
        actual: usize,
    },
}
