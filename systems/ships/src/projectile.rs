use std::time::Duration;

use glam::Vec2;
use pirate_fleet_core::{Allegiance, ProjectileView};
use pirate_fleet_system_movement::MovementController;

/// Segments per second covered by a cannonball.
pub const CANNONBALL_SPEED: f32 = 8.0;

/// A cannonball flying from its spawn point to its destination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    shooter: Allegiance,
    spawn: Vec2,
    movement: MovementController,
}

impl Projectile {
    /// Fires a cannonball from `spawn` toward `destination`.
    #[must_use]
    pub fn fire(shooter: Allegiance, spawn: Vec2, destination: Vec2) -> Self {
        Self {
            shooter,
            spawn,
            movement: MovementController::travelling(spawn, destination),
        }
    }

    /// Side that fired the cannonball.
    #[must_use]
    pub const fn shooter(&self) -> Allegiance {
        self.shooter
    }

    /// Point the cannonball was fired from.
    #[must_use]
    pub const fn spawn(&self) -> Vec2 {
        self.spawn
    }

    /// Point the cannonball will land on.
    #[must_use]
    pub const fn destination(&self) -> Vec2 {
        self.movement.destination()
    }

    /// Current interpolated position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.movement.position()
    }

    /// Reports whether the cannonball reached its destination.
    #[must_use]
    pub fn has_landed(&self) -> bool {
        self.movement.has_arrived()
    }

    /// Moves the cannonball and reports whether it landed.
    pub fn update(&mut self, dt: Duration) -> bool {
        let _ = self.movement.advance(CANNONBALL_SPEED, dt);
        self.has_landed()
    }

    /// Snapshot handed to renderers.
    #[must_use]
    pub const fn view(&self) -> ProjectileView {
        ProjectileView {
            position: self.position(),
        }
    }
}
