#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic clamped interpolation of moving points.
//!
//! A [`MovementController`] carries a point from the position it held when it
//! was last retargeted toward its destination. Every advance adds
//! `speed * dt` to the travelled fraction of the segment, clamped so the
//! point lands exactly on the destination and never overshoots it.
//!
//! Interpolating from the segment start rather than the current position keeps
//! arrival exact: once the summed `speed * dt` reaches one the point is on the
//! destination, however the frame times were split.

use std::time::Duration;

use glam::Vec2;

/// Travelled fractions within this distance of one count as arrival, so
/// rounding in accumulated frame times cannot strand a point just short of
/// its destination.
const ARRIVAL_TOLERANCE: f32 = 1.0e-5;

/// Fraction of a segment covered by one advance, clamped to `0.0..=1.0`.
#[must_use]
pub fn interpolation_factor(speed: f32, dt: Duration) -> f32 {
    (speed * dt.as_secs_f32()).clamp(0.0, 1.0)
}

/// Sprite rotation in degrees for travel from `from` to `to`.
///
/// Sprites face north by default, hence the quarter-turn offset from the
/// mathematical angle of the travel vector.
#[must_use]
pub fn heading_towards(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    90.0 - delta.y.atan2(delta.x).to_degrees()
}

/// Moves a point along straight segments with clamped linear interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementController {
    origin: Vec2,
    destination: Vec2,
    position: Vec2,
    progress: f32,
}

impl MovementController {
    /// Creates an idle controller resting at `position`.
    #[must_use]
    pub const fn at(position: Vec2) -> Self {
        Self {
            origin: position,
            destination: position,
            position,
            progress: 1.0,
        }
    }

    /// Creates a controller already travelling from `origin` to `destination`.
    #[must_use]
    pub fn travelling(origin: Vec2, destination: Vec2) -> Self {
        let mut controller = Self::at(origin);
        controller.retarget(destination);
        controller
    }

    /// Current interpolated position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Point the controller is travelling toward.
    #[must_use]
    pub const fn destination(&self) -> Vec2 {
        self.destination
    }

    /// Reports whether the point rests on its destination.
    #[must_use]
    pub fn has_arrived(&self) -> bool {
        self.position == self.destination
    }

    /// Starts a new segment from the current position toward `destination`.
    pub fn retarget(&mut self, destination: Vec2) {
        self.origin = self.position;
        self.destination = destination;
        self.progress = if self.position == destination { 1.0 } else { 0.0 };
    }

    /// Places the point at `position` and drops any pending travel.
    pub fn place(&mut self, position: Vec2) {
        *self = Self::at(position);
    }

    /// Advances along the current segment and returns the new position.
    ///
    /// Resting controllers are left untouched.
    pub fn advance(&mut self, speed: f32, dt: Duration) -> Vec2 {
        if self.has_arrived() {
            return self.position;
        }

        self.progress = (self.progress + interpolation_factor(speed, dt)).min(1.0);
        self.position = if self.progress >= 1.0 - ARRIVAL_TOLERANCE {
            self.progress = 1.0;
            self.destination
        } else {
            self.origin.lerp(self.destination, self.progress)
        };
        self.position
    }
}
