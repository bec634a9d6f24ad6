use std::{collections::VecDeque, time::Duration};

use glam::Vec2;
use log::debug;
use pirate_fleet_core::{Allegiance, ShipCondition, ShipView, VariantId};
use pirate_fleet_system_condition::ConditionFsm;
use pirate_fleet_system_movement::{heading_towards, MovementController};

use crate::ShipError;

/// Hit points every ship starts with unless configured otherwise.
pub const DEFAULT_HIT_POINTS: u32 = 10;

/// Segments per second covered by a ship unless configured otherwise.
pub const DEFAULT_SHIP_SPEED: f32 = 0.5;

/// Visual variants of a ship, one per [`ShipCondition`] in severity order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualVariants {
    variants: Vec<VariantId>,
}

impl VisualVariants {
    /// Wraps a loader-supplied list, which must hold exactly one variant per condition.
    pub fn new(variants: Vec<VariantId>) -> Result<Self, ShipError> {
        if variants.len() != ShipCondition::COUNT {
            return Err(ShipError::VariantCountMismatch {
                expected: ShipCondition::COUNT,
                actual: variants.len(),
            });
        }

        Ok(Self { variants })
    }

    /// Variant to draw for the provided condition.
    pub fn select(&self, condition: ShipCondition) -> Result<VariantId, ShipError> {
        let index = condition.ordinal();
        self.variants
            .get(index)
            .copied()
            .ok_or(ShipError::VariantOutOfRange {
                index,
                len: self.variants.len(),
            })
    }

    /// All variants in condition order.
    #[must_use]
    pub fn as_slice(&self) -> &[VariantId] {
        &self.variants
    }
}

/// Everything needed to spawn a ship.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipSpec {
    /// Side the ship fights for.
    pub allegiance: Allegiance,
    /// Spawn position in world units.
    pub spawn: Vec2,
    /// Starting hit points.
    pub hit_points: u32,
    /// Segments per second covered while sailing.
    pub speed: f32,
    /// Visual variants indexed by condition.
    pub variants: VisualVariants,
}

/// A player or enemy ship.
#[derive(Clone, Debug)]
pub struct Ship {
    allegiance: Allegiance,
    hit_points: u32,
    condition: ConditionFsm,
    previous_condition: ShipCondition,
    movement: MovementController,
    previous_position: Vec2,
    path: VecDeque<Vec2>,
    speed: f32,
    travel: Vec2,
    heading_degrees: f32,
    variants: VisualVariants,
    variant: VariantId,
    reload: Duration,
}

impl Ship {
    /// Spawns a healthy ship resting at its spawn point.
    pub fn spawn(spec: &ShipSpec) -> Result<Self, ShipError> {
        let variant = spec.variants.select(ShipCondition::Healthy)?;
        Ok(Self {
            allegiance: spec.allegiance,
            hit_points: spec.hit_points,
            condition: ConditionFsm::new(),
            previous_condition: ShipCondition::Healthy,
            movement: MovementController::at(spec.spawn),
            previous_position: spec.spawn,
            path: VecDeque::new(),
            speed: spec.speed,
            travel: Vec2::ZERO,
            heading_degrees: 0.0,
            variants: spec.variants.clone(),
            variant,
            reload: Duration::ZERO,
        })
    }

    /// Side the ship fights for.
    #[must_use]
    pub const fn allegiance(&self) -> Allegiance {
        self.allegiance
    }

    /// Current position in world units.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.movement.position()
    }

    /// Point the ship is currently sailing toward.
    #[must_use]
    pub const fn destination(&self) -> Vec2 {
        self.movement.destination()
    }

    /// Waypoints still queued after the current destination.
    pub fn path(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.path.iter().copied()
    }

    /// Travel vector of the current segment; zero while resting.
    #[must_use]
    pub const fn travel(&self) -> Vec2 {
        self.travel
    }

    /// Sprite rotation in degrees relative to the north-facing default.
    #[must_use]
    pub const fn heading_degrees(&self) -> f32 {
        self.heading_degrees
    }

    /// Remaining hit points.
    #[must_use]
    pub const fn hit_points(&self) -> u32 {
        self.hit_points
    }

    /// Condition observed at the last update.
    #[must_use]
    pub const fn condition(&self) -> ShipCondition {
        self.previous_condition
    }

    /// Visual variant selected for the observed condition.
    #[must_use]
    pub const fn variant(&self) -> VariantId {
        self.variant
    }

    /// Reports whether the ship has been observed sunk.
    #[must_use]
    pub fn is_sunk(&self) -> bool {
        self.previous_condition == ShipCondition::Sunk
    }

    /// Replaces the waypoint path; the ship stops and heads for the first waypoint next tick.
    pub fn set_path<I>(&mut self, waypoints: I)
    where
        I: IntoIterator<Item = Vec2>,
    {
        self.path = waypoints.into_iter().collect();
        self.movement.place(self.movement.position());
    }

    /// Removes hit points, never dropping below zero.
    pub fn apply_damage(&mut self, amount: u32) {
        self.hit_points = self.hit_points.saturating_sub(amount);
    }

    /// Returns the ship to where it was before the last update and drops its path.
    pub fn move_back(&mut self) {
        self.movement.place(self.previous_position);
        self.path.clear();
        self.travel = Vec2::ZERO;
    }

    /// Reports whether the cannons are loaded.
    #[must_use]
    pub fn can_fire(&self) -> bool {
        !self.is_sunk() && self.reload.is_zero()
    }

    /// Starts reloading after a shot.
    pub fn reload_for(&mut self, duration: Duration) {
        self.reload = duration;
    }

    /// Advances movement and the condition machine by one tick.
    ///
    /// Returns the new condition when it changed and the ship was redrawn.
    pub fn update(&mut self, dt: Duration) -> Result<Option<ShipCondition>, ShipError> {
        self.previous_position = self.position();
        self.reload = self.reload.saturating_sub(dt);

        if !self.is_sunk() {
            self.steer();
            let _ = self.movement.advance(self.speed, dt);
        }

        let condition = self.condition.advance(self.hit_points);
        if condition == self.previous_condition {
            return Ok(None);
        }

        self.redraw(condition)?;
        debug!(
            "{:?} ship changed condition {:?} -> {:?}",
            self.allegiance, self.previous_condition, condition
        );
        self.previous_condition = condition;
        if condition == ShipCondition::Sunk {
            self.path.clear();
            self.movement.place(self.position());
            self.travel = Vec2::ZERO;
        }
        Ok(Some(condition))
    }

    /// Snapshot handed to renderers.
    #[must_use]
    pub fn view(&self) -> ShipView {
        ShipView {
            allegiance: self.allegiance,
            position: self.position(),
            heading_degrees: self.heading_degrees,
            condition: self.previous_condition,
            variant: self.variant,
        }
    }

    fn steer(&mut self) {
        if !self.movement.has_arrived() {
            return;
        }

        let Some(waypoint) = self.path.pop_front() else {
            self.travel = Vec2::ZERO;
            return;
        };

        let position = self.position();
        self.movement.retarget(waypoint);
        self.travel = waypoint - position;
        if self.travel != Vec2::ZERO {
            self.heading_degrees = heading_towards(position, waypoint);
        }
        debug!(
            "{:?} ship sailing from {position} to {waypoint}, heading {:.1}",
            self.allegiance, self.heading_degrees
        );
    }

    fn redraw(&mut self, condition: ShipCondition) -> Result<(), ShipError> {
        self.variant = self.variants.select(condition)?;
        Ok(())
    }
}
