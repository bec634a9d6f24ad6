#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Damage-stage state machine driven by a ship's hit points.
//!
//! The machine holds exactly one active [`ConditionStep`]. Each call to
//! [`ConditionFsm::advance`] runs that step once: the step publishes its
//! condition tag and may hand over to the next, more severe step. Transitions
//! only ever move downward as hit points fall, and [`ConditionStep::Sunk`] is
//! terminal, so the observed condition never regresses.

use pirate_fleet_core::ShipCondition;

/// Hit points at or below which a healthy ship becomes damaged.
pub const DAMAGED_AT: u32 = 6;

/// Hit points at or below which a damaged ship becomes very damaged.
pub const VERY_DAMAGED_AT: u32 = 3;

/// Hit points at or below which a very damaged ship sinks.
pub const SUNK_AT: u32 = 0;

/// Step currently held by a [`ConditionFsm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConditionStep {
    /// Publishes [`ShipCondition::Healthy`].
    Healthy,
    /// Publishes [`ShipCondition::Damaged`].
    Damaged,
    /// Publishes [`ShipCondition::VeryDamaged`].
    VeryDamaged,
    /// Publishes [`ShipCondition::Sunk`]; never transitions again.
    Sunk,
}

impl ConditionStep {
    /// Condition tag this step publishes when it runs.
    #[must_use]
    pub const fn condition(self) -> ShipCondition {
        match self {
            Self::Healthy => ShipCondition::Healthy,
            Self::Damaged => ShipCondition::Damaged,
            Self::VeryDamaged => ShipCondition::VeryDamaged,
            Self::Sunk => ShipCondition::Sunk,
        }
    }
}

/// Pure transition function: the step that should be held after `step` runs
/// with the provided hit points.
///
/// Each step only knows its own exit threshold, so a sudden drop from full
/// health to zero still walks through every intermediate step, one per call.
#[must_use]
pub const fn next_step(step: ConditionStep, hit_points: u32) -> ConditionStep {
    match step {
        ConditionStep::Healthy if hit_points <= DAMAGED_AT => ConditionStep::Damaged,
        ConditionStep::Damaged if hit_points <= VERY_DAMAGED_AT => ConditionStep::VeryDamaged,
        ConditionStep::VeryDamaged if hit_points <= SUNK_AT => ConditionStep::Sunk,
        other => other,
    }
}

/// Per-ship condition state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConditionFsm {
    step: ConditionStep,
    condition: ShipCondition,
}

impl ConditionFsm {
    /// Creates a machine holding the healthy step.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step: ConditionStep::Healthy,
            condition: ShipCondition::Healthy,
        }
    }

    /// Runs the held step exactly once and returns the published condition.
    pub fn advance(&mut self, hit_points: u32) -> ShipCondition {
        self.condition = self.step.condition();
        self.step = next_step(self.step, hit_points);
        self.condition
    }

    /// Condition published by the most recent step.
    #[must_use]
    pub const fn condition(&self) -> ShipCondition {
        self.condition
    }

    /// Step that will run on the next [`advance`](Self::advance).
    #[must_use]
    pub const fn step(&self) -> ConditionStep {
        self.step
    }

    /// Reports whether the terminal condition has been published.
    #[must_use]
    pub fn is_sunk(&self) -> bool {
        self.condition == ShipCondition::Sunk
    }
}

impl Default for ConditionFsm {
    fn default() -> Self {
        Self::new()
    }
}
