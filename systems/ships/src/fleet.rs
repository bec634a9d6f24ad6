use std::time::Duration;

use glam::Vec2;
use log::{debug, info};
use pirate_fleet_core::{Allegiance, IslandRect, ShipCondition};

use crate::{Projectile, Ship, ShipError, ShipSpec};

/// Distance from a landing cannonball within which ships take a hit.
pub const HIT_RADIUS: f32 = 32.0;

/// Distance within which enemies open fire on the player.
pub const ENEMY_FIRING_RANGE: f32 = 320.0;

/// Time enemies need to reload between shots.
pub const ENEMY_RELOAD: Duration = Duration::from_secs(3);

/// Time the player needs to reload between shots.
pub const PLAYER_RELOAD: Duration = Duration::from_millis(500);

/// Result of a fleet update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetOutcome {
    /// The battle continues.
    Ongoing,
    /// The player's ship has sunk.
    Defeat,
    /// Every enemy ship has sunk.
    Victory,
}

/// The player's ship, the enemy ships and every cannonball in flight.
#[derive(Clone, Debug)]
pub struct Fleet {
    player: Ship,
    enemies: Vec<Ship>,
    projectiles: Vec<Projectile>,
    score: u32,
}

impl Fleet {
    /// Spawns the player and enemies described by the specs.
    ///
    /// Enemies start reloading so nobody fires on the first frame.
    pub fn new(player: &ShipSpec, enemies: &[ShipSpec]) -> Result<Self, ShipError> {
        let player = Ship::spawn(player)?;
        let enemies = enemies
            .iter()
            .map(|spec| {
                let mut ship = Ship::spawn(spec)?;
                ship.reload_for(ENEMY_RELOAD);
                Ok(ship)
            })
            .collect::<Result<Vec<_>, ShipError>>()?;

        Ok(Self {
            player,
            enemies,
            projectiles: Vec::new(),
            score: 0,
        })
    }

    /// The player's ship.
    #[must_use]
    pub const fn player(&self) -> &Ship {
        &self.player
    }

    /// Mutable access to the player's ship.
    pub fn player_mut(&mut self) -> &mut Ship {
        &mut self.player
    }

    /// Enemy ships in spawn order.
    #[must_use]
    pub fn enemies(&self) -> &[Ship] {
        &self.enemies
    }

    /// Mutable access to the enemy ships.
    pub fn enemies_mut(&mut self) -> &mut [Ship] {
        &mut self.enemies
    }

    /// Cannonballs in flight, in firing order.
    #[must_use]
    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Enemies sunk so far.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Fires the player's cannons at `target` if they are loaded.
    ///
    /// Returns whether a cannonball left the ship.
    pub fn player_fire(&mut self, target: Vec2) -> bool {
        if !self.player.can_fire() {
            return false;
        }

        let spawn = self.player.position();
        self.player.reload_for(PLAYER_RELOAD);
        self.launch(Allegiance::Player, spawn, target);
        true
    }

    /// Advances every ship, every cannonball and the enemy gunners by one tick.
    ///
    /// A player that sails into an island is moved back to its previous position.
    /// Enemy volleys fired during the tick start flying on the next one.
    pub fn update(
        &mut self,
        dt: Duration,
        islands: &[IslandRect],
    ) -> Result<FleetOutcome, ShipError> {
        let _ = self.player.update(dt)?;
        if islands
            .iter()
            .any(|island| island.contains(self.player.position()))
        {
            debug!("player ran aground at {}", self.player.position());
            self.player.move_back();
        }

        for enemy in &mut self.enemies {
            if enemy.update(dt)? == Some(ShipCondition::Sunk) {
                self.score = self.score.saturating_add(1);
                info!("enemy sunk, score {}", self.score);
            }
        }

        self.resolve_projectiles(dt);
        self.enemy_gunnery();
        Ok(self.outcome())
    }

    /// Reports the state of the battle as last observed.
    #[must_use]
    pub fn outcome(&self) -> FleetOutcome {
        if self.player.is_sunk() {
            FleetOutcome::Defeat
        } else if self.enemies.iter().all(Ship::is_sunk) {
            FleetOutcome::Victory
        } else {
            FleetOutcome::Ongoing
        }
    }

    fn enemy_gunnery(&mut self) {
        if self.player.is_sunk() {
            return;
        }

        let target = self.player.position();
        let mut volleys = Vec::new();
        for enemy in &mut self.enemies {
            if enemy.can_fire() && enemy.position().distance(target) <= ENEMY_FIRING_RANGE {
                enemy.reload_for(ENEMY_RELOAD);
                volleys.push(enemy.position());
            }
        }

        for spawn in volleys {
            self.launch(Allegiance::Enemy, spawn, target);
        }
    }

    fn launch(&mut self, shooter: Allegiance, spawn: Vec2, target: Vec2) {
        debug!("{shooter:?} fired from {spawn} at {target}");
        self.projectiles.push(Projectile::fire(shooter, spawn, target));
    }

    fn resolve_projectiles(&mut self, dt: Duration) {
        let mut impacts = Vec::new();
        self.projectiles.retain_mut(|projectile| {
            if projectile.update(dt) {
                impacts.push((projectile.shooter(), projectile.position()));
                false
            } else {
                true
            }
        });

        for (shooter, point) in impacts {
            let ships = std::iter::once(&mut self.player).chain(self.enemies.iter_mut());
            for ship in ships {
                if ship.allegiance() != shooter
                    && !ship.is_sunk()
                    && ship.position().distance(point) <= HIT_RADIUS
                {
                    ship.apply_damage(1);
                    debug!(
                        "{:?} ship hit, {} hit points left",
                        ship.allegiance(),
                        ship.hit_points()
                    );
                }
            }
        }
    }
}
