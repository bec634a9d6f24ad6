use std::time::Duration;

use glam::Vec2;
use pirate_fleet_core::{Allegiance, IslandRect, ShipCondition, VariantId};
use pirate_fleet_system_ships::{
    Fleet, FleetOutcome, Ship, ShipSpec, VisualVariants, ENEMY_RELOAD, HIT_RADIUS,
};

const FRAME: Duration = Duration::from_millis(250);

fn variants(first: u32) -> VisualVariants {
    VisualVariants::new((0..4).map(|step| VariantId::new(first + step * 6)).collect())
        .expect("one variant per condition")
}

fn spec(allegiance: Allegiance, spawn: Vec2, hit_points: u32) -> ShipSpec {
    ShipSpec {
        allegiance,
        spawn,
        hit_points,
        speed: 1.0,
        variants: variants(if allegiance == Allegiance::Player { 2 } else { 4 }),
    }
}

fn tick(fleet: &mut Fleet, frames: usize) -> FleetOutcome {
    let mut outcome = FleetOutcome::Ongoing;
    for _ in 0..frames {
        outcome = fleet.update(FRAME, &[]).expect("fleet update");
    }
    outcome
}

#[test]
fn ship_follows_waypoints_in_order() {
    let mut ship = Ship::spawn(&spec(Allegiance::Player, Vec2::ZERO, 10)).expect("spawn");
    ship.set_path([Vec2::new(100.0, 0.0), Vec2::new(100.0, 100.0)]);

    let _ = ship.update(FRAME).expect("update");
    assert_eq!(ship.destination(), Vec2::new(100.0, 0.0));
    assert_eq!(ship.travel(), Vec2::new(100.0, 0.0));
    assert!((ship.heading_degrees() - 90.0).abs() < 1e-4);
    assert_eq!(ship.path().collect::<Vec<_>>(), vec![Vec2::new(100.0, 100.0)]);

    for _ in 0..3 {
        let _ = ship.update(FRAME).expect("update");
    }
    assert_eq!(ship.position(), Vec2::new(100.0, 0.0));

    let _ = ship.update(FRAME).expect("update");
    assert_eq!(ship.destination(), Vec2::new(100.0, 100.0));
    assert!(ship.heading_degrees().abs() < 1e-4);

    for _ in 0..3 {
        let _ = ship.update(FRAME).expect("update");
    }
    assert_eq!(ship.position(), Vec2::new(100.0, 100.0));

    let _ = ship.update(FRAME).expect("update");
    assert_eq!(ship.travel(), Vec2::ZERO);
    assert_eq!(ship.position(), Vec2::new(100.0, 100.0));
}

#[test]
fn each_condition_change_redraws_once() {
    let mut ship = Ship::spawn(&spec(Allegiance::Enemy, Vec2::ZERO, 10)).expect("spawn");
    assert_eq!(ship.variant(), VariantId::new(4));

    let mut redraws = Vec::new();
    for _ in 0..10 {
        ship.apply_damage(1);
        for _ in 0..2 {
            if let Some(condition) = ship.update(FRAME).expect("update") {
                redraws.push(condition);
                assert_eq!(
                    ship.variant(),
                    variants(4).as_slice()[condition.ordinal()]
                );
            }
        }
    }

    assert_eq!(
        redraws,
        vec![
            ShipCondition::Damaged,
            ShipCondition::VeryDamaged,
            ShipCondition::Sunk
        ]
    );
    assert_eq!(ship.hit_points(), 0);
    assert!(ship.is_sunk());
    assert_eq!(ship.variant(), VariantId::new(22));
}

#[test]
fn sunk_ships_stop_sailing() {
    let mut ship = Ship::spawn(&spec(Allegiance::Enemy, Vec2::ZERO, 0)).expect("spawn");
    ship.set_path([Vec2::new(500.0, 0.0)]);
    for _ in 0..4 {
        let _ = ship.update(Duration::from_millis(10)).expect("update");
    }
    assert!(ship.is_sunk());

    let resting = ship.position();
    for _ in 0..8 {
        let _ = ship.update(FRAME).expect("update");
    }
    assert_eq!(ship.position(), resting);
    assert!(!ship.can_fire());
}

#[test]
fn player_cannonball_damages_enemy_in_blast_radius() {
    let enemy_at = Vec2::new(200.0, 0.0);
    let mut fleet = Fleet::new(
        &spec(Allegiance::Player, Vec2::ZERO, 10),
        &[
            spec(Allegiance::Enemy, enemy_at, 10),
            spec(Allegiance::Enemy, Vec2::new(200.0, HIT_RADIUS * 3.0), 10),
        ],
    )
    .expect("fleet");

    assert!(fleet.player_fire(enemy_at + Vec2::new(HIT_RADIUS * 0.5, 0.0)));
    assert!(!fleet.player_fire(enemy_at), "cannons should be reloading");
    assert_eq!(fleet.projectiles().len(), 1);

    let _ = tick(&mut fleet, 1);
    assert!(fleet.projectiles().is_empty());
    assert_eq!(fleet.enemies()[0].hit_points(), 9);
    assert_eq!(fleet.enemies()[1].hit_points(), 10);
    assert_eq!(fleet.player().hit_points(), 10);
}

#[test]
fn enemies_fire_at_player_in_range_after_reloading() {
    let mut fleet = Fleet::new(
        &spec(Allegiance::Player, Vec2::ZERO, 10),
        &[
            spec(Allegiance::Enemy, Vec2::new(100.0, 0.0), 10),
            spec(Allegiance::Enemy, Vec2::new(5000.0, 0.0), 10),
        ],
    )
    .expect("fleet");

    let reload_frames = (ENEMY_RELOAD.as_millis() / FRAME.as_millis()) as usize;
    let _ = tick(&mut fleet, reload_frames - 1);
    assert!(fleet.projectiles().is_empty());
    assert_eq!(fleet.player().hit_points(), 10);

    let _ = tick(&mut fleet, 1);
    assert_eq!(fleet.projectiles().len(), 1);
    assert_eq!(fleet.projectiles()[0].shooter(), Allegiance::Enemy);

    let _ = tick(&mut fleet, 1);
    assert!(fleet.projectiles().is_empty());
    assert_eq!(fleet.player().hit_points(), 9);
}

#[test]
fn cannonballs_spare_ships_on_the_shooters_side() {
    let mut fleet = Fleet::new(
        &spec(Allegiance::Player, Vec2::ZERO, 10),
        &[
            spec(Allegiance::Enemy, Vec2::new(100.0, 0.0), 10),
            spec(Allegiance::Enemy, Vec2::new(10.0, 0.0), 10),
        ],
    )
    .expect("fleet");
    assert!(Vec2::new(10.0, 0.0).length() <= HIT_RADIUS);

    let reload_frames = (ENEMY_RELOAD.as_millis() / FRAME.as_millis()) as usize;
    let _ = tick(&mut fleet, reload_frames + 1);

    assert!(fleet.projectiles().is_empty());
    assert_eq!(fleet.player().hit_points(), 8);
    assert!(fleet.enemies().iter().all(|enemy| enemy.hit_points() == 10));
}

#[test]
fn player_is_moved_back_off_islands() {
    let mut fleet = Fleet::new(
        &spec(Allegiance::Player, Vec2::ZERO, 10),
        &[spec(Allegiance::Enemy, Vec2::new(5000.0, 5000.0), 10)],
    )
    .expect("fleet");
    let island = IslandRect::new(60.0, -50.0, 100.0, 100.0);
    fleet.player_mut().set_path([Vec2::new(200.0, 0.0)]);

    let mut last_free = Vec2::ZERO;
    for _ in 0..8 {
        let _ = fleet.update(FRAME, &[island]).expect("update");
        let position = fleet.player().position();
        assert!(!island.contains(position), "player entered island at {position}");
        last_free = position;
    }

    assert_eq!(last_free, Vec2::new(50.0, 0.0));
    assert_eq!(fleet.player().path().count(), 0);
}

#[test]
fn sinking_the_player_is_a_defeat() {
    let mut fleet = Fleet::new(
        &spec(Allegiance::Player, Vec2::ZERO, 10),
        &[spec(Allegiance::Enemy, Vec2::new(5000.0, 0.0), 10)],
    )
    .expect("fleet");
    assert_eq!(tick(&mut fleet, 1), FleetOutcome::Ongoing);

    fleet.player_mut().apply_damage(10);
    assert_eq!(tick(&mut fleet, ShipCondition::COUNT), FleetOutcome::Defeat);
}

#[test]
fn sinking_every_enemy_is_a_victory_and_scores() {
    let mut fleet = Fleet::new(
        &spec(Allegiance::Player, Vec2::ZERO, 10),
        &[
            spec(Allegiance::Enemy, Vec2::new(5000.0, 0.0), 10),
            spec(Allegiance::Enemy, Vec2::new(6000.0, 0.0), 10),
        ],
    )
    .expect("fleet");

    fleet.enemies_mut()[0].apply_damage(10);
    assert_eq!(tick(&mut fleet, ShipCondition::COUNT), FleetOutcome::Ongoing);
    assert_eq!(fleet.score(), 1);

    fleet.enemies_mut()[1].apply_damage(10);
    assert_eq!(tick(&mut fleet, ShipCondition::COUNT), FleetOutcome::Victory);
    assert_eq!(fleet.score(), 2);
}

#[test]
fn empty_enemy_list_is_an_immediate_victory() {
    let mut fleet = Fleet::new(&spec(Allegiance::Player, Vec2::ZERO, 10), &[]).expect("fleet");
    assert_eq!(tick(&mut fleet, 1), FleetOutcome::Victory);
}
