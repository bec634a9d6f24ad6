use std::time::Duration;

use glam::Vec2;
use pirate_fleet_core::{
    Allegiance, FontHandle, FontRole, FrameView, GameModeId, InputEvent, Key, MenuEntry,
    MouseButton, ShipCondition, VariantId,
};
use pirate_fleet_system_modes::{
    AudioHandle, Dispatch, FleetSetup, FontRegistry, FrameStatus, GameContext, GameMode,
    GameModeController, ModeError, StartMenu,
};
use pirate_fleet_system_ships::{ShipSpec, VisualVariants};
use pirate_fleet_world::{SpatialGrid, TileSize};

const FRAME: Duration = Duration::from_millis(16);
const PLAYER_SPAWN: Vec2 = Vec2::new(1280.0, 960.0);

fn ship(allegiance: Allegiance, spawn: Vec2) -> ShipSpec {
    ShipSpec {
        allegiance,
        spawn,
        hit_points: 10,
        speed: 0.5,
        variants: VisualVariants::new((0..4).map(VariantId::new).collect())
            .expect("one variant per condition"),
    }
}

fn fonts() -> FontRegistry {
    FontRegistry::new()
        .with(FontRole::Scoreboard, FontHandle::new(0, 72))
        .with(FontRole::Menu, FontHandle::new(0, 128))
        .with(FontRole::Debug, FontHandle::new(1, 32))
}

fn context_with(fonts: FontRegistry) -> GameContext {
    let grid = SpatialGrid::new(40, 30, TileSize::new(64.0, 64.0).expect("tile size"))
        .expect("grid");
    let fleet = FleetSetup {
        player: ship(Allegiance::Player, PLAYER_SPAWN),
        enemies: vec![
            ship(Allegiance::Enemy, Vec2::new(200.0, 200.0)),
            ship(Allegiance::Enemy, Vec2::new(2300.0, 1700.0)),
        ],
    };
    GameContext::new(
        fonts,
        AudioHandle::new(0.5),
        grid,
        fleet,
        Vec2::new(800.0, 600.0),
    )
}

fn controller() -> GameModeController {
    GameModeController::new(context_with(fonts()))
}

fn left_click(position: Vec2) -> InputEvent {
    InputEvent::MouseDown {
        position,
        button: MouseButton::Left,
    }
}

fn entry_centre(index: usize) -> Vec2 {
    let (top_left, size) = StartMenu::entry_bounds(index);
    top_left + size * 0.5
}

fn menu(controller: &GameModeController) -> &StartMenu {
    match controller.active_mode() {
        Some(GameMode::StartMenu(menu)) => menu,
        other => panic!("expected start menu, found {other:?}"),
    }
}

fn start_game(controller: &mut GameModeController) {
    let status = controller
        .run_frame([left_click(entry_centre(0))], FRAME)
        .expect("frame");
    assert_eq!(status, FrameStatus::Running);
    assert_eq!(controller.active_id(), GameModeId::Gameplay);
}

fn sink(ship: &mut pirate_fleet_system_ships::Ship) {
    ship.apply_damage(u32::MAX);
}

#[test]
fn defeat_returns_to_a_fresh_start_menu() {
    let mut controller = controller();
    assert_eq!(controller.active_id(), GameModeId::StartMenu);

    let _ = controller
        .run_frame([InputEvent::KeyDown(Key::Down)], FRAME)
        .expect("frame");
    assert_eq!(menu(&controller).highlighted(), MenuEntry::Quit);

    start_game(&mut controller);

    match controller.active_mode_mut() {
        Some(GameMode::Gameplay(gameplay)) => sink(gameplay.fleet_mut().player_mut()),
        other => panic!("expected gameplay, found {other:?}"),
    }
    for _ in 0..ShipCondition::COUNT - 1 {
        let _ = controller.run_frame([], FRAME).expect("frame");
        assert_eq!(controller.active_id(), GameModeId::Gameplay);
    }
    let _ = controller.run_frame([], FRAME).expect("frame");
    assert_eq!(controller.active_id(), GameModeId::GameOver);

    let _ = controller.run_frame([], FRAME).expect("frame");
    assert_eq!(controller.active_id(), GameModeId::GameOver);

    let _ = controller
        .run_frame([left_click(Vec2::new(10.0, 10.0))], FRAME)
        .expect("frame");
    assert_eq!(controller.active_id(), GameModeId::StartMenu);
    assert_eq!(menu(&controller).highlighted(), MenuEntry::Start);
}

#[test]
fn sinking_every_enemy_shows_the_won_screen() {
    let mut controller = controller();
    start_game(&mut controller);

    match controller.active_mode_mut() {
        Some(GameMode::Gameplay(gameplay)) => {
            for enemy in gameplay.fleet_mut().enemies_mut() {
                sink(enemy);
            }
        }
        other => panic!("expected gameplay, found {other:?}"),
    }
    for _ in 0..ShipCondition::COUNT {
        let _ = controller.run_frame([], FRAME).expect("frame");
    }
    assert_eq!(controller.active_id(), GameModeId::Won);

    let Some(FrameView::Message(message)) = controller.render().expect("render") else {
        panic!("won screen should render a message");
    };
    assert_eq!(message.headline.content, "Congratulations, you won!");
    assert_eq!(message.prompt.content, "Click to return to the main menu");
}

#[test]
fn mode_state_survives_ticks_that_name_the_same_mode() {
    let mut controller = controller();
    let _ = controller
        .run_frame([InputEvent::KeyDown(Key::Down)], FRAME)
        .expect("frame");
    for _ in 0..5 {
        assert_eq!(controller.tick(FRAME), Ok(GameModeId::StartMenu));
    }
    assert_eq!(menu(&controller).highlighted(), MenuEntry::Quit);
}

#[test]
fn quit_short_circuits_the_frame() {
    for quit in [InputEvent::Quit, InputEvent::KeyDown(Key::Escape)] {
        let mut controller = controller();
        let status = controller
            .run_frame([quit, InputEvent::KeyDown(Key::M)], FRAME)
            .expect("frame");

        assert_eq!(status, FrameStatus::Stopped);
        assert!(!controller.is_running());
        assert_eq!(controller.active_id(), GameModeId::Exit);
        assert_eq!(controller.context().audio().volume(), 0.5);
        assert_eq!(controller.render(), Ok(None));
        assert_eq!(controller.tick(FRAME), Ok(GameModeId::Exit));
    }
}

#[test]
fn confirming_quit_stops_the_loop() {
    let mut controller = controller();
    let status = controller
        .run_frame(
            [
                InputEvent::KeyDown(Key::Up),
                InputEvent::KeyDown(Key::Enter),
            ],
            FRAME,
        )
        .expect("frame");
    assert_eq!(status, FrameStatus::Stopped);
    assert_eq!(controller.active_id(), GameModeId::Exit);
}

#[test]
fn global_shortcuts_are_consumed() {
    let mut controller = controller();

    assert_eq!(
        controller.dispatch_input(InputEvent::KeyDown(Key::M)),
        Dispatch::Consumed
    );
    assert_eq!(controller.context().audio().volume(), 0.0);
    assert_eq!(
        controller.dispatch_input(InputEvent::KeyDown(Key::M)),
        Dispatch::Consumed
    );
    assert_eq!(controller.context().audio().volume(), 0.5);

    assert_eq!(
        controller.dispatch_input(InputEvent::Resized {
            width: 1024,
            height: 768
        }),
        Dispatch::Consumed
    );
    assert_eq!(controller.context().screen_size(), Vec2::new(1024.0, 768.0));

    assert_eq!(
        controller.dispatch_input(InputEvent::KeyDown(Key::Left)),
        Dispatch::Forwarded
    );
}

#[test]
fn left_clicks_steer_the_player_to_tile_centres() {
    let mut controller = controller();
    start_game(&mut controller);
    assert_eq!(
        controller.context().grid().viewport_origin(),
        Vec2::new(880.0, 660.0)
    );

    let _ = controller.dispatch_input(left_click(Vec2::new(130.0, 70.0)));
    let Some(GameMode::Gameplay(gameplay)) = controller.active_mode() else {
        panic!("expected gameplay");
    };
    assert_eq!(
        gameplay.fleet().player().path().collect::<Vec<_>>(),
        vec![Vec2::new(992.0, 736.0)]
    );

    let _ = controller.dispatch_input(left_click(Vec2::new(-1000.0, 0.0)));
    let Some(GameMode::Gameplay(gameplay)) = controller.active_mode() else {
        panic!("expected gameplay");
    };
    assert_eq!(
        gameplay.fleet().player().path().collect::<Vec<_>>(),
        vec![Vec2::new(992.0, 736.0)],
        "clicks outside the map are ignored"
    );
}

#[test]
fn right_clicks_fire_at_the_cursor() {
    let mut controller = controller();
    start_game(&mut controller);

    let fire = InputEvent::MouseDown {
        position: Vec2::new(400.0, 100.0),
        button: MouseButton::Right,
    };
    let _ = controller.dispatch_input(fire);
    let _ = controller.dispatch_input(fire);

    let Some(FrameView::Gameplay(view)) = controller.render().expect("render") else {
        panic!("gameplay should render the battle");
    };
    assert_eq!(view.projectiles.len(), 1);
    assert_eq!(view.ships.len(), 3);
    assert_eq!(view.ships[0].allegiance, Allegiance::Player);
    assert_eq!(view.scoreboard.content, "Score: 0");
    assert_eq!(view.viewport_origin, Vec2::new(880.0, 660.0));
}

#[test]
fn unknown_modes_are_rejected() {
    let mut context = context_with(fonts());
    for id in [GameModeId::Unknown, GameModeId::Exit] {
        assert!(matches!(
            GameMode::enter(id, &mut context),
            Err(ModeError::UnknownMode(rejected)) if rejected == id
        ));
    }
    assert!(matches!(
        GameMode::enter(GameModeId::Won, &mut context),
        Ok(GameMode::Won(_))
    ));
}

#[test]
fn rendering_without_fonts_reports_the_missing_role() {
    let controller = GameModeController::new(context_with(FontRegistry::new()));
    assert_eq!(
        controller.render(),
        Err(ModeError::MissingFont(FontRole::Scoreboard))
    );
}
