use std::path::Path;

use bevy_ecs::system::RunSystemOnce;
use feed_the_croco::{
    asset::ASSET_ROOT,
    config::GameConfig,
    map::level::Level,
    systems::{collision_system, Keys, Movable, RoundState, Velocity},
};
use glam::Vec2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

fn run_collision(world: &mut bevy_ecs::world::World) {
    world
        .run_system_once(collision_system)
        .expect("System should run successfully");
}

#[test]
fn test_hazard_hit_respawns_and_resets_clock() {
    let mut world = common::create_test_world();
    let hazard = Vec2::new(300.0, 100.0);
    common::spawn_test_hazard(&mut world, hazard);
    let player = common::spawn_test_player(&mut world, hazard + Vec2::new(10.0, 10.0), Vec2::new(-8.0, 10.0));
    world.resource_mut::<RoundState>().time_remaining = 3.0;

    run_collision(&mut world);

    let config = world.resource::<GameConfig>().clone();
    assert_that(&common::bounds_of(&world, player).pos).is_equal_to(config.respawn_position());
    assert_that(&world.resource::<RoundState>().time_remaining).is_equal_to(config.max_time);
}

#[test]
fn test_hazard_respawn_ignores_incoming_velocity() {
    let mut world = common::create_test_world();
    let hazard = Vec2::new(300.0, 100.0);
    common::spawn_test_hazard(&mut world, hazard);
    let fast = common::spawn_test_player(&mut world, hazard + Vec2::new(50.0, 50.0), Vec2::new(40.0, -3.0));

    run_collision(&mut world);

    let expected = world.resource::<GameConfig>().respawn_position();
    assert_that(&common::bounds_of(&world, fast).pos).is_equal_to(expected);
}

#[test]
fn test_standing_snaps_bottom_to_ground_top() {
    let mut world = common::create_test_world();
    let ground = common::spawn_test_ground(&mut world, Vec2::new(100.0, 100.0));
    // Sunk 4px into the tile, within the 5px tolerance
    let player = common::spawn_test_player(&mut world, Vec2::new(100.0, 72.0), Vec2::new(6.0, -3.0));

    run_collision(&mut world);

    let player_bounds = common::bounds_of(&world, player);
    let ground_bounds = common::bounds_of(&world, ground);
    assert_that(&player_bounds.bottom()).is_equal_to(ground_bounds.top());
    assert_that(&player_bounds.overlaps(&ground_bounds)).is_false();
    assert_that(&world.get::<Movable>(player).map(|m| m.standing)).is_equal_to(Some(true));
}

#[test]
fn test_ground_contact_cancels_jump_drift() {
    let mut world = common::create_test_world();
    common::spawn_test_ground(&mut world, Vec2::new(100.0, 100.0));
    let player = common::spawn_test_player(&mut world, Vec2::new(100.0, 72.0), Vec2::new(7.0, 2.0));

    run_collision(&mut world);

    let velocity = world.get::<Velocity>(player).expect("Player should have velocity");
    assert_that(&velocity.0.x).is_equal_to(0.0);
    assert_that(&velocity.0.y).is_equal_to(2.0);
}

#[test]
fn test_airborne_player_keeps_velocity() {
    let mut world = common::create_test_world();
    common::spawn_test_ground(&mut world, Vec2::new(100.0, 100.0));
    let player = common::spawn_test_player(&mut world, Vec2::new(100.0, 0.0), Vec2::new(7.0, 2.0));

    run_collision(&mut world);

    let velocity = world.get::<Velocity>(player).expect("Player should have velocity");
    assert_that(&velocity.0).is_equal_to(Vec2::new(7.0, 2.0));
    assert_that(&common::bounds_of(&world, player).pos).is_equal_to(Vec2::new(100.0, 0.0));
}

#[test]
fn test_head_bump_snaps_top_to_ground_bottom() {
    let mut world = common::create_test_world();
    let ground = common::spawn_test_ground(&mut world, Vec2::new(100.0, 100.0));
    let player = common::spawn_test_player(&mut world, Vec2::new(100.0, 129.0), Vec2::new(0.0, 8.0));

    run_collision(&mut world);

    let player_bounds = common::bounds_of(&world, player);
    assert_that(&player_bounds.top()).is_equal_to(common::bounds_of(&world, ground).bottom());
    assert_that(&world.get::<Movable>(player).map(|m| m.standing)).is_equal_to(Some(false));
}

#[test]
fn test_side_collision_pushes_player_out_horizontally() {
    let mut world = common::create_test_world();
    let wall = [
        common::spawn_test_ground(&mut world, Vec2::new(100.0, 100.0)),
        common::spawn_test_ground(&mut world, Vec2::new(100.0, 132.0)),
    ];
    // Walking into the wall from the left, 7px deep
    let player = common::spawn_test_player(&mut world, Vec2::new(75.0, 110.0), Vec2::ZERO);

    run_collision(&mut world);

    let player_bounds = common::bounds_of(&world, player);
    assert_that(&player_bounds.right()).is_equal_to(100.0);
    for tile in wall {
        assert_that(&player_bounds.overlaps(&common::bounds_of(&world, tile))).is_false();
    }
}

#[test]
fn test_side_collision_from_the_right() {
    let mut world = common::create_test_world();
    let ground = common::spawn_test_ground(&mut world, Vec2::new(100.0, 100.0));
    let player = common::spawn_test_player(&mut world, Vec2::new(125.0, 90.0), Vec2::ZERO);

    run_collision(&mut world);

    let player_bounds = common::bounds_of(&world, player);
    assert_that(&player_bounds.left()).is_equal_to(common::bounds_of(&world, ground).right());
}

// The tests below drive the full per-tick schedule through `Game::tick`, so the camera
// re-centers the player between ticks exactly as it does in a real round.

#[test]
fn test_player_stays_on_floor_across_ticks() {
    let mut game = common::start_game(common::test_level(), GameConfig::default());
    let player = common::player_entity(&mut game.world).expect("Round should have a player");

    // The first tick only builds up downward velocity; the second lands
    game.tick();

    for _ in 0..30 {
        game.tick();

        let bounds = common::bounds_of(&game.world, player);
        let tiles = common::ground_tiles(&mut game.world);
        let floor = tiles
            .iter()
            .find(|tile| tile.left() <= bounds.center().x && bounds.center().x < tile.right())
            .expect("Player should be above a floor tile");

        assert_that(&bounds.bottom()).is_equal_to(floor.top());
        assert_that(&tiles.iter().any(|tile| bounds.overlaps(tile))).is_false();
        assert_that(&game.world.get::<Movable>(player).map(|m| m.standing)).is_equal_to(Some(true));
    }
}

#[test]
fn test_side_contact_does_not_block_landing() {
    // The wall beside the player is spawned before the floor, so it is the first overlap
    let level = Level::parse("  b\n pb\nbbbb\n").expect("Level should parse");
    let mut game = common::start_game(level, GameConfig::default());
    let player = common::player_entity(&mut game.world).expect("Round should have a player");

    for _ in 0..8 {
        game.tick();
    }
    let resting = common::bounds_of(&game.world, player);

    common::press(&mut game, Keys::RIGHT);
    game.tick();

    let bounds = common::bounds_of(&game.world, player);
    assert_eq!(bounds, resting);
    let tiles = common::ground_tiles(&mut game.world);
    assert_that(&tiles.iter().any(|tile| tile.left() == bounds.right() && tile.top() == bounds.top())).is_true();
    assert_that(&tiles.iter().any(|tile| tile.top() == bounds.bottom())).is_true();
    assert_that(&tiles.iter().any(|tile| bounds.overlaps(tile))).is_false();
}

#[test]
fn test_stepping_back_into_the_croco_resets_the_clock() {
    let level = Level::load(Path::new(ASSET_ROOT)).expect("Shipped level should load");
    let config = GameConfig::default();
    let mut game = common::start_game(level, config.clone());
    let player = common::player_entity(&mut game.world).expect("Round should have a player");
    let croco = common::hazards(&mut game.world)[0];

    // Standing still next to the croco is safe
    for _ in 0..10 {
        game.tick();
        assert_that(&common::bounds_of(&game.world, player).overlaps(&croco)).is_false();
    }
    assert_that(&game.world.resource::<RoundState>().time_remaining)
        .is_less_than(config.max_time - config.tick_seconds());

    common::press(&mut game, Keys::LEFT);
    game.tick();

    assert_that(&game.world.resource::<RoundState>().time_remaining)
        .is_equal_to(config.max_time - config.tick_seconds());
    assert_eq!(common::hazards(&mut game.world)[0], croco);
}
