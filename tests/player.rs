use bevy_ecs::system::RunSystemOnce;
use feed_the_croco::{
    config::GameConfig,
    systems::{
        boundary_system, integrate, is_out_of_bounds, player_movement_system, Bounds, InputState, Keys, Movable, RoundState,
        Velocity,
    },
};
use glam::Vec2;
use speculoos::prelude::*;

mod common;

fn hold(world: &mut bevy_ecs::world::World, keys: Keys) {
    world.resource_mut::<InputState>().update(keys);
}

#[test]
fn test_gravity_never_exceeds_max_fall_speed() {
    let mut world = common::create_test_world();
    let player = common::spawn_test_player(&mut world, Vec2::new(100.0, 100.0), Vec2::new(0.0, 10.0));
    let max_fall = world.resource::<GameConfig>().max_fall_speed;

    for _ in 0..60 {
        world
            .run_system_once(player_movement_system)
            .expect("System should run successfully");
        let velocity = world.get::<Velocity>(player).expect("Player should have velocity");
        assert_that(&velocity.0.y).is_greater_than_or_equal_to(max_fall);
    }

    let velocity = world.get::<Velocity>(player).expect("Player should have velocity");
    assert_that(&velocity.0.y).is_equal_to(max_fall);
}

#[test]
fn test_integrate_clamps_after_overshoot() {
    let movable = Movable {
        speed: 5.0,
        max_fall_speed: -3.0,
        standing: false,
    };
    let mut bounds = Bounds::new(Vec2::ZERO, Vec2::splat(32.0));
    let mut velocity = Velocity(Vec2::new(0.0, -2.8));

    integrate(&mut bounds, &mut velocity, &movable, 0.5);

    // Position moves by the pre-decay velocity; positive y velocity is upward
    assert_that(&bounds.pos).is_equal_to(Vec2::new(0.0, 2.8));
    assert_that(&velocity.0.y).is_equal_to(-3.0);
}

#[test]
fn test_directional_input_moves_position_directly() {
    let mut world = common::create_test_world();
    let player = common::spawn_test_player(&mut world, Vec2::new(100.0, 100.0), Vec2::ZERO);
    hold(&mut world, Keys::LEFT | Keys::UP);

    world
        .run_system_once(player_movement_system)
        .expect("System should run successfully");

    assert_that(&common::bounds_of(&world, player).pos).is_equal_to(Vec2::new(95.0, 95.0));
    let velocity = world.get::<Velocity>(player).expect("Player should have velocity");
    assert_that(&velocity.0).is_equal_to(Vec2::new(0.0, -0.5));
}

#[test]
fn test_jump_sets_impulse_and_leaves_ground() {
    let mut world = common::create_test_world();
    let player = common::spawn_test_player(&mut world, Vec2::new(100.0, 100.0), Vec2::ZERO);
    world.get_mut::<Movable>(player).expect("Player should be movable").standing = true;
    hold(&mut world, Keys::JUMP);

    world
        .run_system_once(player_movement_system)
        .expect("System should run successfully");

    let velocity = world.get::<Velocity>(player).expect("Player should have velocity").0;
    assert_that(&velocity.y).is_equal_to(9.5);
    assert_that(&velocity.x).is_greater_than_or_equal_to(5.0);
    assert_that(&velocity.x).is_less_than_or_equal_to(10.0);

    let bounds = common::bounds_of(&world, player);
    assert_that(&bounds.pos.y).is_equal_to(90.0);
    assert_that(&bounds.pos.x).is_equal_to(100.0 - velocity.x);
    assert_that(&world.get::<Movable>(player).map(|m| m.standing)).is_equal_to(Some(false));
}

#[test]
fn test_boundary_reset_left_edge() {
    let mut world = common::create_test_world();
    let player = common::spawn_test_player(&mut world, Vec2::new(-1.0, 200.0), Vec2::ZERO);
    world.resource_mut::<RoundState>().time_remaining = 4.0;

    world
        .run_system_once(boundary_system)
        .expect("System should run successfully");

    let expected = world.resource::<GameConfig>().respawn_position();
    assert_that(&common::bounds_of(&world, player).pos).is_equal_to(expected);
    // Leaving the screen does not refill the clock
    assert_that(&world.resource::<RoundState>().time_remaining).is_equal_to(4.0);
}

#[test]
fn test_boundary_reset_below_screen() {
    let mut world = common::create_test_world();
    let height = world.resource::<GameConfig>().screen_height();
    let player = common::spawn_test_player(&mut world, Vec2::new(200.0, height - 30.0), Vec2::ZERO);

    world
        .run_system_once(boundary_system)
        .expect("System should run successfully");

    let expected = world.resource::<GameConfig>().respawn_position();
    assert_that(&common::bounds_of(&world, player).pos).is_equal_to(expected);
}

#[test]
fn test_in_bounds_player_is_untouched() {
    let screen_height = GameConfig::default().screen_height();
    let inside = Bounds::new(Vec2::new(0.0, 100.0), Vec2::splat(32.0));
    let on_floor = Bounds::new(Vec2::new(10.0, screen_height - 32.0), Vec2::splat(32.0));

    assert_that(&is_out_of_bounds(&inside, screen_height)).is_false();
    assert_that(&is_out_of_bounds(&on_floor, screen_height)).is_true();
}
