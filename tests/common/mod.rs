#![allow(dead_code)]

use bevy_ecs::{entity::Entity, event::Events, query::With, world::World};
use feed_the_croco::{
    config::GameConfig,
    constants::sprites,
    error::GameError,
    game::Game,
    map::level::Level,
    systems::{
        Bindings, Bounds, CameraShift, EntityCategory, GlobalState, GroundCollider, HazardCollider, InputState, Keys, Movable,
        PlayerControlled, Renderable, RoundPhase, RoundState, Velocity, WalkAnimation,
    },
    texture::sprite::{SheetId, SpriteRegion},
};
use glam::{U16Vec2, Vec2};

/// A small level: a floor under the spawn and a hazard far to the right.
pub const TEST_LEVEL: &str = "          k\n p\nbbbbbbbbbbb\n";

/// Creates a basic test world with the resources every gameplay system needs.
///
/// The round is already in `Playing` with a full clock.
pub fn create_test_world() -> World {
    create_test_world_with(GameConfig::default())
}

pub fn create_test_world_with(config: GameConfig) -> World {
    let mut world = World::new();

    world.insert_resource(Events::<GameError>::default());
    world.insert_resource(RoundState {
        phase: RoundPhase::Playing,
        ..RoundState::new(config.max_time)
    });
    world.insert_resource(config);
    world.insert_resource(GlobalState::default());
    world.insert_resource(Bindings::default());
    world.insert_resource(InputState::default());
    world.insert_resource(CameraShift::default());

    world
}

pub fn test_level() -> Level {
    Level::parse(TEST_LEVEL).expect("Test level should parse")
}

fn renderable(sheet: SheetId, size: Vec2, category: EntityCategory, order: u32) -> Renderable {
    Renderable {
        sprite: SpriteRegion::new(sheet, U16Vec2::ZERO, size.as_u16vec2()),
        layer: category.layer(),
        order,
    }
}

/// Spawns a 32x32 player with its top-left corner at `pos` and the given velocity.
pub fn spawn_test_player(world: &mut World, pos: Vec2, velocity: Vec2) -> Entity {
    let config = world.resource::<GameConfig>().clone();
    world
        .spawn((
            PlayerControlled,
            EntityCategory::Player,
            Bounds::new(pos, sprites::TILE),
            Velocity(velocity),
            Movable {
                speed: config.player_speed,
                max_fall_speed: config.max_fall_speed,
                standing: false,
            },
            renderable(SheetId::Player, sprites::TILE, EntityCategory::Player, 0),
            WalkAnimation::new(&config.walk_frames, config.frame_hold),
        ))
        .id()
}

/// Spawns a 32x32 ground tile with its top-left corner at `pos`.
pub fn spawn_test_ground(world: &mut World, pos: Vec2) -> Entity {
    world
        .spawn((
            GroundCollider,
            EntityCategory::Ground,
            Bounds::new(pos, sprites::TILE),
            renderable(SheetId::Ground, sprites::TILE, EntityCategory::Ground, 1),
        ))
        .id()
}

/// Spawns a hazard with its top-left corner at `pos`.
pub fn spawn_test_hazard(world: &mut World, pos: Vec2) -> Entity {
    world
        .spawn((
            HazardCollider,
            EntityCategory::Hazard,
            Bounds::new(pos, sprites::HAZARD),
            renderable(SheetId::Hazard, sprites::HAZARD, EntityCategory::Hazard, 2),
        ))
        .id()
}

pub fn bounds_of(world: &World, entity: Entity) -> Bounds {
    *world.get::<Bounds>(entity).expect("Entity should have bounds")
}

/// Replaces the keys held for the next tick of a headless game.
pub fn press(game: &mut Game, keys: Keys) {
    game.world.resource_mut::<InputState>().update(keys);
}

/// Builds a headless game on `level` and runs the tick that starts the round.
pub fn start_game(level: Level, config: GameConfig) -> Game {
    let mut game = Game::headless(level, config);
    press(&mut game, Keys::START);
    assert!(!game.tick(), "Starting a round should not exit");
    press(&mut game, Keys::empty());
    game
}

pub fn player_entity(world: &mut World) -> Option<Entity> {
    world.query_filtered::<Entity, With<PlayerControlled>>().iter(world).next()
}

pub fn ground_tiles(world: &mut World) -> Vec<Bounds> {
    world
        .query_filtered::<&Bounds, With<GroundCollider>>()
        .iter(world)
        .copied()
        .collect()
}

pub fn hazards(world: &mut World) -> Vec<Bounds> {
    world
        .query_filtered::<&Bounds, With<HazardCollider>>()
        .iter(world)
        .copied()
        .collect()
}
