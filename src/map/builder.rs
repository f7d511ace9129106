//! Turns a parsed level into entities.

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use glam::{U16Vec2, Vec2};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::constants::sprites;
use crate::map::level::Level;
use crate::map::parser::TileKind;
use crate::systems::{
    Bounds, EntityCategory, GroundBundle, GroundCollider, HazardBundle, HazardCollider, Movable, PlayerBundle, PlayerControlled,
    Renderable, Velocity, WalkAnimation,
};
use crate::texture::sprite::{SheetId, SpriteRegion};

fn region(sheet: SheetId, size: Vec2) -> SpriteRegion {
    SpriteRegion::new(sheet, U16Vec2::ZERO, size.as_u16vec2())
}

/// Spawns one entity per placement, in placement order, and returns the player entity.
///
/// Each entity's `Renderable::order` is its index in the placement sequence, so draw
/// ties within a layer follow insertion order.
pub fn spawn_level(world: &mut World, level: &Level, config: &GameConfig) -> Option<Entity> {
    let mut player = None;

    for (order, placement) in level.placements().iter().enumerate() {
        let pos = config.tile_to_pixel(placement.cell);
        let order = order as u32;

        match placement.kind {
            TileKind::Ground => {
                world.spawn(GroundBundle {
                    ground: GroundCollider,
                    category: EntityCategory::Ground,
                    bounds: Bounds::new(pos, sprites::TILE),
                    renderable: Renderable {
                        sprite: region(SheetId::Ground, sprites::TILE),
                        layer: EntityCategory::Ground.layer(),
                        order,
                    },
                });
            }
            TileKind::Hazard => {
                world.spawn(HazardBundle {
                    hazard: HazardCollider,
                    category: EntityCategory::Hazard,
                    bounds: Bounds::new(pos, sprites::HAZARD),
                    renderable: Renderable {
                        sprite: region(SheetId::Hazard, sprites::HAZARD),
                        layer: EntityCategory::Hazard.layer(),
                        order,
                    },
                });
            }
            TileKind::Player => {
                let entity = world
                    .spawn(PlayerBundle {
                        player: PlayerControlled,
                        category: EntityCategory::Player,
                        bounds: Bounds::new(pos, sprites::TILE),
                        velocity: Velocity::default(),
                        movable: Movable {
                            speed: config.player_speed,
                            max_fall_speed: config.max_fall_speed,
                            standing: false,
                        },
                        renderable: Renderable {
                            sprite: region(SheetId::Player, sprites::TILE),
                            layer: EntityCategory::Player.layer(),
                            order,
                        },
                        animation: WalkAnimation::new(&config.walk_frames, config.frame_hold),
                    })
                    .id();
                debug!(?entity, cell = ?placement.cell, "Spawned player");
                player = Some(entity);
            }
        }
    }

    info!(
        ground = level.count(TileKind::Ground),
        hazards = level.count(TileKind::Hazard),
        "Spawned level entities"
    );
    player
}

