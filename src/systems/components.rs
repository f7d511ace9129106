use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::Vec2;

use crate::systems::animation::WalkAnimation;
use crate::texture::sprite::SpriteRegion;

/// Axis-aligned bounding box of an entity, in screen pixels. `pos` is the top-left corner.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x;
    }

    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y;
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// Strict overlap test; boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.left() < other.right() && self.right() > other.left() && self.top() < other.bottom() && self.bottom() > other.top()
    }
}

/// Which container an entity belongs to. Fixed for the entity's lifetime.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityCategory {
    Hazard,
    Ground,
    Player,
}

impl EntityCategory {
    /// Draw layer; lower layers are drawn first.
    pub fn layer(self) -> u8 {
        match self {
            EntityCategory::Hazard => 0,
            EntityCategory::Ground => 1,
            EntityCategory::Player => 2,
        }
    }
}

/// A tag component for the entity controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// Marker for static terrain, solid on all sides.
#[derive(Default, Component)]
pub struct GroundCollider;

/// Marker for hazards; touching one respawns the player and resets the clock.
#[derive(Default, Component)]
pub struct HazardCollider;

/// Impulse velocity in pixels per tick. Applied as `position -= velocity`, so a positive
/// `y` moves the entity up.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);

/// Movement parameters and contact state for the player.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Movable {
    /// Displacement per tick from directional input; also the contact tolerance.
    pub speed: f32,
    /// Floor for the vertical velocity.
    pub max_fall_speed: f32,
    /// Whether the last ground resolution put the player on top of a tile.
    pub standing: bool,
}

/// A component for entities that have a sprite, with a layer and spawn sequence for ordering.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Renderable {
    pub sprite: SpriteRegion,
    pub layer: u8,
    pub order: u32,
}

impl Renderable {
    /// Sort key: layer first, then insertion order.
    pub fn draw_key(&self) -> (u8, u32) {
        (self.layer, self.order)
    }
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub category: EntityCategory,
    pub bounds: Bounds,
    pub velocity: Velocity,
    pub movable: Movable,
    pub renderable: Renderable,
    pub animation: WalkAnimation,
}

#[derive(Bundle)]
pub struct GroundBundle {
    pub ground: GroundCollider,
    pub category: EntityCategory,
    pub bounds: Bounds,
    pub renderable: Renderable,
}

#[derive(Bundle)]
pub struct HazardBundle {
    pub hazard: HazardCollider,
    pub category: EntityCategory,
    pub bounds: Bounds,
    pub renderable: Renderable,
}

#[derive(Resource, Debug, Default)]
pub struct GlobalState {
    pub exit: bool,
}
