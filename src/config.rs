//! Tunable game parameters, bundled into a single ECS resource.
//!
//! Every value defaults to the matching entry in [`crate::constants`]; tests build
//! custom configurations directly instead of going through any external source.

use bevy_ecs::resource::Resource;
use glam::{IVec2, UVec2, Vec2};

use crate::constants::{self, animation, camera, mechanics, round};

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub tile_size: u32,
    pub screen_size: UVec2,
    pub round_over_size: UVec2,
    pub tick_rate: u32,
    pub max_time: f32,
    pub player_speed: f32,
    pub max_fall_speed: f32,
    pub gravity_step: f32,
    pub jump_velocity: f32,
    /// Inclusive bounds of the random horizontal drift applied by a jump.
    pub jump_drift: (i32, i32),
    pub respawn_tile: IVec2,
    pub camera_lead: f32,
    pub background_scroll_speed: f32,
    pub walk_frames: Vec<u16>,
    pub frame_hold: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_size: constants::TILE_SIZE,
            screen_size: constants::WINDOW_SIZE,
            round_over_size: constants::ROUND_OVER_WINDOW_SIZE,
            tick_rate: constants::TICK_RATE,
            max_time: round::MAX_TIME,
            player_speed: mechanics::PLAYER_SPEED,
            max_fall_speed: mechanics::MAX_FALL_SPEED,
            gravity_step: mechanics::GRAVITY_STEP,
            jump_velocity: mechanics::JUMP_VELOCITY,
            jump_drift: mechanics::JUMP_DRIFT,
            respawn_tile: constants::RESPAWN_TILE,
            camera_lead: camera::LEAD_OFFSET,
            background_scroll_speed: camera::BACKGROUND_SCROLL_SPEED,
            walk_frames: animation::PLAYER_WALK_FRAMES.to_vec(),
            frame_hold: animation::PLAYER_FRAME_HOLD,
        }
    }
}

impl GameConfig {
    pub fn screen_width(&self) -> f32 {
        self.screen_size.x as f32
    }

    pub fn screen_height(&self) -> f32 {
        self.screen_size.y as f32
    }

    pub fn screen_center(&self) -> Vec2 {
        self.screen_size.as_vec2() / 2.0
    }

    /// Pixel position the player is teleported to on respawn.
    pub fn respawn_position(&self) -> Vec2 {
        self.tile_to_pixel(self.respawn_tile)
    }

    pub fn tile_to_pixel(&self, tile: IVec2) -> Vec2 {
        (tile * self.tile_size as i32).as_vec2()
    }

    /// Seconds of round time consumed by one tick.
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }
}
