//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::{IVec2, UVec2, Vec2};

/// The fixed simulation rate, in ticks per second.
pub const TICK_RATE: u32 = 30;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / TICK_RATE as f64) as u64);

/// The size of each tile, in pixels.
pub const TILE_SIZE: u32 = 32;

/// The size of the playing window, in pixels (60 x 33.75 tiles at half scale).
pub const WINDOW_SIZE: UVec2 = UVec2::new(TILE_SIZE * 60 / 2, TILE_SIZE * 3375 / 200);

/// The size of the window used for the round-over screen.
pub const ROUND_OVER_WINDOW_SIZE: UVec2 = UVec2::new(950, 950);

/// Round timing.
pub mod round {
    /// Seconds on the countdown at the start of a round (and after a hazard hit).
    pub const MAX_TIME: f32 = 10.0;
}

/// Player movement tuning, in pixels per tick.
pub mod mechanics {
    /// Horizontal/vertical displacement applied per tick while an arrow key is held.
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Lower bound on vertical velocity (negative is downward).
    pub const MAX_FALL_SPEED: f32 = -3.0;
    /// Subtracted from vertical velocity every tick.
    pub const GRAVITY_STEP: f32 = 0.5;
    /// Vertical velocity set by a jump.
    pub const JUMP_VELOCITY: f32 = 10.0;
    /// Inclusive range the horizontal jump drift is drawn from.
    pub const JUMP_DRIFT: (i32, i32) = (5, 10);
}

/// Camera and background scrolling.
pub mod camera {
    use super::TILE_SIZE;

    /// Horizontal bias keeping the player left of center.
    pub const LEAD_OFFSET: f32 = (5 * TILE_SIZE) as f32;
    /// Background parallax multiplier; zero keeps the background static.
    pub const BACKGROUND_SCROLL_SPEED: f32 = 0.0;
}

/// Walk-cycle animation.
pub mod animation {
    /// Horizontal offsets into the player sheet, one per frame.
    pub const PLAYER_WALK_FRAMES: [u16; 2] = [0, 32];
    /// Pixels of scrolling that advance the walk cycle by one frame.
    pub const PLAYER_FRAME_HOLD: u32 = 30;
}

/// Sprite dimensions, in pixels.
pub mod sprites {
    use glam::Vec2;

    use super::TILE_SIZE;

    pub const TILE: Vec2 = Vec2::new(TILE_SIZE as f32, TILE_SIZE as f32);
    pub const HAZARD: Vec2 = Vec2::new(172.0, 134.0);
}

/// The tile the player is returned to after a hazard hit or leaving the screen.
pub const RESPAWN_TILE: IVec2 = IVec2::new(25, 11);

/// Path of the level loaded at round start, relative to the asset root.
pub const LEVEL_PATH: &str = "maps/level-01.txt";

/// Converts a tile coordinate into the pixel position of its top-left corner.
pub fn tile_to_pixel(tile: IVec2) -> Vec2 {
    (tile * TILE_SIZE as i32).as_vec2()
}
