use bevy_ecs::query::With;
use bevy_ecs::system::{Query, Res};
use glam::Vec2;
use rand::Rng;
use tracing::{debug, trace};

use crate::config::GameConfig;
use crate::platform;
use crate::systems::{Bounds, InputState, Keys, Movable, PlayerControlled, Velocity};

/// Moves the player directly by `speed` per held direction key.
///
/// This is a position displacement, not a velocity; releasing the key stops the player
/// on the same tick.
pub fn apply_directional_input(bounds: &mut Bounds, speed: f32, held: Keys) {
    let mut delta = Vec2::ZERO;
    if held.contains(Keys::LEFT) {
        delta.x -= speed;
    }
    if held.contains(Keys::RIGHT) {
        delta.x += speed;
    }
    if held.contains(Keys::UP) {
        delta.y -= speed;
    }
    if held.contains(Keys::DOWN) {
        delta.y += speed;
    }
    bounds.translate(delta);
}

/// Applies the jump impulse with the given horizontal drift and leaves the ground.
pub fn jump(velocity: &mut Velocity, movable: &mut Movable, jump_velocity: f32, drift: i32) {
    velocity.0 = Vec2::new(drift as f32, jump_velocity);
    movable.standing = false;
}

/// Integrates the velocity into the position, then decays it by one gravity step.
///
/// The vertical component never drops below `max_fall_speed`.
pub fn integrate(bounds: &mut Bounds, velocity: &mut Velocity, movable: &Movable, gravity_step: f32) {
    bounds.pos -= velocity.0;
    velocity.0.y = (velocity.0.y - gravity_step).max(movable.max_fall_speed);
}

/// Whether the player has fallen off the bottom of the screen or walked off its left edge.
pub fn is_out_of_bounds(bounds: &Bounds, screen_height: f32) -> bool {
    bounds.bottom() >= screen_height || bounds.left() < 0.0
}

/// Handles directional movement, jumping, and gravity for the player.
pub fn player_movement_system(
    config: Res<GameConfig>,
    input: Res<InputState>,
    mut players: Query<(&mut Bounds, &mut Velocity, &mut Movable), With<PlayerControlled>>,
) {
    for (mut bounds, mut velocity, mut movable) in players.iter_mut() {
        apply_directional_input(&mut bounds, movable.speed, input.held);

        if input.held.contains(Keys::JUMP) {
            let (low, high) = config.jump_drift;
            let drift = platform::rng().random_range(low..=high);
            jump(&mut velocity, &mut movable, config.jump_velocity, drift);
            trace!(drift, "Jump");
        }

        integrate(&mut bounds, &mut velocity, &movable, config.gravity_step);
    }
}

/// Respawns the player when it leaves the playable area.
///
/// Unlike a hazard hit, this does not touch the round clock.
pub fn boundary_system(config: Res<GameConfig>, mut players: Query<&mut Bounds, With<PlayerControlled>>) {
    for mut bounds in players.iter_mut() {
        if is_out_of_bounds(&bounds, config.screen_height()) {
            debug!(x = bounds.left(), y = bounds.top(), "Player left the screen, respawning");
            bounds.pos = config.respawn_position();
        }
    }
}

