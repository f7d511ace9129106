use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Query, Res, ResMut};
use glam::Vec2;
use tracing::trace;

use crate::config::GameConfig;
use crate::systems::{Bounds, EntityCategory, RoundState};

/// The translation the camera applied to the world on the most recent tick.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct CameraShift(pub Vec2);

/// Translation that moves the player's center to the screen center, biased right by the
/// camera lead so more terrain is visible ahead.
pub fn camera_offset(player: &Bounds, config: &GameConfig) -> Vec2 {
    let center = config.screen_center();
    let player_center = player.center();
    Vec2::new(center.x + config.camera_lead - player_center.x, center.y - player_center.y)
}

/// Wraps the background offset back into `[-width, width]`.
pub fn wrap_background(offset: f32, width: f32) -> f32 {
    if offset > width {
        offset - 2.0 * width
    } else if offset < -width {
        offset + 2.0 * width
    } else {
        offset
    }
}

/// Re-centers the world on the player.
///
/// Every entity except hazards is translated by the camera offset; hazards stay fixed
/// in screen space regardless of where they sit in spawn order.
pub fn camera_system(
    config: Res<GameConfig>,
    mut round: ResMut<RoundState>,
    mut shift: ResMut<CameraShift>,
    mut entities: Query<(&EntityCategory, &mut Bounds)>,
) {
    let Some(player) = entities
        .iter()
        .find(|(category, _)| **category == EntityCategory::Player)
        .map(|(_, bounds)| *bounds)
    else {
        return;
    };

    let delta = camera_offset(&player, &config);
    for (category, mut bounds) in entities.iter_mut() {
        if *category != EntityCategory::Hazard {
            bounds.translate(delta);
        }
    }

    round.background_offset = wrap_background(
        round.background_offset + delta.x * config.background_scroll_speed,
        config.screen_width(),
    );
    shift.0 = delta;
    trace!(dx = delta.x, dy = delta.y, background = round.background_offset, "Camera re-centered");
}
