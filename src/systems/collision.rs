use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Query, Res, ResMut};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::GameConfig;
use crate::systems::{Bounds, GroundCollider, HazardCollider, Movable, PlayerControlled, RoundState, Velocity};

/// How a vertical ground contact was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalContact {
    /// The player's bottom was snapped onto the ground's top.
    Standing,
    /// The player's top was snapped under the ground's bottom.
    HeadBump,
}

/// Whether the player's horizontal edges are clear of the ground's opposite edges.
///
/// A contact within `tolerance` of a side edge is a side collision, not a vertical one.
fn clear_of_sides(player: &Bounds, ground: &Bounds, tolerance: f32) -> bool {
    (player.left() - ground.right()).abs() > tolerance && (ground.left() - player.right()).abs() > tolerance
}

/// Whether the player rests on top of `ground`, within `tolerance` pixels.
pub fn is_standing_on(player: &Bounds, ground: &Bounds, tolerance: f32) -> bool {
    (ground.top() - player.bottom()).abs() <= tolerance && clear_of_sides(player, ground, tolerance)
}

/// Whether the player's head is against the underside of `ground`, within `tolerance` pixels.
pub fn hits_head(player: &Bounds, ground: &Bounds, tolerance: f32) -> bool {
    (player.top() - ground.bottom()).abs() <= tolerance && clear_of_sides(player, ground, tolerance)
}

/// Applies at most one vertical correction: the first overlapping tile that classifies
/// as standing-on or head-bump wins.
pub fn resolve_vertical(player: &mut Bounds, hits: &[Bounds], tolerance: f32) -> Option<VerticalContact> {
    for ground in hits {
        if is_standing_on(player, ground, tolerance) {
            player.set_bottom(ground.top());
            return Some(VerticalContact::Standing);
        }
        if hits_head(player, ground, tolerance) {
            player.set_top(ground.bottom());
            return Some(VerticalContact::HeadBump);
        }
    }
    None
}

/// Pushes the player out of every overlapping tile along the horizontal axis.
///
/// The side is chosen by which of the two left edges is further right.
pub fn resolve_horizontal(player: &mut Bounds, hits: &[Bounds]) {
    for ground in hits {
        if ground.pos.x - player.pos.x < 0.0 {
            player.set_left(ground.right());
        } else {
            player.set_right(ground.left());
        }
    }
}

fn overlapping<'a>(player: &Bounds, tiles: impl Iterator<Item = &'a Bounds>) -> SmallVec<[Bounds; 8]> {
    tiles.filter(|tile| player.overlaps(tile)).copied().collect()
}

/// Resolves the player against hazards, then ground (vertical pass, then horizontal pass).
#[allow(clippy::type_complexity)]
pub fn collision_system(
    config: Res<GameConfig>,
    mut round: ResMut<RoundState>,
    mut players: Query<(&mut Bounds, &mut Velocity, &mut Movable), With<PlayerControlled>>,
    ground: Query<&Bounds, (With<GroundCollider>, Without<PlayerControlled>)>,
    hazards: Query<&Bounds, (With<HazardCollider>, Without<PlayerControlled>)>,
) {
    for (mut bounds, mut velocity, mut movable) in players.iter_mut() {
        if hazards.iter().any(|hazard| bounds.overlaps(hazard)) {
            debug!(x = bounds.left(), y = bounds.top(), "Hazard hit, respawning and resetting the clock");
            round.time_remaining = config.max_time;
            bounds.pos = config.respawn_position();
        }

        let hits = overlapping(&bounds, ground.iter());
        if !hits.is_empty() {
            // Cancel jump drift once touching ground; directional input is positional.
            velocity.0.x = 0.0;
        }

        match resolve_vertical(&mut bounds, &hits, movable.speed) {
            Some(VerticalContact::Standing) => movable.standing = true,
            Some(VerticalContact::HeadBump) => trace!("Head bump"),
            None => {}
        }

        let hits = overlapping(&bounds, ground.iter());
        resolve_horizontal(&mut bounds, &hits);
    }
}
