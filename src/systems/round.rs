//! The round state machine: `Welcome -> Playing -> RoundOver -> PostRoundWait`.

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Res, ResMut, RunSystemOnce};
use bevy_ecs::world::World;
use tracing::{info, warn};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::map::builder::spawn_level;
use crate::map::level::Level;
use crate::systems::{camera_system, GlobalState, InputState, Keys};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// Prompt shown until the start key is held.
    #[default]
    Welcome,
    Playing,
    /// The countdown ran out or a quit was requested mid-round.
    RoundOver,
    /// Round-over screen; only a quit request leaves it.
    PostRoundWait,
}

/// Round-scoped state, owned by the world and shared with systems through `Res`/`ResMut`.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RoundState {
    pub phase: RoundPhase,
    /// Seconds left on the countdown.
    pub time_remaining: f32,
    /// Horizontal offset of the tiled background, kept within `[-screen_width, screen_width]`.
    pub background_offset: f32,
}

impl RoundState {
    pub fn new(max_time: f32) -> Self {
        Self {
            phase: RoundPhase::Welcome,
            time_remaining: max_time,
            background_offset: 0.0,
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new(crate::constants::round::MAX_TIME)
    }
}

/// Run condition that passes while the round is in `phase`.
pub fn in_phase(phase: RoundPhase) -> impl FnMut(Res<RoundState>) -> bool + Clone {
    move |round: Res<RoundState>| round.phase == phase
}

/// Spawns the level, centers the camera on the player once, and enters `Playing`.
///
/// Returns the spawned player entity.
pub fn begin_round(world: &mut World, level: &Level, config: &GameConfig) -> Option<Entity> {
    let player = spawn_level(world, level, config);

    if let Err(e) = world.run_system_once(camera_system) {
        world.send_event(GameError::InvalidState(format!("Initial camera centering failed: {e}")));
    }

    if let Some(mut round) = world.get_resource_mut::<RoundState>() {
        round.time_remaining = config.max_time;
        round.background_offset = 0.0;
        round.phase = RoundPhase::Playing;
    }

    info!(max_time = config.max_time, "Round started");
    player
}

/// Starts the round once the start key is held on the welcome screen.
pub fn start_round_system(world: &mut World) {
    let waiting = world
        .get_resource::<RoundState>()
        .is_some_and(|round| round.phase == RoundPhase::Welcome);
    let start_held = world
        .get_resource::<InputState>()
        .is_some_and(|input| input.held.contains(Keys::START));
    if !waiting || !start_held {
        return;
    }

    let (Some(level), Some(config)) = (world.get_resource::<Level>().cloned(), world.get_resource::<GameConfig>().cloned())
    else {
        warn!("Start requested without a loaded level");
        return;
    };

    begin_round(world, &level, &config);
}

/// Advances the countdown and applies quit requests according to the current phase.
pub fn round_system(
    config: Res<GameConfig>,
    input: Res<InputState>,
    mut round: ResMut<RoundState>,
    mut state: ResMut<GlobalState>,
) {
    match round.phase {
        RoundPhase::Welcome | RoundPhase::PostRoundWait => {
            if input.quit_requested() {
                info!(phase = ?round.phase, "Quit requested, exiting");
                state.exit = true;
            }
        }
        RoundPhase::Playing => {
            if input.quit_requested() {
                info!("Quit requested, ending round");
                round.phase = RoundPhase::RoundOver;
                return;
            }

            round.time_remaining -= config.tick_seconds();
            if round.time_remaining < 0.0 {
                info!("Time is up, ending round");
                round.phase = RoundPhase::RoundOver;
            }
        }
        RoundPhase::RoundOver => {
            round.phase = RoundPhase::PostRoundWait;
        }
    }
}
