//! This module contains the main game logic and state.

use std::path::Path;

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::system::ResMut;
use bevy_ecs::world::World;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use tracing::{debug, error, info};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::map::level::Level;
use crate::systems::{
    boundary_system, camera_system, collision_system, in_phase, input_system, player_movement_system, present_system,
    render_system, round_over_window_system, round_system, start_round_system, walk_animation_system, Backdrop, Bindings,
    CameraShift, GlobalState, InputState, RoundPhase, RoundState,
};
use crate::texture::sprite::SpriteSheets;

/// System set for all gameplay systems to ensure they run after input processing
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum GameplaySet {
    /// Input polling and round start
    Input,
    /// Physics, collision, camera and animation; only while playing
    Update,
    /// Round clock and phase transitions
    Respond,
}

/// System set for all rendering systems to ensure they run after gameplay logic
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum RenderSet {
    Draw,
    Present,
}

/// Core game state, built on a `bevy_ecs` `World` and a `Schedule` that runs once per tick.
///
/// SDL2 resources are stored as `NonSend` resources; everything the simulation touches is a
/// plain resource or component so it can run headless.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Loads the level and images, then builds the world and the full per-tick schedule.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Map` when the level cannot be read or is invalid. Missing images
    /// are not errors; they are drawn as placeholders.
    pub fn new(
        canvas: Canvas<Window>,
        texture_creator: &TextureCreator<WindowContext>,
        event_pump: EventPump,
        asset_root: &Path,
    ) -> GameResult<Game> {
        info!("Starting game initialization");

        debug!(root = %asset_root.display(), "Loading level");
        let level = Level::load(asset_root)?;

        debug!("Loading sprite sheets and backdrop images");
        let sheets = SpriteSheets::load(texture_creator, asset_root);
        let backdrop = Backdrop::load(texture_creator, asset_root);

        debug!("Initializing ECS world and system schedule");
        let mut world = World::default();
        let mut schedule = Schedule::default();

        Self::setup_ecs(&mut world);
        Self::insert_resources(&mut world, level, GameConfig::default());

        world.insert_non_send_resource(sheets);
        world.insert_non_send_resource(backdrop);
        world.insert_non_send_resource(event_pump);
        world.insert_non_send_resource::<&mut Canvas<Window>>(Box::leak(Box::new(canvas)));

        debug!("Configuring system execution schedule");
        Self::configure_schedule(&mut schedule);

        info!("Game initialization completed successfully");
        Ok(Game { world, schedule })
    }

    /// Builds a game without a window: the simulation systems only, driven by whatever is
    /// written into the `InputState` resource between ticks.
    pub fn headless(level: Level, config: GameConfig) -> Game {
        let mut world = World::default();
        let mut schedule = Schedule::default();

        Self::setup_ecs(&mut world);
        Self::insert_resources(&mut world, level, config);
        Self::configure_simulation(&mut schedule);
        schedule.add_systems(error_log_system.after(GameplaySet::Respond));

        Game { world, schedule }
    }

    fn setup_ecs(world: &mut World) {
        EventRegistry::register_event::<GameError>(world);
    }

    fn insert_resources(world: &mut World, level: Level, config: GameConfig) {
        world.insert_resource(RoundState::new(config.max_time));
        world.insert_resource(config);
        world.insert_resource(level);
        world.insert_resource(GlobalState::default());
        world.insert_resource(Bindings::default());
        world.insert_resource(InputState::default());
        world.insert_resource(CameraShift::default());
    }

    /// Gameplay systems shared by the windowed and headless schedules.
    fn configure_simulation(schedule: &mut Schedule) {
        schedule
            .add_systems((
                start_round_system.in_set(GameplaySet::Input),
                (
                    player_movement_system,
                    collision_system,
                    boundary_system,
                    camera_system,
                    walk_animation_system,
                )
                    .chain()
                    .in_set(GameplaySet::Update),
                round_system.in_set(GameplaySet::Respond),
            ))
            .configure_sets(
                (
                    GameplaySet::Input,
                    GameplaySet::Update.run_if(in_phase(RoundPhase::Playing)),
                    GameplaySet::Respond,
                )
                    .chain(),
            );
    }

    fn configure_schedule(schedule: &mut Schedule) {
        Self::configure_simulation(schedule);

        schedule
            .add_systems((
                input_system.in_set(GameplaySet::Input).before(start_round_system),
                (round_over_window_system, render_system).chain().in_set(RenderSet::Draw),
                (present_system, error_log_system).chain().in_set(RenderSet::Present),
            ))
            .configure_sets((GameplaySet::Respond, RenderSet::Draw, RenderSet::Present).chain());
    }

    /// Runs every scheduled system once.
    ///
    /// # Returns
    ///
    /// `true` if the game should terminate, `false` to continue
    pub fn tick(&mut self) -> bool {
        self.schedule.run(&mut self.world);
        self.world.get_resource::<GlobalState>().is_some_and(|state| state.exit)
    }

    /// Whether the window currently has input focus.
    pub fn focused(&self) -> bool {
        self.world.get_resource::<InputState>().is_none_or(|input| input.focused)
    }
}

/// Drains and logs every error reported by systems during this tick.
fn error_log_system(mut errors: ResMut<Events<GameError>>) {
    for e in errors.drain() {
        error!(error = %e, "System error");
    }
}
