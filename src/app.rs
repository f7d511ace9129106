use std::path::Path;
use std::time::{Duration, Instant};

use sdl2::image::InitFlag;
use sdl2::image::Sdl2ImageContext;
use sdl2::Sdl;
use tracing::{debug, info, trace, warn};

use crate::asset::ASSET_ROOT;
use crate::constants::{LOOP_TIME, WINDOW_SIZE};
use crate::error::{GameError, GameResult};
use crate::formatter;
use crate::game::Game;
use crate::platform;

/// Main application wrapper that manages SDL initialization, window lifecycle, and the game loop.
pub struct App {
    pub game: Game,
    // Keep SDL and SDL_image alive for the app lifetime
    _sdl_context: Sdl,
    _image_context: Sdl2ImageContext,
}

impl App {
    /// Initializes SDL subsystems, creates the game window, and sets up the game state.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails, or propagates
    /// errors from `Game::new()` (most importantly a missing level file).
    pub fn new() -> GameResult<Self> {
        Self::with_asset_root(Path::new(ASSET_ROOT))
    }

    pub fn with_asset_root(asset_root: &Path) -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
        let image_context = sdl2::image::init(InitFlag::PNG).map_err(GameError::Sdl)?;

        debug!("Initializing SDL2 subsystems");
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        trace!(width = WINDOW_SIZE.x, height = WINDOW_SIZE.y, "Creating game window");
        let window = video_subsystem
            .window("Feed the croco", WINDOW_SIZE.x, WINDOW_SIZE.y)
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        trace!("Creating hardware-accelerated canvas");
        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        debug!(renderer_info = ?canvas.info(), "Canvas renderer initialized");

        let texture_creator = canvas.texture_creator();

        let game = Game::new(canvas, &texture_creator, event_pump, asset_root)?;

        info!("Application initialization completed successfully");
        Ok(App {
            game,
            _sdl_context: sdl_context,
            _image_context: image_context,
        })
    }

    /// Executes a single frame: runs one game tick, then sleeps off the rest of the frame budget.
    ///
    /// # Returns
    ///
    /// `true` if the game should continue running, `false` if the game requested exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        formatter::increment_tick();

        if self.game.tick() {
            return false;
        }

        let elapsed = start.elapsed();
        if elapsed < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(elapsed);
            if time != Duration::ZERO {
                platform::sleep(time, self.game.focused());
            }
        } else {
            warn!(behind = ?(elapsed - LOOP_TIME), "Game loop behind schedule");
        }

        true
    }
}
