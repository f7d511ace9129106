use std::path::Path;

use bevy_ecs::event::EventWriter;
use bevy_ecs::system::{Local, NonSend, NonSendMut, Query, Res};
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use tracing::{debug, warn};

use crate::asset::Asset;
use crate::config::GameConfig;
use crate::error::{GameError, TextureError};
use crate::systems::{Bounds, Renderable, RoundPhase, RoundState};
use crate::texture::sprite::{load_texture, SpriteSheets};

pub const WELCOME_PROMPT: &str = "Press C to start \"Feed the croco\"";
const WELCOME_PROMPT_POSITION: (i16, i16) = (200, 50);
const HUD_TIME_POSITION: (i16, i16) = (32, 32);
const ROUND_OVER_TEXT: &str = "Round over";

/// Full-screen images: the scrolling background and the round-over screen.
///
/// Either may be missing; the screens fall back to flat colours.
pub struct Backdrop {
    pub background: Option<Texture>,
    pub round_over: Option<Texture>,
}

impl Backdrop {
    pub fn load(texture_creator: &TextureCreator<WindowContext>, root: &Path) -> Self {
        let load = |asset: Asset| match load_texture(texture_creator, root, asset) {
            Ok(texture) => Some(texture),
            Err(e) => {
                warn!(?asset, error = %e, "Backdrop image unavailable");
                None
            }
        };

        Self {
            background: load(Asset::Background),
            round_over: load(Asset::RoundOver),
        }
    }
}

/// Horizontal position of the mirrored background copy for a given offset.
pub fn mirrored_background_x(offset: f32, width: f32) -> f32 {
    let x = width + offset;
    if offset > 0.0 {
        x - 2.0 * width
    } else {
        x
    }
}

fn bounds_rect(bounds: &Bounds) -> Rect {
    Rect::new(
        bounds.pos.x.round() as i32,
        bounds.pos.y.round() as i32,
        bounds.size.x.round() as u32,
        bounds.size.y.round() as u32,
    )
}

fn draw_welcome(canvas: &mut Canvas<Window>) -> Result<(), TextureError> {
    canvas.set_draw_color(Color::GREEN);
    canvas.clear();
    let (x, y) = WELCOME_PROMPT_POSITION;
    canvas.string(x, y, WELCOME_PROMPT, Color::BLACK).map_err(TextureError::RenderFailed)
}

fn draw_background(canvas: &mut Canvas<Window>, background: &Texture, config: &GameConfig, offset: f32) -> Result<(), TextureError> {
    let (width, height) = (config.screen_size.x, config.screen_size.y);
    let first = Rect::new(offset.round() as i32, 0, width, height);
    let second = Rect::new(mirrored_background_x(offset, config.screen_width()).round() as i32, 0, width, height);

    canvas.copy(background, None, first).map_err(TextureError::RenderFailed)?;
    canvas
        .copy_ex(background, None, second, 0.0, None, true, false)
        .map_err(TextureError::RenderFailed)
}

fn draw_round_over(canvas: &mut Canvas<Window>, backdrop: &Backdrop, config: &GameConfig) -> Result<(), TextureError> {
    canvas.set_draw_color(Color::BLACK);
    canvas.clear();
    match &backdrop.round_over {
        Some(image) => {
            let dest = Rect::new(0, 0, config.screen_size.x, config.screen_size.y);
            canvas.copy(image, None, dest).map_err(TextureError::RenderFailed)
        }
        None => canvas
            .string(32, 32, ROUND_OVER_TEXT, Color::WHITE)
            .map_err(TextureError::RenderFailed),
    }
}

/// Draws the screen for the current round phase.
///
/// While playing: background (twice, the second copy mirrored), then every renderable in
/// `(layer, spawn order)` order, then the remaining time.
#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut canvas: NonSendMut<&mut Canvas<Window>>,
    sheets: NonSend<SpriteSheets>,
    backdrop: NonSend<Backdrop>,
    config: Res<GameConfig>,
    round: Res<RoundState>,
    renderables: Query<(&Renderable, &Bounds)>,
    mut errors: EventWriter<GameError>,
) {
    let result = match round.phase {
        RoundPhase::Welcome => draw_welcome(&mut canvas),
        RoundPhase::RoundOver | RoundPhase::PostRoundWait => draw_round_over(&mut canvas, &backdrop, &config),
        RoundPhase::Playing => {
            canvas.set_draw_color(Color::BLACK);
            canvas.clear();

            if let Some(background) = &backdrop.background {
                if let Err(e) = draw_background(&mut canvas, background, &config, round.background_offset) {
                    errors.write(e.into());
                }
            }

            let mut sorted: Vec<(&Renderable, &Bounds)> = renderables.iter().collect();
            sorted.sort_by_key(|(renderable, _)| renderable.draw_key());
            for (renderable, bounds) in sorted {
                if let Err(e) = sheets.render(&mut **canvas, renderable.sprite, bounds_rect(bounds)) {
                    errors.write(e.into());
                }
            }

            let (x, y) = HUD_TIME_POSITION;
            canvas
                .string(x, y, &format!("{:.0}", round.time_remaining), Color::BLACK)
                .map_err(TextureError::RenderFailed)
        }
    };

    if let Err(e) = result {
        errors.write(e.into());
    }
}

/// Switches the window to the round-over size once the round has ended.
pub fn round_over_window_system(
    mut canvas: NonSendMut<&mut Canvas<Window>>,
    config: Res<GameConfig>,
    round: Res<RoundState>,
    mut resized: Local<bool>,
    mut errors: EventWriter<GameError>,
) {
    if *resized || !matches!(round.phase, RoundPhase::RoundOver | RoundPhase::PostRoundWait) {
        return;
    }

    let size = config.round_over_size;
    match canvas.window_mut().set_size(size.x, size.y) {
        Ok(()) => debug!(width = size.x, height = size.y, "Resized window for round-over screen"),
        Err(e) => {
            errors.write(GameError::Sdl(e.to_string()));
        }
    }
    *resized = true;
}

pub fn present_system(mut canvas: NonSendMut<&mut Canvas<Window>>) {
    canvas.present();
}
