use std::collections::HashMap;
use std::path::Path;

use glam::U16Vec2;
use sdl2::image::ImageRWops;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget, Texture, TextureCreator};
use sdl2::rwops::RWops;
use sdl2::video::WindowContext;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tracing::{debug, warn};

use crate::asset::{get_asset_bytes_from, Asset};
use crate::error::TextureError;

/// Fill used for entities whose sprite sheet could not be loaded.
pub const PLACEHOLDER_COLOR: Color = Color::RGB(128, 128, 128);

/// Pixels of this colour are transparent in every sprite sheet.
pub const COLOR_KEY: Color = Color::WHITE;

/// The source images entities are sliced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SheetId {
    Player,
    Ground,
    Hazard,
}

impl SheetId {
    pub fn asset(self) -> Asset {
        match self {
            SheetId::Player => Asset::PlayerSheet,
            SheetId::Ground => Asset::GroundSheet,
            SheetId::Hazard => Asset::HazardSheet,
        }
    }
}

/// A rectangular region within one of the sprite sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteRegion {
    pub sheet: SheetId,
    pub pos: U16Vec2,
    pub size: U16Vec2,
}

impl SpriteRegion {
    pub fn new(sheet: SheetId, pos: U16Vec2, size: U16Vec2) -> Self {
        Self { sheet, pos, size }
    }

    /// Re-slices the region at a new horizontal offset, keeping row and size.
    pub fn at_x(self, x: u16) -> Self {
        Self {
            pos: U16Vec2::new(x, self.pos.y),
            ..self
        }
    }

    fn source_rect(&self) -> Rect {
        Rect::new(self.pos.x as i32, self.pos.y as i32, self.size.x as u32, self.size.y as u32)
    }
}

/// Loaded sprite sheet textures, keyed by sheet.
///
/// Sheets that fail to load are left out; regions on them are drawn as placeholder rectangles.
pub struct SpriteSheets {
    sheets: HashMap<SheetId, Texture>,
}

impl SpriteSheets {
    pub fn load(texture_creator: &TextureCreator<WindowContext>, root: &Path) -> Self {
        let mut sheets = HashMap::new();
        for id in SheetId::iter() {
            match load_keyed_texture(texture_creator, root, id.asset()) {
                Ok(texture) => {
                    sheets.insert(id, texture);
                }
                Err(e) => {
                    warn!(sheet = ?id, error = %e, "Sprite sheet unavailable, drawing placeholders");
                }
            }
        }

        debug!(sheet_count = sheets.len(), "Loaded sprite sheets");
        Self { sheets }
    }

    pub fn render<C: RenderTarget>(&self, canvas: &mut Canvas<C>, region: SpriteRegion, dest: Rect) -> Result<(), TextureError> {
        match self.sheets.get(&region.sheet) {
            Some(texture) => canvas
                .copy(texture, region.source_rect(), dest)
                .map_err(TextureError::RenderFailed),
            None => {
                canvas.set_draw_color(PLACEHOLDER_COLOR);
                canvas.fill_rect(dest).map_err(TextureError::RenderFailed)
            }
        }
    }
}

/// Loads an image asset into a texture with [`COLOR_KEY`] made transparent.
pub fn load_keyed_texture(
    texture_creator: &TextureCreator<WindowContext>,
    root: &Path,
    asset: Asset,
) -> Result<Texture, TextureError> {
    let bytes = get_asset_bytes_from(root, asset).map_err(|e| TextureError::LoadFailed(e.to_string()))?;
    let mut surface = RWops::from_bytes(bytes.as_ref())
        .and_then(|rwops| rwops.load())
        .map_err(TextureError::LoadFailed)?;
    surface.set_color_key(true, COLOR_KEY).map_err(TextureError::LoadFailed)?;
    texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| TextureError::LoadFailed(e.to_string()))
}

/// Loads an image asset into a texture as-is.
pub fn load_texture(texture_creator: &TextureCreator<WindowContext>, root: &Path, asset: Asset) -> Result<Texture, TextureError> {
    let bytes = get_asset_bytes_from(root, asset).map_err(|e| TextureError::LoadFailed(e.to_string()))?;
    let surface = RWops::from_bytes(bytes.as_ref())
        .and_then(|rwops| rwops.load())
        .map_err(TextureError::LoadFailed)?;
    texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| TextureError::LoadFailed(e.to_string()))
}
