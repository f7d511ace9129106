use std::path::Path;

use bevy_ecs::resource::Resource;
use glam::IVec2;
use tracing::debug;

use crate::asset::{get_asset_bytes_from, Asset};
use crate::error::{MapError, ParseError};
use crate::map::parser::{LevelParser, Placement, TileKind};

/// A validated level layout: the ordered placements plus the single player spawn cell.
///
/// The text it came from is immutable input; a round spawns entities from this once.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Level {
    placements: Vec<Placement>,
    player_spawn: IVec2,
}

impl Level {
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let placements = LevelParser::parse_level(text)?;
        let player_spawn = placements
            .iter()
            .find(|p| p.kind == TileKind::Player)
            .map(|p| p.cell)
            .ok_or(ParseError::MissingPlayerSpawn)?;

        Ok(Self {
            placements,
            player_spawn,
        })
    }

    /// Reads and parses the level file under the given asset root.
    ///
    /// # Errors
    ///
    /// Returns `MapError::Read` when the file cannot be read, which is fatal at startup.
    pub fn load(root: &Path) -> Result<Self, MapError> {
        let bytes = get_asset_bytes_from(root, Asset::Level)?;
        let text = String::from_utf8(bytes.into_owned())?;
        let level = Self::parse(&text)?;

        debug!(
            ground = level.count(TileKind::Ground),
            hazards = level.count(TileKind::Hazard),
            spawn = ?level.player_spawn,
            "Loaded level"
        );
        Ok(level)
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn player_spawn(&self) -> IVec2 {
        self.player_spawn
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.placements.iter().filter(|p| p.kind == kind).count()
    }
}
