//! Map parsing functionality for converting raw level text into placement events.

use glam::IVec2;

use crate::error::ParseError;

/// The kind of entity a level cell places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Ground,
    Player,
    Hazard,
}

/// A single entity-creation event produced by scanning a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub kind: TileKind,
    /// Grid coordinate of the cell, in tiles.
    pub cell: IVec2,
}

/// Parser for converting raw level text into placement events.
pub struct LevelParser;

impl LevelParser {
    /// Maps a level character to the entity it places, if any.
    pub fn parse_character(c: char) -> Option<TileKind> {
        match c {
            'b' => Some(TileKind::Ground),
            'p' => Some(TileKind::Player),
            'k' => Some(TileKind::Hazard),
            _ => None,
        }
    }

    /// Scans rows top-to-bottom and columns left-to-right, emitting one placement per
    /// recognized cell. Unrecognized characters are skipped.
    pub fn parse_placements(text: &str) -> Vec<Placement> {
        text.lines()
            .enumerate()
            .flat_map(|(y, line)| {
                line.chars().enumerate().filter_map(move |(x, c)| {
                    Self::parse_character(c).map(|kind| Placement {
                        kind,
                        cell: IVec2::new(x as i32, y as i32),
                    })
                })
            })
            .collect()
    }

    /// Parses level text and requires exactly one player spawn.
    pub fn parse_level(text: &str) -> Result<Vec<Placement>, ParseError> {
        let placements = Self::parse_placements(text);
        match placements.iter().filter(|p| p.kind == TileKind::Player).count() {
            0 => Err(ParseError::MissingPlayerSpawn),
            1 => Ok(placements),
            n => Err(ParseError::MultiplePlayerSpawns(n)),
        }
    }
}
