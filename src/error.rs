//! Centralized error types for the game.
//!
//! This module defines all error types used throughout the application,
//! providing a consistent error handling approach.

use std::io;

use bevy_ecs::event::Event;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur during game operation.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Error type for level text that cannot produce a playable round.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Level has no player spawn ('p') cell")]
    MissingPlayerSpawn,
    #[error("Level must have exactly one player spawn ('p') cell, found {0}")]
    MultiplePlayerSpawns(usize),
}

/// Errors related to loading a level.
#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("Could not read level file: {0}")]
    Read(#[from] AssetError),

    #[error("Level file is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Invalid level: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to texture operations.
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture: {0}")]
    LoadFailed(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
