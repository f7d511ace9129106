//! Feed the croco: a side-scrolling platformer library crate.

pub mod app;
pub mod asset;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatter;
pub mod game;
pub mod map;
pub mod platform;
pub mod systems;
pub mod texture;
