//! The Entity-Component-System (ECS) module.
//!
//! This module contains all the ECS-related logic, including components, systems,
//! and resources.

pub mod animation;
pub mod camera;
pub mod collision;
pub mod components;
pub mod input;
pub mod player;
pub mod render;
pub mod round;

pub use self::animation::*;
pub use self::camera::*;
pub use self::collision::*;
pub use self::components::*;
pub use self::input::*;
pub use self::player::*;
pub use self::render::*;
pub use self::round::*;
