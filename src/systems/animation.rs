use bevy_ecs::component::Component;
use bevy_ecs::system::{Query, Res};
use smallvec::SmallVec;
use tracing::trace;

use crate::systems::{CameraShift, Renderable};

/// Walk cycle driven by horizontal scrolling rather than by time.
///
/// Every pixel the world scrolls sideways is banked; each `frame_hold` pixels step the
/// cycle forward by one frame. Frames are horizontal offsets into the sprite's sheet row.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct WalkAnimation {
    pub accumulated: f32,
    pub current_frame: usize,
    pub frames: SmallVec<[u16; 4]>,
    pub frame_hold: u32,
}

impl WalkAnimation {
    pub fn new(frames: &[u16], frame_hold: u32) -> Self {
        Self {
            accumulated: 0.0,
            current_frame: 0,
            frames: SmallVec::from_slice(frames),
            frame_hold,
        }
    }

    /// Banks a horizontal displacement and returns the new sheet offset when the frame changes.
    pub fn advance(&mut self, dx: f32) -> Option<u16> {
        if self.frames.is_empty() || self.frame_hold == 0 {
            return None;
        }

        let hold = self.frame_hold as f32;
        let cycle = self.frames.len();
        self.accumulated += dx.abs();

        let frame = (self.accumulated / hold).round_ties_even() as usize % cycle;
        if frame == self.current_frame {
            return None;
        }

        self.current_frame = frame;
        // Keep the bank bounded to one full cycle
        self.accumulated %= cycle as f32 * hold;
        Some(self.frames[frame])
    }
}

/// Re-slices the sprite of walking entities from this tick's camera shift.
pub fn walk_animation_system(shift: Res<CameraShift>, mut query: Query<(&mut WalkAnimation, &mut Renderable)>) {
    for (mut animation, mut renderable) in query.iter_mut() {
        if let Some(x) = animation.advance(shift.0.x) {
            trace!(frame = animation.current_frame, offset = x, "Walk frame changed");
            renderable.sprite = renderable.sprite.at_x(x);
        }
    }
}
