use std::collections::HashMap;

use bevy_ecs::resource::Resource;
use bevy_ecs::system::{NonSendMut, Res, ResMut};
use bitflags::bitflags;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Scancode;
use sdl2::EventPump;
use tracing::{debug, info};

bitflags! {
    /// Logical keys the game reacts to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Keys: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const UP = 1 << 2;
        const DOWN = 1 << 3;
        const JUMP = 1 << 4;
        const START = 1 << 5;
        const QUIT = 1 << 6;
    }
}

#[derive(Debug, Clone, Resource)]
pub struct Bindings {
    key_bindings: HashMap<Scancode, Keys>,
}

impl Default for Bindings {
    fn default() -> Self {
        let key_bindings = HashMap::from([
            (Scancode::Left, Keys::LEFT),
            (Scancode::Right, Keys::RIGHT),
            (Scancode::Up, Keys::UP),
            (Scancode::Down, Keys::DOWN),
            (Scancode::Space, Keys::JUMP),
            (Scancode::C, Keys::START),
            (Scancode::Escape, Keys::QUIT),
        ]);

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn get(&self, scancode: Scancode) -> Keys {
        self.key_bindings.get(&scancode).copied().unwrap_or_default()
    }

    /// Maps a set of physically pressed scancodes to the logical keys they are bound to.
    pub fn snapshot(&self, pressed: impl IntoIterator<Item = Scancode>) -> Keys {
        pressed.into_iter().fold(Keys::empty(), |keys, scancode| keys | self.get(scancode))
    }
}

/// The keyboard snapshot for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Resource)]
pub struct InputState {
    /// Logical keys held this tick.
    pub held: Keys,
    /// Keys held this tick that were not held on the previous one.
    pub pressed: Keys,
    /// Set when the window was closed during this tick.
    pub quit_signal: bool,
    pub focused: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            held: Keys::empty(),
            pressed: Keys::empty(),
            quit_signal: false,
            focused: true,
        }
    }
}

impl InputState {
    /// Replaces the held set, recording which keys went down since the last update.
    pub fn update(&mut self, held: Keys) {
        self.pressed = held - self.held;
        self.held = held;
    }

    /// Whether the window was closed or the quit key went down this tick.
    pub fn quit_requested(&self) -> bool {
        self.quit_signal || self.pressed.contains(Keys::QUIT)
    }
}

/// Drains window events and snapshots the keyboard state.
pub fn input_system(bindings: Res<Bindings>, mut input: ResMut<InputState>, mut pump: NonSendMut<EventPump>) {
    input.quit_signal = false;
    for event in pump.poll_iter() {
        match event {
            Event::Quit { .. } => {
                info!("Window close requested");
                input.quit_signal = true;
            }
            Event::Window { win_event, .. } => match win_event {
                WindowEvent::FocusGained => {
                    debug!("Window focus gained");
                    input.focused = true;
                }
                WindowEvent::FocusLost => {
                    debug!("Window focus lost");
                    input.focused = false;
                }
                _ => {}
            },
            _ => {}
        }
    }

    let held = bindings.snapshot(pump.keyboard_state().pressed_scancodes());
    input.update(held);
}
