//! Keyboard and pointer input mapping

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    /// Start over after the game is won or lost
    Restart,
    /// Toggle idle/demo mode
    Demo,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            "Enter" => Some(Key::Restart),
            "d" | "D" => Some(Key::Demo),
            _ => None,
        }
    }
}

/// Held-direction flags, updated by key events between ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left_held: bool,
    pub right_held: bool,
    /// Autopilot steers the paddle
    pub demo: bool,
}

impl Controls {
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = true,
            Key::Right => self.right_held = true,
            Key::Restart | Key::Demo => {}
        }
    }

    pub fn release(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = false,
            Key::Right => self.right_held = false,
            Key::Demo => {
                self.demo = !self.demo;
                log::info!("Demo mode: {}", self.demo);
            }
            Key::Restart => {}
        }
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left_held: self.left_held,
            right_held: self.right_held,
        }
    }
}

/// Convert a client-space pointer coordinate to surface space
#[inline]
pub fn pointer_x(client_x: f32, surface_offset_left: f32) -> f32 {
    client_x - surface_offset_left
}
