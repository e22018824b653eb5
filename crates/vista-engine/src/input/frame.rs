use std::collections::HashSet;

use crate::coords::Vec2;

use super::types::{InputEvent, Key, MouseWheelDelta};

/// Wheel units reported per wheel notch.
///
/// Pixel deltas are taken as wheel units directly.
pub const WHEEL_UNITS_PER_LINE: f32 = 120.0;

/// Per-frame input deltas. Cleared by the host after each frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    pub keys_pressed: HashSet<Key>,
    pub keys_released: HashSet<Key>,

    /// Accumulated wheel motion this frame, in wheel units.
    pub wheel: Vec2,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.wheel = Vec2::zero();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub(crate) fn add_wheel(&mut self, delta: MouseWheelDelta) {
        let d = match delta {
            MouseWheelDelta::Line { x, y } => Vec2::new(x, y) * WHEEL_UNITS_PER_LINE,
            MouseWheelDelta::Pixel { x, y } => Vec2::new(x, y),
        };
        self.wheel = self.wheel + d;
    }
}
