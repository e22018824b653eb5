//! Player controller.
//!
//! Input arrives through the `on_*` callbacks and is stored until the next
//! update consumes it. Movement and rotation are restricted to the XZ plane.

use vista_engine::coords::{Vec2, Vec3};
use vista_engine::input::{ActionPhase, WHEEL_UNITS_PER_LINE};

use crate::settings::GameSettings;

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec3,
    /// Rotation about +Y in radians; zero faces +Z.
    pub yaw: f32,
    /// World units per second.
    pub speed: f32,

    look_input: Vec2,
    move_input: Vec2,
    zoom_input: f32,
}

impl Player {
    pub fn new(position: Vec3, speed: f32) -> Self {
        Self {
            position,
            yaw: 0.0,
            speed,
            look_input: Vec2::zero(),
            move_input: Vec2::zero(),
            zoom_input: 0.0,
        }
    }

    pub fn on_look(&mut self, value: Vec2) {
        self.look_input = value;
    }

    pub fn on_move(&mut self, value: Vec2) {
        self.move_input = value;
    }

    /// Raw wheel value in wheel units. Only the start of a scroll counts;
    /// scrolling toward the user zooms out.
    pub fn on_zoom(&mut self, raw: f32, phase: ActionPhase) {
        if phase == ActionPhase::Started {
            self.zoom_input = raw / -WHEEL_UNITS_PER_LINE;
        }
    }

    pub fn look_input(&self) -> Vec2 {
        self.look_input
    }

    pub fn move_input(&self) -> Vec2 {
        self.move_input
    }

    /// Pending zoom in notches, reset to zero.
    pub fn take_zoom(&mut self) -> f32 {
        std::mem::take(&mut self.zoom_input)
    }

    /// Unit vector the player is facing.
    pub fn facing(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }

    /// Moves along `direction` at the current speed for `dt` seconds.
    ///
    /// Only the direction matters; its length is normalized away.
    pub fn move_player(&mut self, direction: Vec3, dt: f32) {
        self.position += direction.normalize_or_zero() * (self.speed * dt);
    }

    /// Turns to face `target`, ignoring height difference.
    pub fn rotate_player(&mut self, target: Vec3) {
        let to_target = (target - self.position).flatten().normalize_or_zero();
        if to_target == Vec3::zero() {
            return;
        }
        self.yaw = to_target.x.atan2(to_target.z);
    }

    /// One fixed simulation step driven by the stored move input.
    ///
    /// Move input X maps to world X, input Y to world Z.
    pub fn fixed_update(&mut self, step: f32) {
        let m = self.move_input;
        if m == Vec2::zero() {
            return;
        }
        self.move_player(Vec3::new(m.x, 0.0, m.y), step);
    }

    pub fn smooth_zoom(&self, raw: f32, settings: &GameSettings) -> f32 {
        smooth_zoom(raw, settings.zoom_attune, settings.zoom_cutoff)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec3::zero(), 1.0)
    }
}

/// Attenuates raw zoom and drops values under `cutoff`.
pub fn smooth_zoom(raw: f32, attune: f32, cutoff: f32) -> f32 {
    let smooth = raw * attune;
    if smooth.abs() < cutoff { 0.0 } else { smooth }
}
