use crate::coords::Vec3;

use super::fitter::TargetResolution;

/// Smallest extent zooming may shrink a target resolution to, per axis.
pub const MIN_TARGET_EXTENT: f32 = 1.0;

/// Grows or shrinks `current` by `magnitude * speed` on both axes.
///
/// Each axis is clamped to [`MIN_TARGET_EXTENT`] independently; there is no
/// upper bound.
pub fn zoom(current: TargetResolution, magnitude: f32, speed: f32) -> TargetResolution {
    let step = magnitude * speed;
    TargetResolution::new(
        (current.width + step).max(MIN_TARGET_EXTENT),
        (current.height + step).max(MIN_TARGET_EXTENT),
    )
}

/// Moves the camera over `target` on the ground plane, keeping its height.
///
/// Without a target the camera position is returned unchanged.
pub fn follow_horizontal(camera_pos: Vec3, target_pos: Option<Vec3>) -> Vec3 {
    match target_pos {
        Some(t) => Vec3::new(t.x, camera_pos.y, t.z),
        None => camera_pos,
    }
}
