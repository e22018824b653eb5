use crate::coords::{ScreenSize, Vec2, Vec3, Viewport};

use super::fitter::{FitOutcome, FitOutput, TargetResolution, ViewportFitter};
use super::motion::{follow_horizontal, zoom};

/// Camera rig configuration.
#[derive(Debug, Clone)]
pub struct CameraRigConfig {
    /// World area kept visible on screen.
    pub target_resolution: TargetResolution,
    /// Target resolution change per unit of zoom magnitude.
    pub zoom_speed: f32,
    /// Track the follow target on the ground plane each frame.
    pub follow: bool,
    /// Initial camera position.
    pub position: Vec3,
}

impl Default for CameraRigConfig {
    fn default() -> Self {
        Self {
            target_resolution: TargetResolution::default(),
            zoom_speed: 0.1,
            follow: false,
            position: Vec3::new(0.0, 10.0, 0.0),
        }
    }
}

/// An orthographic camera kept fitted to the screen.
///
/// Holds the last applied camera size and viewport; a frame with invalid
/// dimensions leaves them as they were.
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub target_resolution: TargetResolution,
    pub zoom_speed: f32,
    pub follow: bool,
    pub position: Vec3,

    fitter: ViewportFitter,
    camera_size: Option<f32>,
    viewport: Option<Viewport>,
}

impl CameraRig {
    pub fn new(config: CameraRigConfig) -> Self {
        Self {
            target_resolution: config.target_resolution,
            zoom_speed: config.zoom_speed,
            follow: config.follow,
            position: config.position,
            fitter: ViewportFitter::new(),
            camera_size: None,
            viewport: None,
        }
    }

    /// Orthographic half-height applied by the last successful fit.
    pub fn camera_size(&self) -> Option<f32> {
        self.camera_size
    }

    /// Viewport applied by the last successful fit.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Per-frame update: refit if needed, then follow the target when enabled.
    ///
    /// Returns the new fit when one was computed this frame.
    pub fn update(&mut self, screen: ScreenSize, follow_target: Option<Vec3>) -> Option<FitOutput> {
        let fitted = match self.fitter.fit(self.target_resolution, screen) {
            Ok(FitOutcome::Changed(out)) => {
                log::debug!(
                    "camera refit: size={} viewport={:?} screen={}x{}",
                    out.camera_size,
                    out.viewport,
                    screen.width,
                    screen.height,
                );
                self.camera_size = Some(out.camera_size);
                self.viewport = Some(out.viewport);
                Some(out)
            }
            Ok(FitOutcome::NoChange) => None,
            Err(err) => {
                log::warn!("skipping camera fit this frame: {err}");
                None
            }
        };

        if self.follow {
            self.position = follow_horizontal(self.position, follow_target);
        }

        fitted
    }

    /// Ground-plane point under a screen pixel (bottom-left origin).
    ///
    /// The camera looks straight down with +Z pointing up the screen. Returns
    /// `None` before the first fit and for pixels on the bars.
    pub fn screen_to_ground(&self, screen: ScreenSize, pixel: Vec2) -> Option<Vec3> {
        let (half_h, viewport) = (self.camera_size?, self.viewport?);
        let rect = viewport.to_pixels(screen);
        if rect.is_empty() || !rect.contains(pixel) {
            return None;
        }

        let half_w = half_h * rect.size.x / rect.size.y;
        let u = (pixel.x - rect.origin.x) / rect.size.x;
        let v = (pixel.y - rect.origin.y) / rect.size.y;

        Some(Vec3::new(
            self.position.x + (u * 2.0 - 1.0) * half_w,
            0.0,
            self.position.z + (v * 2.0 - 1.0) * half_h,
        ))
    }

    /// Zooms the view by `magnitude`; positive values show more of the world.
    pub fn zoom_view(&mut self, magnitude: f32) {
        self.target_resolution = zoom(self.target_resolution, magnitude, self.zoom_speed);
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraRigConfig::default())
    }
}
