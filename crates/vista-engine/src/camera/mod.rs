//! Orthographic camera fitting.
//!
//! The fitter keeps a configured target resolution visible on any screen by
//! shrinking the active viewport: pillarbox bars when the screen is relatively
//! wider than the target, letterbox bars when it is relatively taller.
//!
//! Intended usage:
//! - one `CameraRig` per camera, owned by the game context
//! - call `CameraRig::update` once per frame with the current screen size

mod fitter;
mod motion;
mod rig;

pub use fitter::{fit, FitCache, FitError, FitOutcome, FitOutput, TargetResolution, ViewportFitter};
pub use motion::{follow_horizontal, zoom, MIN_TARGET_EXTENT};
pub use rig::{CameraRig, CameraRigConfig};
