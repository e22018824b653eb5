//! Vista engine crate.
//!
//! This crate owns the host-independent pieces used by the game layer:
//! geometry, the camera viewport fitter, frame timing and input state.

pub mod camera;
pub mod input;
pub mod time;

pub mod logging;
pub mod coords;
