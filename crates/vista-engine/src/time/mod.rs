//! Frame timing.
//!
//! - `FrameClock::tick` once per presented frame yields a clamped `FrameTime`
//! - `FixedStep` turns variable frame deltas into fixed simulation steps

mod fixed_step;
mod frame_clock;

pub use fixed_step::FixedStep;
pub use frame_clock::{FrameClock, FrameTime};
