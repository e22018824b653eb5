//! Input state.
//!
//! Host-agnostic: the host translates its window system events into
//! `InputEvent`s and feeds them through `InputState::apply_event`. Gameplay
//! reads held state from `InputState` and per-frame transitions from
//! `InputFrame`.

mod frame;
mod state;
mod types;

pub use frame::{InputFrame, WHEEL_UNITS_PER_LINE};
pub use state::InputState;
pub use types::{
    ActionPhase,
    InputEvent,
    Key,
    KeyState,
    MouseWheelDelta,
};
