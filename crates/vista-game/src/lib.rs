//! Vista game layer.
//!
//! Game-side components built on `vista-engine`. Everything that would be a
//! global singleton in an engine scripting setup is an explicit value here,
//! owned by [`GameContext`] and passed to whoever needs it.

pub mod context;
pub mod manager;
pub mod player;
pub mod scene;
pub mod settings;

pub use context::GameContext;
pub use manager::{DevUi, GameCommand, GameManager};
pub use player::Player;
pub use settings::{GameSettings, SettingsError};
