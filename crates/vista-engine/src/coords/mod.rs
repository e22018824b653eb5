//! Coordinate and geometry types shared by the camera and the game layer.
//!
//! Two spaces are in play:
//! - world units (`Vec2`, `Vec3`), +Y up, the XZ plane is the ground
//! - normalized screen space (`Viewport`), [0, 1] on both axes, origin bottom-left
//!
//! `ScreenSize` is the only type measured in physical pixels.

mod rect;
mod screen;
mod vec2;
mod vec3;
mod viewport;

pub use rect::Rect;
pub use screen::ScreenSize;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use viewport::Viewport;
