use super::{Rect, ScreenSize, Vec2};

/// Active drawing region as a fraction of the full screen.
///
/// All fields live in [0, 1]; `x + width <= 1` and `y + height <= 1` up to
/// floating-point tolerance. The remainder of the screen is bar area.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Tolerance used by [`Viewport::is_normalized`].
    pub const EPSILON: f32 = 1e-5;

    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// The whole screen, no bars.
    #[inline]
    pub const fn full() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// True when bars are needed on the left and right.
    #[inline]
    pub fn is_pillarboxed(self) -> bool {
        self.width < 1.0 - Self::EPSILON
    }

    /// True when bars are needed on the top and bottom.
    #[inline]
    pub fn is_letterboxed(self) -> bool {
        self.height < 1.0 - Self::EPSILON
    }

    pub fn is_normalized(self) -> bool {
        let in_unit = |v: f32| v >= -Self::EPSILON && v <= 1.0 + Self::EPSILON;
        in_unit(self.x)
            && in_unit(self.y)
            && in_unit(self.width)
            && in_unit(self.height)
            && self.x + self.width <= 1.0 + Self::EPSILON
            && self.y + self.height <= 1.0 + Self::EPSILON
    }

    /// The drawing region in pixels for a given screen.
    pub fn to_pixels(self, screen: ScreenSize) -> Rect {
        Rect::new(
            self.x * screen.width,
            self.y * screen.height,
            self.width * screen.width,
            self.height * screen.height,
        )
    }

    /// Whether a pixel position (bottom-left origin) hits the drawing region
    /// rather than a bar.
    pub fn contains_pixel(self, screen: ScreenSize, p: Vec2) -> bool {
        self.to_pixels(screen).contains(p)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::full()
    }
}
