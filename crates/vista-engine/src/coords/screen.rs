/// Screen size in physical pixels, as reported by the host each frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convenience constructor for integer pixel sizes coming from a window system.
    #[inline]
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f32, height as f32)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height. Only meaningful when `is_valid`.
    #[inline]
    pub fn aspect(self) -> f32 {
        self.width / self.height
    }
}
