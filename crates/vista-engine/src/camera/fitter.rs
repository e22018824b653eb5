use thiserror::Error;

use crate::coords::{ScreenSize, Vec2, Viewport};

/// Size of the world area the camera must keep visible, in world units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TargetResolution {
    pub width: f32,
    pub height: f32,
}

impl TargetResolution {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn aspect(self) -> f32 {
        self.width / self.height
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Default for TargetResolution {
    fn default() -> Self {
        Self::new(4.0, 4.0)
    }
}

impl From<Vec2> for TargetResolution {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Rejected fitter input. Both sizes must be strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FitError {
    #[error("invalid {source_name} dimension {width}x{height}")]
    InvalidDimension {
        source_name: &'static str,
        width: f32,
        height: f32,
    },
}

/// Inputs of the last successful fit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FitCache {
    pub target: TargetResolution,
    pub screen: ScreenSize,
}

/// Result of a recomputation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FitOutput {
    /// Orthographic half-height.
    pub camera_size: f32,
    pub viewport: Viewport,
    /// Cache to pass into the next call.
    pub cache: FitCache,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FitOutcome {
    Changed(FitOutput),
    /// Inputs match the cache exactly; the previous output is still valid.
    NoChange,
}

/// Computes camera size and viewport for `target` shown on `screen`.
///
/// Returns `NoChange` when both inputs equal the cached ones. On error the
/// caller's cache is not touched.
pub fn fit(
    target: TargetResolution,
    screen: ScreenSize,
    cache: Option<FitCache>,
) -> Result<FitOutcome, FitError> {
    if let Some(c) = cache {
        if c.target == target && c.screen == screen {
            return Ok(FitOutcome::NoChange);
        }
    }

    if !target.is_valid() {
        return Err(FitError::InvalidDimension {
            source_name: "target",
            width: target.width,
            height: target.height,
        });
    }
    if !screen.is_valid() {
        return Err(FitError::InvalidDimension {
            source_name: "screen",
            width: screen.width,
            height: screen.height,
        });
    }

    let camera_size = target.width.max(target.height);
    let letterbox_ratio = screen.aspect() / target.aspect();

    let viewport = if letterbox_ratio >= 1.0 {
        // Screen too wide: bars left and right.
        let w = 1.0 / letterbox_ratio;
        Viewport::new((1.0 - w) / 2.0, 0.0, w, 1.0)
    } else {
        // Screen too tall: bars top and bottom.
        let h = letterbox_ratio;
        Viewport::new(0.0, (1.0 - h) / 2.0, 1.0, h)
    };

    Ok(FitOutcome::Changed(FitOutput {
        camera_size,
        viewport,
        cache: FitCache { target, screen },
    }))
}

/// Stateful wrapper around [`fit`] owning the memoization cache.
#[derive(Debug, Default, Clone)]
pub struct ViewportFitter {
    cache: Option<FitCache>,
}

impl ViewportFitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last inputs that produced an output, if any.
    pub fn cache(&self) -> Option<FitCache> {
        self.cache
    }

    /// Forgets the cache so the next call recomputes unconditionally.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    pub fn fit(
        &mut self,
        target: TargetResolution,
        screen: ScreenSize,
    ) -> Result<FitOutcome, FitError> {
        let outcome = fit(target, screen, self.cache)?;
        if let FitOutcome::Changed(out) = &outcome {
            self.cache = Some(out.cache);
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn changed(outcome: FitOutcome) -> FitOutput {
        match outcome {
            FitOutcome::Changed(out) => out,
            FitOutcome::NoChange => panic!("expected a recomputed fit"),
        }
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn square_on_square_is_full_screen() {
        for (t, s) in [(1.0, 100.0), (4.0, 1080.0), (12.5, 7.0)] {
            let outcome = fit(TargetResolution::new(t, t), ScreenSize::new(s, s), None);
            let out = changed(outcome.unwrap());
            assert_eq!(out.viewport, Viewport::full());
        }
    }

    #[test]
    fn wide_screen_pillarboxes() {
        let out = changed(
            fit(TargetResolution::new(4.0, 4.0), ScreenSize::new(1920.0, 1080.0), None).unwrap(),
        );
        let v = out.viewport;
        assert!(approx(v.width, 0.5625));
        assert!(approx(v.x, 0.21875));
        assert_eq!(v.y, 0.0);
        assert_eq!(v.height, 1.0);
        assert!(v.is_pillarboxed());
        assert!(v.is_normalized());
    }

    #[test]
    fn portrait_screen_letterboxes() {
        let out = changed(
            fit(TargetResolution::new(16.0, 9.0), ScreenSize::new(1080.0, 1920.0), None).unwrap(),
        );
        let v = out.viewport;
        let expected_h = (1080.0 / 1920.0) / (16.0 / 9.0);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.width, 1.0);
        assert!(approx(v.height, expected_h));
        assert!(approx(v.y, (1.0 - expected_h) / 2.0));
        assert!(v.is_letterboxed());
        assert!(!v.is_pillarboxed());
        assert!(v.is_normalized());
    }

    #[test]
    fn camera_size_is_larger_extent() {
        let out = changed(
            fit(TargetResolution::new(16.0, 9.0), ScreenSize::new(800.0, 600.0), None).unwrap(),
        );
        assert_eq!(out.camera_size, 16.0);
    }

    #[test]
    fn bars_are_centered() {
        let out = changed(
            fit(TargetResolution::new(3.0, 1.0), ScreenSize::new(1000.0, 1000.0), None).unwrap(),
        );
        let v = out.viewport;
        assert!(approx(v.y, 1.0 - (v.y + v.height)));
    }

    // ── memoization ───────────────────────────────────────────────────────

    #[test]
    fn identical_inputs_return_no_change() {
        let mut fitter = ViewportFitter::new();
        let target = TargetResolution::new(4.0, 4.0);
        let screen = ScreenSize::new(1920.0, 1080.0);

        assert!(matches!(fitter.fit(target, screen), Ok(FitOutcome::Changed(_))));
        assert_eq!(fitter.fit(target, screen), Ok(FitOutcome::NoChange));
    }

    #[test]
    fn changed_screen_recomputes() {
        let mut fitter = ViewportFitter::new();
        let target = TargetResolution::new(4.0, 4.0);
        fitter.fit(target, ScreenSize::new(1920.0, 1080.0)).unwrap();
        let out = changed(fitter.fit(target, ScreenSize::new(1080.0, 1080.0)).unwrap());
        assert_eq!(out.viewport, Viewport::full());
        assert_eq!(fitter.cache().unwrap().screen, ScreenSize::new(1080.0, 1080.0));
    }

    #[test]
    fn returned_cache_matches_inputs() {
        let target = TargetResolution::new(5.0, 2.0);
        let screen = ScreenSize::new(640.0, 480.0);
        let out = changed(fit(target, screen, None).unwrap());
        assert_eq!(out.cache, FitCache { target, screen });
        assert_eq!(fit(target, screen, Some(out.cache)), Ok(FitOutcome::NoChange));
    }

    #[test]
    fn invalidate_forces_recompute() {
        let mut fitter = ViewportFitter::new();
        let target = TargetResolution::default();
        let screen = ScreenSize::new(100.0, 50.0);
        fitter.fit(target, screen).unwrap();
        fitter.invalidate();
        assert!(matches!(fitter.fit(target, screen), Ok(FitOutcome::Changed(_))));
    }

    // ── invalid input ─────────────────────────────────────────────────────

    #[test]
    fn zero_screen_height_is_rejected() {
        let err = fit(TargetResolution::new(4.0, 4.0), ScreenSize::new(1920.0, 0.0), None)
            .unwrap_err();
        assert!(matches!(err, FitError::InvalidDimension { source_name: "screen", .. }));
    }

    #[test]
    fn negative_target_is_rejected() {
        let err = fit(TargetResolution::new(-1.0, 4.0), ScreenSize::new(10.0, 10.0), None)
            .unwrap_err();
        assert!(matches!(err, FitError::InvalidDimension { source_name: "target", .. }));
    }

    #[test]
    fn rejected_input_keeps_cache() {
        let mut fitter = ViewportFitter::new();
        let target = TargetResolution::new(4.0, 4.0);
        let screen = ScreenSize::new(1920.0, 1080.0);
        fitter.fit(target, screen).unwrap();

        assert!(fitter.fit(target, ScreenSize::new(0.0, 0.0)).is_err());
        assert_eq!(fitter.cache(), Some(FitCache { target, screen }));
        assert_eq!(fitter.fit(target, screen), Ok(FitOutcome::NoChange));
    }

    #[test]
    fn nan_dimension_is_rejected() {
        let target = TargetResolution::new(f32::NAN, 1.0);
        assert!(fit(target, ScreenSize::new(1.0, 1.0), None).is_err());
    }
}
