/// Fixed-timestep accumulator for physics-style updates.
///
/// Frame deltas are accumulated and drained in whole `step` sized chunks.
/// At most `max_steps` are produced per frame; leftover backlog beyond that is
/// dropped so a slow frame cannot snowball.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    max_steps: u32,
    accumulator: f32,
}

impl FixedStep {
    /// Default rate of 50 Hz.
    pub const DEFAULT_STEP: f32 = 0.02;

    /// `step` is raised to `f32::EPSILON` when smaller (or NaN).
    pub fn new(step: f32, max_steps: u32) -> Self {
        Self {
            step: step.max(f32::EPSILON),
            max_steps,
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Adds `dt` seconds and returns how many fixed steps to run this frame.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }

        if steps == self.max_steps && self.accumulator >= self.step {
            log::trace!("dropping {:.4}s of fixed-step backlog", self.accumulator);
            self.accumulator %= self.step;
        }

        steps
    }

    /// Fraction of a step left in the accumulator, for interpolation.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP, 5)
    }
}
