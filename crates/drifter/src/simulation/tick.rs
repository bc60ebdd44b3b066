pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TICK_RATE)
    }
}

impl FixedTimestep {
    pub const DEFAULT_TICK_RATE: u32 = 50;

    /// Longest frame fed into the accumulator; longer frames are truncated.
    const MAX_FRAME: f32 = 0.25;

    pub fn new(tick_rate: u32) -> Self {
        Self {
            dt: 1.0 / tick_rate.max(1) as f32,
            accumulator: 0.0,
        }
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn accumulate(&mut self, delta: f32) {
        self.accumulator += delta.clamp(0.0, Self::MAX_FRAME);
    }

    pub fn consume_tick(&mut self) -> bool {
        if self.accumulator >= self.dt {
            self.accumulator -= self.dt;
            true
        } else {
            false
        }
    }
}
