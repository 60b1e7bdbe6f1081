/// Fixed-rate frame clock.
/// Turns variable wall-clock deltas into a whole number of simulation frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Seconds per simulation frame.
    frame_dt: f32,
    /// Wall time not yet turned into frames.
    accumulator: f32,
    /// Most frames a single `accumulate` call may return.
    max_frames: u32,
}

impl FrameClock {
    /// A clock running `frames_per_sec` frames, catching up at most
    /// `max_frames` per call. Both are clamped to at least 1.
    pub fn new(frames_per_sec: u32, max_frames: u32) -> Self {
        Self {
            frame_dt: 1.0 / frames_per_sec.max(1) as f32,
            accumulator: 0.0,
            max_frames: max_frames.max(1),
        }
    }

    /// Add elapsed seconds. Returns the number of frames to run.
    pub fn accumulate(&mut self, elapsed: f32) -> u32 {
        if !elapsed.is_finite() || elapsed <= 0.0 {
            return 0;
        }
        self.accumulator += elapsed;
        // Drop time beyond the catch-up cap instead of spiralling.
        self.accumulator = self.accumulator.min(self.frame_dt * self.max_frames as f32);
        let frames = (self.accumulator / self.frame_dt) as u32;
        self.accumulator -= frames as f32 * self.frame_dt;
        frames
    }

    /// Fraction of the next frame already accumulated (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.frame_dt
    }

    pub fn frame_dt(&self) -> f32 {
        self.frame_dt
    }
}
