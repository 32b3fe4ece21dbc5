//! Frame timing.
//!
//! There is no frame cap: the loop runs as fast as rendering and output allow,
//! and movement scales with the measured elapsed time.

use std::time::Instant;

/// Timing for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous tick
    pub elapsed: f32,
    /// Instantaneous frames per second (`0` when no time elapsed)
    pub fps: f32,
}

impl FrameTime {
    pub fn from_elapsed(elapsed: f32) -> Self {
        let fps = if elapsed > 0.0 { 1.0 / elapsed } else { 0.0 };
        Self { elapsed, fps }
    }
}

/// Measures the time between successive frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self { last: now }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Tick with a caller-supplied timestamp. Timestamps earlier than the
    /// previous tick yield zero elapsed time.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let elapsed = now.saturating_duration_since(self.last).as_secs_f32();
        if now > self.last {
            self.last = now;
        }
        FrameTime::from_elapsed(elapsed)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Rolling frame counter that reports the average FPS once per window.
#[derive(Debug, Clone)]
pub struct FrameStats {
    window_secs: f32,
    frames: u32,
    accumulated: f32,
}

impl FrameStats {
    pub fn new(window_secs: f32) -> Self {
        Self {
            window_secs,
            frames: 0,
            accumulated: 0.0,
        }
    }

    /// Record one frame. Returns `(frames, average_fps)` when a window closes.
    pub fn record(&mut self, elapsed: f32) -> Option<(u32, f32)> {
        self.frames += 1;
        self.accumulated += elapsed;
        if self.accumulated < self.window_secs {
            return None;
        }
        let out = (self.frames, self.frames as f32 / self.accumulated);
        self.frames = 0;
        self.accumulated = 0.0;
        Some(out)
    }
}
