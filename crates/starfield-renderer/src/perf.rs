//! Frame pacing and timing.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Longest step handed to the simulation, in frames. Keeps a stall (window
/// drag, debugger pause) from flinging stars across the field.
pub const MAX_FRAME_STEP: f32 = 4.0;

/// Tracks frame durations for FPS calculation.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    max_samples: usize,
}

impl FrameTimer {
    /// Create a new frame timer with a 120-sample rolling window.
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::new(),
            last_frame: Instant::now(),
            max_samples: 120,
        }
    }

    /// Record the start of a new frame. Call this once per frame.
    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        self.frame_times.push_back(now - self.last_frame);
        self.last_frame = now;
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        (total / self.frame_times.len() as f64) * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-rate frame gate.
///
/// [`FrameGate::poll`] returns `None` until a full target frame has passed
/// since the last accepted frame, then the elapsed time measured in target
/// frames (about `1.0` at the target rate, capped at [`MAX_FRAME_STEP`]).
pub struct FrameGate {
    frame_duration: Duration,
    last: Instant,
}

impl FrameGate {
    pub fn new(frame_rate: u32) -> Self {
        Self::starting_at(frame_rate, Instant::now())
    }

    pub fn starting_at(frame_rate: u32, start: Instant) -> Self {
        Self {
            frame_duration: Duration::from_secs_f64(1.0 / frame_rate.max(1) as f64),
            last: start,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// When the next frame becomes due.
    pub fn next_deadline(&self) -> Instant {
        self.last + self.frame_duration
    }

    pub fn poll(&mut self, now: Instant) -> Option<f32> {
        let elapsed = now.checked_duration_since(self.last)?;
        if elapsed < self.frame_duration {
            return None;
        }
        self.last = now;
        let frames = elapsed.as_secs_f64() / self.frame_duration.as_secs_f64();
        Some((frames as f32).min(MAX_FRAME_STEP))
    }
}
