//! Time management utilities

use std::time::{Duration, Instant};

/// Frame timer measuring the time between consecutive loop iterations
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame)
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    /// Update the timer with an explicit timestamp
    pub fn update_at(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.delta_time = elapsed.as_secs_f32();
        self.total_time += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

/// Fixed-rate loop throttle
///
/// Sleeps for whatever is left of a fixed frame period once the frame's work
/// is done. A frame that overruns the period is not compensated for.
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Duration,
    frame_start: Instant,
}

impl FramePacer {
    /// Create a pacer targeting `frame_rate` iterations per second
    ///
    /// A rate of zero disables pacing.
    pub fn new(frame_rate: u32) -> Self {
        let period = if frame_rate == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / frame_rate
        };
        Self {
            period,
            frame_start: Instant::now(),
        }
    }

    /// The fixed frame period
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Mark the start of a frame
    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Budget left in the period after `elapsed` of work
    pub fn remaining_after(&self, elapsed: Duration) -> Duration {
        self.period.saturating_sub(elapsed)
    }

    /// Sleep for the remaining budget of the current frame
    pub fn wait(&self) {
        let remaining = self.remaining_after(self.frame_start.elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}
