//! Time management utilities

use std::time::Instant;

/// Clamp a measured frame delta.
///
/// Deltas above `max_delta` are replaced by `nominal_delta` so a stall
/// (debugger break, window drag) does not turn into one huge simulation step.
/// Negative or NaN deltas become zero.
pub fn clamp_frame_delta(measured: f32, nominal_delta: f32, max_delta: f32) -> f32 {
    if measured.is_nan() || measured <= 0.0 {
        0.0
    } else if measured > max_delta {
        nominal_delta
    } else {
        measured
    }
}

/// Frame timer producing clamped deltas for the update loop
pub struct FrameClock {
    last_frame: Instant,
    nominal_delta: f32,
    max_delta: f32,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl FrameClock {
    /// Create a new clock starting now
    pub fn new(nominal_delta: f32, max_delta: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            nominal_delta,
            max_delta,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance the clock by one frame and return the clamped delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let measured = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.advance(measured)
    }

    /// Advance the clock by an externally measured delta
    pub fn advance(&mut self, measured: f32) -> f32 {
        let delta = clamp_frame_delta(measured, self.nominal_delta, self.max_delta);
        if delta != measured {
            log::warn!(
                "Frame delta {:.4}s out of range, using {:.4}s",
                measured,
                delta
            );
        }
        self.delta_time = delta;
        self.total_time += delta;
        self.frame_count += 1;
        delta
    }

    /// Get the delta of the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total simulated time
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
