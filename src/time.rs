//! Frame timing.
//!
//! [`Time`] is updated once at the start of each frame. It is the single
//! monotonic time source for the whole app: the surface sampler, the light
//! animator, and the frame parameter assembler all receive
//! [`elapsed_secs`](Time::elapsed_secs) explicitly instead of reading a
//! global clock.

use std::time::{Duration, Instant};

/// Frame timing state. Owned by the window loop, updated every frame.
#[derive(Clone, Copy)]
pub struct Time {
    /// When the app started.
    startup: Instant,
    /// When the current frame started.
    frame_start: Instant,
    /// Duration of the previous frame.
    delta: Duration,
    /// Total time since app startup.
    elapsed: Duration,
    /// Frame counter.
    frame_count: u64,
}

impl Time {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            startup: now,
            frame_start: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Call at the start of each frame to update timing.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now - self.frame_start;
        self.frame_start = now;
        self.elapsed = now - self.startup;
        self.frame_count += 1;
    }

    /// Duration of the previous frame.
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Total elapsed time in seconds. Monotonically non-decreasing.
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Number of frames rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Estimated FPS based on the last frame's delta.
    pub fn fps(&self) -> f32 {
        if self.delta.as_secs_f32() > 0.0 {
            1.0 / self.delta.as_secs_f32()
        } else {
            0.0
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_tracks_the_frame_gap() {
        let mut time = Time::new();
        std::thread::sleep(Duration::from_millis(5));
        time.update();
        assert!(time.delta() >= Duration::from_millis(5));
        assert!(time.delta() <= time.elapsed);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let mut time = Time::new();
        let mut last = time.elapsed_secs();
        for _ in 0..5 {
            time.update();
            let now = time.elapsed_secs();
            assert!(now >= last);
            last = now;
        }
        assert_eq!(time.frame_count(), 5);
    }
}
