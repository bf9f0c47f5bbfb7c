//! Frame timing for the redraw-driven scene loop.
//!
//! The renderers advance most of their state by a fixed amount per frame
//! (phase, rotation, color interpolation), so the clock's main job is to
//! measure wall time for the few effects that need it (bob motion, hint
//! timer, orbit damping) and to clamp pathological frame gaps.

use std::time::{Duration, Instant};

use tracing::warn;

/// Maximum frame time in seconds. Frames longer than this (debugger pause,
/// suspended laptop) are clamped so time-based animation does not jump.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Measures the wall-clock time between redraws.
pub struct FrameClock {
    previous: Instant,
    start: Instant,
    frame_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            previous: now,
            start: now,
            frame_count: 0,
        }
    }

    /// Advance to the next frame and return the clamped delta time.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let mut dt = now.duration_since(self.previous);
        self.previous = now;
        self.frame_count += 1;

        if dt.as_secs_f64() > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.3}s exceeds maximum, clamping to {}s",
                dt.as_secs_f64(),
                MAX_FRAME_TIME
            );
            dt = Duration::from_secs_f64(MAX_FRAME_TIME);
        }
        dt
    }

    /// Total wall time since the clock was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Number of frames ticked so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Gates per-frame scene callbacks so teardown can stop them synchronously.
///
/// Once cancelled, no further callbacks run, even if redraw events are
/// already queued. Cancelling an already-cancelled scheduler is a no-op.
pub struct FrameScheduler {
    active: bool,
    invocations: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            active: true,
            invocations: 0,
        }
    }

    /// Claim the next frame. Returns false once cancelled, and the caller
    /// must then skip its frame work entirely.
    pub fn begin_frame(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.invocations += 1;
        true
    }

    /// Stop all future callbacks. Idempotent.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of callbacks that have run.
    pub fn invocations(&self) -> u64 {
        self.invocations
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_returns_positive_dt() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(1));
        let dt = clock.tick();
        assert!(dt > Duration::ZERO);
        assert_eq!(clock.frame_count(), 1);
    }

    #[test]
    fn dt_is_clamped_to_max_frame_time() {
        let mut clock = FrameClock::new();
        // Simulate a long stall by backdating the previous frame.
        clock.previous = Instant::now() - Duration::from_secs(5);
        let dt = clock.tick();
        assert!(dt.as_secs_f64() <= MAX_FRAME_TIME);
    }

    #[test]
    fn scheduler_claims_frames_while_active() {
        let mut scheduler = FrameScheduler::new();
        assert!(scheduler.begin_frame());
        assert!(scheduler.begin_frame());
        assert_eq!(scheduler.invocations(), 2);
    }

    #[test]
    fn cancelled_scheduler_invokes_zero_callbacks() {
        let mut scheduler = FrameScheduler::new();
        scheduler.cancel();
        let mut ran = 0;
        // Simulated tick after cancel: the frame must not be claimed and no
        // frame work runs.
        if scheduler.begin_frame() {
            ran += 1;
        }
        assert_eq!(ran, 0);
        assert_eq!(scheduler.invocations(), 0);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut scheduler = FrameScheduler::new();
        scheduler.cancel();
        scheduler.cancel();
        assert!(!scheduler.is_active());
        assert!(!scheduler.begin_frame());
        assert_eq!(scheduler.invocations(), 0);
    }
}
