//! One-shot "drag to explore" hint window.

use std::time::Duration;

/// How long the hint stays visible after the scene mounts.
pub const HINT_DURATION: Duration = Duration::from_secs(3);

/// Tracks the hint window. Once dismissed it never comes back for this
/// scene instance.
#[derive(Clone, Copy, Debug)]
pub struct HintTimer {
    elapsed: Duration,
    dismissed: bool,
}

impl HintTimer {
    pub fn new() -> Self {
        Self {
            elapsed: Duration::ZERO,
            dismissed: false,
        }
    }

    /// Accumulate frame time. Returns whether the hint is visible after
    /// this tick.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.dismissed {
            self.elapsed += dt;
            if self.elapsed >= HINT_DURATION {
                self.dismissed = true;
            }
        }
        !self.dismissed
    }

    pub fn visible(&self) -> bool {
        !self.dismissed
    }
}

impl Default for HintTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_visible_until_deadline() {
        let mut hint = HintTimer::new();
        assert!(hint.tick(Duration::from_millis(1500)));
        assert!(hint.visible());
        assert!(!hint.tick(Duration::from_millis(1500)));
        assert!(!hint.visible());
    }

    #[test]
    fn test_hint_never_returns() {
        let mut hint = HintTimer::new();
        hint.tick(Duration::from_secs(10));
        assert!(!hint.visible());
        assert!(!hint.tick(Duration::ZERO));
        assert!(!hint.tick(Duration::from_secs(100)));
    }
}
