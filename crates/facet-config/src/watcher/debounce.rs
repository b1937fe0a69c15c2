//! Trailing-edge debounce for change notifications.

use std::time::{Duration, Instant};

/// Quiet period required after the last change before a reload fires.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

/// Fires once after changes stop arriving for `window`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    last_change: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_change: None,
        }
    }

    /// Record a change; restarts the quiet period.
    pub fn notify(&mut self, now: Instant) {
        self.last_change = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.last_change.is_some()
    }

    /// True exactly once when the quiet period has elapsed.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last_change {
            Some(at) if now.saturating_duration_since(at) >= self.window => {
                self.last_change = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_debouncer_never_fires() {
        let mut d = Debouncer::default();
        assert!(!d.ready(Instant::now()));
        assert!(!d.is_pending());
    }

    #[test]
    fn fires_once_after_window() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(500));
        d.notify(start);
        assert!(!d.ready(start + Duration::from_millis(100)));
        assert!(d.ready(start + Duration::from_millis(500)));
        assert!(!d.ready(start + Duration::from_millis(900)));
    }

    #[test]
    fn new_change_restarts_window() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(500));
        d.notify(start);
        d.notify(start + Duration::from_millis(400));
        assert!(!d.ready(start + Duration::from_millis(600)));
        assert!(d.ready(start + Duration::from_millis(900)));
    }
}
