//! Frame timing for the periodic FPS log line.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How often [`FrameTimer::report_due`] fires.
pub const REPORT_INTERVAL: Duration = Duration::from_secs(1);

const WINDOW: usize = 120;

/// Sliding window over the last [`WINDOW`] frame intervals.
pub struct FrameTimer {
    intervals: VecDeque<Duration>,
    window_total: Duration,
    previous: Instant,
    last_report: Instant,
}

impl FrameTimer {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            intervals: VecDeque::with_capacity(WINDOW),
            window_total: Duration::ZERO,
            previous: now,
            last_report: now,
        }
    }

    /// Mark the start of a frame.
    pub fn begin_frame(&mut self) {
        self.record(Instant::now());
    }

    fn record(&mut self, now: Instant) {
        let interval = now.saturating_duration_since(self.previous);
        self.previous = now;
        self.intervals.push_back(interval);
        self.window_total += interval;
        if self.intervals.len() > WINDOW {
            if let Some(oldest) = self.intervals.pop_front() {
                self.window_total -= oldest;
            }
        }
    }

    /// Frames per second over the window, 0 until a frame took time.
    pub fn fps(&self) -> f64 {
        let secs = self.window_total.as_secs_f64();
        if secs > 0.0 {
            self.intervals.len() as f64 / secs
        } else {
            0.0
        }
    }

    /// Mean interval in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        match self.intervals.len() {
            0 => 0.0,
            n => self.window_total.as_secs_f64() * 1000.0 / n as f64,
        }
    }

    pub fn sample_count(&self) -> usize {
        self.intervals.len()
    }

    /// True once per [`REPORT_INTERVAL`].
    pub fn report_due(&mut self, now: Instant) -> bool {
        let due = now.saturating_duration_since(self.last_report) >= REPORT_INTERVAL;
        if due {
            self.last_report = now;
        }
        due
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_timer_reports_nothing() {
        let timer = FrameTimer::default();
        assert_eq!(timer.sample_count(), 0);
        assert_eq!(timer.fps(), 0.0);
        assert_eq!(timer.frame_time_ms(), 0.0);
    }

    #[test]
    fn twenty_ms_frames_are_fifty_fps() {
        let mut timer = FrameTimer::new();
        let start = timer.previous;
        for i in 1..=10 {
            timer.record(start + Duration::from_millis(20 * i));
        }
        assert!((timer.fps() - 50.0).abs() < 1e-9);
        assert!((timer.frame_time_ms() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn window_drops_oldest_interval() {
        let mut timer = FrameTimer::new();
        let start = timer.previous;
        // one slow frame, then a full window of fast ones pushes it out
        timer.record(start + Duration::from_millis(500));
        for i in 1..=WINDOW as u64 {
            timer.record(start + Duration::from_millis(500 + 10 * i));
        }
        assert_eq!(timer.sample_count(), WINDOW);
        assert!((timer.frame_time_ms() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn report_fires_once_per_interval() {
        let mut timer = FrameTimer::new();
        let start = timer.last_report;
        assert!(!timer.report_due(start + Duration::from_millis(500)));
        assert!(timer.report_due(start + Duration::from_millis(1000)));
        assert!(!timer.report_due(start + Duration::from_millis(1500)));
        assert!(timer.report_due(start + Duration::from_millis(2100)));
    }
}
