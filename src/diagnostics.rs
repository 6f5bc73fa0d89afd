// diagnostics.rs
// Tick timing bookkeeping published for HUD display. Pure observation;
// never feeds back into the physics.

use std::collections::VecDeque;
use std::time::Duration;

/// Summary of recent tick cost, in milliseconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickStats {
    pub last_ms: f32,
    pub mean_ms: f32,
    pub max_ms: f32,
    pub ticks_per_second: f32,
}

/// Sliding-window tick timer. A window of 1 disables averaging.
pub struct TickTimer {
    window: usize,
    samples: VecDeque<Duration>,
}

impl TickTimer {
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            samples: VecDeque::new(),
        }
    }

    /// Record one tick's wall-clock duration and return the refreshed
    /// stats.
    pub fn record(&mut self, elapsed: Duration) -> TickStats {
        self.samples.push_back(elapsed);
        if self.samples.len() > self.window {
            self.samples.pop_front();
        }
        self.stats()
    }

    pub fn stats(&self) -> TickStats {
        let last = match self.samples.back() {
            Some(d) => *d,
            None => return TickStats::default(),
        };
        let total: Duration = self.samples.iter().sum();
        let mean_s = total.as_secs_f32() / self.samples.len() as f32;
        let max = self.samples.iter().max().copied().unwrap_or(last);
        TickStats {
            last_ms: last.as_secs_f32() * 1.0e3,
            mean_ms: mean_s * 1.0e3,
            max_ms: max.as_secs_f32() * 1.0e3,
            ticks_per_second: if mean_s > 0.0 { 1.0 / mean_s } else { 0.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_bounded() {
        let mut timer = TickTimer::new(3);
        for ms in [1, 2, 3, 4, 5] {
            timer.record(Duration::from_millis(ms));
        }
        let stats = timer.stats();
        // only the last three samples (3, 4, 5 ms) survive
        assert!((stats.mean_ms - 4.0).abs() < 1e-3);
        assert!((stats.max_ms - 5.0).abs() < 1e-3);
        assert!((stats.last_ms - 5.0).abs() < 1e-3);
    }

    #[test]
    fn empty_timer_reports_zeroes() {
        let timer = TickTimer::new(10);
        let stats = timer.stats();
        assert_eq!(stats.last_ms, 0.0);
        assert_eq!(stats.ticks_per_second, 0.0);
    }

    #[test]
    fn zero_window_is_floored_to_one() {
        let mut timer = TickTimer::new(0);
        timer.record(Duration::from_millis(2));
        timer.record(Duration::from_millis(8));
        let stats = timer.stats();
        assert!((stats.mean_ms - 8.0).abs() < 1e-3);
    }
}
