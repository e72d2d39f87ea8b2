use std::time::{Duration, Instant};

/// Wall-clock delta between ticks.
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call (or since construction).
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        dt.as_secs_f64()
    }
}

/// Average frame cost over one reporting window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub avg_ms: f64,
    pub fps: f64,
    pub frames: usize,
}

/// Accumulates frame times and yields a [`FrameReport`] once per `every`.
pub struct FrameStats {
    every: Duration,
    acc_time: Duration,   // cumulated frame time
    acc_frames: usize,    // frames in the current window
    window_start: Instant,
}

impl FrameStats {
    pub fn new(every: Duration) -> Self {
        Self::starting_at(every, Instant::now())
    }

    fn starting_at(every: Duration, start: Instant) -> Self {
        Self {
            every,
            acc_time: Duration::ZERO,
            acc_frames: 0,
            window_start: start,
        }
    }

    /// Add one frame that took `frame`; returns a report when the window closes.
    pub fn record(&mut self, frame: Duration) -> Option<FrameReport> {
        self.record_at(frame, Instant::now())
    }

    fn record_at(&mut self, frame: Duration, now: Instant) -> Option<FrameReport> {
        self.acc_time += frame;
        self.acc_frames += 1;
        if now.duration_since(self.window_start) < self.every {
            return None;
        }
        let avg_ms = self.acc_time.as_secs_f64() * 1000.0 / self.acc_frames as f64;
        let report = FrameReport {
            avg_ms,
            fps: if avg_ms > 0.0 { 1000.0 / avg_ms } else { f64::INFINITY },
            frames: self.acc_frames,
        };
        self.acc_time = Duration::ZERO;
        self.acc_frames = 0;
        self.window_start = now;
        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_once_per_window() {
        let t0 = Instant::now();
        let mut stats = FrameStats::starting_at(Duration::from_secs(3), t0);
        let ms = Duration::from_millis(10);

        assert_eq!(stats.record_at(ms, t0 + Duration::from_secs(1)), None);
        let r = stats
            .record_at(ms, t0 + Duration::from_secs(3))
            .expect("window elapsed");
        assert_eq!(r.frames, 2);
        assert!((r.avg_ms - 10.0).abs() < 1e-9);
        assert!((r.fps - 100.0).abs() < 1e-6);

        // counters restart
        assert_eq!(stats.record_at(ms, t0 + Duration::from_secs(4)), None);
    }

    #[test]
    fn clock_is_monotonic() {
        let mut clock = FrameClock::new();
        assert!(clock.tick() >= 0.0);
    }
}
