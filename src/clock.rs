// Frame counting for the FPS report.
// Visual: none on screen; an "FPS: 60.0" line reaches the log once per second.

use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Frame counter with a once-per-second FPS report.
#[derive(Debug)]
pub struct FrameCounter {
    window_start: Instant,
    frames_in_window: u32,
    total: u64,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { window_start: start, frames_in_window: 0, total: 0 }
    }

    /// Count one frame. Returns the frame rate when a report interval has passed.
    pub fn tick(&mut self) -> Option<f32> {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> Option<f32> {
        self.total += 1;
        self.frames_in_window += 1;

        let elapsed = now.duration_since(self.window_start);
        if elapsed < REPORT_INTERVAL {
            return None;
        }
        let fps = self.frames_in_window as f32 / elapsed.as_secs_f32();
        self.frames_in_window = 0;
        self.window_start = now;
        Some(fps)
    }

    /// Frames counted since creation.
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl Default for FrameCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_once_per_second() {
        let start = Instant::now();
        let mut counter = FrameCounter::starting_at(start);

        for i in 1..30u64 {
            assert_eq!(counter.tick_at(start + Duration::from_millis(i * 30)), None);
        }
        let fps = counter.tick_at(start + Duration::from_secs(1)).unwrap();
        assert!((fps - 30.0).abs() < 0.01);

        // New window starts at the report.
        assert_eq!(counter.tick_at(start + Duration::from_millis(1500)), None);
        assert_eq!(counter.total(), 31);
    }
}
