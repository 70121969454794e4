//! Frame timing

/// Turns animation-frame timestamps (ms) into per-frame deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time: f64,
}

impl FrameClock {
    /// `start_time` is the timestamp the first delta is measured from
    pub fn new(start_time: f64) -> Self {
        Self {
            last_time: start_time,
        }
    }

    /// Milliseconds since the previous call. A late frame simply yields a larger delta.
    pub fn delta(&mut self, timestamp: f64) -> f64 {
        let dt = (timestamp - self.last_time).max(0.0);
        self.last_time = timestamp;
        dt
    }
}

/// Rolling frames-per-second over the last 60 frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }
    }
}

impl FpsCounter {
    pub fn record(&mut self, time: f64) {
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % 60;

        // Oldest slot is the one we write next
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time - oldest_time;
            if elapsed > 0.0 {
                self.fps = (59_000.0 / elapsed).round() as u32;
            }
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_deltas() {
        let mut clock = FrameClock::new(1000.0);
        assert_eq!(clock.delta(1016.0), 16.0);
        assert_eq!(clock.delta(1050.0), 34.0);
        // Dropped frames show up as one big delta
        assert_eq!(clock.delta(1550.0), 500.0);
    }

    #[test]
    fn test_frame_clock_never_negative() {
        let mut clock = FrameClock::new(100.0);
        assert_eq!(clock.delta(90.0), 0.0);
        assert_eq!(clock.delta(110.0), 20.0);
    }

    #[test]
    fn test_fps_counter() {
        let mut fps = FpsCounter::default();
        for i in 1..60 {
            fps.record(i as f64 * 20.0);
        }
        // Window not full yet
        assert_eq!(fps.fps(), 0);

        fps.record(60.0 * 20.0);
        assert_eq!(fps.fps(), 50);

        fps.record(61.0 * 20.0);
        assert_eq!(fps.fps(), 50);
    }
}
