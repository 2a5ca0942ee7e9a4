use std::collections::VecDeque;
use std::time::Instant;

use super::constants::VELOCITY_HISTORY;

/// Estimates pointer velocity along one axis from recent movement.
#[derive(Debug, Default)]
pub struct VelocityTracker {
    history: VecDeque<Sample>,
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    delta: f32,
    time: Instant,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Pushes a new reading into the tracker.
    pub fn push(&mut self, delta: f32, time: Instant) {
        // Pointer timestamps should increase monotonically.
        if let Some(last) = self.history.back() {
            if time < last.time {
                log::trace!("ignoring pointer sample older than the last one");
                return;
            }
        }

        self.history.push_back(Sample { delta, time });
        self.trim_history();
    }

    /// Velocity in pixels per second, 0 when there is not enough history.
    pub fn velocity(&self) -> f32 {
        let (Some(first), Some(last)) = (self.history.front(), self.history.back()) else {
            return 0.0;
        };

        let total_time = last.time.duration_since(first.time).as_secs_f32();
        if total_time == 0.0 {
            return 0.0;
        }

        // The oldest sample only anchors the window.
        let total_delta: f32 = self.history.iter().skip(1).map(|s| s.delta).sum();
        total_delta / total_time
    }

    fn trim_history(&mut self) {
        let Some(&Sample { time, .. }) = self.history.back() else {
            return;
        };

        while let Some(first) = self.history.front() {
            if time <= first.time + VELOCITY_HISTORY {
                break;
            }

            let _ = self.history.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(VelocityTracker::new().velocity(), 0.0);
    }

    #[test]
    fn test_constant_motion() {
        let mut tracker = VelocityTracker::new();
        let t0 = Instant::now();
        tracker.push(0.0, t0);
        for i in 1..=5 {
            tracker.push(-20.0, t0 + Duration::from_millis(10 * i));
        }
        assert!((tracker.velocity() + 2000.0).abs() < 1.0);
    }

    #[test]
    fn test_old_samples_are_trimmed() {
        let mut tracker = VelocityTracker::new();
        let t0 = Instant::now();
        tracker.push(0.0, t0);
        tracker.push(300.0, t0 + Duration::from_millis(10));
        // Pointer rested, then lifted much later
        tracker.push(0.0, t0 + Duration::from_millis(400));
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn test_out_of_order_sample_ignored() {
        let mut tracker = VelocityTracker::new();
        let t0 = Instant::now();
        tracker.push(0.0, t0 + Duration::from_millis(20));
        tracker.push(50.0, t0);
        assert_eq!(tracker.velocity(), 0.0);
    }
}
