use std::time::Instant;

use crate::animation::{Animatable, Transition};

/// Result of advancing a tween by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenStep<T> {
    /// Intermediate value, more frames are needed
    Running(T),
    /// Final value, always exactly the target
    Finished(T),
}

impl<T: Copy> TweenStep<T> {
    pub fn value(&self) -> T {
        match self {
            TweenStep::Running(v) | TweenStep::Finished(v) => *v,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, TweenStep::Finished(_))
    }
}

/// Time-driven interpolation between two values.
///
/// The clock is anchored on the first call to [`Tween::advance`], so a tween
/// created between frames starts from its start value on the next frame.
pub struct Tween<T: Animatable> {
    start: T,
    target: T,
    /// Time of the first advance, `None` until the first frame
    start_time: Option<Instant>,
    transition: Transition,
    finished: bool,
}

impl<T: Animatable> Tween<T> {
    pub fn new(start: T, target: T, transition: Transition) -> Self {
        Self {
            start,
            target,
            start_time: None,
            transition,
            finished: false,
        }
    }

    /// Advance to `now` and return the value for this frame
    pub fn advance(&mut self, now: Instant) -> TweenStep<T> {
        if self.finished {
            return TweenStep::Finished(self.target);
        }

        let start_time = *self.start_time.get_or_insert(now);
        let elapsed_ms = now.saturating_duration_since(start_time).as_secs_f32() * 1000.0;
        let duration_ms = self.transition.duration_ms;

        if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
            // Land on the target itself, not on lerp(.., 1.0), to avoid drift
            self.finished = true;
            return TweenStep::Finished(self.target);
        }

        let eased_t = self.transition.timing.evaluate(elapsed_ms / duration_ms);
        TweenStep::Running(T::lerp(&self.start, &self.target, eased_t))
    }

    pub fn duration_ms(&self) -> f32 {
        self.transition.duration_ms
    }
}
