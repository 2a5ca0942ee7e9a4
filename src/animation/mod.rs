mod animatable;
mod driver;
mod timing;
mod tween;

pub use animatable::Animatable;
pub use driver::{AnimationDriver, AnimationHandle};
pub use timing::TimingFunction;
pub use tween::{Tween, TweenStep};

/// Configuration for how a value should animate when it changes
#[derive(Clone, Debug)]
pub struct Transition {
    /// Duration of the animation in milliseconds
    pub duration_ms: f32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
        }
    }
}
