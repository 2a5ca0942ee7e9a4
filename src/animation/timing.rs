//! Easing curves for drawer slides.
//!
//! A slide samples its curve once per frame with the fraction of the slide
//! duration that has elapsed. Every built-in curve maps 0 to 0 and 1 to 1.
//!
//! ```ignore
//! let config = DrawerConfig::default()
//!     .timing(TimingFunction::EaseOut)
//!     .slide_duration_ms(180);
//! ```

use std::sync::Arc;

/// Curve that maps elapsed time to slide progress
#[derive(Clone)]
pub enum TimingFunction {
    /// Constant speed
    Linear,
    /// Accelerates away from the start
    EaseIn,
    /// Decelerates into the target
    EaseOut,
    /// Accelerates, then decelerates
    EaseInOut,
    /// Host-provided curve
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// Progress at `t`, the elapsed fraction of the slide. `t` is clamped to
    /// `[0, 1]` before the curve is applied.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => t * t,
            TimingFunction::EaseOut => t * (2.0 - t),
            TimingFunction::EaseInOut if t < 0.5 => 2.0 * t * t,
            TimingFunction::EaseInOut => -1.0 + (4.0 - 2.0 * t) * t,
            TimingFunction::Custom(curve) => curve(t),
        }
    }

    pub fn custom<F>(curve: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(curve))
    }
}

impl std::fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TimingFunction::Linear => "Linear",
            TimingFunction::EaseIn => "EaseIn",
            TimingFunction::EaseOut => "EaseOut",
            TimingFunction::EaseInOut => "EaseInOut",
            TimingFunction::Custom(_) => "Custom",
        };
        f.write_str(name)
    }
}
