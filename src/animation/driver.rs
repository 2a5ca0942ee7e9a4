use std::time::Instant;

use crate::animation::{Animatable, Transition, Tween, TweenStep};

/// Identifies one started animation.
///
/// Starting a new animation invalidates the previous handle, so a superseded
/// tween can never report completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

/// Owns at most one running tween at a time.
pub struct AnimationDriver<T: Animatable> {
    next_id: u64,
    active: Option<(AnimationHandle, Tween<T>)>,
}

impl<T: Animatable> Default for AnimationDriver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Animatable> AnimationDriver<T> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            active: None,
        }
    }

    /// Start a tween from `from` to `to`, replacing any running one
    pub fn start(&mut self, from: T, to: T, transition: Transition) -> AnimationHandle {
        let handle = AnimationHandle(self.next_id);
        self.next_id += 1;
        if let Some((old, _)) = self.active.take() {
            log::trace!("Animation {:?} superseded by {:?}", old, handle);
        }
        self.active = Some((handle, Tween::new(from, to, transition)));
        handle
    }

    /// Drop the running tween without completing it
    pub fn cancel(&mut self) -> Option<AnimationHandle> {
        self.active.take().map(|(handle, _)| handle)
    }

    pub fn is_current(&self, handle: AnimationHandle) -> bool {
        self.active.as_ref().is_some_and(|(h, _)| *h == handle)
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Duration of the running tween, in milliseconds
    pub fn current_duration_ms(&self) -> Option<f32> {
        self.active.as_ref().map(|(_, tween)| tween.duration_ms())
    }

    /// Advance the running tween. A finished tween is released, so its
    /// handle stops being current after this call.
    pub fn advance(&mut self, now: Instant) -> Option<(AnimationHandle, TweenStep<T>)> {
        let (handle, tween) = self.active.as_mut()?;
        let handle = *handle;
        let step = tween.advance(now);
        if step.is_finished() {
            self.active = None;
        }
        Some((handle, step))
    }
}
