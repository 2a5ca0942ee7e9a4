//! Classification of raw pointer events into handle gestures.
//!
//! [`GestureInterpreter`] turns a down / move / up stream into the intents the
//! drawer reacts to:
//!
//! - [`Gesture::Press`] on pointer down
//! - [`Gesture::Drag`] for every move once the touch slop is crossed
//! - [`Gesture::Fling`] when a drag ends fast enough
//! - [`Gesture::Release`] when a drag (or a long press) ends slowly
//! - [`Gesture::Tap`] for a short press that never became a drag
//!
//! Vertical displacement is measured in screen coordinates: negative values
//! move the pointer up.

pub mod constants;
mod tracker;

pub use tracker::VelocityTracker;

use std::time::Instant;

use crate::widgets::Event;

use constants::{LONG_PRESS_TIMEOUT, MAX_FLING_VELOCITY, MIN_FLING_VELOCITY, TOUCH_SLOP};

/// A classified pointer gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Pointer went down on the handle
    Press,
    /// Pointer moved while dragging
    Drag {
        /// Vertical displacement since the previous drag tick
        delta_y: f32,
        /// Vertical displacement since the press
        total_y: f32,
    },
    /// Drag ended with enough velocity to be a throw
    Fling {
        /// Vertical velocity in pixels per second (positive = downward)
        velocity_y: f32,
    },
    /// Short press without a drag
    Tap,
    /// Drag or long press ended without a fling
    Release,
    /// The platform aborted a press that never became a drag
    Cancel,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    x: f32,
    y: f32,
    time: Instant,
    /// Last position reported through a drag tick
    last_drag_y: f32,
    /// Last position fed to the velocity tracker
    last_sample_y: f32,
}

/// Stateful classifier for a single pointer
#[derive(Debug, Default)]
pub struct GestureInterpreter {
    press: Option<Press>,
    dragging: bool,
    tracker: VelocityTracker,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// True between the first drag tick and the end of the gesture
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// True while a pointer is down
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Feed one event, returning the gesture it completes or advances
    pub fn handle(&mut self, event: &Event) -> Option<Gesture> {
        match *event {
            Event::PointerDown { x, y, time } => {
                self.press = Some(Press {
                    x,
                    y,
                    time,
                    last_drag_y: y,
                    last_sample_y: y,
                });
                self.dragging = false;
                self.tracker.reset();
                self.tracker.push(0.0, time);
                Some(Gesture::Press)
            }
            Event::PointerMove { x, y, time } => {
                let press = self.press.as_mut()?;
                self.tracker.push(y - press.last_sample_y, time);
                press.last_sample_y = y;

                if !self.dragging {
                    let dx = x - press.x;
                    let dy = y - press.y;
                    if dx * dx + dy * dy <= TOUCH_SLOP * TOUCH_SLOP {
                        return None;
                    }
                    log::trace!("Touch slop crossed, drag started");
                    self.dragging = true;
                }

                let delta_y = y - press.last_drag_y;
                press.last_drag_y = y;
                Some(Gesture::Drag {
                    delta_y,
                    total_y: y - press.y,
                })
            }
            Event::PointerUp { y, time, .. } => {
                let press = self.press.take()?;
                self.tracker.push(y - press.last_sample_y, time);
                let was_dragging = std::mem::replace(&mut self.dragging, false);

                if was_dragging {
                    let velocity_y = self.tracker.velocity();
                    if velocity_y.abs() >= MIN_FLING_VELOCITY {
                        Some(Gesture::Fling {
                            velocity_y: velocity_y.clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY),
                        })
                    } else {
                        Some(Gesture::Release)
                    }
                } else if time.saturating_duration_since(press.time) < LONG_PRESS_TIMEOUT {
                    Some(Gesture::Tap)
                } else {
                    Some(Gesture::Release)
                }
            }
            Event::PointerCancel => {
                self.press.take()?;
                if std::mem::replace(&mut self.dragging, false) {
                    Some(Gesture::Release)
                } else {
                    Some(Gesture::Cancel)
                }
            }
        }
    }
}
