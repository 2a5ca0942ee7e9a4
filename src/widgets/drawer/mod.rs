//! Vertically sliding drawer.
//!
//! The drawer hosts a single content element above a handle. Dragging the
//! handle moves the content with the pointer; releasing, flinging or tapping
//! settles it open or closed with a timed slide.
//!
//! The host drives the drawer with four calls:
//!
//! - [`Drawer::on_layout`] once the content height is known
//! - [`Drawer::event`] for pointer events on the handle
//! - [`Drawer::advance_animations`] once per frame while it returns true
//! - [`Drawer::take_change_flags`] to learn what to re-layout or repaint
//!
//! # Example
//! ```ignore
//! let mut drawer = Drawer::new(DrawerConfig::default().peek(16.0));
//! drawer.set_content(menu)?;
//! drawer.on_state_change(|state| log::info!("drawer is {:?}", state));
//! drawer.on_layout(400.0);
//! drawer.open();
//! while drawer.advance_animations(Instant::now()) {
//!     // wait for the next frame
//! }
//! ```

mod config;
mod listeners;
mod state;
mod translation;

pub use config::DrawerConfig;
pub use listeners::{DrawerCallback, DrawerEvent, DrawerEvents, ListenerId, Listeners};
pub use state::DrawerState;
pub use translation::{shows_open_handle, Translation};

use std::time::{Duration, Instant};

use crate::animation::{AnimationDriver, AnimationHandle, TimingFunction, Transition};
use crate::error::{DrawerError, Result};
use crate::gesture::{Gesture, GestureInterpreter};
use crate::invalidation::{ChangeFlags, Invalidation};
use crate::resources::{NoResources, ResourceResolver};

use super::handle::{Handle, HandleContent};
use super::image::ImageSource;
use super::widget::{Element, Event, EventResponse};

/// Below this percent a close starts out already settled
const CLOSED_EPSILON: f32 = 0.01;

/// Duration of a slide, scaled down by the release velocity.
///
/// `translation_start` is the offset the slide starts from. A zero velocity
/// keeps the base duration; faster releases shorten it, never lengthen it.
pub fn slide_duration_ms(base_ms: f32, velocity: f32, translation_start: f32) -> f32 {
    if velocity == 0.0 {
        return base_ms;
    }
    (base_ms / (velocity / translation_start)).abs().min(base_ms)
}

/// Animation in flight and what it settles into
#[derive(Debug, Clone, Copy)]
struct Slide {
    handle: AnimationHandle,
    target: DrawerState,
    trigger_listeners: bool,
}

/// Request made before the first layout, replayed once geometry is known
#[derive(Debug, Clone, Copy, PartialEq)]
enum PendingIntent {
    Slide {
        target: DrawerState,
        animate: bool,
        trigger_listeners: bool,
    },
    Toggle,
}

pub struct Drawer {
    handle: Handle,
    content: Option<Box<dyn Element>>,
    content_enabled: bool,
    /// `None` until the first layout
    translation: Option<Translation>,
    state: DrawerState,
    /// Last release velocity in px/s, 0 outside of a fling
    velocity: f32,
    /// Offset snapshot taken when the last slide began
    translation_start: f32,
    dragging: bool,
    /// Offset when the current drag started
    drag_origin: f32,
    peek: f32,
    slide_duration_ms: u32,
    initial_state: DrawerState,
    timing: TimingFunction,
    gestures: GestureInterpreter,
    animations: AnimationDriver<f32>,
    slide: Option<Slide>,
    pending: Option<PendingIntent>,
    listeners: Listeners,
    invalidation: Invalidation,
}

impl Drawer {
    pub fn new(config: DrawerConfig) -> Self {
        Self::with_resources(config, &NoResources)
    }

    /// Create a drawer, resolving named indicators through `resolver`
    pub fn with_resources(config: DrawerConfig, resolver: &dyn ResourceResolver) -> Self {
        let open = config
            .open_indicator
            .as_ref()
            .map(|indicator| {
                indicator.resolve(resolver, config.open_color, config.handle_text_size)
            })
            .unwrap_or_default();
        let closed = config
            .closed_indicator
            .as_ref()
            .map(|indicator| {
                indicator.resolve(resolver, config.closed_color, config.handle_text_size)
            })
            .unwrap_or_default();
        let initial_state = config.initial_state.resting();

        let mut handle = Handle::new(
            open,
            closed,
            config.handle_background,
            config.handle_id,
            config.handle_width,
            config.handle_height,
        );
        handle.show_open(initial_state == DrawerState::Open);

        Self {
            handle,
            content: None,
            content_enabled: initial_state == DrawerState::Open,
            translation: None,
            state: initial_state,
            velocity: 0.0,
            translation_start: 0.0,
            dragging: false,
            drag_origin: 0.0,
            peek: config.peek,
            slide_duration_ms: config.slide_duration_ms,
            initial_state,
            timing: config.timing,
            gestures: GestureInterpreter::new(),
            animations: AnimationDriver::new(),
            slide: None,
            pending: None,
            listeners: Listeners::new(),
            invalidation: Invalidation::default(),
        }
    }

    // ------------------------------------------------------------------
    // Content and handle
    // ------------------------------------------------------------------

    /// Place the single content element. Fails if content is already set.
    pub fn set_content(&mut self, content: impl Element + 'static) -> Result<()> {
        if self.content.is_some() {
            return Err(DrawerError::ContentAlreadySet);
        }
        let mut content: Box<dyn Element> = Box::new(content);
        content.set_enabled(self.content_enabled);
        self.content = Some(content);
        self.invalidation.request_layout();
        Ok(())
    }

    pub fn content(&self) -> Option<&dyn Element> {
        self.content.as_deref()
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Replace the indicator shown while the drawer is mostly open
    pub fn set_open_handle(&mut self, content: HandleContent) {
        self.handle.replace_open(content);
        self.invalidation.request_layout();
    }

    /// Replace the indicator shown while the drawer is mostly closed
    pub fn set_closed_handle(&mut self, content: HandleContent) {
        self.handle.replace_closed(content);
        self.invalidation.request_layout();
    }

    pub fn set_handle_background(&mut self, background: Option<ImageSource>) {
        self.handle.set_background(background);
        self.invalidation.request_paint();
    }

    // ------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------

    /// Register a callback for the event kinds in `events`
    pub fn add_listener(
        &mut self,
        events: DrawerEvents,
        callback: impl FnMut(&DrawerEvent) + 'static,
    ) -> ListenerId {
        self.listeners.add(events, Box::new(callback))
    }

    /// Returns false if the listener was not registered
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn on_percent_change(&mut self, mut f: impl FnMut(f32) + 'static) -> ListenerId {
        self.add_listener(DrawerEvents::PERCENT_CHANGED, move |event| {
            if let DrawerEvent::PercentChanged(percent) = event {
                f(*percent);
            }
        })
    }

    pub fn on_state_change(&mut self, mut f: impl FnMut(DrawerState) + 'static) -> ListenerId {
        self.add_listener(DrawerEvents::STATE_CHANGED, move |event| {
            if let DrawerEvent::StateChanged(state) = event {
                f(*state);
            }
        })
    }

    pub fn on_open(&mut self, mut f: impl FnMut() + 'static) -> ListenerId {
        self.add_listener(DrawerEvents::OPENED, move |_| f())
    }

    pub fn on_close(&mut self, mut f: impl FnMut() + 'static) -> ListenerId {
        self.add_listener(DrawerEvents::CLOSED, move |_| f())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn state(&self) -> DrawerState {
        self.state
    }

    /// Base slide duration
    pub fn slide_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.slide_duration_ms))
    }

    /// Duration of the slide currently running, in milliseconds
    pub fn active_slide_duration_ms(&self) -> Option<f32> {
        self.animations.current_duration_ms()
    }

    /// Travel distance, known after the first layout
    pub fn max_translation(&self) -> Option<f32> {
        self.translation.map(|t| t.max())
    }

    /// Vertical offset of the sliding container, 0 when fully open
    pub fn offset(&self) -> f32 {
        self.translation.map_or(0.0, |t| t.offset())
    }

    pub fn translation_percent(&self) -> f32 {
        match self.translation {
            Some(t) => t.percent(),
            None if self.state == DrawerState::Open => 1.0,
            None => 0.0,
        }
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_animating(&self) -> bool {
        self.animations.is_animating()
    }

    pub fn is_content_enabled(&self) -> bool {
        self.content_enabled
    }

    pub fn is_laid_out(&self) -> bool {
        self.translation.is_some()
    }

    /// Drain what changed since the last call
    pub fn take_change_flags(&mut self) -> ChangeFlags {
        self.invalidation.take()
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Report the measured content height. Only the first report counts:
    /// it fixes the travel distance and settles the initial state silently.
    pub fn on_layout(&mut self, content_height: f32) {
        if self.translation.is_some() {
            log::trace!("Drawer relayout ignored, travel distance already fixed");
            return;
        }

        let max = (content_height - self.peek).max(0.0);
        log::debug!(
            "Drawer laid out: content {}px, peek {}px, travel {}px",
            content_height,
            self.peek,
            max
        );
        self.translation = Some(Translation::new(max));

        if self.initial_state == DrawerState::Open {
            self.apply_percent(1.0);
            self.state = DrawerState::Open;
            self.set_content_enabled(true);
        } else {
            self.apply_percent(0.0);
            self.state = DrawerState::Closed;
            self.set_content_enabled(false);
        }

        if let Some(intent) = self.pending.take() {
            log::debug!("Replaying deferred {:?}", intent);
            match intent {
                PendingIntent::Slide {
                    target,
                    animate,
                    trigger_listeners,
                } => self.slide_to(target, animate, trigger_listeners, 0.0),
                PendingIntent::Toggle => self.toggle(),
            }
        }
    }

    // ------------------------------------------------------------------
    // Programmatic control
    // ------------------------------------------------------------------

    pub fn open(&mut self) {
        self.open_with(true, true);
    }

    pub fn close(&mut self) {
        self.close_with(true, true);
    }

    /// Open, optionally snapping. `trigger_listeners` gates only the
    /// state-changed notification; `Opened` is always sent.
    pub fn open_with(&mut self, animate: bool, trigger_listeners: bool) {
        self.slide_to(DrawerState::Open, animate, trigger_listeners, 0.0);
    }

    /// Close, optionally snapping. `trigger_listeners` gates only the
    /// state-changed notification; `Closed` is always sent.
    pub fn close_with(&mut self, animate: bool, trigger_listeners: bool) {
        self.slide_to(DrawerState::Closed, animate, trigger_listeners, 0.0);
    }

    /// Close if open, open if closed. Does nothing mid-transition.
    pub fn toggle(&mut self) {
        if self.translation.is_none() {
            log::debug!("Drawer toggle requested before layout, deferring");
            self.pending = Some(PendingIntent::Toggle);
            return;
        }

        match self.state {
            DrawerState::Open => self.close(),
            DrawerState::Closed => self.open(),
            DrawerState::Opening | DrawerState::Closing => {
                log::trace!("Drawer toggle ignored while {:?}", self.state);
            }
        }
    }

    /// Move the drawer to `percent` (clamped to `[0, 1]`) without changing
    /// its state.
    pub fn set_translation_percent(&mut self, percent: f32) {
        if self.translation.is_none() {
            log::warn!("Drawer translation set before layout, ignoring");
            return;
        }
        self.apply_percent(percent);
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Handle a pointer event aimed at the handle
    pub fn event(&mut self, event: &Event) -> EventResponse {
        if self.translation.is_none() {
            return EventResponse::Ignored;
        }

        match self.gestures.handle(event) {
            Some(gesture) => {
                self.gesture(gesture);
                EventResponse::Handled
            }
            None if self.gestures.is_pressed() => EventResponse::Handled,
            None => EventResponse::Ignored,
        }
    }

    /// Apply a classified gesture. Hosts with their own gesture recognizer
    /// can call this directly instead of [`Drawer::event`].
    pub fn gesture(&mut self, gesture: Gesture) {
        let Some(translation) = self.translation else {
            log::trace!("Drawer gesture before layout ignored: {:?}", gesture);
            return;
        };

        match gesture {
            Gesture::Press => {
                // A new press while a drag is still open means its release
                // never arrived
                if self.dragging {
                    log::debug!("Drawer press during an unfinished drag, settling it");
                    self.release(translation);
                }
                self.set_pressed(true);
            }
            Gesture::Drag { delta_y, total_y } => {
                if !self.dragging {
                    self.dragging = true;
                    self.cancel_slide();
                    self.drag_origin = translation.offset();
                }
                self.velocity = 0.0;
                // Provisional direction, not reported to listeners
                self.state = if delta_y < 0.0 {
                    DrawerState::Closing
                } else {
                    DrawerState::Opening
                };
                let offset = translation.clamp_offset(self.drag_origin + total_y);
                self.set_content_enabled(true);
                self.apply_percent(translation.percent_for_offset(offset));
            }
            Gesture::Fling { velocity_y } => {
                self.dragging = false;
                self.set_pressed(false);
                self.translation_start = translation.offset();
                // Direction of the last drag tick decides, not the velocity sign
                match self.state {
                    DrawerState::Opening => {
                        self.slide_to(DrawerState::Open, true, true, velocity_y)
                    }
                    DrawerState::Closing => {
                        self.slide_to(DrawerState::Closed, true, true, velocity_y)
                    }
                    DrawerState::Open | DrawerState::Closed => {}
                }
            }
            Gesture::Tap if self.dragging => self.release(translation),
            Gesture::Tap => {
                self.toggle();
                self.set_pressed(false);
            }
            Gesture::Release => self.release(translation),
            Gesture::Cancel => self.set_pressed(false),
        }
    }

    // ------------------------------------------------------------------
    // Animation
    // ------------------------------------------------------------------

    /// Advance the running slide to `now`.
    /// Returns true if another frame is needed.
    pub fn advance_animations(&mut self, now: Instant) -> bool {
        let Some((handle, step)) = self.animations.advance(now) else {
            return false;
        };

        self.apply_percent(step.value());

        if step.is_finished() {
            match self.slide.take() {
                Some(slide) if slide.handle == handle => {
                    self.finish_slide(slide.target, slide.trigger_listeners);
                }
                other => {
                    log::trace!("Ignoring completion of superseded slide {:?}", handle);
                    self.slide = other;
                }
            }
        }

        self.animations.is_animating()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn slide_to(
        &mut self,
        target: DrawerState,
        animate: bool,
        trigger_listeners: bool,
        velocity: f32,
    ) {
        let Some(translation) = self.translation else {
            log::debug!("Drawer {:?} requested before layout, deferring", target);
            self.pending = Some(PendingIntent::Slide {
                target,
                animate,
                trigger_listeners,
            });
            return;
        };

        if self.state == target {
            return;
        }

        let opening = target == DrawerState::Open;
        self.translation_start = translation.offset();
        self.velocity = velocity;

        self.listeners.emit(if opening {
            &DrawerEvent::Opened
        } else {
            &DrawerEvent::Closed
        });

        if opening {
            self.set_content_enabled(true);
        }

        let to = if opening { 1.0 } else { 0.0 };

        if !animate {
            self.cancel_slide();
            self.apply_percent(to);
            self.finish_slide(target, trigger_listeners);
            return;
        }

        let transitional = if opening {
            DrawerState::Opening
        } else {
            DrawerState::Closing
        };
        self.change_state(transitional, trigger_listeners);

        let from = translation.percent_for_offset(self.translation_start);
        let settled = if opening {
            from >= 1.0
        } else {
            from < CLOSED_EPSILON
        };
        let duration_ms = if settled || translation.max() <= 0.0 {
            0.0
        } else {
            slide_duration_ms(
                self.slide_duration_ms as f32,
                self.velocity,
                self.translation_start,
            )
        };

        let handle = self.animations.start(
            from,
            to,
            Transition::new(duration_ms, self.timing.clone()),
        );
        log::debug!(
            "Drawer sliding {:.3} -> {} over {:.1}ms (velocity {})",
            from,
            to,
            duration_ms,
            self.velocity
        );
        self.slide = Some(Slide {
            handle,
            target,
            trigger_listeners,
        });
    }

    /// End a drag, settling toward whichever end is nearer
    fn release(&mut self, translation: Translation) {
        self.dragging = false;
        self.set_pressed(false);
        self.translation_start = translation.offset();
        if self.translation_start > -translation.max() / 2.0 {
            self.open();
        } else {
            self.close();
        }
    }

    fn finish_slide(&mut self, target: DrawerState, trigger_listeners: bool) {
        self.change_state(target, trigger_listeners);
        if target == DrawerState::Closed {
            self.set_content_enabled(false);
        }
    }

    fn cancel_slide(&mut self) {
        if let Some(handle) = self.animations.cancel() {
            log::trace!("Drawer slide {:?} cancelled", handle);
        }
        self.slide = None;
    }

    fn change_state(&mut self, state: DrawerState, trigger_listeners: bool) {
        if self.state != state {
            log::debug!("Drawer state {:?} -> {:?}", self.state, state);
        }
        self.state = state;
        if trigger_listeners {
            self.listeners.emit(&DrawerEvent::StateChanged(state));
        }
    }

    fn apply_percent(&mut self, percent: f32) {
        let Some(translation) = self.translation.as_mut() else {
            return;
        };
        let percent = translation.apply(percent);
        log::trace!("Drawer percent {:.3}, offset {:.1}", percent, translation.offset());
        self.handle.show_open(shows_open_handle(percent));
        self.invalidation.request_layout();
        self.listeners.emit(&DrawerEvent::PercentChanged(percent));
    }

    fn set_content_enabled(&mut self, enabled: bool) {
        if self.content_enabled == enabled {
            return;
        }
        self.content_enabled = enabled;
        if let Some(content) = self.content.as_mut() {
            content.set_enabled(enabled);
        }
    }

    fn set_pressed(&mut self, pressed: bool) {
        if self.handle.set_pressed(pressed) {
            self.invalidation.request_paint();
        }
    }
}

impl std::fmt::Debug for Drawer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Drawer")
            .field("state", &self.state)
            .field("translation", &self.translation)
            .field("dragging", &self.dragging)
            .field("velocity", &self.velocity)
            .field("content_enabled", &self.content_enabled)
            .field("listeners", &self.listeners)
            .finish()
    }
}
