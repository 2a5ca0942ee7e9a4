use crate::animation::TimingFunction;
use crate::widgets::handle::Indicator;
use crate::widgets::{Color, Dimension, ImageSource};

use super::state::DrawerState;

/// Construction options for a [`Drawer`](super::Drawer). Every field has a
/// default.
#[derive(Debug, Clone)]
pub struct DrawerConfig {
    /// Indicator shown on the handle while the drawer is mostly open
    pub open_indicator: Option<Indicator>,
    /// Indicator shown on the handle while the drawer is mostly closed
    pub closed_indicator: Option<Indicator>,
    pub open_color: Color,
    pub closed_color: Color,
    pub handle_width: Dimension,
    pub handle_height: Dimension,
    /// Text indicator size in pixels
    pub handle_text_size: f32,
    /// Host-assigned identifier for the handle element
    pub handle_id: Option<u32>,
    pub handle_background: Option<ImageSource>,
    /// Pixels of content left visible when closed
    pub peek: f32,
    /// Base slide duration in milliseconds
    pub slide_duration_ms: u32,
    /// Resting state applied on the first layout
    pub initial_state: DrawerState,
    pub timing: TimingFunction,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            open_indicator: None,
            closed_indicator: None,
            open_color: Color::BLACK,
            closed_color: Color::BLACK,
            handle_width: Dimension::Auto,
            handle_height: Dimension::Auto,
            handle_text_size: 10.0,
            handle_id: None,
            handle_background: None,
            peek: 0.0,
            slide_duration_ms: 250,
            initial_state: DrawerState::Closed,
            timing: TimingFunction::EaseInOut,
        }
    }
}

impl DrawerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_indicator(mut self, indicator: Indicator) -> Self {
        self.open_indicator = Some(indicator);
        self
    }

    pub fn closed_indicator(mut self, indicator: Indicator) -> Self {
        self.closed_indicator = Some(indicator);
        self
    }

    pub fn open_color(mut self, color: Color) -> Self {
        self.open_color = color;
        self
    }

    pub fn closed_color(mut self, color: Color) -> Self {
        self.closed_color = color;
        self
    }

    pub fn handle_width(mut self, width: impl Into<Dimension>) -> Self {
        self.handle_width = width.into();
        self
    }

    pub fn handle_height(mut self, height: impl Into<Dimension>) -> Self {
        self.handle_height = height.into();
        self
    }

    pub fn handle_text_size(mut self, size: f32) -> Self {
        self.handle_text_size = size;
        self
    }

    pub fn handle_id(mut self, id: u32) -> Self {
        self.handle_id = Some(id);
        self
    }

    pub fn handle_background(mut self, background: impl Into<ImageSource>) -> Self {
        self.handle_background = Some(background.into());
        self
    }

    pub fn peek(mut self, peek: f32) -> Self {
        self.peek = peek;
        self
    }

    pub fn slide_duration_ms(mut self, duration_ms: u32) -> Self {
        self.slide_duration_ms = duration_ms;
        self
    }

    /// Set the starting state. Transitional states map to the state they
    /// settle into.
    pub fn initial_state(mut self, state: DrawerState) -> Self {
        self.initial_state = state.resting();
        self
    }

    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }
}
