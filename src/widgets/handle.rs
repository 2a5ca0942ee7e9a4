//! The drawer handle: the always-visible grab surface.
//!
//! A handle carries two indicators, one shown while the drawer is mostly open
//! and one while it is mostly closed. Exactly one of them is visible at a
//! time.

use std::fmt;

use crate::resources::ResourceResolver;

use super::image::ImageSource;
use super::widget::{Color, Dimension, Element};

/// Text indicator drawn by the host
#[derive(Debug, Clone, PartialEq)]
pub struct TextIndicator {
    pub text: String,
    pub color: Color,
    /// Font size in pixels
    pub size: f32,
}

/// Image indicator drawn by the host
#[derive(Debug, Clone, PartialEq)]
pub struct ImageIndicator {
    pub source: ImageSource,
    pub tint: Color,
}

/// Content of one handle indicator
#[derive(Default)]
pub enum HandleContent {
    /// Placeholder with nothing to draw
    #[default]
    Empty,
    Image(ImageIndicator),
    Text(TextIndicator),
    /// Host-provided element
    Custom(Box<dyn Element>),
}

impl HandleContent {
    pub fn text(text: impl Into<String>, color: Color, size: f32) -> Self {
        HandleContent::Text(TextIndicator {
            text: text.into(),
            color,
            size,
        })
    }

    pub fn image(source: impl Into<ImageSource>, tint: Color) -> Self {
        HandleContent::Image(ImageIndicator {
            source: source.into(),
            tint,
        })
    }

    pub fn custom(element: impl Element + 'static) -> Self {
        HandleContent::Custom(Box::new(element))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, HandleContent::Empty)
    }

    fn apply_opacity(&mut self, opacity: f32) {
        if let HandleContent::Custom(element) = self {
            element.set_opacity(opacity);
        }
    }
}

impl fmt::Debug for HandleContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandleContent::Empty => write!(f, "Empty"),
            HandleContent::Image(image) => f.debug_tuple("Image").field(image).finish(),
            HandleContent::Text(text) => f.debug_tuple("Text").field(text).finish(),
            HandleContent::Custom(_) => write!(f, "Custom"),
        }
    }
}

/// Configured source of a handle indicator
#[derive(Debug, Clone, PartialEq)]
pub enum Indicator {
    Image(ImageSource),
    Text(String),
    /// Named resource: looked up as an image first, then as a string
    Resource(String),
}

impl Indicator {
    /// Build the indicator content. Unresolvable resources fall back to
    /// [`HandleContent::Empty`].
    pub fn resolve(
        &self,
        resolver: &dyn ResourceResolver,
        color: Color,
        text_size: f32,
    ) -> HandleContent {
        match self {
            Indicator::Image(source) => HandleContent::image(source.clone(), color),
            Indicator::Text(text) => HandleContent::text(text.clone(), color, text_size),
            Indicator::Resource(name) => match resolver.image(name) {
                Ok(source) => HandleContent::image(source, color),
                Err(_) => match resolver.string(name) {
                    Ok(text) => HandleContent::text(text, color, text_size),
                    Err(err) => {
                        log::warn!("Handle indicator unavailable, using placeholder: {}", err);
                        HandleContent::Empty
                    }
                },
            },
        }
    }
}

/// Handle state owned by the drawer
#[derive(Debug, Default)]
pub struct Handle {
    open: HandleContent,
    closed: HandleContent,
    open_visible: bool,
    pressed: bool,
    background: Option<ImageSource>,
    id: Option<u32>,
    width: Dimension,
    height: Dimension,
}

impl Handle {
    pub(crate) fn new(
        open: HandleContent,
        closed: HandleContent,
        background: Option<ImageSource>,
        id: Option<u32>,
        width: Dimension,
        height: Dimension,
    ) -> Self {
        let mut handle = Self {
            open,
            closed,
            open_visible: false,
            pressed: false,
            background,
            id,
            width,
            height,
        };
        handle.apply_visibility();
        handle
    }

    pub fn open_indicator(&self) -> &HandleContent {
        &self.open
    }

    pub fn closed_indicator(&self) -> &HandleContent {
        &self.closed
    }

    /// Opacity of the open indicator, either 0.0 or 1.0
    pub fn open_opacity(&self) -> f32 {
        if self.open_visible {
            1.0
        } else {
            0.0
        }
    }

    /// Opacity of the closed indicator, either 0.0 or 1.0
    pub fn closed_opacity(&self) -> f32 {
        1.0 - self.open_opacity()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn background(&self) -> Option<&ImageSource> {
        self.background.as_ref()
    }

    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub fn width(&self) -> Dimension {
        self.width
    }

    pub fn height(&self) -> Dimension {
        self.height
    }

    /// Show the open indicator (and hide the closed one) or the reverse.
    /// Returns true if visibility changed.
    pub(crate) fn show_open(&mut self, open_visible: bool) -> bool {
        if self.open_visible == open_visible {
            return false;
        }
        self.open_visible = open_visible;
        self.apply_visibility();
        true
    }

    /// Returns true if the pressed state changed
    pub(crate) fn set_pressed(&mut self, pressed: bool) -> bool {
        std::mem::replace(&mut self.pressed, pressed) != pressed
    }

    pub(crate) fn replace_open(&mut self, content: HandleContent) -> HandleContent {
        let old = std::mem::replace(&mut self.open, content);
        self.apply_visibility();
        old
    }

    pub(crate) fn replace_closed(&mut self, content: HandleContent) -> HandleContent {
        let old = std::mem::replace(&mut self.closed, content);
        self.apply_visibility();
        old
    }

    pub(crate) fn set_background(&mut self, background: Option<ImageSource>) {
        self.background = background;
    }

    fn apply_visibility(&mut self) {
        let open = self.open_opacity();
        let closed = self.closed_opacity();
        self.open.apply_opacity(open);
        self.closed.apply_opacity(closed);
    }
}
