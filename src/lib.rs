//! A vertically sliding drawer widget.
//!
//! The drawer is a state machine over four states (open, closed, opening,
//! closing) fed by pointer gestures, programmatic calls and frame ticks. It
//! does not render anything itself: the host lays out the content and
//! handle, forwards pointer events, calls
//! [`Drawer::advance_animations`](widgets::Drawer::advance_animations) every
//! frame and reads back the offset and handle opacities.

pub mod animation;
pub mod error;
pub mod gesture;
pub mod invalidation;
pub mod resources;
pub mod widgets;

pub use error::{DrawerError, Result};

pub mod prelude {
    pub use crate::animation::{TimingFunction, Transition};
    pub use crate::error::{DrawerError, Result};
    pub use crate::gesture::Gesture;
    pub use crate::invalidation::ChangeFlags;
    pub use crate::resources::{NoResources, ResourceResolver, StaticResources};
    pub use crate::widgets::{
        Color, Dimension, Drawer, DrawerConfig, DrawerEvent, DrawerEvents, DrawerState, Element,
        Event, EventResponse, HandleContent, ImageSource, Indicator, ListenerId,
    };
}
