pub mod drawer;
pub mod handle;
pub mod image;
pub mod widget;

pub use drawer::{
    Drawer, DrawerConfig, DrawerEvent, DrawerEvents, DrawerState, ListenerId, Translation,
};
pub use handle::{Handle, HandleContent, ImageIndicator, Indicator, TextIndicator};
pub use image::ImageSource;
pub use widget::{Color, Dimension, Element, Event, EventResponse};
