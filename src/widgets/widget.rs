use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// A size along one axis: either sized to content or a fixed pixel amount
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Wrap the content
    #[default]
    Auto,
    /// Fixed size in pixels
    Px(f32),
}

impl From<f32> for Dimension {
    fn from(v: f32) -> Self {
        Dimension::Px(v)
    }
}

/// Pointer input delivered to the drawer handle.
///
/// The host only forwards events that no higher-priority gesture (such as a
/// nested scroll) has claimed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Finger or button went down
    PointerDown { x: f32, y: f32, time: Instant },
    /// Pointer moved while down
    PointerMove { x: f32, y: f32, time: Instant },
    /// Finger lifted or button released
    PointerUp { x: f32, y: f32, time: Instant },
    /// The platform aborted the gesture
    PointerCancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

/// A host-provided element placed inside the drawer.
///
/// Used for the content slot and for custom handle indicators. Rendering and
/// measurement stay with the host; the drawer only toggles interactivity and
/// opacity.
pub trait Element {
    /// Enable or disable this element and its interactive descendants
    fn set_enabled(&mut self, enabled: bool) {
        let _ = enabled;
    }

    /// Opacity applied by the drawer (0.0 hidden, 1.0 visible)
    fn set_opacity(&mut self, opacity: f32) {
        let _ = opacity;
    }
}

impl Element for Box<dyn Element> {
    fn set_enabled(&mut self, enabled: bool) {
        (**self).set_enabled(enabled)
    }
    fn set_opacity(&mut self, opacity: f32) {
        (**self).set_opacity(opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_rgb() {
        let color = Color::rgb(0.5, 0.6, 0.7);
        assert_eq!(color.r, 0.5);
        assert_eq!(color.g, 0.6);
        assert_eq!(color.b, 0.7);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex(0xFF0000);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.b, 0.0);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default(), Color::TRANSPARENT);
    }

    #[test]
    fn test_dimension_default_is_auto() {
        assert_eq!(Dimension::default(), Dimension::Auto);
        assert_eq!(Dimension::from(24.0), Dimension::Px(24.0));
    }
}
