//! Shared gesture thresholds for the drawer handle.
//!
//! Values are in logical pixels and match common touch platform defaults.

use std::time::Duration;

/// Distance a pointer must travel from the press position before the press
/// becomes a drag. A press that never crosses it can still be a tap.
pub const TOUCH_SLOP: f32 = 8.0;

/// Minimum release velocity, in pixels per second, for a drag to end as a fling.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Maximum fling velocity in pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// A press held longer than this is not a tap.
pub const LONG_PRESS_TIMEOUT: Duration = Duration::from_millis(500);

/// Only movement within this window before the latest sample counts
/// towards the release velocity.
pub const VELOCITY_HISTORY: Duration = Duration::from_millis(150);
