/// Maps the drawer's openness to a vertical offset.
///
/// Percent 1.0 is fully open (offset 0), percent 0.0 is fully closed
/// (offset `-max`). `max` is the travel distance, fixed after the first
/// layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translation {
    max: f32,
    offset: f32,
    percent: f32,
}

impl Translation {
    pub fn new(max: f32) -> Self {
        Self {
            max: max.max(0.0),
            offset: 0.0,
            percent: 1.0,
        }
    }

    /// Travel distance between open and closed, in pixels
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Current vertical offset, in `[-max, 0]`
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Last applied percent, in `[0, 1]`
    pub fn percent(&self) -> f32 {
        self.percent
    }

    pub fn offset_for_percent(&self, percent: f32) -> f32 {
        self.max * (percent.clamp(0.0, 1.0) - 1.0)
    }

    /// Inverse of [`Translation::offset_for_percent`]. With no travel
    /// distance the drawer counts as fully open.
    pub fn percent_for_offset(&self, offset: f32) -> f32 {
        if self.max <= 0.0 {
            return 1.0;
        }
        (1.0 - (-offset / self.max)).clamp(0.0, 1.0)
    }

    pub fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(-self.max, 0.0)
    }

    /// Apply a percent, returning the clamped value that was applied
    pub(crate) fn apply(&mut self, percent: f32) -> f32 {
        let percent = percent.clamp(0.0, 1.0);
        self.percent = percent;
        self.offset = self.offset_for_percent(percent);
        percent
    }
}

/// Whether the open handle indicator is shown at `percent`
pub fn shows_open_handle(percent: f32) -> bool {
    percent > 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_endpoints() {
        let t = Translation::new(400.0);
        assert_eq!(t.offset_for_percent(1.0), 0.0);
        assert_eq!(t.offset_for_percent(0.0), -400.0);
        assert_eq!(t.offset_for_percent(0.25), -300.0);
    }

    #[test]
    fn test_apply_clamps() {
        let mut t = Translation::new(400.0);
        assert_eq!(t.apply(1.5), 1.0);
        assert_eq!(t.offset(), 0.0);
        assert_eq!(t.apply(-0.2), 0.0);
        assert_eq!(t.offset(), -400.0);
    }

    #[test]
    fn test_percent_for_offset() {
        let t = Translation::new(400.0);
        assert_eq!(t.percent_for_offset(-50.0), 0.875);
        assert_eq!(t.percent_for_offset(-400.0), 0.0);
        assert_eq!(t.percent_for_offset(-900.0), 0.0);
        assert_eq!(t.percent_for_offset(0.0), 1.0);
    }

    #[test]
    fn test_zero_travel_is_open() {
        let mut t = Translation::new(0.0);
        assert_eq!(t.percent_for_offset(0.0), 1.0);
        t.apply(0.0);
        assert_eq!(t.offset(), 0.0);
    }

    #[test]
    fn test_negative_travel_clamped() {
        assert_eq!(Translation::new(-20.0).max(), 0.0);
    }

    #[test]
    fn test_handle_threshold() {
        assert!(shows_open_handle(0.51));
        assert!(!shows_open_handle(0.5));
        assert!(!shows_open_handle(0.0));
        assert!(shows_open_handle(1.0));
    }
}
