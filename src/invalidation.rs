use bitflags::bitflags;

bitflags! {
    /// Flags indicating what aspects of the drawer need to be updated by the host
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct ChangeFlags: u8 {
        /// Sliding container needs layout recalculation (offset changed)
        const NEEDS_LAYOUT = 0b01;
        /// Drawer needs repainting (handle opacity or pressed state changed)
        const NEEDS_PAINT  = 0b10;
    }
}

/// Accumulates change flags between two host passes.
#[derive(Debug, Default)]
pub(crate) struct Invalidation {
    flags: ChangeFlags,
}

impl Invalidation {
    pub fn request_layout(&mut self) {
        self.flags |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
    }

    pub fn request_paint(&mut self) {
        self.flags |= ChangeFlags::NEEDS_PAINT;
    }

    pub fn flags(&self) -> ChangeFlags {
        self.flags
    }

    /// Drain the accumulated flags, leaving them empty
    pub fn take(&mut self) -> ChangeFlags {
        std::mem::take(&mut self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_implies_paint() {
        let mut inv = Invalidation::default();
        inv.request_layout();
        assert!(inv.flags().contains(ChangeFlags::NEEDS_LAYOUT));
        assert!(inv.flags().contains(ChangeFlags::NEEDS_PAINT));
    }

    #[test]
    fn test_take_clears() {
        let mut inv = Invalidation::default();
        inv.request_paint();
        assert_eq!(inv.take(), ChangeFlags::NEEDS_PAINT);
        assert!(inv.flags().is_empty());
    }
}
