/// Discrete state of the drawer.
///
/// `Open` and `Closed` are resting states. `Opening` and `Closing` are only
/// held while a slide animation runs or a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawerState {
    Open,
    #[default]
    Closed,
    Opening,
    Closing,
}

impl DrawerState {
    pub fn is_resting(self) -> bool {
        matches!(self, DrawerState::Open | DrawerState::Closed)
    }

    /// The resting state this state settles into
    pub fn resting(self) -> DrawerState {
        match self {
            DrawerState::Open | DrawerState::Opening => DrawerState::Open,
            DrawerState::Closed | DrawerState::Closing => DrawerState::Closed,
        }
    }
}
