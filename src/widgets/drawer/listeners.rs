use bitflags::bitflags;

use super::state::DrawerState;

bitflags! {
    /// Event kinds a listener subscribes to
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct DrawerEvents: u8 {
        const PERCENT_CHANGED = 0b0001;
        const STATE_CHANGED   = 0b0010;
        const OPENED          = 0b0100;
        const CLOSED          = 0b1000;
    }
}

/// Notification delivered to drawer listeners
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawerEvent {
    /// Visible percent changed (drag, animation tick or direct set)
    PercentChanged(f32),
    /// Discrete state changed
    StateChanged(DrawerState),
    /// An open was started
    Opened,
    /// A close was started
    Closed,
}

impl DrawerEvent {
    pub fn kind(&self) -> DrawerEvents {
        match self {
            DrawerEvent::PercentChanged(_) => DrawerEvents::PERCENT_CHANGED,
            DrawerEvent::StateChanged(_) => DrawerEvents::STATE_CHANGED,
            DrawerEvent::Opened => DrawerEvents::OPENED,
            DrawerEvent::Closed => DrawerEvents::CLOSED,
        }
    }
}

/// Identity of a registered listener, used for removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type DrawerCallback = Box<dyn FnMut(&DrawerEvent)>;

struct Entry {
    id: ListenerId,
    events: DrawerEvents,
    callback: DrawerCallback,
}

/// Ordered listener registry. Notification follows registration order and
/// the same callback may be registered more than once.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<Entry>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, events: DrawerEvents, callback: DrawerCallback) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push(Entry {
            id,
            events,
            callback,
        });
        id
    }

    /// Returns false if `id` is not registered
    pub fn remove(&mut self, id: ListenerId) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn emit(&mut self, event: &DrawerEvent) {
        let kind = event.kind();
        for entry in self.entries.iter_mut() {
            if entry.events.contains(kind) {
                (entry.callback)(event);
            }
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(log: &Rc<RefCell<Vec<String>>>, name: &'static str) -> DrawerCallback {
        let log = log.clone();
        Box::new(move |event| log.borrow_mut().push(format!("{name}:{event:?}")))
    }

    #[test]
    fn test_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();
        listeners.add(DrawerEvents::all(), recorder(&log, "a"));
        listeners.add(DrawerEvents::all(), recorder(&log, "b"));
        listeners.emit(&DrawerEvent::Opened);
        assert_eq!(*log.borrow(), vec!["a:Opened", "b:Opened"]);
    }

    #[test]
    fn test_subscription_mask() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();
        listeners.add(DrawerEvents::CLOSED, recorder(&log, "c"));
        listeners.emit(&DrawerEvent::Opened);
        listeners.emit(&DrawerEvent::PercentChanged(0.5));
        listeners.emit(&DrawerEvent::Closed);
        assert_eq!(*log.borrow(), vec!["c:Closed"]);
    }

    #[test]
    fn test_duplicates_and_removal() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();
        let first = listeners.add(DrawerEvents::all(), recorder(&log, "x"));
        listeners.add(DrawerEvents::all(), recorder(&log, "x"));
        assert_eq!(listeners.len(), 2);

        assert!(listeners.remove(first));
        assert!(!listeners.remove(first));
        listeners.emit(&DrawerEvent::Closed);
        assert_eq!(*log.borrow(), vec!["x:Closed"]);
    }

    #[test]
    fn test_remove_unknown() {
        let mut other = Listeners::new();
        let foreign = other.add(DrawerEvents::all(), Box::new(|_| {}));
        let mut listeners = Listeners::new();
        assert!(!listeners.remove(foreign));
        assert!(listeners.is_empty());
    }
}
